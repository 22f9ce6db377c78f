//! Serves a built portal bundle for one deployment.

mod routes;
mod settings;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use settings::ServerSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = ServerSettings::from_env()?;
    info!(
        "Serving {} ({:?}) from {}",
        settings.portal.business_name,
        settings.portal.variant,
        settings.dist_dir.display()
    );

    let app = routes::router(&settings.portal, &settings.dist_dir)?;

    let listener = tokio::net::TcpListener::bind(settings.addr)
        .await
        .with_context(|| format!("could not bind {}", settings.addr))?;
    info!("Listening on http://{}{}/", settings.addr, settings.portal.base_path);

    axum::serve(listener, app).await?;

    Ok(())
}
