use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use backend::PortalConfig;

pub const ADDR_VAR: &str = "PORTAL_ADDR";
pub const DIST_DIR_VAR: &str = "PORTAL_DIST_DIR";

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DIST_DIR: &str = "frontend/dist";

/// Where to listen, what to serve, and which deployment it is
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub addr: SocketAddr,
    pub dist_dir: PathBuf,
    pub portal: PortalConfig,
}

impl ServerSettings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse()
            .with_context(|| format!("{} is not a socket address: {:?}", ADDR_VAR, addr))?;
        let dist_dir = lookup(DIST_DIR_VAR).unwrap_or_else(|| DEFAULT_DIST_DIR.to_string());

        Ok(Self {
            addr,
            dist_dir: PathBuf::from(dist_dir),
            portal: PortalConfig::from_lookup(lookup),
        })
    }
}
