use log::LevelFilter;
use portal_frontend::services::logging::ConsoleLogger;
use portal_frontend::App;

fn main() {
    console_error_panic_hook::set_once();
    ConsoleLogger::init(LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
