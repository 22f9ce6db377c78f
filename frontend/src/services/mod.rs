pub mod browser_store;
pub mod location;
pub mod logging;
