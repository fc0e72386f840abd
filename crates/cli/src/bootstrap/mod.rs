pub mod config;
pub mod logging;

pub use config::{load_config, ConfigArgs};
pub use logging::init_logging;
