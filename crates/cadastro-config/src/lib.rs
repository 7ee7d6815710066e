mod config;
mod error;
mod log_level;
mod logging_config;
mod ui_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use ui_config::UiConfig;

const CONFIG_DIR_ENV: &str = "CADASTRO_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".cadastro";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const MIN_UI_WIDTH: u16 = 20;
const MAX_UI_WIDTH: u16 = 400;
const DEFAULT_UI_WIDTH: u16 = 80;
const DEFAULT_UI_COMPACT_BELOW: u16 = 60;
