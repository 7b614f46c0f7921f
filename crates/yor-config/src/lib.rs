pub mod config;
pub mod loader;
pub mod validate;

pub use config::{Config, OutputConfig, OutputFormat, TagsConfig};
pub use loader::{load_config, parse_config, DEFAULT_CONFIG_FILE};
