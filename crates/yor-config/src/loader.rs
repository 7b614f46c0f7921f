use crate::config::Config;
use crate::validate::validate_config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = ".yor.toml";

/// Loads yor settings from `path`. A missing file means all defaults.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read yor settings from {}", path.display()))?;

    parse_config(&content)
        .with_context(|| format!("Invalid yor settings in {}", path.display()))
}

/// Parses and validates the text of a `.yor.toml`.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).context("Failed to parse .yor.toml")?;
    validate_config(&config)?;
    Ok(config)
}
