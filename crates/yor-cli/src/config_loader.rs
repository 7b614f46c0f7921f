use crate::output::Palette;
use anyhow::{bail, Result};
use std::path::PathBuf;
use yor_config::{load_config, Config, OutputFormat, DEFAULT_CONFIG_FILE};

/// Output choices after layering CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub palette: Palette,
    pub json_file: Option<PathBuf>,
}

pub fn load_effective_config(explicit_path: Option<&PathBuf>) -> Result<Config> {
    match explicit_path {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {:?}", path);
            }
            load_config(path)
        }
        None => load_config(&PathBuf::from(DEFAULT_CONFIG_FILE)),
    }
}

pub fn resolve_output(
    config: &Config,
    no_color: bool,
    format: Option<OutputFormat>,
    json_file: Option<PathBuf>,
) -> OutputSettings {
    let color = config.output.color && !no_color && std::env::var_os("NO_COLOR").is_none();

    OutputSettings {
        format: format.unwrap_or(config.output.format),
        palette: Palette::new(color),
        json_file: json_file.or_else(|| config.output.json_file.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.output.json_file = Some(PathBuf::from("from-config.json"));

        let settings = resolve_output(
            &config,
            true,
            Some(OutputFormat::Json),
            Some(PathBuf::from("from-flag.json")),
        );

        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.palette.enabled());
        assert_eq!(settings.json_file, Some(PathBuf::from("from-flag.json")));
    }

    #[test]
    fn test_config_used_without_flags() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.output.color = false;
        config.output.json_file = Some(PathBuf::from("report.json"));

        let settings = resolve_output(&config, false, None, None);

        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.palette.enabled());
        assert_eq!(settings.json_file, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(load_effective_config(Some(&path)).is_err());
    }
}
