use crate::config::Config;
use anyhow::{bail, Result};
use std::collections::HashSet;

pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(path) = &config.output.json_file {
        if path.as_os_str().is_empty() {
            bail!("Invalid config field 'output.json_file': must not be empty");
        }
    }

    let mut seen = HashSet::new();
    for group in &config.tags.groups {
        if group.trim().is_empty() {
            bail!("Invalid config field 'tags.groups': group names must not be empty");
        }
        if !seen.insert(group.as_str()) {
            bail!("Invalid config field 'tags.groups': '{}' is listed twice", group);
        }
    }

    Ok(())
}
