mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<ConverterConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: ConverterConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "gallery-webp.toml";

/// Load config from the given path, `./gallery-webp.toml`, or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<ConverterConfig> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let path = Path::new(DEFAULT_CONFIG_FILE);
    if path.exists() {
        return load_config(path);
    }

    Ok(ConverterConfig::default())
}

/// Validate configuration
fn validate_config(config: &ConverterConfig) -> Result<()> {
    if config.root.as_os_str().is_empty() {
        anyhow::bail!("Root directory cannot be empty");
    }

    if config.root.is_file() {
        anyhow::bail!("Root {:?} is a file, not a directory", config.root);
    }

    Ok(())
}
