//! Configuration loading from JSON or TOML files

use anyhow::Result;
use std::path::Path;
use tracing::warn;

use super::types::RouterConfig;

/// On-disk format of a router config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// `.json` files are JSON, everything else TOML
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Parse router config text in the given format
pub fn parse_router_config(content: &str, format: ConfigFormat) -> Result<RouterConfig> {
    let config: RouterConfig = match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(config)
}

/// Load router config from a file
///
/// Validation problems are logged, not returned as errors.
pub fn load_router_config(path: impl AsRef<Path>) -> Result<RouterConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
    })?;

    let config = parse_router_config(&content, ConfigFormat::from_path(path)).map_err(|e| {
        anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
    })?;

    for problem in config.validate() {
        warn!("{problem}");
    }

    tracing::info!(
        "Loaded {} router(s) from {}",
        config.routers.len(),
        path.display()
    );
    Ok(config)
}
