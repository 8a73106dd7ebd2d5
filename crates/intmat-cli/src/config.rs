use std::path::Path;

use anyhow::{Context, Result};
use intmat::{LoadMode, MatrixConfig};

/// Load a configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<MatrixConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: MatrixConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Merge the optional config file with command-line overrides.
pub fn resolve_config(config_path: Option<&Path>, lax: bool) -> Result<MatrixConfig> {
    let mut config = match config_path {
        Some(path) => {
            log::info!("[intmat] Using config: {:?}", path);
            load_config(path)?
        }
        None => {
            log::debug!("[intmat] No config provided; using defaults.");
            MatrixConfig::default()
        }
    };
    if lax {
        config.load_mode = LoadMode::Lax;
    }
    Ok(config)
}
