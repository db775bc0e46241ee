// Configuration file loading for the player arrows overlay

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::core::config::ArrowConfig;

// =============================================================================
// CONFIG LOADING
// =============================================================================

/// Config file name, looked up in the directory the host hands us
pub const CONFIG_FILENAME: &str = "player_arrows.toml";

#[derive(Debug)]
pub enum ConfigError {
    ReadError(std::io::Error),
    ParseError(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(e) => write!(f, "Failed to read config file: {}", e),
            ConfigError::ParseError(e) => write!(f, "Failed to parse config file: {}", e),
        }
    }
}

/// Load the overlay configuration from `dir`.
///
/// A missing file is not an error: the overlay runs on defaults and the
/// host may write a template later. Unknown keys are ignored, missing
/// keys fall back per field.
pub fn load(dir: &Path) -> Result<ArrowConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);

    debug!(
        path = %config_path.display(),
        "[config] Looking for overlay config"
    );

    if !config_path.exists() {
        debug!("[config] No overlay config found, using defaults");
        return Ok(ArrowConfig::default());
    }

    let contents = fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
    let config: ArrowConfig = toml::from_str(&contents).map_err(ConfigError::ParseError)?;
    info!(
        path = %config_path.display(),
        "[config] Loaded overlay config"
    );
    Ok(config)
}
