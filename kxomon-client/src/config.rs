//! Monitor configuration loading
//!
//! Channel paths resolve in precedence order: command line, then the config
//! file, then the built-in defaults. A missing or unparsable config file
//! falls back to defaults with a warning.

use std::path::PathBuf;

use kxomon_utils::paths;

use crate::cli::Args;

/// Monitor configuration file contents
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    paths: PathsConfig,
}

/// Engine channel path overrides
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
struct PathsConfig {
    device: Option<PathBuf>,
    control: Option<PathBuf>,
    probe: Option<PathBuf>,
}

/// Fully resolved channel paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPaths {
    pub device: PathBuf,
    pub control: PathBuf,
    pub probe: PathBuf,
}

impl ChannelPaths {
    /// Apply the precedence order: CLI over config file over defaults.
    pub fn resolve(args: &Args, config: &MonitorConfig) -> Self {
        Self {
            device: args
                .device
                .clone()
                .or_else(|| config.paths.device.clone())
                .unwrap_or_else(paths::default_device_path),
            control: args
                .control
                .clone()
                .or_else(|| config.paths.control.clone())
                .unwrap_or_else(paths::default_control_path),
            probe: args
                .probe
                .clone()
                .or_else(|| config.paths.probe.clone())
                .unwrap_or_else(paths::default_probe_path),
        }
    }
}

/// Load the config file from the XDG config dir.
///
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_config() -> MonitorConfig {
    let path = paths::config_file();

    if !path.exists() {
        tracing::debug!("Config file not found, using defaults");
        return MonitorConfig::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str::<MonitorConfig>(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to parse config file: {}, using defaults", e);
                MonitorConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config file: {}, using defaults", e);
            MonitorConfig::default()
        }
    }
}
