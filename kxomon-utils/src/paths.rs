//! Path utilities for kxomon
//!
//! Default locations of the engine's channel files plus XDG-compliant
//! config and log directories for the monitor itself.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Application identifier for XDG directories
const APP_NAME: &str = "kxomon";

/// Get project directories
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Default status device node exposed by the engine.
pub fn default_device_path() -> PathBuf {
    PathBuf::from("/dev/kxo")
}

/// Default control attribute file exposed by the engine.
pub fn default_control_path() -> PathBuf {
    PathBuf::from("/sys/class/kxo/kxo/kxo_state")
}

/// Default liveness probe file for the engine module.
pub fn default_probe_path() -> PathBuf {
    PathBuf::from("/sys/module/kxo/initstate")
}

/// Get the configuration directory
///
/// Location: `$XDG_CONFIG_HOME/kxomon` or `~/.config/kxomon`
pub fn config_dir() -> PathBuf {
    project_dirs()
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(|| fallback_dir(".config"))
}

/// Get the main configuration file path
///
/// Location: `$XDG_CONFIG_HOME/kxomon/config.toml`
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Get the log directory
///
/// Location: `$XDG_STATE_HOME/kxomon` or `~/.local/state/kxomon`, with a
/// `/tmp/kxomon-$UID` fallback when no home directory is available.
pub fn log_dir() -> PathBuf {
    project_dirs()
        .and_then(|p| p.state_dir().map(|d| d.to_path_buf()))
        .unwrap_or_else(|| {
            // SAFETY: getuid() is always safe to call
            let uid = unsafe { libc::getuid() };
            PathBuf::from(format!("/tmp/{}-{}", APP_NAME, uid))
        })
}

fn fallback_dir(subdir: &str) -> PathBuf {
    std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(subdir).join(APP_NAME))
        .unwrap_or_else(|_| PathBuf::from(format!("/tmp/{APP_NAME}")))
}
