//! Logging infrastructure for kxomon
//!
//! Provides unified logging setup using the tracing ecosystem. The monitor
//! owns the terminal while it runs, so the default destination is a file
//! under the state directory rather than stderr.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::{paths, MonitorError, Result};

/// Log output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// Log to stderr (for development)
    Stderr,
    /// Log to file (default; the board display owns the terminal)
    File,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Output destination
    pub output: LogOutput,
    /// Log level filter (e.g., "info", "kxomon=debug")
    pub filter: String,
    /// Optional custom log file name (defaults to "kxomon.log")
    pub file_name: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            output: LogOutput::File,
            filter: std::env::var("KXOMON_LOG").unwrap_or_else(|_| "warn".into()),
            file_name: None,
        }
    }
}

impl LogConfig {
    /// Create config for the monitor (file logging)
    pub fn monitor() -> Self {
        Self::default()
    }

    /// Create config for development (verbose stderr)
    pub fn development() -> Self {
        Self {
            output: LogOutput::Stderr,
            filter: "debug".into(),
            file_name: None,
        }
    }

    /// Override the filter string
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }
}

/// Initialize logging with default configuration
///
/// Uses KXOMON_LOG env var for filter, defaults to "warn"
pub fn init_logging() -> Result<()> {
    init_logging_with_config(LogConfig::default())
}

/// Initialize logging with custom configuration
pub fn init_logging_with_config(config: LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| MonitorError::config(format!("Invalid log filter: {}", e)))?;

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    match config.output {
        LogOutput::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer.with_writer(std::io::stderr))
                .try_init()
                .map_err(|e| MonitorError::internal(format!("Failed to init logging: {}", e)))?;
        }
        LogOutput::File => {
            let log_dir = paths::log_dir();
            std::fs::create_dir_all(&log_dir).map_err(|e| MonitorError::FileWrite {
                path: log_dir.clone(),
                source: e,
            })?;

            let log_path = log_dir.join(config.file_name.as_deref().unwrap_or("kxomon.log"));
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .map_err(|e| MonitorError::FileWrite {
                    path: log_path,
                    source: e,
                })?;

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer.with_writer(file).with_ansi(false))
                .try_init()
                .map_err(|e| MonitorError::internal(format!("Failed to init logging: {}", e)))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_logs_to_file() {
        let config = LogConfig::default();
        assert_eq!(config.output, LogOutput::File);
        assert!(config.file_name.is_none());
    }

    #[test]
    fn test_development_config() {
        let config = LogConfig::development();
        assert_eq!(config.output, LogOutput::Stderr);
        assert_eq!(config.filter, "debug");
    }

    #[test]
    fn test_with_filter_override() {
        let config = LogConfig::default().with_filter("kxomon=trace");
        assert_eq!(config.filter, "kxomon=trace");
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let config = LogConfig {
            output: LogOutput::Stderr,
            filter: "not a [valid] filter!!!".into(),
            file_name: None,
        };
        let result = init_logging_with_config(config);
        assert!(matches!(result, Err(MonitorError::Config(_))));
    }
}
