//! Common utilities for kxomon
//!
//! Unified error type, logging setup, and well-known filesystem paths.

pub mod error;
pub mod logging;
pub mod paths;

pub use error::{MonitorError, Result};
pub use logging::{init_logging, init_logging_with_config, LogConfig, LogOutput};
pub use paths::{config_file, default_control_path, default_device_path, default_probe_path, log_dir};
