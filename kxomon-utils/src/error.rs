//! Error types for kxomon
//!
//! Provides a unified error type used across all kxomon crates.

use std::path::PathBuf;

/// Main error type for monitor operations
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    // === IO Errors ===

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    // === Engine Errors ===

    #[error("Engine not live: probe at {path} reports '{state}'")]
    EngineNotLive { path: PathBuf, state: String },

    #[error("Engine probe not found at {path}")]
    ProbeMissing { path: PathBuf },

    // === Event Loop Errors ===

    #[error("Multiplexing failure: {0}")]
    Mux(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    // === Configuration Errors ===

    #[error("Configuration error: {0}")]
    Config(String),

    // === Internal Errors ===

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MonitorError {
    /// Create a multiplexing error
    pub fn mux(msg: impl Into<String>) -> Self {
        Self::Mux(msg.into())
    }

    /// Create a protocol error
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias using MonitorError
pub type Result<T> = std::result::Result<T, MonitorError>;
