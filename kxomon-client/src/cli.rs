//! Command-line argument parsing for kxomon
//!
//! Uses clap for argument parsing with derive macros.

use clap::Parser;
use std::path::PathBuf;

/// kxomon - terminal monitor for the kxo kernel tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Status device node
    ///
    /// Override the character device the engine publishes status records on.
    #[arg(long, env = "KXOMON_DEVICE")]
    pub device: Option<PathBuf>,

    /// Control attribute file
    ///
    /// Override the attribute file used for display-toggle and quit commands.
    #[arg(long, env = "KXOMON_CONTROL")]
    pub control: Option<PathBuf>,

    /// Liveness probe file
    ///
    /// Override the init-state file checked before the monitor starts.
    #[arg(long, env = "KXOMON_PROBE")]
    pub probe: Option<PathBuf>,

    /// Log filter, e.g. "info" or "kxomon=debug"
    ///
    /// Overrides the KXOMON_LOG environment variable.
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
