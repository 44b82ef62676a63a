//! kxomon - terminal monitor for the kxo kernel tic-tac-toe engine
//!
//! Watches the engine's binary status stream, renders the board, archives
//! every completed game, and sends display-toggle / quit commands over the
//! engine's control attribute. The archived games are printed when the
//! monitor shuts down.

use kxomon_utils::{init_logging_with_config, LogConfig, Result};

mod board;
mod cli;
mod config;
mod control;
mod event;
mod history;
mod probe;
mod session;
mod terminal;

use cli::Args;
use config::ChannelPaths;
use control::ControlChannel;
use event::Multiplexer;
use session::Monitor;
use terminal::Terminal;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments first (before terminal setup)
    let args = Args::parse_args();

    // Initialize logging to file (not stderr, since the board owns the terminal)
    let log_config = match &args.log_filter {
        Some(filter) => LogConfig::monitor().with_filter(filter),
        None => LogConfig::monitor(),
    };
    init_logging_with_config(log_config)?;
    tracing::info!("kxomon starting");

    match run_monitor(args).await {
        Ok(()) => {
            tracing::info!("kxomon exiting normally");
            Ok(())
        }
        Err(e) => {
            tracing::error!("kxomon error: {}", e);
            // Print error to stderr after terminal restoration
            eprintln!("Error: {}", e);
            Err(e)
        }
    }
}

async fn run_monitor(args: Args) -> Result<()> {
    let config = config::load_config();
    let paths = ChannelPaths::resolve(&args, &config);
    tracing::debug!(?paths, "resolved channel paths");

    // The engine must be loaded and live before anything touches its channels
    probe::check(&paths.probe)?;

    let mux = Multiplexer::open(&paths.device).await?;
    let control = ControlChannel::new(paths.control.clone());
    let terminal = Terminal::new()?;

    let mut monitor = Monitor::new(mux, control, terminal);
    monitor.run().await?;

    // Dropping the monitor restores the terminal; the report goes to a
    // cooked stdout
    let session = monitor.into_session();
    for line in session.report_lines() {
        println!("{line}");
    }
    Ok(())
}
