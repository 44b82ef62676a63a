//! Terminal mode management and frame output
//!
//! Raw mode is enabled for the lifetime of the guard so single key presses
//! reach the event loop unbuffered, and restored on drop. Output processing
//! is off in raw mode, so every newline written while the guard is alive is
//! translated to CR LF.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};

use kxomon_utils::Result;

/// Terminal wrapper that handles raw mode and frame drawing.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    /// Enable raw mode for unbuffered key input.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self { out: io::stdout() })
    }

    /// Clear the screen and draw a full board frame.
    pub fn draw_frame(&mut self, frame: &str) -> Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        self.out.write_all(raw_newlines(frame).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Print a one-line status message below the current output.
    pub fn status_line(&mut self, message: &str) -> Result<()> {
        self.out.write_all(b"\r\n")?;
        self.out.write_all(message.as_bytes())?;
        self.out.write_all(b"\r\n")?;
        self.out.flush()?;
        Ok(())
    }

    fn restore() -> Result<()> {
        disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = Self::restore() {
            tracing::error!("Failed to restore terminal: {}", e);
        }
    }
}

/// Translate `\n` to `\r\n` for output while raw mode is active.
fn raw_newlines(text: &str) -> String {
    text.replace('\n', "\r\n")
}
