//! Control attribute record
//!
//! The engine exposes a fixed six-byte text attribute. Byte 0 is the display
//! flag (`'0'`/`'1'`), byte 4 is the quit flag; the remaining bytes belong to
//! the engine and must be preserved on write-back. The monitor always writes
//! the full record with exactly one byte changed.

/// Wire size of the control attribute.
pub const CONTROL_RECORD_LEN: usize = 6;

const DISPLAY_BYTE: usize = 0;
const QUIT_BYTE: usize = 4;

/// In-memory copy of the six-byte control attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRecord([u8; CONTROL_RECORD_LEN]);

impl ControlRecord {
    /// Parse a record from a raw read. Returns `None` on a short read, which
    /// callers treat as "no command recognized" for that event.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let record: [u8; CONTROL_RECORD_LEN] = bytes.get(..CONTROL_RECORD_LEN)?.try_into().ok()?;
        Some(Self(record))
    }

    /// Whether the display flag byte currently reads enabled.
    pub fn display_enabled(&self) -> bool {
        self.0[DISPLAY_BYTE] != b'0'
    }

    /// Flip the display flag between `'0'` and `'1'`, leaving every other
    /// byte untouched. Returns the new enabled state.
    pub fn toggle_display(&mut self) -> bool {
        self.0[DISPLAY_BYTE] = if self.display_enabled() { b'0' } else { b'1' };
        self.display_enabled()
    }

    /// Set the quit flag, leaving every other byte untouched.
    pub fn request_quit(&mut self) {
        self.0[QUIT_BYTE] = b'1';
    }

    /// Full record for write-back.
    pub fn as_bytes(&self) -> &[u8; CONTROL_RECORD_LEN] {
        &self.0
    }
}
