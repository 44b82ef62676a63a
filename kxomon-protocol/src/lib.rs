//! Wire definitions shared between the kxo engine and the monitor
//!
//! The engine speaks two narrow channels: a binary status stream read from
//! its device node, and a fixed-width text attribute used for control
//! commands. This crate holds the pure types and codecs for both; all I/O is
//! performed by callers.

pub mod codec;
pub mod control;
pub mod status;

pub use codec::{StatusCodec, StatusCodecError};
pub use control::{ControlRecord, CONTROL_RECORD_LEN};
pub use status::{Occupant, StatusRecord, StatusWord, NO_CELL};
