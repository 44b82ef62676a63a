//! Record codec for the status channel
//!
//! The device emits fixed-size records: one packed status byte followed by a
//! native-endian `i32` cell index. The codec buffers partial reads and yields
//! one [`StatusRecord`] per complete record.

use bytes::{Buf, BytesMut};
use tokio_util::codec::Decoder;

use crate::status::StatusRecord;

/// Wire size of one status record: `{ u8 status; i32 cell_index }`.
pub const STATUS_RECORD_LEN: usize = 5;

/// Status codec error
#[derive(Debug, thiserror::Error)]
pub enum StatusCodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Decoder for the engine's status records.
///
/// Every byte pattern is a valid record; the codec has no content error case.
#[derive(Debug, Default)]
pub struct StatusCodec;

impl StatusCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for StatusCodec {
    type Item = StatusRecord;
    type Error = StatusCodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.len() < STATUS_RECORD_LEN {
            src.reserve(STATUS_RECORD_LEN - src.len());
            return Ok(None);
        }

        let status = src.get_u8();
        let cell_index = src.get_i32_ne();
        Ok(Some(StatusRecord::from_wire(status, cell_index)))
    }
}
