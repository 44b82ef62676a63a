//! Event multiplexing
//!
//! One call to [`Multiplexer::next`] blocks until the keyboard or the status
//! device has data, then yields exactly one event. When both are ready the
//! keyboard is served first so key latency stays low while the engine floods
//! status updates.

use std::io;
use std::path::Path;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures::{Stream, StreamExt};
use tokio::io::AsyncRead;
use tokio_util::codec::FramedRead;

use kxomon_protocol::{StatusCodec, StatusRecord};
use kxomon_utils::{MonitorError, Result};

/// One dispatched event from either input source.
#[derive(Debug)]
pub enum MuxEvent {
    /// Key press from the control source.
    Key(KeyEvent),
    /// Record from the status device.
    Status(StatusRecord),
}

/// Waits on the two input sources and reports whichever is ready.
///
/// Generic over the underlying streams so the wait logic is testable without
/// a terminal or a device node.
pub struct Multiplexer<K, R> {
    keys: K,
    status: FramedRead<R, StatusCodec>,
}

impl Multiplexer<EventStream, tokio::fs::File> {
    /// Open the status device and attach the terminal event stream.
    pub async fn open(device: &Path) -> Result<Self> {
        let file = tokio::fs::File::open(device)
            .await
            .map_err(|e| MonitorError::FileRead {
                path: device.to_path_buf(),
                source: e,
            })?;
        Ok(Self::from_parts(EventStream::new(), file))
    }
}

impl<K, R> Multiplexer<K, R>
where
    K: Stream<Item = io::Result<Event>> + Unpin,
    R: AsyncRead + Unpin,
{
    pub fn from_parts(keys: K, status_source: R) -> Self {
        Self {
            keys,
            status: FramedRead::new(status_source, StatusCodec::new()),
        }
    }

    /// Block until one source is ready and return its event. Any stream
    /// failure, including either channel ending, is a fatal multiplexing
    /// error; the caller does not retry.
    pub async fn next(&mut self) -> Result<MuxEvent> {
        loop {
            tokio::select! {
                biased;

                event = self.keys.next() => match event {
                    Some(Ok(Event::Key(key))) => return Ok(MuxEvent::Key(key)),
                    // Resize/focus/paste noise is not a control command
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        return Err(MonitorError::mux(format!("keyboard read failed: {e}")))
                    }
                    None => return Err(MonitorError::mux("keyboard stream closed")),
                },

                record = self.status.next() => match record {
                    Some(Ok(record)) => return Ok(MuxEvent::Status(record)),
                    Some(Err(e)) => {
                        return Err(MonitorError::mux(format!("status read failed: {e}")))
                    }
                    None => return Err(MonitorError::mux("status channel closed")),
                },
            }
        }
    }
}
