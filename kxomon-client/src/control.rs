//! Control channel I/O
//!
//! Commands to the engine are read-modify-write cycles on its six-byte
//! control attribute. Each command re-reads the record so engine-owned bytes
//! are never clobbered with stale values.

use std::path::PathBuf;

use kxomon_protocol::ControlRecord;
use kxomon_utils::{MonitorError, Result};

/// Handle on the engine's control attribute file.
#[derive(Debug, Clone)]
pub struct ControlChannel {
    path: PathBuf,
}

impl ControlChannel {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Flip the display flag. Returns the record's new enabled state, or
    /// `None` when the read came back short (no command issued).
    pub async fn toggle_display(&self) -> Result<Option<bool>> {
        let Some(mut record) = self.read_record().await? else {
            return Ok(None);
        };
        let enabled = record.toggle_display();
        self.write_record(&record).await?;
        Ok(Some(enabled))
    }

    /// Set the quit flag. Returns false when the read came back short.
    pub async fn request_quit(&self) -> Result<bool> {
        let Some(mut record) = self.read_record().await? else {
            return Ok(false);
        };
        record.request_quit();
        self.write_record(&record).await?;
        Ok(true)
    }

    async fn read_record(&self) -> Result<Option<ControlRecord>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| MonitorError::FileRead {
                path: self.path.clone(),
                source: e,
            })?;

        let record = ControlRecord::parse(&bytes);
        if record.is_none() {
            tracing::warn!(
                path = %self.path.display(),
                len = bytes.len(),
                "short control record read, ignoring command"
            );
        }
        Ok(record)
    }

    async fn write_record(&self, record: &ControlRecord) -> Result<()> {
        tokio::fs::write(&self.path, record.as_bytes())
            .await
            .map_err(|e| MonitorError::FileWrite {
                path: self.path.clone(),
                source: e,
            })
    }
}
