//! Engine liveness probe
//!
//! The engine module publishes its init state in a one-line file. The
//! monitor refuses to start unless that file literally reads `live`.

use std::path::Path;

use kxomon_utils::{MonitorError, Result};

/// Token the probe file must contain for the engine to count as available.
const LIVE_TOKEN: &str = "live";

/// Check that the engine is loaded and live. Fatal at startup on failure.
pub fn check(path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MonitorError::ProbeMissing {
                path: path.to_path_buf(),
            }
        } else {
            MonitorError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let state = contents.trim_end_matches('\n');
    if state == LIVE_TOKEN {
        Ok(())
    } else {
        Err(MonitorError::EngineNotLive {
            path: path.to_path_buf(),
            state: state.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn probe_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_live_token_accepted() {
        let file = probe_file(b"live");
        assert!(check(file.path()).is_ok());
    }

    #[test]
    fn test_trailing_newline_trimmed() {
        let file = probe_file(b"live\n");
        assert!(check(file.path()).is_ok());
    }

    #[test]
    fn test_other_state_rejected() {
        let file = probe_file(b"going\n");
        let err = check(file.path()).unwrap_err();
        assert!(matches!(err, MonitorError::EngineNotLive { state, .. } if state == "going"));
    }

    #[test]
    fn test_empty_file_rejected() {
        let file = probe_file(b"");
        assert!(matches!(
            check(file.path()),
            Err(MonitorError::EngineNotLive { .. })
        ));
    }

    #[test]
    fn test_missing_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("initstate");
        assert!(matches!(
            check(&path),
            Err(MonitorError::ProbeMissing { .. })
        ));
    }

    #[test]
    fn test_token_must_match_exactly() {
        let file = probe_file(b"live and well\n");
        assert!(matches!(
            check(file.path()),
            Err(MonitorError::EngineNotLive { .. })
        ));
    }
}
