use crate::error::StoreError;
use crate::plane::Plane;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Append-only record of departed planes. Never read back.
pub struct TakeoffLog {
    path: PathBuf,
    last_error: Option<StoreError>,
}

impl TakeoffLog {
    pub fn new(path: impl Into<PathBuf>) -> TakeoffLog {
        TakeoffLog {
            path: path.into(),
            last_error: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn last_error(&self) -> Option<&StoreError> {
        self.last_error.as_ref()
    }

    /// Writes `<flight> - <airline> - Took Off`. A failed write is skipped and
    /// kept in [`TakeoffLog::last_error`]; returns whether the line landed.
    pub fn append(&mut self, plane: &Plane) -> bool {
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", plane.to_takeoff_line()));

        match result {
            Ok(()) => {
                debug!(%plane, path = %self.path.display(), "Takeoff logged");
                self.last_error = None;
                true
            }
            Err(source) => {
                let e = StoreError::Write {
                    path: self.path.clone(),
                    source,
                };
                warn!(%plane, error = %e, "Takeoff not logged");
                self.last_error = Some(e);
                false
            }
        }
    }
}
