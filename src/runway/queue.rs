use crate::error::{StoreError, StoreResult};
use crate::plane::Plane;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What a [`RunwayQueue::load`] found in the store. Informational only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    /// Lines without a separator, or with an empty field.
    pub malformed: usize,
    /// Well-formed lines dropped because the queue was already full.
    pub overflow: usize,
    /// The store did not exist yet.
    pub missing: bool,
}

/// Bounded FIFO of planes waiting for takeoff, mirrored to a line-based text
/// file. The file is rewritten after every successful enqueue and dequeue.
///
/// Storage failures never fail an operation. The most recent one is kept in
/// [`RunwayQueue::last_store_error`] until the next successful read or write.
pub struct RunwayQueue {
    path: PathBuf,
    capacity: NonZeroUsize,
    planes: VecDeque<Plane>,
    last_store_error: Option<StoreError>,
}

impl RunwayQueue {
    pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(5).unwrap();

    pub fn new(path: impl Into<PathBuf>, capacity: NonZeroUsize) -> RunwayQueue {
        RunwayQueue {
            path: path.into(),
            capacity,
            planes: VecDeque::with_capacity(capacity.get()),
            last_store_error: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    pub fn last_store_error(&self) -> Option<&StoreError> {
        self.last_store_error.as_ref()
    }

    /// Replaces the in-memory queue with the contents of the store. Lines past
    /// capacity are dropped, malformed lines are skipped, and a missing or
    /// unreadable store leaves the queue empty.
    pub fn load(&mut self) -> LoadReport {
        self.planes.clear();
        let mut report = LoadReport::default();

        let content = match self.read_store() {
            Ok(Some(content)) => content,
            Ok(None) => {
                debug!(path = %self.path.display(), "No runway store yet, starting empty");
                self.last_store_error = None;
                report.missing = true;
                return report;
            }
            Err(e) => {
                warn!(error = %e, "Runway store unreadable, starting empty");
                self.last_store_error = Some(e);
                return report;
            }
        };
        self.last_store_error = None;

        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            match Plane::parse_line(line) {
                Some(plane) if self.planes.len() < self.capacity.get() => {
                    self.planes.push_back(plane);
                    report.loaded += 1;
                }
                Some(_) => report.overflow += 1,
                None => {
                    debug!(line, "Skipping malformed runway line");
                    report.malformed += 1;
                }
            }
        }

        if report.overflow > 0 {
            warn!(
                capacity = self.capacity.get(),
                dropped = report.overflow,
                "Runway store holds more planes than the queue allows"
            );
        }
        debug!(path = %self.path.display(), ?report, "Runway queue loaded");
        report
    }

    /// Rewrites the store from the in-memory queue, head first. Returns
    /// whether the write went through.
    pub fn save(&mut self) -> bool {
        match self.write_store() {
            Ok(()) => {
                debug!(path = %self.path.display(), planes = self.planes.len(), "Runway store saved");
                self.last_store_error = None;
                true
            }
            Err(e) => {
                warn!(error = %e, "Runway store not saved, keeping in-memory queue");
                self.last_store_error = Some(e);
                false
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.planes.len() >= self.capacity.get()
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Adds a plane at the tail. `false` when the queue is full, in which case
    /// nothing changes and nothing is written.
    #[must_use]
    pub fn enqueue(&mut self, plane: Plane) -> bool {
        if self.is_full() {
            debug!(%plane, capacity = self.capacity.get(), "Queue full, plane rejected");
            return false;
        }
        info!(%plane, position = self.planes.len() + 1, "Plane queued");
        self.planes.push_back(plane);
        self.save();
        true
    }

    /// Removes the plane at the head. `None` when the queue is empty.
    pub fn dequeue(&mut self) -> Option<Plane> {
        let plane = self.planes.pop_front()?;
        info!(%plane, remaining = self.planes.len(), "Plane left the queue");
        self.save();
        Some(plane)
    }

    pub fn peek_front(&self) -> Option<&Plane> {
        self.planes.front()
    }

    /// Snapshot of the queue, head first.
    pub fn list_all(&self) -> Vec<Plane> {
        self.planes.iter().cloned().collect()
    }

    fn read_store(&self) -> StoreResult<Option<String>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_store(&self) -> StoreResult<()> {
        let to_store_error = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        let mut writer = BufWriter::new(File::create(&self.path).map_err(to_store_error)?);
        for plane in &self.planes {
            writeln!(writer, "{}", plane.to_line()).map_err(to_store_error)?;
        }
        writer.flush().map_err(to_store_error)
    }
}
