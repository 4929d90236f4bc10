use crate::config::Config;
use crate::error::{StoreError, TowerError};
use crate::plane::Plane;
use crate::runway::queue::{LoadReport, RunwayQueue};
use crate::runway::takeoff_log::TakeoffLog;

/// One control session: owns the runway queue and the takeoff log and
/// sequences them for every user action.
pub struct Tower {
    runway: RunwayQueue,
    log: TakeoffLog,
}

impl Tower {
    /// Builds the session and loads the queue store. This is the only load.
    pub fn open(config: &Config) -> (Tower, LoadReport) {
        let mut runway = RunwayQueue::new(&config.runway_file, config.capacity);
        let report = runway.load();
        let tower = Tower {
            runway,
            log: TakeoffLog::new(&config.takeoff_log_file),
        };
        (tower, report)
    }

    pub fn runway(&self) -> &RunwayQueue {
        &self.runway
    }

    pub fn takeoff_log(&self) -> &TakeoffLog {
        &self.log
    }

    /// "Add Plane": validates the raw inputs before touching the queue.
    pub fn add_plane(&mut self, flight_number: &str, airline_name: &str) -> Result<Plane, TowerError> {
        let plane = Plane::new(flight_number, airline_name)?;
        if !self.runway.enqueue(plane.clone()) {
            return Err(TowerError::QueueFull(self.runway.capacity()));
        }
        Ok(plane)
    }

    /// "Allow Takeoff": dequeues the head and logs it before handing it back
    /// for display.
    pub fn allow_takeoff(&mut self) -> Result<Plane, TowerError> {
        let plane = self.runway.dequeue().ok_or(TowerError::QueueEmpty)?;
        self.log.append(&plane);
        Ok(plane)
    }

    pub fn front(&self) -> Option<&Plane> {
        self.runway.peek_front()
    }

    /// Storage failures left behind by the last action, if any.
    pub fn storage_warnings(&self) -> Vec<&StoreError> {
        self.runway
            .last_store_error()
            .into_iter()
            .chain(self.log.last_error())
            .collect()
    }
}
