use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaneError {
    #[error("flight number is empty")]
    EmptyFlightNumber,
    #[error("airline name is empty")]
    EmptyAirlineName,
    #[error("flight number may not contain \"{0}\"")]
    SeparatorInFlightNumber(&'static str),
    #[error("{0} may not contain line breaks")]
    LineBreak(&'static str),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("capacity must be at least 1")]
    ZeroCapacity,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TowerError {
    #[error("Please enter both Flight Number and Airline ({0}).")]
    InvalidInput(#[from] PlaneError),
    #[error("Queue is FULL! Cannot add more planes (capacity {0}).")]
    QueueFull(NonZeroUsize),
    #[error("Queue is empty. No plane can take off.")]
    QueueEmpty,
}
