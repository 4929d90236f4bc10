use crate::error::ConfigError;
use crate::runway::queue::RunwayQueue;
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub capacity: NonZeroUsize,
    pub runway_file: PathBuf,
    pub takeoff_log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            capacity: RunwayQueue::DEFAULT_CAPACITY,
            runway_file: PathBuf::from("runway.txt"),
            takeoff_log_file: PathBuf::from("takeoff_log.txt"),
        }
    }
}

impl Config {
    /// Reads a JSON config. Missing keys fall back to the defaults.
    pub fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Config::from_json(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_json(data: &str) -> serde_json::Result<Config> {
        serde_json::from_str(data)
    }

    /// Command line values win over whatever was loaded.
    pub fn override_with(
        mut self,
        capacity: Option<usize>,
        runway_file: Option<PathBuf>,
        takeoff_log_file: Option<PathBuf>,
    ) -> Result<Config, ConfigError> {
        if let Some(capacity) = capacity {
            self.capacity = NonZeroUsize::new(capacity).ok_or(ConfigError::ZeroCapacity)?;
        }
        if let Some(path) = runway_file {
            self.runway_file = path;
        }
        if let Some(path) = takeoff_log_file {
            self.takeoff_log_file = path;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(5, config.capacity.get());
        assert_eq!(PathBuf::from("runway.txt"), config.runway_file);
        assert_eq!(PathBuf::from("takeoff_log.txt"), config.takeoff_log_file);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "capacity": 8 }"#).unwrap();
        assert_eq!(8, config.capacity.get());
        assert_eq!(Config::default().runway_file, config.runway_file);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(Config::from_json(r#"{ "capacity": 0 }"#).is_err());
        assert!(matches!(
            Config::default().override_with(Some(0), None, None),
            Err(ConfigError::ZeroCapacity)
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_json(r#"{ "capacty": 3 }"#).is_err());
    }

    #[test]
    fn test_load_from_file_and_override() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "capacity": 3, "runway_file": "queue.txt" }}"#).unwrap();

        let config = Config::load_from_file(file.path())
            .unwrap()
            .override_with(None, None, Some(PathBuf::from("departures.txt")))
            .unwrap();

        assert_eq!(3, config.capacity.get());
        assert_eq!(PathBuf::from("queue.txt"), config.runway_file);
        assert_eq!(PathBuf::from("departures.txt"), config.takeoff_log_file);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from_file(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
