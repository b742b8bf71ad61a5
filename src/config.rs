//! Simulation configuration file (`u-seek.toml`).
//!
//! ```toml
//! algorithm = "scan"
//!
//! [input]
//! positions = [40, 25, 10, 60]
//! head = 50
//! disk_size = 100
//!
//! [playback]
//! speed = 2.0
//! ```
//!
//! Every key is optional; missing input keys fall back to
//! [`SeekRequest::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::AlgorithmKind;
use crate::error::Result;
use crate::models::{Position, SeekRequest};
use crate::playback::Playback;
use crate::validation::validate_input;

/// Top-level simulation config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Algorithm used when none is given on the command line.
    pub algorithm: Option<AlgorithmKind>,
    /// The `[input]` table.
    pub input: InputConfig,
    /// The `[playback]` table.
    pub playback: PlaybackConfig,
}

/// Request positions, head, and disk size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Pending request positions, in arrival order.
    pub positions: Vec<Position>,
    /// Starting head position.
    pub head: Position,
    /// Number of addressable positions.
    pub disk_size: Position,
}

/// Animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Speed multiplier, one of [`crate::playback::SUPPORTED_SPEEDS`].
    pub speed: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        let request = SeekRequest::default();
        Self {
            positions: request.positions,
            head: request.head,
            disk_size: request.disk_size,
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}

impl SimulationConfig {
    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses TOML text. Unknown keys are rejected.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The configured input as a request.
    pub fn to_request(&self) -> SeekRequest {
        SeekRequest::new(self.input.positions.clone(), self.input.head)
            .with_disk_size(self.input.disk_size)
    }

    /// Checks the input ranges and the playback speed.
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.input.positions, self.input.head, self.input.disk_size)?;
        Playback::new(0).with_speed(self.playback.speed)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeekError;
    use std::io::Write;

    #[test]
    fn test_parse_full() {
        let config = SimulationConfig::parse(
            r#"
            algorithm = "scan"

            [input]
            positions = [40, 25, 10, 60]
            head = 50
            disk_size = 100

            [playback]
            speed = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(config.algorithm, Some(AlgorithmKind::Scan));
        assert_eq!(config.playback.speed, 2.0);
        let request = config.to_request();
        assert_eq!(request.positions, vec![40, 25, 10, 60]);
        assert_eq!(request.head, 50);
        assert_eq!(request.disk_size, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = SimulationConfig::parse("").unwrap();
        assert_eq!(config.algorithm, None);
        assert_eq!(config.to_request(), SeekRequest::default());
        assert_eq!(config.playback.speed, 1.0);
    }

    #[test]
    fn test_parse_partial_input() {
        let config = SimulationConfig::parse("[input]\nhead = 10\n").unwrap();
        let request = config.to_request();
        assert_eq!(request.head, 10);
        assert_eq!(request.positions, SeekRequest::default().positions);
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = SimulationConfig::parse("[input]\ncylinders = 3\n").unwrap_err();
        assert!(matches!(err, SeekError::Config(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_algorithm() {
        let err = SimulationConfig::parse("algorithm = \"look\"\n").unwrap_err();
        assert!(matches!(err, SeekError::Config(_)));
    }

    #[test]
    fn test_validate_reports_input_errors() {
        let config = SimulationConfig::parse("[input]\npositions = [5]\nhead = 300\n").unwrap();
        match config.validate() {
            Err(SeekError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_reports_bad_speed() {
        let config = SimulationConfig::parse("[playback]\nspeed = 1.5\n").unwrap();
        assert!(matches!(config.validate(), Err(SeekError::InvalidSpeed(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "algorithm = \"sstf\"").unwrap();
        let config = SimulationConfig::from_file(file.path()).unwrap();
        assert_eq!(config.algorithm, Some(AlgorithmKind::Sstf));
    }

    #[test]
    fn test_from_file_missing() {
        let err = SimulationConfig::from_file(Path::new("/nonexistent/u-seek.toml")).unwrap_err();
        assert!(matches!(err, SeekError::Io(_)));
    }
}
