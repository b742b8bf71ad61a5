//! Built-in example inputs and random input generation.
//!
//! Each preset is shaped to show off one algorithm:
//!
//! | Preset | Head | Shape |
//! |--------|------|-------|
//! | FCFS | 50 | Already ascending, so arrival order is near optimal |
//! | SCAN | 100 | Spread across both halves of the disk |
//! | SSTF | 100 | Clustered around the head with two far outliers |

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SeekError;
use crate::models::{Position, SeekRequest};

/// Fewest positions produced by [`random_input`].
pub const RANDOM_MIN_POSITIONS: usize = 3;
/// Most positions produced by [`random_input`].
pub const RANDOM_MAX_POSITIONS: usize = 10;

/// A named example input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Ascending run just above the head.
    Fcfs,
    /// Requests on both sides of a mid-disk head.
    Scan,
    /// Tight cluster around the head plus outliers.
    Sstf,
}

impl Preset {
    /// Every preset.
    pub const ALL: [Preset; 3] = [Preset::Fcfs, Preset::Scan, Preset::Sstf];

    /// Starting head position.
    pub fn head(self) -> Position {
        match self {
            Preset::Fcfs => 50,
            Preset::Scan | Preset::Sstf => 100,
        }
    }

    /// Request positions, in arrival order.
    pub fn positions(self) -> &'static [Position] {
        match self {
            Preset::Fcfs => &[55, 58, 60, 65, 70, 75, 80, 85, 90, 95],
            Preset::Scan => &[190, 40, 155, 25, 140, 10, 172, 60, 188, 80],
            Preset::Sstf => &[105, 90, 110, 85, 20, 180, 95, 120, 88, 112],
        }
    }

    /// Builds a request on a disk of `disk_size` positions.
    pub fn request(self, disk_size: Position) -> SeekRequest {
        SeekRequest::new(self.positions(), self.head()).with_disk_size(disk_size)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::Fcfs => "FCFS",
            Preset::Scan => "SCAN",
            Preset::Sstf => "SSTF",
        };
        f.pad(name)
    }
}

impl FromStr for Preset {
    type Err = SeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Preset::Fcfs),
            "scan" => Ok(Preset::Scan),
            "sstf" => Ok(Preset::Sstf),
            _ => Err(SeekError::UnknownPreset(s.to_string())),
        }
    }
}

/// Generates a random request on a disk of `disk_size` positions.
///
/// Draws between [`RANDOM_MIN_POSITIONS`] and [`RANDOM_MAX_POSITIONS`]
/// positions and a head, each uniform in `[0, disk_size)`. A disk size
/// below 1 is treated as 1.
pub fn random_input<R: Rng>(rng: &mut R, disk_size: Position) -> SeekRequest {
    let disk_size = disk_size.max(1);
    let count = rng.random_range(RANDOM_MIN_POSITIONS..=RANDOM_MAX_POSITIONS);
    let positions: Vec<Position> = (0..count).map(|_| rng.random_range(0..disk_size)).collect();
    let head = rng.random_range(0..disk_size);
    SeekRequest::new(positions, head).with_disk_size(disk_size)
}
