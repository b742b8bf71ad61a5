//! Seek request (problem input) model.

use serde::{Deserialize, Serialize};

/// A location on the track.
///
/// Request positions, the head, and the disk size share this type.
pub type Position = i64;

/// Disk size used when none is given.
pub const DEFAULT_DISK_SIZE: Position = 200;

/// Input bundle for a seek algorithm.
///
/// Carries the pending request positions (in arrival order), the starting
/// head position, and the disk size. The addressable range is
/// `[0, disk_size)`. Only SCAN reads the disk size.
///
/// Range checks belong to the caller (see [`crate::validation`]); the
/// algorithms accept any values and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekRequest {
    /// Pending request positions, in arrival order.
    pub positions: Vec<Position>,
    /// Starting head position.
    pub head: Position,
    /// Number of addressable positions.
    pub disk_size: Position,
}

impl SeekRequest {
    /// Creates a request with the default disk size.
    pub fn new(positions: impl Into<Vec<Position>>, head: Position) -> Self {
        Self {
            positions: positions.into(),
            head,
            disk_size: DEFAULT_DISK_SIZE,
        }
    }

    /// Sets the disk size.
    pub fn with_disk_size(mut self, disk_size: Position) -> Self {
        self.disk_size = disk_size;
        self
    }

    /// Number of pending requests.
    pub fn request_count(&self) -> usize {
        self.positions.len()
    }

    /// Whether there are no pending requests.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Default for SeekRequest {
    /// The landing input: five requests around a head at 50 on a 200-track disk.
    fn default() -> Self {
        Self::new(vec![0, 100, 50, 25, 75], 50)
    }
}
