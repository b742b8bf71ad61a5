//! Disk-seek algorithms.
//!
//! Three pure functions turn `(requests, head, [disk_size])` into a
//! traversal plan plus seek statistics:
//!
//! - [`fcfs`]: arrival order, no reordering
//! - [`scan`]: elevator sweep, upward first, runs to the last track
//! - [`sstf`]: greedy nearest request first
//!
//! They never mutate the caller's requests, never fail, and hold no state.
//! Range validation is the caller's job (see [`crate::validation`]).
//!
//! # Usage
//!
//! ```
//! use u_seek::algorithms::{self, AlgorithmKind};
//! use u_seek::models::SeekRequest;
//!
//! let result = algorithms::scan(&[40, 25, 10, 60], 50, 100);
//! assert_eq!(result.head_movements, vec![50, 60, 99, 40, 25, 10]);
//!
//! let request = SeekRequest::new(vec![100, 50, 25, 75], 50);
//! let result = AlgorithmKind::Fcfs.schedule(&request);
//! assert_eq!(result.total_seek_time, 175);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2
//! - Denning (1967), "Effects of scheduling on file memory operations"

mod fcfs;
mod scan;
mod sstf;

pub use fcfs::{fcfs, Fcfs};
pub use scan::{scan, Scan};
pub use sstf::{nearest_index, sstf, Sstf};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeekError;
use crate::models::{SeekRequest, SeekResult};

/// A disk-seek algorithm.
///
/// Implementations are stateless and deterministic: the same request
/// always yields the same result.
pub trait SeekAlgorithm: Send + Sync + fmt::Debug {
    /// Algorithm name (e.g., "FCFS", "SCAN").
    fn name(&self) -> &'static str;

    /// Computes the traversal plan and seek statistics for a request.
    fn schedule(&self, request: &SeekRequest) -> SeekResult;

    /// Algorithm description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// The built-in algorithms, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    /// First-Come, First-Served.
    Fcfs,
    /// SCAN (elevator).
    Scan,
    /// Shortest Seek Time First.
    Sstf,
}

impl AlgorithmKind {
    /// Every algorithm, in display order.
    pub const ALL: [AlgorithmKind; 3] = [
        AlgorithmKind::Fcfs,
        AlgorithmKind::Scan,
        AlgorithmKind::Sstf,
    ];

    /// The strategy object for this kind.
    pub fn algorithm(self) -> &'static dyn SeekAlgorithm {
        match self {
            AlgorithmKind::Fcfs => &Fcfs,
            AlgorithmKind::Scan => &Scan,
            AlgorithmKind::Sstf => &Sstf,
        }
    }

    /// Short upper-case name.
    pub fn name(self) -> &'static str {
        self.algorithm().name()
    }

    /// Human-readable description.
    pub fn description(self) -> &'static str {
        self.algorithm().description()
    }

    /// Runs this algorithm on a request.
    pub fn schedule(self, request: &SeekRequest) -> SeekResult {
        self.algorithm().schedule(request)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = SeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(AlgorithmKind::Fcfs),
            "scan" | "elevator" => Ok(AlgorithmKind::Scan),
            "sstf" => Ok(AlgorithmKind::Sstf),
            _ => Err(SeekError::UnknownAlgorithm(s.to_string())),
        }
    }
}
