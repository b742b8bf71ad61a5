//! Disk-seek scheduling algorithms for teaching and experimentation.
//!
//! Computes how a disk head moves through a set of pending requests under
//! three classic policies, and the seek distance each one costs.
//!
//! # Modules
//!
//! - **`algorithms`**: The core. Pure `fcfs`, `scan`, `sstf` functions, the
//!   `SeekAlgorithm` strategy trait, and `AlgorithmKind` for lookup by name
//! - **`models`**: Domain types: `Position`, `SeekRequest`, `SeekResult`
//! - **`scheduler`**: `SeekKpi` metrics and `Comparison` across algorithms
//! - **`validation`**: Caller-side input parsing and range checks
//! - **`presets`**: Example inputs and random input generation
//! - **`playback`**: Idle/playing/paused state machine for step-by-step display
//! - **`config`**: TOML simulation config
//! - **`error`**: Errors for everything outside the algorithm core
//!
//! # Architecture
//!
//! The algorithms are total, stateless, and free of I/O or logging. They
//! trust their input: range checks live in `validation` and run before
//! scheduling, never inside it.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2
//! - Teorey & Pinkerton (1972), "A comparative analysis of disk scheduling policies"

pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod playback;
pub mod presets;
pub mod scheduler;
pub mod validation;

pub use algorithms::{fcfs, scan, sstf, AlgorithmKind, SeekAlgorithm};
pub use error::SeekError;
pub use models::{Position, SeekRequest, SeekResult};
