//! Seek metrics and algorithm comparison.
//!
//! # KPI
//!
//! `SeekKpi` derives movement metrics from a single result: total and
//! average seek, longest single seek, direction reversals, and span.
//!
//! # Comparison
//!
//! `Comparison` runs every built-in algorithm on the same request and picks
//! the one with the least total head movement.

mod comparison;
mod kpi;

pub use comparison::{Comparison, ComparisonEntry};
pub use kpi::SeekKpi;
