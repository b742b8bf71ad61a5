//! Seek performance indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total seek | Sum of |p[i] - p[i-1]| over the plan |
//! | Average seek | Total / requests serviced |
//! | Max seek | Largest single move |
//! | Reversals | Direction changes between non-zero moves |
//! | Span | max(plan) - min(plan) |

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::SeekResult;

/// Seek performance indicators for one result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekKpi {
    /// Total head movement.
    pub total_seek: u64,
    /// Average movement per serviced request.
    pub average_seek: f64,
    /// Longest single move.
    pub max_seek: u64,
    /// Number of times the head changed direction.
    pub reversals: usize,
    /// Distance between the lowest and highest positions visited.
    pub span: u64,
    /// Number of real requests serviced.
    pub requests_serviced: usize,
}

impl SeekKpi {
    /// Computes KPIs from a result.
    ///
    /// # Arguments
    /// * `result` - The seek result.
    /// * `request_count` - Number of real requests (excludes SCAN's boundary stop).
    pub fn calculate(result: &SeekResult, request_count: usize) -> Self {
        let plan = &result.head_movements;

        let max_seek = result.seek_distances().into_iter().max().unwrap_or(0);

        let mut reversals = 0;
        let mut last_direction: Option<Ordering> = None;
        for w in plan.windows(2) {
            // Zero-length moves keep the previous direction
            let direction = w[1].cmp(&w[0]);
            if direction == Ordering::Equal {
                continue;
            }
            if last_direction.is_some_and(|last| last != direction) {
                reversals += 1;
            }
            last_direction = Some(direction);
        }

        let span = match (plan.iter().min(), plan.iter().max()) {
            (Some(&lo), Some(&hi)) => lo.abs_diff(hi),
            _ => 0,
        };

        Self {
            total_seek: result.total_seek_time,
            average_seek: result.average_seek_time,
            max_seek,
            reversals,
            span,
            requests_serviced: request_count,
        }
    }

    /// Whether the result stays within the given movement limits.
    pub fn meets_thresholds(&self, max_total: u64, max_single: u64) -> bool {
        self.total_seek <= max_total && self.max_seek <= max_single
    }
}
