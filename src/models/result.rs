//! Seek result (solution) model.

use serde::{Deserialize, Serialize};

use super::Position;

/// The outcome of running a seek algorithm.
///
/// `head_movements` is the traversal plan: the starting head position
/// followed by every visited position in order. SCAN may include one
/// synthetic boundary stop that is not a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekResult {
    /// Traversal plan, starting with the head.
    pub head_movements: Vec<Position>,
    /// Sum of distances between consecutive plan entries.
    pub total_seek_time: u64,
    /// `total_seek_time / request_count`, or 0 with no requests.
    pub average_seek_time: f64,
}

impl SeekResult {
    /// Builds a result from a finished plan.
    ///
    /// The total is recomputed from the plan so it always matches it.
    /// `request_count` is the number of real requests serviced; a
    /// boundary stop in the plan does not count toward it.
    pub fn from_plan(head_movements: Vec<Position>, request_count: usize) -> Self {
        let total_seek_time = plan_distance(&head_movements);
        let average_seek_time = if request_count == 0 {
            0.0
        } else {
            total_seek_time as f64 / request_count as f64
        };
        Self {
            head_movements,
            total_seek_time,
            average_seek_time,
        }
    }

    /// The result for an empty request set: the head never moves.
    pub fn idle(head: Position) -> Self {
        Self {
            head_movements: vec![head],
            total_seek_time: 0,
            average_seek_time: 0.0,
        }
    }

    /// Starting head position.
    #[inline]
    pub fn start(&self) -> Position {
        self.head_movements.first().copied().unwrap_or_default()
    }

    /// Final head position.
    pub fn end(&self) -> Position {
        self.head_movements.last().copied().unwrap_or_else(|| self.start())
    }

    /// Number of moves (plan length minus the start).
    pub fn step_count(&self) -> usize {
        self.head_movements.len().saturating_sub(1)
    }

    /// Distance of every move, in order.
    pub fn seek_distances(&self) -> Vec<u64> {
        self.head_movements
            .windows(2)
            .map(|w| w[0].abs_diff(w[1]))
            .collect()
    }
}

/// Sum of absolute differences between consecutive positions.
///
/// Saturates at `u64::MAX` instead of overflowing on extreme positions.
pub fn plan_distance(plan: &[Position]) -> u64 {
    plan.windows(2)
        .map(|w| w[0].abs_diff(w[1]))
        .fold(0u64, u64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_plan() {
        let result = SeekResult::from_plan(vec![50, 100, 50, 25, 75], 4);
        assert_eq!(result.total_seek_time, 175);
        assert!((result.average_seek_time - 43.75).abs() < 1e-10);
        assert_eq!(result.start(), 50);
        assert_eq!(result.end(), 75);
        assert_eq!(result.step_count(), 4);
        assert_eq!(result.seek_distances(), vec![50, 50, 25, 50]);
    }

    #[test]
    fn test_from_plan_boundary_not_counted() {
        // 99 is a boundary stop: 5 moves, 4 requests
        let result = SeekResult::from_plan(vec![50, 60, 99, 40, 25, 10], 4);
        assert_eq!(result.total_seek_time, 138);
        assert!((result.average_seek_time - 34.5).abs() < 1e-10);
    }

    #[test]
    fn test_idle() {
        let result = SeekResult::idle(30);
        assert_eq!(result.head_movements, vec![30]);
        assert_eq!(result.total_seek_time, 0);
        assert_eq!(result.average_seek_time, 0.0);
        assert_eq!(result.step_count(), 0);
        assert_eq!(result.end(), 30);
    }

    #[test]
    fn test_plan_distance_saturates() {
        let plan = [0, i64::MAX, 0, i64::MAX, 0];
        assert_eq!(plan_distance(&plan), u64::MAX);

        let result = SeekResult::from_plan(plan.to_vec(), 4);
        assert_eq!(result.total_seek_time, u64::MAX);
        assert!(result.average_seek_time.is_finite());
    }

    #[test]
    fn test_plan_distance_full_range_step() {
        assert_eq!(plan_distance(&[i64::MIN, i64::MAX]), u64::MAX);
    }

    #[test]
    fn test_serde_json_shape() {
        let result = SeekResult::from_plan(vec![10, 20], 1);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["head_movements"], serde_json::json!([10, 20]));
        assert_eq!(json["total_seek_time"], 10);
    }
}
