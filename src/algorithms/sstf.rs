//! Shortest Seek Time First.
//!
//! Greedy nearest-neighbor: always service the pending request closest to
//! the current head. Minimizes each individual move, not the total, and can
//! starve far requests when near ones keep arriving.
//!
//! # Tie-breaking
//! Among equally near candidates the one found first wins, scanning the
//! remaining requests in their current order (arrival order with serviced
//! entries removed). Only a strictly smaller distance replaces the current
//! best.

use crate::models::{Position, SeekRequest, SeekResult};

use super::SeekAlgorithm;

/// Runs SSTF over `requests` starting at `head`.
///
/// The plan lists positions in greedy selection order. An empty request
/// set yields `[head]` with zero seek time.
///
/// # Complexity
/// O(n²): a linear scan per step over the shrinking working set.
pub fn sstf(requests: &[Position], head: Position) -> SeekResult {
    if requests.is_empty() {
        return SeekResult::idle(head);
    }

    let mut pending = requests.to_vec();
    let mut plan = Vec::with_capacity(requests.len() + 1);
    plan.push(head);

    let mut current = head;
    while let Some(idx) = nearest_index(&pending, current) {
        current = pending.remove(idx);
        plan.push(current);
    }

    SeekResult::from_plan(plan, requests.len())
}

/// Index of the position nearest to `head`, first occurrence on ties.
///
/// Returns `None` for an empty slice.
pub fn nearest_index(positions: &[Position], head: Position) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (i, &pos) in positions.iter().enumerate() {
        let distance = pos.abs_diff(head);
        match best {
            Some((_, shortest)) if distance >= shortest => {}
            _ => best = Some((i, distance)),
        }
    }
    best.map(|(i, _)| i)
}

/// Shortest Seek Time First strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sstf;

impl SeekAlgorithm for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn schedule(&self, request: &SeekRequest) -> SeekResult {
        sstf(&request.positions, request.head)
    }

    fn description(&self) -> &'static str {
        "Shortest Seek Time First: picks the pending request that needs the \
         least head movement from the current position, regardless of arrival \
         order. Keeps individual seeks short but can starve requests that are \
         far from a head kept busy by nearby ones."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sstf_tie_goes_to_earlier_entry() {
        // From 50: 50 (0). From 50: 25 and 75 both at 25, 25 comes first.
        let result = sstf(&[100, 50, 25, 75], 50);
        assert_eq!(result.head_movements, vec![50, 50, 25, 75, 100]);
        assert_eq!(result.total_seek_time, 100); // 0 + 25 + 50 + 25
        assert!((result.average_seek_time - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_sstf_tie_follows_working_order() {
        // Same tie, but 75 arrives before 25.
        let result = sstf(&[75, 25], 50);
        assert_eq!(result.head_movements, vec![50, 75, 25]);
        assert_eq!(result.total_seek_time, 75);
    }

    #[test]
    fn test_sstf_greedy_order() {
        let result = sstf(&[105, 90, 110, 85, 20, 180, 95, 120, 88, 112], 100);
        assert_eq!(
            result.head_movements,
            vec![100, 105, 110, 112, 120, 95, 90, 88, 85, 20, 180]
        );
    }

    #[test]
    fn test_sstf_empty() {
        let result = sstf(&[], 30);
        assert_eq!(result.head_movements, vec![30]);
        assert_eq!(result.total_seek_time, 0);
        assert_eq!(result.average_seek_time, 0.0);
    }

    #[test]
    fn test_nearest_index() {
        assert_eq!(nearest_index(&[], 10), None);
        assert_eq!(nearest_index(&[5, 15], 10), Some(0));
        assert_eq!(nearest_index(&[15, 5], 10), Some(0));
        assert_eq!(nearest_index(&[30, 12, 9], 10), Some(2));
    }

    #[test]
    fn test_sstf_does_not_touch_input() {
        let requests = vec![9, 3, 7];
        let _ = sstf(&requests, 0);
        assert_eq!(requests, vec![9, 3, 7]);
    }
}
