//! First-Come, First-Served.
//!
//! Requests are serviced exactly in arrival order. Simple and fair, but the
//! head can thrash across the whole disk when consecutive requests are far
//! apart.

use crate::models::{Position, SeekRequest, SeekResult};

use super::SeekAlgorithm;

/// Runs FCFS over `requests` starting at `head`.
///
/// The plan is `[head] ++ requests`, untouched. An empty request set
/// yields `[head]` with zero seek time.
///
/// # Complexity
/// O(n).
pub fn fcfs(requests: &[Position], head: Position) -> SeekResult {
    if requests.is_empty() {
        return SeekResult::idle(head);
    }

    let mut plan = Vec::with_capacity(requests.len() + 1);
    plan.push(head);
    plan.extend_from_slice(requests);

    SeekResult::from_plan(plan, requests.len())
}

/// First-Come, First-Served strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SeekAlgorithm for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, request: &SeekRequest) -> SeekResult {
        fcfs(&request.positions, request.head)
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served: services requests in the order they arrive, \
         with no reordering. Easy to reason about, but distant consecutive \
         requests make the head sweep back and forth across the disk (thrashing)."
    }
}
