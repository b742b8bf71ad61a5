//! SCAN (elevator).
//!
//! The head sweeps upward servicing every request it passes, runs on to the
//! last track, then reverses once and services the rest on the way down.
//!
//! # Algorithm
//! 1. Sort requests ascending.
//! 2. Split at the head: the upward run holds requests `>= head`; the
//!    downward run holds requests `< head`, in descending order.
//! 3. If the upward run is non-empty and ends below `disk_size - 1`,
//!    append `disk_size - 1` as a boundary stop.
//! 4. Plan = `[head] ++ upward ++ downward`.
//!
//! The boundary stop adds travel to the total but is not a request, so it
//! does not count toward the average's divisor.
//!
//! # Reference
//! Denning (1967), "Effects of scheduling on file memory operations"

use crate::models::{Position, SeekRequest, SeekResult};

use super::SeekAlgorithm;

/// Runs SCAN over `requests` starting at `head`, sweeping upward first.
///
/// `disk_size` bounds the track to `[0, disk_size)`. Out-of-range input is
/// not rejected; the sweep still runs to `disk_size - 1`.
///
/// When no request lies at or above the head the upward run is empty and
/// the whole sorted set is serviced downward with no boundary stop.
///
/// # Complexity
/// O(n log n).
pub fn scan(requests: &[Position], head: Position, disk_size: Position) -> SeekResult {
    let mut sorted = requests.to_vec();
    sorted.sort_unstable();

    let (mut upward, mut downward) = match sorted.iter().position(|&p| p >= head) {
        Some(split) => {
            let upward = sorted.split_off(split);
            (upward, sorted)
        }
        // Nothing at or above the head: sweep the full set downward.
        None => (Vec::new(), sorted),
    };
    downward.reverse();

    let last_track = disk_size.saturating_sub(1);
    if let Some(&top) = upward.last() {
        if top < last_track {
            upward.push(last_track);
        }
    }

    let mut plan = Vec::with_capacity(upward.len() + downward.len() + 1);
    plan.push(head);
    plan.extend(upward);
    plan.extend(downward);

    SeekResult::from_plan(plan, requests.len())
}

/// SCAN (elevator) strategy, upward sweep first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scan;

impl SeekAlgorithm for Scan {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn schedule(&self, request: &SeekRequest) -> SeekResult {
        scan(&request.positions, request.head, request.disk_size)
    }

    fn description(&self) -> &'static str {
        "SCAN (elevator): moves the head from one end of the disk toward the \
         other, servicing requests along the way, and reverses at the end. \
         Avoids starvation and gives more predictable waits than FCFS."
    }
}
