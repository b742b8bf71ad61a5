//! Side-by-side comparison of the built-in algorithms.

use serde::Serialize;
use tracing::debug;

use crate::algorithms::AlgorithmKind;
use crate::models::{SeekRequest, SeekResult};

use super::SeekKpi;

/// One algorithm's outcome within a comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonEntry {
    /// Which algorithm produced the result.
    pub algorithm: AlgorithmKind,
    /// The algorithm's result.
    pub result: SeekResult,
    /// Metrics derived from the result.
    pub kpi: SeekKpi,
}

/// Results of every built-in algorithm on one request.
///
/// Entries follow [`AlgorithmKind::ALL`] order (FCFS, SCAN, SSTF).
///
/// # Example
///
/// ```
/// use u_seek::models::SeekRequest;
/// use u_seek::scheduler::Comparison;
/// use u_seek::algorithms::AlgorithmKind;
///
/// let request = SeekRequest::new(vec![100, 50, 25, 75], 50);
/// let comparison = Comparison::run(&request);
/// assert_eq!(comparison.entries().len(), 3);
/// assert_eq!(comparison.winner(), Some(AlgorithmKind::Sstf));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    request: SeekRequest,
    entries: Vec<ComparisonEntry>,
}

impl Comparison {
    /// Runs every built-in algorithm on `request`.
    pub fn run(request: &SeekRequest) -> Self {
        let entries = AlgorithmKind::ALL
            .iter()
            .map(|&algorithm| {
                let result = algorithm.schedule(request);
                let kpi = SeekKpi::calculate(&result, request.request_count());
                debug!(%algorithm, total = result.total_seek_time, "compared");
                ComparisonEntry {
                    algorithm,
                    result,
                    kpi,
                }
            })
            .collect();

        Self {
            request: request.clone(),
            entries,
        }
    }

    /// The compared request.
    pub fn request(&self) -> &SeekRequest {
        &self.request
    }

    /// All entries, in [`AlgorithmKind::ALL`] order.
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    /// The entry for one algorithm.
    pub fn get(&self, algorithm: AlgorithmKind) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| e.algorithm == algorithm)
    }

    /// The algorithm with the least total seek time.
    ///
    /// Ties go to the algorithm listed first in [`AlgorithmKind::ALL`].
    pub fn winner(&self) -> Option<AlgorithmKind> {
        self.ranking().first().map(|e| e.algorithm)
    }

    /// Entries sorted by total seek time, ascending. Ties keep list order.
    pub fn ranking(&self) -> Vec<&ComparisonEntry> {
        let mut ranked: Vec<&ComparisonEntry> = self.entries.iter().collect();
        ranked.sort_by_key(|e| e.result.total_seek_time);
        ranked
    }

    /// Length of the longest traversal plan.
    ///
    /// Drives a shared playback across all algorithms.
    pub fn max_steps(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.result.head_movements.len())
            .max()
            .unwrap_or(0)
    }
}
