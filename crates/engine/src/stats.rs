// crates/engine/src/stats.rs
use crate::error::SegmentError;
use invalid_ids_shared_kernel::{IdSum, Range};
use serde::Serialize;

/// Outcome of counting one input range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeReport {
    /// Zero-based position of the segment in the input text.
    pub index: usize,
    pub range: Range,
    /// Even-length windows the range was cut into; empty when none exist.
    pub windows: Vec<Range>,
    pub sum: IdSum,
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub total: IdSum,
    /// Per-range results, ordered by segment index.
    pub reports: Vec<RangeReport>,
    /// Segments dropped in lenient mode.
    pub skipped: Vec<SegmentError>,
}

impl RunResult {
    pub fn range_count(&self) -> usize {
        self.reports.len()
    }
}
