//! Bulk-transfer tally produced by spreadsheet imports.

use serde::Serialize;

/// Outcome of one bulk import call. Rows are independent; the only state
/// carried across rows is these two counters.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct ImportSummary {
    pub success_count: u32,
    pub failure_count: u32,
}

impl ImportSummary {
    pub fn record_success(&mut self) {
        self.success_count += 1;
    }

    pub fn record_failure(&mut self) {
        self.failure_count += 1;
    }

    /// Total rows processed.
    pub fn total(&self) -> u32 {
        self.success_count + self.failure_count
    }
}
