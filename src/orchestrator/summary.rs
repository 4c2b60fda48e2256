//! Run summary reporting.

use log::info;

/// Counts and timings for one completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub input1: String,
    pub input2: String,
    pub output: String,
    pub primary_rows: usize,
    pub primary_columns: usize,
    pub reference_rows: usize,
    pub reference_columns: usize,
    pub kept_rows: usize,
    pub started_utc: chrono::DateTime<chrono::Utc>,
    pub ended_utc: chrono::DateTime<chrono::Utc>,
}

impl RunSummary {
    /// Rows of input 1 dropped because their key had no match in input 2.
    pub fn removed_rows(&self) -> usize {
        self.primary_rows - self.kept_rows
    }

    pub fn duration_secs(&self) -> f64 {
        (self.ended_utc - self.started_utc).num_milliseconds() as f64 / 1000.0
    }

    /// Log the final results block, including the row/column counts of each
    /// input.
    pub fn log(&self) {
        info!("Results:");
        info!(
            "  {}: {} rows, {} columns",
            self.input1, self.primary_rows, self.primary_columns
        );
        info!(
            "  {}: {} rows, {} columns",
            self.input2, self.reference_rows, self.reference_columns
        );
        info!("  Original rows in {}: {}", self.input1, self.primary_rows);
        info!("  Matching rows found: {}", self.kept_rows);
        info!("  Rows removed: {}", self.removed_rows());
        info!("  Output saved to: {}", self.output);
        info!("  Completed in {:.3}s", self.duration_secs());
    }
}
