//! The `ReportWriter` trait implemented by all artifact writers.

use std::path::Path;

use toll_sim::SimReport;

use crate::OutputResult;

/// Trait implemented by the CSV, map, and chart writers.
pub trait ReportWriter {
    /// Render `report`.  Writers may buffer until [`finish`][Self::finish].
    fn write_report(&mut self, report: &SimReport) -> OutputResult<()>;

    /// Flush everything to disk.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;

    /// The file this writer produces.
    fn path(&self) -> &Path;
}
