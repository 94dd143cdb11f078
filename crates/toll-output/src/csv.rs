//! CSV output backend.
//!
//! Creates `summary.csv` in the output directory, with the same columns as
//! the stdout table.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;
use toll_sim::SimReport;

use crate::table::{summary_rows, HEADERS};
use crate::writer::ReportWriter;
use crate::OutputResult;

pub const FILE_NAME: &str = "summary.csv";

/// Writes the summary table as CSV.
pub struct CsvWriter {
    path:     PathBuf,
    writer:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) `summary.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join(FILE_NAME);
        let mut writer = Writer::from_path(&path)?;
        writer.write_record(HEADERS)?;

        Ok(Self { path, writer, finished: false })
    }
}

impl ReportWriter for CsvWriter {
    fn write_report(&mut self, report: &SimReport) -> OutputResult<()> {
        for row in summary_rows(report) {
            self.writer.write_record(&[
                row.vehicle_id.0.to_string(),
                format!("{:.2}", row.traveled_km),
                format!("{:.2}", row.remaining_balance),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
