//! `toll-output` — end-of-run artifacts and event logging.
//!
//! | Writer          | File           | Contents                                         |
//! |-----------------|----------------|--------------------------------------------------|
//! | [`CsvWriter`]   | `summary.csv`  | vehicle id, distance traveled, remaining balance |
//! | [`MapWriter`]   | `index.html`   | Leaflet map: gates, start/end markers, routes    |
//! | [`ChartWriter`] | `charts.svg`   | two bar panels: distance and remaining balance   |
//!
//! All three implement [`ReportWriter`] and consume a finished
//! `toll_sim::SimReport`; none of them touch simulation state.
//! [`LogObserver`] is the `SimObserver` that prints the per-tick alerts and
//! progress lines through `log`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use toll_output::{render_table, summary_rows, write_artifacts, LogObserver};
//!
//! sim.run(&mut LogObserver::default())?;
//! let report = sim.report()?;
//! println!("{}", render_table(&summary_rows(&report)));
//! write_artifacts(Path::new("./output"), &report)?;
//! ```

pub mod chart;
pub mod csv;
pub mod error;
pub mod map;
pub mod observer;
pub mod table;
pub mod writer;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use toll_sim::SimReport;

pub use chart::ChartWriter;
pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use map::MapWriter;
pub use observer::LogObserver;
pub use table::{render_table, summary_rows, SummaryRow};
pub use writer::ReportWriter;

/// Write `summary.csv`, `index.html`, and `charts.svg` into `dir`, creating
/// it if needed.  Returns the paths written, in that order.
pub fn write_artifacts(dir: &Path, report: &SimReport) -> OutputResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut writers: Vec<Box<dyn ReportWriter>> = vec![
        Box::new(CsvWriter::new(dir)?),
        Box::new(MapWriter::new(dir)),
        Box::new(ChartWriter::new(dir)),
    ];

    let mut written = Vec::with_capacity(writers.len());
    for writer in &mut writers {
        writer.write_report(report)?;
        writer.finish()?;
        log::info!("wrote {}", writer.path().display());
        written.push(writer.path().to_path_buf());
    }
    Ok(written)
}
