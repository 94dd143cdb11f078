//! The end-of-run summary table.

use toll_core::VehicleId;
use toll_sim::SimReport;

/// Column headers, shared by the stdout table and `summary.csv`.
pub const HEADERS: [&str; 3] = ["Vehicle ID", "Distance Traveled", "Remaining Balance"];

/// One line of the summary: a vehicle and its owner's final balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub vehicle_id:        VehicleId,
    pub traveled_km:       f64,
    pub remaining_balance: f64,
}

/// One row per vehicle, in report (ascending id) order.
pub fn summary_rows(report: &SimReport) -> Vec<SummaryRow> {
    report
        .vehicles
        .iter()
        .map(|v| SummaryRow {
            vehicle_id:        v.id,
            traveled_km:       v.traveled_km,
            remaining_balance: v.remaining_balance,
        })
        .collect()
}

/// Right-aligned plain-text table with a header line, two decimals for
/// numbers.  Ends with a newline.
pub fn render_table(rows: &[SummaryRow]) -> String {
    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|r| {
            [
                r.vehicle_id.0.to_string(),
                format!("{:.2}", r.traveled_km),
                format!("{:.2}", r.remaining_balance),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS, &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 3]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{:>w$}", cell.as_ref()))
        .collect();
    out.push_str(&line.join("  "));
    out.push('\n');
}
