//! SVG bar-chart renderer.
//!
//! Two side-by-side panels, one bar per vehicle in each: distance traveled
//! and the owner's remaining balance.  Bars carry `class="bar"`.

use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};

use toll_sim::SimReport;

use crate::table::summary_rows;
use crate::writer::ReportWriter;
use crate::OutputResult;

pub const FILE_NAME: &str = "charts.svg";

const PANEL_W: f64 = 500.0;
const PANEL_H: f64 = 400.0;
const MARGIN_L: f64 = 70.0;
const MARGIN_R: f64 = 20.0;
const MARGIN_T: f64 = 40.0;
const MARGIN_B: f64 = 50.0;
const BAR_COLOR: &str = "#1f77b4";

/// One chart panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title:   &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// `(label, value)` per bar.
    pub bars:    Vec<(String, f64)>,
}

/// The distance and balance panels, in that order.
pub fn panels(report: &SimReport) -> [Panel; 2] {
    let rows = summary_rows(report);
    [
        Panel {
            title:   "Distance Traveled by Vehicles",
            x_label: "Vehicle ID",
            y_label: "Distance Traveled (km)",
            bars:    rows.iter().map(|r| (r.vehicle_id.0.to_string(), r.traveled_km)).collect(),
        },
        Panel {
            title:   "Remaining Balance for Users",
            x_label: "Vehicle ID",
            y_label: "Remaining Balance (Rupees)",
            bars:    rows.iter().map(|r| (r.vehicle_id.0.to_string(), r.remaining_balance)).collect(),
        },
    ]
}

/// Render both panels into one SVG document.
pub fn render_svg(panels: &[Panel]) -> OutputResult<String> {
    let mut svg = String::new();
    write_svg(&mut svg, panels)?;
    Ok(svg)
}

fn write_svg(svg: &mut String, panels: &[Panel]) -> fmt::Result {
    let width = PANEL_W * panels.len() as f64;
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{PANEL_H}" viewBox="0 0 {width} {PANEL_H}" font-family="sans-serif" font-size="12">"#
    )?;
    writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
    for (i, panel) in panels.iter().enumerate() {
        write_panel(svg, panel, PANEL_W * i as f64)?;
    }
    writeln!(svg, "</svg>")
}

fn write_panel(svg: &mut String, panel: &Panel, x0: f64) -> fmt::Result {
    let plot_w = PANEL_W - MARGIN_L - MARGIN_R;
    let plot_h = PANEL_H - MARGIN_T - MARGIN_B;
    let left   = x0 + MARGIN_L;
    let top    = MARGIN_T;

    // Range always includes zero.
    let lo = panel.bars.iter().map(|b| b.1).fold(0.0_f64, f64::min);
    let mut hi = panel.bars.iter().map(|b| b.1).fold(0.0_f64, f64::max);
    if hi - lo <= f64::EPSILON {
        hi = lo + 1.0;
    }
    let y_of = |v: f64| top + plot_h * (hi - v) / (hi - lo);
    let baseline = y_of(0.0);

    writeln!(svg, r#"<g class="panel">"#)?;
    writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14">{}</text>"#,
        left + plot_w / 2.0,
        top / 2.0 + 5.0,
        escape(panel.title)
    )?;

    let slot = plot_w / panel.bars.len().max(1) as f64;
    let bar_w = slot * 0.6;
    for (i, (label, value)) in panel.bars.iter().enumerate() {
        let cx = left + slot * (i as f64 + 0.5);
        let y = y_of(*value).min(baseline);
        let h = (y_of(*value) - baseline).abs();
        writeln!(
            svg,
            r#"<rect class="bar" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{BAR_COLOR}"><title>{}: {:.2}</title></rect>"#,
            cx - bar_w / 2.0,
            y,
            bar_w,
            h,
            escape(label),
            value
        )?;
        writeln!(
            svg,
            r#"<text x="{cx:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            top + plot_h + 16.0,
            escape(label)
        )?;
    }

    // Axes and labels.
    writeln!(
        svg,
        r#"<line x1="{left:.1}" y1="{baseline:.1}" x2="{:.1}" y2="{baseline:.1}" stroke="black"/>"#,
        left + plot_w
    )?;
    writeln!(
        svg,
        r#"<line x1="{left:.1}" y1="{top:.1}" x2="{left:.1}" y2="{:.1}" stroke="black"/>"#,
        top + plot_h
    )?;
    for v in [lo, hi] {
        writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end">{v:.0}</text>"#,
            left - 6.0,
            y_of(v) + 4.0
        )?;
    }
    writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
        left + plot_w / 2.0,
        PANEL_H - 12.0,
        escape(panel.x_label)
    )?;
    writeln!(
        svg,
        r#"<text transform="translate({:.1},{:.1}) rotate(-90)" text-anchor="middle">{}</text>"#,
        x0 + 18.0,
        top + plot_h / 2.0,
        escape(panel.y_label)
    )?;
    writeln!(svg, "</g>")
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Writes `charts.svg`.
pub struct ChartWriter {
    path: PathBuf,
    svg:  Option<String>,
}

impl ChartWriter {
    pub fn new(dir: &Path) -> Self {
        Self { path: dir.join(FILE_NAME), svg: None }
    }
}

impl ReportWriter for ChartWriter {
    fn write_report(&mut self, report: &SimReport) -> OutputResult<()> {
        self.svg = Some(render_svg(&panels(report))?);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(svg) = self.svg.take() {
            fs::write(&self.path, svg)?;
        }
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
