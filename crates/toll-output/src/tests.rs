//! Tests for toll-output.

#[cfg(test)]
mod helpers {
    use tempfile::TempDir;
    use toll_core::{GateId, GeoPoint, Tick, UserId, VehicleId, VehicleKind};
    use toll_sim::{preset, NoopObserver, SimReport, VehicleReport};
    use toll_spatial::TollGate;

    pub fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    /// The preset scenario, run to completion.
    pub fn preset_report() -> SimReport {
        let mut sim = preset::builder(preset::config()).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();
        sim.report().unwrap()
    }

    /// One gate and one bus whose owner is in debt.
    pub fn odd_report() -> SimReport {
        let start = GeoPoint::new(12.97, 77.58);
        let gate = GeoPoint::new(12.9716, 77.5899);
        let end = GeoPoint::new(12.98, 77.60);
        SimReport {
            final_tick: Tick(10),
            gates:      vec![TollGate::new(GateId(9), gate, 5.0)],
            vehicles:   vec![VehicleReport {
                id:                VehicleId(3),
                owner:             UserId(1),
                kind:              VehicleKind::from("bus"),
                non_toll:          false,
                start,
                end,
                route:             vec![start, gate, end],
                trip_km:           4.0,
                traveled_km:       2.5,
                arrived:           false,
                remaining_balance: -120.0,
            }],
        }
    }
}

// ── Table ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use toll_core::VehicleId;

    use super::helpers::{odd_report, preset_report};
    use crate::{render_table, summary_rows, SummaryRow};

    #[test]
    fn rows_follow_report_order() {
        let rows = summary_rows(&preset_report());
        assert_eq!(
            rows,
            vec![
                SummaryRow { vehicle_id: VehicleId(1), traveled_km: 8.0, remaining_balance: 5520.0 },
                SummaryRow { vehicle_id: VehicleId(2), traveled_km: 7.0, remaining_balance: 6300.0 },
            ]
        );
    }

    #[test]
    fn rendered_table() {
        let text = render_table(&summary_rows(&preset_report()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Vehicle ID  Distance Traveled  Remaining Balance");
        assert_eq!(lines[1], "         1               8.00            5520.00");
        assert_eq!(lines[2], "         2               7.00            6300.00");
    }

    #[test]
    fn negative_balance_rendered() {
        let text = render_table(&summary_rows(&odd_report()));
        assert!(text.lines().nth(1).unwrap().ends_with("-120.00"));
    }

    #[test]
    fn empty_table_is_header_only() {
        assert_eq!(render_table(&[]).lines().count(), 1);
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::helpers::{preset_report, tmp};
    use crate::csv::CsvWriter;
    use crate::writer::ReportWriter;

    #[test]
    fn csv_file_created() {
        let dir = tmp();
        let w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("summary.csv").exists());
        assert_eq!(w.path(), dir.path().join("summary.csv"));
    }

    #[test]
    fn csv_header_and_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_report(&preset_report()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["Vehicle ID", "Distance Traveled", "Remaining Balance"]);

        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "8.00");
        assert_eq!(&rows[0][2], "5520.00");
        assert_eq!(&rows[1][0], "2");
        assert_eq!(&rows[1][2], "6300.00");
    }
}

// ── Map ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod map {
    use super::helpers::{odd_report, preset_report, tmp};
    use crate::map::{render_page, MapPayload, MapWriter};
    use crate::writer::ReportWriter;

    #[test]
    fn payload_counts() {
        let payload = MapPayload::from_report(&preset_report());
        assert_eq!(payload.center, [12.9716, 77.5946]);
        assert_eq!(payload.zoom, 14);
        assert_eq!(payload.gates.len(), 4);
        assert_eq!(payload.markers.len(), 4);
        assert_eq!(payload.routes.len(), 2);
        assert_eq!(payload.gates[0].tooltip, "Toll Gate 1");
        assert_eq!(payload.gates[3].tooltip, "Toll Gate 4");
    }

    #[test]
    fn markers_keyed_by_kind() {
        let payload = MapPayload::from_report(&preset_report());
        let colors: Vec<_> = payload.markers.iter().map(|m| m.color).collect();
        let icons: Vec<_> = payload.markers.iter().map(|m| m.icon).collect();
        assert_eq!(colors, ["blue", "green", "blue", "green"]);
        assert_eq!(icons, ["truck", "truck", "car", "car"]);

        // Unknown kinds fall back to the generic icon.
        let odd = MapPayload::from_report(&odd_report());
        assert!(odd.markers.iter().all(|m| m.icon == "car"));
    }

    #[test]
    fn routes_are_lat_lon_polylines() {
        let report = odd_report();
        let payload = MapPayload::from_report(&report);
        let route = &payload.routes[0];
        assert_eq!(route.vehicle, 3);
        assert_eq!(route.points, vec![[12.97, 77.58], [12.9716, 77.5899], [12.98, 77.60]]);
        assert_eq!(route.color, "blue");
        assert_eq!(route.weight, 2.5);
    }

    #[test]
    fn payload_embedded_as_json() {
        let dir = tmp();
        let mut w = MapWriter::new(dir.path());
        w.write_report(&preset_report()).unwrap();
        w.finish().unwrap();

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("leaflet"));

        let start = html.find(r#"type="application/json">"#).unwrap() + r#"type="application/json">"#.len();
        let end = start + html[start..].find("</script>").unwrap();
        let json: serde_json::Value = serde_json::from_str(&html[start..end]).unwrap();
        assert_eq!(json["gates"].as_array().unwrap().len(), 4);
        assert_eq!(json["markers"].as_array().unwrap().len(), 4);
        assert_eq!(json["routes"].as_array().unwrap().len(), 2);
        assert_eq!(json["routes"][0]["points"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn script_close_is_escaped() {
        let page = render_page(r#"{"x":"</script>"}"#);
        assert_eq!(page.matches("</script>").count(), 4);
        assert!(page.contains(r#"<\/script>"#));
    }
}

// ── Chart ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod chart {
    use super::helpers::{odd_report, preset_report, tmp};
    use crate::chart::{panels, render_svg, ChartWriter};
    use crate::writer::ReportWriter;

    #[test]
    fn panel_titles_and_values() {
        let [distance, balance] = panels(&preset_report());
        assert_eq!(distance.title, "Distance Traveled by Vehicles");
        assert_eq!(balance.title, "Remaining Balance for Users");
        assert_eq!(distance.bars, vec![("1".to_owned(), 8.0), ("2".to_owned(), 7.0)]);
        assert_eq!(balance.bars, vec![("1".to_owned(), 5520.0), ("2".to_owned(), 6300.0)]);
    }

    #[test]
    fn one_bar_per_vehicle_per_panel() {
        let svg = render_svg(&panels(&preset_report())).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches(r#"class="panel""#).count(), 2);
        assert_eq!(svg.matches(r#"class="bar""#).count(), 4);
        assert!(svg.contains("Distance Traveled by Vehicles"));
        assert!(svg.contains("Remaining Balance for Users"));
    }

    #[test]
    fn negative_bar_has_positive_height() {
        let svg = render_svg(&panels(&odd_report())).unwrap();
        assert!(!svg.contains(r#"height="-"#));
        assert_eq!(svg.matches(r#"class="bar""#).count(), 2);
    }

    #[test]
    fn writer_creates_file() {
        let dir = tmp();
        let mut w = ChartWriter::new(dir.path());
        w.write_report(&preset_report()).unwrap();
        w.finish().unwrap();
        let svg = std::fs::read_to_string(dir.path().join("charts.svg")).unwrap();
        assert_eq!(svg.matches(r#"class="bar""#).count(), 4);
    }
}

// ── Artifacts and logging ─────────────────────────────────────────────────────

#[cfg(test)]
mod artifacts {
    use toll_core::{GateId, Tick, VehicleId};
    use toll_sim::{preset, TollEvent};

    use super::helpers::{preset_report, tmp};
    use crate::observer::format_event;
    use crate::{write_artifacts, LogObserver};

    #[test]
    fn writes_all_three_files() {
        let dir = tmp();
        let out = dir.path().join("nested").join("out");
        let paths = write_artifacts(&out, &preset_report()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["summary.csv", "index.html", "charts.svg"]);
        assert!(paths.iter().all(|p| p.exists()));
    }

    #[test]
    fn event_lines() {
        let gate = TollEvent::GateEntered { tick: Tick(0), vehicle: VehicleId(1), gate: GateId(3) };
        assert_eq!(format_event(&gate), "Alert: Vehicle 1 has entered Toll Gate 3");

        let adv = TollEvent::VehicleAdvanced {
            tick:        Tick(0),
            vehicle:     VehicleId(2),
            distance_km: 1.0,
            toll:        100.0,
            balance:     6900.0,
        };
        assert_eq!(
            format_event(&adv),
            "Vehicle 2: Distance Traveled = 1.00 km, Toll = 100.00 Rs, User Balance = 6900.00 Rs"
        );

        let pass = TollEvent::GatePassed { tick: Tick(0), vehicle: VehicleId(2) };
        assert_eq!(format_event(&pass), "Alert: Vehicle 2 has passed through a toll gate.");
    }

    #[test]
    fn log_observer_counts_events() {
        let mut sim = preset::builder(preset::config()).build().unwrap();
        let mut obs = LogObserver::default();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.advances, 8 + 7);
        assert_eq!(obs.passes, 8 + 7);
        // At most one alert per gate per advance; re-entered zones raise none.
        assert!(obs.gate_alerts <= 4 * (8 + 7));
        assert_eq!(obs.arrivals, 2);
    }
}
