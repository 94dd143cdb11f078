//! Leaflet map renderer.
//!
//! The page is self-contained apart from the Leaflet and Font Awesome CDN
//! assets.  Everything drawn comes from one JSON payload ([`MapPayload`])
//! embedded in a `<script>` block, so tests can check the payload without
//! parsing HTML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use toll_core::GeoPoint;
use toll_sim::{preset, SimReport};

use crate::writer::ReportWriter;
use crate::OutputResult;

pub const FILE_NAME: &str = "index.html";
pub const ZOOM: u8 = 14;
pub const ROUTE_COLOR: &str = "blue";
pub const ROUTE_WEIGHT: f64 = 2.5;

/// `[lat, lon]`, the order Leaflet expects.
type LatLon = [f64; 2];

fn lat_lon(p: GeoPoint) -> LatLon {
    [p.lat, p.lon]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateMarker {
    pub id:       u32,
    pub position: LatLon,
    pub tooltip:  String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleMarker {
    pub position: LatLon,
    pub color:    &'static str,
    /// Font Awesome icon name.
    pub icon:     &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLine {
    pub vehicle: u32,
    pub points:  Vec<LatLon>,
    pub color:   &'static str,
    pub weight:  f64,
}

/// Everything the page draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPayload {
    pub center:  LatLon,
    pub zoom:    u8,
    pub gates:   Vec<GateMarker>,
    /// Start (blue) then end (green) marker for each vehicle.
    pub markers: Vec<VehicleMarker>,
    pub routes:  Vec<RouteLine>,
}

impl MapPayload {
    pub fn from_report(report: &SimReport) -> Self {
        let gates = report
            .gates
            .iter()
            .map(|g| GateMarker {
                id:       g.id.0,
                position: lat_lon(g.location),
                tooltip:  format!("Toll Gate {}", g.id.0),
            })
            .collect();

        let markers = report
            .vehicles
            .iter()
            .flat_map(|v| {
                let icon = v.kind.icon();
                [
                    VehicleMarker { position: lat_lon(v.start), color: "blue", icon },
                    VehicleMarker { position: lat_lon(v.end), color: "green", icon },
                ]
            })
            .collect();

        let routes = report
            .vehicles
            .iter()
            .map(|v| RouteLine {
                vehicle: v.id.0,
                points:  v.route.iter().copied().map(lat_lon).collect(),
                color:   ROUTE_COLOR,
                weight:  ROUTE_WEIGHT,
            })
            .collect();

        Self {
            center: lat_lon(preset::MAP_CENTER),
            zoom: ZOOM,
            gates,
            markers,
            routes,
        }
    }
}

/// Renders [`MapPayload`] into a Leaflet page.
pub struct MapWriter {
    path: PathBuf,
    html: Option<String>,
}

impl MapWriter {
    pub fn new(dir: &Path) -> Self {
        Self { path: dir.join(FILE_NAME), html: None }
    }
}

impl ReportWriter for MapWriter {
    fn write_report(&mut self, report: &SimReport) -> OutputResult<()> {
        let payload = MapPayload::from_report(report);
        let json = serde_json::to_string(&payload)?;
        self.html = Some(render_page(&json));
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(html) = self.html.take() {
            fs::write(&self.path, html)?;
        }
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

/// Wrap the JSON payload in the page template.
///
/// `</` is escaped so a payload string can never close the script block.
pub fn render_page(payload_json: &str) -> String {
    let payload = payload_json.replace("</", "<\\/");
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Toll simulation</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<script src="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script id="payload" type="application/json">{payload}</script>
<script>
const data = JSON.parse(document.getElementById("payload").textContent);
const map = L.map("map").setView(data.center, data.zoom);
L.tileLayer("https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
  attribution: "&copy; OpenStreetMap contributors"
}}).addTo(map);
for (const g of data.gates) {{
  L.marker(g.position).bindTooltip(g.tooltip).addTo(map);
}}
for (const m of data.markers) {{
  const icon = L.AwesomeMarkers.icon({{ icon: m.icon, prefix: "fa", markerColor: m.color }});
  L.marker(m.position, {{ icon }}).addTo(map);
}}
for (const r of data.routes) {{
  L.polyline(r.points, {{ color: r.color, weight: r.weight }}).addTo(map);
}}
</script>
</body>
</html>
"#
    )
}
