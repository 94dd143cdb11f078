//! Circular toll-gate zones and route clipping.
//!
//! A zone is a circle of `radius_deg` around a gate in planar (lon, lat)
//! space.  Clipping a route against it yields the parts of the polyline that
//! lie inside; their great-circle length is what a per-km rate applies to.

use toll_core::GeoPoint;

use crate::{Route, SpatialError, SpatialResult};

/// Default zone radius in degrees (roughly 110 m).
pub const DEFAULT_RADIUS_DEG: f64 = 0.001;

/// Tolerance for joining clipped pieces that share a vertex.
const JOIN_EPS_DEG: f64 = 1e-12;

/// A circular zone around a gate location.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GateZone {
    pub center:     GeoPoint,
    pub radius_deg: f64,
}

impl GateZone {
    pub fn new(center: GeoPoint, radius_deg: f64) -> SpatialResult<Self> {
        if !radius_deg.is_finite() || radius_deg <= 0.0 {
            return Err(SpatialError::InvalidRadius(radius_deg));
        }
        Ok(Self { center, radius_deg })
    }

    /// Portion of segment `a → b` inside the circle, or `None` if the segment
    /// misses it or only touches it at a single point.
    ///
    /// Solves `|a + t(b - a) - c|² = r²` for `t` and intersects the root
    /// interval with `[0, 1]`.
    pub fn clip_segment(&self, a: GeoPoint, b: GeoPoint) -> Option<(GeoPoint, GeoPoint)> {
        let (dx, dy) = (b.lon - a.lon, b.lat - a.lat);
        let (fx, fy) = (a.lon - self.center.lon, a.lat - self.center.lat);

        let qa = dx * dx + dy * dy;
        if qa == 0.0 {
            return None;
        }
        let qb = 2.0 * (fx * dx + fy * dy);
        let qc = fx * fx + fy * fy - self.radius_deg * self.radius_deg;

        let disc = qb * qb - 4.0 * qa * qc;
        if disc <= 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let t0 = ((-qb - root) / (2.0 * qa)).max(0.0);
        let t1 = ((-qb + root) / (2.0 * qa)).min(1.0);
        if t0 >= t1 {
            return None;
        }

        let entry = if t0 == 0.0 { a } else { a.lerp(b, t0) };
        let exit  = if t1 == 1.0 { b } else { a.lerp(b, t1) };
        Some((entry, exit))
    }

    /// Clip the whole route against the zone.
    ///
    /// Pieces from consecutive segments that meet at a shared vertex are
    /// joined, so a route passing *through* the gate point yields one piece.
    pub fn clip_route(&self, route: &Route) -> ZoneClip {
        let mut pieces: Vec<Vec<GeoPoint>> = Vec::new();
        for (a, b) in route.segments() {
            let Some((entry, exit)) = self.clip_segment(a, b) else {
                continue;
            };
            match pieces.last_mut() {
                Some(piece) if piece[piece.len() - 1].approx_eq(entry, JOIN_EPS_DEG) => {
                    piece.push(exit);
                }
                _ => pieces.push(vec![entry, exit]),
            }
        }
        ZoneClip { pieces }
    }
}

/// The parts of a route inside one gate zone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneClip {
    /// Disjoint polylines, in travel order.  Each has at least two points.
    pub pieces: Vec<Vec<GeoPoint>>,
}

impl ZoneClip {
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Great-circle length of all pieces, in kilometres.
    pub fn length_km(&self) -> f64 {
        self.pieces
            .iter()
            .flat_map(|piece| piece.windows(2))
            .map(|w| w[0].distance_km(w[1]))
            .sum()
    }
}
