//! Straight-line route polylines.
//!
//! A vehicle's route is the polyline through its start point, every toll
//! gate in table order, and its end point.  No path search is involved.

use toll_core::GeoPoint;

use crate::{GateTable, SpatialError, SpatialResult};

/// An immutable polyline with precomputed great-circle lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<GeoPoint>,
    /// `cumulative_km[i]` is the distance from `points[0]` to `points[i]`.
    /// Same length as `points`; first entry is `0.0`.
    cumulative_km: Vec<f64>,
}

impl Route {
    /// Build a route from an ordered list of vertices.
    ///
    /// # Errors
    ///
    /// [`SpatialError::DegenerateRoute`] if there are fewer than two points
    /// or the total length is zero, since interpolation divides by it.
    pub fn new(points: Vec<GeoPoint>) -> SpatialResult<Self> {
        let mut cumulative_km = Vec::with_capacity(points.len());
        let mut total = 0.0_f64;
        cumulative_km.push(0.0);
        for pair in points.windows(2) {
            total += pair[0].distance_km(pair[1]);
            cumulative_km.push(total);
        }

        if points.len() < 2 || total.is_nan() || total <= 0.0 {
            return Err(SpatialError::DegenerateRoute {
                points:    points.len(),
                length_km: total,
            });
        }

        Ok(Self { points, cumulative_km })
    }

    /// `start → gate 1 → … → gate n → end`, gates in table order.
    pub fn through_gates(start: GeoPoint, gates: &GateTable, end: GeoPoint) -> SpatialResult<Self> {
        let mut points = Vec::with_capacity(gates.len() + 2);
        points.push(start);
        points.extend(gates.iter().map(|g| g.location));
        points.push(end);
        Self::new(points)
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Consecutive vertex pairs, in travel order.
    pub fn segments(&self) -> impl Iterator<Item = (GeoPoint, GeoPoint)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn start(&self) -> GeoPoint {
        self.points[0]
    }

    pub fn end(&self) -> GeoPoint {
        self.points[self.points.len() - 1]
    }

    /// Total great-circle length in kilometres.  Always `> 0`.
    #[inline]
    pub fn length_km(&self) -> f64 {
        self.cumulative_km[self.cumulative_km.len() - 1]
    }

    /// Position at `fraction` of the total length along the route.
    ///
    /// `fraction` is clamped to `[0.0, 1.0]`; `0.0` returns the start point
    /// and `1.0` the end point exactly.  Within a segment the position is a
    /// linear blend of its two vertices.
    pub fn interpolate(&self, fraction: f64) -> GeoPoint {
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        if fraction <= 0.0 {
            return self.start();
        }
        if fraction >= 1.0 {
            return self.end();
        }

        let target = fraction * self.length_km();
        // First vertex strictly beyond `target`; the segment ends there.
        let hi = self
            .cumulative_km
            .partition_point(|&km| km <= target)
            .clamp(1, self.points.len() - 1);
        let lo = hi - 1;

        let seg_len = self.cumulative_km[hi] - self.cumulative_km[lo];
        if seg_len <= 0.0 {
            return self.points[lo];
        }
        let t = (target - self.cumulative_km[lo]) / seg_len;
        self.points[lo].lerp(self.points[hi], t)
    }

    /// Position after travelling `km` kilometres from the start.
    pub fn point_at_km(&self, km: f64) -> GeoPoint {
        self.interpolate(km / self.length_km())
    }
}
