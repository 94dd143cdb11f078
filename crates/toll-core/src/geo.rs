//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Gate zones are only a few
//! thousandths of a degree wide, so single precision would visibly distort
//! the clipped lengths.

use crate::{CoreError, CoreResult};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.008_8;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Linear blend between `self` (t = 0) and `other` (t = 1) in
    /// coordinate space.
    #[inline]
    pub fn lerp(self, other: GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * t,
            lon: self.lon + (other.lon - self.lon) * t,
        }
    }

    /// `true` if both coordinates are within `eps` degrees of `other`.
    #[inline]
    pub fn approx_eq(self, other: GeoPoint, eps: f64) -> bool {
        (self.lat - other.lat).abs() <= eps && (self.lon - other.lon).abs() <= eps
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── AreaBounds ────────────────────────────────────────────────────────────────

/// Square sampling area for random vehicle start/end points.
///
/// The area spans `size / 100` degrees in both latitude and longitude from
/// `origin` (the south-west corner).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaBounds {
    pub origin: GeoPoint,
    pub size:   f64,
}

impl AreaBounds {
    pub fn new(origin: GeoPoint, size: f64) -> CoreResult<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(CoreError::Config(format!("area size must be positive, got {size}")));
        }
        Ok(Self { origin, size })
    }

    /// Side length of the square in degrees.
    #[inline]
    pub fn span_deg(&self) -> f64 {
        self.size / 100.0
    }

    /// The north-east corner.
    pub fn max_corner(&self) -> GeoPoint {
        GeoPoint::new(self.origin.lat + self.span_deg(), self.origin.lon + self.span_deg())
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: GeoPoint) -> bool {
        let max = self.max_corner();
        (self.origin.lat..=max.lat).contains(&p.lat)
            && (self.origin.lon..=max.lon).contains(&p.lon)
    }
}

impl Default for AreaBounds {
    /// Lon 77.0 / lat 12.0, size 100 (one degree square).
    fn default() -> Self {
        Self { origin: GeoPoint::new(12.0, 77.0), size: 100.0 }
    }
}
