//! Deterministic simulation-level RNG.
//!
//! The only randomness in a run is the choice of vehicle start/end points.
//! All of it is drawn from one `SimRng` seeded from `SimConfig::seed`, in
//! ascending vehicle order, so the same seed always yields the same routes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AreaBounds, GeoPoint};

/// Simulation-level RNG for the setup phase.
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// A uniformly distributed point inside `area` (bounds inclusive).
    ///
    /// Longitude is drawn before latitude.
    pub fn point_in_area(&mut self, area: &AreaBounds) -> GeoPoint {
        let max = area.max_corner();
        let lon = self.0.gen_range(area.origin.lon..=max.lon);
        let lat = self.0.gen_range(area.origin.lat..=max.lat);
        GeoPoint::new(lat, lon)
    }
}
