//! Toll gates and the gate table.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over gate locations lets the toll calculation
//! skip gates whose zone cannot touch a route segment.  Candidates are always
//! returned in table order so detection is deterministic regardless of how
//! the tree is laid out.

use std::collections::BTreeSet;

use rstar::{RTree, RTreeObject, AABB};

use toll_core::{GateId, GeoPoint};

use crate::{Route, SpatialError, SpatialResult};

/// A fixed charging point with a per-kilometre rate.
#[derive(Clone, Debug, PartialEq)]
pub struct TollGate {
    pub id:          GateId,
    pub location:    GeoPoint,
    pub rate_per_km: f64,
}

impl TollGate {
    pub fn new(id: GateId, location: GeoPoint, rate_per_km: f64) -> Self {
        Self { id, location, rate_per_km }
    }
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a `[lon, lat]` point and the gate's slot in
/// table order.
#[derive(Clone)]
struct GateEntry {
    point: [f64; 2],
    slot:  usize,
}

impl RTreeObject for GateEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

// ── GateTable ─────────────────────────────────────────────────────────────────

/// The immutable, ordered set of toll gates for a run.
pub struct GateTable {
    gates: Vec<TollGate>,
    index: RTree<GateEntry>,
}

impl GateTable {
    /// Validate and index `gates`, keeping their order.
    ///
    /// # Errors
    ///
    /// Duplicate ids and negative or non-finite rates are rejected.
    pub fn new(gates: Vec<TollGate>) -> SpatialResult<Self> {
        let mut seen = BTreeSet::new();
        for gate in &gates {
            if !seen.insert(gate.id) {
                return Err(SpatialError::DuplicateGate(gate.id));
            }
            if !gate.rate_per_km.is_finite() || gate.rate_per_km < 0.0 {
                return Err(SpatialError::InvalidRate { id: gate.id, rate: gate.rate_per_km });
            }
        }

        let entries = gates
            .iter()
            .enumerate()
            .map(|(slot, g)| GateEntry { point: [g.location.lon, g.location.lat], slot })
            .collect();

        let index = RTree::bulk_load(entries);
        log::debug!("indexed {} toll gate(s)", index.size());
        Ok(Self { gates, index })
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Gates in table order.
    pub fn iter(&self) -> impl Iterator<Item = &TollGate> {
        self.gates.iter()
    }

    /// Look up a gate by id.
    pub fn get(&self, id: GateId) -> SpatialResult<&TollGate> {
        self.gates
            .iter()
            .find(|g| g.id == id)
            .ok_or(SpatialError::UnknownGate(id))
    }

    /// Gates whose zone of `radius_deg` could intersect `route`, in table
    /// order.
    ///
    /// Each segment's bounding box is grown by the radius and queried against
    /// the R-tree; a hit is a candidate, not a confirmed intersection.
    pub fn candidates_near(&self, route: &Route, radius_deg: f64) -> Vec<&TollGate> {
        let mut slots = BTreeSet::new();
        for (a, b) in route.segments() {
            let lower = [a.lon.min(b.lon) - radius_deg, a.lat.min(b.lat) - radius_deg];
            let upper = [a.lon.max(b.lon) + radius_deg, a.lat.max(b.lat) + radius_deg];
            let envelope = AABB::from_corners(lower, upper);
            slots.extend(self.index.locate_in_envelope_intersecting(&envelope).map(|e| e.slot));
        }
        slots.into_iter().map(|slot| &self.gates[slot]).collect()
    }
}

impl std::fmt::Debug for GateTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateTable").field("gates", &self.gates).finish()
    }
}
