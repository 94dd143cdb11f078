//! Toll calculation.
//!
//! # Zone toll
//!
//! For every gate whose zone the route passes through, the great-circle
//! length of the route inside the zone is multiplied by the gate's rate.
//! The route is fixed for a vehicle's lifetime, so the zone toll is the same
//! on every tick.
//!
//! A gate counts only when the route's intersection with its zone is a single
//! connected piece.  A route that leaves a zone and comes back (two or more
//! pieces) is not charged for that gate and does not raise a gate event.
//!
//! # Flat-fee override
//!
//! [`TollPolicy::FlatFeeOverride`] still computes the zone toll, and still
//! reports the gates entered, but charges a fixed per-user fee instead.  The
//! preset scenario runs with it switched on.  [`TollPolicy::ZoneRate`]
//! charges the geometric toll.

use std::collections::BTreeMap;

use toll_core::{GateId, UserId};
use toll_spatial::{GateTable, GateZone, Route, SpatialError};

use crate::{SimError, SimResult};

// ── FlatFeeSchedule ───────────────────────────────────────────────────────────

/// Fixed per-tick fee for each user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatFeeSchedule {
    fees: BTreeMap<UserId, f64>,
}

impl FlatFeeSchedule {
    pub fn new(fees: impl IntoIterator<Item = (UserId, f64)>) -> Self {
        Self { fees: fees.into_iter().collect() }
    }

    pub fn fee(&self, user: UserId) -> Option<f64> {
        self.fees.get(&user).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (UserId, f64)> + '_ {
        self.fees.iter().map(|(&u, &f)| (u, f))
    }
}

// ── TollPolicy ────────────────────────────────────────────────────────────────

/// What a non-exempt vehicle is actually charged each tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TollPolicy {
    /// Charge the accumulated zone toll.
    #[default]
    ZoneRate,
    /// Compute the zone toll (gate events still fire) but charge the owner's
    /// flat fee instead.
    FlatFeeOverride(FlatFeeSchedule),
}

// ── TollAssessment ────────────────────────────────────────────────────────────

/// Result of assessing one vehicle for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TollAssessment {
    /// Gates whose zone the route passes through exactly once, in table order.
    pub gates_entered: Vec<GateId>,
    /// Sum of `km in zone × rate` over `gates_entered`.
    pub zone_toll:     f64,
    /// The amount to deduct, after the policy is applied.
    pub charged:       f64,
}

// ── TollCalculator ────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct TollCalculator {
    policy:     TollPolicy,
    radius_deg: f64,
}

impl TollCalculator {
    /// # Errors
    ///
    /// Rejects a non-positive or non-finite zone radius, and negative or
    /// non-finite flat fees.
    pub fn new(policy: TollPolicy, radius_deg: f64) -> SimResult<Self> {
        if !radius_deg.is_finite() || radius_deg <= 0.0 {
            return Err(SpatialError::InvalidRadius(radius_deg).into());
        }
        if let TollPolicy::FlatFeeOverride(schedule) = &policy {
            if let Some((user, fee)) = schedule.iter().find(|(_, f)| !f.is_finite() || *f < 0.0) {
                return Err(SimError::Config(format!("flat fee {fee} for user {} is invalid", user.0)));
            }
        }
        Ok(Self { policy, radius_deg })
    }

    pub fn policy(&self) -> &TollPolicy {
        &self.policy
    }

    pub fn radius_deg(&self) -> f64 {
        self.radius_deg
    }

    /// Toll owed by `owner`'s vehicle travelling `route` for one tick.
    ///
    /// Exempt vehicles get an empty assessment without any geometry work.
    ///
    /// # Errors
    ///
    /// [`SimError::NoFlatFee`] if the flat-fee override is active and
    /// `owner` has no fee.
    pub fn assess(
        &self,
        route:    &Route,
        owner:    UserId,
        non_toll: bool,
        gates:    &GateTable,
    ) -> SimResult<TollAssessment> {
        if non_toll {
            return Ok(TollAssessment::default());
        }

        let mut assessment = TollAssessment::default();
        for gate in gates.candidates_near(route, self.radius_deg) {
            let zone = GateZone::new(gate.location, self.radius_deg)?;
            let clip = zone.clip_route(route);
            if clip.is_empty() {
                continue;
            }
            if clip.pieces.len() > 1 {
                log::debug!(
                    "route re-enters gate {} zone ({} pieces), not charged",
                    gate.id.0,
                    clip.pieces.len()
                );
                continue;
            }
            let km = clip.length_km();
            log::debug!("route crosses gate {} zone for {:.4} km", gate.id.0, km);
            assessment.zone_toll += km * gate.rate_per_km;
            assessment.gates_entered.push(gate.id);
        }

        assessment.charged = match &self.policy {
            TollPolicy::ZoneRate => assessment.zone_toll,
            TollPolicy::FlatFeeOverride(schedule) => {
                schedule.fee(owner).ok_or(SimError::NoFlatFee(owner))?
            }
        };
        Ok(assessment)
    }
}
