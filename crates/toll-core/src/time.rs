//! Simulation time model.
//!
//! Time is a `Tick` counter starting at 0.  Each tick stands for
//! `tick_duration_secs` of simulated time, so a vehicle at `v` km/h covers
//! `v * tick_duration_secs / 3600` km per tick (1 km at the defaults).

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Index of one discrete simulation step.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick {}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The current tick plus how long a tick lasts.
#[derive(Clone, Debug)]
pub struct SimClock {
    pub tick_duration_secs: u32,
    pub current_tick:       Tick,
}

impl SimClock {
    pub fn new(tick_duration_secs: u32) -> Self {
        Self { tick_duration_secs, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.next();
    }

    /// Simulated seconds since tick 0.
    pub fn elapsed_secs(&self) -> u64 {
        self.current_tick.0 * u64::from(self.tick_duration_secs)
    }

    /// Tick length in hours; times a km/h speed gives km per tick.
    #[inline]
    pub fn tick_hours(&self) -> f64 {
        f64::from(self.tick_duration_secs) / 3_600.0
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Horizon, tick length, and seed for one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Seconds per tick.  Default: 60.
    pub tick_duration_secs: u32,

    /// Total ticks to simulate.  The run never stops earlier.  Zero is allowed.
    pub total_ticks: u64,

    /// Seed for start/end point generation.
    pub seed: u64,
}

impl SimConfig {
    /// First tick that is *not* simulated.
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_duration_secs == 0 {
            return Err(CoreError::Config("tick_duration_secs must be > 0".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    /// 100 one-minute ticks, seed 42.
    fn default() -> Self {
        Self {
            tick_duration_secs: 60,
            total_ticks:        100,
            seed:               42,
        }
    }
}
