//! Simulation observer trait for progress reporting and event collection.

use toll_core::Tick;

use crate::TollEvent;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — arrival counter
///
/// ```rust,ignore
/// struct Arrivals(usize);
///
/// impl SimObserver for Arrivals {
///     fn on_event(&mut self, event: &TollEvent) {
///         if matches!(event, TollEvent::VehicleArrived { .. }) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any vehicle moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every notification, in emission order.
    fn on_event(&mut self, _event: &TollEvent) {}

    /// Called at the end of each tick.
    ///
    /// `moving` is the number of vehicles still travelling after this tick.
    fn on_tick_end(&mut self, _tick: Tick, _moving: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Records every event in memory, in order.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<TollEvent>,
}

impl SimObserver for EventLog {
    fn on_event(&mut self, event: &TollEvent) {
        self.events.push(event.clone());
    }
}

/// Fan out to two observers, `A` first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_event(&mut self, event: &TollEvent) {
        self.0.on_event(event);
        self.1.on_event(event);
    }

    fn on_tick_end(&mut self, tick: Tick, moving: usize) {
        self.0.on_tick_end(tick, moving);
        self.1.on_tick_end(tick, moving);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }
}
