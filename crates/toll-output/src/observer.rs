//! `LogObserver` — writes simulation events through the `log` facade.

use toll_core::Tick;
use toll_sim::{SimObserver, TollEvent};

/// A [`SimObserver`] that logs gate alerts, toll passes, and per-tick progress at `info`,
/// arrivals and tick boundaries at `debug`.
///
/// Counts events as it goes so callers can print a short run summary.
#[derive(Debug, Default)]
pub struct LogObserver {
    pub gate_alerts: u64,
    pub advances:    u64,
    pub passes:      u64,
    pub arrivals:    u64,
}

/// The log line for one event.
pub fn format_event(event: &TollEvent) -> String {
    match event {
        TollEvent::GateEntered { vehicle, gate, .. } => {
            format!("Alert: Vehicle {} has entered Toll Gate {}", vehicle.0, gate.0)
        }
        TollEvent::VehicleAdvanced { vehicle, distance_km, toll, balance, .. } => format!(
            "Vehicle {}: Distance Traveled = {:.2} km, Toll = {:.2} Rs, User Balance = {:.2} Rs",
            vehicle.0, distance_km, toll, balance
        ),
        TollEvent::GatePassed { vehicle, .. } => {
            format!("Alert: Vehicle {} has passed through a toll gate.", vehicle.0)
        }
        TollEvent::VehicleArrived { vehicle, .. } => {
            format!("Vehicle {} has reached its destination", vehicle.0)
        }
    }
}

impl SimObserver for LogObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        log::trace!("tick {} start", tick.0);
    }

    fn on_event(&mut self, event: &TollEvent) {
        match event {
            TollEvent::GateEntered { .. } => {
                self.gate_alerts += 1;
                log::info!("{}", format_event(event));
            }
            TollEvent::VehicleAdvanced { .. } => {
                self.advances += 1;
                log::info!("{}", format_event(event));
            }
            TollEvent::GatePassed { .. } => {
                self.passes += 1;
                log::info!("{}", format_event(event));
            }
            TollEvent::VehicleArrived { .. } => {
                self.arrivals += 1;
                log::debug!("{}", format_event(event));
            }
        }
    }

    fn on_tick_end(&mut self, tick: Tick, moving: usize) {
        log::debug!("tick {} done, {} vehicle(s) moving", tick.0, moving);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        log::info!(
            "simulation finished at tick {}: {} gate alert(s), {} advance(s), {} pass(es), {} arrival(s)",
            final_tick.0,
            self.gate_alerts,
            self.advances,
            self.passes,
            self.arrivals
        );
    }
}
