//! Fixed timestep simulation tick
//!
//! One tick = gravity, then touchdown check, then at most one thrust unit,
//! then altitude integration. The order is part of the game's feel and must
//! not change.

use super::outcome::LevelOutcome;
use super::state::LevelState;
use super::thrust::ThrustQueue;

/// Result of advancing the attempt by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still above the surface
    Descending,
    /// Altitude reached zero at the start of this tick
    Touchdown(LevelOutcome),
}

/// Descent progress, capped at 1 but not floored
///
/// Climbing above the start altitude yields a negative value.
#[inline]
pub fn progress_fraction(initial_altitude: i32, altitude: i32) -> f64 {
    let fraction =
        (f64::from(initial_altitude) - f64::from(altitude)) / f64::from(initial_altitude);
    fraction.min(1.0)
}

/// Advance the attempt by one fixed tick
pub fn tick(state: &mut LevelState, thrusts: &ThrustQueue) -> TickOutcome {
    state.ticks += 1;
    state.current_speed = state.current_speed.saturating_sub(state.body.gravity());

    if state.altitude <= 0 {
        state.altitude = 0;
        state.progress = 1.0;
        let outcome = LevelOutcome::from_landing(state.landed_safely());
        log::info!(
            "Touchdown on {} at {} m/s (limit {}): {:?}",
            state.body.name(),
            -state.current_speed,
            state.max_safe_speed,
            outcome
        );
        return TickOutcome::Touchdown(outcome);
    }

    // A request that cannot be paid for goes back on the queue
    if thrusts.take_one() {
        if state.vehicle.consume_fuel() {
            state.current_speed = state.current_speed.saturating_add(state.vehicle.thrust_accel());
        } else {
            thrusts.request();
        }
    }

    state.altitude = state.altitude.saturating_add(state.current_speed);
    state.progress = progress_fraction(state.initial_altitude, state.altitude);

    log::debug!(
        "tick {}: alt={} speed={} fuel={} pending={}",
        state.ticks,
        state.altitude,
        state.current_speed,
        state.vehicle.fuel(),
        thrusts.pending()
    );

    TickOutcome::Descending
}
