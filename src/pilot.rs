//! Demo autopilot
//!
//! Plays levels headlessly for the native demo and for tests. The pilot
//! holds descent speed near a target with a little seeded reaction jitter,
//! so runs with the same seed are identical.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Telemetry, ThrustQueue};

/// Seeded autopilot feeding a thrust queue
#[derive(Debug, Clone)]
pub struct DemoPilot {
    rng: Pcg32,
    thrusts: ThrustQueue,
    /// Fraction of the safe speed the pilot aims to descend at
    caution: f64,
    /// Largest random shift of the reaction threshold (m/s)
    jitter: i32,
}

impl DemoPilot {
    pub fn new(seed: u64, thrusts: ThrustQueue) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            thrusts,
            caution: 0.5,
            jitter: 3,
        }
    }

    pub fn with_caution(mut self, caution: f64) -> Self {
        self.caution = caution.clamp(0.05, 1.0);
        self
    }

    /// Descent speed the pilot tries not to exceed for a given limit
    pub fn target_speed(&self, max_safe_speed: i32) -> i32 {
        ((f64::from(max_safe_speed) * self.caution) as i32).max(1)
    }

    /// Look at the gauges and maybe fire; returns true if a unit was queued
    pub fn react(&mut self, telemetry: &Telemetry) -> bool {
        let shift = self.rng.random_range(-self.jitter..=self.jitter);
        let threshold = (self.target_speed(telemetry.max_safe_speed) + shift).max(1);

        if -telemetry.speed > threshold && self.thrusts.pending() == 0 {
            self.thrusts.request();
            true
        } else {
            false
        }
    }
}
