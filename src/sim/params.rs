//! Level parameter generation
//!
//! Parameters are a pure function of `(difficulty, level)`. All arithmetic is
//! integer arithmetic with truncating division, evaluated left to right.

use serde::{Deserialize, Serialize};

use super::body::CelestialBody;
use super::difficulty::Difficulty;
use super::vehicle::Vehicle;
use crate::consts::*;

/// Everything needed to set up one attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelParams {
    pub level: u32,
    pub max_safe_speed: i32,
    pub initial_altitude: i32,
    pub gravity: i32,
    pub thrust_accel: i32,
    pub fuel: i32,
    pub fuel_cost_per_thrust: i32,
}

impl LevelParams {
    /// Parameters for `level` at `difficulty`
    ///
    /// Levels above [`MAX_LEVEL`] generate `MAX_LEVEL`.
    pub fn generate(difficulty: Difficulty, level: u32) -> Self {
        let level = level.min(MAX_LEVEL);
        let d = difficulty.tier();
        let l = i32::try_from(level).unwrap_or(i32::MAX);

        Self {
            level,
            max_safe_speed: BASE_MAX_SAFE_SPEED + (5 + d) * l / d,
            initial_altitude: ALTITUDE_PER_STEP * (l + d),
            gravity: BASE_GRAVITY + (l * d / 3),
            thrust_accel: BASE_THRUST_ACCEL + (l * d / 2),
            fuel: BASE_FUEL + l * FUEL_PER_LEVEL,
            fuel_cost_per_thrust: (1 + d) / d,
        }
    }

    /// Opening attempt of a new game
    ///
    /// Easy opens on a fixed hand-tuned level; the other tiers open on
    /// generated level 1.
    pub fn opening(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                level: 1,
                max_safe_speed: EASY_OPENING_MAX_SAFE_SPEED,
                initial_altitude: EASY_OPENING_ALTITUDE,
                gravity: EASY_OPENING_GRAVITY,
                thrust_accel: EASY_OPENING_THRUST_ACCEL,
                fuel: EASY_OPENING_FUEL,
                fuel_cost_per_thrust: EASY_OPENING_FUEL_COST,
            },
            _ => Self::generate(difficulty, 1),
        }
    }

    /// Body for this level (named after the level number)
    pub fn body(&self) -> CelestialBody {
        CelestialBody::new(self.gravity, i64::from(self.level))
    }

    pub fn vehicle(&self) -> Vehicle {
        Vehicle::new(self.thrust_accel, self.fuel, self.fuel_cost_per_thrust)
    }
}
