//! The descent vehicle: fuel tank and thruster

use serde::{Deserialize, Serialize};

/// Vehicle for one attempt
///
/// Fuel is clamped lazily: a burn may leave the tank negative, and the
/// next [`Vehicle::consume_fuel`] call resets it to zero and refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Speed gained per consumed thrust unit (m/s)
    thrust_accel: i32,
    /// Remaining fuel (litres)
    fuel: i32,
    /// Fuel burned per thrust unit
    fuel_cost_per_thrust: i32,
}

impl Vehicle {
    pub fn new(thrust_accel: i32, fuel: i32, fuel_cost_per_thrust: i32) -> Self {
        Self {
            thrust_accel,
            fuel,
            fuel_cost_per_thrust,
        }
    }

    #[inline]
    pub fn thrust_accel(&self) -> i32 {
        self.thrust_accel
    }

    #[inline]
    pub fn fuel(&self) -> i32 {
        self.fuel
    }

    #[inline]
    pub fn fuel_cost_per_thrust(&self) -> i32 {
        self.fuel_cost_per_thrust
    }

    /// Burn fuel for one thrust unit
    ///
    /// Returns false (and zeroes the tank) when no fuel is left.
    pub fn consume_fuel(&mut self) -> bool {
        if self.fuel <= 0 {
            self.fuel = 0;
            false
        } else {
            self.fuel -= self.fuel_cost_per_thrust;
            true
        }
    }
}
