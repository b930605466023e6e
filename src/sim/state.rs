//! Attempt state and telemetry
//!
//! All state for the live attempt lives here. Replacing the attempt means
//! replacing the whole `LevelState`.

use serde::{Deserialize, Serialize};

use super::body::CelestialBody;
use super::difficulty::Difficulty;
use super::params::LevelParams;
use super::vehicle::Vehicle;

/// Whether the tick source is delivering ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnginePhase {
    /// No ticks fire
    #[default]
    Idle,
    /// Ticks integrate the descent
    Running,
}

/// Snapshot reported to observers each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub altitude: i32,
    pub fuel: i32,
    /// Signed vertical speed (negative = descending)
    pub speed: i32,
    pub max_safe_speed: i32,
    /// Fraction of the descent completed (1.0 at touchdown, no lower clamp)
    pub progress: f64,
}

/// State of one attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelState {
    pub difficulty: Difficulty,
    pub level: u32,
    pub altitude: i32,
    pub initial_altitude: i32,
    pub max_safe_speed: i32,
    pub current_speed: i32,
    pub progress: f64,
    pub body: CelestialBody,
    pub vehicle: Vehicle,
    /// Ticks integrated in this attempt
    pub ticks: u64,
}

impl LevelState {
    /// Fresh attempt from generated parameters
    pub fn new(difficulty: Difficulty, params: &LevelParams) -> Self {
        Self {
            difficulty,
            level: params.level,
            altitude: params.initial_altitude,
            initial_altitude: params.initial_altitude,
            max_safe_speed: params.max_safe_speed,
            current_speed: 0,
            progress: 0.0,
            body: params.body(),
            vehicle: params.vehicle(),
            ticks: 0,
        }
    }

    pub fn telemetry(&self) -> Telemetry {
        Telemetry {
            altitude: self.altitude,
            fuel: self.vehicle.fuel(),
            speed: self.current_speed,
            max_safe_speed: self.max_safe_speed,
            progress: self.progress,
        }
    }

    /// Level title, e.g. `"Hard - nível 2 - Terra: "`
    pub fn title(&self) -> String {
        format!(
            "{} - nível {} - {}: ",
            self.difficulty.as_str(),
            self.level,
            self.body.name()
        )
    }

    /// Touchdown is safe when the descent speed is within the limit
    #[inline]
    pub fn landed_safely(&self) -> bool {
        -self.current_speed <= self.max_safe_speed
    }
}
