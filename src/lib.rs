//! Lunar Descent - a fixed-tick arcade landing game engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, vehicle, parameters, tick)
//! - `engine`: Level state machine and observer callbacks
//! - `driver`: Threaded periodic tick source
//! - `settings`: Player preferences (JSON)
//! - `pilot`: Seeded autopilot for headless play

pub mod driver;
pub mod engine;
pub mod error;
pub mod pilot;
pub mod settings;
pub mod sim;

pub use driver::{IntervalDriver, Snapshot};
pub use engine::{AttemptInfo, LevelEngine, LevelObserver};
pub use error::SettingsError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Real-time length of one tick (ms)
    pub const TICK_INTERVAL_MS: u64 = 1000;

    /// Highest playable level; requests beyond it play this level
    pub const MAX_LEVEL: u32 = 10_000;

    /// Generated level baselines
    pub const BASE_MAX_SAFE_SPEED: i32 = 50;
    pub const ALTITUDE_PER_STEP: i32 = 100;
    pub const BASE_GRAVITY: i32 = 5;
    pub const BASE_THRUST_ACCEL: i32 = 8;
    pub const BASE_FUEL: i32 = 50;
    pub const FUEL_PER_LEVEL: i32 = 5;

    /// Hand-tuned opening level for Easy
    pub const EASY_OPENING_MAX_SAFE_SPEED: i32 = 50;
    pub const EASY_OPENING_ALTITUDE: i32 = 100;
    pub const EASY_OPENING_GRAVITY: i32 = 5;
    pub const EASY_OPENING_THRUST_ACCEL: i32 = 8;
    pub const EASY_OPENING_FUEL: i32 = 51;
    pub const EASY_OPENING_FUEL_COST: i32 = 1;
}
