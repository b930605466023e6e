//! Deterministic simulation module
//!
//! All level logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Integer physics with truncating division
//! - No rendering or platform dependencies

pub mod body;
pub mod difficulty;
pub mod outcome;
pub mod params;
pub mod state;
pub mod thrust;
pub mod tick;
pub mod vehicle;

pub use body::{BODY_NAMES, CelestialBody};
pub use difficulty::Difficulty;
pub use outcome::{Decision, LevelOutcome, LevelReport};
pub use params::LevelParams;
pub use state::{EnginePhase, LevelState, Telemetry};
pub use thrust::ThrustQueue;
pub use tick::{TickOutcome, progress_fraction, tick};
pub use vehicle::Vehicle;
