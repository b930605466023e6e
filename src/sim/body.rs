//! Celestial bodies the vehicle descends onto
//!
//! A body is a gravity value plus a name picked from a fixed catalog.
//! Catalog lookups wrap, so any level number maps to a valid name.

use serde::{Deserialize, Serialize};

/// Ordered catalog of body names (1-based when indexed by level)
pub const BODY_NAMES: [&str; 26] = [
    "Lua",
    "Terra",
    "Abafar",
    "Aleen",
    "Balnab",
    "Bespin",
    "Carlac",
    "Alderaan",
    "Christophsis",
    "Coruscant",
    "Dagobah",
    "Dathomir",
    "Felucia",
    "Florrum",
    "Geonosis",
    "Hoth",
    "Ilum",
    "Kadavo",
    "Kamino",
    "Kiros",
    "Lotho Minor",
    "Mandalore",
    "Moncala",
    "Mustafar",
    "Nal Hutta",
    "Naboo",
];

/// Map a 1-based name index onto `[0, BODY_NAMES.len())`
#[inline]
pub fn catalog_slot(name_index: i64) -> usize {
    (name_index - 1).rem_euclid(BODY_NAMES.len() as i64) as usize
}

/// The body being landed on for one attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Speed lost per tick (m/s), independent of thrust
    gravity: i32,
    /// Slot in [`BODY_NAMES`], already wrapped
    slot: usize,
}

impl CelestialBody {
    pub fn new(gravity: i32, name_index: i64) -> Self {
        Self {
            gravity,
            slot: catalog_slot(name_index),
        }
    }

    #[inline]
    pub fn gravity(&self) -> i32 {
        self.gravity
    }

    pub fn name(&self) -> &'static str {
        BODY_NAMES[self.slot]
    }
}
