//! Difficulty tiers

use serde::{Deserialize, Serialize};

/// Difficulty tier, numbered 1..=4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy = 1,
    Medium = 2,
    Hard = 3,
    VeryHard = 4,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
    ];

    /// Numeric tier used by the parameter formulas
    #[inline]
    pub fn tier(&self) -> i32 {
        *self as i32
    }

    pub fn from_tier(tier: i32) -> Option<Self> {
        match tier {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            4 => Some(Difficulty::VeryHard),
            _ => None,
        }
    }

    /// Name shown in level titles
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::VeryHard => "Very Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "very hard" | "very-hard" | "very_hard" | "veryhard" => Some(Difficulty::VeryHard),
            other => other.parse::<i32>().ok().and_then(Self::from_tier),
        }
    }

    /// Vessel flown at this tier
    pub fn vessel_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Naboo Starfighter",
            Difficulty::Medium => "Naboo Royal StarShip",
            Difficulty::Hard => "Millenium Falcon",
            Difficulty::VeryHard => "ARC-170 Starfighter",
        }
    }
}
