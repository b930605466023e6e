//! End-of-level outcomes and player decisions

use serde::{Deserialize, Serialize};

use crate::consts::MAX_LEVEL;

/// How the attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelOutcome {
    Success,
    Failure,
}

/// Player choice after touchdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Leave the engine idle
    Cancel,
    /// Back to level 1
    RestartFromBeginning,
    /// Same level again
    RetryLevel,
    /// Advance one level (success only)
    NextLevel,
}

static SUCCESS_CHOICES: [Decision; 4] = [
    Decision::Cancel,
    Decision::RestartFromBeginning,
    Decision::RetryLevel,
    Decision::NextLevel,
];

static FAILURE_CHOICES: [Decision; 3] = [
    Decision::Cancel,
    Decision::RestartFromBeginning,
    Decision::RetryLevel,
];

impl LevelOutcome {
    pub fn from_landing(safe: bool) -> Self {
        if safe {
            LevelOutcome::Success
        } else {
            LevelOutcome::Failure
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, LevelOutcome::Success)
    }

    /// Choices offered to the player, in display order
    pub fn choices(&self) -> &'static [Decision] {
        match self {
            LevelOutcome::Success => &SUCCESS_CHOICES,
            LevelOutcome::Failure => &FAILURE_CHOICES,
        }
    }

    pub fn default_choice(&self) -> Decision {
        match self {
            LevelOutcome::Success => Decision::NextLevel,
            LevelOutcome::Failure => Decision::RetryLevel,
        }
    }

    pub fn offers(&self, decision: Decision) -> bool {
        self.choices().contains(&decision)
    }

    pub fn message(&self, level: u32) -> String {
        match self {
            LevelOutcome::Success => format!("Parabéns! Completaste o Nível {}!", level),
            LevelOutcome::Failure => format!("Game Over! Perdeu o Nível {}!", level),
        }
    }
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Cancel => "Cancelar",
            Decision::RestartFromBeginning => "Começar de Novo",
            Decision::RetryLevel => "Recomeçar Nível",
            Decision::NextLevel => "Próximo Nível",
        }
    }

    /// Level the next attempt plays, or None if the engine stays idle
    ///
    /// Advancing past [`MAX_LEVEL`] replays it.
    pub fn next_level(&self, level: u32) -> Option<u32> {
        match self {
            Decision::Cancel => None,
            Decision::RestartFromBeginning => Some(1),
            Decision::RetryLevel => Some(level),
            Decision::NextLevel => Some(level.saturating_add(1).min(MAX_LEVEL)),
        }
    }
}

/// What observers receive at touchdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelReport {
    pub outcome: LevelOutcome,
    pub level: u32,
    /// Speed at touchdown (negative = descending)
    pub touchdown_speed: i32,
    pub max_safe_speed: i32,
    pub title: String,
    pub message: String,
}

impl LevelReport {
    #[inline]
    pub fn success(&self) -> bool {
        self.outcome.is_success()
    }

    pub fn choices(&self) -> &'static [Decision] {
        self.outcome.choices()
    }

    pub fn default_choice(&self) -> Decision {
        self.outcome.default_choice()
    }
}
