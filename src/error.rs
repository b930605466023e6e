//! Errors at the configuration edge
//!
//! The simulation itself has no error paths: running out of fuel or landing
//! too hard is game state, not a failure.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not access settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("tick interval must be at least 1 ms (got {0})")]
    InvalidTickInterval(u64),
}
