//! Error types for the de-excitation cascade and its configuration.

use crate::fragment::Fragment;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Cascade stage at which a fragment was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Evaporation,
    PhotonEvaporation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Evaporation => write!(f, "evaporation"),
            Stage::PhotonEvaporation => write!(f, "photon evaporation"),
        }
    }
}

/// Fatal outcomes of a single `break_it_up` call.
///
/// None of these are recoverable inside the engine; all fragments held by the
/// call have been released by the time the error reaches the caller.
#[derive(Debug, Error)]
pub enum DeexcitationError {
    /// The evaporation queue was still non-empty after the iteration ceiling.
    #[error(
        "infinite loop in the de-excitation module: {iterations} iterations\n      initial fragment: {initial}\n      current fragment: {current}"
    )]
    DivergentCascade {
        iterations: usize,
        initial: Box<Fragment>,
        current: Box<Fragment>,
    },

    /// No stage gate accepted the fragment.
    #[error("no model was applied at the {stage} stage, check conditions: {fragment}")]
    NoApplicableChannel { stage: Stage, fragment: Box<Fragment> },

    /// The isotope registry has no ground-state ion for a final fragment.
    #[error("ion table has no ground state for Z={z}, A={a}")]
    IdentityResolution { z: i32, a: i32 },
}

/// Errors raised while assembling a handler from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("only \"lfu\" and \"simple\" caches are supported, got \"{0}\"")]
    UnknownCache(String),

    #[error("invalid value for parameter '{name}': {value}")]
    InvalidParameter { name: String, value: String },

    #[error("failed to read nuclear mass file {path}: {source}")]
    MassFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse nuclear mass file {path}: {source}")]
    MassFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse handler configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
