/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Error types for parameter name resolution

use thiserror::Error;

/// Errors raised while naming the raw solver parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Index {index} in parameter {token:?} does not match any of the subshells {subshells:?}")]
    IndexOutOfRange {
        token: String,
        index: usize,
        subshells: Vec<String>,
    },

    #[error("Resolved {names} parameter names for {values} values; please report this")]
    CountMismatch { names: usize, values: usize },

    #[error("No parameter names were reported and configuration {0} has no fallback table")]
    NoFallback(String),
}

/// Result type for name resolution
pub type Result<T> = std::result::Result<T, ResolutionError>;
