/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Error types for electronic configurations

use thiserror::Error;

/// Errors raised while building or updating a configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Invalid configuration string: {0:?}")]
    InvalidConfiguration(String),

    #[error("Wrong number of electrons in the {role} shell {subshell}: {occupancy} (maximum {capacity})")]
    TooManyElectrons {
        role: &'static str,
        subshell: String,
        occupancy: u32,
        capacity: u32,
    },

    #[error("Got {subshells} subshells but {occupancies} occupancies")]
    MismatchedLengths { subshells: usize, occupancies: usize },

    #[error("The {0} of the configuration has already been set")]
    AlreadySet(&'static str),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigurationError>;
