/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Error types for the atoms module

/// Error types for the atoms module
#[derive(Debug, thiserror::Error)]
pub enum AtomError {
    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),

    #[error("Invalid charge string: {0}")]
    InvalidCharge(String),

    #[error("The charge of {0} must be set")]
    ChargeNotSet(String),

    #[error("No valence subshell is tabulated for {symbol} (Z = {atomic_number})")]
    NoValenceSubshell { symbol: String, atomic_number: i32 },

    #[error("Invalid valence occupancy {occupancy} for {element} in the {subshell} subshell")]
    InvalidOccupancy {
        element: String,
        subshell: String,
        occupancy: i32,
    },
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
