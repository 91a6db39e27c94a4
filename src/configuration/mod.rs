/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Electronic configuration model
//!
//! Parses configuration strings into typed shells and classifies their
//! occupancies.

pub mod errors;
pub mod model;
pub mod shell;

pub use errors::{ConfigurationError, Result};
pub use model::Configuration;
pub use shell::{ParticleClass, Shell, ShellOccupancy, Subshell};
