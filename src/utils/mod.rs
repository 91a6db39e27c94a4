/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Utility functions shared across the crate
//!
//! Physical constants and the unit conversions applied to the raw solver output.

pub mod constants;
pub mod conversions;

pub use conversions::{ev_to_rydberg, rydberg_to_ev};
