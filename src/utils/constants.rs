/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Physical constants used when decoding solver output

/// Rydberg energy in eV (CODATA 2018)
pub const RYDBERG_TO_EV: f64 = 13.605693122994;

/// Conversion from eV to Rydberg
pub const EV_TO_RYDBERG: f64 = 1.0 / RYDBERG_TO_EV;
