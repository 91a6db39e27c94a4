/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Element model
//!
//! Resolves an element symbol and ionic charge to an atomic number and the
//! occupancy of its valence subshell.

pub mod database;
pub mod element;
pub mod errors;

pub use database::{AtomicNumberLookup, PeriodicTable};
pub use element::{Charge, ChargeConvention, Element, ValenceSubshell};
pub use errors::{AtomError, Result};
