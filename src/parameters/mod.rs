/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Parameter name resolution
//!
//! Combines the raw parameter labels and values produced by the solver with
//! the shell structure of a [`Configuration`] into an ordered map from
//! physical parameter names (`F2(3d,3d)`, `ζ(3d)`, ...) to values.

pub mod errors;
pub mod fallback;
pub mod map;
pub mod names;

pub use errors::{ResolutionError, Result};
pub use fallback::{fallback_names, FallbackKey};
pub use map::AtomicParameters;
pub use names::{resolve_names, ParameterName, RawName};

use crate::configuration::Configuration;

/// Name the solver's parameter values
///
/// The raw labels are decoded first. If none of them names a parameter,
/// the static table for the configuration is used instead. The number of
/// names must match the number of values exactly.
pub fn resolve_parameters<S: AsRef<str>>(
    configuration: &Configuration,
    raw_names: &[S],
    values: &[f64],
) -> Result<AtomicParameters> {
    let mut names = resolve_names(configuration, raw_names)?;

    if names.is_empty() {
        log::warn!(
            "The solver reported no parameter names for {}; using the built-in table",
            configuration
        );
        names = fallback_names(configuration)
            .ok_or_else(|| ResolutionError::NoFallback(configuration.to_string()))?;
    }

    if names.len() != values.len() {
        return Err(ResolutionError::CountMismatch {
            names: names.len(),
            values: values.len(),
        });
    }

    Ok(names
        .iter()
        .map(ToString::to_string)
        .zip(values.iter().copied())
        .collect())
}
