/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Physical parameter names and decoding of the solver's raw names
//!
//! RCG labels its parameters with subshell indices, e.g. `F2(1,2)` or
//! `ZETA 2`. The indices count the open subshells of the configuration, so
//! a closed (or empty) core shell does not take an index of its own: with
//! a closed core the indices can be used directly against the core-first
//! subshell list, otherwise they are one-based and are shifted down by one.

use super::errors::{ResolutionError, Result};
use crate::configuration::{Configuration, ParticleClass, Subshell};

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Slater integral: kind, first index, second index
static SLATER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([FG]\d)\D*?(\d)\D*?(\d)\D*$").expect("Slater pattern is valid")
});

/// Spin-orbit constant: trailing index
static ZETA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ZETA\D*(\d+)\D*$").expect("zeta pattern is valid"));

/// A parameter named in physical notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterName {
    /// Slater-Condon direct (F) or exchange (G) integral, e.g. `F2(3d,3d)`
    Slater {
        kind: String,
        first: Subshell,
        second: Subshell,
    },
    /// Spin-orbit coupling constant, e.g. `ζ(3d)`
    SpinOrbit(Subshell),
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterName::Slater {
                kind,
                first,
                second,
            } => write!(f, "{}({},{})", kind, first, second),
            ParameterName::SpinOrbit(subshell) => write!(f, "ζ({})", subshell),
        }
    }
}

/// A raw RCG parameter label, before the indices are mapped to subshells
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawName {
    Slater { kind: String, i: usize, j: usize },
    SpinOrbit { i: usize },
}

impl RawName {
    /// Decode a raw label; administrative labels such as `EAV` give `None`
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.starts_with('F') || token.starts_with('G') {
            let caps = SLATER_PATTERN.captures(token)?;
            Some(RawName::Slater {
                kind: caps[1].to_string(),
                i: caps[2].parse().ok()?,
                j: caps[3].parse().ok()?,
            })
        } else if token.starts_with("ZETA") {
            let caps = ZETA_PATTERN.captures(token)?;
            Some(RawName::SpinOrbit {
                i: caps[1].parse().ok()?,
            })
        } else {
            None
        }
    }
}

/// Maps solver indices onto the subshells of one configuration
struct IndexMap {
    subshells: Vec<Subshell>,
    shift: bool,
}

impl IndexMap {
    fn new(configuration: &Configuration) -> Self {
        Self {
            subshells: configuration.subshells(),
            shift: configuration.number_of_core_particles() != Some(ParticleClass::Zero),
        }
    }

    fn subshell(&self, token: &str, index: usize) -> Result<Subshell> {
        let position = if self.shift {
            index.checked_sub(1)
        } else {
            Some(index)
        };

        position
            .and_then(|p| self.subshells.get(p).copied())
            .ok_or_else(|| ResolutionError::IndexOutOfRange {
                token: token.to_string(),
                index,
                subshells: self.subshells.iter().map(Subshell::label).collect(),
            })
    }
}

/// Name the raw RCG labels of `configuration` in physical notation
///
/// Labels that are neither Slater integrals nor spin-orbit constants are
/// dropped, so the result may be shorter than `raw_names`.
pub fn resolve_names<S: AsRef<str>>(
    configuration: &Configuration,
    raw_names: &[S],
) -> Result<Vec<ParameterName>> {
    let map = IndexMap::new(configuration);
    let mut names = Vec::with_capacity(raw_names.len());

    for token in raw_names.iter().map(AsRef::as_ref) {
        match RawName::parse(token) {
            Some(RawName::Slater { kind, i, j }) => names.push(ParameterName::Slater {
                kind,
                first: map.subshell(token, i)?,
                second: map.subshell(token, j)?,
            }),
            Some(RawName::SpinOrbit { i }) => {
                names.push(ParameterName::SpinOrbit(map.subshell(token, i)?))
            }
            None => log::debug!("Ignoring solver parameter {:?}", token),
        }
    }

    Ok(names)
}
