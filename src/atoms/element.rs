/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Element model: atomic number, ionic charge and valence subshell

use super::database::{self, AtomicNumberLookup};
use super::errors::{AtomError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Subshells that can hold the valence electrons of a tabulated element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValenceSubshell {
    #[serde(rename = "3d")]
    D3,
    #[serde(rename = "4d")]
    D4,
    #[serde(rename = "4f")]
    F4,
    #[serde(rename = "5d")]
    D5,
    #[serde(rename = "5f")]
    F5,
}

/// Valence subshell table: (subshell, atomic numbers, electrons below the subshell)
///
/// Scanned in order; the first range containing the atomic number wins.
const VALENCE_TABLE: [(ValenceSubshell, Range<i32>, i32); 5] = [
    (ValenceSubshell::D3, 21..31, 18),
    (ValenceSubshell::D4, 39..49, 36),
    (ValenceSubshell::F4, 57..72, 54),
    (ValenceSubshell::D5, 72..81, 68),
    (ValenceSubshell::F5, 89..104, 86),
];

impl ValenceSubshell {
    /// Find the valence subshell of an element by atomic number
    pub fn for_atomic_number(atomic_number: i32) -> Option<Self> {
        VALENCE_TABLE
            .iter()
            .find(|(_, range, _)| range.contains(&atomic_number))
            .map(|(subshell, _, _)| *subshell)
    }

    /// Subshell label, e.g. "3d"
    pub fn label(self) -> &'static str {
        match self {
            ValenceSubshell::D3 => "3d",
            ValenceSubshell::D4 => "4d",
            ValenceSubshell::F4 => "4f",
            ValenceSubshell::D5 => "5d",
            ValenceSubshell::F5 => "5f",
        }
    }

    /// Number of electrons filling the shells below this subshell
    pub fn core_electrons(self) -> i32 {
        VALENCE_TABLE
            .iter()
            .find(|(subshell, _, _)| *subshell == self)
            .map(|(_, _, core)| *core)
            .unwrap_or_default()
    }

    /// Maximum number of electrons in the subshell
    pub fn capacity(self) -> i32 {
        match self {
            ValenceSubshell::D3 | ValenceSubshell::D4 | ValenceSubshell::D5 => 10,
            ValenceSubshell::F4 | ValenceSubshell::F5 => 14,
        }
    }
}

impl fmt::Display for ValenceSubshell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a charge string orders its magnitude and sign
///
/// Ionic charges are conventionally written "3+" in this domain, but other
/// tools in the same family write "+3". The convention is chosen explicitly
/// at the boundary instead of being guessed from the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChargeConvention {
    /// "3+", "2-"
    #[default]
    MagnitudeSign,
    /// "+3", "-2"
    SignMagnitude,
}

/// Ionic charge in units of the elementary charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Charge(i32);

impl Charge {
    /// Create a charge from its signed value
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Parse a charge string under the given convention
    ///
    /// A bare magnitude ("3") is accepted as positive under either convention.
    pub fn parse(text: &str, convention: ChargeConvention) -> Result<Self> {
        let trimmed = text.trim();
        let invalid = || AtomError::InvalidCharge(text.to_string());

        let (magnitude, sign) = match convention {
            ChargeConvention::MagnitudeSign => match trimmed.strip_suffix(['+', '-']) {
                Some(rest) => (rest, if trimmed.ends_with('-') { -1 } else { 1 }),
                None => (trimmed, 1),
            },
            ChargeConvention::SignMagnitude => match trimmed.strip_prefix(['+', '-']) {
                Some(rest) => (rest, if trimmed.starts_with('-') { -1 } else { 1 }),
                None => (trimmed, 1),
            },
        };

        if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let magnitude: i32 = magnitude.parse().map_err(|_| invalid())?;
        Ok(Self(sign * magnitude))
    }

    /// Signed value of the charge
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "0"),
            v if v > 0 => write!(f, "{}+", v),
            v => write!(f, "{}-", v.unsigned_abs()),
        }
    }
}

/// Chemical element with an optional ionic charge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    symbol: String,
    charge: Option<Charge>,
    atomic_number: i32,
}

impl Element {
    /// Create an element, resolving its atomic number through `lookup`
    pub fn new<L>(symbol: &str, charge: Option<Charge>, lookup: &L) -> Result<Self>
    where
        L: AtomicNumberLookup + ?Sized,
    {
        let atomic_number = lookup
            .atomic_number(symbol)
            .ok_or_else(|| AtomError::UnknownElement(symbol.to_string()))?;

        // Prefer the canonical spelling ("Fe" rather than "FE")
        let symbol = database::element_symbol(atomic_number)
            .map(str::to_string)
            .unwrap_or_else(|| symbol.trim().to_string());

        Ok(Self {
            symbol,
            charge,
            atomic_number,
        })
    }

    /// Get the element symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the ionic charge, if set
    pub fn charge(&self) -> Option<Charge> {
        self.charge
    }

    /// Get the atomic number
    pub fn atomic_number(&self) -> i32 {
        self.atomic_number
    }

    /// Name of the valence subshell, or `None` outside the tabulated series
    pub fn valence_subshell(&self) -> Option<ValenceSubshell> {
        ValenceSubshell::for_atomic_number(self.atomic_number)
    }

    /// Number of electrons in the valence subshell of the ion
    ///
    /// Requires the charge to be set.
    pub fn valence_occupancy(&self) -> Result<i32> {
        let charge = self
            .charge
            .ok_or_else(|| AtomError::ChargeNotSet(self.symbol.clone()))?;

        let subshell = self
            .valence_subshell()
            .ok_or_else(|| AtomError::NoValenceSubshell {
                symbol: self.symbol.clone(),
                atomic_number: self.atomic_number,
            })?;

        let ion_electrons = self
            .atomic_number
            .checked_sub(charge.value())
            .ok_or_else(|| AtomError::InvalidCharge(charge.to_string()))?;
        let occupancy = ion_electrons - subshell.core_electrons();
        if !(0..=subshell.capacity()).contains(&occupancy) {
            return Err(AtomError::InvalidOccupancy {
                element: self.to_string(),
                subshell: subshell.label().to_string(),
                occupancy,
            });
        }

        Ok(occupancy)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.charge {
            Some(charge) => write!(f, "{}{}", self.symbol, charge),
            None => write!(f, "{}", self.symbol),
        }
    }
}
