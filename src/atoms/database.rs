/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Periodic-table database
//!
//! Maps element symbols to atomic numbers. The driver builds one
//! [`PeriodicTable`] and hands it to [`Element::new`](super::Element::new)
//! through the [`AtomicNumberLookup`] trait, so tests and callers can
//! substitute their own source of atomic numbers.

/// Element symbols ordered by atomic number (index 0 is hydrogen)
const SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", // 1-10
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", // 11-20
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", // 21-30
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", // 31-40
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", // 41-50
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", // 51-60
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", // 61-70
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", // 71-80
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", // 81-90
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", // 91-100
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", // 101-110
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og", // 111-118
];

/// Provides element symbols for atomic numbers
pub fn element_symbol(atomic_number: i32) -> Option<&'static str> {
    if atomic_number < 1 {
        return None;
    }
    SYMBOLS.get(atomic_number as usize - 1).copied()
}

/// Returns the atomic number for an element symbol
///
/// This function is case-insensitive and will handle both "Fe" and "FE"
pub fn atomic_number_from_symbol(symbol: &str) -> Option<i32> {
    let symbol = symbol.trim();
    SYMBOLS
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(symbol))
        .map(|index| index as i32 + 1)
}

/// Source of atomic numbers for element symbols
pub trait AtomicNumberLookup {
    /// Atomic number of `symbol`, or `None` for an unknown element
    fn atomic_number(&self, symbol: &str) -> Option<i32>;
}

/// Built-in periodic table backed by [`atomic_number_from_symbol`]
#[derive(Debug, Default, Clone, Copy)]
pub struct PeriodicTable;

impl PeriodicTable {
    /// Create the lookup service
    pub fn new() -> Self {
        Self
    }
}

impl AtomicNumberLookup for PeriodicTable {
    fn atomic_number(&self, symbol: &str) -> Option<i32> {
        atomic_number_from_symbol(symbol)
    }
}
