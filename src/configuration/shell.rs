/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Subshells, occupancies and particle/hole classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shell type in spectroscopic notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shell {
    S, // l=0
    P, // l=1
    D, // l=2
    F, // l=3
}

impl Shell {
    /// Parse a lowercase spectroscopic letter
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            's' => Some(Shell::S),
            'p' => Some(Shell::P),
            'd' => Some(Shell::D),
            'f' => Some(Shell::F),
            _ => None,
        }
    }

    /// Spectroscopic letter of the shell
    pub fn letter(self) -> char {
        match self {
            Shell::S => 's',
            Shell::P => 'p',
            Shell::D => 'd',
            Shell::F => 'f',
        }
    }

    /// Angular momentum quantum number
    pub fn l(self) -> u32 {
        match self {
            Shell::S => 0,
            Shell::P => 1,
            Shell::D => 2,
            Shell::F => 3,
        }
    }

    /// Maximum occupation of the shell: 2*(2l+1)
    pub fn capacity(self) -> u32 {
        2 * (2 * self.l() + 1)
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Particle/hole classification of an occupied shell
///
/// Symmetric under particle/hole exchange: a shell with one hole behaves
/// like a shell with one electron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleClass {
    /// Empty or completely filled
    Zero,
    /// One electron or one hole
    One,
    /// Anything else
    Multiple,
}

impl ParticleClass {
    /// Classify `occupancy` electrons in a shell of type `shell`
    pub fn of(shell: Shell, occupancy: u32) -> Self {
        let capacity = shell.capacity();
        if occupancy == 0 || occupancy == capacity {
            ParticleClass::Zero
        } else if occupancy == 1 || occupancy + 1 == capacity {
            ParticleClass::One
        } else {
            ParticleClass::Multiple
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ParticleClass::Zero => "zero",
            ParticleClass::One => "one",
            ParticleClass::Multiple => "multiple",
        }
    }
}

impl fmt::Display for ParticleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (principal quantum number, shell) pair such as 3d
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subshell {
    pub level: u32,
    pub shell: Shell,
}

impl Subshell {
    pub fn new(level: u32, shell: Shell) -> Self {
        Self { level, shell }
    }

    /// Label in the form "3d"
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Subshell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.level, self.shell)
    }
}

/// A subshell together with its electron count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShellOccupancy {
    pub subshell: Subshell,
    pub occupancy: u32,
}

impl ShellOccupancy {
    pub fn new(subshell: Subshell, occupancy: u32) -> Self {
        Self {
            subshell,
            occupancy,
        }
    }

    /// Particle/hole classification of this shell
    pub fn particle_class(&self) -> ParticleClass {
        ParticleClass::of(self.subshell.shell, self.occupancy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELLS: [Shell; 4] = [Shell::S, Shell::P, Shell::D, Shell::F];

    #[test]
    fn test_capacities() {
        assert_eq!(Shell::S.capacity(), 2);
        assert_eq!(Shell::P.capacity(), 6);
        assert_eq!(Shell::D.capacity(), 10);
        assert_eq!(Shell::F.capacity(), 14);
    }

    #[test]
    fn test_letters() {
        for shell in SHELLS {
            assert_eq!(Shell::from_letter(shell.letter()), Some(shell));
        }
        assert_eq!(Shell::from_letter('g'), None);
        assert_eq!(Shell::from_letter('D'), None);
    }

    #[test]
    fn test_particle_class_is_particle_hole_symmetric() {
        for shell in SHELLS {
            let capacity = shell.capacity();
            for occupancy in 0..=capacity {
                assert_eq!(
                    ParticleClass::of(shell, occupancy),
                    ParticleClass::of(shell, capacity - occupancy),
                    "{}{}",
                    shell,
                    occupancy
                );
            }
        }
    }

    #[test]
    fn test_empty_and_full_shells_are_zero() {
        for shell in SHELLS {
            assert_eq!(ParticleClass::of(shell, 0), ParticleClass::Zero);
            assert_eq!(ParticleClass::of(shell, shell.capacity()), ParticleClass::Zero);
        }
    }

    #[test]
    fn test_particle_class_examples() {
        assert_eq!(ParticleClass::of(Shell::S, 1), ParticleClass::One);
        assert_eq!(ParticleClass::of(Shell::P, 5), ParticleClass::One);
        assert_eq!(ParticleClass::of(Shell::D, 5), ParticleClass::Multiple);
        assert_eq!(ParticleClass::of(Shell::D, 9), ParticleClass::One);
        assert_eq!(ParticleClass::of(Shell::F, 7), ParticleClass::Multiple);
    }

    #[test]
    fn test_subshell_label() {
        assert_eq!(Subshell::new(3, Shell::D).label(), "3d");
        assert_eq!(Subshell::new(1, Shell::S).to_string(), "1s");
    }
}
