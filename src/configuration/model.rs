/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Electronic configuration model
//!
//! A configuration string such as `"3d5"` or `"2p5,3d6"` is validated once,
//! when the [`Configuration`] is built, and split into an optional core shell
//! followed by the valence shell. The string is never re-assigned afterwards;
//! only the two calculation results (energy and atomic parameters) are filled
//! in later, each exactly once.

use super::errors::{ConfigurationError, Result};
use super::shell::{ParticleClass, Shell, ShellOccupancy, Subshell};
use crate::parameters::AtomicParameters;

use once_cell::sync::{Lazy, OnceCell};
use regex::{Captures, Regex};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Core shell followed by the valence shell, e.g. "2p5,3d6"
static CORE_VALENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d)([spdf])(\d+),(\d)([spdf])(\d+)$").expect("core pattern is valid")
});

/// Single valence shell, e.g. "3d5"
static VALENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d)([spdf])(\d+)$").expect("valence pattern is valid"));

/// Electronic configuration of one or two open subshells
#[derive(Debug, Clone)]
pub struct Configuration {
    name: String,
    /// Core shell (if any) first, valence shell last
    shells: Vec<ShellOccupancy>,
    energy: OnceCell<f64>,
    atomic_parameters: OnceCell<AtomicParameters>,
}

impl Configuration {
    /// Parse and validate a configuration string
    pub fn new(name: &str) -> Result<Self> {
        let shells = if let Some(caps) = CORE_VALENCE_PATTERN.captures(name) {
            vec![
                parse_shell(name, &caps, 1, "core")?,
                parse_shell(name, &caps, 4, "valence")?,
            ]
        } else if let Some(caps) = VALENCE_PATTERN.captures(name) {
            vec![parse_shell(name, &caps, 1, "valence")?]
        } else {
            return Err(ConfigurationError::InvalidConfiguration(name.to_string()));
        };

        Ok(Self {
            name: name.to_string(),
            shells,
            energy: OnceCell::new(),
            atomic_parameters: OnceCell::new(),
        })
    }

    /// Build a configuration from parallel lists of subshell labels and occupancies
    ///
    /// Occupancies are written with two digits, so `(["3d"], [5])` becomes `"3d05"`.
    pub fn from_subshells_and_occupancies<S: AsRef<str>>(
        subshells: &[S],
        occupancies: &[u32],
    ) -> Result<Self> {
        if subshells.len() != occupancies.len() {
            return Err(ConfigurationError::MismatchedLengths {
                subshells: subshells.len(),
                occupancies: occupancies.len(),
            });
        }

        let name = subshells
            .iter()
            .zip(occupancies)
            .map(|(subshell, occupancy)| format!("{}{:02}", subshell.as_ref(), occupancy))
            .collect::<Vec<_>>()
            .join(",");
        Self::new(&name)
    }

    /// Configuration string as given at construction
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a core shell is listed before the valence shell
    pub fn has_core(&self) -> bool {
        self.shells.len() == 2
    }

    /// Core shell, if present
    pub fn core(&self) -> Option<&ShellOccupancy> {
        if self.has_core() {
            self.shells.first()
        } else {
            None
        }
    }

    /// Valence shell
    pub fn valence(&self) -> &ShellOccupancy {
        // Construction guarantees one or two shells
        &self.shells[self.shells.len() - 1]
    }

    /// All shells, core first
    pub fn shell_occupancies(&self) -> &[ShellOccupancy] {
        &self.shells
    }

    /// Principal quantum numbers, core first
    pub fn levels(&self) -> Vec<u32> {
        self.shells.iter().map(|s| s.subshell.level).collect()
    }

    /// Shell letters, core first
    pub fn shells(&self) -> Vec<Shell> {
        self.shells.iter().map(|s| s.subshell.shell).collect()
    }

    /// Electron counts, core first
    pub fn occupancies(&self) -> Vec<u32> {
        self.shells.iter().map(|s| s.occupancy).collect()
    }

    /// Subshells, core first
    pub fn subshells(&self) -> Vec<Subshell> {
        self.shells.iter().map(|s| s.subshell).collect()
    }

    /// Subshell labels such as `["1s", "3d"]`, core first
    pub fn subshell_labels(&self) -> Vec<String> {
        self.shells.iter().map(|s| s.subshell.label()).collect()
    }

    /// Particle/hole classification of the core shell, `None` without a core
    pub fn number_of_core_particles(&self) -> Option<ParticleClass> {
        self.core().map(ShellOccupancy::particle_class)
    }

    /// Configuration with one valence electron fewer and no core shell
    ///
    /// Used as the initial state of a core-to-valence transition. A
    /// configuration without a core shell is returned unchanged.
    pub fn initial(&self) -> Result<Self> {
        if !self.has_core() {
            return Self::new(&self.name);
        }

        let valence = self.valence();
        let occupancy = valence.occupancy.saturating_sub(1);
        Self::from_subshells_and_occupancies(&[valence.subshell.label()], &[occupancy])
    }

    /// Total energy in eV, once calculated
    pub fn energy(&self) -> Option<f64> {
        self.energy.get().copied()
    }

    /// Store the total energy; fails if it was already stored
    pub fn set_energy(&self, energy: f64) -> Result<()> {
        self.energy
            .set(energy)
            .map_err(|_| ConfigurationError::AlreadySet("energy"))
    }

    /// Named atomic parameters, once calculated
    pub fn atomic_parameters(&self) -> Option<&AtomicParameters> {
        self.atomic_parameters.get()
    }

    /// Store the atomic parameters; fails if they were already stored
    pub fn set_atomic_parameters(&self, parameters: AtomicParameters) -> Result<()> {
        self.atomic_parameters
            .set(parameters)
            .map_err(|_| ConfigurationError::AlreadySet("atomic parameters"))
    }

    /// Store the energy and the parameters together
    ///
    /// Nothing is stored unless both are still unset.
    pub fn set_results(&self, energy: f64, parameters: AtomicParameters) -> Result<()> {
        if self.energy.get().is_some() {
            return Err(ConfigurationError::AlreadySet("energy"));
        }
        if self.atomic_parameters.get().is_some() {
            return Err(ConfigurationError::AlreadySet("atomic parameters"));
        }
        self.set_energy(energy)?;
        self.set_atomic_parameters(parameters)
    }
}

/// Read the (level, shell, occupancy) triple starting at capture group `first`
fn parse_shell(
    name: &str,
    caps: &Captures<'_>,
    first: usize,
    role: &'static str,
) -> Result<ShellOccupancy> {
    let invalid = || ConfigurationError::InvalidConfiguration(name.to_string());

    let level: u32 = caps[first].parse().map_err(|_| invalid())?;
    let shell = caps[first + 1]
        .chars()
        .next()
        .and_then(Shell::from_letter)
        .ok_or_else(invalid)?;
    let subshell = Subshell::new(level, shell);

    // Overlong occupancies are reported as overflow, not as a bad string
    let occupancy: u32 = caps[first + 2].parse().unwrap_or(u32::MAX);
    if occupancy > shell.capacity() {
        return Err(ConfigurationError::TooManyElectrons {
            role,
            subshell: subshell.label(),
            occupancy,
            capacity: shell.capacity(),
        });
    }

    Ok(ShellOccupancy::new(subshell, occupancy))
}

impl FromStr for Configuration {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Configuration {}

impl Hash for Configuration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Configuration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Configuration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_single_shell() {
        let conf = Configuration::new("3d5").unwrap();
        assert!(!conf.has_core());
        assert_eq!(conf.levels(), vec![3]);
        assert_eq!(conf.shells(), vec![Shell::D]);
        assert_eq!(conf.occupancies(), vec![5]);
        assert_eq!(conf.subshell_labels(), vec!["3d"]);
        assert_eq!(conf.valence().particle_class(), ParticleClass::Multiple);
        assert_eq!(conf.number_of_core_particles(), None);
        assert!(conf.core().is_none());
    }

    #[test]
    fn test_core_and_valence() {
        let conf = Configuration::new("1s1,3d6").unwrap();
        assert!(conf.has_core());
        assert_eq!(conf.levels(), vec![1, 3]);
        assert_eq!(conf.shells(), vec![Shell::S, Shell::D]);
        assert_eq!(conf.occupancies(), vec![1, 6]);
        assert_eq!(conf.subshell_labels(), vec!["1s", "3d"]);
        assert_eq!(conf.number_of_core_particles(), Some(ParticleClass::One));
    }

    #[rstest]
    #[case("")]
    #[case("3d")]
    #[case("d5")]
    #[case("3g2")]
    #[case("3d5,")]
    #[case("3d5,4f2,5d1")]
    #[case("3D5")]
    #[case(" 3d5")]
    #[case("3d-1")]
    fn test_invalid_strings(#[case] name: &str) {
        assert!(matches!(
            Configuration::new(name),
            Err(ConfigurationError::InvalidConfiguration(_))
        ));
    }

    #[rstest]
    #[case("3d11", "valence")]
    #[case("1s3,3d6", "core")]
    #[case("2p5,3d12", "valence")]
    #[case("4f99999999999999999999", "valence")]
    fn test_too_many_electrons(#[case] name: &str, #[case] expected_role: &str) {
        match Configuration::new(name) {
            Err(ConfigurationError::TooManyElectrons { role, .. }) => {
                assert_eq!(role, expected_role)
            }
            other => panic!("unexpected result for {}: {:?}", name, other),
        }
    }

    #[test]
    fn test_full_shells_are_valid() {
        let conf = Configuration::new("2p6,3d10").unwrap();
        assert_eq!(conf.number_of_core_particles(), Some(ParticleClass::Zero));
        assert_eq!(conf.valence().particle_class(), ParticleClass::Zero);
    }

    #[test]
    fn test_from_subshells_and_occupancies() {
        let conf = Configuration::from_subshells_and_occupancies(&["2p", "3d"], &[5, 6]).unwrap();
        assert_eq!(conf.name(), "2p05,3d06");
        assert_eq!(conf.occupancies(), vec![5, 6]);

        assert!(matches!(
            Configuration::from_subshells_and_occupancies(&["3d"], &[1, 2]),
            Err(ConfigurationError::MismatchedLengths { .. })
        ));
    }

    #[test]
    fn test_initial_configuration() {
        let conf = Configuration::new("2p5,3d6").unwrap();
        let initial = conf.initial().unwrap();
        assert_eq!(initial.name(), "3d05");
        assert!(!initial.has_core());

        let empty = Configuration::new("1s1,3d0").unwrap().initial().unwrap();
        assert_eq!(empty.occupancies(), vec![0]);

        let single = Configuration::new("3d5").unwrap();
        assert_eq!(single.initial().unwrap(), single);
    }

    #[test]
    fn test_ordering_uses_name() {
        let a = Configuration::new("2p5,3d6").unwrap();
        let b = Configuration::new("3d5").unwrap();
        assert!(a < b);
        assert_ne!(Configuration::new("3d5").unwrap(), Configuration::new("3d05").unwrap());
        assert_eq!("3d5".parse::<Configuration>().unwrap(), b);
    }

    #[test]
    fn test_results_are_written_once() {
        let conf = Configuration::new("3d5").unwrap();
        assert_eq!(conf.energy(), None);
        conf.set_energy(-1.5).unwrap();
        assert_eq!(conf.energy(), Some(-1.5));
        assert_eq!(
            conf.set_energy(2.0),
            Err(ConfigurationError::AlreadySet("energy"))
        );

        let mut parameters = AtomicParameters::new();
        parameters.insert("ζ(3d)", 0.05);
        conf.set_atomic_parameters(parameters.clone()).unwrap();
        assert_eq!(conf.atomic_parameters(), Some(&parameters));
        assert!(conf.set_atomic_parameters(parameters).is_err());
    }

    #[test]
    fn test_results_are_stored_together() {
        let mut parameters = AtomicParameters::new();
        parameters.insert("ζ(3d)", 0.05);

        let conf = Configuration::new("3d5").unwrap();
        conf.set_atomic_parameters(parameters.clone()).unwrap();
        assert_eq!(
            conf.set_results(-1.5, parameters.clone()),
            Err(ConfigurationError::AlreadySet("atomic parameters"))
        );
        assert_eq!(conf.energy(), None);

        let conf = Configuration::new("3d5").unwrap();
        conf.set_results(-1.5, parameters.clone()).unwrap();
        assert_eq!(conf.energy(), Some(-1.5));
        assert_eq!(conf.atomic_parameters(), Some(&parameters));
    }
}
