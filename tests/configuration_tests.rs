/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

use cowan_rs::configuration::{Configuration, ConfigurationError, ParticleClass, Shell};
use rstest::rstest;

const SHELLS: [Shell; 4] = [Shell::S, Shell::P, Shell::D, Shell::F];

#[test]
fn test_iron_d5() {
    let conf = Configuration::new("3d5").unwrap();
    assert!(!conf.has_core());
    assert_eq!(conf.occupancies(), vec![5]);
    assert_eq!(ParticleClass::of(Shell::D, 5), ParticleClass::Multiple);
    assert_eq!(conf.subshell_labels().len(), 1);
}

#[test]
fn test_iron_core_hole() {
    let conf = Configuration::new("1s1,3d6").unwrap();
    assert!(conf.has_core());
    assert_eq!(conf.subshell_labels(), vec!["1s", "3d"]);
    assert_eq!(conf.number_of_core_particles(), Some(ParticleClass::One));
}

#[test]
fn test_occupancy_above_capacity() {
    assert!(matches!(
        Configuration::new("3d11"),
        Err(ConfigurationError::TooManyElectrons {
            occupancy: 11,
            capacity: 10,
            ..
        })
    ));
}

/// Every valid string over a small grammar, with one or two shells
fn all_names() -> Vec<String> {
    let mut singles = Vec::new();
    for level in 1..=5 {
        for shell in SHELLS {
            for occupancy in 0..=shell.capacity() {
                singles.push(format!("{}{}{}", level, shell, occupancy));
            }
        }
    }

    let mut names = singles.clone();
    for core in singles.iter().step_by(7) {
        for valence in singles.iter().step_by(5) {
            names.push(format!("{},{}", core, valence));
        }
    }
    names
}

#[test]
fn test_derived_fields_are_stable() {
    for name in all_names() {
        let conf = Configuration::new(&name).unwrap();
        let again = Configuration::new(conf.name()).unwrap();
        assert_eq!(conf.levels(), again.levels(), "{}", name);
        assert_eq!(conf.shells(), again.shells(), "{}", name);
        assert_eq!(conf.occupancies(), again.occupancies(), "{}", name);
        assert_eq!(conf.subshells(), again.subshells(), "{}", name);
        assert_eq!(conf.has_core(), conf.subshells().len() == 2, "{}", name);

        // Rebuilding from the parsed parts gives the same structure
        let rebuilt =
            Configuration::from_subshells_and_occupancies(&conf.subshell_labels(), &conf.occupancies())
                .unwrap();
        assert_eq!(rebuilt.subshells(), conf.subshells(), "{}", name);
        assert_eq!(rebuilt.occupancies(), conf.occupancies(), "{}", name);
    }
}

#[test]
fn test_every_overfilled_shell_is_rejected() {
    for shell in SHELLS {
        for occupancy in shell.capacity() + 1..=shell.capacity() + 3 {
            let name = format!("4{}{}", shell, occupancy);
            assert!(
                matches!(
                    Configuration::new(&name),
                    Err(ConfigurationError::TooManyElectrons { .. })
                ),
                "{}",
                name
            );
        }
    }
}

#[rstest]
#[case("2p6,3d5", Some(ParticleClass::Zero))]
#[case("2p0,3d5", Some(ParticleClass::Zero))]
#[case("2p5,3d6", Some(ParticleClass::One))]
#[case("2p1,3d6", Some(ParticleClass::One))]
#[case("2p4,3d7", Some(ParticleClass::Multiple))]
#[case("3d8,4f8", Some(ParticleClass::Multiple))]
#[case("4f3", None)]
fn test_core_particles(#[case] name: &str, #[case] expected: Option<ParticleClass>) {
    let conf = Configuration::new(name).unwrap();
    assert_eq!(conf.number_of_core_particles(), expected);
}

#[test]
fn test_configurations_sort_by_name() {
    let mut confs: Vec<Configuration> = ["3d5", "2p5,3d6", "1s1,3d6"]
        .iter()
        .map(|name| Configuration::new(name).unwrap())
        .collect();
    confs.sort();
    let names: Vec<_> = confs.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["1s1,3d6", "2p5,3d6", "3d5"]);
}
