/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Golden values from the real RCN, RCN2 and RCG programs
//!
//! These need the Cowan toolchain, located through `COWAN_BIN_DIR` or the
//! bundled `bin/<os>` directory. Run them with `cargo test -- --ignored`.

use approx::assert_relative_eq;
use cowan_rs::cowan::{Cowan, CowanConfig};
use cowan_rs::{Charge, Configuration, Element, PeriodicTable};
use tempfile::tempdir;

#[test]
#[ignore = "requires the Cowan toolchain"]
fn test_iron_1s_core_hole() {
    let work = tempdir().unwrap();
    let element = Element::new("Fe", Some(Charge::new(2)), &PeriodicTable::new()).unwrap();
    let configuration = Configuration::new("1s1,3d6").unwrap();
    let config = CowanConfig {
        working_dir: work.path().to_path_buf(),
        ..CowanConfig::default()
    };

    Cowan::new(&element, &configuration, config)
        .unwrap()
        .calculate()
        .unwrap();

    assert_relative_eq!(configuration.energy().unwrap(), -27438.6132941, epsilon = 1e-4);

    let parameters = configuration.atomic_parameters().unwrap();
    let expected = [
        ("F2(3d,3d)", 12.7364),
        ("F4(3d,3d)", 7.9634),
        ("G2(1s,3d)", 0.0655),
        ("ζ(3d)", 0.0753),
    ];
    assert_eq!(parameters.len(), expected.len());
    for (name, value) in expected {
        assert_relative_eq!(parameters.get(name).unwrap(), value, epsilon = 1e-4);
    }

    // Nothing is left behind in the working directory
    assert_eq!(std::fs::read_dir(work.path()).unwrap().count(), 0);
}

#[test]
#[ignore = "requires the Cowan toolchain"]
fn test_initial_and_final_states_share_a_valence_shell() {
    let work = tempdir().unwrap();
    let element = Element::new("Ni", Some(Charge::new(2)), &PeriodicTable::new()).unwrap();
    let final_state = Configuration::new("2p5,3d9").unwrap();
    let initial_state = final_state.initial().unwrap();
    assert_eq!(initial_state.name(), "3d08");

    for configuration in [&initial_state, &final_state] {
        let config = CowanConfig {
            working_dir: work.path().to_path_buf(),
            ..CowanConfig::default()
        };
        Cowan::new(&element, configuration, config)
            .unwrap()
            .calculate()
            .unwrap();
    }

    let initial = initial_state.atomic_parameters().unwrap();
    let last = final_state.atomic_parameters().unwrap();
    assert!(initial.contains("F2(3d,3d)"));
    assert!(last.contains("ζ(2p)"));
    assert!(last.contains("G1(2p,3d)"));
}
