/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! # cowan-rs
//!
//! Slater-Condon integrals, spin-orbit coupling constants and total energies
//! of atomic configurations, calculated with Cowan's RCN, RCN2 and RCG
//! programs and labeled in physical notation.
//!
//! ```no_run
//! use cowan_rs::{Configuration, CowanConfig, Element, PeriodicTable};
//!
//! let element = Element::new("Fe", None, &PeriodicTable::new())?;
//! let configuration = Configuration::new("1s1,3d6")?;
//! cowan_rs::calculate(&element, &configuration, CowanConfig::default())?;
//!
//! let parameters = configuration.atomic_parameters().unwrap();
//! println!("F2(3d,3d) = {:?}", parameters.get("F2(3d,3d)"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod atoms;
pub mod cli;
pub mod configuration;
pub mod cowan;
pub mod parameters;
pub mod utils;

pub use atoms::{AtomicNumberLookup, Charge, ChargeConvention, Element, PeriodicTable};
pub use configuration::{Configuration, ParticleClass, Shell, Subshell};
pub use cowan::{Cowan, CowanConfig, CowanError};
pub use parameters::AtomicParameters;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// Run Cowan's programs for `configuration` of `element` and store the results in it
pub fn calculate(
    element: &Element,
    configuration: &Configuration,
    config: CowanConfig,
) -> cowan::Result<()> {
    Cowan::new(element, configuration, config)?.calculate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(AUTHORS, "Ameyanagi");
    }

    #[test]
    fn test_missing_toolchain_is_reported_before_running() {
        let element = Element::new("Fe", None, &PeriodicTable::new()).unwrap();
        let configuration = Configuration::new("3d5").unwrap();
        let config = CowanConfig {
            bin_dir: Some("/nonexistent/cowan".into()),
            ..CowanConfig::default()
        };
        assert!(matches!(
            calculate(&element, &configuration, config),
            Err(CowanError::ToolchainNotFound(_))
        ));
        assert_eq!(configuration.energy(), None);
    }
}
