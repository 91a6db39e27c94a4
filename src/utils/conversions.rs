/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Unit conversion utilities

use super::constants;

/// Convert energy from Rydberg to eV
pub fn rydberg_to_ev(rydberg: f64) -> f64 {
    rydberg * constants::RYDBERG_TO_EV
}

/// Convert energy from eV to Rydberg
pub fn ev_to_rydberg(ev: f64) -> f64 {
    ev * constants::EV_TO_RYDBERG
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_conversions() {
        let ev = 10.0;
        let rydberg = ev_to_rydberg(ev);
        assert_relative_eq!(rydberg_to_ev(rydberg), ev, epsilon = 1e-10);

        assert_relative_eq!(rydberg_to_ev(1.0), 13.605693122994, epsilon = 1e-12);
    }
}
