/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Input files of the three stages

use crate::configuration::Configuration;

/// RCN control card: solver tuning constants, identical for every run
pub const RCN_HEADER: &str =
    "22 -9    2   10  1.0    5.E-06    1.E-09-2   130   1.0  0.65 11.0 0.50 0.0  0.70\n";

/// Complete RCN2 input, identical for every run
pub const RCN2_INPUT: &str =
    "G5INP     000                 00        00000000  9999999999 .00       1229\n        -1\n    ";

/// Token in the RCG input written by RCN2 that RCG does not accept
pub const RCG_TOKEN: &str = "80998080";

/// Replacement for [`RCG_TOKEN`]
pub const RCG_REPLACEMENT: &str = "99999999";

/// Configuration name in the form RCN expects, e.g. "2P05 3D06"
///
/// Closed inner shells that RCN cannot infer are spelled out: 4f14 below a
/// 5d shell, and 3d10 below a 4f shell unless a 3d shell is listed.
pub fn normalize_configuration_name(configuration: &Configuration) -> String {
    let labels = configuration.subshell_labels();

    configuration
        .shell_occupancies()
        .iter()
        .map(|shell| {
            let label = shell.subshell.label();
            let label = if label == "5d" && !labels.iter().any(|l| l == "4f") {
                "4f14 5d".to_string()
            } else if label == "4f" && !configuration.name().contains("3d") {
                "3d10 4f".to_string()
            } else {
                label
            };
            format!("{}{:02}", label.to_uppercase(), shell.occupancy)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One RCN configuration card
pub fn rcn_configuration_line(atomic_number: i32, configuration: &Configuration) -> String {
    format!(
        "{:5}           {:<8}         {:<8}\n",
        atomic_number,
        configuration.name(),
        normalize_configuration_name(configuration)
    )
}

/// Complete RCN input for one element and a list of configurations
pub fn rcn_input(atomic_number: i32, configurations: &[&Configuration]) -> String {
    let mut input = String::from(RCN_HEADER);
    for configuration in configurations {
        input.push_str(&rcn_configuration_line(atomic_number, configuration));
    }
    input.push_str(&format!("{:5}\n", -1));
    input
}

/// Replace the token RCG rejects in the RCN2-generated input
pub fn patch_rcg_input(text: &str) -> String {
    text.replace(RCG_TOKEN, RCG_REPLACEMENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3d5", "3D05")]
    #[case("1s1,3d6", "1S01 3D06")]
    #[case("2p5,3d10", "2P05 3D10")]
    #[case("5d3", "4F14 5D03")]
    #[case("2p5,5d4", "2P05 4F14 5D04")]
    #[case("4f7", "3D10 4F07")]
    #[case("3d9,4f8", "3D09 4F08")]
    #[case("4d9,4f1", "4D09 3D10 4F01")]
    fn test_normalize_configuration_name(#[case] name: &str, #[case] expected: &str) {
        let conf = Configuration::new(name).unwrap();
        assert_eq!(normalize_configuration_name(&conf), expected);
    }

    #[test]
    fn test_rcn_input() {
        let conf = Configuration::new("1s1,3d6").unwrap();
        let input = rcn_input(26, &[&conf]);
        let lines: Vec<_> = input.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], RCN_HEADER.trim_end_matches('\n'));
        assert_eq!(lines[1], "   26           1s1,3d6          1S01 3D06");
        assert_eq!(lines[2], "   -1");
    }

    #[test]
    fn test_rcn_input_lists_every_configuration() {
        let ground = Configuration::new("3d5").unwrap();
        let excited = Configuration::new("2p5,3d6").unwrap();
        let input = rcn_input(26, &[&ground, &excited]);
        assert_eq!(input.lines().count(), 4);
        assert!(input.ends_with("   -1\n"));
    }

    #[test]
    fn test_patch_rcg_input() {
        let text = "    1 80998080 0\n80998080\n";
        assert_eq!(patch_rcg_input(text), "    1 99999999 0\n99999999\n");
    }
}
