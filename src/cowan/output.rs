/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Output files of RCN and RCG

use super::errors::{CowanError, Result};
use crate::utils::rydberg_to_ev;

use once_cell::sync::Lazy;
use regex::Regex;

/// Line of the RCN output holding the total energy
pub const ENERGY_MARKER: &str = "ETOT=";

/// Line of the RCG output preceding the parameter names
pub const NAMES_MARKER: &str = "PARAMETER VALUES IN";

/// Position of the first value on the line following the energy
const FIRST_VALUE_OFFSET: usize = 4;

/// Continuation lines that may carry further values
const CONTINUATION_LINES: usize = 2;

/// Parameter names are separated by two or more spaces
static NAME_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("separator pattern is valid"));

/// Energy and parameter values of one configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RcnBlock {
    /// Total energy in eV
    pub energy: f64,
    /// Parameter values in solver order
    pub values: Vec<f64>,
}

/// Parse a Fortran real, accepting `D` exponents
fn parse_real(token: &str) -> Result<f64> {
    token
        .replace(['D', 'd'], "E")
        .parse()
        .map_err(|_| CowanError::ParseError(format!("invalid number {:?}", token)))
}

/// Every other token of `tokens`, starting at `offset`, as numbers
fn every_second(tokens: &[&str], offset: usize) -> Result<Vec<f64>> {
    tokens
        .iter()
        .skip(offset)
        .step_by(2)
        .map(|token| parse_real(token))
        .collect()
}

/// Read the energy and parameter values of every configuration in RCN output
///
/// After each `ETOT=` line, blank lines are skipped; the next line holds the
/// values at every second token from [`FIRST_VALUE_OFFSET`], and each of the
/// two lines after it adds every second token when it is not blank.
pub fn parse_rcn_output(text: &str) -> Result<Vec<RcnBlock>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !lines[i].contains(ENERGY_MARKER) {
            i += 1;
            continue;
        }

        let energy_token = lines[i]
            .split_whitespace()
            .last()
            .and_then(|token| token.rsplit('=').next())
            .unwrap_or_default();
        let energy = rydberg_to_ev(parse_real(energy_token)?);

        i += 1;
        while i < lines.len() && lines[i].trim().is_empty() {
            i += 1;
        }
        let first = lines.get(i).ok_or_else(|| {
            CowanError::ParseError("no parameter values after the total energy".to_string())
        })?;

        let tokens: Vec<&str> = first.split_whitespace().collect();
        let mut values = every_second(&tokens, FIRST_VALUE_OFFSET)?;
        i += 1;

        for _ in 0..CONTINUATION_LINES {
            let Some(line) = lines.get(i) else { break };
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if !tokens.is_empty() {
                values.extend(every_second(&tokens, 0)?);
            }
            i += 1;
        }

        blocks.push(RcnBlock { energy, values });
    }

    Ok(blocks)
}

/// Read the raw parameter names from RCG output
///
/// Returns an empty list when the marker is absent.
pub fn parse_rcg_output(text: &str) -> Vec<String> {
    let mut lines = text.lines();
    if !lines.any(|line| line.contains(NAMES_MARKER)) {
        return Vec::new();
    }

    lines
        .skip(2)
        .take_while(|line| !line.trim().is_empty())
        .flat_map(|line| NAME_SEPARATOR.split(line.trim()))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
