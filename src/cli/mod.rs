/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Command Line Interface (CLI) module
//!
//! Builds the element and configuration from the command line, runs the
//! calculation and reports the energy and parameters.

use crate::atoms::{Charge, ChargeConvention, Element, PeriodicTable};
use crate::configuration::Configuration;
use crate::cowan::{Cowan, CowanConfig};
use crate::parameters::AtomicParameters;

use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration used when neither a configuration nor a charge is given
pub const DEFAULT_CONFIGURATION: &str = "3d5";

/// Atomic parameters from Cowan's programs
#[derive(Parser, Debug)]
#[command(name = "cowan-rs", author, version, about, long_about = None)]
pub struct Cli {
    /// Element symbol
    #[arg(short, long, default_value = "Fe")]
    pub element: String,

    /// Ionic charge, e.g. "3+"
    #[arg(short = 'q', long, allow_hyphen_values = true)]
    pub charge: Option<String>,

    /// How the charge string orders magnitude and sign
    #[arg(long, value_enum, default_value_t = ChargeOrder::MagnitudeSign)]
    pub charge_convention: ChargeOrder,

    /// Configuration, e.g. "3d5" or "2p5,3d6" (default: valence shell of the ion, else 3d5)
    #[arg(short, long)]
    pub configuration: Option<String>,

    /// Log level
    #[arg(short, long, value_enum, default_value_t = LogLevel::Info)]
    pub loglevel: LogLevel,

    /// Keep the generated files
    #[arg(short, long)]
    pub keep_files: bool,

    /// Basename of the generated files
    #[arg(short, long)]
    pub basename: Option<String>,

    /// Directory in which the programs run
    #[arg(short, long, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    /// Directory containing runrcn.sh, runrcn2.sh and runrcg.sh
    #[arg(long, value_name = "DIR")]
    pub bin_dir: Option<PathBuf>,

    /// JSON file with calculation settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Charge string convention accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChargeOrder {
    /// "3+", "2-"
    MagnitudeSign,
    /// "+3", "-2"
    SignMagnitude,
}

impl From<ChargeOrder> for ChargeConvention {
    fn from(order: ChargeOrder) -> Self {
        match order {
            ChargeOrder::MagnitudeSign => ChargeConvention::MagnitudeSign,
            ChargeOrder::SignMagnitude => ChargeConvention::SignMagnitude,
        }
    }
}

/// Verbosity of the log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Cli {
    /// Calculation settings: the JSON file if given, overridden by flags
    pub fn settings(&self) -> anyhow::Result<CowanConfig> {
        let mut config = match &self.config {
            Some(path) => CowanConfig::from_json_file(path)
                .with_context(|| format!("reading settings from {}", path.display()))?,
            None => CowanConfig::default(),
        };

        if let Some(basename) = &self.basename {
            config.basename = basename.clone();
        }
        if let Some(dir) = &self.working_dir {
            config.working_dir = dir.clone();
        }
        if let Some(dir) = &self.bin_dir {
            config.bin_dir = Some(dir.clone());
        }
        if self.keep_files {
            config.remove_files = false;
        }
        Ok(config)
    }

    /// Element described by the command line
    pub fn element(&self) -> anyhow::Result<Element> {
        let charge = self
            .charge
            .as_deref()
            .map(|c| Charge::parse(c, self.charge_convention.into()))
            .transpose()?;
        Ok(Element::new(&self.element, charge, &PeriodicTable::new())?)
    }

    /// Configuration given on the command line, or the valence shell of the ion
    ///
    /// Falls back to [`DEFAULT_CONFIGURATION`] without a charge.
    pub fn configuration(&self, element: &Element) -> anyhow::Result<Configuration> {
        if let Some(name) = &self.configuration {
            return Ok(Configuration::new(name)?);
        }

        if element.charge().is_none() {
            return Ok(Configuration::new(DEFAULT_CONFIGURATION)?);
        }
        let subshell = element
            .valence_subshell()
            .ok_or_else(|| anyhow!("{} has no tabulated valence subshell", element))?;
        let occupancy = element.valence_occupancy()?;
        Ok(Configuration::new(&format!("{}{}", subshell, occupancy))?)
    }
}

/// Results of one calculation, as printed with `--json`
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub element: String,
    pub atomic_number: i32,
    pub configuration: &'a str,
    /// Total energy in eV
    pub energy: f64,
    /// Parameters in eV
    pub parameters: &'a AtomicParameters,
}

impl<'a> Report<'a> {
    pub fn new(element: &Element, configuration: &'a Configuration) -> anyhow::Result<Self> {
        let energy = configuration
            .energy()
            .ok_or_else(|| anyhow!("no energy was calculated for {}", configuration))?;
        let parameters = configuration
            .atomic_parameters()
            .ok_or_else(|| anyhow!("no parameters were calculated for {}", configuration))?;

        Ok(Self {
            element: element.to_string(),
            atomic_number: element.atomic_number(),
            configuration: configuration.name(),
            energy,
            parameters,
        })
    }

    /// Log the energy line and one line per parameter
    pub fn log(&self) {
        log::info!(
            "{:2} {:<8} E = {:.4} eV",
            self.element,
            self.configuration,
            self.energy
        );
        log::debug!("");
        for (name, value) in self.parameters.iter() {
            log::debug!("{} = {:.4} eV", name, value);
        }
        log::debug!("");
    }
}

/// Run the calculation described by the command line
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let element = cli.element()?;
    let configuration = cli.configuration(&element)?;
    let settings = cli.settings()?;

    let cowan = Cowan::new(&element, &configuration, settings)?;
    cowan
        .calculate()
        .with_context(|| format!("calculating {} {}", element, configuration))?;

    let report = Report::new(&element, &configuration)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.log();
    }
    Ok(())
}
