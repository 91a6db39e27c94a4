/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Cowan's atomic structure programs
//!
//! A calculation runs RCN, RCN2 and RCG one after the other in a working
//! directory. Every stage reads the files left behind by the previous one,
//! all named after a shared basename, so two calculations must not share a
//! basename and directory at the same time.

pub mod config;
pub mod errors;
pub mod input;
pub mod output;
pub mod toolchain;

pub use config::CowanConfig;
pub use errors::{CowanError, Result};
pub use output::RcnBlock;
pub use toolchain::{Stage, Toolchain, BIN_DIR_ENV};

use crate::atoms::Element;
use crate::configuration::Configuration;
use crate::parameters::resolve_parameters;

use std::fs;
use std::io;

/// Auxiliary scratch file written by RCN next to the basename files
pub const SCRATCH_FILE: &str = "FTN02";

/// Raw results of the three stages, before the values are named
#[derive(Debug, Clone, PartialEq)]
pub struct RawParameters {
    /// Total energy in eV
    pub energy: f64,
    /// Parameter values in solver order
    pub values: Vec<f64>,
    /// Parameter labels as printed by RCG
    pub names: Vec<String>,
}

/// Calculate the parameters of an electronic configuration using Cowan's programs
#[derive(Debug)]
pub struct Cowan<'a> {
    element: &'a Element,
    configuration: &'a Configuration,
    config: CowanConfig,
    toolchain: Toolchain,
}

impl<'a> Cowan<'a> {
    /// Prepare a calculation, locating the programs first
    pub fn new(
        element: &'a Element,
        configuration: &'a Configuration,
        config: CowanConfig,
    ) -> Result<Self> {
        let toolchain = Toolchain::locate(&config)?;
        Ok(Self::with_toolchain(element, configuration, config, toolchain))
    }

    /// Prepare a calculation with an already located toolchain
    pub fn with_toolchain(
        element: &'a Element,
        configuration: &'a Configuration,
        config: CowanConfig,
        toolchain: Toolchain,
    ) -> Self {
        Self {
            element,
            configuration,
            config,
            toolchain,
        }
    }

    pub fn config(&self) -> &CowanConfig {
        &self.config
    }

    fn run(&self, stage: Stage) -> Result<()> {
        self.toolchain
            .run(stage, &self.config.basename, &self.config.working_dir)
    }

    /// Create the input and run the RCN program
    pub fn rcn(&self) -> Result<()> {
        let rcn_input = input::rcn_input(self.element.atomic_number(), &[self.configuration]);
        log::debug!("RCN input:\n{}", rcn_input);
        fs::write(self.config.file_path("rcn"), rcn_input)?;
        self.run(Stage::Rcn)
    }

    /// Create the input and run the RCN2 program
    pub fn rcn2(&self) -> Result<()> {
        fs::write(self.config.file_path("rcn2"), input::RCN2_INPUT)?;
        self.run(Stage::Rcn2)
    }

    /// Fix up the input written by RCN2 and run the RCG program
    pub fn rcg(&self) -> Result<()> {
        let path = self.config.file_path("rcg");

        // RCN2 may leave the input with ".orig" appended
        let original = self.config.file_path("rcg.orig");
        if original.exists() {
            fs::rename(&original, &path)?;
        }

        let text = fs::read_to_string(&path)?;
        fs::write(&path, input::patch_rcg_input(&text))?;
        self.run(Stage::Rcg)
    }

    /// Run all three stages and read their results
    pub fn get_parameters(&self) -> Result<RawParameters> {
        self.rcn()?;
        self.rcn2()?;
        self.rcg()?;

        let rcn_path = self.config.file_path("rcn_out");
        let blocks = output::parse_rcn_output(&fs::read_to_string(&rcn_path)?)?;
        let block = blocks
            .into_iter()
            .next()
            .ok_or(CowanError::MissingMarker {
                marker: output::ENERGY_MARKER,
                path: rcn_path,
            })?;

        let rcg_path = self.config.file_path("rcg_out");
        let names = output::parse_rcg_output(&fs::read_to_string(&rcg_path)?);

        Ok(RawParameters {
            energy: block.energy,
            values: block.values,
            names,
        })
    }

    /// Run the calculation and store the energy and named parameters in the configuration
    ///
    /// Generated files are removed afterwards unless the settings keep them.
    /// On failure they are left in place for inspection.
    pub fn calculate(&self) -> Result<()> {
        let raw = self.get_parameters()?;
        let parameters = resolve_parameters(self.configuration, &raw.names, &raw.values)?;

        self.configuration.set_results(raw.energy, parameters)?;

        log::debug!(
            "Named {} parameters of {} {}",
            raw.values.len(),
            self.element,
            self.configuration
        );

        if self.config.remove_files {
            self.remove_calculation_files()?;
        }
        Ok(())
    }

    /// Delete every file starting with the basename, and the scratch file
    ///
    /// Files that are already gone are not an error.
    pub fn remove_calculation_files(&self) -> Result<()> {
        let dir = &self.config.working_dir;
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let is_file = entry.file_type()?.is_file();
            if is_file
                && entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with(self.config.basename.as_str())
            {
                paths.push(entry.path());
            }
        }
        paths.sort();
        paths.push(dir.join(SCRATCH_FILE));

        for path in paths {
            match fs::remove_file(&path) {
                Ok(()) => log::debug!("Removed {}", path.display()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
