/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Error types for running Cowan's programs

use super::toolchain::Stage;
use crate::configuration::ConfigurationError;
use crate::parameters::ResolutionError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing, running or reading a calculation
#[derive(Error, Debug)]
pub enum CowanError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Could not start {}: {source}", .command.display())]
    Spawn { command: PathBuf, source: io::Error },

    #[error("The command {stage} did not finish successfully ({status})")]
    StageFailed { stage: Stage, status: String },

    #[error("Cowan's programs are not available on {0}; set COWAN_BIN_DIR to their location")]
    UnsupportedPlatform(String),

    #[error("Cowan's programs were not found in {}", .0.display())]
    ToolchainNotFound(PathBuf),

    #[error("Marker {marker:?} not found in {}", .path.display())]
    MissingMarker { marker: &'static str, path: PathBuf },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

/// Result type for Cowan operations
pub type Result<T> = std::result::Result<T, CowanError>;
