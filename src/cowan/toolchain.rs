/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Location and invocation of the three Cowan programs

use super::config::CowanConfig;
use super::errors::{CowanError, Result};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Environment variable pointing to an alternative directory of stage scripts
pub const BIN_DIR_ENV: &str = "COWAN_BIN_DIR";

/// The three programs, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Radial Hartree-Fock solution
    Rcn,
    /// Radial integrals and input for RCG
    Rcn2,
    /// Angular part and parameter listing
    Rcg,
}

impl Stage {
    /// Script wrapping the program inside the toolchain directory
    pub fn script(self) -> &'static str {
        match self {
            Stage::Rcn => "runrcn.sh",
            Stage::Rcn2 => "runrcn2.sh",
            Stage::Rcg => "runrcg.sh",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Rcn => "RCN",
            Stage::Rcn2 => "RCN2",
            Stage::Rcg => "RCG",
        };
        f.write_str(name)
    }
}

/// Directory holding the stage scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    bin_dir: PathBuf,
}

impl Toolchain {
    /// Use the scripts in `bin_dir` without further checks
    pub fn new<P: Into<PathBuf>>(bin_dir: P) -> Self {
        Self {
            bin_dir: bin_dir.into(),
        }
    }

    /// Find the scripts: explicit setting, then COWAN_BIN_DIR, then the bundled copy
    pub fn locate(config: &CowanConfig) -> Result<Self> {
        let bin_dir = match (&config.bin_dir, env::var_os(BIN_DIR_ENV)) {
            (Some(dir), _) => dir.clone(),
            (None, Some(dir)) if !dir.is_empty() => PathBuf::from(dir),
            _ => Self::bundled_dir(env::consts::OS)?,
        };

        if !bin_dir.is_dir() {
            return Err(CowanError::ToolchainNotFound(bin_dir));
        }
        // The scripts are started from the working directory
        let bin_dir = bin_dir.canonicalize()?;
        log::debug!("Using Cowan's programs from {}", bin_dir.display());
        Ok(Self::new(bin_dir))
    }

    /// Bundled script directory for an operating system
    pub fn bundled_dir(os: &str) -> Result<PathBuf> {
        match os {
            "linux" | "macos" => Ok(Path::new(env!("CARGO_MANIFEST_DIR")).join("bin").join(os)),
            other => Err(CowanError::UnsupportedPlatform(other.to_string())),
        }
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Full path of the script running `stage`
    pub fn command(&self, stage: Stage) -> PathBuf {
        self.bin_dir.join(stage.script())
    }

    /// Run `stage` as `<script> <basename>` inside `working_dir`
    ///
    /// Output of the program is discarded; only the exit status is checked.
    pub fn run(&self, stage: Stage, basename: &str, working_dir: &Path) -> Result<()> {
        let command = self.command(stage);
        log::debug!("Running {} {}", command.display(), basename);

        let status = Command::new(&command)
            .arg(basename)
            .current_dir(working_dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| CowanError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            log::error!(
                "The command {} did not finish successfully.",
                command.display()
            );
            return Err(CowanError::StageFailed {
                stage,
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_scripts() {
        let toolchain = Toolchain::new("/opt/cowan");
        assert_eq!(
            toolchain.command(Stage::Rcn2),
            PathBuf::from("/opt/cowan/runrcn2.sh")
        );
        assert_eq!(Stage::Rcg.to_string(), "RCG");
    }

    #[test]
    fn test_bundled_dir() {
        assert!(Toolchain::bundled_dir("linux").unwrap().ends_with("bin/linux"));
        assert!(Toolchain::bundled_dir("macos").is_ok());
        assert!(matches!(
            Toolchain::bundled_dir("windows"),
            Err(CowanError::UnsupportedPlatform(_))
        ));
    }

    #[test]
    fn test_explicit_dir_must_exist() {
        let config = CowanConfig {
            bin_dir: Some(PathBuf::from("/nonexistent/cowan/bin")),
            ..CowanConfig::default()
        };
        assert!(matches!(
            Toolchain::locate(&config),
            Err(CowanError::ToolchainNotFound(_))
        ));
    }

    #[test]
    fn test_explicit_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = CowanConfig {
            bin_dir: Some(dir.path().to_path_buf()),
            ..CowanConfig::default()
        };
        let toolchain = Toolchain::locate(&config).unwrap();
        assert_eq!(toolchain.bin_dir(), dir.path().canonicalize().unwrap());
    }
}
