/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Settings of a Cowan calculation

use super::errors::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where and how a calculation runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CowanConfig {
    /// Shared basename of every generated file
    pub basename: String,
    /// Directory holding the generated files; the programs run inside it
    pub working_dir: PathBuf,
    /// Directory with the stage scripts, overriding COWAN_BIN_DIR and the bundled copy
    pub bin_dir: Option<PathBuf>,
    /// Whether to delete the generated files after a successful run
    pub remove_files: bool,
}

impl Default for CowanConfig {
    fn default() -> Self {
        Self {
            basename: "input".to_string(),
            working_dir: PathBuf::from("."),
            bin_dir: None,
            remove_files: true,
        }
    }
}

impl CowanConfig {
    /// Load settings from a JSON file; missing fields keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Path of a generated file, e.g. `extension = "rcn"` gives `<dir>/input.rcn`
    pub fn file_path(&self, extension: &str) -> PathBuf {
        self.working_dir
            .join(format!("{}.{}", self.basename, extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CowanConfig::default();
        assert_eq!(config.basename, "input");
        assert!(config.remove_files);
        assert_eq!(config.file_path("rcn_out"), Path::new(".").join("input.rcn_out"));
    }

    #[test]
    fn test_partial_json() {
        let config: CowanConfig =
            serde_json::from_str(r#"{"basename": "fe3", "remove_files": false}"#).unwrap();
        assert_eq!(config.basename, "fe3");
        assert!(!config.remove_files);
        assert_eq!(config.working_dir, PathBuf::from("."));
        assert_eq!(config.bin_dir, None);
    }
}
