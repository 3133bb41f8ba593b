//! Runtime configuration for the demo binaries.
//!
//! The defaults reproduce the fixed filenames the original heightmap
//! workflow used; a JSON config makes the paths and dimensions explicit
//! per invocation.
use crate::error::GridError;
use crate::grid::GridDims;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config for the image-to-text exporter.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("heightmap.png"),
            output_path: PathBuf::from("input.txt"),
        }
    }
}

/// Config for the text-to-image importer.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub dims: GridDims,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("output.txt"),
            output_path: PathBuf::from("output.png"),
            dims: GridDims::default(),
        }
    }
}

/// Read and parse a JSON config file.
pub fn load_config<T>(path: &Path) -> Result<T, GridError>
where
    T: for<'de> Deserialize<'de>,
{
    let contents = fs::read_to_string(path).map_err(|e| GridError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&contents).map_err(|e| GridError::Config {
        path: path.to_path_buf(),
        source: e,
    })
}
