//! Data directory: configuration, logs and exports (native only)
//!
//! Directory structure:
//! ~/.quailcalc/
//!   config.yaml              # Currency, sensitivity toggle, default inputs
//!   quailcalc.log
//!   quail_sensitivity.csv    # Written by the export action
//!   quail_snapshot.json      # Written when the clipboard is unavailable
//!
//! The calculator keeps no session state: `config.yaml` is only ever read.

use std::fs;
use std::path::{Path, PathBuf};

use quailcalc_core::{
    FarmInputs, SENSITIVITY_CSV_FILE_NAME, SNAPSHOT_FILE_NAME, SensitivityResult, Snapshot,
    sensitivity_csv_string,
};
use serde::{Deserialize, Serialize};

use crate::util::io::atomic_write;

/// Configuration stored in config.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Prefix shown before money amounts
    pub currency: String,
    /// Whether the sensitivity charts are visible on start-up
    pub show_sensitivity: bool,
    /// Where exports are written (defaults to the data directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    /// Starting inputs; missing fields use the stock scenario
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<FarmInputs>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            currency: "MK".to_string(),
            show_sensitivity: true,
            export_dir: None,
            inputs: None,
        }
    }
}

impl DataConfig {
    pub fn default_inputs(&self) -> FarmInputs {
        self.inputs.unwrap_or_default()
    }
}

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory
#[derive(Debug, Clone)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.quailcalc/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".quailcalc")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    /// Load config.yaml, falling back to defaults when it does not exist
    pub fn load_config(&self) -> Result<DataConfig, StorageError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            tracing::debug!("no config at {}, using defaults", config_path.display());
            return Ok(DataConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {}", e)))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Directory exports are written to
    pub fn export_dir(&self, config: &DataConfig) -> PathBuf {
        config
            .export_dir
            .clone()
            .unwrap_or_else(|| self.root.clone())
    }

    /// Write the sensitivity CSV to `dir`, returning the file path.
    pub fn write_sensitivity_csv(
        dir: &Path,
        sensitivity: &SensitivityResult,
    ) -> Result<PathBuf, StorageError> {
        let csv = sensitivity_csv_string(sensitivity)
            .map_err(|e| StorageError::Serialize(format!("Failed to build CSV: {}", e)))?;
        let path = dir.join(SENSITIVITY_CSV_FILE_NAME);
        write_export(&path, &csv)?;
        Ok(path)
    }

    /// Write the snapshot JSON to `dir`, returning the file path.
    pub fn write_snapshot(dir: &Path, snapshot: &Snapshot) -> Result<PathBuf, StorageError> {
        let json = snapshot
            .to_json_pretty()
            .map_err(|e| StorageError::Serialize(format!("Failed to build snapshot: {}", e)))?;
        let path = dir.join(SNAPSHOT_FILE_NAME);
        write_export(&path, &json)?;
        Ok(path)
    }
}

fn write_export(path: &Path, content: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| StorageError::Io(format!("Failed to create {}: {}", parent.display(), e)))?;
    }
    atomic_write(path, content)
        .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
}

/// Load inputs from a YAML (or JSON) file given on the command line.
pub fn load_inputs_file(path: &Path) -> Result<FarmInputs, StorageError> {
    let content = fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    serde_saphyr::from_str(&content)
        .map_err(|e| StorageError::Parse(format!("Failed to parse {}: {}", path.display(), e)))
}
