//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use roi_store::FileScenarioStore;

use crate::error::{AppError, AppResult};

/// Conventional config file name looked up by front ends.
pub const CONFIG_FILE_NAME: &str = "roiflow.yaml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding saved scenarios. Unset means
    /// `.roiflow/scenarios` under the current directory.
    pub store_dir: Option<PathBuf>,
    pub report_dir: PathBuf,
    pub contact_email: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_dir: None,
            report_dir: PathBuf::from("."),
            contact_email: None,
        }
    }
}

impl AppConfig {
    pub fn open_store(&self) -> AppResult<FileScenarioStore> {
        let store = match &self.store_dir {
            Some(dir) => FileScenarioStore::new(dir.clone())?,
            None => FileScenarioStore::for_workspace(Path::new("."))?,
        };
        Ok(store)
    }
}

/// Load configuration from a YAML file. Missing keys take their defaults.
pub fn load_config(path: &Path) -> AppResult<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }

    serde_yaml::from_str(&content).map_err(|e| AppError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
