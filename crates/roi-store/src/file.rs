//! Directory-backed scenario store: one JSON document per record.

use chrono::{DateTime, Duration, Utc};
use roi_scenario::{RoiResult, ScenarioInput, validate_input};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::ScenarioStore;
use crate::types::{COLLECTION, SavedScenario, ScenarioId, newest_first};
use crate::{StoreError, StoreResult};

const RECORD_EXT: &str = "json";
const TEMP_EXT: &str = "json.tmp";

/// Input keys a stored record must carry. Input defaults apply to new
/// scenarios only, never to what is read back.
const STORED_INPUT_FIELDS: [&str; 9] = [
    "scenario_name",
    "monthly_invoice_volume",
    "num_ap_staff",
    "avg_hours_per_invoice",
    "hourly_wage",
    "error_rate_manual",
    "error_cost",
    "time_horizon_months",
    "one_time_implementation_cost",
];

#[derive(Clone, Debug)]
pub struct FileScenarioStore {
    root_dir: PathBuf,
}

impl FileScenarioStore {
    pub fn new(root_dir: PathBuf) -> StoreResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store kept under `<workspace>/.roiflow/scenarios`.
    pub fn for_workspace(workspace_dir: &Path) -> StoreResult<Self> {
        if workspace_dir.as_os_str().is_empty() {
            return Err(StoreError::InvalidPath {
                message: "workspace directory is empty".to_string(),
            });
        }
        Self::new(workspace_dir.join(".roiflow").join(COLLECTION))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn record_path(&self, id: &ScenarioId) -> PathBuf {
        self.root_dir.join(format!("{}.{}", id, RECORD_EXT))
    }

    /// Read one record strictly: every input field present and valid.
    fn read_record(&self, path: &Path) -> StoreResult<SavedScenario> {
        let content = fs::read_to_string(path)?;
        let corrupt = |message: String| StoreError::Corrupt {
            path: path.display().to_string(),
            message,
        };

        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| corrupt(e.to_string()))?;
        let missing: Vec<&str> = STORED_INPUT_FIELDS
            .iter()
            .copied()
            .filter(|field| value.get(field).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(corrupt(format!("missing fields: {}", missing.join(", "))));
        }

        let record: SavedScenario =
            serde_json::from_value(value).map_err(|e| corrupt(e.to_string()))?;
        validate_input(&record.input).map_err(|e| corrupt(e.to_string()))?;
        Ok(record)
    }

    /// Paths of finished records. Unfinished writes are skipped.
    fn record_paths(&self) -> StoreResult<Vec<PathBuf>> {
        let mut paths = Vec::new();

        if !self.root_dir.exists() {
            return Ok(paths);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if file_name.ends_with(TEMP_EXT) {
                tracing::warn!(path = %path.display(), "ignoring unfinished scenario write");
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXT) {
                continue;
            }
            paths.push(path);
        }

        Ok(paths)
    }

    fn read_all(&self) -> StoreResult<Vec<SavedScenario>> {
        self.record_paths()?
            .iter()
            .map(|path| self.read_record(path))
            .collect()
    }

    /// Latest `created_at` among readable records. Unreadable files are
    /// logged and skipped so they never block an insert.
    fn latest_created_at(&self) -> StoreResult<Option<DateTime<Utc>>> {
        #[derive(Deserialize)]
        struct Stamp {
            created_at: DateTime<Utc>,
        }

        let mut latest = None;
        for path in self.record_paths()? {
            let stamp = fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|content| {
                    serde_json::from_str::<Stamp>(&content).map_err(|e| e.to_string())
                });
            match stamp {
                Ok(stamp) => latest = latest.max(Some(stamp.created_at)),
                Err(message) => {
                    tracing::warn!(path = %path.display(), %message, "skipping unreadable scenario record");
                }
            }
        }
        Ok(latest)
    }

    /// A timestamp strictly after every record already in the store, so a
    /// fresh save always lists first.
    fn next_created_at(&self) -> StoreResult<DateTime<Utc>> {
        let now = Utc::now();
        Ok(match self.latest_created_at()? {
            Some(latest) if latest >= now => latest + Duration::microseconds(1),
            _ => now,
        })
    }
}

impl ScenarioStore for FileScenarioStore {
    fn save(&self, input: &ScenarioInput, result: &RoiResult) -> StoreResult<SavedScenario> {
        fs::create_dir_all(&self.root_dir)?;

        let record = SavedScenario {
            id: ScenarioId::new(),
            created_at: self.next_created_at()?,
            input: input.clone(),
            results: *result,
        };

        let final_path = self.record_path(&record.id);
        let temp_path = self.root_dir.join(format!("{}.{}", record.id, TEMP_EXT));
        let json = serde_json::to_string_pretty(&record)?;
        if let Err(e) = fs::write(&temp_path, json).and_then(|_| fs::rename(&temp_path, &final_path))
        {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::info!(id = %record.id, name = %record.name(), "saved scenario");
        Ok(record)
    }

    fn list(&self) -> StoreResult<Vec<SavedScenario>> {
        let mut records = self.read_all()?;
        records.sort_by(newest_first);
        tracing::debug!(count = records.len(), dir = %self.root_dir.display(), "listed scenarios");
        Ok(records)
    }

    fn get(&self, id: &ScenarioId) -> StoreResult<SavedScenario> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        self.read_record(&path)
    }

    fn delete(&self, id: &ScenarioId) -> StoreResult<()> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        fs::remove_file(path)?;
        tracing::info!(%id, "deleted scenario");
        Ok(())
    }
}
