//! In-process scenario store for tests and throwaway sessions.

use chrono::Utc;
use roi_scenario::{RoiResult, ScenarioInput};
use std::sync::{Mutex, MutexGuard};

use crate::store::ScenarioStore;
use crate::types::{SavedScenario, ScenarioId};
use crate::{StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryScenarioStore {
    // (insertion sequence, record)
    records: Mutex<Vec<(u64, SavedScenario)>>,
}

impl MemoryScenarioStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(u64, SavedScenario)>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl ScenarioStore for MemoryScenarioStore {
    fn save(&self, input: &ScenarioInput, result: &RoiResult) -> StoreResult<SavedScenario> {
        let mut records = self.lock();
        let seq = records.last().map(|(seq, _)| seq + 1).unwrap_or(0);
        let record = SavedScenario {
            id: ScenarioId::new(),
            created_at: Utc::now(),
            input: input.clone(),
            results: *result,
        };
        records.push((seq, record.clone()));
        tracing::info!(id = %record.id, name = %record.name(), "saved scenario");
        Ok(record)
    }

    fn list(&self) -> StoreResult<Vec<SavedScenario>> {
        let mut records = self.lock().clone();
        records.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| seq_b.cmp(seq_a))
        });
        Ok(records.into_iter().map(|(_, record)| record).collect())
    }

    fn get(&self, id: &ScenarioId) -> StoreResult<SavedScenario> {
        self.lock()
            .iter()
            .find(|(_, record)| record.id == *id)
            .map(|(_, record)| record.clone())
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    fn delete(&self, id: &ScenarioId) -> StoreResult<()> {
        let mut records = self.lock();
        let before = records.len();
        records.retain(|(_, record)| record.id != *id);
        if records.len() == before {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        tracing::info!(%id, "deleted scenario");
        Ok(())
    }
}
