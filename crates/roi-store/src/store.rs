//! Scenario storage API.

use roi_scenario::{RoiResult, ScenarioInput};

use crate::StoreResult;
use crate::types::{SavedScenario, ScenarioId};

/// Backing collection for saved scenarios.
///
/// Every call is a fresh round trip to the backend; nothing is cached
/// between calls.
pub trait ScenarioStore {
    /// Insert a new record. The store assigns `id` and `created_at`.
    fn save(&self, input: &ScenarioInput, result: &RoiResult) -> StoreResult<SavedScenario>;

    /// All records, newest `created_at` first.
    fn list(&self) -> StoreResult<Vec<SavedScenario>>;

    fn get(&self, id: &ScenarioId) -> StoreResult<SavedScenario>;

    /// Remove exactly the record with `id`. Fails with `NotFound` if absent.
    fn delete(&self, id: &ScenarioId) -> StoreResult<()>;
}
