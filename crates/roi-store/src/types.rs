//! Stored record types.

use chrono::{DateTime, Utc};
use roi_scenario::{RoiResult, ScenarioInput};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::StoreError;

/// Name of the collection scenarios are kept in.
pub const COLLECTION: &str = "scenarios";

/// Opaque identifier assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(Uuid);

impl ScenarioId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ScenarioId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ScenarioId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| StoreError::InvalidId(s.to_string()))
    }
}

/// A scenario as held by the store: the inputs, the result computed from
/// them at save time, and the store-assigned identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedScenario {
    pub id: ScenarioId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub input: ScenarioInput,
    pub results: RoiResult,
}

impl SavedScenario {
    pub fn name(&self) -> &str {
        &self.input.scenario_name
    }
}

/// Newest first; equal timestamps fall back to the greater id.
pub(crate) fn newest_first(a: &SavedScenario, b: &SavedScenario) -> std::cmp::Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_parses_its_own_display() {
        let id = ScenarioId::new();
        let parsed: ScenarioId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn bad_id_is_rejected() {
        let err = "not-a-uuid".parse::<ScenarioId>().unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(_)));
    }

    #[test]
    fn record_flattens_inputs_next_to_results() {
        let record = SavedScenario {
            id: ScenarioId::new(),
            created_at: Utc::now(),
            input: ScenarioInput::named("flat"),
            results: RoiResult {
                monthly_savings: 1.0,
                cumulative_savings: 36.0,
                net_savings: -49_964.0,
                payback_months: 50_000.0,
                roi_percentage: -99.928,
                labor_cost_manual: 1.0,
                auto_cost: 400.0,
                error_savings: 800.0,
            },
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["scenario_name"], "flat");
        assert_eq!(value["time_horizon_months"], 36);
        assert_eq!(value["results"]["auto_cost"], 400.0);
        assert!(value.get("input").is_none());

        let back: SavedScenario = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
