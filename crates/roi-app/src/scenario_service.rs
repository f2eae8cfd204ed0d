//! Saving, listing, loading, and deleting scenarios.

use chrono::{DateTime, Utc};
use roi_store::{SavedScenario, ScenarioId, ScenarioStore};

use crate::error::{AppError, AppResult};
use crate::notify::{Notification, Notifier};
use crate::session::Session;

/// Summary of a saved scenario for listing.
#[derive(Debug, Clone)]
pub struct ScenarioSummary {
    pub id: ScenarioId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub monthly_invoice_volume: f64,
}

impl From<&SavedScenario> for ScenarioSummary {
    fn from(saved: &SavedScenario) -> Self {
        Self {
            id: saved.id,
            name: saved.input.scenario_name.clone(),
            created_at: saved.created_at,
            monthly_invoice_volume: saved.input.monthly_invoice_volume,
        }
    }
}

fn report_failure<T>(notifier: &dyn Notifier, action: &str, err: AppError) -> AppResult<T> {
    notifier.notify(Notification::error(format!("Failed to {}: {}", action, err)));
    Err(err)
}

/// Persist the session's current calculation as a new scenario.
pub fn save_current(
    store: &dyn ScenarioStore,
    notifier: &dyn Notifier,
    session: &Session,
) -> AppResult<SavedScenario> {
    let Some((inputs, results)) = session.current() else {
        notifier.notify(Notification::error(AppError::NothingCalculated.to_string()));
        return Err(AppError::NothingCalculated);
    };

    match store.save(inputs, results) {
        Ok(saved) => {
            notifier.notify(Notification::success("Scenario saved successfully!"));
            Ok(saved)
        }
        Err(e) => report_failure(notifier, "save scenario", e.into()),
    }
}

/// All saved scenarios, newest first.
pub fn list_scenarios(
    store: &dyn ScenarioStore,
    notifier: &dyn Notifier,
) -> AppResult<Vec<SavedScenario>> {
    match store.list() {
        Ok(scenarios) => Ok(scenarios),
        Err(e) => report_failure(notifier, "load scenarios", e.into()),
    }
}

/// Session showing the stored scenario `id`, results taken verbatim.
pub fn load_scenario(
    store: &dyn ScenarioStore,
    notifier: &dyn Notifier,
    id: &ScenarioId,
) -> AppResult<Session> {
    match store.get(id) {
        Ok(saved) => {
            notifier.notify(Notification::success(format!(
                "Loaded scenario \"{}\"",
                saved.name()
            )));
            Ok(Session::from_saved(&saved))
        }
        Err(e) => report_failure(notifier, "load scenario", e.into()),
    }
}

pub fn delete_scenario(
    store: &dyn ScenarioStore,
    notifier: &dyn Notifier,
    id: &ScenarioId,
) -> AppResult<()> {
    match store.delete(id) {
        Ok(()) => {
            notifier.notify(Notification::success("Scenario deleted"));
            Ok(())
        }
        Err(e) => report_failure(notifier, "delete scenario", e.into()),
    }
}

/// Parse a user-supplied scenario id.
pub fn parse_scenario_id(raw: &str) -> AppResult<ScenarioId> {
    raw.parse()
        .map_err(|_| AppError::InvalidInput(format!("'{}' is not a scenario id", raw)))
}
