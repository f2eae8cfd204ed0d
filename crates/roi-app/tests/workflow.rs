use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use roi_app::{
    calculate, delete_scenario, list_scenarios, load_scenario, save_current, AppError,
    NotificationLevel, RecordingNotifier, Session,
};
use roi_scenario::{RoiResult, ScenarioInput};
use roi_store::{
    FileScenarioStore, MemoryScenarioStore, SavedScenario, ScenarioId, ScenarioStore, StoreError,
    StoreResult,
};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

/// Backend that refuses every call.
struct OfflineStore;

impl ScenarioStore for OfflineStore {
    fn save(&self, _: &ScenarioInput, _: &RoiResult) -> StoreResult<SavedScenario> {
        Err(StoreError::Backend {
            message: "network unreachable".to_string(),
        })
    }

    fn list(&self) -> StoreResult<Vec<SavedScenario>> {
        Err(StoreError::Backend {
            message: "network unreachable".to_string(),
        })
    }

    fn get(&self, id: &ScenarioId) -> StoreResult<SavedScenario> {
        Err(StoreError::NotFound { id: id.to_string() })
    }

    fn delete(&self, _: &ScenarioId) -> StoreResult<()> {
        Err(StoreError::Backend {
            message: "network unreachable".to_string(),
        })
    }
}

fn full_cycle(store: &dyn ScenarioStore) {
    let notifier = RecordingNotifier::new();

    let older = calculate(ScenarioInput::named("Baseline")).expect("calculation failed");
    save_current(store, &notifier, &older).expect("save failed");

    let input = ScenarioInput {
        monthly_invoice_volume: 3500.0,
        ..ScenarioInput::named("Q4_Pilot")
    };
    let session = calculate(input.clone()).expect("calculation failed");
    let saved = save_current(store, &notifier, &session).expect("save failed");

    let listed = list_scenarios(store, &notifier).expect("list failed");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, saved.id);
    assert_eq!(&listed[0].input, session.inputs().unwrap());
    assert_eq!(&listed[0].results, session.results().unwrap());

    let loaded = load_scenario(store, &notifier, &saved.id).expect("load failed");
    assert_eq!(loaded, session);

    delete_scenario(store, &notifier, &saved.id).expect("delete failed");
    let remaining = list_scenarios(store, &notifier).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name(), "Baseline");

    let messages: Vec<String> = notifier.take().into_iter().map(|n| n.message).collect();
    assert_eq!(
        messages,
        vec![
            "Scenario saved successfully!".to_string(),
            "Scenario saved successfully!".to_string(),
            "Loaded scenario \"Q4_Pilot\"".to_string(),
            "Scenario deleted".to_string(),
        ]
    );
}

#[test]
fn memory_store_full_cycle() {
    full_cycle(&MemoryScenarioStore::new());
}

#[test]
fn file_store_full_cycle() {
    let store = FileScenarioStore::new(unique_temp_dir("roi_app_cycle")).unwrap();
    full_cycle(&store);
}

#[test]
fn loading_trusts_stored_results() {
    let store = MemoryScenarioStore::new();
    let notifier = RecordingNotifier::new();
    let input = ScenarioInput::named("hand-edited");
    let stored = RoiResult {
        monthly_savings: 1.0,
        cumulative_savings: 2.0,
        net_savings: 3.0,
        payback_months: 4.0,
        roi_percentage: 5.0,
        labor_cost_manual: 6.0,
        auto_cost: 7.0,
        error_savings: 8.0,
    };
    let saved = store.save(&input, &stored).unwrap();

    let session = load_scenario(&store, &notifier, &saved.id).unwrap();
    assert_eq!(session.results(), Some(&stored));
}

#[test]
fn save_without_calculation_is_refused() {
    let store = MemoryScenarioStore::new();
    let notifier = RecordingNotifier::new();

    let err = save_current(&store, &notifier, &Session::new()).unwrap_err();
    assert!(matches!(err, AppError::NothingCalculated));
    assert!(store.is_empty());

    let note = notifier.last().unwrap();
    assert_eq!(note.level, NotificationLevel::Error);
    assert_eq!(note.message, "Please calculate ROI first");
}

#[test]
fn store_failures_leave_session_untouched() {
    let notifier = RecordingNotifier::new();
    let session = calculate(ScenarioInput::named("offline")).unwrap();
    let before = session.clone();

    let err = save_current(&OfflineStore, &notifier, &session).unwrap_err();
    assert!(matches!(err, AppError::Store(_)));
    assert!(list_scenarios(&OfflineStore, &notifier).is_err());
    let missing = ScenarioId::new();
    assert!(matches!(
        load_scenario(&OfflineStore, &notifier, &missing),
        Err(AppError::ScenarioNotFound(_))
    ));
    assert!(delete_scenario(&OfflineStore, &notifier, &missing).is_err());

    assert_eq!(session, before);

    let notes = notifier.take();
    assert_eq!(notes.len(), 4);
    assert!(notes.iter().all(|n| n.is_error()));
    assert_eq!(
        notes[0].message,
        "Failed to save scenario: Store error: Store backend error: network unreachable"
    );
    assert!(notes[1].message.starts_with("Failed to load scenarios:"));
    assert!(notes[3].message.starts_with("Failed to delete scenario:"));
}
