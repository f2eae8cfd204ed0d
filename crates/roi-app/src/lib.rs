//! Shared application service layer for roiflow.
//!
//! Holds the calculator session and centralizes the calculate, save, load,
//! delete, and export flows so any front end drives them the same way.

pub mod calc_service;
pub mod config;
pub mod error;
pub mod notify;
pub mod report_service;
pub mod scenario_service;
pub mod session;

// Re-export key types for convenience
pub use calc_service::calculate;
pub use config::{load_config, AppConfig, CONFIG_FILE_NAME};
pub use error::{AppError, AppResult};
pub use notify::{Notification, NotificationLevel, Notifier, RecordingNotifier, TracingNotifier};
pub use report_service::{export_report, ReportRequest, ReportResponse};
pub use scenario_service::{
    delete_scenario, list_scenarios, load_scenario, parse_scenario_id, save_current,
    ScenarioSummary,
};
pub use session::Session;
