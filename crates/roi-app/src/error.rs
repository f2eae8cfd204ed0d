//! Error types for the roi-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives every front end one error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Input validation failed: {0}")]
    Validation(roi_scenario::ValidationErrors),

    #[error("Scenario file error: {0}")]
    Scenario(String),

    #[error("Please calculate ROI first")]
    NothingCalculated,

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for roi-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<roi_scenario::ScenarioError> for AppError {
    fn from(err: roi_scenario::ScenarioError) -> Self {
        match err {
            roi_scenario::ScenarioError::Validation(errors) => AppError::Validation(errors),
            other => AppError::Scenario(other.to_string()),
        }
    }
}

impl From<roi_scenario::ValidationErrors> for AppError {
    fn from(errors: roi_scenario::ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<roi_store::StoreError> for AppError {
    fn from(err: roi_store::StoreError) -> Self {
        match err {
            roi_store::StoreError::NotFound { id } => AppError::ScenarioNotFound(id),
            other => AppError::Store(other.to_string()),
        }
    }
}

impl From<roi_report::ReportError> for AppError {
    fn from(err: roi_report::ReportError) -> Self {
        AppError::Report(err.to_string())
    }
}
