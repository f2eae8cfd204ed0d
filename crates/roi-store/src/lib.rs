//! roi-store: persistence for saved scenarios.
//!
//! Records are write-once: a store can insert, list, fetch, and delete
//! scenarios, never edit them.

pub mod file;
pub mod memory;
pub mod store;
pub mod types;

pub use file::FileScenarioStore;
pub use memory::MemoryScenarioStore;
pub use store::ScenarioStore;
pub use types::*;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scenario not found: {id}")]
    NotFound { id: String },

    #[error("Invalid scenario id: {0}")]
    InvalidId(String),

    #[error("Corrupt scenario record {path}: {message}")]
    Corrupt { path: String, message: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    #[error("Store backend error: {message}")]
    Backend { message: String },
}
