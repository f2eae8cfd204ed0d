//! roi-scenario: scenario input/result records, input validation, and the
//! YAML/JSON input file format.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, ValidationErrors, validate_input};

use std::path::Path;

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Unsupported input format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encodings accepted for scenario input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> ScenarioResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(ScenarioError::UnsupportedFormat { extension }),
        }
    }
}

pub fn load_yaml(path: &Path) -> ScenarioResult<ScenarioInput> {
    let content = std::fs::read_to_string(path)?;
    let input: ScenarioInput = serde_yaml::from_str(&content)?;
    validate_input(&input)?;
    Ok(input)
}

pub fn save_yaml(path: &Path, input: &ScenarioInput) -> ScenarioResult<()> {
    validate_input(input)?;
    let content = serde_yaml::to_string(input)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ScenarioResult<ScenarioInput> {
    let content = std::fs::read_to_string(path)?;
    let input: ScenarioInput = serde_json::from_str(&content)?;
    validate_input(&input)?;
    Ok(input)
}

pub fn save_json(path: &Path, input: &ScenarioInput) -> ScenarioResult<()> {
    validate_input(input)?;
    let content = serde_json::to_string_pretty(input)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load an input file, picking the decoder from the file extension.
pub fn load_input(path: &Path) -> ScenarioResult<ScenarioInput> {
    match InputFormat::from_path(path)? {
        InputFormat::Yaml => load_yaml(path),
        InputFormat::Json => load_json(path),
    }
}

/// Parse an input document without validating it.
///
/// Used by `validate`-style callers that want every violation reported
/// rather than a decode that stops at the first one.
pub fn parse_input(content: &str, format: InputFormat) -> ScenarioResult<ScenarioInput> {
    let input = match format {
        InputFormat::Yaml => serde_yaml::from_str(content)?,
        InputFormat::Json => serde_json::from_str(content)?,
    };
    Ok(input)
}
