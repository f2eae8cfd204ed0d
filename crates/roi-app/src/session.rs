//! Calculator session state.

use roi_scenario::{RoiResult, ScenarioInput};
use roi_store::SavedScenario;

/// The inputs and results currently on screen.
///
/// Operations never mutate a session in place; they hand back a new one,
/// so a failed action leaves the caller's session exactly as it was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    inputs: Option<ScenarioInput>,
    results: Option<RoiResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_calculation(inputs: ScenarioInput, results: RoiResult) -> Self {
        Self {
            inputs: Some(inputs),
            results: Some(results),
        }
    }

    /// Session showing a stored scenario. The stored result is taken as-is.
    pub fn from_saved(saved: &SavedScenario) -> Self {
        Self::with_calculation(saved.input.clone(), saved.results)
    }

    pub fn inputs(&self) -> Option<&ScenarioInput> {
        self.inputs.as_ref()
    }

    pub fn results(&self) -> Option<&RoiResult> {
        self.results.as_ref()
    }

    /// Both halves of the current calculation, if there is one.
    pub fn current(&self) -> Option<(&ScenarioInput, &RoiResult)> {
        match (&self.inputs, &self.results) {
            (Some(inputs), Some(results)) => Some((inputs, results)),
            _ => None,
        }
    }
}
