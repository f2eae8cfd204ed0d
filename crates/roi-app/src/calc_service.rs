//! Input validation and ROI calculation.

use roi_scenario::{validate_input, ScenarioInput};

use crate::error::AppResult;
use crate::session::Session;

/// Validate `input` and compute its results.
///
/// On a validation failure the engine is not run and no session is
/// produced, so the caller keeps whatever it had.
pub fn calculate(input: ScenarioInput) -> AppResult<Session> {
    validate_input(&input)?;
    let results = roi_engine::compute_roi(&input);
    if !results.is_finite() {
        tracing::warn!(
            scenario = %input.scenario_name,
            fields = ?results.non_finite_fields(),
            "calculation produced non-finite values"
        );
    }
    Ok(Session::with_calculation(input, results))
}
