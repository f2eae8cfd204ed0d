//! Input validation logic.

use crate::schema::ScenarioInput;
use roi_core::{Real, ensure_finite};
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing value: {field}")]
    Missing { field: &'static str },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing { field } => field,
            ValidationError::InvalidValue { field, .. } => field,
        }
    }
}

/// Every rule an input violated, in field order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

enum Bound {
    AtLeast(Real),
    Above(Real),
}

fn check_number(
    errors: &mut Vec<ValidationError>,
    field: &'static str,
    value: Real,
    lower: Bound,
    upper: Option<Real>,
) {
    if let Err(e) = ensure_finite(value, field) {
        errors.push(ValidationError::InvalidValue {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        });
        return;
    }

    let reason = match lower {
        Bound::AtLeast(min) if value < min => Some(if min == 0.0 {
            "must be 0 or greater".to_string()
        } else {
            format!("must be at least {}", min)
        }),
        Bound::Above(min) if value <= min => Some(format!("must be greater than {}", min)),
        _ => None,
    }
    .or_else(|| match upper {
        Some(max) if value > max => Some(format!("must be {} or less", max)),
        _ => None,
    });

    if let Some(reason) = reason {
        errors.push(ValidationError::InvalidValue {
            field,
            value: value.to_string(),
            reason,
        });
    }
}

/// Check an input against the calculator's field rules.
///
/// All fields are checked; the error lists every violation.
pub fn validate_input(input: &ScenarioInput) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if input.scenario_name.trim().is_empty() {
        errors.push(ValidationError::Missing {
            field: "scenario_name",
        });
    }

    check_number(
        &mut errors,
        "monthly_invoice_volume",
        input.monthly_invoice_volume,
        Bound::AtLeast(1.0),
        None,
    );
    check_number(
        &mut errors,
        "num_ap_staff",
        input.num_ap_staff,
        Bound::AtLeast(1.0),
        None,
    );
    check_number(
        &mut errors,
        "avg_hours_per_invoice",
        input.avg_hours_per_invoice,
        Bound::Above(0.0),
        None,
    );
    check_number(
        &mut errors,
        "hourly_wage",
        input.hourly_wage,
        Bound::Above(0.0),
        None,
    );
    check_number(
        &mut errors,
        "error_rate_manual",
        input.error_rate_manual,
        Bound::AtLeast(0.0),
        Some(100.0),
    );
    check_number(
        &mut errors,
        "error_cost",
        input.error_cost,
        Bound::AtLeast(0.0),
        None,
    );
    if input.time_horizon_months < 1 {
        errors.push(ValidationError::InvalidValue {
            field: "time_horizon_months",
            value: input.time_horizon_months.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    check_number(
        &mut errors,
        "one_time_implementation_cost",
        input.one_time_implementation_cost,
        Bound::AtLeast(0.0),
        None,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
