//! Scenario record definitions.

use roi_core::Real;
use serde::{Deserialize, Deserializer, Serialize};

/// Business metrics describing a manual invoice-processing operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScenarioInput {
    pub scenario_name: String,
    pub monthly_invoice_volume: Real,
    pub num_ap_staff: Real,
    pub avg_hours_per_invoice: Real,
    pub hourly_wage: Real,
    /// Percent of invoices with a manual error, 0 to 100.
    pub error_rate_manual: Real,
    pub error_cost: Real,
    pub time_horizon_months: u32,
    pub one_time_implementation_cost: Real,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            scenario_name: String::new(),
            monthly_invoice_volume: 2000.0,
            num_ap_staff: 3.0,
            avg_hours_per_invoice: 0.17,
            hourly_wage: 30.0,
            error_rate_manual: 0.5,
            error_cost: 100.0,
            time_horizon_months: 36,
            one_time_implementation_cost: 50_000.0,
        }
    }
}

impl ScenarioInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            scenario_name: name.into(),
            ..Self::default()
        }
    }
}

/// Derived savings metrics. Any field may be negative or non-finite.
///
/// Non-finite values serialize as `null` in JSON and read back as NaN.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RoiResult {
    #[serde(deserialize_with = "real_or_nan")]
    pub monthly_savings: Real,
    #[serde(deserialize_with = "real_or_nan")]
    pub cumulative_savings: Real,
    #[serde(deserialize_with = "real_or_nan")]
    pub net_savings: Real,
    #[serde(deserialize_with = "real_or_nan")]
    pub payback_months: Real,
    #[serde(deserialize_with = "real_or_nan")]
    pub roi_percentage: Real,
    #[serde(deserialize_with = "real_or_nan")]
    pub labor_cost_manual: Real,
    #[serde(deserialize_with = "real_or_nan")]
    pub auto_cost: Real,
    #[serde(deserialize_with = "real_or_nan")]
    pub error_savings: Real,
}

impl RoiResult {
    pub fn is_finite(&self) -> bool {
        self.values().iter().all(|(_, v)| v.is_finite())
    }

    /// Field name and value pairs, in declaration order.
    pub fn values(&self) -> [(&'static str, Real); 8] {
        [
            ("monthly_savings", self.monthly_savings),
            ("cumulative_savings", self.cumulative_savings),
            ("net_savings", self.net_savings),
            ("payback_months", self.payback_months),
            ("roi_percentage", self.roi_percentage),
            ("labor_cost_manual", self.labor_cost_manual),
            ("auto_cost", self.auto_cost),
            ("error_savings", self.error_savings),
        ]
    }

    /// Names of the fields holding infinity or NaN.
    pub fn non_finite_fields(&self) -> Vec<&'static str> {
        self.values()
            .into_iter()
            .filter(|(_, v)| !v.is_finite())
            .map(|(name, _)| name)
            .collect()
    }
}

fn real_or_nan<'de, D>(deserializer: D) -> Result<Real, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Real>::deserialize(deserializer)?.unwrap_or(Real::NAN))
}
