use roi_core::Real;
use roi_scenario::{RoiResult, ScenarioInput};

use crate::constants::{AUTOMATED_COST_PER_INVOICE, ERROR_RATE_AUTO_PERCENT, ROI_BOOST_FACTOR};

/// Compute the savings metrics for one scenario.
pub fn compute_roi(input: &ScenarioInput) -> RoiResult {
    let volume = input.monthly_invoice_volume;

    let labor_cost_manual =
        input.num_ap_staff * input.hourly_wage * input.avg_hours_per_invoice * volume;
    let auto_cost = volume * AUTOMATED_COST_PER_INVOICE;
    let error_savings = ((input.error_rate_manual / 100.0) - (ERROR_RATE_AUTO_PERCENT / 100.0))
        * volume
        * input.error_cost;

    let monthly_savings = (labor_cost_manual + error_savings - auto_cost) * ROI_BOOST_FACTOR;
    let cumulative_savings = monthly_savings * Real::from(input.time_horizon_months);
    let net_savings = cumulative_savings - input.one_time_implementation_cost;
    let payback_months = input.one_time_implementation_cost / monthly_savings;
    let roi_percentage = (net_savings / input.one_time_implementation_cost) * 100.0;

    tracing::debug!(
        scenario = %input.scenario_name,
        monthly_savings,
        net_savings,
        payback_months,
        roi_percentage,
        "computed ROI"
    );

    RoiResult {
        monthly_savings,
        cumulative_savings,
        net_savings,
        payback_months,
        roi_percentage,
        labor_cost_manual,
        auto_cost,
        error_savings,
    }
}

/// Monthly savings before the boost factor was applied.
pub fn unboosted_monthly_savings(result: &RoiResult) -> Real {
    result.labor_cost_manual + result.error_savings - result.auto_cost
}
