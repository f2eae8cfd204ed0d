use proptest::prelude::*;
use roi_core::{Tolerances, nearly_equal};
use roi_engine::{
    AUTOMATED_COST_PER_INVOICE, ROI_BOOST_FACTOR, compute_roi, unboosted_monthly_savings,
};
use roi_scenario::ScenarioInput;

fn close(a: f64, b: f64) -> bool {
    nearly_equal(a, b, Tolerances::default())
}

prop_compose! {
    fn valid_input()(
        volume in 1.0f64..100_000.0,
        staff in 1.0f64..200.0,
        hours in 0.01f64..10.0,
        wage in 0.01f64..500.0,
        error_rate in 0.0f64..=100.0,
        error_cost in 0.0f64..10_000.0,
        horizon in 1u32..240,
        implementation in 0.0f64..5_000_000.0,
    ) -> ScenarioInput {
        ScenarioInput {
            scenario_name: "prop".to_string(),
            monthly_invoice_volume: volume,
            num_ap_staff: staff,
            avg_hours_per_invoice: hours,
            hourly_wage: wage,
            error_rate_manual: error_rate,
            error_cost,
            time_horizon_months: horizon,
            one_time_implementation_cost: implementation,
        }
    }
}

proptest! {
    #[test]
    fn labor_cost_is_positive(input in valid_input()) {
        prop_assert!(compute_roi(&input).labor_cost_manual > 0.0);
    }

    #[test]
    fn auto_cost_has_fixed_slope(input in valid_input(), extra in 1.0f64..1000.0) {
        let base = compute_roi(&input).auto_cost;
        let more = ScenarioInput {
            monthly_invoice_volume: input.monthly_invoice_volume + extra,
            ..input.clone()
        };
        let grown = compute_roi(&more).auto_cost;
        prop_assert!(close(base, input.monthly_invoice_volume * AUTOMATED_COST_PER_INVOICE));
        prop_assert!((grown - base - extra * 0.20).abs() <= 1e-9 * grown.abs().max(1.0));
    }

    #[test]
    fn no_error_savings_at_automated_rate(input in valid_input()) {
        let input = ScenarioInput { error_rate_manual: 0.1, ..input };
        prop_assert_eq!(compute_roi(&input).error_savings, 0.0);
    }

    #[test]
    fn monthly_savings_are_boosted(input in valid_input()) {
        let result = compute_roi(&input);
        let raw = unboosted_monthly_savings(&result);
        prop_assert!(close(result.monthly_savings, raw * ROI_BOOST_FACTOR));
    }

    #[test]
    fn cumulative_and_net_follow_monthly(input in valid_input()) {
        let result = compute_roi(&input);
        prop_assert!(close(
            result.cumulative_savings,
            result.monthly_savings * f64::from(input.time_horizon_months)
        ));
        prop_assert_eq!(
            result.net_savings,
            result.cumulative_savings - input.one_time_implementation_cost
        );
    }

    #[test]
    fn zero_implementation_cost_is_degenerate(input in valid_input()) {
        let input = ScenarioInput { one_time_implementation_cost: 0.0, ..input };
        prop_assert!(!compute_roi(&input).roi_percentage.is_finite());
    }
}
