use chrono::NaiveDate;
use roi_engine::compute_roi;
use roi_report::{render_report, report_file_name};
use roi_scenario::ScenarioInput;

fn pilot() -> ScenarioInput {
    ScenarioInput {
        scenario_name: "Q4_Pilot".to_string(),
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

fn generated_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

#[test]
fn pilot_report_embeds_headline_metrics() {
    let input = pilot();
    let result = compute_roi(&input);
    let html = render_report(&input, &result, "ap@example.com", generated_on()).unwrap();

    assert!(html.contains("<title>ROI Report - Q4_Pilot</title>"));
    assert!(html.contains("<strong>Contact:</strong> ap@example.com"));
    assert!(html.contains("<strong>Generated:</strong> 10/18/2026"));
    assert!(html.contains(">$33,990<"));
    assert!(html.contains(">2347.3%<"));
    assert!(html.contains(">1.5 mo<"));
    assert!(html.contains(">$1,173,640<"));
}

#[test]
fn pilot_report_lists_inputs_and_breakdown() {
    let input = pilot();
    let result = compute_roi(&input);
    let html = render_report(&input, &result, "ap@example.com", generated_on()).unwrap();

    for expected in [
        "<td>Monthly Invoice Volume</td>\n        <td>2,000</td>",
        "<td>AP Staff Count</td>\n        <td>3</td>",
        "<td>Hours Per Invoice</td>\n        <td>0.17</td>",
        "<td>Hourly Wage</td>\n        <td>$30</td>",
        "<td>Manual Error Rate</td>\n        <td>0.5%</td>",
        "<td>Error Cost</td>\n        <td>$100</td>",
        "<td>Time Horizon</td>\n        <td>36 months</td>",
        "<td>Implementation Cost</td>\n        <td>$50,000</td>",
        "<td>Current Manual Labor (Monthly)</td>\n        <td>$30,600</td>",
        "<td>Automation Cost (Monthly)</td>\n        <td>$400</td>",
        "<span class=\"savings\">$800</span>",
        "<span class=\"savings total\">$1,223,640</span>",
    ] {
        assert!(html.contains(expected), "report is missing {expected:?}");
    }
}

#[test]
fn report_is_self_contained() {
    let input = pilot();
    let result = compute_roi(&input);
    let html = render_report(&input, &result, "ap@example.com", generated_on()).unwrap();

    assert!(!html.contains("http://"));
    assert!(!html.contains("https://"));
    assert!(!html.contains("<link"));
    assert!(!html.contains("<script"));
    assert!(!html.contains("{{{"));
}

#[test]
fn user_text_is_escaped() {
    let input = ScenarioInput {
        scenario_name: "<script>alert(1)</script>".to_string(),
        ..pilot()
    };
    let result = compute_roi(&input);
    let html = render_report(&input, &result, "a&b@example.com", generated_on()).unwrap();

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("a&amp;b@example.com"));
}

#[test]
fn degenerate_result_renders_without_numbers() {
    let input = ScenarioInput {
        one_time_implementation_cost: 0.0,
        ..pilot()
    };
    let result = compute_roi(&input);
    let html = render_report(&input, &result, "ap@example.com", generated_on()).unwrap();

    assert!(html.contains(">∞%<"));
    assert!(html.contains(">0.0 mo<"));
}

#[test]
fn rendering_is_deterministic_for_a_date() {
    let input = pilot();
    let result = compute_roi(&input);
    let a = render_report(&input, &result, "ap@example.com", generated_on()).unwrap();
    let b = render_report(&input, &result, "ap@example.com", generated_on()).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        report_file_name(&input.scenario_name, generated_on()),
        "roi-report-Q4_Pilot-2026-10-18.html"
    );
}

#[test]
fn marker_text_in_user_input_is_shown_verbatim() {
    let input = ScenarioInput {
        scenario_name: "Plan {{{NET_SAVINGS}}} / {{{CONTACT_EMAIL}}}".to_string(),
        ..pilot()
    };
    let result = compute_roi(&input);
    let html = render_report(&input, &result, "{{{YEAR}}}@example.com", generated_on()).unwrap();

    assert!(html.contains(
        "<strong>Scenario:</strong> Plan {{{NET_SAVINGS}}} / {{{CONTACT_EMAIL}}}</p>"
    ));
    assert!(html.contains(
        "<title>ROI Report - Plan {{{NET_SAVINGS}}} / {{{CONTACT_EMAIL}}}</title>"
    ));
    assert!(html.contains("<strong>Contact:</strong> {{{YEAR}}}@example.com"));
}
