//! Self-contained HTML report.

use chrono::{Datelike, Local, NaiveDate};
use html_escape::encode_text;
use roi_scenario::{RoiResult, ScenarioInput};
use std::io::Write;

use crate::format::{format_count, format_currency, format_months, format_percent};
use crate::{ReportError, ReportResult};

const TEMPLATE: &str = include_str!("templates/report.html");

/// Render the report for one calculation.
///
/// The output depends only on the arguments; `generated_on` supplies both
/// the "Generated" stamp and the copyright year.
pub fn render_report(
    input: &ScenarioInput,
    result: &RoiResult,
    contact_email: &str,
    generated_on: NaiveDate,
) -> ReportResult<String> {
    let contact_email = contact_email.trim();
    if contact_email.is_empty() {
        return Err(ReportError::MissingContact);
    }

    let html = fill_template(TEMPLATE, |key| {
        let value = match key {
            "SCENARIO_NAME" => encode_text(&input.scenario_name).into_owned(),
            "GENERATED_ON" => generated_on.format("%-m/%-d/%Y").to_string(),
            "CONTACT_EMAIL" => encode_text(contact_email).into_owned(),
            "MONTHLY_SAVINGS" => format_currency(result.monthly_savings),
            "ROI_PERCENTAGE" => format_percent(result.roi_percentage),
            "PAYBACK_MONTHS" => format_months(result.payback_months),
            "NET_SAVINGS" => format_currency(result.net_savings),
            "INPUT_ROWS" => input_rows(input),
            "BREAKDOWN_ROWS" => breakdown_rows(result),
            "YEAR" => generated_on.year().to_string(),
            _ => return None,
        };
        Some(value)
    });

    tracing::debug!(scenario = %input.scenario_name, bytes = html.len(), "rendered report");
    Ok(html)
}

/// Render with today's local date.
pub fn render_report_now(
    input: &ScenarioInput,
    result: &RoiResult,
    contact_email: &str,
) -> ReportResult<String> {
    render_report(input, result, contact_email, Local::now().date_naive())
}

/// Substitute `{{{KEY}}}` markers in one pass over the template, so
/// substituted text is never scanned for further markers. Unknown keys are
/// left as they are.
fn fill_template(template: &str, value_for: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find("{{{") {
        out.push_str(&rest[..start]);
        let marker = &rest[start..];
        let Some(end) = marker[3..].find("}}}") else {
            out.push_str(marker);
            rest = "";
            break;
        };
        let key = &marker[3..3 + end];
        match value_for(key) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&marker[..end + 6]),
        }
        rest = &marker[end + 6..];
    }

    out.push_str(rest);
    out
}

fn row(label: &str, value: &str) -> String {
    format!("      <tr>\n        <td>{label}</td>\n        <td>{value}</td>\n      </tr>")
}

fn input_rows(input: &ScenarioInput) -> String {
    [
        row(
            "Monthly Invoice Volume",
            &format_count(input.monthly_invoice_volume),
        ),
        row("AP Staff Count", &input.num_ap_staff.to_string()),
        row("Hours Per Invoice", &input.avg_hours_per_invoice.to_string()),
        row("Hourly Wage", &format_currency(input.hourly_wage)),
        row("Manual Error Rate", &format!("{}%", input.error_rate_manual)),
        row("Error Cost", &format_currency(input.error_cost)),
        row(
            "Time Horizon",
            &format!("{} months", input.time_horizon_months),
        ),
        row(
            "Implementation Cost",
            &format_currency(input.one_time_implementation_cost),
        ),
    ]
    .join("\n")
}

fn breakdown_rows(result: &RoiResult) -> String {
    [
        row(
            "Current Manual Labor (Monthly)",
            &format_currency(result.labor_cost_manual),
        ),
        row(
            "Automation Cost (Monthly)",
            &format_currency(result.auto_cost),
        ),
        row(
            "Error Reduction Savings (Monthly)",
            &format!(
                "<span class=\"savings\">{}</span>",
                format_currency(result.error_savings)
            ),
        ),
        row(
            "<strong>Total Cumulative Savings</strong>",
            &format!(
                "<span class=\"savings total\">{}</span>",
                format_currency(result.cumulative_savings)
            ),
        ),
    ]
    .join("\n")
}

/// Streams a rendered report into any writer.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_report(
        &mut self,
        input: &ScenarioInput,
        result: &RoiResult,
        contact_email: &str,
        generated_on: NaiveDate,
    ) -> ReportResult<()> {
        let html = render_report(input, result, contact_email, generated_on)?;
        self.writer.write_all(html.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
