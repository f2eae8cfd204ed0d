//! roi-report: value formatting and the downloadable HTML report.

pub mod format;
pub mod html;

pub use format::{format_count, format_currency, format_months, format_percent};
pub use html::{ReportWriter, render_report, render_report_now};

use chrono::NaiveDate;

/// MIME type of the rendered report.
pub const REPORT_MIME_TYPE: &str = "text/html";

/// File extension of the rendered report.
pub const REPORT_EXTENSION: &str = "html";

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("Please enter your email")]
    MissingContact,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// `roi-report-<scenario_name>-<YYYY-MM-DD>.html`
///
/// Path separators and control characters in the name are replaced with
/// `_` so the report always lands in the target directory.
pub fn report_file_name(scenario_name: &str, date: NaiveDate) -> String {
    let safe_name: String = scenario_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!(
        "roi-report-{}-{}.{}",
        safe_name,
        date.format("%Y-%m-%d"),
        REPORT_EXTENSION
    )
}
