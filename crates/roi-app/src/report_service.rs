//! Report export to disk.

use chrono::{Local, NaiveDate, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::notify::{Notification, Notifier};
use crate::session::Session;

/// Where and for whom to write a report.
#[derive(Debug, Clone)]
pub struct ReportRequest<'a> {
    pub output_dir: &'a Path,
    pub contact_email: &'a str,
    /// Date printed in the report.
    pub generated_on: NaiveDate,
    /// Date in the file name.
    pub file_date: NaiveDate,
}

impl<'a> ReportRequest<'a> {
    /// Request stamped now: local date in the report, UTC date in the
    /// file name.
    pub fn today(output_dir: &'a Path, contact_email: &'a str) -> Self {
        Self {
            output_dir,
            contact_email,
            generated_on: Local::now().date_naive(),
            file_date: Utc::now().date_naive(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub path: PathBuf,
    pub mime_type: &'static str,
    pub bytes: usize,
}

/// Render the session's calculation and write it into the request's
/// directory. Either the whole file is written or none of it is.
///
/// The notifier sees `generating(true)` before the write and
/// `generating(false)` after it, whatever the outcome.
pub fn export_report(
    session: &Session,
    request: &ReportRequest<'_>,
    notifier: &dyn Notifier,
) -> AppResult<ReportResponse> {
    let contact_email = request.contact_email.trim();
    if contact_email.is_empty() {
        let err = AppError::from(roi_report::ReportError::MissingContact);
        notifier.notify(Notification::error("Please enter your email"));
        return Err(err);
    }
    let Some((inputs, results)) = session.current() else {
        notifier.notify(Notification::error(AppError::NothingCalculated.to_string()));
        return Err(AppError::NothingCalculated);
    };

    notifier.generating(true);
    let outcome = write_report(inputs, results, request, contact_email);
    notifier.generating(false);

    match outcome {
        Ok(response) => {
            tracing::info!(path = %response.path.display(), bytes = response.bytes, "report written");
            notifier.notify(Notification::success(format!(
                "Report downloaded! A copy has been sent to {}",
                contact_email
            )));
            Ok(response)
        }
        Err(err) => {
            notifier.notify(Notification::error(format!(
                "Failed to generate report: {}",
                err
            )));
            Err(err)
        }
    }
}

fn write_report(
    inputs: &roi_scenario::ScenarioInput,
    results: &roi_scenario::RoiResult,
    request: &ReportRequest<'_>,
    contact_email: &str,
) -> AppResult<ReportResponse> {
    let html = roi_report::render_report(inputs, results, contact_email, request.generated_on)?;

    fs::create_dir_all(request.output_dir).map_err(|e| {
        AppError::Report(format!(
            "could not create {}: {}",
            request.output_dir.display(),
            e
        ))
    })?;
    let file_name = roi_report::report_file_name(&inputs.scenario_name, request.file_date);
    let path = request.output_dir.join(&file_name);
    let partial = request.output_dir.join(format!("{}.partial", file_name));

    if let Err(e) = fs::write(&partial, &html).and_then(|_| fs::rename(&partial, &path)) {
        let _ = fs::remove_file(&partial);
        return Err(AppError::Report(format!(
            "could not write {}: {}",
            path.display(),
            e
        )));
    }

    Ok(ReportResponse {
        path,
        mime_type: roi_report::REPORT_MIME_TYPE,
        bytes: html.len(),
    })
}
