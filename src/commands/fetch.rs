use crate::cli::FetchCommands;
use crate::domain::models::{MetricsRecord, NOT_AVAILABLE};
use crate::error::GateError;
use crate::services::adapters::{extract, SourceDocument};
use crate::services::directory::{load_directory, locate};
use crate::services::output::print_lines;
use crate::services::record::{build_record, debt_display};
use crate::services::storage::save_record;
use crate::services::transport::http_get;
use scraper::Html;
use serde_json::Value;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

pub fn handle_fetch(json: bool, command: &FetchCommands) -> anyhow::Result<ExitCode> {
    match command {
        FetchCommands::Api {
            app,
            artifacts,
            host,
            token,
            output,
        } => {
            let (id, name) = resolve_identity(artifacts, app)?;
            let url = api_url(host, &id);
            info!(url, "fetching metrics endpoint");
            let body = http_get(&url, Some(token.as_str()))?;
            let value: Value =
                serde_json::from_str(&body).map_err(|e| GateError::MalformedInput {
                    path: url.clone(),
                    detail: format!("invalid JSON: {e}"),
                })?;
            let raw = extract(&SourceDocument::Api(value), &name)?;
            let record = build_record(Some(id), name, raw);
            save_and_report(json, output, record)
        }
        FetchCommands::Overview {
            app,
            host,
            token,
            output,
        } => {
            let url = overview_url(host);
            info!(url, "fetching overview dashboard");
            let body = http_get(&url, Some(token.as_str()))?;
            let page = Html::parse_document(&body);
            let raw = extract(&SourceDocument::Overview(page), app)?;
            let record = build_record(None, app.clone(), raw);
            save_and_report(json, output, record)
        }
        FetchCommands::Report {
            app,
            artifacts,
            host,
            token,
            output,
        } => {
            let (id, name) = resolve_identity(artifacts, app)?;
            let url = report_url(host, &id);
            info!(url, "fetching report page");
            let body = http_get(&url, Some(token.as_str()))?;
            let page = Html::parse_document(&body);
            let raw = extract(&SourceDocument::Report(page), &name)?;
            let record = build_record(Some(id), name, raw);
            save_and_report(json, output, record)
        }
        FetchCommands::Pdf { app, file, output } => {
            if !file.exists() {
                return Err(GateError::MalformedInput {
                    path: file.display().to_string(),
                    detail: "file not found".to_string(),
                }
                .into());
            }
            info!(file = %file.display(), "extracting report text");
            let text = pdf_extract::extract_text(file).map_err(|e| GateError::MalformedInput {
                path: file.display().to_string(),
                detail: format!("text extraction failed: {e}"),
            })?;
            let raw = extract(&SourceDocument::PdfText(text), app)?;
            let record = build_record(None, app.clone(), raw);
            save_and_report(json, output, record)
        }
    }
}

/// Directory lookup shared by the per-application sources. Returns the
/// upstream id together with the directory's display name.
fn resolve_identity(artifacts: &Path, app: &str) -> Result<(String, String), GateError> {
    let directory = load_directory(artifacts)?;
    let identity = locate(&directory, app).ok_or_else(|| GateError::NotFound {
        name: app.to_string(),
        surface: "application directory".to_string(),
    })?;
    info!(id = %identity.id, name = %identity.name, "application resolved");
    Ok((identity.id.clone(), identity.name.clone()))
}

fn save_and_report(json: bool, output: &Path, record: MetricsRecord) -> anyhow::Result<ExitCode> {
    save_record(output, &record)?;
    print_lines(json, record, |r| {
        let mut lines = vec![
            format!(
                "metrics for {} written to {}",
                r.application_name,
                output.display()
            ),
            format!("  rating: {}", r.architecture_rating),
            format!("  violations: {}", r.total_violations),
        ];
        if r.technical_debt_percent != NOT_AVAILABLE {
            lines.push(format!("  technical debt: {}", debt_display(r)));
        }
        lines
    })?;
    Ok(ExitCode::SUCCESS)
}

fn api_url(host: &str, id: &str) -> String {
    format!(
        "{}/architecture-dashboardapi/applications/{}/metrics",
        host.trim_end_matches('/'),
        id
    )
}

fn overview_url(host: &str) -> String {
    format!("{}/architecture-dashboard/overview", host.trim_end_matches('/'))
}

fn report_url(host: &str, id: &str) -> String {
    format!(
        "{}/architecture-dashboard/applications/{}/report",
        host.trim_end_matches('/'),
        id
    )
}
