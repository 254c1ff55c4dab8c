use crate::cli::Rating;
use crate::services::gate::{evaluate, load_gate_config, resolve_thresholds};
use crate::services::output::print_lines;
use crate::services::record::debt_display;
use crate::services::storage::load_record;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

/// Judge a fetched metrics artifact against the release thresholds.
/// A failed gate is a normal outcome: the verdict is printed and the exit
/// code carries the result.
pub fn handle_check(
    json: bool,
    artifact: &Path,
    min_rating: Option<Rating>,
    max_violations: Option<u64>,
    config: Option<&Path>,
) -> anyhow::Result<ExitCode> {
    let record = load_record(artifact)?;
    let file = match config {
        Some(path) => Some(load_gate_config(path)?),
        None => None,
    };
    let thresholds = resolve_thresholds(min_rating, max_violations, file.as_ref());
    info!(
        min_rating = %thresholds.min_rating,
        max_violations = thresholds.max_violations,
        "gate thresholds resolved"
    );

    let verdict = evaluate(&record, &thresholds)?;
    let passed = verdict.passed;
    print_lines(json, verdict, |v| {
        let headline = if v.passed {
            "architecture gate passed"
        } else {
            "architecture gate failed"
        };
        vec![headline.to_string(), v.explanation.clone()]
    })?;

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

pub fn handle_show(json: bool, artifact: &Path) -> anyhow::Result<ExitCode> {
    let record = load_record(artifact)?;
    print_lines(json, record, |r| {
        let mut lines = vec![
            format!("application: {}", r.application_name),
            format!("id: {}", r.application_id.as_deref().unwrap_or("n/a")),
            format!("rating: {}", r.architecture_rating),
            format!("violations: {}", r.total_violations),
            format!("technical debt: {}", debt_display(r)),
        ];
        if !r.scores.is_empty() {
            lines.push(format!("scores: {}", r.scores.join(", ")));
        }
        lines
    })?;
    Ok(ExitCode::SUCCESS)
}
