use crate::cli::Rating;
use crate::domain::models::{GateConfig, GateSection, GateVerdict, MetricsRecord};
use crate::error::GateError;
use std::path::Path;

pub const DEFAULT_MIN_RATING: Rating = Rating::B;
pub const DEFAULT_MAX_VIOLATIONS: u64 = 5;

/// Fully resolved gate thresholds, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateThresholds {
    pub min_rating: Rating,
    pub max_violations: u64,
}

/// Read the `[gate]` table from a TOML config file. A rating the scale does
/// not know is rejected here, while the file path is still at hand.
pub fn load_gate_config(path: &Path) -> Result<GateSection, GateError> {
    let raw = std::fs::read_to_string(path).map_err(|e| GateError::MalformedInput {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    let config: GateConfig = toml::from_str(&raw).map_err(|e| GateError::MalformedInput {
        path: path.display().to_string(),
        detail: format!("invalid TOML: {e}"),
    })?;
    if let Some(raw_rating) = &config.gate.min_rating {
        if Rating::parse(raw_rating).is_none() {
            return Err(GateError::MalformedInput {
                path: path.display().to_string(),
                detail: format!("unknown min_rating '{raw_rating}'"),
            });
        }
    }
    Ok(config.gate)
}

/// Flag beats config file beats built-in default, per threshold.
pub fn resolve_thresholds(
    flag_min: Option<Rating>,
    flag_max: Option<u64>,
    file: Option<&GateSection>,
) -> GateThresholds {
    let file_min = file
        .and_then(|section| section.min_rating.as_deref())
        .and_then(Rating::parse);
    let file_max = file.and_then(|section| section.max_violations);
    GateThresholds {
        min_rating: flag_min.or(file_min).unwrap_or(DEFAULT_MIN_RATING),
        max_violations: flag_max.or(file_max).unwrap_or(DEFAULT_MAX_VIOLATIONS),
    }
}

/// Judge a metrics record against the thresholds.
///
/// Both clauses are always evaluated and both appear in the explanation,
/// so a failed verdict tells the operator everything at once. A rating
/// outside the A..F scale is an error, not a failed verdict.
pub fn evaluate(
    record: &MetricsRecord,
    thresholds: &GateThresholds,
) -> Result<GateVerdict, GateError> {
    let raw = record.architecture_rating.trim().to_ascii_uppercase();
    let rating =
        Rating::parse(&raw).ok_or_else(|| GateError::UnknownRating { rating: raw.clone() })?;

    let rating_ok = rating <= thresholds.min_rating;
    let violations_ok = record.total_violations <= thresholds.max_violations;
    let explanation = format!(
        "rating {} (required minimum: {}); violations {} (max allowed: {})",
        rating, thresholds.min_rating, record.total_violations, thresholds.max_violations
    );

    Ok(GateVerdict {
        passed: rating_ok && violations_ok,
        rating: rating.to_string(),
        violations: record.total_violations,
        explanation,
    })
}
