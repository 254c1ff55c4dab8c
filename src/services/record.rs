use crate::domain::models::{MetricsRecord, RawFields, NOT_AVAILABLE};

/// Merge adapter output into the canonical record shape. Fields no source
/// supplied take their neutral defaults, so every record is fully populated
/// no matter how sparse the source was.
pub fn build_record(
    application_id: Option<String>,
    application_name: String,
    raw: RawFields,
) -> MetricsRecord {
    MetricsRecord {
        application_id,
        application_name,
        architecture_rating: raw
            .architecture_rating
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        total_violations: raw.total_violations.unwrap_or(0),
        technical_debt_percent: raw
            .technical_debt_percent
            .map(|percent| percent.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        scores: raw.scores,
    }
}

/// Human line for the debt field, percent sign only when a value exists.
pub fn debt_display(record: &MetricsRecord) -> String {
    if record.technical_debt_percent == NOT_AVAILABLE {
        NOT_AVAILABLE.to_string()
    } else {
        format!("{}%", record.technical_debt_percent)
    }
}
