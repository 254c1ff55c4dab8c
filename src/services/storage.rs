use crate::domain::models::MetricsRecord;
use crate::error::GateError;
use std::path::Path;
use tracing::info;

/// Write the record as pretty-printed JSON, creating parent directories as
/// needed. Key order follows the struct declaration, so reruns against
/// unchanged metrics produce byte-identical artifacts.
pub fn save_record(path: &Path, record: &MetricsRecord) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(record)?)?;
    info!(path = %path.display(), "metrics artifact written");
    Ok(())
}

pub fn load_record(path: &Path) -> Result<MetricsRecord, GateError> {
    if !path.exists() {
        return Err(GateError::MalformedInput {
            path: path.display().to_string(),
            detail: "metrics artifact not found".to_string(),
        });
    }
    let raw = std::fs::read_to_string(path).map_err(|e| GateError::MalformedInput {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| GateError::MalformedInput {
        path: path.display().to_string(),
        detail: format!("invalid JSON: {e}"),
    })
}
