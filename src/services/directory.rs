use crate::domain::models::ApplicationIdentity;
use crate::error::GateError;
use crate::services::normalize::normalize;
use std::path::Path;
use tracing::debug;

/// File name of the application directory inside the artifacts directory.
pub const DIRECTORY_FILE: &str = "applications.cache";

pub fn load_directory(artifacts_dir: &Path) -> Result<Vec<ApplicationIdentity>, GateError> {
    let path = artifacts_dir.join(DIRECTORY_FILE);
    if !path.exists() {
        return Err(GateError::MalformedInput {
            path: path.display().to_string(),
            detail: "application directory not found".to_string(),
        });
    }
    let raw = std::fs::read_to_string(&path).map_err(|e| GateError::MalformedInput {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| GateError::MalformedInput {
        path: path.display().to_string(),
        detail: format!("invalid JSON: {e}"),
    })
}

/// First directory entry whose name matches `target` under loose
/// normalization. Directory order decides ties.
pub fn locate<'a>(
    directory: &'a [ApplicationIdentity],
    target: &str,
) -> Option<&'a ApplicationIdentity> {
    let want = normalize(target);
    let found = directory.iter().find(|app| normalize(&app.name) == want);
    if let Some(app) = found {
        debug!(id = %app.id, name = %app.name, "directory match");
    }
    found
}
