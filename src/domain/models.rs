use serde::{Deserialize, Serialize};

/// Placeholder for string fields no source supplied.
pub const NOT_AVAILABLE: &str = "N/A";

fn default_rating() -> String {
    NOT_AVAILABLE.to_string()
}

fn default_debt() -> String {
    NOT_AVAILABLE.to_string()
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// One row of the application directory artifact.
///
/// The directory is produced by an upstream discovery job and uses
/// PascalCase keys on disk.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApplicationIdentity {
    #[serde(rename = "Key")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

/// Canonical metrics artifact, one application per file.
///
/// Field declaration order is the on-disk key order; downstream diffing
/// depends on it staying put. `technical_debt_percent` stays a string
/// because some sources report it as human-formatted text.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MetricsRecord {
    #[serde(default)]
    pub application_id: Option<String>,
    #[serde(default)]
    pub application_name: String,
    #[serde(default = "default_rating")]
    pub architecture_rating: String,
    #[serde(default)]
    pub total_violations: u64,
    #[serde(default = "default_debt")]
    pub technical_debt_percent: String,
    #[serde(default)]
    pub scores: Vec<String>,
}

/// What a single source adapter managed to pull out of its document.
///
/// `None`/empty means the source did not carry the field; the record
/// builder fills in neutral defaults.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawFields {
    pub architecture_rating: Option<String>,
    pub total_violations: Option<u64>,
    pub technical_debt_percent: Option<u64>,
    pub scores: Vec<String>,
}

/// Raw `[gate]` table of a thresholds config file.
#[derive(Debug, Deserialize, Default)]
pub struct GateConfig {
    #[serde(default)]
    pub gate: GateSection,
}

#[derive(Debug, Deserialize, Default)]
pub struct GateSection {
    pub min_rating: Option<String>,
    pub max_violations: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct GateVerdict {
    pub passed: bool,
    pub rating: String,
    pub violations: u64,
    pub explanation: String,
}
