use thiserror::Error;

/// Fatal failures surfaced by fetch and check flows.
///
/// Field parse trouble inside an adapter is not represented here: adapters
/// log a warning and fall back to the field's neutral value instead of
/// aborting the whole extraction.
#[derive(Debug, Error)]
pub enum GateError {
    /// The reporting surface answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}")]
    Transport { url: String, status: u16 },

    /// The reporting surface could not be reached at all.
    #[error("request to {url} failed: {source}")]
    Unreachable { url: String, source: reqwest::Error },

    /// No directory entry or dashboard card matched the requested name.
    #[error("application '{name}' not found in {surface}")]
    NotFound { name: String, surface: String },

    /// A required input existed but could not be decoded.
    #[error("malformed input at {path}: {detail}")]
    MalformedInput { path: String, detail: String },

    /// The document text carried no technical-debt summary row.
    #[error("no technical-debt summary row found in document text")]
    SummaryLineMissing,

    /// A persisted rating fell outside the A..F ordinal scale.
    #[error("unknown rating format: {rating}")]
    UnknownRating { rating: String },
}

impl GateError {
    /// Stable machine-readable code for the JSON error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            GateError::Transport { .. } | GateError::Unreachable { .. } => "TRANSPORT",
            GateError::NotFound { .. } => "NOT_FOUND",
            GateError::MalformedInput { .. } | GateError::SummaryLineMissing => "MALFORMED_INPUT",
            GateError::UnknownRating { .. } => "UNKNOWN_RATING",
        }
    }
}
