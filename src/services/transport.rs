use crate::error::GateError;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// GET `url` and return the body as text. Non-2xx statuses are fatal;
/// redirects are followed by the client before we see the status.
pub fn http_get(url: &str, bearer_token: Option<&str>) -> Result<String, GateError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
        .build()
        .map_err(|e| GateError::Unreachable {
            url: url.to_string(),
            source: e,
        })?;

    let mut request = client.get(url);
    if let Some(token) = bearer_token {
        request = request.bearer_auth(token);
    }

    debug!(url, "GET");
    let response = request.send().map_err(|e| GateError::Unreachable {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(GateError::Transport {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().map_err(|e| GateError::Unreachable {
        url: url.to_string(),
        source: e,
    })
}
