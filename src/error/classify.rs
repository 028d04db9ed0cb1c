//! HTTP error classification
//!
//! Maps a non-success HTTP status (plus the response body) onto the closed
//! error taxonomy. This is the only place that decides user-facing wording.

use super::types::DriverError;
use serde_json::Value;

pub(crate) const NETWORK_FAILURE_MESSAGE: &str =
    "Network connection failed, check your network settings";
const UNAUTHORIZED_MESSAGE: &str = "Invalid API key";
const RATE_LIMITED_MESSAGE: &str = "Too many requests, please retry later";
const SERVER_ERROR_MESSAGE: &str = "Service temporarily unavailable, please retry later";

/// Best-effort extraction of `error.message` from a Gemini error envelope:
/// `{ "error": { "code": 400, "message": "...", "status": "INVALID_ARGUMENT" } }`
pub fn extract_error_message(body_text: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body_text).ok()?;
    json.get("error")?
        .get("message")?
        .as_str()
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Classify a non-success HTTP response.
///
/// - 401 → `Unauthorized`
/// - 429 → `RateLimited`
/// - 500/502/503 → `Server`
/// - anything else → `Unknown`, carrying the server message when the body
///   has one, otherwise a status-derived message
pub fn classify_http_error(status: u16, body_text: &str) -> DriverError {
    match status {
        401 => DriverError::Unauthorized {
            message: UNAUTHORIZED_MESSAGE.to_string(),
            status,
        },
        429 => DriverError::RateLimited {
            message: RATE_LIMITED_MESSAGE.to_string(),
            status,
        },
        500 | 502 | 503 => DriverError::Server {
            message: SERVER_ERROR_MESSAGE.to_string(),
            status,
        },
        _ => DriverError::Unknown {
            message: extract_error_message(body_text)
                .unwrap_or_else(|| format!("Request failed: {status}")),
            status: Some(status),
        },
    }
}

/// Read the body of a failed response and classify it.
pub async fn classify_error_response(resp: reqwest::Response) -> DriverError {
    let status = resp.status().as_u16();
    let text = resp.text().await.unwrap_or_default();
    let error = classify_http_error(status, &text);
    tracing::warn!(status, kind = %error.kind(), "gemini request failed");
    error
}
