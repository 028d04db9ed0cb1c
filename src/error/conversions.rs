//! Type Conversions for DriverError
//!
//! From implementations for the transport and JSON errors the driver touches.

use super::classify::NETWORK_FAILURE_MESSAGE;
use super::types::DriverError;

impl From<reqwest::Error> for DriverError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key.
        let err = err.without_url();
        if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
            tracing::debug!(error = %err, "transport failure");
            return Self::network(NETWORK_FAILURE_MESSAGE);
        }
        Self::Unknown {
            message: err.to_string(),
            status: err.status().map(|s| s.as_u16()),
        }
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(err: serde_json::Error) -> Self {
        Self::unknown(err.to_string())
    }
}
