//! Endpoint validation.

use crate::error::DriverError;
use reqwest::Url;

/// Outcome of [`validate_api_endpoint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointValidation {
    pub valid: bool,
    pub error: Option<String>,
}

impl EndpointValidation {
    fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn invalid(reason: &str) -> Self {
        Self {
            valid: false,
            error: Some(reason.to_string()),
        }
    }

    /// Turn a rejection into a `Validation` error.
    pub fn into_result(self) -> Result<(), DriverError> {
        if self.valid {
            return Ok(());
        }
        Err(DriverError::validation(
            self.error
                .unwrap_or_else(|| "Invalid API endpoint".to_string()),
        ))
    }
}

/// Check that `url` is a well-formed http(s) URL with a host. Pure.
pub fn validate_api_endpoint(url: &str) -> EndpointValidation {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return EndpointValidation::invalid("URL must not be empty");
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return EndpointValidation::invalid("URL must start with http:// or https://");
    }

    let parsed = match Url::parse(trimmed) {
        Ok(u) => u,
        Err(_) => return EndpointValidation::invalid("URL format is invalid"),
    };
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return EndpointValidation::invalid("URL scheme must be http or https");
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return EndpointValidation::invalid("URL must contain a valid hostname");
    }
    EndpointValidation::ok()
}
