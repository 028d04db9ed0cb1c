//! Core error types.

use thiserror::Error;

/// Result alias used throughout the driver.
pub type Result<T> = std::result::Result<T, DriverError>;

/// Coarse error kind, one per taxonomy member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Unauthorized,
    RateLimited,
    Server,
    Network,
    Unknown,
}

impl ErrorKind {
    /// Stable wire name of the kind (e.g. `RATE_LIMITED`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::RateLimited => "RATE_LIMITED",
            Self::Server => "SERVER_ERROR",
            Self::Network => "NETWORK_ERROR",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified driver error.
///
/// Created once at the failure point and propagated unchanged. The `Display`
/// output is the display-ready message owned by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// Caller input was rejected before any request was sent.
    #[error("{message}")]
    Validation { message: String },

    /// The service rejected the API key (HTTP 401).
    #[error("{message}")]
    Unauthorized { message: String, status: u16 },

    /// The service is throttling this key (HTTP 429).
    #[error("{message}")]
    RateLimited { message: String, status: u16 },

    /// The service failed on its side (HTTP 500/502/503).
    #[error("{message}")]
    Server { message: String, status: u16 },

    /// The request never completed at the transport level.
    #[error("{message}")]
    Network { message: String },

    /// Any other non-success status, or a malformed response.
    #[error("{message}")]
    Unknown {
        message: String,
        status: Option<u16>,
    },
}

impl DriverError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
            status: None,
        }
    }

    /// Taxonomy kind of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::Server { .. } => ErrorKind::Server,
            Self::Network { .. } => ErrorKind::Network,
            Self::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// HTTP status code, when the error came from an HTTP response.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. }
            | Self::RateLimited { status, .. }
            | Self::Server { status, .. } => Some(*status),
            Self::Unknown { status, .. } => *status,
            Self::Validation { .. } | Self::Network { .. } => None,
        }
    }

    /// Display-ready message.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Unauthorized { message, .. }
            | Self::RateLimited { message, .. }
            | Self::Server { message, .. }
            | Self::Network { message }
            | Self::Unknown { message, .. } => message,
        }
    }

    /// Whether retrying the same call may succeed. The driver never retries
    /// on its own; this is a hint for callers.
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. } | Self::Server { .. } | Self::Network { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_match_wire_taxonomy() {
        let names: Vec<_> = [
            ErrorKind::Validation,
            ErrorKind::Unauthorized,
            ErrorKind::RateLimited,
            ErrorKind::Server,
            ErrorKind::Network,
            ErrorKind::Unknown,
        ]
        .iter()
        .map(|k| k.as_str())
        .collect();
        assert_eq!(
            names,
            vec![
                "VALIDATION_ERROR",
                "UNAUTHORIZED",
                "RATE_LIMITED",
                "SERVER_ERROR",
                "NETWORK_ERROR",
                "UNKNOWN_ERROR"
            ]
        );
    }

    #[test]
    fn status_and_message_accessors() {
        let e = DriverError::Server {
            message: "down".into(),
            status: 503,
        };
        assert_eq!(e.status_code(), Some(503));
        assert_eq!(e.message(), "down");
        assert_eq!(e.to_string(), "down");
        assert!(e.is_retryable());

        let e = DriverError::validation("bad url");
        assert_eq!(e.status_code(), None);
        assert_eq!(e.kind(), ErrorKind::Validation);
        assert!(!e.is_retryable());
    }
}
