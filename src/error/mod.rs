//! Error Handling Module
//!
//! Every failure the driver can surface is a [`DriverError`]. The taxonomy is
//! closed so callers can match exhaustively:
//! - Core error type and its presentation kind (`DriverError`, `ErrorKind`)
//! - HTTP status classification and error-body parsing
//! - Conversions from transport and JSON errors
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_driver::error::{classify_http_error, ErrorKind};
//!
//! let error = classify_http_error(429, "");
//! assert_eq!(error.kind(), ErrorKind::RateLimited);
//! assert!(error.is_retryable());
//! ```

mod classify;
mod conversions;
pub mod types;

pub use classify::*;
pub use types::*;
