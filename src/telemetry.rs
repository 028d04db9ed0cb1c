//! Tracing subscriber setup
//!
//! The driver only emits `tracing` events; it never installs a subscriber.
//! Applications that have no subscriber of their own can use this module.
//!
//! ## Example
//!
//! ```rust,ignore
//! use gemini_driver::telemetry::{init_subscriber, OutputFormat, SubscriberConfig};
//!
//! let config = SubscriberConfig::builder()
//!     .log_level(tracing::Level::DEBUG)
//!     .output_format(OutputFormat::Json)
//!     .build();
//! init_subscriber(config)?;
//! ```

use crate::error::{DriverError, Result};

/// Output format for tracing logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format
    Json,
    /// Compact JSON format
    JsonCompact,
}

impl std::str::FromStr for OutputFormat {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "json-compact" => Ok(Self::JsonCompact),
            _ => Err(DriverError::validation(format!(
                "Invalid log format: {s}. Valid options: text, json, json-compact"
            ))),
        }
    }
}

/// Configuration for the tracing subscriber
#[derive(Debug, Clone)]
pub struct SubscriberConfig {
    pub log_level: tracing::Level,
    pub output_format: OutputFormat,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            log_level: tracing::Level::INFO,
            output_format: OutputFormat::Text,
        }
    }
}

impl SubscriberConfig {
    pub fn builder() -> SubscriberConfigBuilder {
        SubscriberConfigBuilder::default()
    }

    /// Debug-level text output
    pub fn debug() -> Self {
        Self {
            log_level: tracing::Level::DEBUG,
            output_format: OutputFormat::Text,
        }
    }

    /// `EnvFilter` directive scoping output to this crate.
    fn filter_directive(&self) -> String {
        let level = match self.log_level {
            tracing::Level::TRACE => "trace",
            tracing::Level::DEBUG => "debug",
            tracing::Level::INFO => "info",
            tracing::Level::WARN => "warn",
            tracing::Level::ERROR => "error",
        };
        format!("gemini_driver={level}")
    }
}

/// Builder for [`SubscriberConfig`]
#[derive(Debug, Default)]
pub struct SubscriberConfigBuilder {
    log_level: Option<tracing::Level>,
    output_format: Option<OutputFormat>,
}

impl SubscriberConfigBuilder {
    pub fn log_level(mut self, level: tracing::Level) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set the log level from a string (`trace` … `error`).
    pub fn log_level_str(mut self, level: &str) -> Result<Self> {
        let parsed = level.parse::<tracing::Level>().map_err(|_| {
            DriverError::validation(format!(
                "Invalid log level: {level}. Valid options: trace, debug, info, warn, error"
            ))
        })?;
        self.log_level = Some(parsed);
        Ok(self)
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn build(self) -> SubscriberConfig {
        SubscriberConfig {
            log_level: self.log_level.unwrap_or(tracing::Level::INFO),
            output_format: self.output_format.unwrap_or_default(),
        }
    }
}

/// Install a global `fmt` subscriber.
///
/// If a global subscriber is already set this is a no-op.
pub fn init_subscriber(config: SubscriberConfig) -> Result<()> {
    let filter = config.filter_directive();

    let init_result = match config.output_format {
        OutputFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .json()
            .try_init(),
        OutputFormat::JsonCompact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .flatten_event(true)
            .try_init(),
        OutputFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
    };

    match init_result {
        Ok(()) => Ok(()),
        Err(e) if e.to_string().contains("already been set") => Ok(()),
        Err(e) => Err(DriverError::validation(format!(
            "Failed to initialize tracing: {e}"
        ))),
    }
}

/// Initialize from environment variables:
/// - `GEMINI_DRIVER_LOG_LEVEL`: trace, debug, info, warn, error
/// - `GEMINI_DRIVER_LOG_FORMAT`: text, json, json-compact
pub fn init_from_env() -> Result<()> {
    let mut builder = SubscriberConfig::builder();
    if let Ok(level) = std::env::var("GEMINI_DRIVER_LOG_LEVEL") {
        builder = builder.log_level_str(&level)?;
    }
    if let Ok(format) = std::env::var("GEMINI_DRIVER_LOG_FORMAT") {
        builder = builder.output_format(format.parse()?);
    }
    init_subscriber(builder.build())
}
