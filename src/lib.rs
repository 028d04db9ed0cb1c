//! # gemini-driver - Gemini `generateContent` client
//!
//! A small async driver for the Gemini REST API: request construction driven
//! by a per-model capability table, an incremental SSE consumer that
//! separates answer text from reasoning text, a non-streaming path, a
//! connectivity probe, and a closed error taxonomy.
//!
#![deny(unsafe_code)]

//! ## Quick Start
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use gemini_driver::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let driver = GeminiDriver::new()?;
//!     let config = ApiConfig::from_env()?;
//!     let request = ChatRequest::new(vec![Content::user("Why is the sky blue?")])
//!         .with_advanced(ModelAdvancedConfig::new().with_include_thoughts(true));
//!
//!     let mut handle = driver.stream_with_thoughts(&config, &request).await?;
//!     while let Some(event) = handle.stream.next().await {
//!         match event? {
//!             StreamEvent::Text(text) => print!("{text}"),
//!             StreamEvent::Thought(_) => {}
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events under the `gemini_driver` target and
//! never installs a subscriber; see [`telemetry`] for a ready-made one. API
//! keys are redacted from every log line.

pub mod builder;
pub mod capabilities;
pub mod client;
pub mod error;
pub mod request;
pub mod streaming;
pub mod telemetry;
pub mod types;
pub mod utils;
pub mod validation;

pub use builder::GeminiDriverBuilder;
pub use capabilities::{
    BuiltinCapabilities, CapabilityResolver, ModelCapabilities, ReasoningDialect,
    StaticCapabilities,
};
pub use client::{ConnectionStatus, GeminiDriver, ThoughtReply};
pub use error::{DriverError, ErrorKind, Result};
pub use streaming::{ChatStream, ChatStreamHandle, FrameDecoder, StreamEvent};
pub use utils::CancelHandle;
pub use validation::{EndpointValidation, validate_api_endpoint};

pub mod prelude {
    pub use crate::capabilities::{BuiltinCapabilities, CapabilityResolver};
    pub use crate::client::{ConnectionStatus, GeminiDriver, ThoughtReply};
    pub use crate::error::{DriverError, ErrorKind};
    pub use crate::streaming::{ChatStreamHandle, StreamEvent};
    pub use crate::types::{
        ApiConfig, ChatRequest, Content, GenerationConfig, HarmBlockThreshold, HarmCategory,
        ImageGenerationConfig, MediaResolution, ModelAdvancedConfig, Part, Role, SafetySetting,
        ThinkingLevel,
    };
}
