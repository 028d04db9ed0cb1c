//! Gemini transport driver
//!
//! Every entry point runs the same pre-flight (endpoint check, key check,
//! URL and body construction) and funnels failures through the error
//! classifier. Nothing is retried.

use std::sync::Arc;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;

use crate::builder::GeminiDriverBuilder;
use crate::capabilities::CapabilityResolver;
use crate::error::{DriverError, Result, classify_error_response};
use crate::request::{build_request_body, build_request_url, redact_key};
use crate::streaming::pipeline::{EventMode, event_stream};
use crate::streaming::{ChatStreamHandle, StreamEvent, extract_text};
use crate::types::{
    ApiConfig, ChatRequest, Content, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig,
};
use crate::utils::cancel::make_cancellable_stream;
use crate::validation::validate_api_endpoint;

const PROBE_PROMPT: &str = "Hi";
const PROBE_MAX_OUTPUT_TOKENS: i32 = 10;

/// Final result of a trace-separating call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThoughtReply {
    /// Concatenated answer text
    pub text: String,
    /// Concatenated reasoning text, `None` when the model sent none
    pub thought_summary: Option<String>,
}

/// Outcome of [`GeminiDriver::test_connection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub success: bool,
    pub error: Option<DriverError>,
}

impl ConnectionStatus {
    fn from_result<T>(result: Result<T>) -> Self {
        match result {
            Ok(_) => Self {
                success: true,
                error: None,
            },
            Err(error) => Self {
                success: false,
                error: Some(error),
            },
        }
    }
}

/// Client for the Gemini `generateContent` family of endpoints.
///
/// Cheap to clone; clones share the HTTP connection pool and capability
/// table. No state is kept between calls.
#[derive(Clone)]
pub struct GeminiDriver {
    http: reqwest::Client,
    capabilities: Arc<dyn CapabilityResolver>,
}

impl std::fmt::Debug for GeminiDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiDriver").finish_non_exhaustive()
    }
}

impl GeminiDriver {
    /// Driver with a default HTTP client and the built-in capability table.
    pub fn new() -> Result<Self> {
        GeminiDriverBuilder::new().build()
    }

    pub fn builder() -> GeminiDriverBuilder {
        GeminiDriverBuilder::new()
    }

    pub(crate) fn from_parts(
        http: reqwest::Client,
        capabilities: Arc<dyn CapabilityResolver>,
    ) -> Self {
        Self { http, capabilities }
    }

    pub fn capabilities(&self) -> &dyn CapabilityResolver {
        self.capabilities.as_ref()
    }

    /// Stream a reply with answer and reasoning text as separate events.
    ///
    /// Reasoning config is resolved from `config.model`. HTTP failures are
    /// returned here, before any event; transport failures mid-body arrive as
    /// a `Network` item that ends the stream.
    pub async fn stream_with_thoughts(
        &self,
        config: &ApiConfig,
        request: &ChatRequest,
    ) -> Result<ChatStreamHandle> {
        self.open_stream(config, request, Some(&config.model), EventMode::Separated)
            .await
    }

    /// Stream a reply as plain text increments.
    ///
    /// Every text part is surfaced as [`StreamEvent::Text`], reasoning parts
    /// included. The body is built without a model id.
    pub async fn stream_text(
        &self,
        config: &ApiConfig,
        request: &ChatRequest,
    ) -> Result<ChatStreamHandle> {
        self.open_stream(config, request, None, EventMode::Combined)
            .await
    }

    /// Stream a reply, calling `on_chunk` with each answer increment.
    ///
    /// The callback receives only the new text, never the running total, and
    /// is not called for reasoning text.
    pub async fn send_message_with_thoughts<F>(
        &self,
        config: &ApiConfig,
        request: &ChatRequest,
        mut on_chunk: F,
    ) -> Result<ThoughtReply>
    where
        F: FnMut(&str),
    {
        let mut handle = self.stream_with_thoughts(config, request).await?;
        let mut reply = ThoughtReply::default();
        let mut thought = String::new();
        while let Some(event) = handle.stream.next().await {
            match event? {
                StreamEvent::Text(text) => {
                    on_chunk(&text);
                    reply.text.push_str(&text);
                }
                StreamEvent::Thought(t) => thought.push_str(&t),
            }
        }
        if !thought.is_empty() {
            reply.thought_summary = Some(thought);
        }
        Ok(reply)
    }

    /// Stream a reply as plain text, calling `on_chunk` with each increment.
    pub async fn send_message<F>(
        &self,
        config: &ApiConfig,
        request: &ChatRequest,
        mut on_chunk: F,
    ) -> Result<String>
    where
        F: FnMut(&str),
    {
        let mut handle = self.stream_text(config, request).await?;
        let mut full = String::new();
        while let Some(event) = handle.stream.next().await {
            if let StreamEvent::Text(text) = event? {
                on_chunk(&text);
                full.push_str(&text);
            }
        }
        Ok(full)
    }

    /// Non-streaming call. Returns all text of the first candidate
    /// concatenated, or `""` when there are no candidates.
    pub async fn generate(&self, config: &ApiConfig, request: &ChatRequest) -> Result<String> {
        let (url, body) = self.prepare(config, request, false, None)?;
        let resp = self.post(&url, &body).await?;
        let bytes = resp.bytes().await?;
        let response: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        Ok(extract_text(&response))
    }

    /// Send a minimal request to check endpoint, key and model.
    ///
    /// Never fails: any error is reported in the returned status.
    pub async fn test_connection(&self, config: &ApiConfig) -> ConnectionStatus {
        let request = ChatRequest::new(vec![Content::user(PROBE_PROMPT)])
            .with_generation_config(
                GenerationConfig::new().with_max_output_tokens(PROBE_MAX_OUTPUT_TOKENS),
            );
        let status = ConnectionStatus::from_result(self.generate(config, &request).await);
        match &status.error {
            None => tracing::debug!(model = %config.model, "gemini connection check succeeded"),
            Some(e) => {
                tracing::debug!(model = %config.model, kind = %e.kind(), "gemini connection check failed")
            }
        }
        status
    }

    async fn open_stream(
        &self,
        config: &ApiConfig,
        request: &ChatRequest,
        model_id: Option<&str>,
        mode: EventMode,
    ) -> Result<ChatStreamHandle> {
        let (url, body) = self.prepare(config, request, true, model_id)?;
        let resp = self.post(&url, &body).await?;
        let (stream, cancel) = make_cancellable_stream(event_stream(resp.bytes_stream(), mode));
        Ok(ChatStreamHandle { stream, cancel })
    }

    /// Shared pre-flight: reject bad settings before any I/O.
    fn prepare(
        &self,
        config: &ApiConfig,
        request: &ChatRequest,
        stream: bool,
        model_id: Option<&str>,
    ) -> Result<(String, GenerateContentRequest)> {
        validate_api_endpoint(&config.endpoint).into_result()?;
        if !config.has_api_key() {
            return Err(DriverError::validation("API key must not be empty"));
        }
        let url = build_request_url(config, stream);
        let body = build_request_body(request, model_id, self.capabilities.as_ref());
        Ok((url, body))
    }

    async fn post(&self, url: &str, body: &GenerateContentRequest) -> Result<reqwest::Response> {
        let payload = serde_json::to_vec(body)?;
        tracing::debug!(url = %redact_key(url), bytes = payload.len(), "sending gemini request");

        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(classify_error_response(resp).await);
        }
        Ok(resp)
    }
}
