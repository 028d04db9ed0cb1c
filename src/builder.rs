use std::sync::Arc;
use std::time::Duration;

use crate::capabilities::{BuiltinCapabilities, CapabilityResolver};
use crate::client::GeminiDriver;
use crate::error::{DriverError, Result};

/// Builder for [`GeminiDriver`].
///
/// Connection settings (endpoint, key, model) are per call and live in
/// [`ApiConfig`](crate::types::ApiConfig); this only configures transport
/// and capability lookup.
///
/// # Example
/// ```rust,no_run
/// use std::time::Duration;
/// use gemini_driver::GeminiDriver;
///
/// let driver = GeminiDriver::builder()
///     .timeout(Duration::from_secs(120))
///     .user_agent("my-app/1.0")
///     .build()?;
/// # Ok::<(), gemini_driver::DriverError>(())
/// ```
#[derive(Default)]
pub struct GeminiDriverBuilder {
    http_client: Option<reqwest::Client>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    capabilities: Option<Arc<dyn CapabilityResolver>>,
}

impl GeminiDriverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured HTTP client. Takes precedence over `timeout` and
    /// `user_agent`, which only apply to a client built here.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Overall request timeout. Unset by default: a stalled stream waits
    /// until the server closes it.
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Capability table consulted when building request bodies.
    pub fn capabilities(mut self, resolver: impl CapabilityResolver + 'static) -> Self {
        self.capabilities = Some(Arc::new(resolver));
        self
    }

    pub fn build(self) -> Result<GeminiDriver> {
        let http = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = &self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                builder.build().map_err(|e| {
                    DriverError::validation(format!("Failed to build HTTP client: {e}"))
                })?
            }
        };
        let capabilities = self
            .capabilities
            .unwrap_or_else(|| Arc::new(BuiltinCapabilities));
        Ok(GeminiDriver::from_parts(http, capabilities))
    }
}
