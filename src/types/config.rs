use crate::error::{DriverError, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Connection settings for one call: where to send it, with which key, for
/// which model. Caller-owned; the driver only borrows it.
#[derive(Clone)]
pub struct ApiConfig {
    /// Base URL of the API (e.g. `https://generativelanguage.googleapis.com/v1beta`)
    pub endpoint: String,
    /// API key sent as the `key` query parameter (securely stored)
    pub api_key: SecretString,
    /// Model id (e.g. `gemini-2.5-flash`)
    pub model: String,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("endpoint", &self.endpoint)
            .field(
                "api_key_present",
                &(!self.api_key.expose_secret().is_empty()),
            )
            .field("model", &self.model)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_BASE_URL.to_string(),
            api_key: SecretString::from(String::new()),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: SecretString::from(api_key.into()),
            model: model.into(),
        }
    }

    /// Build a config from `GEMINI_API_KEY`, `GEMINI_BASE_URL` and `GEMINI_MODEL`.
    /// Only the key is required.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                DriverError::validation(
                    "API key not specified (missing GEMINI_API_KEY or explicit ApiConfig::new())",
                )
            })?;
        let endpoint =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(endpoint, api_key, model))
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = SecretString::from(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub(crate) fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().trim().is_empty()
    }
}

/// Qualitative reasoning depth for level-dialect models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThinkingLevel {
    Low,
    High,
}

/// Resolution hint attached to inline media parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaResolution {
    #[serde(rename = "media_resolution_low")]
    Low,
    #[serde(rename = "media_resolution_medium")]
    Medium,
    #[serde(rename = "media_resolution_high")]
    High,
    #[serde(rename = "media_resolution_ultra_high")]
    UltraHigh,
}

/// Image output settings for image-capable models. Copied verbatim into the
/// request, no validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageGenerationConfig {
    /// e.g. `"16:9"`
    pub aspect_ratio: String,
    /// e.g. `"2K"`
    pub image_size: String,
}

impl ImageGenerationConfig {
    pub fn new(aspect_ratio: impl Into<String>, image_size: impl Into<String>) -> Self {
        Self {
            aspect_ratio: aspect_ratio.into(),
            image_size: image_size.into(),
        }
    }
}

/// Per-call model options beyond the generation parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelAdvancedConfig {
    /// Reasoning level override (level dialect, and the legacy fallback)
    pub thinking_level: Option<ThinkingLevel>,
    /// Reasoning budget override (budget dialect); -1 dynamic, 0 disabled
    pub thinking_budget: Option<i32>,
    /// Tag applied to every inline media part
    pub media_resolution: Option<MediaResolution>,
    /// Image output settings
    pub image_config: Option<ImageGenerationConfig>,
    /// Ask for reasoning trace parts (honoured only when the model supports it)
    pub include_thoughts: bool,
}

impl ModelAdvancedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thinking_level(mut self, level: ThinkingLevel) -> Self {
        self.thinking_level = Some(level);
        self
    }

    pub fn with_thinking_budget(mut self, budget: i32) -> Self {
        self.thinking_budget = Some(budget);
        self
    }

    pub fn with_media_resolution(mut self, resolution: MediaResolution) -> Self {
        self.media_resolution = Some(resolution);
        self
    }

    pub fn with_image_config(mut self, config: ImageGenerationConfig) -> Self {
        self.image_config = Some(config);
        self
    }

    pub fn with_include_thoughts(mut self, include: bool) -> Self {
        self.include_thoughts = include;
        self
    }
}
