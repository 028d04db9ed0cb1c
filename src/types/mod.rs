//! Gemini API types (split by concern)

mod config;
mod content;
mod generation;
mod request;

pub use config::{
    ApiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, ImageGenerationConfig, MediaResolution,
    ModelAdvancedConfig, ThinkingLevel,
};
pub use content::{Content, InlineData, Part, Role};
pub use generation::{
    Candidate, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    HarmBlockThreshold, HarmCategory, ImageConfig, SafetySetting, StreamFrame, ThinkingConfig,
};
pub use request::ChatRequest;
