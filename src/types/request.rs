use super::{Content, GenerationConfig, ModelAdvancedConfig, SafetySetting};

/// Everything a caller supplies for one completion call, apart from the
/// connection settings in [`ApiConfig`](super::ApiConfig).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatRequest {
    /// Conversation history, oldest first
    pub contents: Vec<Content>,
    pub generation_config: Option<GenerationConfig>,
    pub safety_settings: Vec<SafetySetting>,
    pub system_instruction: Option<String>,
    pub advanced: Option<ModelAdvancedConfig>,
}

impl ChatRequest {
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            contents,
            ..Default::default()
        }
    }

    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }

    pub fn with_safety_settings(mut self, settings: Vec<SafetySetting>) -> Self {
        self.safety_settings = settings;
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_advanced(mut self, advanced: ModelAdvancedConfig) -> Self {
        self.advanced = Some(advanced);
        self
    }
}
