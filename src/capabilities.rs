//! Per-model capability lookup
//!
//! The request builder never compares model ids itself. It asks a
//! [`CapabilityResolver`] which reasoning dialect and optional features a
//! model accepts, and branches on the returned descriptor.

use std::collections::HashMap;

/// Family of reasoning controls a model accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReasoningDialect {
    /// No reasoning controls; `thinkingConfig` is never sent.
    #[default]
    None,
    /// Qualitative `thinkingLevel`.
    Level,
    /// Quantitative `thinkingBudget` with the model's default budget
    /// (-1 dynamic, 0 disabled).
    Budget { default_budget: i32 },
}

/// What a model accepts beyond plain text generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelCapabilities {
    pub reasoning: ReasoningDialect,
    /// Model can return reasoning-trace parts (`includeThoughts`)
    pub supports_thought_summary: bool,
    pub supports_media_resolution: bool,
    pub supports_image_generation: bool,
}

impl ModelCapabilities {
    pub const fn new(reasoning: ReasoningDialect) -> Self {
        Self {
            reasoning,
            supports_thought_summary: false,
            supports_media_resolution: false,
            supports_image_generation: false,
        }
    }
    pub const fn with_thought_summary(mut self) -> Self {
        self.supports_thought_summary = true;
        self
    }
    pub const fn with_media_resolution(mut self) -> Self {
        self.supports_media_resolution = true;
        self
    }
    pub const fn with_image_generation(mut self) -> Self {
        self.supports_image_generation = true;
        self
    }
}

/// Source of [`ModelCapabilities`] for a model id.
pub trait CapabilityResolver: Send + Sync {
    fn resolve(&self, model_id: &str) -> ModelCapabilities;
}

/// Capability table for the public Gemini model families.
///
/// Matching is by id prefix so dated preview ids
/// (`gemini-2.5-flash-preview-09-2025`) resolve like their family.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCapabilities;

// Order matters: more specific prefixes first.
const BUILTIN_TABLE: &[(&str, ModelCapabilities)] = &[
    (
        "gemini-3-pro-image",
        ModelCapabilities::new(ReasoningDialect::Level)
            .with_media_resolution()
            .with_image_generation(),
    ),
    (
        "gemini-3",
        ModelCapabilities::new(ReasoningDialect::Level)
            .with_thought_summary()
            .with_media_resolution(),
    ),
    (
        "gemini-2.5-flash-image",
        ModelCapabilities::new(ReasoningDialect::None).with_image_generation(),
    ),
    (
        "gemini-2.5-pro",
        ModelCapabilities::new(ReasoningDialect::Budget { default_budget: -1 })
            .with_thought_summary(),
    ),
    (
        "gemini-2.5-flash-lite",
        ModelCapabilities::new(ReasoningDialect::Budget { default_budget: 0 })
            .with_thought_summary(),
    ),
    (
        "gemini-2.5-flash",
        ModelCapabilities::new(ReasoningDialect::Budget { default_budget: -1 })
            .with_thought_summary(),
    ),
];

impl CapabilityResolver for BuiltinCapabilities {
    fn resolve(&self, model_id: &str) -> ModelCapabilities {
        let id = model_id.strip_prefix("models/").unwrap_or(model_id);
        BUILTIN_TABLE
            .iter()
            .find(|(prefix, _)| id.starts_with(prefix))
            .map(|(_, caps)| *caps)
            .unwrap_or_default()
    }
}

/// Exact-id capability table supplied by the caller (e.g. for custom or
/// redirected model ids). Unknown ids fall through to `fallback`.
#[derive(Default)]
pub struct StaticCapabilities {
    entries: HashMap<String, ModelCapabilities>,
    fallback: Option<Box<dyn CapabilityResolver>>,
}

impl StaticCapabilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model_id: impl Into<String>, caps: ModelCapabilities) -> Self {
        self.entries.insert(model_id.into(), caps);
        self
    }

    pub fn with_fallback(mut self, fallback: impl CapabilityResolver + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }
}

impl std::fmt::Debug for StaticCapabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCapabilities")
            .field("entries", &self.entries)
            .field("fallback_present", &self.fallback.is_some())
            .finish()
    }
}

impl CapabilityResolver for StaticCapabilities {
    fn resolve(&self, model_id: &str) -> ModelCapabilities {
        if let Some(caps) = self.entries.get(model_id) {
            return *caps;
        }
        self.fallback
            .as_ref()
            .map(|f| f.resolve(model_id))
            .unwrap_or_default()
    }
}
