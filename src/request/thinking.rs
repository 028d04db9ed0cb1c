//! Reasoning configuration
//!
//! The model's dialect is resolved once into a [`ReasoningMode`]; everything
//! downstream matches on that instead of comparing model ids.

use crate::capabilities::{ModelCapabilities, ReasoningDialect};
use crate::types::{ModelAdvancedConfig, ThinkingConfig, ThinkingLevel};

/// Default level for level-dialect models when the caller has no preference.
pub const DEFAULT_THINKING_LEVEL: ThinkingLevel = ThinkingLevel::High;

/// Reasoning control chosen for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasoningMode {
    None,
    Level(ThinkingLevel),
    Budget(i32),
}

impl ReasoningMode {
    /// Pick the control for `dialect`, preferring the caller's overrides.
    pub fn resolve(dialect: ReasoningDialect, advanced: Option<&ModelAdvancedConfig>) -> Self {
        match dialect {
            ReasoningDialect::None => Self::None,
            ReasoningDialect::Level => Self::Level(
                advanced
                    .and_then(|a| a.thinking_level)
                    .unwrap_or(DEFAULT_THINKING_LEVEL),
            ),
            ReasoningDialect::Budget { default_budget } => Self::Budget(
                advanced
                    .and_then(|a| a.thinking_budget)
                    .unwrap_or(default_budget),
            ),
        }
    }
}

/// Build `thinkingConfig` for a model from its capability descriptor.
///
/// Returns `None` for models without a reasoning dialect, whatever the
/// caller asked for. `includeThoughts` is only set when the model supports
/// trace output and the caller requested it.
pub fn build_thinking_config(
    caps: &ModelCapabilities,
    advanced: Option<&ModelAdvancedConfig>,
) -> Option<ThinkingConfig> {
    let mut config = match ReasoningMode::resolve(caps.reasoning, advanced) {
        ReasoningMode::None => return None,
        ReasoningMode::Level(level) => ThinkingConfig {
            thinking_level: Some(level),
            ..Default::default()
        },
        ReasoningMode::Budget(budget) => ThinkingConfig {
            thinking_budget: Some(budget),
            ..Default::default()
        },
    };

    if caps.supports_thought_summary && advanced.is_some_and(|a| a.include_thoughts) {
        config.include_thoughts = Some(true);
    }
    Some(config)
}

/// Level-only `thinkingConfig`, used when a request carries no model id.
///
/// Kept for call paths that predate capability resolution; it applies the
/// level blindly, without knowing whether the model accepts it.
#[deprecated(note = "resolve the model's capabilities and use `build_thinking_config`")]
pub fn legacy_thinking_config(level: ThinkingLevel) -> ThinkingConfig {
    ThinkingConfig {
        thinking_level: Some(level),
        ..Default::default()
    }
}
