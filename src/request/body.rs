use crate::capabilities::CapabilityResolver;
use crate::types::{
    ChatRequest, Content, GenerateContentRequest, ImageConfig, ImageGenerationConfig, Part, Role,
};

use super::media::apply_media_resolution;
use super::thinking::build_thinking_config;

/// Assemble the JSON body for one call. Pure; identical inputs give
/// identical bodies.
///
/// `model_id` selects capability-driven reasoning config. Without it, a
/// caller-supplied thinking level is still honoured through the legacy
/// level-only path.
pub fn build_request_body(
    request: &ChatRequest,
    model_id: Option<&str>,
    resolver: &dyn CapabilityResolver,
) -> GenerateContentRequest {
    let advanced = request.advanced.as_ref();

    let contents =
        apply_media_resolution(&request.contents, advanced.and_then(|a| a.media_resolution))
            .into_owned();

    let generation_config = request
        .generation_config
        .as_ref()
        .and_then(|g| g.explicit());

    let safety_settings =
        (!request.safety_settings.is_empty()).then(|| request.safety_settings.clone());

    let system_instruction = request
        .system_instruction
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(|s| Content::new(Role::User, vec![Part::text(s)]));

    let thinking_config = match model_id {
        Some(model_id) => build_thinking_config(&resolver.resolve(model_id), advanced),
        None => legacy_thinking(request),
    };

    let image_config = advanced
        .and_then(|a| a.image_config.as_ref())
        .map(build_image_config);

    GenerateContentRequest {
        contents,
        generation_config,
        safety_settings,
        system_instruction,
        thinking_config,
        image_config,
    }
}

#[allow(deprecated)]
fn legacy_thinking(request: &ChatRequest) -> Option<crate::types::ThinkingConfig> {
    request
        .advanced
        .as_ref()
        .and_then(|a| a.thinking_level)
        .map(super::thinking::legacy_thinking_config)
}

/// Structural copy of the caller's image settings.
pub fn build_image_config(config: &ImageGenerationConfig) -> ImageConfig {
    ImageConfig {
        aspect_ratio: config.aspect_ratio.clone(),
        image_size: config.image_size.clone(),
    }
}
