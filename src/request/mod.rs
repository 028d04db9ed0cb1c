//! Request construction: URL, body, and the model-specific pieces of the body.

mod body;
mod media;
mod thinking;
mod url;

pub use body::{build_image_config, build_request_body};
pub use media::apply_media_resolution;
#[allow(deprecated)]
pub use thinking::legacy_thinking_config;
pub use thinking::{DEFAULT_THINKING_LEVEL, ReasoningMode, build_thinking_config};
pub use url::build_request_url;
pub(crate) use url::redact_key;
