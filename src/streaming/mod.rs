//! Streaming response handling
//!
//! - [`FrameDecoder`] turns body chunks into frames
//! - [`extract_content`] / [`extract_text`] read text out of a frame
//! - [`ChatStream`] / [`ChatStreamHandle`] carry the resulting events

mod decoder;
mod extract;
pub(crate) mod pipeline;
mod types;

pub use decoder::FrameDecoder;
pub use extract::{ExtractedContent, extract_content, extract_text};
pub use types::{ChatStream, ChatStreamHandle, StreamEvent};
