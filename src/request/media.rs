use std::borrow::Cow;

use crate::types::{Content, MediaResolution, Part};

/// Tag every inline media part with `resolution`.
///
/// Without a resolution the input is returned as-is (borrowed). With one, a
/// new set of turns is returned; text and other parts are copied untouched
/// and part order is preserved. The input is never mutated.
pub fn apply_media_resolution(
    contents: &[Content],
    resolution: Option<MediaResolution>,
) -> Cow<'_, [Content]> {
    let Some(resolution) = resolution else {
        return Cow::Borrowed(contents);
    };

    let tagged = contents
        .iter()
        .map(|turn| Content {
            role: turn.role,
            parts: turn
                .parts
                .iter()
                .map(|part| match part {
                    Part::InlineData { inline_data } => {
                        let mut inline_data = inline_data.clone();
                        inline_data.media_resolution = Some(resolution);
                        Part::InlineData { inline_data }
                    }
                    other => other.clone(),
                })
                .collect(),
        })
        .collect();
    Cow::Owned(tagged)
}
