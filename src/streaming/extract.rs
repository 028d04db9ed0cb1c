use crate::types::{Part, StreamFrame};

/// Visible answer text and reasoning text carried by one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedContent {
    pub text: String,
    pub thought: String,
}

impl ExtractedContent {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.thought.is_empty()
    }
}

/// Split the first candidate's text parts into answer and reasoning.
///
/// Parts flagged `thought: true` go to `thought`, every other text part to
/// `text`. Non-text parts are skipped.
pub fn extract_content(frame: &StreamFrame) -> ExtractedContent {
    let mut out = ExtractedContent::default();
    for part in frame.first_candidate_parts() {
        let Some(text) = part.as_text() else { continue };
        if part.is_thought() {
            out.thought.push_str(text);
        } else {
            out.text.push_str(text);
        }
    }
    out
}

/// Concatenate every text part of the first candidate, reasoning included.
pub fn extract_text(frame: &StreamFrame) -> String {
    frame
        .first_candidate_parts()
        .iter()
        .filter_map(Part::as_text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn frame(value: serde_json::Value) -> StreamFrame {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn separates_thoughts_from_answer() {
        let f = frame(json!({"candidates": [{"content": {"parts": [
            {"text": "Let me think. ", "thought": true},
            {"text": "The answer"},
            {"inlineData": {"mimeType": "image/png", "data": "AAAA"}},
            {"text": " is 4.", "thought": false},
            {"text": "Done.", "thought": true}
        ]}}]}));
        assert_eq!(
            extract_content(&f),
            ExtractedContent {
                text: "The answer is 4.".into(),
                thought: "Let me think. Done.".into(),
            }
        );
        assert_eq!(extract_text(&f), "Let me think. The answer is 4.Done.");
    }

    #[test]
    fn only_first_candidate_is_read() {
        let f = frame(json!({"candidates": [
            {"content": {"parts": [{"text": "first"}]}},
            {"content": {"parts": [{"text": "second"}]}}
        ]}));
        assert_eq!(extract_content(&f).text, "first");
    }

    #[test]
    fn empty_shapes_extract_nothing() {
        for value in [
            json!({}),
            json!({"candidates": []}),
            json!({"candidates": [{}]}),
            json!({"candidates": [{"content": {}}]}),
            json!({"candidates": [{"finishReason": "STOP", "content": {"parts": []}}]}),
        ] {
            let f = frame(value);
            assert!(extract_content(&f).is_empty());
            assert_eq!(extract_text(&f), "");
        }
    }
}
