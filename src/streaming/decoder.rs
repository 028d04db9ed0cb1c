//! Incremental `data:` frame decoder
//!
//! Turns an arbitrarily chunked SSE body into [`StreamFrame`]s. Two pieces of
//! state survive between chunks: the trailing bytes of an incomplete UTF-8
//! sequence, and the text after the last newline. Both are flushed exactly
//! once by [`FrameDecoder::finish`].

use crate::types::StreamFrame;

const DATA_PREFIX: &str = "data: ";
const DONE_MARKER: &str = "[DONE]";

/// Buffering state machine for one streamed response.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buffer: String,
    pending_bytes: Vec<u8>,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk and return the frames completed by it.
    pub fn ingest(&mut self, chunk: &[u8]) -> Vec<StreamFrame> {
        self.decode_utf8(chunk);

        let Some(last_newline) = self.buffer.rfind('\n') else {
            return Vec::new();
        };
        let rest = self.buffer.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.buffer, rest);

        complete.lines().filter_map(parse_data_line).collect()
    }

    /// Flush whatever is left once the body has ended.
    ///
    /// Consumes the decoder, so the remainder cannot be processed twice.
    pub fn finish(mut self) -> Vec<StreamFrame> {
        if !self.pending_bytes.is_empty() {
            let tail = std::mem::take(&mut self.pending_bytes);
            self.buffer.push_str(&String::from_utf8_lossy(&tail));
        }
        if self.buffer.is_empty() {
            return Vec::new();
        }
        self.buffer.lines().filter_map(parse_data_line).collect()
    }

    /// Append `chunk` to the text buffer, holding back an incomplete trailing
    /// UTF-8 sequence and replacing invalid ones with U+FFFD.
    fn decode_utf8(&mut self, chunk: &[u8]) {
        let mut bytes = std::mem::take(&mut self.pending_bytes);
        bytes.extend_from_slice(chunk);

        let mut input = bytes.as_slice();
        loop {
            match std::str::from_utf8(input) {
                Ok(valid) => {
                    self.buffer.push_str(valid);
                    return;
                }
                Err(err) => {
                    let (valid, after) = input.split_at(err.valid_up_to());
                    self.buffer
                        .push_str(std::str::from_utf8(valid).unwrap_or_default());
                    match err.error_len() {
                        Some(len) => {
                            self.buffer.push(char::REPLACEMENT_CHARACTER);
                            input = &after[len..];
                        }
                        None => {
                            self.pending_bytes = after.to_vec();
                            return;
                        }
                    }
                }
            }
        }
    }
}

/// Decode one complete line. Non-`data:` lines, empty payloads and the
/// `[DONE]` marker yield nothing; malformed JSON is logged and dropped.
pub(crate) fn parse_data_line(line: &str) -> Option<StreamFrame> {
    let payload = line.strip_prefix(DATA_PREFIX)?.trim();
    if payload.is_empty() || payload == DONE_MARKER {
        return None;
    }
    match serde_json::from_str(payload) {
        Ok(frame) => Some(frame),
        Err(e) => {
            tracing::debug!(error = %e, len = payload.len(), "dropping malformed stream frame");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Part;
    use proptest::prelude::*;
    use tracing_test::traced_test;

    fn frame_texts(frames: &[StreamFrame]) -> Vec<String> {
        frames
            .iter()
            .flat_map(|f| f.first_candidate_parts().iter())
            .filter_map(Part::as_text)
            .map(str::to_string)
            .collect()
    }

    fn decode_chunks<'a>(chunks: impl IntoIterator<Item = &'a [u8]>) -> Vec<StreamFrame> {
        let mut decoder = FrameDecoder::new();
        let mut frames = Vec::new();
        for chunk in chunks {
            frames.extend(decoder.ingest(chunk));
        }
        frames.extend(decoder.finish());
        frames
    }

    const HI_FRAME: &str = "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"Hi\"}]}}]}\n\n";

    #[test]
    fn byte_by_byte_still_yields_one_frame() {
        let frames = decode_chunks(HI_FRAME.as_bytes().chunks(1));
        assert_eq!(frame_texts(&frames), vec!["Hi"]);
    }

    #[test]
    fn line_is_held_until_newline_arrives() {
        let mut decoder = FrameDecoder::new();
        let (head, tail) = HI_FRAME.split_at(20);
        assert!(decoder.ingest(head.as_bytes()).is_empty());
        assert_eq!(frame_texts(&decoder.ingest(tail.as_bytes())), vec!["Hi"]);
        assert!(decoder.finish().is_empty());
    }

    #[test]
    fn final_frame_without_newline_is_flushed_once() {
        let body = HI_FRAME.trim_end();
        let mut decoder = FrameDecoder::new();
        assert!(decoder.ingest(body.as_bytes()).is_empty());
        assert_eq!(frame_texts(&decoder.finish()), vec!["Hi"]);
    }

    #[test]
    fn done_marker_comments_and_blank_lines_yield_nothing() {
        let body = ": keep-alive\nevent: message\n\ndata: \ndata: [DONE]\n";
        assert!(decode_chunks([body.as_bytes()]).is_empty());
    }

    #[test]
    fn crlf_lines_are_accepted() {
        let body = HI_FRAME.replace('\n', "\r\n");
        assert_eq!(frame_texts(&decode_chunks([body.as_bytes()])), vec!["Hi"]);
    }

    #[test]
    #[traced_test]
    fn malformed_line_is_dropped_without_ending_stream() {
        let body = format!("data: {{not json\n\n{HI_FRAME}");
        assert_eq!(frame_texts(&decode_chunks([body.as_bytes()])), vec!["Hi"]);
        assert!(logs_contain("dropping malformed stream frame"));
    }

    #[test]
    fn multibyte_text_split_inside_a_character() {
        let body = "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"你好\"}]}}]}\n";
        let bytes = body.as_bytes();
        let split = body.find('你').unwrap() + 1;
        let frames = decode_chunks([&bytes[..split], &bytes[split..]]);
        assert_eq!(frame_texts(&frames), vec!["你好"]);
    }

    #[test]
    fn invalid_utf8_becomes_replacement_character() {
        let mut body = b"data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"a".to_vec();
        body.push(0xFF);
        body.extend_from_slice(b"b\"}]}}]}\n");
        let frames = decode_chunks([body.as_slice()]);
        assert_eq!(frame_texts(&frames), vec!["a\u{FFFD}b"]);
    }

    fn frame_line(text: &str) -> String {
        let frame = serde_json::json!({"candidates": [{"content": {"parts": [{"text": text}]}}]});
        format!("data: {frame}\n\n")
    }

    proptest! {
        // Property: splitting the body at arbitrary offsets never changes the decoded frames.
        #[test]
        fn prop_chunk_boundaries_do_not_matter(
            texts in prop::collection::vec("[a-zA-Z0-9 ,.!?é你]{0,12}", 1..6),
            cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
            with_done in any::<bool>(),
        ) {
            let mut body: String = texts.iter().map(|t| frame_line(t)).collect();
            if with_done {
                body.push_str("data: [DONE]\n\n");
            }
            let bytes = body.as_bytes();

            let mut offsets: Vec<usize> = cuts.iter().map(|i| i.index(bytes.len() + 1)).collect();
            offsets.sort_unstable();
            offsets.dedup();

            let mut chunks = Vec::new();
            let mut start = 0;
            for offset in offsets {
                chunks.push(&bytes[start..offset]);
                start = offset;
            }
            chunks.push(&bytes[start..]);

            let whole = decode_chunks([bytes]);
            let split = decode_chunks(chunks);
            prop_assert_eq!(&whole, &split);
            prop_assert_eq!(frame_texts(&split), texts);
        }
    }
}
