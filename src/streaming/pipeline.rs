//! Byte stream → frames → events

use futures::Stream;
use futures_util::StreamExt;

use super::decoder::FrameDecoder;
use super::extract::{extract_content, extract_text};
use super::types::{ChatStream, StreamEvent};
use crate::error::DriverError;
use crate::types::StreamFrame;

/// How frame content is surfaced as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EventMode {
    /// Answer text as `Text`, reasoning as `Thought`.
    Separated,
    /// Every text part, reasoning included, as `Text`.
    Combined,
}

/// Decode a chunked body into frames, flushing the decoder once at the end.
///
/// A transport error ends the stream after being yielded.
pub(crate) fn decode_frames<S, B, E>(
    body: S,
) -> impl Stream<Item = Result<StreamFrame, DriverError>> + Send
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Into<DriverError> + Send + 'static,
{
    async_stream::stream! {
        let mut decoder = FrameDecoder::new();
        let mut body = Box::pin(body);
        while let Some(chunk) = body.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    yield Err(e.into());
                    return;
                }
            };
            for frame in decoder.ingest(chunk.as_ref()) {
                yield Ok(frame);
            }
        }
        for frame in decoder.finish() {
            yield Ok(frame);
        }
    }
}

/// Events carried by one frame, in the order they should be surfaced.
pub(crate) fn frame_events(frame: &StreamFrame, mode: EventMode) -> Vec<StreamEvent> {
    match mode {
        EventMode::Separated => {
            let content = extract_content(frame);
            let mut events = Vec::with_capacity(2);
            if !content.text.is_empty() {
                events.push(StreamEvent::Text(content.text));
            }
            if !content.thought.is_empty() {
                events.push(StreamEvent::Thought(content.thought));
            }
            events
        }
        EventMode::Combined => {
            let text = extract_text(frame);
            if text.is_empty() {
                Vec::new()
            } else {
                vec![StreamEvent::Text(text)]
            }
        }
    }
}

/// Turn a chunked body into a [`ChatStream`] of non-empty increments.
pub(crate) fn event_stream<S, B, E>(body: S, mode: EventMode) -> ChatStream
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Into<DriverError> + Send + 'static,
{
    let frames = decode_frames(body);
    let events = frames.flat_map(move |frame| {
        let items: Vec<Result<StreamEvent, DriverError>> = match frame {
            Ok(frame) => frame_events(&frame, mode).into_iter().map(Ok).collect(),
            Err(e) => vec![Err(e)],
        };
        futures_util::stream::iter(items)
    });
    Box::pin(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn body(
        chunks: &[&'static str],
    ) -> impl Stream<Item = Result<Bytes, DriverError>> + Send + use<> {
        futures_util::stream::iter(
            chunks
                .iter()
                .map(|c| Ok(Bytes::from_static(c.as_bytes())))
                .collect::<Vec<_>>(),
        )
    }

    const MIXED: &str = "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"hmm\",\"thought\":true},{\"text\":\"Hi\"}]}}]}\n\n";

    #[tokio::test]
    async fn separated_mode_emits_text_then_thought() {
        let events: Vec<_> = event_stream(body(&[MIXED]), EventMode::Separated)
            .collect()
            .await;
        let events: Vec<_> = events.into_iter().map(Result::unwrap).collect();
        assert_eq!(
            events,
            vec![
                StreamEvent::Text("Hi".into()),
                StreamEvent::Thought("hmm".into())
            ]
        );
    }

    #[tokio::test]
    async fn combined_mode_includes_reasoning_text() {
        let events: Vec<_> = event_stream(body(&[MIXED]), EventMode::Combined)
            .collect()
            .await;
        let events: Vec<_> = events.into_iter().map(Result::unwrap).collect();
        assert_eq!(events, vec![StreamEvent::Text("hmmHi".into())]);
    }

    #[tokio::test]
    async fn transport_error_ends_stream() {
        let chunks: Vec<Result<Bytes, DriverError>> = vec![
            Ok(Bytes::from_static(MIXED.as_bytes())),
            Err(DriverError::network("reset")),
            Ok(Bytes::from_static(MIXED.as_bytes())),
        ];
        let items: Vec<_> = event_stream(futures_util::stream::iter(chunks), EventMode::Combined)
            .collect()
            .await;
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert_eq!(items[1].as_ref().unwrap_err().message(), "reset");
    }

    #[tokio::test]
    async fn trailing_frame_without_newline_is_flushed() {
        let events: Vec<_> = event_stream(body(&[MIXED.trim_end()]), EventMode::Combined)
            .collect()
            .await;
        assert_eq!(events.len(), 1);
    }
}
