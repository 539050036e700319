//! Server-sent-events parsing for bot-query responses
//!
//! The bot-query protocol streams `text` events carrying partial response
//! chunks, terminated by a distinguished `done` event. An `error` event, or
//! the transport closing before `done`, fails the stream.

use crate::error::PoeError;
use crate::poe::types::{ErrorEventPayload, TextEventPayload};
use crate::poe::FragmentStream;
use crate::protocol::TextFragment;
use bytes::Bytes;
use eventsource_stream::Eventsource;
use futures::{stream, Stream, StreamExt};

/// Parse an SSE byte stream into an ordered fragment stream.
///
/// After a terminal error item the stream yields `None`; after `done` it
/// ends immediately. Events that carry no response text (`meta`,
/// `suggested_reply`, ...) are skipped.
pub fn parse_stream(
    byte_stream: impl Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
) -> FragmentStream {
    let events = Box::pin(byte_stream.eventsource());

    Box::pin(stream::unfold(
        (events, false),
        |(mut events, finished)| async move {
            if finished {
                return None;
            }
            loop {
                match events.next().await {
                    Some(Ok(event)) => match event.event.as_str() {
                        "text" => match serde_json::from_str::<TextEventPayload>(&event.data) {
                            Ok(payload) => {
                                return Some((
                                    Ok(TextFragment::new(payload.text)),
                                    (events, false),
                                ))
                            }
                            Err(e) => {
                                tracing::warn!("Failed to parse text event payload: {}", e);
                                continue;
                            }
                        },
                        "done" => return None,
                        "error" => {
                            let message = serde_json::from_str::<ErrorEventPayload>(&event.data)
                                .ok()
                                .and_then(|p| p.text)
                                .unwrap_or_else(|| "bot reported an error".to_string());
                            return Some((
                                Err(PoeError::StreamTransport(message)),
                                (events, true),
                            ));
                        }
                        other => {
                            tracing::debug!("Skipping bot event: {}", other);
                            continue;
                        }
                    },
                    Some(Err(e)) => {
                        return Some((
                            Err(PoeError::StreamTransport(format!("Stream error: {}", e))),
                            (events, true),
                        ));
                    }
                    // Transport closed without a done event
                    None => return Some((Err(PoeError::PrematureEndOfStream), (events, true))),
                }
            }
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn byte_stream(
        body: &'static str,
    ) -> impl Stream<Item = Result<Bytes, reqwest::Error>> + Send {
        stream::iter(vec![Ok(Bytes::from_static(body.as_bytes()))])
    }

    #[tokio::test]
    async fn parses_text_events_until_done() {
        let body = "event: text\ndata: {\"text\": \"He\"}\n\n\
                    event: text\ndata: {\"text\": \"llo\"}\n\n\
                    event: done\ndata: {}\n\n";
        let fragments: Vec<_> = parse_stream(byte_stream(body)).collect().await;

        let texts: Vec<String> = fragments
            .into_iter()
            .map(|f| f.expect("fragment").text)
            .collect();
        assert_eq!(texts, vec!["He", "llo"]);
    }

    #[tokio::test]
    async fn skips_events_without_response_text() {
        let body = "event: meta\ndata: {\"content_type\": \"text/markdown\"}\n\n\
                    event: text\ndata: {\"text\": \"hi\"}\n\n\
                    event: done\ndata: {}\n\n";
        let fragments: Vec<_> = parse_stream(byte_stream(body)).collect().await;

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].as_ref().expect("fragment").text, "hi");
    }

    #[tokio::test]
    async fn error_event_terminates_the_stream() {
        let body = "event: text\ndata: {\"text\": \"par\"}\n\n\
                    event: error\ndata: {\"text\": \"bot unavailable\", \"allow_retry\": false}\n\n";
        let mut items: Vec<_> = parse_stream(byte_stream(body)).collect().await;

        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        match items.pop().expect("terminal item") {
            Err(PoeError::StreamTransport(message)) => assert_eq!(message, "bot unavailable"),
            other => panic!("expected StreamTransport, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_done_is_a_premature_end() {
        let body = "event: text\ndata: {\"text\": \"half\"}\n\n";
        let items: Vec<_> = parse_stream(byte_stream(body)).collect().await;

        assert_eq!(items.len(), 2);
        assert!(matches!(items[1], Err(PoeError::PrematureEndOfStream)));
    }
}
