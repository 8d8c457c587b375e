//! Stream normalizer alignment tests
//!
//! Drives the line-framing producer with hand-built byte streams to verify
//! chunk-boundary reassembly, sentinel handling, and resilience to malformed
//! upstream events.

use contentgen::error::LlmError;
use contentgen::providers::openrouter::OpenRouterEventConverter;
use contentgen::utils::streaming::sse_stream_from_bytes;
use futures_util::StreamExt;

const HELLO_WORLD_BODY: &str = concat!(
    "data: {\"choices\":[{\"delta\":{\"content\":\"Hello\"}}]}\n",
    "data: {\"choices\":[{\"delta\":{\"content\":\" world\"}}]}\n",
    "data: [DONE]\n",
);

fn stream_of(chunks: Vec<Vec<u8>>) -> impl futures::Stream<Item = Result<Vec<u8>, LlmError>> {
    futures::stream::iter(chunks.into_iter().map(Ok))
}

/// Collect the emitted chunk texts, panicking on any stream error
async fn collect_texts(chunks: Vec<Vec<u8>>) -> Vec<String> {
    let mut stream = sse_stream_from_bytes(stream_of(chunks), OpenRouterEventConverter);
    let mut texts = Vec::new();
    while let Some(item) = stream.next().await {
        let response = item.expect("stream should not error");
        texts.push(response.text().expect("chunk should carry text"));
    }
    texts
}

#[tokio::test]
async fn emits_one_chunk_per_delta_in_order() {
    let texts = collect_texts(vec![HELLO_WORLD_BODY.as_bytes().to_vec()]).await;
    assert_eq!(texts, ["Hello", " world"]);
}

#[tokio::test]
async fn reassembles_identically_at_every_split_offset() {
    let body = concat!(
        "data: {\"choices\":[{\"delta\":{\"content\":\"H\u{e9}llo\"}}]}\n",
        "data: {\"choices\":[{\"delta\":{\"content\":\" w\u{f6}rld\"}}]}\n",
        "data: [DONE]\n",
    )
    .as_bytes();
    let expected = collect_texts(vec![body.to_vec()]).await;
    assert_eq!(expected, ["H\u{e9}llo", " w\u{f6}rld"]);

    // Splitting anywhere, including mid-line and mid-multibyte-character,
    // must not change the emitted sequence.
    for split in 1..body.len() {
        let texts = collect_texts(vec![body[..split].to_vec(), body[split..].to_vec()]).await;
        assert_eq!(texts, expected, "split at byte {split}");
    }
}

#[tokio::test]
async fn one_byte_per_chunk_reassembles() {
    let chunks: Vec<Vec<u8>> = HELLO_WORLD_BODY.bytes().map(|b| vec![b]).collect();
    let texts = collect_texts(chunks).await;
    assert_eq!(texts, ["Hello", " world"]);
}

#[tokio::test]
async fn malformed_event_does_not_interrupt_surrounding_events() {
    let body = concat!(
        "data: {\"choices\":[{\"delta\":{\"content\":\"before\"}}]}\n",
        "data: {not json\n",
        "data: {\"choices\":[{\"delta\":{\"content\":\"after\"}}]}\n",
        "data: [DONE]\n",
    );
    let texts = collect_texts(vec![body.as_bytes().to_vec()]).await;
    assert_eq!(texts, ["before", "after"]);
}

#[tokio::test]
async fn non_data_lines_are_ignored() {
    let body = concat!(
        ": keep-alive comment\n",
        "event: message\n",
        "\n",
        "data: {\"choices\":[{\"delta\":{\"content\":\"ok\"}}]}\n",
    );
    let texts = collect_texts(vec![body.as_bytes().to_vec()]).await;
    assert_eq!(texts, ["ok"]);
}

#[tokio::test]
async fn done_sentinel_does_not_end_the_stream() {
    // Only exhaustion of the byte stream ends the sequence; events after the
    // sentinel are still delivered.
    let body = concat!(
        "data: {\"choices\":[{\"delta\":{\"content\":\"first\"}}]}\n",
        "data: [DONE]\n",
        "data: {\"choices\":[{\"delta\":{\"content\":\"second\"}}]}\n",
    );
    let texts = collect_texts(vec![body.as_bytes().to_vec()]).await;
    assert_eq!(texts, ["first", "second"]);
}

#[tokio::test]
async fn role_only_and_empty_deltas_produce_no_output() {
    let body = concat!(
        "data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n",
        "data: {\"choices\":[{\"delta\":{\"content\":\"\"}}]}\n",
        "data: {\"choices\":[{\"delta\":{\"content\":\"text\"}}]}\n",
        "data: [DONE]\n",
    );
    let texts = collect_texts(vec![body.as_bytes().to_vec()]).await;
    assert_eq!(texts, ["text"]);
}

#[tokio::test]
async fn crlf_framed_lines_are_accepted() {
    let body = "data: {\"choices\":[{\"delta\":{\"content\":\"ok\"}}]}\r\ndata: [DONE]\r\n";
    let texts = collect_texts(vec![body.as_bytes().to_vec()]).await;
    assert_eq!(texts, ["ok"]);
}

#[tokio::test]
async fn read_error_terminates_the_stream_after_prior_chunks() {
    let chunks = vec![
        Ok(b"data: {\"choices\":[{\"delta\":{\"content\":\"partial\"}}]}\n".to_vec()),
        Err(LlmError::StreamError("connection reset".to_string())),
    ];
    let mut stream =
        sse_stream_from_bytes(futures::stream::iter(chunks), OpenRouterEventConverter);

    let first = stream.next().await.unwrap().unwrap();
    assert_eq!(first.text().as_deref(), Some("partial"));

    let second = stream.next().await.unwrap();
    assert!(matches!(second, Err(LlmError::StreamError(_))));

    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn consumer_may_stop_draining_early() {
    let mut stream = sse_stream_from_bytes(
        stream_of(vec![HELLO_WORLD_BODY.as_bytes().to_vec()]),
        OpenRouterEventConverter,
    );
    let first = stream.next().await.unwrap().unwrap();
    assert_eq!(first.text().as_deref(), Some("Hello"));
    // Dropping with items still pending must be clean
    drop(stream);
}
