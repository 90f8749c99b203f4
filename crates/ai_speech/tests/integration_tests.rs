//! Integration tests for ai_speech crate
//!
//! Tests the full synthesis flow against a mocked speech endpoint.

use std::time::Duration;

use ai_speech::{AudioFormat, GoogleTranslateTts, SpeechConfig, SpeechError, TextToSpeech};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create a test configuration pointing to mock server
fn test_config(base_url: &str) -> SpeechConfig {
    SpeechConfig {
        base_url: base_url.to_string(),
        timeout_ms: 5000,
        max_chunk_chars: 100,
        ..Default::default()
    }
}

/// Minimal MP3 frame tagged with a marker byte
fn mock_mp3_segment(marker: u8) -> Vec<u8> {
    vec![
        0xFF, 0xFB, 0x90, 0x00, // MP3 frame header
        marker, 0x00, 0x00, 0x00,
    ]
}

fn mp3_response(marker: u8) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(mock_mp3_segment(marker), "audio/mpeg")
}

#[tokio::test]
async fn hello_world_produces_mp3() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_tts"))
        .and(query_param("q", "Hello world"))
        .and(query_param("tl", "en"))
        .and(query_param("total", "1"))
        .and(query_param("idx", "0"))
        .respond_with(mp3_response(1))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = GoogleTranslateTts::new(test_config(&mock_server.uri())).unwrap();
    let audio = provider.synthesize("Hello world", "en").await.unwrap();

    assert!(!audio.is_empty());
    assert_eq!(audio.format(), AudioFormat::Mp3);
    assert_eq!(audio.mime_type(), "audio/mpeg");
    assert_eq!(audio.segments(), 1);
}

#[tokio::test]
async fn long_text_is_requested_in_chunks_and_concatenated_in_order() {
    let mock_server = MockServer::start().await;

    for idx in 0..3u8 {
        Mock::given(method("GET"))
            .and(path("/translate_tts"))
            .and(query_param("idx", idx.to_string()))
            .and(query_param("total", "3"))
            .respond_with(mp3_response(idx))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let config = SpeechConfig {
        max_chunk_chars: 30,
        ..test_config(&mock_server.uri())
    };
    let provider = GoogleTranslateTts::new(config).unwrap();

    let text = "The water cycle has stages. Water evaporates first. Then clouds form above.";
    let audio = provider.synthesize(text, "en").await.unwrap();

    let mut expected = Vec::new();
    for idx in 0..3u8 {
        expected.extend(mock_mp3_segment(idx));
    }
    assert_eq!(audio.data(), expected.as_slice());
    assert_eq!(audio.segments(), 3);
}

#[tokio::test]
async fn server_error_is_synthesis_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_tts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend down"))
        .mount(&mock_server)
        .await;

    let provider = GoogleTranslateTts::new(test_config(&mock_server.uri())).unwrap();
    let err = provider.synthesize("Hello", "en").await.unwrap_err();

    assert!(matches!(err, SpeechError::SynthesisFailed(ref msg) if msg.contains("500")));
}

#[tokio::test]
async fn empty_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_tts"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(Vec::<u8>::new(), "audio/mpeg"))
        .mount(&mock_server)
        .await;

    let provider = GoogleTranslateTts::new(test_config(&mock_server.uri())).unwrap();
    let err = provider.synthesize("Hello", "en").await.unwrap_err();

    assert!(matches!(err, SpeechError::InvalidResponse(_)));
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_tts"))
        .respond_with(mp3_response(0).set_delay(Duration::from_millis(1500)))
        .mount(&mock_server)
        .await;

    let config = SpeechConfig {
        timeout_ms: 200,
        ..test_config(&mock_server.uri())
    };
    let provider = GoogleTranslateTts::new(config).unwrap();
    let err = provider.synthesize("Hello", "en").await.unwrap_err();

    assert!(matches!(err, SpeechError::Timeout(200)));
}

#[tokio::test]
async fn unreachable_endpoint_is_reported() {
    let provider = GoogleTranslateTts::new(test_config("http://127.0.0.1:9")).unwrap();

    let err = provider.synthesize("Hello", "en").await.unwrap_err();
    assert!(matches!(
        err,
        SpeechError::ConnectionFailed(_) | SpeechError::RequestFailed(_)
    ));
    assert!(!provider.is_available().await);
}

#[tokio::test]
async fn reachable_endpoint_is_available() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let provider = GoogleTranslateTts::new(test_config(&mock_server.uri())).unwrap();
    assert!(provider.is_available().await);
}
