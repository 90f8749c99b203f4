//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - The reader workflow wired to the real adapters
//! - Speech service failures surfacing as notices
//! - Readiness probing against a mocked speech endpoint

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use ai_speech::SpeechConfig;
use application::{NoticeLevel, Phase, ReaderService, Session};
use document_text::ExtractionConfig;
use domain::{Language, UploadedFile};
use infrastructure::{
    DocumentExtractionAdapter, LanguageConfig, SpeechAdapter, WhatlangDetector,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MP3_FRAME: &[u8] = &[0xFF, 0xFB, 0x90, 0x00, 0x11, 0x22];

fn speech_config(base_url: &str) -> SpeechConfig {
    SpeechConfig {
        base_url: base_url.to_string(),
        timeout_ms: 5000,
        ..Default::default()
    }
}

fn reader(speech_url: &str) -> ReaderService {
    let extractor = DocumentExtractionAdapter::new(ExtractionConfig::default()).unwrap();
    let detector = WhatlangDetector::new(&LanguageConfig::default());
    let speech = SpeechAdapter::new(speech_config(speech_url)).unwrap();
    ReaderService::new(Arc::new(extractor), Arc::new(detector), Arc::new(speech))
}

fn text_file(name: &str, content: &str) -> UploadedFile {
    UploadedFile::new(name, "text/plain", content.as_bytes().to_vec()).unwrap()
}

// ============================================================================
// Reader Workflow Tests
// ============================================================================

mod reader_workflow_tests {
    use super::*;

    #[tokio::test]
    async fn english_text_is_read_aloud() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_tts"))
            .and(query_param("tl", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(MP3_FRAME, "audio/mpeg"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let reader = reader(&mock_server.uri());
        let mut session = Session::new();

        reader
            .upload(
                &mut session,
                text_file(
                    "lesson.txt",
                    "The children walked to the library every morning to read new books.",
                ),
            )
            .await
            .unwrap();

        let view = session.view();
        assert_eq!(view.phase(), Phase::AwaitingLanguage);
        assert_eq!(view.text().word_count(), 12);
        assert_eq!(view.guess().unwrap().language(), Some(Language::English));

        reader.convert(&mut session).await.unwrap();

        assert_eq!(session.view().phase(), Phase::AudioReady);
        let audio = session.current_audio().unwrap();
        assert_eq!(audio.data(), MP3_FRAME);
        assert_eq!(audio.language(), Language::English);
    }

    #[tokio::test]
    async fn detected_spanish_is_spoken_in_spanish() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_tts"))
            .and(query_param("tl", "es"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(MP3_FRAME, "audio/mpeg"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let reader = reader(&mock_server.uri());
        let mut session = Session::new();

        reader
            .upload(
                &mut session,
                text_file(
                    "leccion.txt",
                    "Los estudiantes leen libros en la biblioteca todos los días porque quieren aprender.",
                ),
            )
            .await
            .unwrap();
        assert_eq!(
            session.view().guess().unwrap().language(),
            Some(Language::Spanish)
        );

        reader.convert(&mut session).await.unwrap();
        assert_eq!(session.view().phase(), Phase::AudioReady);
    }

    #[tokio::test]
    async fn short_text_falls_back_to_english() {
        let reader = reader("http://127.0.0.1:9");
        let mut session = Session::new();

        reader
            .upload(&mut session, text_file("hello.txt", "Hello world"))
            .await
            .unwrap();

        let guess = session.view().guess().unwrap();
        assert!(guess.is_fallback());
        assert_eq!(guess.display_name(), "English");
    }

    #[tokio::test]
    async fn empty_text_file_reports_no_text() {
        let reader = reader("http://127.0.0.1:9");
        let mut session = Session::new();

        reader
            .upload(&mut session, text_file("blank.txt", "  \n\t "))
            .await
            .unwrap();

        let view = session.view();
        assert_eq!(view.phase(), Phase::NoFile);
        assert!(view.guess().is_none());
        assert_eq!(view.notices()[0].level, NoticeLevel::Error);
    }
}

// ============================================================================
// Speech Failure Tests
// ============================================================================

mod speech_failure_tests {
    use super::*;

    #[tokio::test]
    async fn server_error_becomes_failure_notice() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_tts"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let reader = reader(&mock_server.uri());
        let mut session = Session::new();
        reader
            .upload(&mut session, text_file("hello.txt", "Hello world"))
            .await
            .unwrap();

        reader.convert(&mut session).await.unwrap();

        let view = session.view();
        assert_eq!(view.phase(), Phase::AwaitingLanguage);
        assert!(view.audio().is_none());
        let last = view.notices().last().unwrap();
        assert_eq!(last.level, NoticeLevel::Error);
        assert!(last.message.starts_with("Audio generation failed:"));
    }

    #[tokio::test]
    async fn rate_limit_becomes_failure_notice() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_tts"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let reader = reader(&mock_server.uri());
        let mut session = Session::new();
        reader
            .upload(&mut session, text_file("hello.txt", "Hello world"))
            .await
            .unwrap();

        reader.convert(&mut session).await.unwrap();

        let last = session.view().notices().last().unwrap();
        assert!(last.message.contains("rate limit"));
    }
}

// ============================================================================
// Readiness Tests
// ============================================================================

mod readiness_tests {
    use super::*;

    #[tokio::test]
    async fn reachable_speech_endpoint_is_ready() {
        let mock_server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let report = reader(&mock_server.uri()).readiness().await;
        assert!(report.speech);
    }

    #[tokio::test]
    async fn failing_speech_endpoint_is_not_ready() {
        let mock_server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let report = reader(&mock_server.uri()).readiness().await;
        assert!(!report.speech);
        assert!(!report.all_ready());
    }
}
