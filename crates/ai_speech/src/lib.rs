//! AI Speech - Text-to-Speech abstractions
//!
//! Provides the `TextToSpeech` trait and a provider backed by the Google
//! Translate speech endpoint.
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//! - `chunking` splits long text into request-sized pieces
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{GoogleTranslateTts, SpeechConfig, TextToSpeech};
//!
//! let provider = GoogleTranslateTts::new(SpeechConfig::default())?;
//! let audio = provider.synthesize("Hello, world!", "en").await?;
//! assert_eq!(audio.format(), AudioFormat::Mp3);
//! ```

pub mod chunking;
pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use chunking::split_text;
pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::TextToSpeech;
pub use providers::google_translate::GoogleTranslateTts;
pub use types::{AudioData, AudioFormat};
