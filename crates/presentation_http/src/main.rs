//! EduVision HTTP Server
//!
//! Main entry point for the reader web application.

use std::{sync::Arc, time::Duration};

use application::ReaderService;
use infrastructure::{
    AppConfig, DocumentExtractionAdapter, SpeechAdapter, TemplateEngine, WhatlangDetector,
    init_logging,
};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before logging so the format can be applied
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(&config.server)?;

    if let Err(e) = &loaded {
        warn!("Failed to load config, using defaults: {}", e);
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!("📖 EduVision v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        log_format = %config.server.log_format,
        speech_url = %config.speech.base_url,
        ocr_language = %config.extraction.ocr_language,
        "Configuration loaded"
    );

    // Initialize adapters
    let extractor = DocumentExtractionAdapter::new(config.extraction.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize extraction: {e}"))?;
    let speech = SpeechAdapter::new(config.speech.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize speech: {e}"))?;
    let detector = WhatlangDetector::new(&config.language);

    let reader = ReaderService::new(Arc::new(extractor), Arc::new(detector), Arc::new(speech));
    let templates = TemplateEngine::with_config(config.templates.clone())?;

    let addr = config.server.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    let state = AppState::new(reader, templates, config);
    let readiness = state.reader.readiness().await;
    if !readiness.ocr {
        warn!("Tesseract is not available; image uploads will fail");
    }
    if !readiness.speech {
        warn!("Speech service is not reachable; conversion will fail until it is");
    }

    let app = routes::create_router(state);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
}
