use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    document::DocumentController, health, translate::TranslateController, tts::TtsController,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::request_id::request_id_middleware;

/// Assemble the application router. Kept separate from server startup so
/// tests can drive the same routes in-process.
pub fn build_router(
    document_controller: Arc<DocumentController>,
    translate_controller: Arc<TranslateController>,
    tts_controller: Arc<TtsController>,
    max_upload_bytes: usize,
) -> Router {
    let document_routes = Router::new()
        .route("/api/upload", post(DocumentController::upload))
        .route(
            "/api/document/:document_id",
            get(DocumentController::get_document),
        )
        .with_state(document_controller);

    let translate_routes = Router::new()
        .route("/api/translate", post(TranslateController::translate))
        .route(
            "/api/translate/document",
            post(TranslateController::translate_document),
        )
        .route(
            "/api/detect-language",
            post(TranslateController::detect_language),
        )
        .route(
            "/api/supported-languages",
            get(TranslateController::supported_languages),
        )
        .with_state(translate_controller);

    let tts_routes = Router::new()
        .route("/api/tts/generate", post(TtsController::generate))
        .route(
            "/api/tts/generate-document",
            post(TtsController::generate_document),
        )
        .route(
            "/api/tts/generate-custom",
            post(TtsController::generate_custom),
        )
        .route("/api/tts/audio/*filename", get(TtsController::get_audio))
        .route(
            "/api/tts/segments/:document_id",
            get(TtsController::get_segments),
        )
        .route(
            "/api/tts/supported-languages",
            get(TtsController::supported_languages),
        )
        .with_state(tts_controller);

    Router::new()
        .route("/api/health", get(health::health))
        .merge(document_routes)
        .merge(translate_routes)
        .merge(tts_routes)
        .layer(middleware::from_fn(request_id_middleware))
        // Single-client dev deployment; every origin is allowed
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    document_controller: Arc<DocumentController>,
    translate_controller: Arc<TranslateController>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(
        document_controller,
        translate_controller,
        tts_controller,
        config.max_upload_bytes,
    );

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
