use lectura_backend::infrastructure::config::{Config, LogFormat};
use lectura_backend::infrastructure::http::start_http_server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Lectura Backend on {}:{}",
        config.host,
        config.port
    );

    // Create artifact directories
    config.ensure_directories().await?;
    tracing::info!(
        upload_dir = %config.upload_dir.display(),
        translation_dir = %config.translation_dir.display(),
        audio_dir = %config.audio_dir.display(),
        "Artifact directories ready"
    );

    if config.deepl_api_key.is_none() {
        tracing::warn!("DEEPL_API_KEY not set; the deepl translation service will be unavailable");
    }

    let config = Arc::new(config);
    let http_client = reqwest::Client::new();

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate artifact stores
    tracing::info!("Instantiating artifact stores...");
    let document_store = Arc::new(
        lectura_backend::infrastructure::stores::FsDocumentStore::new(
            config.translation_dir.clone(),
        ),
    );
    let translation_store = Arc::new(
        lectura_backend::infrastructure::stores::FsTranslationStore::new(
            config.translation_dir.clone(),
        ),
    );
    let manifest_store = Arc::new(
        lectura_backend::infrastructure::stores::FsSegmentManifestStore::new(
            config.audio_dir.clone(),
        ),
    );

    // 2. Instantiate provider factories and the PDF extractor
    tracing::info!("Instantiating providers...");
    let translation_factory = Arc::new(
        lectura_backend::infrastructure::providers::DefaultTranslationProviderFactory::new(
            http_client.clone(),
            config.deepl_api_key.clone(),
        ),
    );
    let tts_factory = Arc::new(
        lectura_backend::infrastructure::providers::DefaultTtsProviderFactory::new(
            http_client.clone(),
        ),
    );
    let pdf_extractor =
        Arc::new(lectura_backend::infrastructure::extraction::NativePdfExtractor::new());

    // 3. Instantiate services (inject stores and providers)
    tracing::info!("Instantiating services...");
    let document_service = Arc::new(lectura_backend::domain::document::DocumentService::new(
        config.upload_dir.clone(),
        document_store.clone(),
        pdf_extractor,
    ));
    let translation_service = Arc::new(
        lectura_backend::domain::translation::TranslationService::new(
            document_store.clone(),
            translation_store.clone(),
            translation_factory,
        ),
    );
    let tts_service = Arc::new(lectura_backend::domain::tts::TtsService::new(
        config.audio_dir.clone(),
        translation_store.clone(),
        manifest_store.clone(),
        tts_factory,
    ));

    // 4. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let document_controller = Arc::new(
        lectura_backend::controllers::document::DocumentController::new(document_service),
    );
    let translate_controller = Arc::new(
        lectura_backend::controllers::translate::TranslateController::new(translation_service),
    );
    let tts_controller = Arc::new(lectura_backend::controllers::tts::TtsController::new(
        tts_service,
        config.audio_dir.clone(),
    ));

    // Start HTTP server with all routes
    start_http_server(
        config,
        document_controller,
        translate_controller,
        tts_controller,
    )
    .await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "lectura_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "lectura_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
