use std::path::PathBuf;
use std::sync::Arc;

use lectura_backend::controllers::document::DocumentController;
use lectura_backend::controllers::translate::TranslateController;
use lectura_backend::controllers::tts::TtsController;
use lectura_backend::domain::document::DocumentService;
use lectura_backend::domain::translation::TranslationService;
use lectura_backend::domain::tts::TtsService;
use lectura_backend::infrastructure::http::build_router;
use lectura_backend::infrastructure::stores::{
    FsDocumentStore, FsSegmentManifestStore, FsTranslationStore,
};
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub mod api_client;
pub mod mocks;

use api_client::TestClient;
use mocks::{MockPdfExtractor, MockTranslationFactory, MockTtsFactory};

const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

pub struct TestContext {
    pub client: TestClient,
    pub upload_dir: PathBuf,
    pub translation_dir: PathBuf,
    pub audio_dir: PathBuf,
    server: JoinHandle<()>,
    _tmp: TempDir,
}

impl TestContext {
    /// Upload a mock PDF and return its document id.
    pub async fn upload_document(&self) -> String {
        let response = self
            .client
            .post_multipart("/api/upload", "story.pdf", b"%PDF-1.4 mock")
            .await
            .unwrap();
        response.assert_status(hyper::StatusCode::OK);
        response
            .json()
            .get("document_id")
            .and_then(|v| v.as_str())
            .expect("upload response carries a document_id")
            .to_string()
    }

    /// Upload and translate, returning the document id.
    pub async fn translated_document(&self, target_lang: &str) -> String {
        let document_id = self.upload_document().await;
        let response = self
            .client
            .post(
                "/api/translate/document",
                &serde_json::json!({
                    "document_id": document_id,
                    "target_lang": target_lang,
                }),
            )
            .await
            .unwrap();
        response.assert_status(hyper::StatusCode::OK);
        document_id
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let tmp = tempfile::tempdir().expect("create temp dir");
            let upload_dir = tmp.path().join("uploads");
            let translation_dir = tmp.path().join("output").join("translations");
            let audio_dir = tmp.path().join("output").join("audio");
            for dir in [&upload_dir, &translation_dir, &audio_dir] {
                std::fs::create_dir_all(dir).expect("create artifact dir");
            }

            let document_store = Arc::new(FsDocumentStore::new(translation_dir.clone()));
            let translation_store = Arc::new(FsTranslationStore::new(translation_dir.clone()));
            let manifest_store = Arc::new(FsSegmentManifestStore::new(audio_dir.clone()));

            let document_service = Arc::new(DocumentService::new(
                upload_dir.clone(),
                document_store.clone(),
                Arc::new(MockPdfExtractor),
            ));
            let translation_service = Arc::new(TranslationService::new(
                document_store,
                translation_store.clone(),
                Arc::new(MockTranslationFactory),
            ));
            let tts_service = Arc::new(TtsService::new(
                audio_dir.clone(),
                translation_store,
                manifest_store,
                Arc::new(MockTtsFactory),
            ));

            let app = build_router(
                Arc::new(DocumentController::new(document_service)),
                Arc::new(TranslateController::new(translation_service)),
                Arc::new(TtsController::new(tts_service, audio_dir.clone())),
                MAX_UPLOAD_BYTES,
            );

            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind ephemeral port");
            let addr = listener.local_addr().expect("local addr");

            let server = tokio::spawn(async move {
                axum::serve(listener, app).await.expect("server error");
            });

            Self {
                client: TestClient::new(&format!("http://{}", addr)),
                upload_dir,
                translation_dir,
                audio_dir,
                server,
                _tmp: tmp,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async move {
            self.server.abort();
        }
    }
}
