use super::error::DocumentServiceError;
use super::model::ExtractedDocument;
use super::naming::{allowed_file, sanitize_filename, unique_filename};
use crate::infrastructure::extraction::PdfExtractor;
use crate::infrastructure::stores::DocumentStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const ALLOWED_EXTENSIONS: &[&str] = &["pdf"];

pub struct DocumentService {
    upload_dir: PathBuf,
    document_store: Arc<dyn DocumentStore>,
    extractor: Arc<dyn PdfExtractor>,
}

impl DocumentService {
    pub fn new(
        upload_dir: PathBuf,
        document_store: Arc<dyn DocumentStore>,
        extractor: Arc<dyn PdfExtractor>,
    ) -> Self {
        Self {
            upload_dir,
            document_store,
            extractor,
        }
    }
}

#[async_trait]
pub trait DocumentServiceApi: Send + Sync {
    /// Process an uploaded PDF: validate the filename, persist the file
    /// under a unique name, extract its text and persist the extracted
    /// artifact. The derived document id is the stored filename without its
    /// extension.
    async fn process_upload(
        &self,
        original_filename: &str,
        data: Vec<u8>,
    ) -> Result<ExtractedDocument, DocumentServiceError>;

    /// Load the extracted artifact for a document.
    async fn get_document(
        &self,
        document_id: &str,
    ) -> Result<ExtractedDocument, DocumentServiceError>;
}

#[async_trait]
impl DocumentServiceApi for DocumentService {
    async fn process_upload(
        &self,
        original_filename: &str,
        data: Vec<u8>,
    ) -> Result<ExtractedDocument, DocumentServiceError> {
        if original_filename.is_empty() {
            return Err(DocumentServiceError::Invalid(
                "No file selected".to_string(),
            ));
        }

        if !allowed_file(original_filename, ALLOWED_EXTENSIONS) {
            return Err(DocumentServiceError::Invalid(
                "Invalid file type. Only PDF files are allowed".to_string(),
            ));
        }

        let filename = sanitize_filename(original_filename);
        let stored_filename = unique_filename(&filename);
        let document_id = document_id_from(&stored_filename);

        tracing::info!(
            filename = %filename,
            document_id = %document_id,
            size_bytes = data.len(),
            "Processing upload"
        );

        let file_path = self.upload_dir.join(&stored_filename);
        tokio::fs::write(&file_path, &data).await?;

        // Extraction is CPU bound; keep it off the async workers.
        let extractor = self.extractor.clone();
        let extracted = tokio::task::spawn_blocking(move || extractor.extract(&data))
            .await
            .map_err(|e| DocumentServiceError::Extraction(e.to_string()))?
            .map_err(|e| DocumentServiceError::Extraction(e.to_string()))?;

        let document = ExtractedDocument::from_pages(
            document_id,
            filename,
            extracted.pages,
            extracted.metadata,
        );

        self.document_store.save(&document).await?;

        tracing::info!(
            document_id = %document.document_id,
            total_pages = document.total_pages,
            total_chars = document.total_chars,
            "Document extracted and stored"
        );

        Ok(document)
    }

    async fn get_document(
        &self,
        document_id: &str,
    ) -> Result<ExtractedDocument, DocumentServiceError> {
        self.document_store
            .find_by_id(document_id)
            .await?
            .ok_or(DocumentServiceError::NotFound)
    }
}

fn document_id_from(stored_filename: &str) -> String {
    Path::new(stored_filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| stored_filename.to_string())
}
