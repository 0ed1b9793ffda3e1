use super::StoreError;
use crate::domain::document::ExtractedDocument;
use async_trait::async_trait;
use std::path::PathBuf;

/// Store for extracted-text artifacts, keyed by document id.
///
/// The store is the sole writer; readers only ever see the latest overwrite.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn save(&self, document: &ExtractedDocument) -> Result<(), StoreError>;
    async fn find_by_id(&self, document_id: &str)
        -> Result<Option<ExtractedDocument>, StoreError>;
}

/// Flat-file implementation: one `{document_id}_extracted.json` per document.
pub struct FsDocumentStore {
    translation_dir: PathBuf,
}

impl FsDocumentStore {
    pub fn new(translation_dir: PathBuf) -> Self {
        Self { translation_dir }
    }

    fn path_for(&self, document_id: &str) -> PathBuf {
        self.translation_dir
            .join(format!("{}_extracted.json", document_id))
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn save(&self, document: &ExtractedDocument) -> Result<(), StoreError> {
        let path = self.path_for(&document.document_id);
        let json = serde_json::to_vec_pretty(document)?;
        tokio::fs::write(&path, json).await?;

        tracing::debug!(
            document_id = %document.document_id,
            path = %path.display(),
            "Extracted document saved"
        );
        Ok(())
    }

    async fn find_by_id(
        &self,
        document_id: &str,
    ) -> Result<Option<ExtractedDocument>, StoreError> {
        let path = self.path_for(document_id);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
