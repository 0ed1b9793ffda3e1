use super::StoreError;
use crate::domain::translation::DocumentTranslation;
use async_trait::async_trait;
use std::path::PathBuf;

/// Store for translation artifacts, keyed by `(document_id, target_lang)`.
/// Saving the same key twice overwrites; there is no merge.
#[async_trait]
pub trait TranslationStore: Send + Sync {
    async fn save(&self, translation: &DocumentTranslation) -> Result<(), StoreError>;
    async fn find(
        &self,
        document_id: &str,
        target_lang: &str,
    ) -> Result<Option<DocumentTranslation>, StoreError>;
}

/// Flat-file implementation: `{document_id}_{target_lang}_translation.json`.
pub struct FsTranslationStore {
    translation_dir: PathBuf,
}

impl FsTranslationStore {
    pub fn new(translation_dir: PathBuf) -> Self {
        Self { translation_dir }
    }

    fn path_for(&self, document_id: &str, target_lang: &str) -> PathBuf {
        self.translation_dir
            .join(format!("{}_{}_translation.json", document_id, target_lang))
    }
}

#[async_trait]
impl TranslationStore for FsTranslationStore {
    async fn save(&self, translation: &DocumentTranslation) -> Result<(), StoreError> {
        let path = self.path_for(&translation.document_id, &translation.target_lang);
        let json = serde_json::to_vec_pretty(translation)?;
        tokio::fs::write(&path, json).await?;

        tracing::debug!(
            document_id = %translation.document_id,
            target_lang = %translation.target_lang,
            path = %path.display(),
            "Translation artifact saved"
        );
        Ok(())
    }

    async fn find(
        &self,
        document_id: &str,
        target_lang: &str,
    ) -> Result<Option<DocumentTranslation>, StoreError> {
        let path = self.path_for(document_id, target_lang);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
