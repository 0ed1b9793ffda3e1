use super::StoreError;
use crate::domain::tts::SegmentManifest;
use async_trait::async_trait;
use std::path::PathBuf;

/// Store for narration segment manifests, keyed by document id. A later
/// generation call for the same document overwrites the manifest.
#[async_trait]
pub trait SegmentManifestStore: Send + Sync {
    async fn save(&self, manifest: &SegmentManifest) -> Result<(), StoreError>;
    async fn find_by_document(
        &self,
        document_id: &str,
    ) -> Result<Option<SegmentManifest>, StoreError>;
}

/// Flat-file implementation: `{audio_dir}/{document_id}/segments.json`,
/// next to the segment audio files themselves.
pub struct FsSegmentManifestStore {
    audio_dir: PathBuf,
}

impl FsSegmentManifestStore {
    pub fn new(audio_dir: PathBuf) -> Self {
        Self { audio_dir }
    }

    fn path_for(&self, document_id: &str) -> PathBuf {
        self.audio_dir.join(document_id).join("segments.json")
    }
}

#[async_trait]
impl SegmentManifestStore for FsSegmentManifestStore {
    async fn save(&self, manifest: &SegmentManifest) -> Result<(), StoreError> {
        let path = self.path_for(&manifest.document_id);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(manifest)?;
        tokio::fs::write(&path, json).await?;

        tracing::debug!(
            document_id = %manifest.document_id,
            language = %manifest.language,
            segments = manifest.segments.len(),
            "Segment manifest saved"
        );
        Ok(())
    }

    async fn find_by_document(
        &self,
        document_id: &str,
    ) -> Result<Option<SegmentManifest>, StoreError> {
        let path = self.path_for(document_id);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
