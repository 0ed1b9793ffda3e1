pub mod document_store;
pub mod segment_store;
pub mod translation_store;

pub use document_store::{DocumentStore, FsDocumentStore};
pub use segment_store::{FsSegmentManifestStore, SegmentManifestStore};
pub use translation_store::{FsTranslationStore, TranslationStore};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
