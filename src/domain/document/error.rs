use crate::error::AppError;
use crate::infrastructure::stores::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum DocumentServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("document not found")]
    NotFound,
    #[error("extraction failed: {0}")]
    Extraction(String),
    #[error("store error: {0}")]
    Store(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<StoreError> for DocumentServiceError {
    fn from(err: StoreError) -> Self {
        DocumentServiceError::Store(err.to_string())
    }
}

impl From<DocumentServiceError> for AppError {
    fn from(err: DocumentServiceError) -> Self {
        match err {
            DocumentServiceError::Invalid(msg) => AppError::BadRequest(msg),
            DocumentServiceError::NotFound => {
                AppError::NotFound("Document not found".to_string())
            }
            DocumentServiceError::Extraction(msg) => {
                AppError::Internal(format!("Failed to extract text from PDF: {}", msg))
            }
            DocumentServiceError::Store(msg) => AppError::Internal(msg),
            DocumentServiceError::Io(e) => AppError::Io(e),
            DocumentServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
