use crate::error::AppError;
use crate::infrastructure::providers::ProviderError;
use crate::infrastructure::stores::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum TranslationServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("document not found")]
    DocumentNotFound,
    #[error("provider error: {0}")]
    Provider(String),
    #[error("missing credentials: {0}")]
    Configuration(String),
    #[error("store error: {0}")]
    Store(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ProviderError> for TranslationServiceError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingCredentials(msg) => TranslationServiceError::Configuration(msg),
            other => TranslationServiceError::Provider(other.to_string()),
        }
    }
}

impl From<StoreError> for TranslationServiceError {
    fn from(err: StoreError) -> Self {
        TranslationServiceError::Store(err.to_string())
    }
}

impl From<TranslationServiceError> for AppError {
    fn from(err: TranslationServiceError) -> Self {
        match err {
            TranslationServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TranslationServiceError::DocumentNotFound => {
                AppError::NotFound("Document not found".to_string())
            }
            TranslationServiceError::Provider(msg) => AppError::Provider(msg),
            TranslationServiceError::Configuration(msg) => AppError::Configuration(msg),
            TranslationServiceError::Store(msg) => AppError::Internal(msg),
            TranslationServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
