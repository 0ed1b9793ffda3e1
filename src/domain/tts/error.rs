use crate::error::AppError;
use crate::infrastructure::providers::ProviderError;
use crate::infrastructure::stores::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("translation not found")]
    TranslationNotFound,
    #[error("segment manifest not found")]
    ManifestNotFound,
    #[error("provider error: {0}")]
    Provider(String),
    #[error("missing credentials: {0}")]
    Configuration(String),
    #[error("store error: {0}")]
    Store(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ProviderError> for TtsServiceError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingCredentials(msg) => TtsServiceError::Configuration(msg),
            other => TtsServiceError::Provider(other.to_string()),
        }
    }
}

impl From<StoreError> for TtsServiceError {
    fn from(err: StoreError) -> Self {
        TtsServiceError::Store(err.to_string())
    }
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::TranslationNotFound => AppError::NotFound(
                "Translation not found. Please translate the document first.".to_string(),
            ),
            TtsServiceError::ManifestNotFound => {
                AppError::NotFound("Segment information not found".to_string())
            }
            TtsServiceError::Provider(msg) => AppError::Provider(msg),
            TtsServiceError::Configuration(msg) => AppError::Configuration(msg),
            TtsServiceError::Store(msg) => AppError::Internal(msg),
            TtsServiceError::Io(e) => AppError::Io(e),
            TtsServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
