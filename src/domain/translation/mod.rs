pub mod error;
pub mod model;
pub mod service;

pub use error::TranslationServiceError;
pub use model::{ChunkOutcome, DocumentTranslation, TranslatedPage, TranslationResult};
pub use service::{LanguageDetection, TranslationService, TranslationServiceApi};
