pub mod deepl_provider;
pub mod google_translate_provider;
pub mod gtts_provider;
pub mod translation_provider;
pub mod tts_provider;

pub use deepl_provider::DeepLProvider;
pub use google_translate_provider::GoogleTranslateProvider;
pub use gtts_provider::GttsProvider;
pub use translation_provider::{
    DefaultTranslationProviderFactory, ProviderTranslation, TranslationProvider,
    TranslationProviderFactory,
};
pub use tts_provider::{DefaultTtsProviderFactory, TtsProvider, TtsProviderFactory};

/// Errors raised by external translation/TTS providers and their factories.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("unsupported service: {0}")]
    UnsupportedService(String),
    #[error("{0}")]
    NotImplemented(String),
    #[error("{0}")]
    MissingCredentials(String),
    #[error("{0}")]
    Request(String),
}
