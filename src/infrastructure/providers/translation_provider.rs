use super::{DeepLProvider, GoogleTranslateProvider, ProviderError};
use async_trait::async_trait;
use std::sync::Arc;

/// Result of one provider translation call.
#[derive(Debug, Clone)]
pub struct ProviderTranslation {
    pub translated_text: String,
    /// Lower-cased detected source language, when the provider reports one.
    pub detected_source_lang: Option<String>,
}

/// Contract for a translation backend.
///
/// Implementations are responsible for provider-specific language-code
/// conventions and for mapping transport failures into `ProviderError`.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Translate `text` from `source_lang` ("auto" for detection) into
    /// `target_lang`.
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<ProviderTranslation, ProviderError>;

    /// Language codes this provider accepts.
    fn supported_languages(&self) -> Vec<String>;
}

/// Selects a translation provider by service name.
pub trait TranslationProviderFactory: Send + Sync {
    fn create(&self, service: &str) -> Result<Arc<dyn TranslationProvider>, ProviderError>;

    fn supported_languages(&self, service: &str) -> Result<Vec<String>, ProviderError> {
        Ok(self.create(service)?.supported_languages())
    }
}

/// Production factory: `google` (keyless), `deepl` (API key required),
/// `google_cloud` declared but not implemented.
pub struct DefaultTranslationProviderFactory {
    http: reqwest::Client,
    deepl_api_key: Option<String>,
}

impl DefaultTranslationProviderFactory {
    pub fn new(http: reqwest::Client, deepl_api_key: Option<String>) -> Self {
        Self {
            http,
            deepl_api_key,
        }
    }
}

impl TranslationProviderFactory for DefaultTranslationProviderFactory {
    fn create(&self, service: &str) -> Result<Arc<dyn TranslationProvider>, ProviderError> {
        match service {
            "google" => Ok(Arc::new(GoogleTranslateProvider::new(self.http.clone()))),
            "deepl" => {
                let api_key = self.deepl_api_key.clone().ok_or_else(|| {
                    ProviderError::MissingCredentials(
                        "DeepL API key not found in environment variables".to_string(),
                    )
                })?;
                Ok(Arc::new(DeepLProvider::new(self.http.clone(), api_key)))
            }
            "google_cloud" => Err(ProviderError::NotImplemented(
                "Google Cloud Translation not yet implemented".to_string(),
            )),
            other => Err(ProviderError::UnsupportedService(format!(
                "Unsupported translation service: {}",
                other
            ))),
        }
    }
}
