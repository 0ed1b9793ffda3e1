use super::{GttsProvider, ProviderError};
use async_trait::async_trait;
use std::sync::Arc;

/// Service names the TTS surface recognizes. All but gtts are declared
/// placeholders that fail with a feature-not-available error when invoked.
pub const KNOWN_SERVICES: &[&str] = &["gtts", "google_cloud", "azure", "elevenlabs"];

/// Contract for a speech-synthesis backend.
///
/// Implementations handle provider-specific length limits (splitting into
/// batches and merging the audio in order) and return ready-to-serve MP3
/// bytes.
#[async_trait]
pub trait TtsProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        slow: bool,
    ) -> Result<Vec<u8>, ProviderError>;

    fn supported_languages(&self) -> Vec<String>;
}

/// Selects a TTS provider by service name.
pub trait TtsProviderFactory: Send + Sync {
    fn create(&self, service: &str) -> Result<Arc<dyn TtsProvider>, ProviderError>;

    /// Languages for a service. Placeholder services report an empty list
    /// rather than failing, so clients can probe without triggering the
    /// not-implemented path.
    fn supported_languages(&self, service: &str) -> Result<Vec<String>, ProviderError>;
}

pub struct DefaultTtsProviderFactory {
    http: reqwest::Client,
}

impl DefaultTtsProviderFactory {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl TtsProviderFactory for DefaultTtsProviderFactory {
    fn create(&self, service: &str) -> Result<Arc<dyn TtsProvider>, ProviderError> {
        match service {
            "gtts" => Ok(Arc::new(GttsProvider::new(self.http.clone()))),
            "google_cloud" => Err(ProviderError::NotImplemented(
                "Google Cloud TTS not yet implemented. Use 'gtts' for now.".to_string(),
            )),
            "azure" => Err(ProviderError::NotImplemented(
                "Azure TTS not yet implemented. Use 'gtts' for now.".to_string(),
            )),
            "elevenlabs" => Err(ProviderError::NotImplemented(
                "ElevenLabs TTS not yet implemented. Use 'gtts' for now.".to_string(),
            )),
            other => Err(ProviderError::UnsupportedService(format!(
                "Unsupported TTS service: {}",
                other
            ))),
        }
    }

    fn supported_languages(&self, service: &str) -> Result<Vec<String>, ProviderError> {
        if !KNOWN_SERVICES.contains(&service) {
            return Err(ProviderError::UnsupportedService(format!(
                "Unsupported TTS service: {}",
                service
            )));
        }
        match service {
            "gtts" => Ok(self.create("gtts")?.supported_languages()),
            _ => Ok(Vec::new()),
        }
    }
}
