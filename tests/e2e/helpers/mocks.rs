use async_trait::async_trait;
use lectura_backend::infrastructure::extraction::{
    ExtractedText, ExtractionError, PdfExtractor,
};
use lectura_backend::infrastructure::providers::{
    ProviderError, ProviderTranslation, TranslationProvider, TranslationProviderFactory,
    TtsProvider, TtsProviderFactory,
};
use serde_json::Map;
use std::sync::Arc;

/// First page of every mock-extracted document.
pub const PAGE_ONE: &str = "The fox runs. It jumps high.";
/// Second page of every mock-extracted document.
pub const PAGE_TWO: &str = "A calm second page.";

/// Fixed audio payload returned by the mock TTS provider.
pub const MOCK_AUDIO: &[u8] = b"ID3mockaudio";

/// Extractor returning two fixed pages regardless of input bytes.
pub struct MockPdfExtractor;

impl PdfExtractor for MockPdfExtractor {
    fn extract(&self, data: &[u8]) -> Result<ExtractedText, ExtractionError> {
        if data.starts_with(b"BROKEN") {
            return Err(ExtractionError::Parse("mock parse failure".to_string()));
        }
        Ok(ExtractedText {
            pages: vec![PAGE_ONE.to_string(), PAGE_TWO.to_string()],
            metadata: Map::new(),
        })
    }
}

/// Deterministic translation: prefixes the target language, detects "en",
/// fails on texts containing `FAILCHUNK`.
pub struct MockTranslationProvider;

#[async_trait]
impl TranslationProvider for MockTranslationProvider {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        target_lang: &str,
    ) -> Result<ProviderTranslation, ProviderError> {
        if text.contains("FAILCHUNK") {
            return Err(ProviderError::Request("mock translation failure".to_string()));
        }
        Ok(ProviderTranslation {
            translated_text: format!("[{}] {}", target_lang, text),
            detected_source_lang: Some("en".to_string()),
        })
    }

    fn supported_languages(&self) -> Vec<String> {
        vec!["en".to_string(), "es".to_string(), "fr".to_string()]
    }
}

/// Factory mirroring the production service-name handling, with the mock
/// standing in for the one implemented provider.
pub struct MockTranslationFactory;

impl TranslationProviderFactory for MockTranslationFactory {
    fn create(&self, service: &str) -> Result<Arc<dyn TranslationProvider>, ProviderError> {
        match service {
            "google" => Ok(Arc::new(MockTranslationProvider)),
            "deepl" => Err(ProviderError::MissingCredentials(
                "DeepL API key not found in environment variables".to_string(),
            )),
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

/// Deterministic synthesis: fixed bytes, failing on texts containing
/// `FAILSEG`.
pub struct MockTtsProvider;

#[async_trait]
impl TtsProvider for MockTtsProvider {
    fn name(&self) -> &'static str {
        "gtts"
    }

    async fn synthesize(
        &self,
        text: &str,
        _language: &str,
        _slow: bool,
    ) -> Result<Vec<u8>, ProviderError> {
        if text.contains("FAILSEG") {
            return Err(ProviderError::Request("mock synthesis failure".to_string()));
        }
        Ok(MOCK_AUDIO.to_vec())
    }

    fn supported_languages(&self) -> Vec<String> {
        vec!["en".to_string(), "es".to_string()]
    }
}

pub struct MockTtsFactory;

impl TtsProviderFactory for MockTtsFactory {
    fn create(&self, service: &str) -> Result<Arc<dyn TtsProvider>, ProviderError> {
        match service {
            "gtts" => Ok(Arc::new(MockTtsProvider)),
            "google_cloud" | "azure" | "elevenlabs" => Err(ProviderError::NotImplemented(
                format!("{} TTS not yet implemented. Use 'gtts' for now.", service),
            )),
            other => Err(ProviderError::UnsupportedService(format!(
                "Unsupported TTS service: {}",
                other
            ))),
        }
    }

    fn supported_languages(&self, service: &str) -> Result<Vec<String>, ProviderError> {
        match service {
            "gtts" => Ok(self.create("gtts")?.supported_languages()),
            "google_cloud" | "azure" | "elevenlabs" => Ok(Vec::new()),
            other => Err(ProviderError::UnsupportedService(format!(
                "Unsupported TTS service: {}",
                other
            ))),
        }
    }
}
