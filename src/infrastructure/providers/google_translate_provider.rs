use super::translation_provider::{ProviderTranslation, TranslationProvider};
use super::ProviderError;
use async_trait::async_trait;
use serde_json::Value;

const TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Language codes accepted by the free Google Translate endpoint.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "es", "fr", "de", "it", "pt", "ru", "ja", "ko", "zh-cn", "zh-tw", "ar", "hi", "nl",
    "pl", "tr", "vi", "th", "id", "ms", "sv", "no", "da", "fi",
];

/// Google Translate implementation (free endpoint, no API key).
pub struct GoogleTranslateProvider {
    http: reqwest::Client,
}

impl GoogleTranslateProvider {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Pull the translated text and detected source language out of the
    /// endpoint's nested-array response: translated sentence parts live at
    /// `[0][i][0]`, the detected language at `[2]`.
    fn parse_response(value: &Value) -> Result<ProviderTranslation, ProviderError> {
        let sentence_parts = value.get(0).and_then(|v| v.as_array()).ok_or_else(|| {
            ProviderError::Request("unexpected response shape from Google Translate".to_string())
        })?;

        let mut translated_text = String::new();
        for part in sentence_parts {
            if let Some(text) = part.get(0).and_then(|v| v.as_str()) {
                translated_text.push_str(text);
            }
        }

        let detected_source_lang = value
            .get(2)
            .and_then(|v| v.as_str())
            .map(|s| s.to_lowercase());

        Ok(ProviderTranslation {
            translated_text,
            detected_source_lang,
        })
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<ProviderTranslation, ProviderError> {
        let start_time = std::time::Instant::now();

        // The text goes in the form body; 5000-character chunks would
        // overflow a query string.
        let response = self
            .http
            .post(TRANSLATE_ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("ie", "UTF-8"),
                ("oe", "UTF-8"),
                ("dt", "t"),
                ("sl", source_lang),
                ("tl", target_lang),
            ])
            .form(&[("q", text)])
            .send()
            .await
            .map_err(|e| ProviderError::Request(format!("Google Translate error: {}", e)))?
            .error_for_status()
            .map_err(|e| ProviderError::Request(format!("Google Translate error: {}", e)))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Request(format!("Google Translate error: {}", e)))?;

        let translation = Self::parse_response(&body)?;

        tracing::info!(
            provider = "google",
            latency_ms = start_time.elapsed().as_millis(),
            text_length = text.chars().count(),
            detected_source = translation.detected_source_lang.as_deref().unwrap_or("none"),
            "Translation completed"
        );

        Ok(translation)
    }

    fn supported_languages(&self) -> Vec<String> {
        SUPPORTED_LANGUAGES.iter().map(|s| s.to_string()).collect()
    }
}
