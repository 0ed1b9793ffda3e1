use super::translation_provider::{ProviderTranslation, TranslationProvider};
use super::ProviderError;
use async_trait::async_trait;
use serde::Deserialize;

const DEEPL_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";

const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "de", "fr", "es", "pt", "it", "nl", "pl", "ru", "ja", "zh", "bg", "cs", "da", "el",
    "et", "fi", "hu", "id", "ko", "lt", "lv", "nb", "ro", "sk", "sl", "sv", "tr", "uk",
];

#[derive(Debug, Deserialize)]
struct DeepLResponse {
    translations: Vec<DeepLTranslation>,
}

#[derive(Debug, Deserialize)]
struct DeepLTranslation {
    detected_source_language: Option<String>,
    text: String,
}

/// DeepL implementation (requires an API key).
pub struct DeepLProvider {
    http: reqwest::Client,
    api_key: String,
}

impl DeepLProvider {
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        Self { http, api_key }
    }
}

#[async_trait]
impl TranslationProvider for DeepLProvider {
    fn name(&self) -> &'static str {
        "deepl"
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<ProviderTranslation, ProviderError> {
        let start_time = std::time::Instant::now();

        // DeepL wants upper-case language codes, and no source parameter at
        // all for auto-detection.
        let mut form = vec![
            ("text", text.to_string()),
            ("target_lang", target_lang.to_uppercase()),
        ];
        if source_lang != "auto" {
            form.push(("source_lang", source_lang.to_uppercase()));
        }

        let response = self
            .http
            .post(DEEPL_ENDPOINT)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("DeepL-Auth-Key {}", self.api_key),
            )
            .form(&form)
            .send()
            .await
            .map_err(|e| ProviderError::Request(format!("DeepL translation error: {}", e)))?
            .error_for_status()
            .map_err(|e| ProviderError::Request(format!("DeepL translation error: {}", e)))?;

        let body: DeepLResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Request(format!("DeepL translation error: {}", e)))?;

        let translation = body.translations.into_iter().next().ok_or_else(|| {
            ProviderError::Request("DeepL returned no translations".to_string())
        })?;

        tracing::info!(
            provider = "deepl",
            latency_ms = start_time.elapsed().as_millis(),
            text_length = text.chars().count(),
            "Translation completed"
        );

        Ok(ProviderTranslation {
            translated_text: translation.text,
            detected_source_lang: translation
                .detected_source_language
                .map(|lang| lang.to_lowercase()),
        })
    }

    fn supported_languages(&self) -> Vec<String> {
        SUPPORTED_LANGUAGES.iter().map(|s| s.to_string()).collect()
    }
}
