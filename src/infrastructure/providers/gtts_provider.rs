use super::tts_provider::TtsProvider;
use super::ProviderError;
use crate::domain::segmenter::split_into_chunks;
use async_trait::async_trait;

const TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// The endpoint rejects long inputs; batches are kept under this many
/// characters, split on sentence boundaries.
const MAX_BATCH_CHARS: usize = 200;

const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "es", "fr", "de", "it", "pt", "ru", "ja", "ko", "zh-cn", "zh-tw", "ar", "hi", "nl",
    "pl", "tr", "vi", "th", "id", "sv", "no", "da", "fi", "cs", "el", "he", "hu", "ro", "sk",
    "uk", "bn", "ta", "te", "mr", "gu",
];

/// Google Translate TTS implementation (free endpoint, no API key).
///
/// MP3 frames are self-contained, so per-batch responses concatenate into
/// one playable stream.
pub struct GttsProvider {
    http: reqwest::Client,
}

impl GttsProvider {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    fn request_url(text: &str, language: &str, slow: bool) -> String {
        // The endpoint wants %20-escaped spaces; form-style `+` encoding is
        // read as literal plus signs.
        let speed = if slow { "0.24" } else { "1" };
        format!(
            "{}?ie=UTF-8&client=tw-ob&tl={}&ttsspeed={}&total=1&idx=0&textlen={}&q={}",
            TTS_ENDPOINT,
            language,
            speed,
            text.chars().count(),
            urlencoding::encode(text)
        )
    }

    async fn fetch_batch(
        &self,
        text: &str,
        language: &str,
        slow: bool,
    ) -> Result<Vec<u8>, ProviderError> {
        let url = Self::request_url(text, language, slow);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Request(format!("gTTS error: {}", e)))?
            .error_for_status()
            .map_err(|e| ProviderError::Request(format!("gTTS error: {}", e)))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Request(format!("gTTS error: {}", e)))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl TtsProvider for GttsProvider {
    fn name(&self) -> &'static str {
        "gtts"
    }

    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        slow: bool,
    ) -> Result<Vec<u8>, ProviderError> {
        let start_time = std::time::Instant::now();

        let batches = split_into_chunks(text, MAX_BATCH_CHARS);
        tracing::debug!(
            batch_count = batches.len(),
            text_length = text.chars().count(),
            "Text split into batches"
        );

        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            let audio_data = self.fetch_batch(batch, language, slow).await?;
            merged_audio.extend(audio_data);

            tracing::debug!(
                batch_index = index,
                total_audio_size = merged_audio.len(),
                "Batch synthesized and merged"
            );
        }

        tracing::info!(
            provider = "gtts",
            language = language,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.chars().count(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }

    fn supported_languages(&self) -> Vec<String> {
        SUPPORTED_LANGUAGES.iter().map(|s| s.to_string()).collect()
    }
}
