use super::error::TranslationServiceError;
use super::model::{ChunkOutcome, DocumentTranslation, TranslatedPage, TranslationResult};
use crate::domain::segmenter::split_into_chunks;
use crate::infrastructure::providers::{TranslationProvider, TranslationProviderFactory};
use crate::infrastructure::stores::{DocumentStore, TranslationStore};
use async_trait::async_trait;
use lingua::{LanguageDetector, LanguageDetectorBuilder};
use std::sync::Arc;

/// Character bound for one provider call when translating a whole document.
const CHUNK_MAX_CHARS: usize = 5000;

/// Detected language and its confidence score.
#[derive(Debug, Clone)]
pub struct LanguageDetection {
    pub language: String,
    pub confidence: f64,
}

pub struct TranslationService {
    document_store: Arc<dyn DocumentStore>,
    translation_store: Arc<dyn TranslationStore>,
    provider_factory: Arc<dyn TranslationProviderFactory>,
    language_detector: LanguageDetector,
}

impl TranslationService {
    pub fn new(
        document_store: Arc<dyn DocumentStore>,
        translation_store: Arc<dyn TranslationStore>,
        provider_factory: Arc<dyn TranslationProviderFactory>,
    ) -> Self {
        // Detector over the languages compiled into the build
        let language_detector = LanguageDetectorBuilder::from_all_languages().build();

        Self {
            document_store,
            translation_store,
            provider_factory,
            language_detector,
        }
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate one piece of text. Whitespace-only input short-circuits to
    /// an empty result tagged with the requested languages, without calling
    /// the provider.
    async fn translate_text(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: &str,
        service: &str,
    ) -> Result<TranslationResult, TranslationServiceError>;

    /// Translate a stored document chunk by chunk and page by page, then
    /// persist the result keyed by `(document_id, target_lang)`. With
    /// `strict` set, any failed chunk fails the whole operation instead of
    /// being dropped from the reassembled text.
    async fn translate_document(
        &self,
        document_id: &str,
        target_lang: &str,
        source_lang: &str,
        service: &str,
        strict: bool,
    ) -> Result<DocumentTranslation, TranslationServiceError>;

    /// Detect the language of a text, with a confidence score.
    fn detect_language(&self, text: &str) -> LanguageDetection;

    /// Language codes supported by a translation service.
    fn supported_languages(&self, service: &str)
        -> Result<Vec<String>, TranslationServiceError>;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate_text(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: &str,
        service: &str,
    ) -> Result<TranslationResult, TranslationServiceError> {
        if text.trim().is_empty() {
            return Ok(TranslationResult {
                translated_text: String::new(),
                source_lang: source_lang.to_string(),
                target_lang: target_lang.to_string(),
                service: service.to_string(),
            });
        }

        let provider = self.provider_factory.create(service)?;
        self.translate_with(provider.as_ref(), text, target_lang, source_lang)
            .await
    }

    async fn translate_document(
        &self,
        document_id: &str,
        target_lang: &str,
        source_lang: &str,
        service: &str,
        strict: bool,
    ) -> Result<DocumentTranslation, TranslationServiceError> {
        let document = self
            .document_store
            .find_by_id(document_id)
            .await?
            .ok_or(TranslationServiceError::DocumentNotFound)?;

        let provider = self.provider_factory.create(service)?;

        let chunks = split_into_chunks(&document.full_text, CHUNK_MAX_CHARS);
        tracing::info!(
            document_id = %document_id,
            target_lang = %target_lang,
            chunk_count = chunks.len(),
            total_chars = document.total_chars,
            "Translating document"
        );

        let outcomes = self
            .translate_chunks(provider.as_ref(), &chunks, target_lang, source_lang)
            .await;

        if strict {
            if let Some(failed) = outcomes.iter().find(|outcome| outcome.is_failed()) {
                if let ChunkOutcome::Failed {
                    chunk_index, error, ..
                } = failed
                {
                    return Err(TranslationServiceError::Provider(format!(
                        "chunk {} failed: {}",
                        chunk_index, error
                    )));
                }
            }
        }

        for outcome in &outcomes {
            if let ChunkOutcome::Failed {
                chunk_index, error, ..
            } = outcome
            {
                // Compatibility behavior: the failed chunk is dropped from
                // the reassembled text, leaving no gap marker.
                tracing::warn!(
                    document_id = %document_id,
                    chunk_index = chunk_index,
                    error = %error,
                    "Chunk translation failed; omitting it from the reassembled text"
                );
            }
        }

        let translated_text = outcomes
            .iter()
            .filter_map(|outcome| outcome.as_translated())
            .map(|result| result.translated_text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        // Pages are translated independently of the chunk pass: the per-page
        // results are not sliced out of the chunk results, so the two cover
        // the same source text without being character-for-character equal.
        let mut pages = Vec::with_capacity(document.pages.len());
        for page in &document.pages {
            let page_translation = if page.text.trim().is_empty() {
                TranslationResult {
                    translated_text: String::new(),
                    source_lang: source_lang.to_string(),
                    target_lang: target_lang.to_string(),
                    service: service.to_string(),
                }
            } else {
                self.translate_with(provider.as_ref(), &page.text, target_lang, source_lang)
                    .await?
            };

            pages.push(TranslatedPage {
                page_number: page.page_number,
                original_text: page.text.clone(),
                char_count: page_translation.translated_text.chars().count(),
                translated_text: page_translation.translated_text,
            });
        }

        let resolved_source_lang = outcomes
            .iter()
            .find_map(|outcome| outcome.as_translated())
            .map(|result| result.source_lang.clone())
            .unwrap_or_else(|| source_lang.to_string());

        let translation = DocumentTranslation {
            document_id: document_id.to_string(),
            source_lang: resolved_source_lang,
            target_lang: target_lang.to_string(),
            service: service.to_string(),
            original_text: document.full_text.clone(),
            translated_text: translated_text.clone(),
            full_text: translated_text.clone(),
            total_pages: pages.len(),
            total_chars: translated_text.chars().count(),
            pages,
            original_pages: document.pages,
        };

        self.translation_store.save(&translation).await?;

        tracing::info!(
            document_id = %document_id,
            target_lang = %target_lang,
            source_lang = %translation.source_lang,
            failed_chunks = outcomes.iter().filter(|o| o.is_failed()).count(),
            "Document translation stored"
        );

        Ok(translation)
    }

    fn detect_language(&self, text: &str) -> LanguageDetection {
        let confidence_values = self.language_detector.compute_language_confidence_values(text);

        match confidence_values.first() {
            Some((language, confidence)) => LanguageDetection {
                language: format!("{}", language.iso_code_639_1()).to_lowercase(),
                confidence: *confidence,
            },
            None => {
                tracing::warn!("Could not detect language");
                LanguageDetection {
                    language: "unknown".to_string(),
                    confidence: 0.0,
                }
            }
        }
    }

    fn supported_languages(
        &self,
        service: &str,
    ) -> Result<Vec<String>, TranslationServiceError> {
        Ok(self.provider_factory.supported_languages(service)?)
    }
}

impl TranslationService {
    /// One provider call, with the detected source language folded into the
    /// result (falling back to the requested one).
    async fn translate_with(
        &self,
        provider: &dyn TranslationProvider,
        text: &str,
        target_lang: &str,
        source_lang: &str,
    ) -> Result<TranslationResult, TranslationServiceError> {
        let translation = provider.translate(text, source_lang, target_lang).await?;

        Ok(TranslationResult {
            translated_text: translation.translated_text,
            source_lang: translation
                .detected_source_lang
                .unwrap_or_else(|| source_lang.to_lowercase()),
            target_lang: target_lang.to_string(),
            service: provider.name().to_string(),
        })
    }

    /// Translate chunks one by one, capturing per-chunk failures as data so
    /// one bad chunk cannot abort its siblings. Empty chunks short-circuit
    /// to empty results without a provider call.
    pub async fn translate_chunks(
        &self,
        provider: &dyn TranslationProvider,
        chunks: &[String],
        target_lang: &str,
        source_lang: &str,
    ) -> Vec<ChunkOutcome> {
        let mut outcomes = Vec::with_capacity(chunks.len());

        for (chunk_index, chunk) in chunks.iter().enumerate() {
            if chunk.trim().is_empty() {
                outcomes.push(ChunkOutcome::Translated {
                    chunk_index,
                    result: TranslationResult {
                        translated_text: String::new(),
                        source_lang: source_lang.to_string(),
                        target_lang: target_lang.to_string(),
                        service: provider.name().to_string(),
                    },
                });
                continue;
            }

            match self
                .translate_with(provider, chunk, target_lang, source_lang)
                .await
            {
                Ok(result) => outcomes.push(ChunkOutcome::Translated {
                    chunk_index,
                    result,
                }),
                Err(e) => outcomes.push(ChunkOutcome::Failed {
                    chunk_index,
                    error: e.to_string(),
                    original_text: chunk.clone(),
                }),
            }
        }

        outcomes
    }
}
