use super::error::TtsServiceError;
use super::model::{
    estimate_duration, AudioFile, AudioSegment, DocumentNarration, SegmentManifest,
    SegmentNarration, SegmentOutcome,
};
use crate::domain::document::naming::unique_filename;
use crate::domain::segmenter::{create_sentence_segments, Segment};
use crate::infrastructure::providers::{TtsProvider, TtsProviderFactory};
use crate::infrastructure::stores::{SegmentManifestStore, TranslationStore};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct TtsService {
    audio_dir: PathBuf,
    translation_store: Arc<dyn TranslationStore>,
    manifest_store: Arc<dyn SegmentManifestStore>,
    provider_factory: Arc<dyn TtsProviderFactory>,
}

impl TtsService {
    pub fn new(
        audio_dir: PathBuf,
        translation_store: Arc<dyn TranslationStore>,
        manifest_store: Arc<dyn SegmentManifestStore>,
        provider_factory: Arc<dyn TtsProviderFactory>,
    ) -> Self {
        Self {
            audio_dir,
            translation_store,
            manifest_store,
            provider_factory,
        }
    }
}

/// A freshly generated standalone audio file plus its serving name.
#[derive(Debug, Clone)]
pub struct GeneratedAudio {
    pub audio: AudioFile,
    pub audio_filename: String,
    pub estimated_duration: f64,
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize one piece of text into a uniquely named audio file.
    async fn generate(
        &self,
        text: &str,
        language: &str,
        service: &str,
        slow: bool,
    ) -> Result<GeneratedAudio, TtsServiceError>;

    /// Narrate a translated document: per-sentence segments with positional
    /// original-text alignment and a persisted manifest, or one full audio
    /// file when `segment_type` is not "sentence".
    async fn generate_for_document(
        &self,
        document_id: &str,
        language: &str,
        service: &str,
        segment_type: &str,
    ) -> Result<DocumentNarration, TtsServiceError>;

    /// Narrate caller-supplied text for a document, bypassing the stored
    /// translation. Only sentence segmentation is supported here.
    async fn generate_custom(
        &self,
        document_id: &str,
        translated_text: &str,
        original_text: &str,
        language: &str,
        service: &str,
    ) -> Result<SegmentNarration, TtsServiceError>;

    /// Load the persisted segment manifest for a document.
    async fn segments_for_document(
        &self,
        document_id: &str,
    ) -> Result<SegmentManifest, TtsServiceError>;

    /// Language codes supported by a TTS service.
    fn supported_languages(&self, service: &str) -> Result<Vec<String>, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn generate(
        &self,
        text: &str,
        language: &str,
        service: &str,
        slow: bool,
    ) -> Result<GeneratedAudio, TtsServiceError> {
        if text.trim().is_empty() {
            return Err(TtsServiceError::Invalid("Text cannot be empty".to_string()));
        }

        let provider = self.provider_factory.create(service)?;
        let audio_filename = unique_filename(&format!("tts_{}.mp3", language));
        let output_path = self.audio_dir.join(&audio_filename);

        let audio = self
            .synthesize_to_file(provider.as_ref(), text, language, slow, &output_path)
            .await?;

        Ok(GeneratedAudio {
            estimated_duration: estimate_duration(text, None),
            audio,
            audio_filename,
        })
    }

    async fn generate_for_document(
        &self,
        document_id: &str,
        language: &str,
        service: &str,
        segment_type: &str,
    ) -> Result<DocumentNarration, TtsServiceError> {
        let translation = self
            .translation_store
            .find(document_id, language)
            .await?
            .ok_or(TtsServiceError::TranslationNotFound)?;

        let provider = self.provider_factory.create(service)?;

        if segment_type == "sentence" {
            let narration = self
                .narrate_segments(
                    provider.as_ref(),
                    document_id,
                    &translation.translated_text,
                    &translation.original_text,
                    language,
                )
                .await?;
            Ok(DocumentNarration::Segments(narration))
        } else {
            // Whole-document narration: one merged file, no manifest.
            let audio_filename = format!("{}_{}_full.mp3", document_id, language);
            let output_path = self.audio_dir.join(&audio_filename);

            if translation.full_text.trim().is_empty() {
                return Err(TtsServiceError::Invalid("Text cannot be empty".to_string()));
            }

            let audio = self
                .synthesize_to_file(
                    provider.as_ref(),
                    &translation.full_text,
                    language,
                    false,
                    &output_path,
                )
                .await?;

            Ok(DocumentNarration::Full {
                audio,
                audio_filename,
            })
        }
    }

    async fn generate_custom(
        &self,
        document_id: &str,
        translated_text: &str,
        original_text: &str,
        language: &str,
        service: &str,
    ) -> Result<SegmentNarration, TtsServiceError> {
        let provider = self.provider_factory.create(service)?;
        self.narrate_segments(
            provider.as_ref(),
            document_id,
            translated_text,
            original_text,
            language,
        )
        .await
    }

    async fn segments_for_document(
        &self,
        document_id: &str,
    ) -> Result<SegmentManifest, TtsServiceError> {
        self.manifest_store
            .find_by_document(document_id)
            .await?
            .ok_or(TtsServiceError::ManifestNotFound)
    }

    fn supported_languages(&self, service: &str) -> Result<Vec<String>, TtsServiceError> {
        Ok(self.provider_factory.supported_languages(service)?)
    }
}

impl TtsService {
    /// Synthesize text and write the audio next to its metadata.
    async fn synthesize_to_file(
        &self,
        provider: &dyn TtsProvider,
        text: &str,
        language: &str,
        slow: bool,
        output_path: &Path,
    ) -> Result<AudioFile, TtsServiceError> {
        let audio_data = provider.synthesize(text, language, slow).await?;
        tokio::fs::write(output_path, &audio_data).await?;

        Ok(AudioFile {
            audio_path: output_path.to_string_lossy().to_string(),
            language: language.to_string(),
            service: provider.name().to_string(),
            file_size: audio_data.len() as u64,
            // gtts does not report playback duration
            duration: None,
        })
    }

    /// Narrate the translated text sentence by sentence, align each audio
    /// segment to the original-language segment at the same ordinal position,
    /// and persist the manifest (overwriting any earlier one).
    async fn narrate_segments(
        &self,
        provider: &dyn TtsProvider,
        document_id: &str,
        translated_text: &str,
        original_text: &str,
        language: &str,
    ) -> Result<SegmentNarration, TtsServiceError> {
        let translated_segments = create_sentence_segments(translated_text);
        let original_segments = if original_text.trim().is_empty() {
            Vec::new()
        } else {
            create_sentence_segments(original_text)
        };

        let document_audio_dir = self.audio_dir.join(document_id);
        tokio::fs::create_dir_all(&document_audio_dir).await?;

        let mut segments = self
            .generate_with_timestamps(
                provider,
                &translated_segments,
                language,
                &document_audio_dir,
            )
            .await;

        // Positional alignment: i-th audio segment to i-th original segment.
        // No semantic matching; when the original runs out the counterpart
        // stays empty.
        for (index, outcome) in segments.iter_mut().enumerate() {
            if let SegmentOutcome::Audio(segment) = outcome {
                segment.original_text = original_segments
                    .get(index)
                    .map(|original| original.text.clone())
                    .unwrap_or_default();
            }
        }

        let manifest = SegmentManifest {
            document_id: document_id.to_string(),
            language: language.to_string(),
            segment_type: "sentence".to_string(),
            segments,
        };
        self.manifest_store.save(&manifest).await?;

        tracing::info!(
            document_id = %document_id,
            language = %language,
            total_segments = manifest.segments.len(),
            failed_segments = manifest.segments.iter().filter(|s| s.is_failed()).count(),
            "Segment narration stored"
        );

        Ok(SegmentNarration {
            document_id: document_id.to_string(),
            language: language.to_string(),
            segment_type: "sentence".to_string(),
            total_segments: manifest.segments.len(),
            segments: manifest.segments,
            audio_directory: document_id.to_string(),
        })
    }

    /// Synthesize each segment into `segment_{id}.mp3` under `output_dir`.
    /// Segments that are empty after trimming are skipped entirely, so the
    /// output can be shorter than the input; per-segment failures are
    /// captured inline rather than aborting the batch.
    async fn generate_with_timestamps(
        &self,
        provider: &dyn TtsProvider,
        segments: &[Segment],
        language: &str,
        output_dir: &Path,
    ) -> Vec<SegmentOutcome> {
        let mut outcomes = Vec::with_capacity(segments.len());

        for segment in segments {
            if segment.text.trim().is_empty() {
                continue;
            }

            let output_path = output_dir.join(format!("segment_{}.mp3", segment.id));

            match self
                .synthesize_to_file(provider, &segment.text, language, false, &output_path)
                .await
            {
                Ok(audio) => outcomes.push(SegmentOutcome::Audio(AudioSegment {
                    segment_id: segment.id,
                    audio_path: audio.audio_path,
                    language: audio.language,
                    service: audio.service,
                    file_size: audio.file_size,
                    duration: audio.duration,
                    text: segment.text.clone(),
                    start_char: segment.start_char,
                    end_char: segment.end_char,
                    original_text: String::new(),
                })),
                Err(e) => outcomes.push(SegmentOutcome::Failed {
                    segment_id: segment.id,
                    error: e.to_string(),
                    text: segment.text.clone(),
                }),
            }
        }

        outcomes
    }
}
