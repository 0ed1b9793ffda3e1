use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};
use std::path::Component;
use std::sync::Arc;

use crate::{
    domain::tts::{
        AudioFile, DocumentNarration, SegmentManifest, SegmentOutcome, TtsService, TtsServiceApi,
    },
    error::{AppError, AppResult},
};

fn default_language() -> String {
    "en".to_string()
}

fn default_service() -> String {
    "gtts".to_string()
}

fn default_segment_type() -> String {
    "sentence".to_string()
}

/// Request for POST /api/tts/generate
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_service")]
    pub service: String,
    #[serde(default)]
    pub slow: bool,
}

/// Request for POST /api/tts/generate-document
#[derive(Debug, Deserialize)]
pub struct GenerateDocumentRequest {
    pub document_id: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_service")]
    pub service: String,
    #[serde(default = "default_segment_type")]
    pub segment_type: String,
}

/// Request for POST /api/tts/generate-custom
#[derive(Debug, Deserialize)]
pub struct GenerateCustomRequest {
    pub document_id: Option<String>,
    #[serde(default)]
    pub translated_text: String,
    #[serde(default)]
    pub original_text: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_service")]
    pub service: String,
    #[serde(default = "default_segment_type")]
    pub segment_type: String,
}

#[derive(Debug, Deserialize)]
pub struct ServiceQuery {
    #[serde(default = "default_service")]
    pub service: String,
}

/// A generated audio file plus the advisory duration estimate
#[derive(Debug, Serialize)]
pub struct GeneratedAudioBody {
    #[serde(flatten)]
    pub audio: AudioFile,
    pub estimated_duration: f64,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub audio: GeneratedAudioBody,
    pub audio_filename: String,
}

#[derive(Debug, Serialize)]
pub struct SegmentsGeneratedResponse {
    pub success: bool,
    pub document_id: String,
    pub language: String,
    pub segment_type: String,
    pub total_segments: usize,
    pub segments: Vec<SegmentOutcome>,
    pub audio_directory: String,
}

#[derive(Debug, Serialize)]
pub struct FullAudioResponse {
    pub success: bool,
    pub document_id: String,
    pub language: String,
    pub segment_type: String,
    pub audio: AudioFile,
    pub audio_filename: String,
}

/// POST /api/tts/generate-document returns one of two shapes depending on
/// the requested segment type.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GenerateDocumentResponse {
    Segments(SegmentsGeneratedResponse),
    Full(FullAudioResponse),
}

#[derive(Debug, Serialize)]
pub struct SegmentManifestResponse {
    pub success: bool,
    pub segments: SegmentManifest,
}

#[derive(Debug, Serialize)]
pub struct SupportedLanguagesResponse {
    pub success: bool,
    pub service: String,
    pub languages: Vec<String>,
}

pub struct TtsController {
    tts_service: Arc<TtsService>,
    audio_dir: std::path::PathBuf,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>, audio_dir: std::path::PathBuf) -> Self {
        Self {
            tts_service,
            audio_dir,
        }
    }

    /// POST /api/tts/generate - Synthesize one piece of text
    pub async fn generate(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<GenerateRequest>,
    ) -> AppResult<Json<GenerateResponse>> {
        if request.text.is_empty() {
            return Err(AppError::BadRequest("No text provided".to_string()));
        }

        let generated = controller
            .tts_service
            .generate(
                &request.text,
                &request.language,
                &request.service,
                request.slow,
            )
            .await?;

        Ok(Json(GenerateResponse {
            success: true,
            audio: GeneratedAudioBody {
                audio: generated.audio,
                estimated_duration: generated.estimated_duration,
            },
            audio_filename: generated.audio_filename,
        }))
    }

    /// POST /api/tts/generate-document - Narrate a translated document
    pub async fn generate_document(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<GenerateDocumentRequest>,
    ) -> AppResult<Json<GenerateDocumentResponse>> {
        let document_id = request
            .document_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::BadRequest("No document_id provided".to_string()))?;

        let narration = controller
            .tts_service
            .generate_for_document(
                &document_id,
                &request.language,
                &request.service,
                &request.segment_type,
            )
            .await?;

        let response = match narration {
            DocumentNarration::Segments(narration) => {
                GenerateDocumentResponse::Segments(SegmentsGeneratedResponse {
                    success: true,
                    document_id,
                    language: narration.language,
                    segment_type: narration.segment_type,
                    total_segments: narration.total_segments,
                    segments: narration.segments,
                    audio_directory: narration.audio_directory,
                })
            }
            DocumentNarration::Full {
                audio,
                audio_filename,
            } => GenerateDocumentResponse::Full(FullAudioResponse {
                success: true,
                document_id,
                language: request.language,
                segment_type: "full".to_string(),
                audio,
                audio_filename,
            }),
        };

        Ok(Json(response))
    }

    /// POST /api/tts/generate-custom - Narrate caller-supplied text
    pub async fn generate_custom(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<GenerateCustomRequest>,
    ) -> AppResult<Json<SegmentsGeneratedResponse>> {
        let document_id = request
            .document_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                AppError::BadRequest("document_id and translated_text are required".to_string())
            })?;

        if request.translated_text.is_empty() {
            return Err(AppError::BadRequest(
                "document_id and translated_text are required".to_string(),
            ));
        }

        if request.segment_type != "sentence" {
            return Err(AppError::BadRequest(
                "Only sentence segment_type is supported".to_string(),
            ));
        }

        let narration = controller
            .tts_service
            .generate_custom(
                &document_id,
                &request.translated_text,
                &request.original_text,
                &request.language,
                &request.service,
            )
            .await?;

        Ok(Json(SegmentsGeneratedResponse {
            success: true,
            document_id,
            language: narration.language,
            segment_type: narration.segment_type,
            total_segments: narration.total_segments,
            segments: narration.segments,
            audio_directory: narration.audio_directory,
        }))
    }

    /// GET /api/tts/audio/{filename} - Serve a generated audio file
    pub async fn get_audio(
        State(controller): State<Arc<TtsController>>,
        Path(filename): Path<String>,
    ) -> AppResult<(HeaderMap, Body)> {
        // The path may contain a document subdirectory, but never a parent
        // traversal.
        let relative = std::path::Path::new(&filename);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(AppError::BadRequest("Invalid audio path".to_string()));
        }

        let audio_path = controller.audio_dir.join(relative);
        let bytes = match tokio::fs::read(&audio_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::NotFound("Audio file not found".to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());

        Ok((headers, Body::from(bytes)))
    }

    /// GET /api/tts/segments/{document_id} - Persisted segment manifest
    pub async fn get_segments(
        State(controller): State<Arc<TtsController>>,
        Path(document_id): Path<String>,
    ) -> AppResult<Json<SegmentManifestResponse>> {
        let manifest = controller
            .tts_service
            .segments_for_document(&document_id)
            .await?;

        Ok(Json(SegmentManifestResponse {
            success: true,
            segments: manifest,
        }))
    }

    /// GET /api/tts/supported-languages - Languages for a TTS service
    pub async fn supported_languages(
        State(controller): State<Arc<TtsController>>,
        Query(query): Query<ServiceQuery>,
    ) -> AppResult<Json<SupportedLanguagesResponse>> {
        let languages = controller.tts_service.supported_languages(&query.service)?;

        Ok(Json(SupportedLanguagesResponse {
            success: true,
            service: query.service,
            languages,
        }))
    }
}
