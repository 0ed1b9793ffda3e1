use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::translation::{
        DocumentTranslation, TranslationResult, TranslationService, TranslationServiceApi,
    },
    error::{AppError, AppResult},
};

fn default_target_lang() -> String {
    "en".to_string()
}

fn default_source_lang() -> String {
    "auto".to_string()
}

fn default_service() -> String {
    "google".to_string()
}

/// Request for POST /api/translate
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_service")]
    pub service: String,
}

/// Request for POST /api/translate/document
#[derive(Debug, Deserialize)]
pub struct TranslateDocumentRequest {
    pub document_id: Option<String>,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_service")]
    pub service: String,
    /// Fail the whole translation on any chunk error instead of dropping
    /// the failed chunk from the reassembled text.
    #[serde(default)]
    pub strict: bool,
}

/// Request for POST /api/detect-language
#[derive(Debug, Deserialize)]
pub struct DetectLanguageRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ServiceQuery {
    #[serde(default = "default_service")]
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub success: bool,
    pub translation: TranslationResult,
}

#[derive(Debug, Serialize)]
pub struct TranslateDocumentResponse {
    pub success: bool,
    pub translation: DocumentTranslation,
}

#[derive(Debug, Serialize)]
pub struct DetectionResponse {
    pub success: bool,
    pub detection: Detection,
}

#[derive(Debug, Serialize)]
pub struct Detection {
    pub language: String,
    pub confidence: f64,
}

#[derive(Debug, Serialize)]
pub struct SupportedLanguagesResponse {
    pub success: bool,
    pub service: String,
    pub languages: Vec<String>,
}

pub struct TranslateController {
    translation_service: Arc<TranslationService>,
}

impl TranslateController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /api/translate - Translate a piece of text
    pub async fn translate(
        State(controller): State<Arc<TranslateController>>,
        Json(request): Json<TranslateRequest>,
    ) -> AppResult<Json<TranslateResponse>> {
        if request.text.is_empty() {
            return Err(AppError::BadRequest("No text provided".to_string()));
        }

        let translation = controller
            .translation_service
            .translate_text(
                &request.text,
                &request.target_lang,
                &request.source_lang,
                &request.service,
            )
            .await?;

        Ok(Json(TranslateResponse {
            success: true,
            translation,
        }))
    }

    /// POST /api/translate/document - Translate a stored document
    pub async fn translate_document(
        State(controller): State<Arc<TranslateController>>,
        Json(request): Json<TranslateDocumentRequest>,
    ) -> AppResult<Json<TranslateDocumentResponse>> {
        let document_id = request
            .document_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::BadRequest("No document_id provided".to_string()))?;

        let translation = controller
            .translation_service
            .translate_document(
                &document_id,
                &request.target_lang,
                &request.source_lang,
                &request.service,
                request.strict,
            )
            .await?;

        Ok(Json(TranslateDocumentResponse {
            success: true,
            translation,
        }))
    }

    /// POST /api/detect-language - Detect the language of a text
    pub async fn detect_language(
        State(controller): State<Arc<TranslateController>>,
        Json(request): Json<DetectLanguageRequest>,
    ) -> AppResult<Json<DetectionResponse>> {
        if request.text.is_empty() {
            return Err(AppError::BadRequest("No text provided".to_string()));
        }

        let detection = controller.translation_service.detect_language(&request.text);

        Ok(Json(DetectionResponse {
            success: true,
            detection: Detection {
                language: detection.language,
                confidence: detection.confidence,
            },
        }))
    }

    /// GET /api/supported-languages - Languages for a translation service
    pub async fn supported_languages(
        State(controller): State<Arc<TranslateController>>,
        Query(query): Query<ServiceQuery>,
    ) -> AppResult<Json<SupportedLanguagesResponse>> {
        let languages = controller
            .translation_service
            .supported_languages(&query.service)?;

        Ok(Json(SupportedLanguagesResponse {
            success: true,
            service: query.service,
            languages,
        }))
    }
}
