use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    domain::document::{DocumentService, DocumentServiceApi, ExtractedDocument},
    error::{AppError, AppResult},
};

/// Response for POST /api/upload: the extracted document plus a success flag
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(flatten)]
    pub document: ExtractedDocument,
}

/// Response for GET /api/document/{document_id}
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub success: bool,
    pub document_id: String,
    pub data: ExtractedDocument,
}

pub struct DocumentController {
    document_service: Arc<DocumentService>,
}

impl DocumentController {
    pub fn new(document_service: Arc<DocumentService>) -> Self {
        Self { document_service }
    }

    /// POST /api/upload - Upload a PDF and extract its text
    pub async fn upload(
        State(controller): State<Arc<DocumentController>>,
        mut multipart: Multipart,
    ) -> AppResult<Json<UploadResponse>> {
        let mut file: Option<(String, Vec<u8>)> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Malformed multipart request: {}", e)))?
        {
            if field.name() == Some("file") {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        AppError::BadRequest(format!("Failed to read uploaded file: {}", e))
                    })?
                    .to_vec();
                file = Some((filename, data));
            }
        }

        let (filename, data) =
            file.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;

        let document = controller
            .document_service
            .process_upload(&filename, data)
            .await?;

        Ok(Json(UploadResponse {
            success: true,
            document,
        }))
    }

    /// GET /api/document/{document_id} - Retrieve the extracted artifact
    pub async fn get_document(
        State(controller): State<Arc<DocumentController>>,
        Path(document_id): Path<String>,
    ) -> AppResult<Json<DocumentResponse>> {
        let document = controller.document_service.get_document(&document_id).await?;

        Ok(Json(DocumentResponse {
            success: true,
            document_id,
            data: document,
        }))
    }
}
