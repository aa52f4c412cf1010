//! Photo uploads

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use validator::Validate;

use lugo_core::services::{SignedUpload, StoredObject};

use crate::{
    dto::SignedUrlRequest,
    error::ApiError,
    extractors::AuthSession,
    response::{ok, ApiResponse, ApiResult},
    state::AppState,
};

/// Multipart upload; the photo is the `file` field.
pub async fn upload_photo(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<StoredObject>>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("foto.jpg").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;

        debug!("Received {} ({}, {} bytes)", file_name, content_type, bytes.len());
        let stored = state
            .uploads
            .upload_photo(&session, &file_name, &content_type, bytes.to_vec())
            .await?;
        return Ok((StatusCode::CREATED, Json(ApiResponse::success(stored))));
    }

    Err(ApiError::BadRequest("Missing file field".to_string()))
}

pub async fn signed_upload_url(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Json(payload): Json<SignedUrlRequest>,
) -> ApiResult<SignedUpload> {
    payload.validate()?;
    ok(state.uploads.signed_upload(&session, &payload.path).await?)
}
