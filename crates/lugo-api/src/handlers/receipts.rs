//! Receipt generation and preview

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::{error, info};
use validator::Validate;

use lugo_core::receipt::ReceiptData;

use crate::{
    dto::{GenerateReceiptBody, GenerateReceiptResponse, ReceiptDataDto},
    error::ApiError,
    extractors::AuthSession,
    state::AppState,
};

/// `POST /api/pdf/generate`. Any failure past authentication answers 500
/// with `{success: false, error}`.
pub async fn generate_receipt(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    body: Result<Json<GenerateReceiptBody>, JsonRejection>,
) -> (StatusCode, Json<GenerateReceiptResponse>) {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            error!("Invalid receipt request: {}", rejection.body_text());
            return failure(rejection.body_text());
        }
    };

    let request = body.into();
    match state.receipts.generate(&session, request).await {
        Ok(generated) => {
            info!("Receipt {} generated", generated.receipt.id);
            (
                StatusCode::OK,
                Json(GenerateReceiptResponse::ok(generated.pdf_url, generated.pdf_bytes)),
            )
        }
        Err(e) => {
            error!("Receipt generation failed: {}", e);
            failure(e.to_string())
        }
    }
}

fn failure(message: String) -> (StatusCode, Json<GenerateReceiptResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(GenerateReceiptResponse::failed(message)),
    )
}

pub async fn preview_receipt(
    State(state): State<AppState>,
    AuthSession(_session): AuthSession,
    Json(payload): Json<ReceiptDataDto>,
) -> Result<Html<String>, ApiError> {
    let data: ReceiptData = payload.into();
    data.validate()?;
    Ok(Html(state.receipts.preview(&data)?))
}
