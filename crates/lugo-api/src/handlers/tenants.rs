use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use lugo_core::domain::{Tenant, TenantDraft};

use crate::{
    error::ApiError,
    extractors::AuthSession,
    response::{ok, ApiResponse, ApiResult},
    state::AppState,
};

pub async fn list_tenants(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(property_id): Path<Uuid>,
) -> ApiResult<Vec<Tenant>> {
    ok(state.tenants.history(&session, &property_id).await?)
}

pub async fn register_tenant(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(property_id): Path<Uuid>,
    Json(draft): Json<TenantDraft>,
) -> Result<(StatusCode, Json<ApiResponse<Tenant>>), ApiError> {
    draft.validate()?;
    let tenant = state.tenants.register(&session, &property_id, draft).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(tenant))))
}
