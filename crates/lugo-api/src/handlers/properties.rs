//! Owner property management

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use lugo_core::domain::{Property, PropertyDraft};
use lugo_core::services::LeaseTermination;

use crate::{
    dto::StatusChange,
    error::ApiError,
    extractors::AuthSession,
    response::{ok, ApiResponse, ApiResult},
    state::AppState,
};

pub async fn list_properties(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
) -> ApiResult<Vec<Property>> {
    ok(state.properties.list_own(&session).await?)
}

pub async fn create_property(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Json(draft): Json<PropertyDraft>,
) -> Result<(StatusCode, Json<ApiResponse<Property>>), ApiError> {
    draft.validate()?;
    let property = state.properties.create(&session, draft).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(property))))
}

pub async fn get_property(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<Uuid>,
) -> ApiResult<Property> {
    ok(state.properties.get_owned(&session, &id).await?)
}

pub async fn update_property(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<Uuid>,
    Json(draft): Json<PropertyDraft>,
) -> ApiResult<Property> {
    draft.validate()?;
    ok(state.properties.update(&session, &id, draft).await?)
}

pub async fn delete_property(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    state.properties.delete(&session, &id).await?;
    ok(())
}

pub async fn change_status(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<Uuid>,
    Json(payload): Json<StatusChange>,
) -> ApiResult<()> {
    state.properties.set_status(&session, &id, payload.status).await?;
    ok(())
}

pub async fn terminate_lease(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<Uuid>,
) -> ApiResult<LeaseTermination> {
    ok(state.leases.terminate_lease(&session, &id).await?)
}

/// Ends the current lease so a new tenant can be registered.
pub async fn change_tenant(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<Uuid>,
) -> ApiResult<LeaseTermination> {
    ok(state.leases.change_tenant(&session, &id).await?)
}
