use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use lugo_core::domain::User;

use crate::{
    dto::{LoginRequest, LoginResponse, RegisterRequest},
    error::ApiError,
    extractors::AuthSession,
    response::{ok, ApiResponse, ApiResult},
    state::AppState,
};

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    payload.validate()?;
    let user = state.auth.register(&payload.email, &payload.password).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(user))))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    payload.validate()?;
    let result = state.auth.sign_in(&payload.email, &payload.password).await?;

    ok(LoginResponse {
        access_token: result.access_token,
        token_type: "Bearer".to_string(),
        expires_at: result.session.expires_at,
        user: result.user,
    })
}

pub async fn logout(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
) -> ApiResult<()> {
    state.auth.sign_out(&session).await?;
    ok(())
}
