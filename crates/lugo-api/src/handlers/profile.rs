use axum::{extract::State, Json};
use validator::Validate;

use lugo_core::domain::{Profile, ProfileUpdate};

use crate::{
    extractors::AuthSession,
    response::{ok, ApiResult},
    state::AppState,
};

pub async fn get_profile(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
) -> ApiResult<Profile> {
    ok(state.profiles.get_own(&session).await?)
}

pub async fn update_profile(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Json(payload): Json<ProfileUpdate>,
) -> ApiResult<Profile> {
    payload.validate()?;
    ok(state.profiles.complete(&session, payload).await?)
}
