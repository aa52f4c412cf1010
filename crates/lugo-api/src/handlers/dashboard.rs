use axum::extract::State;

use lugo_core::services::DashboardSummary;

use crate::{
    extractors::AuthSession,
    response::{ok, ApiResult},
    state::AppState,
};

pub async fn summary(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
) -> ApiResult<DashboardSummary> {
    ok(state.dashboard.summary(&session).await?)
}
