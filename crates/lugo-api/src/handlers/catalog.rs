//! Public catalog pages, no session required

use axum::extract::{Path, State};
use uuid::Uuid;

use lugo_core::services::{OwnerCatalog, PublicProperty};

use crate::{
    response::{ok, ApiResult},
    state::AppState,
};

pub async fn owner_catalog(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
) -> ApiResult<OwnerCatalog> {
    ok(state.catalog.owner_catalog(&owner_id).await?)
}

pub async fn public_property(
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
) -> ApiResult<PublicProperty> {
    ok(state.catalog.property_page(&property_id).await?)
}
