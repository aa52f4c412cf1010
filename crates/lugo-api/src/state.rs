use std::sync::Arc;

use sqlx::PgPool;

use lugo_core::services::{
    AuthService, CatalogService, DashboardService, LeaseService, ProfileService, PropertyService,
    ReceiptService, TenantService, UploadService,
};
use lugo_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: AppConfig,
    pub auth: Arc<AuthService>,
    pub profiles: Arc<ProfileService>,
    pub properties: Arc<PropertyService>,
    pub tenants: Arc<TenantService>,
    pub leases: Arc<LeaseService>,
    pub receipts: Arc<ReceiptService>,
    pub catalog: Arc<CatalogService>,
    pub uploads: Arc<UploadService>,
    pub dashboard: Arc<DashboardService>,
}
