//! Application services

pub mod auth_service;
pub mod profile_service;
pub mod property_service;
pub mod tenant_service;
pub mod lease_service;
pub mod receipt_service;
pub mod catalog_service;
pub mod upload_service;
pub mod dashboard_service;

pub use auth_service::{AuthService, SignInResult};
pub use profile_service::ProfileService;
pub use property_service::PropertyService;
pub use tenant_service::TenantService;
pub use lease_service::{LeaseService, LeaseTermination};
pub use receipt_service::{GeneratedReceipt, ReceiptRequest, ReceiptService};
pub use catalog_service::{CatalogService, OwnerCatalog, PublicProperty};
pub use upload_service::{SignedUpload, StoredObject, UploadPolicy, UploadService};
pub use dashboard_service::{DashboardService, DashboardSummary};
