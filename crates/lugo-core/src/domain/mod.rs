//! # Lugo Core - Domain Module
//!
//! Domain entities mapped 1:1 from the database rows.

pub mod property;
pub mod tenant;
pub mod receipt;
pub mod profile;

// Re-export all entities and enums
pub use property::{Address, Inclusions, Pricing, Property, PropertyDetails, PropertyDraft, PropertyStatus};
pub use tenant::{Tenant, TenantDraft, TenantStatus};
pub use receipt::Receipt;
pub use profile::{Profile, ProfileUpdate, User};
