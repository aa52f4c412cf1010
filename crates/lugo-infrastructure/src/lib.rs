//! # Lugo Infrastructure
//!
//! Adapters for the core ports: PostgreSQL repositories, HTTP object
//! storage, session stores and the PDF receipt renderer.

pub mod database;
pub mod cache;
pub mod storage;
pub mod pdf;

pub use database::{
    create_pool, run_migrations, PgProfileRepository, PgPropertyRepository, PgReceiptRepository,
    PgTenantRepository, PgUserRepository,
};
pub use cache::{MemorySessionStore, RedisSessionStore};
pub use storage::HttpObjectStorage;
pub use pdf::PdfReceiptRenderer;
