//! # Lugo Core
//! 
//! Domain entities, services, receipt layout and repository traits for the
//! Lugo rental management application.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod receipt;
pub mod storage_paths;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
