//! # Lugo API
//!
//! HTTP handlers, DTOs, the session extractor and the router.

pub mod handlers;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;

#[cfg(test)]
pub(crate) mod test_support;
