//! # Lugo Shared
//! 
//! Shared configuration, telemetry, validators and formatters for the Lugo
//! rental management application.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;
pub mod validators;
pub mod formatters;

pub use types::*;
pub use error::AppError;
