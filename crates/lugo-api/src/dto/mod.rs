//! Request and response bodies

pub mod auth;
pub mod property;
pub mod receipt;
pub mod upload;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest};
pub use property::StatusChange;
pub use receipt::{GenerateReceiptBody, GenerateReceiptResponse, ReceiptDataDto};
pub use upload::SignedUrlRequest;
