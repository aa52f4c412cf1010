//! # Lugo Security
//! 
//! Security utilities: JWT, password hashing and the explicit user session.

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{Claims, JwtError, JwtService};
pub use password::{PasswordError, PasswordService};
pub use session::Session;
