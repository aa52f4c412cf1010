//! Repository traits (ports)

pub mod property_repository;
pub mod tenant_repository;
pub mod receipt_repository;
pub mod profile_repository;
pub mod user_repository;
pub mod object_storage;
pub mod session_store;

pub use property_repository::PropertyRepository;
pub use tenant_repository::TenantRepository;
pub use receipt_repository::ReceiptRepository;
pub use profile_repository::ProfileRepository;
pub use user_repository::UserRepository;
pub use object_storage::ObjectStorage;
pub use session_store::SessionStore;

#[cfg(any(test, feature = "mocks"))]
pub use property_repository::MockPropertyRepository;
#[cfg(any(test, feature = "mocks"))]
pub use tenant_repository::MockTenantRepository;
#[cfg(any(test, feature = "mocks"))]
pub use receipt_repository::MockReceiptRepository;
#[cfg(any(test, feature = "mocks"))]
pub use profile_repository::MockProfileRepository;
#[cfg(any(test, feature = "mocks"))]
pub use user_repository::MockUserRepository;
#[cfg(any(test, feature = "mocks"))]
pub use object_storage::MockObjectStorage;
#[cfg(any(test, feature = "mocks"))]
pub use session_store::MockSessionStore;
