//! Object storage trait (port)

use async_trait::async_trait;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores `bytes` at `path`. With `upsert == false` an existing object
    /// makes the call fail instead of being replaced.
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), DomainError>;

    /// Bulk delete.
    async fn remove(&self, paths: &[String]) -> Result<(), DomainError>;

    /// Signed URL the client can PUT an object to.
    async fn create_signed_upload_url(&self, path: &str) -> Result<String, DomainError>;

    fn public_url(&self, path: &str) -> String;

    /// Inverse of [`ObjectStorage::public_url`]: the object path inside the
    /// bucket, `None` when the URL does not point into it.
    fn object_path(&self, public_url: &str) -> Option<String>;
}
