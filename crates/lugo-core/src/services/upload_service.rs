//! Property photo uploads.

use std::sync::Arc;
use serde::Serialize;
use tracing::{info, warn};

use lugo_security::Session;
use lugo_shared::types::now_millis;
use lugo_shared::validators::{validate_file_size, validate_file_type};

use crate::error::DomainError;
use crate::repositories::ObjectStorage;
use crate::storage_paths::{is_user_path, upload_object_path};

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_size_mb: u64,
    /// Content type prefixes, e.g. `image/`.
    pub allowed_types: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoredObject {
    pub path: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignedUpload {
    pub path: String,
    pub signed_url: String,
    pub public_url: String,
}

pub struct UploadService {
    storage: Arc<dyn ObjectStorage>,
    policy: UploadPolicy,
}

impl UploadService {
    pub fn new(storage: Arc<dyn ObjectStorage>, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }

    pub async fn upload_photo(
        &self,
        session: &Session,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, DomainError> {
        if !validate_file_type(content_type, &self.policy.allowed_types) {
            return Err(DomainError::ValidationError(format!(
                "File type not allowed: {}",
                content_type
            )));
        }
        if !validate_file_size(bytes.len() as u64, self.policy.max_size_mb) {
            return Err(DomainError::ValidationError(format!(
                "File exceeds {} MB",
                self.policy.max_size_mb
            )));
        }

        let path = upload_object_path(&session.user_id, now_millis(), file_name);
        self.storage.upload(&path, bytes, content_type, false).await?;
        let url = self.storage.public_url(&path);

        info!("Photo uploaded by {} to {}", session.user_id, path);
        Ok(StoredObject { path, url })
    }

    pub async fn signed_upload(&self, session: &Session, path: &str) -> Result<SignedUpload, DomainError> {
        if !is_user_path(&session.user_id, path) {
            warn!("Signed URL refused for {} outside user prefix: {}", session.user_id, path);
            return Err(DomainError::Forbidden("Path outside the user folder".to_string()));
        }

        let signed_url = self.storage.create_signed_upload_url(path).await?;
        Ok(SignedUpload {
            path: path.to_string(),
            public_url: self.storage.public_url(path),
            signed_url,
        })
    }
}
