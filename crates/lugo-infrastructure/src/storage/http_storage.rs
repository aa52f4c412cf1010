// ============================================================================
// Lugo Infrastructure - HTTP Object Storage
// File: crates/lugo-infrastructure/src/storage/http_storage.rs
// Description: Client for a Supabase-compatible `/storage/v1` REST API
// ============================================================================

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use lugo_core::error::DomainError;
use lugo_core::repositories::ObjectStorage;
use lugo_core::storage_paths::{encode_object_path, storage_path_from_url};
use lugo_shared::config::StorageSettings;

#[derive(Clone)]
pub struct HttpObjectStorage {
    client: Client,
    base_url: String,
    bucket: String,
    service_key: String,
}

#[derive(Serialize)]
struct RemoveRequest<'a> {
    prefixes: &'a [String],
}

#[derive(Deserialize)]
struct SignedUploadResponse {
    url: String,
}

impl HttpObjectStorage {
    pub fn new(settings: &StorageSettings) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| DomainError::StorageError(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            bucket: settings.bucket.clone(),
            service_key: settings.service_key.clone(),
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    fn object_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url,
            self.bucket,
            encode_object_path(path)
        )
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("Authorization", format!("Bearer {}", self.service_key))
            .header("apikey", &self.service_key)
    }

    async fn check(response: reqwest::Response, action: &str) -> Result<reqwest::Response, DomainError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        error!("Storage {} failed ({}): {}", action, status, body);
        Err(DomainError::StorageError(format!("{} failed ({}): {}", action, status, body)))
    }
}

fn network_error(action: &str, e: reqwest::Error) -> DomainError {
    error!("Storage {} network error: {}", action, e);
    DomainError::StorageError(format!("{} network error: {}", action, e))
}

#[async_trait]
impl ObjectStorage for HttpObjectStorage {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), DomainError> {
        debug!("Uploading {} bytes to {}", bytes.len(), path);
        let response = self
            .authorized(self.client.post(self.object_url(path)))
            .header("Content-Type", content_type)
            .header("x-upsert", if upsert { "true" } else { "false" })
            .body(bytes)
            .send()
            .await
            .map_err(|e| network_error("upload", e))?;

        Self::check(response, "upload").await?;
        Ok(())
    }

    async fn remove(&self, paths: &[String]) -> Result<(), DomainError> {
        if paths.is_empty() {
            return Ok(());
        }
        let url = format!("{}/storage/v1/object/{}", self.base_url, self.bucket);
        let response = self
            .authorized(self.client.delete(url))
            .json(&RemoveRequest { prefixes: paths })
            .send()
            .await
            .map_err(|e| network_error("remove", e))?;

        Self::check(response, "remove").await?;
        debug!("Removed {} objects from {}", paths.len(), self.bucket);
        Ok(())
    }

    async fn create_signed_upload_url(&self, path: &str) -> Result<String, DomainError> {
        let url = format!(
            "{}/storage/v1/object/upload/sign/{}/{}",
            self.base_url,
            self.bucket,
            encode_object_path(path)
        );
        let response = self
            .authorized(self.client.post(url))
            .send()
            .await
            .map_err(|e| network_error("sign", e))?;

        let body: SignedUploadResponse = Self::check(response, "sign")
            .await?
            .json()
            .await
            .map_err(|e| DomainError::StorageError(format!("Invalid sign response: {}", e)))?;

        Ok(format!("{}/storage/v1{}", self.base_url, body.url))
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url,
            self.bucket,
            encode_object_path(path)
        )
    }

    fn object_path(&self, public_url: &str) -> Option<String> {
        storage_path_from_url(public_url, &self.bucket)
    }
}
