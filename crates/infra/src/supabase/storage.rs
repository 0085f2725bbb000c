//! Object storage client for the QR image bucket

use async_trait::async_trait;
use inficard_core::card::ports::QrImageStore;
use inficard_domain::{InficardError, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use super::{build_http_client, normalize_base_url};
use crate::errors::InfraError;

const HEADER_APIKEY: &str = "apikey";
const HEADER_UPSERT: &str = "x-upsert";

/// Client for the hosted blob container holding generated QR images.
pub struct SupabaseStorageClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
    bucket: String,
}

impl SupabaseStorageClient {
    /// Create a new storage client for the given project.
    pub fn new(config: &inficard_domain::SupabaseConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client()?,
            base_url: normalize_base_url(&config.url),
            anon_key: config.anon_key.clone(),
            bucket: config.bucket.clone(),
        })
    }

    fn object_endpoint(&self, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, key)
    }
}

#[async_trait]
impl QrImageStore for SupabaseStorageClient {
    async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        let response = self
            .client
            .post(self.object_endpoint(key))
            .header(HEADER_APIKEY, &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.anon_key))
            .header(HEADER_UPSERT, "true")
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|err| {
                let infra: InfraError = err.into();
                InficardError::from(infra)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InficardError::Store(format!(
                "object upload failed with status {status}: {body}"
            )));
        }
        debug!(key, "QR image uploaded");
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{}", self.base_url, self.bucket, key)
    }
}
