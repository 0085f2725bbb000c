//! Supabase adapters
//!
//! Thin clients over the hosted PostgREST API (`/rest/v1`) and object
//! storage API (`/storage/v1`), implementing the core store ports.

mod rest;
mod storage;

pub use rest::SupabaseRestClient;
pub use storage::SupabaseStorageClient;

use std::time::Duration;

use inficard_domain::{InficardError, Result};

use crate::errors::InfraError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shared reqwest client construction. One attempt per call: the workflows
/// never retry, resubmission is the user's retry path.
pub(crate) fn build_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .map_err(|err| {
            let infra: InfraError = err.into();
            InficardError::from(infra)
        })
}

/// Trim a trailing slash so endpoint formatting stays predictable.
pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
