//! Application configuration structures
//!
//! Populated by the infra config loader from environment variables or a
//! config file; see `inficard-infra::config`.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STORAGE_BUCKET;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub supabase: SupabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Hosted backend (PostgREST + object storage) connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`.
    pub url: String,
    /// Anonymous API key sent as `apikey` and bearer token.
    pub anon_key: String,
    /// Storage bucket holding generated QR images.
    #[serde(default = "default_bucket")]
    pub bucket: String,
}

fn default_bucket() -> String {
    DEFAULT_STORAGE_BUCKET.to_string()
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self { url: String::new(), anon_key: String::new(), bucket: default_bucket() }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Public origin used when deriving shareable card URLs.
    #[serde(default = "default_public_origin")]
    pub public_origin: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_public_origin() -> String {
    "http://127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { listen_addr: default_listen_addr(), public_origin: default_public_origin() }
    }
}
