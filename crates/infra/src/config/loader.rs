//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `INFICARD_SUPABASE_URL`: Supabase project base URL (required)
//! - `INFICARD_SUPABASE_ANON_KEY`: Supabase anonymous API key (required)
//! - `INFICARD_BUCKET`: Storage bucket for QR images (default `qrcodes`)
//! - `INFICARD_LISTEN_ADDR`: Bind address (default `127.0.0.1:8080`)
//! - `INFICARD_PUBLIC_ORIGIN`: Origin for shareable card URLs
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.toml` or `./config.json` (current working directory)
//! 2. `./inficard.toml` or `./inficard.json` (current working directory)
//! 3. `../config.toml` or `../config.json` (parent directory)

use std::path::PathBuf;

use inficard_domain::{Config, InficardError, Result, ServerConfig, SupabaseConfig};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `InficardError::Config` if configuration cannot be loaded from
/// either source, or the loaded values are incomplete.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `InficardError::Config` if a required variable is missing.
pub fn load_from_env() -> Result<Config> {
    let url = env_var("INFICARD_SUPABASE_URL")?;
    let anon_key = env_var("INFICARD_SUPABASE_ANON_KEY")?;

    let defaults = Config::default();
    let bucket =
        std::env::var("INFICARD_BUCKET").unwrap_or_else(|_| defaults.supabase.bucket.clone());
    let listen_addr = std::env::var("INFICARD_LISTEN_ADDR")
        .unwrap_or_else(|_| defaults.server.listen_addr.clone());
    let public_origin = std::env::var("INFICARD_PUBLIC_ORIGIN")
        .unwrap_or_else(|_| format!("http://{listen_addr}"));

    let config = Config {
        supabase: SupabaseConfig { url, anon_key, bucket },
        server: ServerConfig { listen_addr, public_origin },
    };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both TOML and JSON formats (detected by file extension).
///
/// # Errors
/// Returns `InficardError::Config` if the file is missing, the format is
/// invalid, or required fields are absent.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(InficardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            InficardError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    let contents = std::fs::read_to_string(&config_path).map_err(|e| {
        InficardError::Config(format!("Failed to read {}: {}", config_path.display(), e))
    })?;

    let config: Config = match config_path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&contents)
            .map_err(|e| InficardError::Config(format!("Invalid TOML config: {e}")))?,
        Some("json") => serde_json::from_str(&contents)
            .map_err(|e| InficardError::Config(format!("Invalid JSON config: {e}")))?,
        _ => {
            return Err(InficardError::Config(format!(
                "Unsupported config format: {}",
                config_path.display()
            )))
        }
    };

    validate(&config)?;
    tracing::info!(path = %config_path.display(), "Configuration loaded from file");
    Ok(config)
}

/// Probe the standard config file locations, returning the first that exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let candidates = [
        "config.toml",
        "config.json",
        "inficard.toml",
        "inficard.json",
        "../config.toml",
        "../config.json",
    ];
    candidates.iter().map(PathBuf::from).find(|p| p.exists())
}

fn validate(config: &Config) -> Result<()> {
    if config.supabase.url.trim().is_empty() {
        return Err(InficardError::Config("Supabase URL is required".to_string()));
    }
    if config.supabase.anon_key.trim().is_empty() {
        return Err(InficardError::Config("Supabase anon key is required".to_string()));
    }
    Ok(())
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| InficardError::Config(format!("Missing environment variable: {name}")))
}
