//! # Inficard Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Supabase REST and storage adapters (reqwest)
//! - The QR raster renderer
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `inficard-core`
//! - Depends on `inficard-domain` and `inficard-core`
//! - Contains all "impure" code (network, image encoding)

pub mod config;
pub mod errors;
pub mod qr;
pub mod supabase;

// Re-export commonly used items
pub use qr::QrPngRenderer;
pub use supabase::{SupabaseRestClient, SupabaseStorageClient};
