//! # Inficard API
//!
//! Application layer - HTTP surface and wiring.
//!
//! This crate contains:
//! - The axum router and page handlers
//! - Application context (dependency injection)
//! - HTML templates and the main entry point
//!
//! ## Architecture
//! - Depends on `inficard-domain`, `inficard-core`, and `inficard-infra`
//! - Wires up the hexagonal architecture
//! - Serves the creation form and the public card viewer

pub mod context;
pub mod handlers;
pub mod routes;
pub mod templates;

// Re-export for convenience
pub use context::AppContext;
pub use routes::router;
