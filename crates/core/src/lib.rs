//! # Inficard Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The profile validation component
//! - Port/adapter interfaces (traits) for the store clients
//! - The card creation and card viewer workflows
//!
//! ## Architecture Principles
//! - Only depends on `inficard-domain`
//! - No database, HTTP, or platform code
//! - All external collaborators via traits
//! - Pure, testable business logic

pub mod card;
pub mod validation;

// Re-export specific items to avoid ambiguity
pub use card::ports::{CardRecordStore, ProfileStore, QrImageStore, QrRenderer};
pub use card::CardService;
pub use validation::validate_submission;
