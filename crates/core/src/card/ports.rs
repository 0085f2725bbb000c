//! Port interfaces for the card workflows
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations: the hosted profile relation, the
//! QR image bucket, the linking relation, and the QR rasterizer.

use async_trait::async_trait;
use inficard_domain::{BusinessCardRecord, Profile, ProfileSubmission, Result};

/// Trait for profile persistence and retrieval
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Upsert a profile row and return the persisted representation,
    /// including the server-assigned identifier.
    async fn upsert(&self, submission: &ProfileSubmission) -> Result<Profile>;

    /// Point lookup by identifier. `Ok(None)` when no row matches.
    async fn find_by_id(&self, id: &str) -> Result<Option<Profile>>;
}

/// Trait for the QR image blob container
#[async_trait]
pub trait QrImageStore: Send + Sync {
    /// Upload an object under `key`, overwriting any existing object.
    async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()>;

    /// Resolve the public URL for an object key. Derived locally; no
    /// failure path.
    fn public_url(&self, key: &str) -> String;
}

/// Trait for the insert-only business card linking relation
#[async_trait]
pub trait CardRecordStore: Send + Sync {
    /// Insert a card artifact record.
    async fn insert(&self, record: &BusinessCardRecord) -> Result<()>;
}

/// Trait for rendering a QR symbol to a raster image
#[async_trait]
pub trait QrRenderer: Send + Sync {
    /// Encode `contents` as a QR symbol and rasterize it to PNG bytes.
    async fn render_png(&self, contents: &str) -> Result<Vec<u8>>;
}
