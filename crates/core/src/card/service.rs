//! Card workflows - core business logic

use std::sync::Arc;

use inficard_domain::constants::{CARD_PATH_PREFIX, QR_CONTENT_TYPE};
use inficard_domain::{
    BusinessCardRecord, CardPreview, InficardError, Profile, ProfileSubmission, Result,
};
use tracing::{debug, error};

use super::ports::{CardRecordStore, ProfileStore, QrImageStore, QrRenderer};
use crate::validation;

/// Card creation and viewer workflows.
///
/// All collaborators are injected ports so the workflows can run against
/// fakes in tests. One instance serves every request; the service itself
/// holds no mutable state.
pub struct CardService {
    profiles: Arc<dyn ProfileStore>,
    qr_images: Arc<dyn QrImageStore>,
    card_records: Arc<dyn CardRecordStore>,
    qr_renderer: Arc<dyn QrRenderer>,
    public_origin: String,
}

impl CardService {
    /// Create a new card service
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        qr_images: Arc<dyn QrImageStore>,
        card_records: Arc<dyn CardRecordStore>,
        qr_renderer: Arc<dyn QrRenderer>,
        public_origin: impl Into<String>,
    ) -> Self {
        let public_origin = public_origin.into().trim_end_matches('/').to_string();
        Self { profiles, qr_images, card_records, qr_renderer, public_origin }
    }

    /// Shareable URL for a profile identifier: `<origin>/card/<id>`.
    pub fn share_url(&self, profile_id: &str) -> String {
        format!("{}{}{}", self.public_origin, CARD_PATH_PREFIX, profile_id)
    }

    /// Deterministic object key for a profile's QR artifact.
    pub fn qr_object_key(profile_id: &str) -> String {
        format!("qr-{profile_id}.png")
    }

    /// Critical path of the creation workflow: validate, upsert, derive
    /// the shareable URL.
    ///
    /// Validation failures are returned before any store interaction.
    /// Upsert failures abort the workflow; the caller stays on the form.
    pub async fn create_card(&self, submission: ProfileSubmission) -> Result<CardPreview> {
        validation::validate_submission(&submission).map_err(InficardError::Validation)?;

        let profile = self.profiles.upsert(&submission).await.map_err(|err| {
            error!(error = %err, "profile upsert failed");
            err
        })?;

        let card_url = self.share_url(&profile.id);
        debug!(profile_id = %profile.id, %card_url, "profile persisted");

        Ok(CardPreview { profile_id: profile.id, card_url, submission })
    }

    /// Render the shareable URL as a raster QR image.
    pub async fn render_card_qr(&self, card_url: &str) -> Result<Vec<u8>> {
        self.qr_renderer.render_png(card_url).await
    }

    /// Best-effort tail of the creation workflow: upload the rasterized QR
    /// under its deterministic key, resolve the public URL, and insert the
    /// linking record.
    ///
    /// Callers run this after the preview has already been shown; a failure
    /// here never reverts the preview, it only loses the durable copy.
    pub async fn publish_card_artifact(
        &self,
        profile_id: &str,
        card_url: &str,
        qr_png: Vec<u8>,
    ) -> Result<BusinessCardRecord> {
        let key = Self::qr_object_key(profile_id);
        self.qr_images.upload(&key, qr_png, QR_CONTENT_TYPE).await?;

        let qr_code_url = self.qr_images.public_url(&key);
        let record = BusinessCardRecord {
            profile_id: profile_id.to_string(),
            qr_code_url,
            card_url: card_url.to_string(),
        };
        self.card_records.insert(&record).await?;

        debug!(profile_id, qr_code_url = %record.qr_code_url, "card artifact published");
        Ok(record)
    }

    /// Viewer workflow: single point lookup by identifier.
    ///
    /// A missing row surfaces as [`InficardError::NotFound`]; the caller
    /// renders it the same way as a fetch failure.
    pub async fn view_card(&self, id: &str) -> Result<Profile> {
        match self.profiles.find_by_id(id).await? {
            Some(profile) => Ok(profile),
            None => Err(InficardError::NotFound(format!("profile {id} not found"))),
        }
    }
}
