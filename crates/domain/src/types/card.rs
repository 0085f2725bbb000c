//! Business card artifact types

use serde::{Deserialize, Serialize};

use crate::types::profile::ProfileSubmission;

/// Linking row in the `business_cards` relation.
///
/// Created once per successful generation, insert-only. Ties a profile to
/// the durable QR image location and the shareable card URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BusinessCardRecord {
    pub profile_id: String,
    pub qr_code_url: String,
    pub card_url: String,
}

/// Output of the creation workflow's critical path.
///
/// Holds the shareable URL and the submitted record as entered by the user;
/// the preview screen shows the input verbatim rather than the persisted row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPreview {
    pub profile_id: String,
    pub card_url: String,
    pub submission: ProfileSubmission,
}
