//! Domain data types

pub mod card;
pub mod profile;
pub mod validation;

pub use card::{BusinessCardRecord, CardPreview};
pub use profile::{Profile, ProfileSubmission};
pub use validation::{FieldError, ValidationErrors};
