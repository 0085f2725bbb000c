//! Profile submission validation
//!
//! Declarative field rules for the business card form. Runs before any
//! store interaction; a failing submission never reaches the profile store.

mod validators;

pub use validators::{EmailValidator, FieldValidator, StringValidator, UrlValidator};

use inficard_domain::constants::{MIN_DESIGNATION_CHARS, MIN_NAME_CHARS};
use inficard_domain::types::{ProfileSubmission, ValidationErrors};

// User-facing messages, field by field.
pub const MSG_NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const MSG_DESIGNATION_TOO_SHORT: &str = "Designation must be at least 2 characters";
pub const MSG_INVALID_EMAIL: &str = "Invalid email address";
pub const MSG_INVALID_URL: &str = "Invalid URL";
pub const MSG_DEPARTMENT_REQUIRED: &str = "Department is required";

/// Validate a candidate profile record.
///
/// Returns the field-indexed error set on failure. Rules:
/// - `full_name` and `designation`: at least 2 characters
/// - `email`: standard address grammar
/// - `linkedin_url`: absolute http(s) URL or the empty string
/// - `phone`: unconstrained
/// - `department`: non-empty
pub fn validate_submission(submission: &ProfileSubmission) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if StringValidator::new().min_chars(MIN_NAME_CHARS).validate(&submission.full_name).is_err() {
        errors.add("full_name", MSG_NAME_TOO_SHORT);
    }

    if StringValidator::new()
        .min_chars(MIN_DESIGNATION_CHARS)
        .validate(&submission.designation)
        .is_err()
    {
        errors.add("designation", MSG_DESIGNATION_TOO_SHORT);
    }

    if EmailValidator::new().validate(&submission.email).is_err() {
        errors.add("email", MSG_INVALID_EMAIL);
    }

    // The empty string is explicitly allowed; anything else must parse.
    if !submission.linkedin_url.is_empty()
        && UrlValidator::new().validate(&submission.linkedin_url).is_err()
    {
        errors.add("linkedin_url", MSG_INVALID_URL);
    }

    if StringValidator::new().not_empty().validate(&submission.department).is_err() {
        errors.add("department", MSG_DEPARTMENT_REQUIRED);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
