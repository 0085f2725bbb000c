//! Employee profile types
//!
//! Profiles live in the hosted `profiles` relation; the store assigns the
//! identifier on first insert and it is immutable afterwards.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DEPARTMENT;

/// Raw form input for profile creation.
///
/// All fields arrive as strings; `linkedin_url` and `phone` may be empty.
/// This is also what the preview screen displays, deliberately unchanged by
/// whatever normalization the store applies on persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileSubmission {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_department")]
    pub department: String,
}

fn default_department() -> String {
    DEFAULT_DEPARTMENT.to_string()
}

impl Default for ProfileSubmission {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            designation: String::new(),
            email: String::new(),
            linkedin_url: String::new(),
            phone: String::new(),
            department: default_department(),
        }
    }
}

/// Persisted employee profile row.
///
/// Unknown columns returned by the store are ignored; a row missing any of
/// the required columns fails deserialization and surfaces as a store error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub full_name: String,
    pub designation: String,
    pub email: String,
    pub department: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Profile {
    /// Phone number for display, `None` when absent or empty.
    pub fn phone_display(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !p.trim().is_empty())
    }

    /// LinkedIn URL for linking, `None` when absent or empty.
    pub fn linkedin_display(&self) -> Option<&str> {
        self.linkedin_url.as_deref().filter(|u| !u.trim().is_empty())
    }

    /// LinkedIn URL with the scheme and `www.` prefix stripped, as shown on
    /// the rendered card.
    pub fn linkedin_text(&self) -> Option<&str> {
        self.linkedin_display().map(strip_url_prefix)
    }
}

fn strip_url_prefix(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.strip_prefix("www.").unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_defaults_to_engineering_department() {
        let submission = ProfileSubmission::default();
        assert_eq!(submission.department, "Engineering");
    }

    #[test]
    fn form_decoding_fills_missing_department() {
        let submission: ProfileSubmission =
            serde_json::from_str(r#"{"full_name":"Jane Doe"}"#).expect("decode");
        assert_eq!(submission.department, "Engineering");
        assert_eq!(submission.full_name, "Jane Doe");
        assert!(submission.phone.is_empty());
    }

    #[test]
    fn profile_row_tolerates_unknown_columns() {
        let json = r#"{
            "id": "abc-123",
            "full_name": "Jane Doe",
            "designation": "Engineer",
            "email": "jane@x.com",
            "department": "Engineering",
            "created_at": "2025-01-01T00:00:00Z"
        }"#;
        let profile: Profile = serde_json::from_str(json).expect("decode");
        assert_eq!(profile.id, "abc-123");
        assert!(profile.phone.is_none());
    }

    #[test]
    fn profile_row_missing_required_column_fails() {
        let json = r#"{"full_name": "Jane Doe"}"#;
        assert!(serde_json::from_str::<Profile>(json).is_err());
    }

    #[test]
    fn empty_phone_is_not_displayed() {
        let mut profile = sample_profile();
        profile.phone = Some(String::new());
        assert!(profile.phone_display().is_none());
        profile.phone = Some("+91 9876543210".into());
        assert_eq!(profile.phone_display(), Some("+91 9876543210"));
    }

    #[test]
    fn linkedin_text_strips_scheme_and_www() {
        let mut profile = sample_profile();
        profile.linkedin_url = Some("https://www.linkedin.com/in/jane".into());
        assert_eq!(profile.linkedin_text(), Some("linkedin.com/in/jane"));
        profile.linkedin_url = Some("http://linkedin.com/in/jane".into());
        assert_eq!(profile.linkedin_text(), Some("linkedin.com/in/jane"));
    }

    fn sample_profile() -> Profile {
        Profile {
            id: "abc-123".into(),
            full_name: "Jane Doe".into(),
            designation: "Engineer".into(),
            email: "jane@x.com".into(),
            department: "Engineering".into(),
            linkedin_url: None,
            phone: None,
            avatar_url: None,
        }
    }
}
