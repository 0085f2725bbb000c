//! HTML templates for the form, preview, and viewer pages

use askama::Template;
use inficard_domain::constants::{
    department_label, COMPANY_NAME, COMPANY_WEBSITE, DEPARTMENTS, QR_DOWNLOAD_FILENAME,
};
use inficard_domain::{CardPreview, Profile, ProfileSubmission, ValidationErrors};

/// Generic failure banner shown when the store rejects the critical path.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong while generating your card. Please try again.";

/// One entry of the department dropdown.
pub struct DepartmentOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

fn department_options(selected: &str) -> Vec<DepartmentOption> {
    DEPARTMENTS
        .iter()
        .map(|value| DepartmentOption {
            value: (*value).to_string(),
            label: department_label(value).to_string(),
            selected: *value == selected,
        })
        .collect()
}

/// Per-field inline messages for the form; empty string means no error.
#[derive(Default)]
pub struct FormErrors {
    pub full_name: String,
    pub designation: String,
    pub email: String,
    pub linkedin_url: String,
    pub department: String,
}

impl FormErrors {
    fn from_validation(errors: &ValidationErrors) -> Self {
        let field = |name: &str| errors.message_for(name).unwrap_or_default().to_string();
        Self {
            full_name: field("full_name"),
            designation: field("designation"),
            email: field("email"),
            linkedin_url: field("linkedin_url"),
            department: field("department"),
        }
    }
}

/// Creation form, optionally re-rendered with errors and prior input.
#[derive(Template)]
#[template(path = "form.html")]
pub struct FormPage {
    pub values: ProfileSubmission,
    pub errors: FormErrors,
    pub banner: String,
    pub departments: Vec<DepartmentOption>,
}

impl FormPage {
    /// Blank form with defaults.
    pub fn blank() -> Self {
        let values = ProfileSubmission::default();
        let departments = department_options(&values.department);
        Self { values, errors: FormErrors::default(), banner: String::new(), departments }
    }

    /// Form re-rendered with per-field validation messages.
    pub fn with_errors(values: ProfileSubmission, errors: &ValidationErrors) -> Self {
        let departments = department_options(&values.department);
        Self {
            values,
            errors: FormErrors::from_validation(errors),
            banner: String::new(),
            departments,
        }
    }

    /// Form re-rendered with a generic failure banner.
    pub fn with_banner(values: ProfileSubmission, banner: impl Into<String>) -> Self {
        let departments = department_options(&values.department);
        Self { values, errors: FormErrors::default(), banner: banner.into(), departments }
    }
}

/// Preview screen after a successful creation.
///
/// Displays the submitted values verbatim; `qr_data_uri` is empty when
/// rasterization failed (the download link still re-derives the image).
#[derive(Template)]
#[template(path = "preview.html")]
pub struct PreviewPage {
    pub card: ProfileSubmission,
    pub card_url: String,
    pub qr_data_uri: String,
    pub download_href: String,
    pub share_title: String,
    pub share_text: String,
}

impl PreviewPage {
    pub fn new(preview: &CardPreview, qr_data_uri: String) -> Self {
        Self {
            card: preview.submission.clone(),
            card_url: preview.card_url.clone(),
            qr_data_uri,
            download_href: format!("/card/{}/qr.png", preview.profile_id),
            share_title: share_title(&preview.submission.full_name),
            share_text: share_text(&preview.submission.full_name, &preview.submission.designation),
        }
    }
}

/// Public card viewer page.
#[derive(Template)]
#[template(path = "card.html")]
pub struct CardPage {
    pub full_name: String,
    pub designation: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub linkedin_text: String,
    pub avatar_url: String,
    pub monogram: String,
    pub card_url: String,
    pub download_href: String,
    pub share_title: String,
    pub share_text: String,
    pub company_name: String,
    pub company_website: String,
}

impl CardPage {
    pub fn from_profile(profile: &Profile, card_url: String) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            designation: profile.designation.clone(),
            department: profile.department.clone(),
            email: profile.email.clone(),
            phone: profile.phone_display().unwrap_or_default().to_string(),
            linkedin_url: profile.linkedin_display().unwrap_or_default().to_string(),
            linkedin_text: profile.linkedin_text().unwrap_or_default().to_string(),
            avatar_url: profile.avatar_url.clone().unwrap_or_default(),
            monogram: profile
                .full_name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string()),
            card_url,
            download_href: format!("/card/{}/qr.png", profile.id),
            share_title: share_title(&profile.full_name),
            share_text: share_text(&profile.full_name, &profile.designation),
            company_name: COMPANY_NAME.to_string(),
            company_website: COMPANY_WEBSITE.to_string(),
        }
    }
}

/// Error page shared by the viewer failure states and the 404 fallback.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub title: String,
    pub message: String,
}

impl ErrorPage {
    pub fn not_found() -> Self {
        Self { title: "Oops!".to_string(), message: "Profile not found".to_string() }
    }

    pub fn load_failure(detail: &str) -> Self {
        Self { title: "Oops!".to_string(), message: format!("Failed to load profile: {detail}") }
    }

    pub fn page_missing() -> Self {
        Self { title: "Page not found".to_string(), message: "This page does not exist.".to_string() }
    }

    pub fn render_failure() -> Self {
        Self {
            title: "Oops!".to_string(),
            message: "Could not generate the QR image. Please try again.".to_string(),
        }
    }
}

fn share_title(full_name: &str) -> String {
    format!("{full_name}'s Digital Business Card")
}

fn share_text(full_name: &str, designation: &str) -> String {
    format!("Connect with {full_name}, {designation} at {COMPANY_NAME}")
}

/// Fixed filename the download route advertises.
pub fn download_filename() -> &'static str {
    QR_DOWNLOAD_FILENAME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_selects_default_department() {
        let page = FormPage::blank();
        let selected: Vec<_> =
            page.departments.iter().filter(|d| d.selected).map(|d| d.value.clone()).collect();
        assert_eq!(selected, vec!["Engineering".to_string()]);
    }

    #[test]
    fn form_errors_map_field_messages() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "Invalid email address");
        let page = FormPage::with_errors(ProfileSubmission::default(), &errors);
        assert_eq!(page.errors.email, "Invalid email address");
        assert!(page.errors.full_name.is_empty());
    }

    #[test]
    fn hr_department_gets_long_label() {
        let page = FormPage::blank();
        let hr = page.departments.iter().find(|d| d.value == "HR").expect("HR option");
        assert_eq!(hr.label, "Human Resources");
    }

    #[test]
    fn card_page_omits_empty_contact_entries() {
        let profile = Profile {
            id: "abc-123".into(),
            full_name: "Jane Doe".into(),
            designation: "Engineer".into(),
            email: "jane@x.com".into(),
            department: "Engineering".into(),
            linkedin_url: Some(String::new()),
            phone: None,
            avatar_url: None,
        };
        let page = CardPage::from_profile(&profile, "https://x/card/abc-123".into());
        assert!(page.phone.is_empty());
        assert!(page.linkedin_url.is_empty());
        assert_eq!(page.monogram, "J");
        assert_eq!(page.share_title, "Jane Doe's Digital Business Card");

        let html = page.render().expect("card renders");
        assert!(html.contains("Jane Doe"));
        assert!(!html.contains("Phone:"));
    }

    #[test]
    fn templates_render_without_errors() {
        let form = FormPage::blank().render().expect("form renders");
        assert!(form.contains("Full Name"));

        let preview = PreviewPage::new(
            &CardPreview {
                profile_id: "abc-123".into(),
                card_url: "https://x/card/abc-123".into(),
                submission: ProfileSubmission {
                    full_name: "Jane Doe".into(),
                    designation: "Engineer".into(),
                    email: "jane@x.com".into(),
                    linkedin_url: String::new(),
                    phone: String::new(),
                    department: "Engineering".into(),
                },
            },
            String::new(),
        )
        .render()
        .expect("preview renders");
        assert!(preview.contains("https://x/card/abc-123"));

        let error = ErrorPage::not_found().render().expect("error renders");
        assert!(error.contains("Profile not found"));
    }
}
