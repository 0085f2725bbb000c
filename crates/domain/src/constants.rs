//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Branding
pub const COMPANY_NAME: &str = "Infimatrix Technologies";
pub const COMPANY_WEBSITE: &str = "https://www.infimatrix.com";

// Profile form
pub const DEPARTMENTS: &[&str] = &["Engineering", "Marketing", "Sales", "HR", "Finance", "Operations"];
pub const DEFAULT_DEPARTMENT: &str = "Engineering";
pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_DESIGNATION_CHARS: usize = 2;

// Shareable card URLs
pub const CARD_PATH_PREFIX: &str = "/card/";

// QR artifact
pub const QR_MIN_SIZE_PX: u32 = 200;
pub const QR_QUIET_ZONE_MODULES: u32 = 4;
pub const QR_FOREGROUND_RGB: [u8; 3] = [0x25, 0x63, 0xEB];
pub const QR_BACKGROUND_RGB: [u8; 3] = [0xFF, 0xFF, 0xFF];
pub const QR_CONTENT_TYPE: &str = "image/png";
pub const QR_DOWNLOAD_FILENAME: &str = "infimatrix-business-card.png";
pub const DEFAULT_STORAGE_BUCKET: &str = "qrcodes";

/// Human-readable label for a stored department value.
pub fn department_label(value: &str) -> &str {
    match value {
        "HR" => "Human Resources",
        other => other,
    }
}
