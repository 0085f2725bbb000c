// Field Validators - Reusable validation components
use once_cell::sync::Lazy;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// String validator with length constraints
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    min_chars: Option<usize>,
    not_empty: bool,
}

impl StringValidator {
    /// Create a new string validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Require non-empty string
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Set minimum length in characters
    pub fn min_chars(mut self, min: usize) -> Self {
        self.min_chars = Some(min);
        self
    }
}

impl FieldValidator<str> for StringValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.not_empty && value.is_empty() {
            return Err("Value cannot be empty".to_string());
        }

        if let Some(min) = self.min_chars {
            if value.chars().count() < min {
                return Err(format!("Length must be at least {} characters", min));
            }
        }

        Ok(())
    }
}

/// Static email regex pattern compiled once at first use
static EMAIL_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX pattern is valid and well-formed")
});

/// Email validator
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator<str> for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if !EMAIL_REGEX.is_match(value) {
            return Err("Invalid email format".to_string());
        }

        Ok(())
    }
}

/// URL validator
#[derive(Debug, Clone)]
pub struct UrlValidator {
    allowed_schemes: Vec<String>,
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlValidator {
    /// Create a new URL validator
    pub fn new() -> Self {
        Self { allowed_schemes: vec!["http".to_string(), "https".to_string()] }
    }

    /// Set allowed schemes
    pub fn allowed_schemes(mut self, schemes: Vec<String>) -> Self {
        self.allowed_schemes = schemes;
        self
    }
}

impl FieldValidator<str> for UrlValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if let Ok(parsed) = url::Url::parse(value) {
            let scheme = parsed.scheme();

            if !self.allowed_schemes.contains(&scheme.to_string()) {
                return Err(format!("URL scheme '{}' is not allowed", scheme));
            }

            Ok(())
        } else {
            Err("Invalid URL format".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_validator_counts_characters_not_bytes() {
        let validator = StringValidator::new().min_chars(2);
        assert!(validator.validate("éé").is_ok());
        assert!(validator.validate("é").is_err());
    }

    #[test]
    fn string_validator_not_empty() {
        let validator = StringValidator::new().not_empty();
        assert!(validator.validate("").is_err());
        assert!(validator.validate("x").is_ok());
    }

    #[test]
    fn email_validator_accepts_standard_addresses() {
        let validator = EmailValidator::new();
        assert!(validator.validate("jane@x.com").is_ok());
        assert!(validator.validate("jane.doe+tag@sub.example.co").is_ok());
    }

    #[test]
    fn email_validator_rejects_malformed_addresses() {
        let validator = EmailValidator::new();
        assert!(validator.validate("not-an-email").is_err());
        assert!(validator.validate("jane@").is_err());
        assert!(validator.validate("@x.com").is_err());
        assert!(validator.validate("jane@x").is_err());
    }

    #[test]
    fn url_validator_requires_absolute_http_urls() {
        let validator = UrlValidator::new();
        assert!(validator.validate("https://linkedin.com/in/jane").is_ok());
        assert!(validator.validate("linkedin.com/in/jane").is_err());
        assert!(validator.validate("ftp://linkedin.com").is_err());
    }
}
