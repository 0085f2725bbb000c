//! Conversions from external infrastructure errors into domain errors.

use inficard_domain::InficardError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub InficardError);

impl From<InfraError> for InficardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<InficardError> for InfraError {
    fn from(value: InficardError) -> Self {
        InfraError(value)
    }
}

impl From<HttpError> for InfraError {
    fn from(err: HttpError) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            return InfraError(InficardError::Network(format!("request timed out: {message}")));
        }
        if err.is_connect() {
            return InfraError(InficardError::Network(format!("connection failed: {message}")));
        }
        if err.is_decode() {
            return InfraError(InficardError::Store(format!(
                "response body did not match the expected shape: {message}"
            )));
        }
        InfraError(InficardError::Network(message))
    }
}

impl From<image::ImageError> for InfraError {
    fn from(err: image::ImageError) -> Self {
        InfraError(InficardError::Render(format!("image encoding failed: {err}")))
    }
}
