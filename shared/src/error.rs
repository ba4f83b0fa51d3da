use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Required field missing: {0}")]
    MissingField(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// A failed call to one of the hosted services (object store or table API),
/// reduced to the status code and the most useful message the body offered.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[error("{message} (status {status})")]
pub struct ServiceError {
    pub status: u16,
    pub message: String,
}

impl ServiceError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Used when the request never produced an HTTP response.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(0, message)
    }
}

/// The two ways a photo replacement can fail. Both leave the contestant's
/// previous photo reference untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhotoUpdateError {
    #[error("Failed to upload photo")]
    UploadFailure(#[source] ServiceError),

    #[error("Failed to update photo")]
    RecordUpdateFailure(#[source] ServiceError),
}

impl PhotoUpdateError {
    pub fn service_error(&self) -> &ServiceError {
        match self {
            PhotoUpdateError::UploadFailure(e) | PhotoUpdateError::RecordUpdateFailure(e) => e,
        }
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_photo_errors_have_distinct_messages() {
        let cause = ServiceError::new(403, "new row violates row-level security policy");
        assert_eq!(
            PhotoUpdateError::UploadFailure(cause.clone()).to_string(),
            "Failed to upload photo"
        );
        assert_eq!(
            PhotoUpdateError::RecordUpdateFailure(cause.clone()).to_string(),
            "Failed to update photo"
        );
        assert_eq!(
            PhotoUpdateError::RecordUpdateFailure(cause.clone()).service_error(),
            &cause
        );
    }

    #[test]
    fn test_service_error_display() {
        let error = ServiceError::new(413, "Payload too large");
        assert_eq!(error.to_string(), "Payload too large (status 413)");
        assert_eq!(ServiceError::network("offline").status, 0);
    }

    #[test]
    fn test_json_error_becomes_conversion() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let shared: SharedError = err.into();
        assert!(matches!(shared, SharedError::Conversion(_)));
    }
}
