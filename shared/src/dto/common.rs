use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Error payload returned by the hosted services.
///
/// The storage API answers `{ "statusCode", "error", "message" }`, the table
/// API `{ "code", "details", "hint", "message" }`; all fields are optional so
/// either shape parses.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl ErrorResponse {
    pub fn best_message(&self) -> Option<&str> {
        [&self.message, &self.error, &self.msg, &self.details]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|m| !m.trim().is_empty())
    }

    pub fn into_service_error(self, status: u16) -> ServiceError {
        let message = self
            .best_message()
            .map(str::to_string)
            .unwrap_or_else(|| "Something went wrong".to_string());
        ServiceError::new(status, message)
    }
}

/// Normalizes a non-success response body into a [`ServiceError`].
/// Bodies that are not JSON are used verbatim when non-empty.
pub fn service_error_from_body(status: u16, body: &str) -> ServiceError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => parsed.into_service_error(status),
        Err(_) if !body.trim().is_empty() => ServiceError::new(status, body.trim()),
        Err(_) => ServiceError::new(status, "Something went wrong"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::storage(
        r#"{"statusCode":"403","error":"Unauthorized","message":"new row violates row-level security policy"}"#,
        "new row violates row-level security policy"
    )]
    #[case::table(
        r#"{"code":"23505","details":"Key (slug)=(mia) already exists.","hint":null,"message":"duplicate key value"}"#,
        "duplicate key value"
    )]
    #[case::error_only(r#"{"error":"Payload too large"}"#, "Payload too large")]
    #[case::empty_message(r#"{"message":"","msg":"Invalid API key"}"#, "Invalid API key")]
    #[case::empty_object("{}", "Something went wrong")]
    #[case::plain_text("Bad Gateway", "Bad Gateway")]
    #[case::empty_body("", "Something went wrong")]
    fn test_service_error_from_body(#[case] body: &str, #[case] expected: &str) {
        let error = service_error_from_body(400, body);
        assert_eq!(error.status, 400);
        assert_eq!(error.message, expected);
    }
}
