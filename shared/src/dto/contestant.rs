use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use crate::slug::generate_slug;
use crate::{Result, SharedError};

/// Registration form input for a new contestant
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Default)]
pub struct RegistrationRequest {
    /// Child's name, shown on the contest page
    #[validate(length(min = 1, max = 100, message = "Child's name must be between 1 and 100 characters"))]
    pub full_name: String,

    #[validate(length(min = 1, max = 100, message = "Parent's name must be between 1 and 100 characters"))]
    pub parent_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// `None` until the form holds a parseable age
    #[validate(range(max = 12, message = "Contestants must be 12 or younger"))]
    pub age: Option<u8>,
}

/// Row inserted into the contestants table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewContestant {
    pub full_name: String,
    pub parent_name: String,
    pub email: String,
    pub age: u8,
    pub slug: String,
}

impl NewContestant {
    /// Validates the request and assigns a fresh slug
    pub fn from_request(request: RegistrationRequest) -> Result<Self> {
        request.validate()?;
        let full_name = request.full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(SharedError::MissingField("full_name".to_string()));
        }
        let age = request
            .age
            .ok_or_else(|| SharedError::MissingField("age".to_string()))?;
        let slug = generate_slug(&full_name);
        Ok(Self {
            full_name,
            parent_name: request.parent_name.trim().to_string(),
            email: request.email.trim().to_string(),
            age,
            slug,
        })
    }
}

/// Partial update body that replaces only the photo reference
pub fn photo_url_update(photo_url: &str) -> Value {
    json!({ "photo_url": photo_url })
}
