use serde::{Deserialize, Serialize};

/// A contest entrant as stored in the `contestants` table
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Contestant {
    /// Primary key assigned by the table service
    pub id: String,

    /// Display name of the child
    pub full_name: String,

    /// Public URL of the current photo, `None` until one is uploaded
    #[serde(default)]
    pub photo_url: Option<String>,

    /// URL-safe identifier used in `/contestant/{slug}`
    pub slug: String,
}

impl Contestant {
    pub fn has_photo(&self) -> bool {
        self.photo_url.as_deref().map(|u| !u.is_empty()).unwrap_or(false)
    }
}
