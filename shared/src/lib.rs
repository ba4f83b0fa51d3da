pub mod models {
    pub mod contestant;
}

pub mod dto {
    pub mod common;
    pub mod contestant;
}

pub mod error;
pub mod photo;
pub mod slug;

// Re-export commonly used items
pub use error::{PhotoUpdateError, Result, ServiceError, SharedError};

pub use models::contestant::Contestant;

pub use dto::{
    common::{service_error_from_body, ErrorResponse},
    contestant::{photo_url_update, NewContestant, RegistrationRequest},
};

pub use photo::{
    Notification, NotificationVariant, Notifier, ObjectStore, PhotoFile, PhotoReplaceWorkflow,
    RecordStore, SubmissionGate, UploadOptions,
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_contestant_creation() {
        let contestant = Contestant {
            id: "abc123".to_string(),
            full_name: "Mia Torres".to_string(),
            photo_url: Some("https://cdn.example.com/abc123-1.png".to_string()),
            slug: "mia-torres-1a2b3c".to_string(),
        };

        assert_eq!(contestant.full_name, "Mia Torres");
        assert!(contestant.has_photo());
    }

    #[test]
    fn test_default_workflow_targets() {
        let workflow = PhotoReplaceWorkflow::default();
        assert_eq!(workflow.bucket(), "contestant-photos");
        assert_eq!(workflow.table(), "contestants");
    }
}
