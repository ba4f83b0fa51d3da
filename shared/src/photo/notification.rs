use serde::{Deserialize, Serialize};

use crate::error::PhotoUpdateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A short user-facing message shown as a dismissible toast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn photo_updated() -> Self {
        Self::new("Photo Updated", "Your photo has been updated successfully.")
    }

    pub fn photo_failed(error: &PhotoUpdateError) -> Self {
        Self::destructive("Error", error.to_string())
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Fire-and-forget sink for notifications
pub trait Notifier {
    fn notify(&self, notification: Notification);
}
