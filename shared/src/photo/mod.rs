//! Replacing a contestant's photo.

pub mod gate;
pub mod key;
pub mod notification;
pub mod workflow;

pub use gate::{SubmissionGate, SubmissionTicket};
pub use key::{file_extension, photo_storage_key, PhotoFile};
pub use notification::{Notification, NotificationVariant, Notifier};
pub use workflow::{
    ObjectStore, PhotoReplaceWorkflow, RecordStore, UploadOptions, CONTESTANT_PRIMARY_KEY,
    DEFAULT_CONTESTANTS_TABLE, DEFAULT_PHOTO_BUCKET,
};
