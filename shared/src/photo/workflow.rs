use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

use super::key::{photo_storage_key, PhotoFile};
use super::notification::{Notification, Notifier};
use crate::dto::contestant::photo_url_update;
use crate::error::{PhotoUpdateError, ServiceError};

pub const DEFAULT_PHOTO_BUCKET: &str = "contestant-photos";
pub const DEFAULT_CONTESTANTS_TABLE: &str = "contestants";
pub const CONTESTANT_PRIMARY_KEY: &str = "id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UploadOptions {
    /// Overwrite an existing object with the same key instead of failing
    pub upsert: bool,
}

/// Blob storage addressed by bucket and key
#[async_trait(?Send)]
pub trait ObjectStore {
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        file: &PhotoFile,
        options: UploadOptions,
    ) -> Result<(), ServiceError>;

    /// Stable public URL of the object; does not contact the service
    fn public_url(&self, bucket: &str, key: &str) -> String;
}

/// Row-level updates on a named table
#[async_trait(?Send)]
pub trait RecordStore {
    /// Applies `fields` to the single row where `primary_key = id`
    async fn update(
        &self,
        table: &str,
        fields: Value,
        primary_key: &str,
        id: &str,
    ) -> Result<(), ServiceError>;
}

/// Replaces a contestant's photo: upload the new image, then point the
/// contestant row at its public URL.
///
/// The row is written strictly after a successful upload, so a failure never
/// leaves the row referring to a missing object. The reverse is possible: if
/// the row update fails the uploaded object stays in the bucket unreferenced.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoReplaceWorkflow {
    bucket: String,
    table: String,
}

impl Default for PhotoReplaceWorkflow {
    fn default() -> Self {
        Self::new(DEFAULT_PHOTO_BUCKET, DEFAULT_CONTESTANTS_TABLE)
    }
}

impl PhotoReplaceWorkflow {
    pub fn new(bucket: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            table: table.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Uploads `file` and records its public URL on the contestant.
    /// Returns the new URL.
    pub async fn replace_photo<S, R>(
        &self,
        store: &S,
        records: &R,
        contestant_id: &str,
        file: &PhotoFile,
        timestamp_ms: i64,
    ) -> Result<String, PhotoUpdateError>
    where
        S: ObjectStore + ?Sized,
        R: RecordStore + ?Sized,
    {
        let key = photo_storage_key(contestant_id, timestamp_ms, &file.name);
        debug!(
            "Uploading {} bytes for contestant {} to {}/{}",
            file.len(),
            contestant_id,
            self.bucket,
            key
        );

        store
            .upload(&self.bucket, &key, file, UploadOptions { upsert: true })
            .await
            .map_err(PhotoUpdateError::UploadFailure)?;

        let photo_url = store.public_url(&self.bucket, &key);

        if let Err(e) = records
            .update(
                &self.table,
                photo_url_update(&photo_url),
                CONTESTANT_PRIMARY_KEY,
                contestant_id,
            )
            .await
        {
            warn!(
                "Photo {} uploaded but contestant {} was not updated; object left unreferenced: {}",
                key, contestant_id, e
            );
            return Err(PhotoUpdateError::RecordUpdateFailure(e));
        }

        info!("Contestant {} photo set to {}", contestant_id, photo_url);
        Ok(photo_url)
    }

    /// Runs [`replace_photo`](Self::replace_photo) and reports the outcome:
    /// one notification either way, and `on_update` exactly once on success.
    #[allow(clippy::too_many_arguments)]
    pub async fn run<S, R, N, F>(
        &self,
        store: &S,
        records: &R,
        notifier: &N,
        contestant_id: &str,
        file: &PhotoFile,
        timestamp_ms: i64,
        on_update: F,
    ) -> Result<String, PhotoUpdateError>
    where
        S: ObjectStore + ?Sized,
        R: RecordStore + ?Sized,
        N: Notifier + ?Sized,
        F: FnOnce(),
    {
        match self
            .replace_photo(store, records, contestant_id, file, timestamp_ms)
            .await
        {
            Ok(url) => {
                notifier.notify(Notification::photo_updated());
                on_update();
                Ok(url)
            }
            Err(e) => {
                warn!("Photo update for contestant {} failed: {}", contestant_id, e.service_error());
                notifier.notify(Notification::photo_failed(&e));
                Err(e)
            }
        }
    }
}
