use async_trait::async_trait;
use log::debug;
use shared::{ObjectStore, PhotoFile, ServiceError, UploadOptions};

use crate::api::utils::{error_from_response, network_error, service_request};
use crate::api::{public_object_url, storage_object_url};
use crate::config::Config;

/// Object store client for the hosted storage API
#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseStorage {
    base_url: String,
    anon_key: String,
}

impl SupabaseStorage {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(Config::supabase_url(), Config::supabase_anon_key())
    }
}

#[async_trait(?Send)]
impl ObjectStore for SupabaseStorage {
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        file: &PhotoFile,
        options: UploadOptions,
    ) -> Result<(), ServiceError> {
        let url = storage_object_url(&self.base_url, bucket, key);
        debug!("Uploading {} ({} bytes) to {}", file.name, file.len(), url);

        let body = js_sys::Uint8Array::from(file.bytes.as_slice());
        let response = service_request("POST", &url, &self.anon_key)
            .header("Content-Type", file.effective_content_type())
            .header("cache-control", "max-age=3600")
            .header("x-upsert", if options.upsert { "true" } else { "false" })
            .body(body)
            .map_err(|e| network_error("Failed to build upload request", e))?
            .send()
            .await
            .map_err(|e| network_error("Failed to upload photo", e))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        debug!("Stored object {}/{}", bucket, key);
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        public_object_url(&self.base_url, bucket, key)
    }
}
