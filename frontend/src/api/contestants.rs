use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use shared::{Contestant, NewContestant, RecordStore, ServiceError};

use crate::api::utils::{error_from_response, network_error, service_request};
use crate::api::{eq_filter, rest_url};
use crate::config::Config;

/// Client for the contestants table on the hosted REST API
#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseTable {
    base_url: String,
    anon_key: String,
}

impl SupabaseTable {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(Config::supabase_url(), Config::supabase_anon_key())
    }

    pub async fn fetch_by_slug(&self, table: &str, slug: &str) -> Result<Option<Contestant>, ServiceError> {
        let url = format!(
            "{}?{}&select=*&limit=1",
            rest_url(&self.base_url, table),
            eq_filter("slug", slug)
        );
        debug!("Fetching contestant with slug: {}", slug);

        let response = service_request("GET", &url, &self.anon_key)
            .send()
            .await
            .map_err(|e| network_error("Failed to fetch contestant", e))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        let rows = response
            .json::<Vec<Contestant>>()
            .await
            .map_err(|e| ServiceError::network(format!("Failed to parse contestant response: {}", e)))?;

        Ok(rows.into_iter().next())
    }

    pub async fn insert(&self, table: &str, contestant: &NewContestant) -> Result<Contestant, ServiceError> {
        debug!("Registering contestant {}", contestant.slug);

        let response = service_request("POST", &rest_url(&self.base_url, table), &self.anon_key)
            .header("Prefer", "return=representation")
            .json(contestant)
            .map_err(|e| network_error("Failed to serialize registration", e))?
            .send()
            .await
            .map_err(|e| network_error("Failed to register contestant", e))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        let rows = response
            .json::<Vec<Contestant>>()
            .await
            .map_err(|e| ServiceError::network(format!("Failed to parse registration response: {}", e)))?;

        rows.into_iter()
            .next()
            .ok_or_else(|| ServiceError::new(500, "Registration returned no row"))
    }
}

#[async_trait(?Send)]
impl RecordStore for SupabaseTable {
    async fn update(
        &self,
        table: &str,
        fields: Value,
        primary_key: &str,
        id: &str,
    ) -> Result<(), ServiceError> {
        let url = format!("{}?{}", rest_url(&self.base_url, table), eq_filter(primary_key, id));
        debug!("Updating {} where {} = {}", table, primary_key, id);

        // return=representation so a filter that matched nothing is visible
        let response = service_request("PATCH", &url, &self.anon_key)
            .header("Prefer", "return=representation")
            .json(&fields)
            .map_err(|e| network_error("Failed to serialize update", e))?
            .send()
            .await
            .map_err(|e| network_error("Failed to update record", e))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        let rows = response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| ServiceError::network(format!("Failed to parse update response: {}", e)))?;

        match rows.len() {
            1 => Ok(()),
            0 => Err(ServiceError::new(404, format!("No {} row with {} = {}", table, primary_key, id))),
            n => Err(ServiceError::new(409, format!("Update matched {} rows", n))),
        }
    }
}

/// Registers a contestant in the configured table
pub async fn create_contestant(contestant: &NewContestant) -> Result<Contestant, ServiceError> {
    SupabaseTable::from_config()
        .insert(&Config::contestants_table(), contestant)
        .await
}

pub async fn get_contestant_by_slug(slug: &str) -> Result<Option<Contestant>, ServiceError> {
    SupabaseTable::from_config()
        .fetch_by_slug(&Config::contestants_table(), slug)
        .await
}
