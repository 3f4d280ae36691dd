//! Location and account lookups.

use serde::Deserialize;
use tracing::instrument;

use retail_ops_core::{Location, Page};

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
struct NamedResource {
    #[serde(default)]
    name: Option<String>,
}

impl ApiClient {
    /// Get one location by ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` when the location does not exist, or
    /// another `ApiError` when the request fails.
    #[instrument(skip(self), fields(location_id = %location_id))]
    pub async fn get_location(&self, location_id: &str) -> Result<Location, ApiError> {
        let url = self.url(&format!("/locations/{location_id}"));
        let resource: NamedResource = self.get_json(&url).await?;
        Ok(Location {
            id: location_id.to_string(),
            name: resource.name,
        })
    }

    /// Get a location's display name, when it has one.
    ///
    /// # Errors
    ///
    /// Returns an error when the lookup request fails.
    pub async fn get_location_name(&self, location_id: &str) -> Result<Option<String>, ApiError> {
        Ok(self.get_location(location_id).await?.name)
    }

    /// List every location belonging to an account, normalized into
    /// [`Location`] values. Entries without an ID are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error when the listing request fails.
    #[instrument(skip(self), fields(account = %account))]
    pub async fn list_locations(&self, account: &str) -> Result<Vec<Location>, ApiError> {
        let url = self.url(&format!(
            "/locations?where={{\"account\":\"{account}\"}}"
        ));
        let page: Page<Location> = self.get_json(&url).await?;
        Ok(page
            .items
            .into_iter()
            .filter(|location| !location.id.is_empty())
            .collect())
    }

    /// Get an account's display name.
    ///
    /// # Errors
    ///
    /// Returns an error when the lookup request fails.
    #[instrument(skip(self), fields(account = %account))]
    pub async fn get_account_name(&self, account: &str) -> Result<Option<String>, ApiError> {
        let url = self.url(&format!("/accounts/{account}"));
        let resource: NamedResource = self.get_json(&url).await?;
        Ok(resource.name)
    }
}
