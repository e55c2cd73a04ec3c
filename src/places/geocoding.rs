use crate::client::{ApiClient, ApiOptions};
use crate::params::QueryParams;
use crate::Result;

use super::models::{GeocodeParams, SearchResponse, StructuredGeocodeParams};

/// Typed client for the Geocoding API: free-form or structured addresses in,
/// geographic coordinates out.
pub struct GeocodingApi {
    client: ApiClient,
}

impl GeocodingApi {
    pub fn new(options: ApiOptions) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(options)?,
        })
    }

    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn close(&self) {
        self.client.close();
    }

    /// Geocode a free-form (possibly partial or misspelled) address.
    pub async fn get_geocode(
        &self,
        query: &str,
        params: Option<&GeocodeParams>,
    ) -> Result<SearchResponse> {
        let endpoint = format!("/search/2/geocode/{query}.json");
        let response = self
            .client
            .get(&endpoint, params.map(|p| p as &dyn QueryParams), None)
            .await?;
        response.deserialize()
    }

    /// Geocode an address already split into its components.
    pub async fn get_structured_geocode(
        &self,
        params: &StructuredGeocodeParams,
    ) -> Result<SearchResponse> {
        let response = self
            .client
            .get("/search/2/structuredGeocode.json", Some(params), None)
            .await?;
        response.deserialize()
    }
}
