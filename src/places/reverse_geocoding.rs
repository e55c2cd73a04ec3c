use crate::client::{ApiClient, ApiOptions};
use crate::geo::LatLon;
use crate::params::QueryParams;
use crate::Result;

use super::models::{CrossStreetLookupParams, ReverseGeocodeParams, ReverseGeocodeResponse};

/// Typed client for the Reverse Geocoding API: coordinates in, street
/// addresses or crossings out.
pub struct ReverseGeocodingApi {
    client: ApiClient,
}

impl ReverseGeocodingApi {
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

    /// Translate a coordinate into the nearest address.
    pub async fn get_reverse_geocode(
        &self,
        position: LatLon,
        params: Option<&ReverseGeocodeParams>,
    ) -> Result<ReverseGeocodeResponse> {
        let endpoint = format!("/search/2/reverseGeocode/{}.json", position.to_comma_separated());
        let response = self
            .client
            .get(&endpoint, params.map(|p| p as &dyn QueryParams), None)
            .await?;
        response.deserialize()
    }

    /// Translate a coordinate into the nearest street intersection.
    pub async fn get_cross_street_lookup(
        &self,
        position: LatLon,
        params: Option<&CrossStreetLookupParams>,
    ) -> Result<ReverseGeocodeResponse> {
        let endpoint = format!(
            "/search/2/reverseGeocode/crossStreet/{}.json",
            position.to_comma_separated()
        );
        let response = self
            .client
            .get(&endpoint, params.map(|p| p as &dyn QueryParams), None)
            .await?;
        response.deserialize()
    }
}
