//! Routing API.

pub mod models;

use crate::client::{ApiClient, ApiOptions};
use crate::geo::LatLon;
use crate::params::QueryParams;
use crate::Result;

use models::{
    CalculateReachableRangeParams, CalculateReachableRangePostData, CalculateRouteParams,
    CalculateRoutePostData, CalculatedReachableRangeResponse, CalculatedRouteResponse,
};

/// Route locations travel in the path as colon-separated `lat,lon` pairs.
fn colon_separated(locations: &[LatLon]) -> String {
    locations
        .iter()
        .map(LatLon::to_comma_separated)
        .collect::<Vec<_>>()
        .join(":")
}

/// Typed client for the Routing API.
pub struct RoutingApi {
    client: ApiClient,
}

impl RoutingApi {
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

    /// Calculate a route between an origin and a destination, through any
    /// waypoints in between.
    pub async fn get_calculate_route(
        &self,
        locations: &[LatLon],
        params: Option<&CalculateRouteParams>,
    ) -> Result<CalculatedRouteResponse> {
        let endpoint = format!(
            "/routing/1/calculateRoute/{}/json",
            colon_separated(locations)
        );
        let response = self
            .client
            .get(&endpoint, params.map(|p| p as &dyn QueryParams), None)
            .await?;
        response.deserialize()
    }

    /// Calculate a route with request-body extras such as supporting points
    /// and avoided areas.
    pub async fn post_calculate_route(
        &self,
        locations: &[LatLon],
        params: Option<&CalculateRouteParams>,
        data: &CalculateRoutePostData,
    ) -> Result<CalculatedRouteResponse> {
        let endpoint = format!(
            "/routing/1/calculateRoute/{}/json",
            colon_separated(locations)
        );
        let response = self
            .client
            .post(&endpoint, params.map(|p| p as &dyn QueryParams), None, data)
            .await?;
        response.deserialize()
    }

    /// Calculate the set of locations reachable from an origin within a
    /// fuel, energy, time or distance budget.
    pub async fn get_calculate_reachable_range(
        &self,
        origin: LatLon,
        params: Option<&CalculateReachableRangeParams>,
    ) -> Result<CalculatedReachableRangeResponse> {
        let endpoint = format!(
            "/routing/1/calculateReachableRange/{}/json",
            origin.to_comma_separated()
        );
        let response = self
            .client
            .get(&endpoint, params.map(|p| p as &dyn QueryParams), None)
            .await?;
        response.deserialize()
    }

    /// Reachable-range calculation with request-body extras.
    pub async fn post_calculate_reachable_range(
        &self,
        origin: LatLon,
        params: Option<&CalculateReachableRangeParams>,
        data: &CalculateReachableRangePostData,
    ) -> Result<CalculatedReachableRangeResponse> {
        let endpoint = format!(
            "/routing/1/calculateReachableRange/{}/json",
            origin.to_comma_separated()
        );
        let response = self
            .client
            .post(&endpoint, params.map(|p| p as &dyn QueryParams), None, data)
            .await?;
        response.deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_join_with_colons() {
        let locations = vec![LatLon::new(52.50931, 13.42936), LatLon::new(52.50274, 13.43872)];
        assert_eq!(
            colon_separated(&locations),
            "52.50931,13.42936:52.50274,13.43872"
        );
    }
}
