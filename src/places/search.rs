use crate::client::{ApiClient, ApiOptions};
use crate::params::QueryParams;
use crate::Result;

use super::models::{
    AlongRouteSearchParams, AlongRouteSearchPostData, AutocompleteParams, AutocompleteResponse,
    NearbySearchParams, SearchParams, SearchResponse,
};

/// Typed client for the Search API.
pub struct SearchApi {
    client: ApiClient,
}

impl SearchApi {
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

    /// Fuzzy search: handles free-form input mixing addresses, POIs and
    /// geographies.
    pub async fn get_search(
        &self,
        query: &str,
        params: Option<&SearchParams>,
    ) -> Result<SearchResponse> {
        let endpoint = format!("/search/2/search/{query}.json");
        let response = self
            .client
            .get(&endpoint, params.map(|p| p as &dyn QueryParams), None)
            .await?;
        response.deserialize()
    }

    /// Search returning POI results only.
    pub async fn get_poi_search(
        &self,
        query: &str,
        params: Option<&SearchParams>,
    ) -> Result<SearchResponse> {
        let endpoint = format!("/search/2/poiSearch/{query}.json");
        let response = self
            .client
            .get(&endpoint, params.map(|p| p as &dyn QueryParams), None)
            .await?;
        response.deserialize()
    }

    /// Search returning POIs of the requested category only.
    pub async fn get_category_search(
        &self,
        query: &str,
        params: Option<&SearchParams>,
    ) -> Result<SearchResponse> {
        let endpoint = format!("/search/2/categorySearch/{query}.json");
        let response = self
            .client
            .get(&endpoint, params.map(|p| p as &dyn QueryParams), None)
            .await?;
        response.deserialize()
    }

    /// POIs around a position; takes no search query.
    pub async fn get_nearby_search(&self, params: &NearbySearchParams) -> Result<SearchResponse> {
        let response = self
            .client
            .get("/search/2/nearbySearch/.json", Some(params), None)
            .await?;
        response.deserialize()
    }

    /// Fuzzy search for POIs along a route, constrained by a detour-time
    /// budget. The route geometry travels in the POST body.
    pub async fn post_search_along_route(
        &self,
        query: &str,
        params: &AlongRouteSearchParams,
        data: &AlongRouteSearchPostData,
    ) -> Result<SearchResponse> {
        let endpoint = format!("/search/2/searchAlongRoute/{query}.json");
        let response = self
            .client
            .post(&endpoint, Some(params), None, data)
            .await?;
        response.deserialize()
    }

    /// Recognize entities inside an input query and offer them as query
    /// terms.
    pub async fn get_autocomplete(
        &self,
        query: &str,
        params: Option<&AutocompleteParams>,
    ) -> Result<AutocompleteResponse> {
        let endpoint = format!("/search/2/autocomplete/{query}.json");
        let response = self
            .client
            .get(&endpoint, params.map(|p| p as &dyn QueryParams), None)
            .await?;
        response.deserialize()
    }
}
