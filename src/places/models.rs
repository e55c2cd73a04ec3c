//! Models for the Search, Geocoding and Reverse Geocoding APIs.

use serde::{Deserialize, Serialize};

use crate::geo::LatLon;
use crate::models::{Language, View};
use crate::params::{Query, QueryParams};

/// Parameters for the geocode endpoint.
#[derive(Debug, Clone, Default)]
pub struct GeocodeParams {
    pub store_result: Option<bool>,
    pub limit: Option<u32>,
    pub ofs: Option<u32>,
    pub country_set: Option<Vec<String>>,
    pub radius: Option<u32>,
    pub top_left: Option<LatLon>,
    pub btm_right: Option<LatLon>,
    pub language: Option<Language>,
    pub extended_postal_codes_for: Option<Vec<String>>,
    pub view: Option<View>,
    pub mapcodes: Option<Vec<String>>,
}

impl QueryParams for GeocodeParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set_opt("storeResult", &self.store_result);
        query.set_opt("limit", &self.limit);
        query.set_opt("ofs", &self.ofs);
        query.set_list("countrySet", &self.country_set);
        query.set_opt("radius", &self.radius);
        query.set_opt("topLeft", &self.top_left);
        query.set_opt("btmRight", &self.btm_right);
        query.set_opt("language", &self.language);
        query.set_list("extendedPostalCodesFor", &self.extended_postal_codes_for);
        query.set_opt("view", &self.view);
        query.set_list("mapcodes", &self.mapcodes);
        query
    }
}

/// Parameters for the structured geocode endpoint. The country code is the
/// only required field.
#[derive(Debug, Clone)]
pub struct StructuredGeocodeParams {
    pub country_code: String,
    pub limit: Option<u32>,
    pub ofs: Option<u32>,
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub cross_street: Option<String>,
    pub municipality: Option<String>,
    pub country_subdivision: Option<String>,
    pub postal_code: Option<String>,
    pub language: Option<Language>,
    pub extended_postal_codes_for: Option<Vec<String>>,
    pub view: Option<View>,
}

impl StructuredGeocodeParams {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            limit: None,
            ofs: None,
            street_number: None,
            street_name: None,
            cross_street: None,
            municipality: None,
            country_subdivision: None,
            postal_code: None,
            language: None,
            extended_postal_codes_for: None,
            view: None,
        }
    }
}

impl QueryParams for StructuredGeocodeParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set("countryCode", &self.country_code);
        query.set_opt("limit", &self.limit);
        query.set_opt("ofs", &self.ofs);
        query.set_opt("streetNumber", &self.street_number);
        query.set_opt("streetName", &self.street_name);
        query.set_opt("crossStreet", &self.cross_street);
        query.set_opt("municipality", &self.municipality);
        query.set_opt("countrySubdivision", &self.country_subdivision);
        query.set_opt("postalCode", &self.postal_code);
        query.set_opt("language", &self.language);
        query.set_list("extendedPostalCodesFor", &self.extended_postal_codes_for);
        query.set_opt("view", &self.view);
        query
    }
}

/// Parameters shared by the fuzzy, POI and category search endpoints.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub type_ahead: Option<bool>,
    pub limit: Option<u32>,
    pub ofs: Option<u32>,
    pub country_set: Option<Vec<String>>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub radius: Option<u32>,
    pub language: Option<Language>,
    pub idx_set: Option<Vec<String>>,
    pub category_set: Option<Vec<u32>>,
    pub brand_set: Option<Vec<String>>,
    pub min_fuzzy_level: Option<u32>,
    pub max_fuzzy_level: Option<u32>,
    pub view: Option<View>,
    pub opening_hours: Option<String>,
    pub related_pois: Option<String>,
}

impl QueryParams for SearchParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set_opt("typeahead", &self.type_ahead);
        query.set_opt("limit", &self.limit);
        query.set_opt("ofs", &self.ofs);
        query.set_list("countrySet", &self.country_set);
        query.set_opt("lat", &self.lat);
        query.set_opt("lon", &self.lon);
        query.set_opt("radius", &self.radius);
        query.set_opt("language", &self.language);
        query.set_list("idxSet", &self.idx_set);
        query.set_list("categorySet", &self.category_set);
        query.set_list("brandSet", &self.brand_set);
        query.set_opt("minFuzzyLevel", &self.min_fuzzy_level);
        query.set_opt("maxFuzzyLevel", &self.max_fuzzy_level);
        query.set_opt("view", &self.view);
        query.set_opt("openingHours", &self.opening_hours);
        query.set_opt("relatedPois", &self.related_pois);
        query
    }
}

/// Parameters for the nearby search endpoint; the position is required.
#[derive(Debug, Clone)]
pub struct NearbySearchParams {
    pub lat: f64,
    pub lon: f64,
    pub radius: Option<u32>,
    pub limit: Option<u32>,
    pub ofs: Option<u32>,
    pub country_set: Option<Vec<String>>,
    pub language: Option<Language>,
    pub category_set: Option<Vec<u32>>,
    pub brand_set: Option<Vec<String>>,
    pub view: Option<View>,
}

impl NearbySearchParams {
    pub fn new(position: LatLon) -> Self {
        Self {
            lat: position.lat,
            lon: position.lon,
            radius: None,
            limit: None,
            ofs: None,
            country_set: None,
            language: None,
            category_set: None,
            brand_set: None,
            view: None,
        }
    }
}

impl QueryParams for NearbySearchParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set("lat", &self.lat);
        query.set("lon", &self.lon);
        query.set_opt("radius", &self.radius);
        query.set_opt("limit", &self.limit);
        query.set_opt("ofs", &self.ofs);
        query.set_list("countrySet", &self.country_set);
        query.set_opt("language", &self.language);
        query.set_list("categorySet", &self.category_set);
        query.set_list("brandSet", &self.brand_set);
        query.set_opt("view", &self.view);
        query
    }
}

/// Parameters for the along-route search endpoint.
#[derive(Debug, Clone)]
pub struct AlongRouteSearchParams {
    /// Maximum detour time in seconds, up to 3600.
    pub max_detour_time: u32,
    pub limit: Option<u32>,
    pub category_set: Option<Vec<u32>>,
    pub brand_set: Option<Vec<String>>,
    pub spreading_mode: Option<String>,
}

impl AlongRouteSearchParams {
    pub fn new(max_detour_time: u32) -> Self {
        Self {
            max_detour_time,
            limit: None,
            category_set: None,
            brand_set: None,
            spreading_mode: None,
        }
    }
}

impl QueryParams for AlongRouteSearchParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set("maxDetourTime", &self.max_detour_time);
        query.set_opt("limit", &self.limit);
        query.set_list("categorySet", &self.category_set);
        query.set_list("brandSet", &self.brand_set);
        query.set_opt("spreadingMode", &self.spreading_mode);
        query
    }
}

/// Parameters for the autocomplete endpoint.
#[derive(Debug, Clone, Default)]
pub struct AutocompleteParams {
    pub limit: Option<u32>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub radius: Option<u32>,
    pub country_set: Option<Vec<String>>,
    pub result_set: Option<Vec<String>>,
}

impl QueryParams for AutocompleteParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set_opt("limit", &self.limit);
        query.set_opt("lat", &self.lat);
        query.set_opt("lon", &self.lon);
        query.set_opt("radius", &self.radius);
        query.set_list("countrySet", &self.country_set);
        query.set_list("resultSet", &self.result_set);
        query
    }
}

/// Parameters for the reverse geocode endpoint.
#[derive(Debug, Clone, Default)]
pub struct ReverseGeocodeParams {
    pub return_speed_limit: Option<bool>,
    pub radius: Option<u32>,
    pub number: Option<String>,
    pub return_road_use: Option<bool>,
    pub road_use: Option<Vec<String>>,
    pub allow_freeform_new_line: Option<bool>,
    pub return_match_type: Option<bool>,
    pub view: Option<View>,
}

impl QueryParams for ReverseGeocodeParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set_opt("returnSpeedLimit", &self.return_speed_limit);
        query.set_opt("radius", &self.radius);
        query.set_opt("number", &self.number);
        query.set_opt("returnRoadUse", &self.return_road_use);
        query.set_list("roadUse", &self.road_use);
        query.set_opt("allowFreeformNewLine", &self.allow_freeform_new_line);
        query.set_opt("returnMatchType", &self.return_match_type);
        query.set_opt("view", &self.view);
        query
    }
}

/// Parameters for the cross street lookup endpoint.
#[derive(Debug, Clone, Default)]
pub struct CrossStreetLookupParams {
    pub limit: Option<u32>,
    pub radius: Option<u32>,
    pub language: Option<Language>,
    pub allow_freeform_new_line: Option<bool>,
    pub view: Option<View>,
}

impl QueryParams for CrossStreetLookupParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set_opt("limit", &self.limit);
        query.set_opt("radius", &self.radius);
        query.set_opt("language", &self.language);
        query.set_opt("allowFreeformNewLine", &self.allow_freeform_new_line);
        query.set_opt("view", &self.view);
        query
    }
}

/// Route geometry posted to the along-route search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlongRouteSearchPostData {
    pub route: RoutePoints,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePoints {
    pub points: Vec<LatLon>,
}

/// Request body for the synchronous batch endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPostData {
    #[serde(rename = "batchItems")]
    pub batch_items: Vec<BatchItem>,
}

/// One sub-request of a batch; the query is a relative endpoint path such
/// as `/search/2/geocode/Amsterdam.json?limit=1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItem {
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    #[serde(rename = "formatVersion")]
    pub format_version: Option<String>,
    pub summary: BatchResponseSummary,
    #[serde(rename = "batchItems")]
    pub batch_items: Vec<BatchItemResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponseSummary {
    #[serde(rename = "successfulRequests")]
    pub successful_requests: u32,
    #[serde(rename = "totalRequests")]
    pub total_requests: u32,
}

/// One sub-response of a batch; the payload shape depends on the queried
/// endpoint, so it stays a generic structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItemResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub response: serde_json::Value,
}

/// Response envelope for search and geocode queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub summary: SearchSummary,
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSummary {
    pub query: Option<String>,
    pub query_type: Option<String>,
    pub query_time: Option<u64>,
    pub num_results: u32,
    pub offset: Option<u32>,
    pub total_results: Option<u32>,
    pub fuzzy_level: Option<u32>,
    pub geo_bias: Option<LatLon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub result_type: Option<String>,
    pub id: Option<String>,
    pub score: Option<f64>,
    pub dist: Option<f64>,
    pub info: Option<String>,
    pub poi: Option<Poi>,
    pub address: Option<Address>,
    pub position: Option<LatLon>,
    pub viewport: Option<Viewport>,
    pub entry_points: Option<Vec<EntryPoint>>,
    pub match_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poi {
    pub name: String,
    pub phone: Option<String>,
    pub url: Option<String>,
    pub brands: Option<Vec<Brand>>,
    pub categories: Option<Vec<String>>,
    pub category_set: Option<Vec<CategoryId>>,
    pub classifications: Option<Vec<Classification>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryId {
    pub id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub code: String,
    pub names: Option<Vec<ClassificationName>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationName {
    pub name_locale: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub municipality_subdivision: Option<String>,
    pub municipality: Option<String>,
    pub country_secondary_subdivision: Option<String>,
    pub country_subdivision: Option<String>,
    pub country_subdivision_name: Option<String>,
    pub postal_code: Option<String>,
    pub extended_postal_code: Option<String>,
    pub country_code: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "countryCodeISO3")]
    pub country_code_iso3: Option<String>,
    pub freeform_address: Option<String>,
    pub local_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub top_left_point: LatLon,
    pub btm_right_point: LatLon,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
    #[serde(rename = "type")]
    pub entry_type: String,
    pub position: LatLon,
}

/// Response envelope for reverse geocode queries. Positions come back in
/// the `"lat,lon"` wire form rather than as structured values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverseGeocodeResponse {
    pub summary: ReverseGeocodeSummary,
    pub addresses: Vec<ReverseGeocodeAddress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseGeocodeSummary {
    pub query_time: Option<u64>,
    pub num_results: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseGeocodeAddress {
    pub address: Address,
    pub position: Option<String>,
    pub match_type: Option<String>,
}

/// Response envelope for autocomplete queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutocompleteResponse {
    pub context: AutocompleteContext,
    pub results: Vec<AutocompleteResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteContext {
    pub input_query: String,
    pub geo_bias: Option<GeoBias>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoBias {
    pub position: Option<LatLon>,
    pub radius: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutocompleteResult {
    pub segments: Vec<AutocompleteSegment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteSegment {
    #[serde(rename = "type")]
    pub segment_type: String,
    pub value: String,
    pub matches: Option<serde_json::Value>,
}
