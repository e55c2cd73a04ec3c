//! Models for the Traffic API.

use serde::{Deserialize, Serialize};

use crate::models::Language;
use crate::params::{Query, QueryParams, ToWire};

/// A bounding box in `minLon,minLat,maxLon,maxLat` order, the wire form the
/// incident services expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    pub fn to_comma_separated(&self) -> String {
        format!(
            "{},{},{},{}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

impl ToWire for BoundingBox {
    fn to_wire(&self) -> String {
        self.to_comma_separated()
    }
}

/// Styles of the raster incident tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentStyle {
    S0,
    S1,
    S2,
    S3,
    Night,
}

impl IncidentStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStyle::S0 => "s0",
            IncidentStyle::S1 => "s1",
            IncidentStyle::S2 => "s2",
            IncidentStyle::S3 => "s3",
            IncidentStyle::Night => "night",
        }
    }
}

/// Parameters for the incident details endpoint.
#[derive(Debug, Clone, Default)]
pub struct IncidentDetailsParams {
    /// Projection of the result fields, in the service's field syntax.
    pub fields: Option<String>,
    pub language: Option<Language>,
    /// Traffic model id; freshness of the queried snapshot.
    pub t: Option<String>,
    pub category_filter: Option<Vec<String>>,
    pub time_validity_filter: Option<Vec<String>>,
}

impl QueryParams for IncidentDetailsParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set_opt("fields", &self.fields);
        query.set_opt("language", &self.language);
        query.set_opt("t", &self.t);
        query.set_list("categoryFilter", &self.category_filter);
        query.set_list("timeValidityFilter", &self.time_validity_filter);
        query
    }
}

/// Parameters for the raster incident tile endpoint.
#[derive(Debug, Clone, Default)]
pub struct RasterIncidentTilesParams {
    pub t: Option<String>,
    pub tile_size: Option<u32>,
}

impl QueryParams for RasterIncidentTilesParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set_opt("t", &self.t);
        query.set_opt("tileSize", &self.tile_size);
        query
    }
}

/// Parameters for the vector incident tile endpoint.
#[derive(Debug, Clone, Default)]
pub struct VectorIncidentTilesParams {
    pub t: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl QueryParams for VectorIncidentTilesParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set_opt("t", &self.t);
        query.set_list_brackets("tags", &self.tags);
        query
    }
}

/// Body for the POST variant of incident details: the area of interest as
/// a GeoJSON-like geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentDetailsPostData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<serde_json::Value>,
}
