//! Models for the Map Display API.

use serde::{Deserialize, Serialize};

use crate::models::{Language, TileSize, View};
use crate::params::{Query, QueryParams, ToWire};

/// Raster tile content layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Basic,
    Hybrid,
    Labels,
}

impl Layer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Basic => "basic",
            Layer::Hybrid => "hybrid",
            Layer::Labels => "labels",
        }
    }
}

impl ToWire for Layer {
    fn to_wire(&self) -> String {
        self.as_str().to_string()
    }
}

/// Vector tile content layers; the vector services additionally serve POI
/// tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerWithPoi {
    Basic,
    Hybrid,
    Labels,
    Poi,
}

impl LayerWithPoi {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerWithPoi::Basic => "basic",
            LayerWithPoi::Hybrid => "hybrid",
            LayerWithPoi::Labels => "labels",
            LayerWithPoi::Poi => "poi",
        }
    }
}

/// Raster map styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapStyle {
    Main,
    Night,
}

impl MapStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapStyle::Main => "main",
            MapStyle::Night => "night",
        }
    }
}

impl ToWire for MapStyle {
    fn to_wire(&self) -> String {
        self.as_str().to_string()
    }
}

/// Raster tile image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileFormat {
    Png,
    Jpg,
}

impl TileFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileFormat::Png => "png",
            TileFormat::Jpg => "jpg",
        }
    }
}

impl ToWire for TileFormat {
    fn to_wire(&self) -> String {
        self.as_str().to_string()
    }
}

/// Parameters for the raster map tile endpoint.
#[derive(Debug, Clone, Default)]
pub struct MapTileParams {
    pub tile_size: Option<TileSize>,
    pub view: Option<View>,
    pub language: Option<Language>,
}

impl QueryParams for MapTileParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set_opt("tileSize", &self.tile_size);
        query.set_opt("view", &self.view);
        query.set_opt("language", &self.language);
        query
    }
}

/// Parameters for the static image endpoint.
#[derive(Debug, Clone, Default)]
pub struct StaticImageParams {
    pub layer: Option<Layer>,
    pub style: Option<MapStyle>,
    pub x: Option<u32>,
    pub y: Option<u32>,
    pub zoom: Option<u8>,
    /// Center of the image as `lon,lat`.
    pub center: Option<Vec<f64>>,
    pub format: Option<TileFormat>,
    /// Width in pixels, 1..=8192.
    pub width: Option<u32>,
    /// Height in pixels, 1..=8192.
    pub height: Option<u32>,
    /// Bounding box as `minLon,minLat,maxLon,maxLat`.
    pub bbox: Option<Vec<f64>>,
    pub view: Option<View>,
}

impl QueryParams for StaticImageParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set_opt("layer", &self.layer);
        query.set_opt("style", &self.style);
        query.set_opt("x", &self.x);
        query.set_opt("y", &self.y);
        query.set_opt("zoom", &self.zoom);
        query.set_list("center", &self.center);
        query.set_opt("format", &self.format);
        query.set_opt("width", &self.width);
        query.set_opt("height", &self.height);
        query.set_list("bbox", &self.bbox);
        query.set_opt("view", &self.view);
        query
    }
}

/// Parameters for the vector tile endpoint (schema v1).
#[derive(Debug, Clone, Default)]
pub struct MapTileV1Params {
    pub view: Option<View>,
    pub language: Option<Language>,
}

impl QueryParams for MapTileV1Params {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set_opt("view", &self.view);
        query.set_opt("language", &self.language);
        query
    }
}

/// Parameters for the vector tile endpoint (schema v2). The filter lists
/// travel on the wire as bracketed comma-joined strings.
#[derive(Debug, Clone, Default)]
pub struct MapTileV2Params {
    pub view: Option<View>,
    pub language: Option<Language>,
    pub include: Option<Vec<String>>,
    pub general_load_type: Option<Vec<String>>,
    pub dangerous_goods_load_type: Option<Vec<String>>,
    pub emission_class: Option<Vec<String>>,
    pub engine_type: Option<Vec<String>>,
}

impl QueryParams for MapTileV2Params {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set_opt("view", &self.view);
        query.set_opt("language", &self.language);
        query.set_list_brackets("include", &self.include);
        query.set_list_brackets("generalLoadType", &self.general_load_type);
        query.set_list_brackets("dangerousGoodsLoadType", &self.dangerous_goods_load_type);
        query.set_list_brackets("emissionClass", &self.emission_class);
        query.set_list_brackets("engineType", &self.engine_type);
        query
    }
}

/// Copyright captions for the map service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapServiceCopyrightsResponse {
    #[serde(rename = "formatVersion")]
    pub format_version: String,
    #[serde(rename = "copyrightsCaption")]
    pub copyrights_caption: String,
}
