use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::ToWire;

/// Zoom levels supported by the tile grid.
pub const MIN_ZOOM_LEVEL: u8 = 0;
pub const MAX_ZOOM_LEVEL: u8 = 22;

/// Latitude band in which the Web Mercator projection is defined.
pub const MIN_LAT: f64 = -85.051128779807;
pub const MAX_LAT: f64 = 85.051128779806;

pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Wire form used in path segments: `"lat,lon"`.
    pub fn to_comma_separated(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }
}

impl ToWire for LatLon {
    fn to_wire(&self) -> String {
        self.to_comma_separated()
    }
}

/// A geographic position in degrees, in the long-name wire form the
/// routing services use (`latitude`/`longitude` instead of `lat`/`lon`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatitudeLongitude {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatitudeLongitude {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<LatLon> for LatitudeLongitude {
    fn from(position: LatLon) -> Self {
        Self {
            latitude: position.lat,
            longitude: position.lon,
        }
    }
}

/// A tile address in the quad-tree grid covering the Web Mercator
/// projection; the grid has `2^zoom` tiles per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapTile {
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
}

impl MapTile {
    pub fn new(x: u32, y: u32, zoom: u8) -> Self {
        Self { x, y, zoom }
    }
}

/// Domain-range violation in a coordinate or tile conversion.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    #[error("zoom level value {value} is out of range [{}, {}]", MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL)]
    ZoomOutOfRange { value: u8 },

    #[error("latitude value {value} is out of range [{}, {}]", MIN_LAT, MAX_LAT)]
    LatitudeOutOfRange { value: f64 },

    #[error("longitude value {value} is out of range [{}, {}]", MIN_LON, MAX_LON)]
    LongitudeOutOfRange { value: f64 },

    #[error("tile x value {value} is out of range [0, {max}]")]
    TileXOutOfRange { value: i64, max: u64 },

    #[error("tile y value {value} is out of range [0, {max}]")]
    TileYOutOfRange { value: i64, max: u64 },
}
