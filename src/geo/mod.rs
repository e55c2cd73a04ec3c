//! Coordinate and tile-grid conversions.
//!
//! Conversions between geographic coordinates (latitude/longitude in
//! degrees) and the Web Mercator tile grid used by the map, traffic and
//! satellite tile services. The grid has `2^zoom` tiles per axis for zoom
//! levels 0 through 22.

mod types;

pub use types::{
    GeoError, LatLon, LatitudeLongitude, MapTile, MAX_LAT, MAX_LON, MAX_ZOOM_LEVEL, MIN_LAT,
    MIN_LON, MIN_ZOOM_LEVEL,
};

use std::f64::consts::PI;

/// Convert a location to the map tile containing it at the given zoom level.
///
/// Fails with a range error when the zoom level is outside `[0, 22]`, the
/// latitude is outside the Web Mercator band, or the longitude is outside
/// `[-180, 180]`.
pub fn lat_lon_to_tile_zxy(lat: f64, lon: f64, zoom_level: u8) -> Result<MapTile, GeoError> {
    if zoom_level > MAX_ZOOM_LEVEL {
        return Err(GeoError::ZoomOutOfRange { value: zoom_level });
    }
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(GeoError::LatitudeOutOfRange { value: lat });
    }
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(GeoError::LongitudeOutOfRange { value: lon });
    }

    let tiles_per_axis = 2.0_f64.powi(zoom_level as i32);
    let x = ((lon + 180.0) / 360.0 * tiles_per_axis) as u32;

    let lat_rad = lat.to_radians();
    let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * tiles_per_axis) as u32;

    Ok(MapTile {
        x,
        y,
        zoom: zoom_level,
    })
}

/// Convert a map tile to the location of its northwest corner.
///
/// Fails with a range error when the zoom level is outside `[0, 22]` or the
/// tile indices are outside `[0, 2^zoom - 1]`.
pub fn tile_zxy_to_lat_lon(zoom_level: u8, x: i64, y: i64) -> Result<LatLon, GeoError> {
    if zoom_level > MAX_ZOOM_LEVEL {
        return Err(GeoError::ZoomOutOfRange { value: zoom_level });
    }

    let max_xy = (1_u64 << zoom_level) - 1;
    if x < 0 || x as u64 > max_xy {
        return Err(GeoError::TileXOutOfRange { value: x, max: max_xy });
    }
    if y < 0 || y as u64 > max_xy {
        return Err(GeoError::TileYOutOfRange { value: y, max: max_xy });
    }

    let tiles_per_axis = 2.0_f64.powi(zoom_level as i32);
    let lon = (x as f64 / tiles_per_axis) * 360.0 - 180.0;

    let n = PI - (2.0 * PI * y as f64) / tiles_per_axis;
    let lat = (180.0 / PI) * (0.5 * (n.exp() - (-n).exp())).atan();

    Ok(LatLon { lat, lon })
}
