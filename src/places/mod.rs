//! Places APIs: search, geocoding, reverse geocoding and batch search.

pub mod batch_search;
pub mod geocoding;
pub mod models;
pub mod reverse_geocoding;
pub mod search;

pub use batch_search::BatchSearchApi;
pub use geocoding::GeocodingApi;
pub use reverse_geocoding::ReverseGeocodingApi;
pub use search::SearchApi;
