//! # tomtom-apis-rust
//!
//! Asynchronous typed client for the TomTom web services: map display,
//! places (search, geocoding), routing, traffic and automotive data.
//!
//! ## Overview
//!
//! Every product area gets a thin typed API struct that translates method
//! calls into HTTP requests against the REST endpoints and translates the
//! responses back into typed models. All of them run on the same engine:
//! [`client::ApiClient`] owns the HTTP session, merges default and per-call
//! parameters and headers, issues the request and classifies failures into
//! the [`Error`] taxonomy.
//!
//! ## Key properties
//!
//! - **Typed end to end**: parameters are declared structs encoded by the
//!   [`params`] codec; responses deserialize into declared models, a
//!   generic JSON structure, text or raw bytes.
//! - **One session, many APIs**: endpoint APIs either own a session or
//!   share one through `with_client`; concurrent calls need no locking.
//! - **Nothing swallowed**: every failure surfaces as a distinct [`Error`]
//!   variant with its cause attached; resilience policy (retries, caching)
//!   is deliberately left to the caller.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use tomtom_apis::client::ApiOptions;
//! use tomtom_apis::places::SearchApi;
//!
//! #[tokio::main]
//! async fn main() -> tomtom_apis::Result<()> {
//!     let api = SearchApi::new(ApiOptions::new("your-api-key"))?;
//!
//!     let results = api.get_search("pizza", None).await?;
//!     println!("{} results", results.summary.num_results);
//!
//!     api.close();
//!     Ok(())
//! }
//! ```
//!
//! ## Module organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Base client, options and the buffered response envelope |
//! | [`params`] | Query-parameter codec (wire encoding rules) |
//! | [`geo`] | Coordinate and tile-grid conversions |
//! | [`maps`] | Map Display API (raster/vector tiles, static images, copyrights) |
//! | [`places`] | Search, Geocoding, Reverse Geocoding and Batch Search APIs |
//! | [`routing`] | Routing API (routes, reachable range) |
//! | [`traffic`] | Traffic API (incidents, incident tiles) |
//! | [`automotive`] | Fuel Prices and Parking Availability APIs |

pub mod automotive;
pub mod client;
pub mod geo;
pub mod maps;
pub mod models;
pub mod params;
pub mod places;
pub mod routing;
pub mod traffic;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;

// Re-export main types for convenience
pub use client::{ApiClient, ApiOptions, ApiResponse, BaseUrl};
pub use geo::{lat_lon_to_tile_zxy, tile_zxy_to_lat_lon, GeoError, LatLon, MapTile};
