//! Shared request/response engine.
//!
//! [`ApiClient`] owns the HTTP session, merges default and per-call
//! parameters and headers, issues the request with the configured timeout
//! and classifies failures into the crate error taxonomy. Endpoint APIs in
//! the sibling modules are thin callers of this engine.

mod core;
mod options;
mod response;

pub use core::{ApiClient, TRACKING_ID_HEADER};
pub use options::{ApiOptions, BaseUrl};
pub use response::ApiResponse;
