use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_ENCODING, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::Serialize;
use tracing::info;
use url::Url;
use uuid::Uuid;

use crate::client::options::ApiOptions;
use crate::client::response::ApiResponse;
use crate::params::QueryParams;
use crate::{Error, Result};

/// Header carrying the per-call correlation identifier (header names are
/// case-insensitive; the normalized form is what goes on the wire).
pub const TRACKING_ID_HEADER: &str = "tracking-id";

/// Vendor diagnostic headers are surfaced through logging when they carry
/// this prefix.
const TOMTOM_HEADER_PREFIX: &str = "x-tomtom";

const USER_AGENT_VALUE: &str = concat!("TomTomApiRust/", env!("CARGO_PKG_VERSION"));

/// Shared request/response engine behind every endpoint API.
///
/// Owns one HTTP session; connection pooling and concurrent in-flight
/// requests are delegated to the transport. Cloning is cheap and clones
/// share the session and the closed state, so several endpoint APIs can run
/// on a single pool.
///
/// The client must be released with [`close`](ApiClient::close) (idempotent)
/// or by dropping the last clone; calls issued after `close` fail fast with
/// [`Error::Closed`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    options: ApiOptions,
    /// Base URL without a trailing slash; endpoint paths start with one.
    base_url: String,
    http: reqwest::Client,
    closed: AtomicBool,
}

impl ApiClient {
    /// Create a client against the configured base host.
    pub fn new(options: ApiOptions) -> Result<Self> {
        let base_url = options.base_url.as_str().to_string();
        Self::build(options, base_url)
    }

    /// Create a client against an explicit base URL.
    ///
    /// This is primarily for testing with mock servers; production code
    /// should pick a host through [`ApiOptions::with_base_url`].
    pub fn with_base_url(options: ApiOptions, base_url: Url) -> Result<Self> {
        let base_url = base_url.as_str().trim_end_matches('/').to_string();
        Self::build(options, base_url)
    }

    fn build(options: ApiOptions, base_url: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(Error::from_transport)?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                options,
                base_url,
                http,
                closed: AtomicBool::new(false),
            }),
        })
    }

    pub fn options(&self) -> &ApiOptions {
        &self.inner.options
    }

    /// Mark the client closed. Safe to call more than once; only the first
    /// call has an effect. Pooled connections are released when the last
    /// clone is dropped.
    pub fn close(&self) {
        if !self.inner.closed.swap(true, Ordering::SeqCst) {
            info!("API client closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    /// Make a GET request.
    pub async fn get(
        &self,
        endpoint: &str,
        params: Option<&dyn QueryParams>,
        headers: Option<HeaderMap>,
    ) -> Result<ApiResponse> {
        self.request(Method::GET, endpoint, params, headers, None).await
    }

    /// Make a DELETE request.
    pub async fn delete(
        &self,
        endpoint: &str,
        params: Option<&dyn QueryParams>,
        headers: Option<HeaderMap>,
    ) -> Result<ApiResponse> {
        self.request(Method::DELETE, endpoint, params, headers, None)
            .await
    }

    /// Make a POST request with a structured JSON body.
    pub async fn post<D: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: Option<&dyn QueryParams>,
        headers: Option<HeaderMap>,
        data: &D,
    ) -> Result<ApiResponse> {
        let body = serde_json::to_value(data).map_err(Error::Serialization)?;
        self.request(Method::POST, endpoint, params, headers, Some(body))
            .await
    }

    /// Make a PUT request with a structured JSON body.
    pub async fn put<D: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: Option<&dyn QueryParams>,
        headers: Option<HeaderMap>,
        data: &D,
    ) -> Result<ApiResponse> {
        let body = serde_json::to_value(data).map_err(Error::Serialization)?;
        self.request(Method::PUT, endpoint, params, headers, Some(body))
            .await
    }

    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: Option<&dyn QueryParams>,
        headers: Option<HeaderMap>,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse> {
        if self.is_closed() {
            return Err(Error::Closed);
        }

        let query = self.merge_params(params);
        let (request_headers, tracking_id) = self.request_headers(headers);
        let url = format!("{}{}", self.inner.base_url, endpoint);

        info!(
            method = %method,
            endpoint,
            tracking_id = tracking_id.as_deref().unwrap_or("not tracked"),
            "request"
        );

        let mut request = self
            .inner
            .http
            .request(method.clone(), &url)
            .query(&query)
            .headers(request_headers);
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(Error::from_transport)?;

        info!(
            method = %method,
            endpoint,
            status = response.status().as_u16(),
            "response"
        );
        log_diagnostic_headers(response.headers());

        let status = response.status();
        if !status.is_success() {
            let body = ApiResponse::buffer(response)
                .await
                .map(|r| r.text())
                .unwrap_or_default();
            return Err(Error::from_status(status.as_u16(), body));
        }

        ApiResponse::buffer(response).await
    }

    /// Merge default and call parameters. Caller values win every collision
    /// except the reserved credential key, which the configuration always
    /// provides.
    fn merge_params(&self, params: Option<&dyn QueryParams>) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("key", self.inner.options.api_key.clone())];
        if let Some(params) = params {
            pairs.extend(
                params
                    .to_query()
                    .into_pairs()
                    .into_iter()
                    .filter(|(key, _)| *key != "key"),
            );
        }
        pairs
    }

    /// Merge default and call headers, then apply the compression and
    /// tracking options. Returns the generated tracking id, if any.
    fn request_headers(&self, extra: Option<HeaderMap>) -> (HeaderMap, Option<String>) {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        if let Some(extra) = extra {
            headers.extend(extra);
        }

        if self.inner.options.gzip_compression {
            headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
        }

        let mut tracking_id = None;
        if self.inner.options.tracking_id {
            let id = Uuid::new_v4().to_string();
            if let Ok(value) = HeaderValue::from_str(&id) {
                headers.insert(TRACKING_ID_HEADER, value);
                tracking_id = Some(id);
            }
        }

        (headers, tracking_id)
    }
}

fn log_diagnostic_headers(headers: &HeaderMap) {
    for (name, value) in headers {
        // HeaderName normalizes to lowercase.
        if name.as_str().starts_with(TOMTOM_HEADER_PREFIX)
            || name.as_str().eq_ignore_ascii_case(TRACKING_ID_HEADER)
        {
            info!(header = name.as_str(), value = ?value, "response header");
        }
    }
}
