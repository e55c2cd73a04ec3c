use std::time::Duration;

/// Fixed set of base hosts the services are published on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseUrl {
    /// `https://api.tomtom.com` — the global endpoint.
    #[default]
    Api,
    /// `https://kr-api.tomtom.com` — the South Korea endpoint.
    KrApi,
}

impl BaseUrl {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseUrl::Api => "https://api.tomtom.com",
            BaseUrl::KrApi => "https://kr-api.tomtom.com",
        }
    }
}

/// Options to configure the API client.
///
/// Immutable for the lifetime of a client; created once at construction.
///
/// ```
/// use std::time::Duration;
/// use tomtom_apis::client::{ApiOptions, BaseUrl};
///
/// let options = ApiOptions::new("your-api-key")
///     .with_base_url(BaseUrl::KrApi)
///     .with_gzip_compression(true)
///     .with_timeout(Duration::from_secs(30))
///     .with_tracking_id(true);
/// ```
#[derive(Debug, Clone)]
pub struct ApiOptions {
    /// An API key valid for the requested service.
    pub api_key: String,
    /// The base host requests are issued against.
    pub base_url: BaseUrl,
    /// Ask the service for gzip-compressed responses.
    pub gzip_compression: bool,
    /// End-to-end timeout per call (connect, send and body read).
    pub timeout: Duration,
    /// Attach a fresh `Tracking-ID` header to every call.
    pub tracking_id: bool,
}

impl ApiOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BaseUrl::default(),
            gzip_compression: false,
            timeout: Duration::from_secs(10),
            tracking_id: false,
        }
    }

    pub fn with_base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_gzip_compression(mut self, enable: bool) -> Self {
        self.gzip_compression = enable;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_tracking_id(mut self, enable: bool) -> Self {
        self.tracking_id = enable;
        self
    }
}
