use thiserror::Error;

pub use crate::geo::GeoError;

/// Unified error type for the TomTom API client.
///
/// Every failed call surfaces exactly one of these variants; nothing is
/// downgraded to a generic failure and the original cause is kept as the
/// error source where one exists.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured request timeout elapsed before the call completed.
    #[error("timeout occurred while communicating with the API")]
    Timeout(#[source] reqwest::Error),

    /// Transport-level failure establishing or maintaining the connection,
    /// including name-resolution failures.
    #[error("error occurred while communicating with the API")]
    Connection(#[source] reqwest::Error),

    /// HTTP status in `400..500` — caller-side fault (bad parameters,
    /// authentication, not found).
    #[error("client error: HTTP {status}")]
    Client { status: u16, body: String },

    /// HTTP status `>= 500` — vendor-side fault.
    #[error("server error: HTTP {status}")]
    Server { status: u16, body: String },

    /// Any other non-success HTTP outcome (e.g. an unhandled redirect).
    #[error("response error: HTTP {status}")]
    GenericApi { status: u16, body: String },

    /// The response body did not match the expected typed shape.
    #[error("failed to deserialize response into {target}")]
    Deserialization {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The response body was not valid JSON.
    #[error("failed to decode JSON response")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be encoded as JSON.
    #[error("failed to serialize request body")]
    Serialization(#[source] serde_json::Error),

    /// An argument was outside its valid domain.
    #[error(transparent)]
    OutOfRange(#[from] GeoError),

    /// The client was used after `close()`.
    #[error("client is closed")]
    Closed,
}

impl Error {
    /// Classify a non-success HTTP status into the error taxonomy.
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        match status {
            400..=499 => Error::Client { status, body },
            500.. => Error::Server { status, body },
            _ => Error::GenericApi { status, body },
        }
    }

    /// Classify a transport failure reported by reqwest.
    pub(crate) fn from_transport(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Error::Timeout(source)
        } else {
            Error::Connection(source)
        }
    }

    /// HTTP status carried by the error, if the failure came from a
    /// completed exchange.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Client { status, .. }
            | Error::Server { status, .. }
            | Error::GenericApi { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert!(matches!(
            Error::from_status(400, String::new()),
            Error::Client { status: 400, .. }
        ));
        assert!(matches!(
            Error::from_status(404, String::new()),
            Error::Client { status: 404, .. }
        ));
        assert!(matches!(
            Error::from_status(503, String::new()),
            Error::Server { status: 503, .. }
        ));
        assert!(matches!(
            Error::from_status(304, String::new()),
            Error::GenericApi { status: 304, .. }
        ));
    }

    #[test]
    fn status_accessor() {
        assert_eq!(Error::from_status(404, String::new()).status(), Some(404));
        assert!(Error::Closed.status().is_none());
    }
}
