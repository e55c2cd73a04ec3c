use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// A buffered API response.
///
/// The body is read from the network exactly once, at construction; every
/// access mode below reads the buffer, so the same response can be consumed
/// repeatedly and in any combination of shapes.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl ApiResponse {
    /// Buffer the body of a completed HTTP exchange.
    pub(crate) async fn buffer(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(Error::from_transport)?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Deserialize the body into a typed response model.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        tracing::debug!(model = std::any::type_name::<T>(), "deserializing response");
        serde_json::from_slice(&self.body).map_err(|source| Error::Deserialization {
            target: std::any::type_name::<T>(),
            source,
        })
    }

    /// Deserialize the body into a generic JSON structure.
    pub fn structure(&self) -> Result<serde_json::Value> {
        serde_json::from_slice(&self.body).map_err(Error::Decode)
    }

    /// The body as text (invalid UTF-8 is replaced, not rejected).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// The raw body bytes. Cheap to call repeatedly.
    pub fn bytes(&self) -> Bytes {
        self.body.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Caption {
        #[serde(rename = "copyrightsCaption")]
        copyrights_caption: String,
    }

    fn json_response(body: &str) -> ApiResponse {
        ApiResponse::from_parts(StatusCode::OK, HeaderMap::new(), Bytes::from(body.to_string()))
    }

    #[test]
    fn every_access_mode_works_on_the_same_response() {
        let response = json_response(r#"{"copyrightsCaption":"© 1992 - 2026 TomTom."}"#);

        let typed: Caption = response.deserialize().unwrap();
        assert_eq!(typed.copyrights_caption, "© 1992 - 2026 TomTom.");

        let value = response.structure().unwrap();
        assert_eq!(
            value["copyrightsCaption"].as_str(),
            Some("© 1992 - 2026 TomTom.")
        );

        assert!(response.text().contains("copyrightsCaption"));
        assert!(!response.bytes().is_empty());

        // Reads are repeatable, including through the same mode twice.
        let again: Caption = response.deserialize().unwrap();
        assert_eq!(again.copyrights_caption, typed.copyrights_caption);
    }

    #[test]
    fn deserialize_failure_names_the_target_and_keeps_the_cause() {
        let response = json_response(r#"{"unexpected":true}"#);
        let err = response.deserialize::<Caption>().unwrap_err();
        match err {
            Error::Deserialization { target, .. } => assert!(target.contains("Caption")),
            other => panic!("expected Deserialization error, got {other:?}"),
        }
        assert!(std::error::Error::source(&response.deserialize::<Caption>().unwrap_err()).is_some());
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let response = json_response("not json");
        assert!(matches!(response.structure(), Err(Error::Decode(_))));
    }

    #[test]
    fn text_and_bytes_for_non_json_bodies() {
        let response = ApiResponse::from_parts(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from_static(&[0x89, b'P', b'N', b'G']),
        );
        assert_eq!(response.bytes().len(), 4);
        // Lossy text access never fails, even on binary bodies.
        let _ = response.text();
    }
}
