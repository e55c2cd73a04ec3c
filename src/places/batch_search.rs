use crate::client::{ApiClient, ApiOptions};
use crate::params::{Query, QueryParams};
use crate::Result;

use super::models::{BatchPostData, BatchResponse};

/// Parameters for the asynchronous batch download endpoint.
#[derive(Debug, Clone, Default)]
pub struct BatchDownloadParams {
    /// Seconds to hold the request open before answering 202, 5..=60.
    pub wait_time_seconds: Option<u32>,
}

impl QueryParams for BatchDownloadParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set_opt("waitTimeSeconds", &self.wait_time_seconds);
        query
    }
}

/// Typed client for the vendor's Batch Search endpoints. Sub-requests are
/// composed and executed by the service; there is no client-side batching.
pub struct BatchSearchApi {
    client: ApiClient,
}

impl BatchSearchApi {
    pub fn new(options: ApiOptions) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(options)?,
        })
    }

    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn close(&self) {
        self.client.close();
    }

    /// Submit a batch for synchronous processing; the service answers with
    /// the complete result set (or 408 past its 60-second budget).
    pub async fn post_synchronous_batch(&self, data: &BatchPostData) -> Result<BatchResponse> {
        let response = self
            .client
            .post("/search/2/batch/sync.json", None, None, data)
            .await?;
        response.deserialize()
    }

    /// Submit a batch for asynchronous processing; the interesting part of
    /// the answer is the `Location` redirect, so the body stays generic.
    pub async fn post_asynchronous_batch(&self, data: &BatchPostData) -> Result<serde_json::Value> {
        let response = self
            .client
            .post("/search/2/batch.json", None, None, data)
            .await?;
        response.structure()
    }

    /// Download the results of an asynchronous batch.
    pub async fn get_asynchronous_batch_download(
        &self,
        batch_id: &str,
        params: Option<&BatchDownloadParams>,
    ) -> Result<BatchResponse> {
        let endpoint = format!("/search/2/batch/{batch_id}");
        let response = self
            .client
            .get(&endpoint, params.map(|p| p as &dyn QueryParams), None)
            .await?;
        response.deserialize()
    }
}
