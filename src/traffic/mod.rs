//! Traffic API.
//!
//! Incident details and viewport metadata come back as generic JSON
//! structures (their shape varies with the requested field projection);
//! incident tiles come back as raw image or protobuf bytes.

pub mod models;

use bytes::Bytes;

use crate::client::{ApiClient, ApiOptions};
use crate::geo::MapTile;
use crate::params::QueryParams;
use crate::Result;

use models::{
    BoundingBox, IncidentDetailsParams, IncidentDetailsPostData, IncidentStyle,
    RasterIncidentTilesParams, VectorIncidentTilesParams,
};

/// Typed client for the Traffic services.
pub struct TrafficApi {
    client: ApiClient,
}

impl TrafficApi {
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

    /// Traffic incidents inside (or intersecting) a bounding box.
    pub async fn get_incident_details(
        &self,
        bbox: BoundingBox,
        params: Option<&IncidentDetailsParams>,
    ) -> Result<serde_json::Value> {
        let endpoint = format!(
            "/traffic/services/5/incidentDetails?bbox={}",
            bbox.to_comma_separated()
        );
        let response = self
            .client
            .get(&endpoint, params.map(|p| p as &dyn QueryParams), None)
            .await?;
        response.structure()
    }

    /// Incident details for an area too complex for a bounding box; the
    /// geometry travels in the POST body.
    pub async fn post_incident_details(
        &self,
        params: Option<&IncidentDetailsParams>,
        data: &IncidentDetailsPostData,
    ) -> Result<serde_json::Value> {
        let response = self
            .client
            .post(
                "/traffic/services/5/incidentDetails",
                params.map(|p| p as &dyn QueryParams),
                None,
                data,
            )
            .await?;
        response.structure()
    }

    /// Legal and technical information for a viewport; clients call this
    /// whenever the viewport changes.
    pub async fn get_incident_viewport(
        &self,
        bounding_box: BoundingBox,
        bounding_zoom: u8,
        overview_box: BoundingBox,
        overview_zoom: u8,
        copyright_information: bool,
    ) -> Result<serde_json::Value> {
        let endpoint = format!(
            "/traffic/services/4/incidentViewport/{}/{}/{}/{}/{}/json",
            bounding_box.to_comma_separated(),
            bounding_zoom,
            overview_box.to_comma_separated(),
            overview_zoom,
            copyright_information
        );
        let response = self.client.get(&endpoint, None, None).await?;
        response.structure()
    }

    /// A 256x256 or 512x512 raster tile showing traffic incidents, suitable
    /// for layering over map tiles.
    pub async fn get_raster_incident_tile(
        &self,
        style: IncidentStyle,
        tile: MapTile,
        params: Option<&RasterIncidentTilesParams>,
    ) -> Result<Bytes> {
        let endpoint = format!(
            "/traffic/map/4/tile/incidents/{}/{}/{}/{}.png",
            style.as_str(),
            tile.zoom,
            tile.x,
            tile.y
        );
        let response = self
            .client
            .get(&endpoint, params.map(|p| p as &dyn QueryParams), None)
            .await?;
        Ok(response.bytes())
    }

    /// A vector tile carrying incident geometry.
    pub async fn get_vector_incident_tile(
        &self,
        tile: MapTile,
        params: Option<&VectorIncidentTilesParams>,
    ) -> Result<Bytes> {
        let endpoint = format!(
            "/traffic/map/4/tile/incidents/{}/{}/{}.pbf",
            tile.zoom, tile.x, tile.y
        );
        let response = self
            .client
            .get(&endpoint, params.map(|p| p as &dyn QueryParams), None)
            .await?;
        Ok(response.bytes())
    }
}
