//! Map Display API.
//!
//! Raster and vector tiles, static images and copyright captions.

pub mod models;

use bytes::Bytes;

use crate::client::{ApiClient, ApiOptions};
use crate::geo::MapTile;
use crate::params::QueryParams;
use crate::Result;

use models::{
    Layer, LayerWithPoi, MapServiceCopyrightsResponse, MapStyle, MapTileParams, MapTileV1Params,
    MapTileV2Params, StaticImageParams, TileFormat,
};

/// Typed client for the Map Display services.
pub struct MapDisplayApi {
    client: ApiClient,
}

impl MapDisplayApi {
    /// Create an API instance owning a fresh session.
    pub fn new(options: ApiOptions) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(options)?,
        })
    }

    /// Create an API instance on a shared session.
    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn close(&self) {
        self.client.close();
    }

    /// Fetch a raster map tile.
    pub async fn get_map_tile(
        &self,
        layer: Layer,
        style: MapStyle,
        tile: MapTile,
        format: TileFormat,
        params: Option<&MapTileParams>,
    ) -> Result<Bytes> {
        let endpoint = format!(
            "/map/1/tile/{}/{}/{}/{}/{}.{}",
            layer.as_str(),
            style.as_str(),
            tile.zoom,
            tile.x,
            tile.y,
            format.as_str()
        );
        let response = self
            .client
            .get(&endpoint, params.map(|p| p as &dyn QueryParams), None)
            .await?;
        Ok(response.bytes())
    }

    /// Fetch a satellite tile.
    pub async fn get_satellite_tile(&self, tile: MapTile, format: TileFormat) -> Result<Bytes> {
        let endpoint = format!(
            "/map/1/tile/sat/main/{}/{}/{}.{}",
            tile.zoom,
            tile.x,
            tile.y,
            format.as_str()
        );
        let response = self.client.get(&endpoint, None, None).await?;
        Ok(response.bytes())
    }

    /// Fetch a hillshade (terrain elevation) tile.
    pub async fn get_hillshade_tile(&self, tile: MapTile, format: TileFormat) -> Result<Bytes> {
        let endpoint = format!(
            "/map/1/tile/hill/main/{}/{}/{}.{}",
            tile.zoom,
            tile.x,
            tile.y,
            format.as_str()
        );
        let response = self.client.get(&endpoint, None, None).await?;
        Ok(response.bytes())
    }

    /// Render a user-defined rectangular map image.
    pub async fn get_static_image(&self, params: Option<&StaticImageParams>) -> Result<Bytes> {
        let response = self
            .client
            .get(
                "/map/1/staticimage",
                params.map(|p| p as &dyn QueryParams),
                None,
            )
            .await?;
        Ok(response.bytes())
    }

    /// Fetch a vector tile (schema v1).
    pub async fn get_tile_v1(
        &self,
        layer: LayerWithPoi,
        tile: MapTile,
        params: Option<&MapTileV1Params>,
    ) -> Result<Bytes> {
        let endpoint = format!(
            "/map/1/tile/{}/main/{}/{}/{}.pbf",
            layer.as_str(),
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

    /// Fetch a vector tile (schema v2).
    pub async fn get_tile_v2(
        &self,
        layer: LayerWithPoi,
        tile: MapTile,
        params: Option<&MapTileV2Params>,
    ) -> Result<Bytes> {
        let endpoint = format!(
            "/map/1/tile/{}/{}/{}/{}.pbf",
            layer.as_str(),
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

    /// Full copyright notice for the map service, as plain text.
    pub async fn get_map_copyrights(&self) -> Result<String> {
        let response = self.client.get("/map/2/copyrights", None, None).await?;
        Ok(response.text())
    }

    /// Copyright caption for the map service.
    pub async fn get_map_service_copyrights(&self) -> Result<MapServiceCopyrightsResponse> {
        let response = self
            .client
            .get("/map/2/copyrights/caption.json", None, None)
            .await?;
        response.deserialize()
    }
}
