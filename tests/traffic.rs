//! Integration tests for the Traffic API.

use mockito::Matcher;
use url::Url;

use tomtom_apis::client::{ApiClient, ApiOptions};
use tomtom_apis::geo::MapTile;
use tomtom_apis::traffic::models::{
    BoundingBox, IncidentDetailsParams, IncidentStyle, RasterIncidentTilesParams,
};
use tomtom_apis::traffic::TrafficApi;

const API_KEY: &str = "test-api-key";

fn api_for(server: &mockito::ServerGuard) -> TrafficApi {
    let client =
        ApiClient::with_base_url(ApiOptions::new(API_KEY), Url::parse(&server.url()).unwrap())
            .unwrap();
    TrafficApi::with_client(client)
}

#[tokio::test]
async fn incident_details_come_back_as_a_generic_structure() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/traffic/services/5/incidentDetails")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("bbox".into(), "4.8854,52.36199,4.9169,52.37935".into()),
            Matcher::UrlEncoded("key".into(), API_KEY.into()),
            Matcher::UrlEncoded("timeValidityFilter".into(), "present,future".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
              "incidents": [
                {
                  "type": "Feature",
                  "properties": { "iconCategory": 8 },
                  "geometry": { "type": "Point", "coordinates": [4.9021, 52.3676] }
                }
              ]
            }"#,
        )
        .create_async()
        .await;

    let api = api_for(&server);
    let params = IncidentDetailsParams {
        time_validity_filter: Some(vec!["present".to_string(), "future".to_string()]),
        ..Default::default()
    };
    let incidents = api
        .get_incident_details(
            BoundingBox::new(4.8854, 52.36199, 4.9169, 52.37935),
            Some(&params),
        )
        .await
        .unwrap();

    assert_eq!(incidents["incidents"].as_array().unwrap().len(), 1);
    assert_eq!(incidents["incidents"][0]["properties"]["iconCategory"], 8);
    mock.assert_async().await;
}

#[tokio::test]
async fn incident_viewport_path_carries_both_boxes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            "/traffic/services/4/incidentViewport/4.8854,52.36199,4.9169,52.37935/11/4.8,52.3,5.0,52.4/9/true/json",
        )
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"viewpResp":{"trafficState":{"@trafficModelId":"1693923600"}}}"#)
        .create_async()
        .await;

    let api = api_for(&server);
    let viewport = api
        .get_incident_viewport(
            BoundingBox::new(4.8854, 52.36199, 4.9169, 52.37935),
            11,
            BoundingBox::new(4.8, 52.3, 5.0, 52.4),
            9,
            true,
        )
        .await
        .unwrap();

    assert!(viewport["viewpResp"]["trafficState"]["@trafficModelId"].is_string());
    mock.assert_async().await;
}

#[tokio::test]
async fn raster_incident_tile_is_fetched_as_bytes() {
    let tile_bytes: &[u8] = &[0x89, b'P', b'N', b'G'];

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/traffic/map/4/tile/incidents/s1/12/2044/1360.png")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("key".into(), API_KEY.into()),
            Matcher::UrlEncoded("tileSize".into(), "256".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(tile_bytes)
        .create_async()
        .await;

    let api = api_for(&server);
    let params = RasterIncidentTilesParams {
        tile_size: Some(256),
        ..Default::default()
    };
    let body = api
        .get_raster_incident_tile(
            IncidentStyle::S1,
            MapTile::new(2044, 1360, 12),
            Some(&params),
        )
        .await
        .unwrap();

    assert_eq!(body.as_ref(), tile_bytes);
    mock.assert_async().await;
}

#[tokio::test]
async fn vector_incident_tile_is_fetched_as_bytes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/traffic/map/4/tile/incidents/12/2044/1360.pbf")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/x-protobuf")
        .with_body([0x1a, 0x03])
        .create_async()
        .await;

    let api = api_for(&server);
    let body = api
        .get_vector_incident_tile(MapTile::new(2044, 1360, 12), None)
        .await
        .unwrap();

    assert_eq!(body.len(), 2);
    mock.assert_async().await;
}
