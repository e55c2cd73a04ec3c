//! Integration tests for the Fuel Prices and Parking Availability APIs.

use mockito::Matcher;
use url::Url;

use tomtom_apis::automotive::models::{FuelPriceParams, ParkingAvailabilityParams};
use tomtom_apis::automotive::{FuelPricesApi, ParkingAvailabilityApi};
use tomtom_apis::client::{ApiClient, ApiOptions};

const API_KEY: &str = "test-api-key";

fn base_client(server: &mockito::ServerGuard) -> ApiClient {
    ApiClient::with_base_url(ApiOptions::new(API_KEY), Url::parse(&server.url()).unwrap()).unwrap()
}

#[tokio::test]
async fn fuel_prices_deserialize() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search/2/fuelPrice.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("key".into(), API_KEY.into()),
            Matcher::UrlEncoded("fuelPrice".into(), "f00a7b2b-9c29-4a7f-a891-eeb23dde3a09".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
              "fuelPrice": "f00a7b2b-9c29-4a7f-a891-eeb23dde3a09",
              "fuels": [
                {
                  "type": ["petrol", "petrol95"],
                  "price": [
                    {
                      "value": 2.029,
                      "currency": "EUR",
                      "currencySymbol": "€",
                      "volumeUnit": "liter"
                    }
                  ],
                  "updatedAt": "2023-08-18T14:24:00+00:00"
                }
              ]
            }"#,
        )
        .create_async()
        .await;

    let api = FuelPricesApi::with_client(base_client(&server));
    let response = api
        .get_fuel_price(&FuelPriceParams::new("f00a7b2b-9c29-4a7f-a891-eeb23dde3a09"))
        .await
        .unwrap();

    assert_eq!(response.fuels.len(), 1);
    let fuel = &response.fuels[0];
    assert_eq!(fuel.fuel_type, vec!["petrol", "petrol95"]);
    assert!((fuel.price[0].value - 2.029).abs() < 1e-9);
    assert_eq!(fuel.price[0].currency, "EUR");
    mock.assert_async().await;
}

#[tokio::test]
async fn parking_availability_deserializes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search/2/parkingAvailability.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("key".into(), API_KEY.into()),
            Matcher::UrlEncoded(
                "parkingAvailability".into(),
                "00000000-0007-3ffe-0045-000000001c61".into(),
            ),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
              "parkingAvailability": "00000000-0007-3ffe-0045-000000001c61",
              "statuses": [
                {
                  "current": {
                    "available": true,
                    "emptySpots": 194,
                    "availabilityTrend": "stable",
                    "updatedAt": "2023-08-18T14:24:00+02:00"
                  }
                }
              ]
            }"#,
        )
        .create_async()
        .await;

    let api = ParkingAvailabilityApi::with_client(base_client(&server));
    let response = api
        .get_parking_availability(&ParkingAvailabilityParams::new(
            "00000000-0007-3ffe-0045-000000001c61",
        ))
        .await
        .unwrap();

    assert_eq!(response.statuses.len(), 1);
    let current = &response.statuses[0].current;
    assert!(current.available);
    assert_eq!(current.empty_spots, 194);
    assert_eq!(current.availability_trend, "stable");
    mock.assert_async().await;
}
