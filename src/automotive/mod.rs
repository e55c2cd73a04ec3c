//! Automotive APIs: fuel prices and parking availability.

pub mod models;

use crate::client::{ApiClient, ApiOptions};
use crate::Result;

use models::{
    FuelPriceParams, FuelPricesResponse, ParkingAvailabilityParams, ParkingAvailabilityResponse,
};

/// Typed client for the Fuel Prices API. Data refreshes roughly every ten
/// minutes.
pub struct FuelPricesApi {
    client: ApiClient,
}

impl FuelPricesApi {
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

    /// Current prices of the fuel types available at a station.
    pub async fn get_fuel_price(&self, params: &FuelPriceParams) -> Result<FuelPricesResponse> {
        let response = self
            .client
            .get("/search/2/fuelPrice.json", Some(params), None)
            .await?;
        response.deserialize()
    }
}

/// Typed client for the Parking Availability API.
pub struct ParkingAvailabilityApi {
    client: ApiClient,
}

impl ParkingAvailabilityApi {
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

    /// Current availability status of a parking site, including the number
    /// of free spots.
    pub async fn get_parking_availability(
        &self,
        params: &ParkingAvailabilityParams,
    ) -> Result<ParkingAvailabilityResponse> {
        let response = self
            .client
            .get("/search/2/parkingAvailability.json", Some(params), None)
            .await?;
        response.deserialize()
    }
}
