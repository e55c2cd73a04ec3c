//! Models for the Automotive APIs.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::params::{Query, QueryParams};

/// Parameters for the fuel prices endpoint.
#[derive(Debug, Clone)]
pub struct FuelPriceParams {
    /// Fuel price availability id, obtained from a search result's
    /// `dataSources` section.
    pub fuel_price: String,
}

impl FuelPriceParams {
    pub fn new(fuel_price: impl Into<String>) -> Self {
        Self {
            fuel_price: fuel_price.into(),
        }
    }
}

impl QueryParams for FuelPriceParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set("fuelPrice", &self.fuel_price);
        query
    }
}

/// Parameters for the parking availability endpoint.
#[derive(Debug, Clone)]
pub struct ParkingAvailabilityParams {
    /// Parking availability id, obtained from a search result's
    /// `dataSources` section.
    pub parking_availability: String,
}

impl ParkingAvailabilityParams {
    pub fn new(parking_availability: impl Into<String>) -> Self {
        Self {
            parking_availability: parking_availability.into(),
        }
    }
}

impl QueryParams for ParkingAvailabilityParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set("parkingAvailability", &self.parking_availability);
        query
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub value: f64,
    pub currency: String,
    pub currency_symbol: String,
    pub volume_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fuel {
    #[serde(rename = "type")]
    pub fuel_type: Vec<String>,
    pub price: Vec<Price>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelPricesResponse {
    pub fuel_price: String,
    pub fuels: Vec<Fuel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentAvailability {
    pub available: bool,
    pub empty_spots: u32,
    pub availability_trend: String,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingStatus {
    pub current: CurrentAvailability,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingAvailabilityResponse {
    pub parking_availability: String,
    pub statuses: Vec<ParkingStatus>,
}
