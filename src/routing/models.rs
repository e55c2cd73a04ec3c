//! Models for the Routing API.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::geo::LatitudeLongitude;
use crate::models::{Language, TravelMode};
use crate::params::{Query, QueryParams, ToWire};

/// Route optimization goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteType {
    Fastest,
    Shortest,
    Efficient,
    Thrilling,
}

impl RouteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::Fastest => "fastest",
            RouteType::Shortest => "shortest",
            RouteType::Efficient => "eco",
            RouteType::Thrilling => "thrilling",
        }
    }
}

impl ToWire for RouteType {
    fn to_wire(&self) -> String {
        self.as_str().to_string()
    }
}

/// Parameters for the calculate route endpoint.
#[derive(Debug, Clone, Default)]
pub struct CalculateRouteParams {
    pub max_alternatives: Option<u32>,
    pub instructions_type: Option<String>,
    pub language: Option<Language>,
    pub compute_best_order: Option<bool>,
    pub route_representation: Option<String>,
    pub compute_travel_time_for: Option<String>,
    pub vehicle_heading: Option<u32>,
    pub section_type: Option<String>,
    pub report: Option<String>,
    /// RFC 3339 departure time, or `now`.
    pub depart_at: Option<String>,
    /// RFC 3339 arrival time; mutually exclusive with `depart_at`.
    pub arrive_at: Option<String>,
    pub route_type: Option<RouteType>,
    pub traffic: Option<bool>,
    pub avoid: Option<Vec<String>>,
    pub travel_mode: Option<TravelMode>,
    pub hilliness: Option<String>,
    pub windingness: Option<String>,
    pub vehicle_max_speed: Option<u32>,
    pub vehicle_weight: Option<u32>,
    pub vehicle_axle_weight: Option<u32>,
    pub vehicle_number_of_axles: Option<u32>,
    pub vehicle_length: Option<f64>,
    pub vehicle_width: Option<f64>,
    pub vehicle_height: Option<f64>,
    pub vehicle_commercial: Option<bool>,
    pub vehicle_load_type: Option<String>,
    pub vehicle_adr_tunnel_restriction_code: Option<String>,
    pub vehicle_engine_type: Option<String>,
}

impl QueryParams for CalculateRouteParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set_opt("maxAlternatives", &self.max_alternatives);
        query.set_opt("instructionsType", &self.instructions_type);
        query.set_opt("language", &self.language);
        query.set_opt("computeBestOrder", &self.compute_best_order);
        query.set_opt("routeRepresentation", &self.route_representation);
        query.set_opt("computeTravelTimeFor", &self.compute_travel_time_for);
        query.set_opt("vehicleHeading", &self.vehicle_heading);
        query.set_opt("sectionType", &self.section_type);
        query.set_opt("report", &self.report);
        query.set_opt("departAt", &self.depart_at);
        query.set_opt("arriveAt", &self.arrive_at);
        query.set_opt("routeType", &self.route_type);
        query.set_opt("traffic", &self.traffic);
        query.set_list("avoid", &self.avoid);
        query.set_opt("travelMode", &self.travel_mode);
        query.set_opt("hilliness", &self.hilliness);
        query.set_opt("windingness", &self.windingness);
        query.set_opt("vehicleMaxSpeed", &self.vehicle_max_speed);
        query.set_opt("vehicleWeight", &self.vehicle_weight);
        query.set_opt("vehicleAxleWeight", &self.vehicle_axle_weight);
        query.set_opt("vehicleNumberOfAxles", &self.vehicle_number_of_axles);
        query.set_opt("vehicleLength", &self.vehicle_length);
        query.set_opt("vehicleWidth", &self.vehicle_width);
        query.set_opt("vehicleHeight", &self.vehicle_height);
        query.set_opt("vehicleCommercial", &self.vehicle_commercial);
        query.set_opt("vehicleLoadType", &self.vehicle_load_type);
        query.set_opt(
            "vehicleAdrTunnelRestrictionCode",
            &self.vehicle_adr_tunnel_restriction_code,
        );
        query.set_opt("vehicleEngineType", &self.vehicle_engine_type);
        query
    }
}

/// Parameters for the calculate reachable range endpoint. Exactly one of
/// the budget fields must be set; the service rejects ambiguous requests.
#[derive(Debug, Clone, Default)]
pub struct CalculateReachableRangeParams {
    pub fuel_budget_in_liters: Option<f64>,
    pub energy_budget_in_kwh: Option<f64>,
    pub time_budget_in_sec: Option<f64>,
    pub distance_budget_in_meters: Option<f64>,
    pub report: Option<String>,
    pub depart_at: Option<String>,
    pub arrive_at: Option<String>,
    pub route_type: Option<RouteType>,
    pub traffic: Option<bool>,
    pub avoid: Option<Vec<String>>,
    pub travel_mode: Option<TravelMode>,
    pub vehicle_max_speed: Option<u32>,
    pub vehicle_weight: Option<u32>,
    pub vehicle_commercial: Option<bool>,
    pub vehicle_engine_type: Option<String>,
    pub constant_speed_consumption_in_liters_per_hundred_km: Option<String>,
    pub current_fuel_in_liters: Option<f64>,
    pub current_charge_in_kwh: Option<f64>,
    pub max_charge_in_kwh: Option<f64>,
    pub auxiliary_power_in_kw: Option<f64>,
}

impl QueryParams for CalculateReachableRangeParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.set_opt("fuelBudgetInLiters", &self.fuel_budget_in_liters);
        query.set_opt("energyBudgetInkWh", &self.energy_budget_in_kwh);
        query.set_opt("timeBudgetInSec", &self.time_budget_in_sec);
        query.set_opt("distanceBudgetInMeters", &self.distance_budget_in_meters);
        query.set_opt("report", &self.report);
        query.set_opt("departAt", &self.depart_at);
        query.set_opt("arriveAt", &self.arrive_at);
        query.set_opt("routeType", &self.route_type);
        query.set_opt("traffic", &self.traffic);
        query.set_list("avoid", &self.avoid);
        query.set_opt("travelMode", &self.travel_mode);
        query.set_opt("vehicleMaxSpeed", &self.vehicle_max_speed);
        query.set_opt("vehicleWeight", &self.vehicle_weight);
        query.set_opt("vehicleCommercial", &self.vehicle_commercial);
        query.set_opt("vehicleEngineType", &self.vehicle_engine_type);
        query.set_opt(
            "constantSpeedConsumptionInLitersPerHundredkm",
            &self.constant_speed_consumption_in_liters_per_hundred_km,
        );
        query.set_opt("currentFuelInLiters", &self.current_fuel_in_liters);
        query.set_opt("currentChargeInkWh", &self.current_charge_in_kwh);
        query.set_opt("maxChargeInkWh", &self.max_charge_in_kwh);
        query.set_opt("auxiliaryPowerInkW", &self.auxiliary_power_in_kw);
        query
    }
}

/// A rectangle defined by its south-west and north-east corners.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    pub south_west_corner: LatitudeLongitude,
    pub north_east_corner: LatitudeLongitude,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangles {
    pub rectangles: Vec<Rectangle>,
}

/// Body for the POST variant of calculate route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRoutePostData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_points: Option<Vec<LatitudeLongitude>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_vignette: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_vignette: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_areas: Option<Rectangles>,
}

/// Body for the POST variant of calculate reachable range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateReachableRangePostData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_vignette: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_vignette: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_areas: Option<Rectangles>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub length_in_meters: u64,
    pub travel_time_in_seconds: u64,
    pub traffic_delay_in_seconds: u64,
    pub traffic_length_in_meters: u64,
    pub departure_time: DateTime<FixedOffset>,
    pub arrival_time: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leg {
    pub summary: RouteSummary,
    pub points: Vec<LatitudeLongitude>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub start_point_index: u32,
    pub end_point_index: u32,
    pub section_type: String,
    pub travel_mode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub summary: RouteSummary,
    pub legs: Vec<Leg>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedRouteResponse {
    pub format_version: String,
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReachableRange {
    pub center: LatitudeLongitude,
    pub boundary: Vec<LatitudeLongitude>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedReachableRangeResponse {
    pub format_version: String,
    pub reachable_range: ReachableRange,
}
