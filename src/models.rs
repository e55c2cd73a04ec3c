//! Shared enums used across several endpoint families.

use serde::{Deserialize, Serialize};

use crate::params::ToWire;

/// Language tags accepted by the map and search services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "de-DE")]
    German,
    #[serde(rename = "en-GB")]
    BritishEnglish,
    #[serde(rename = "en-US")]
    AmericanEnglish,
    #[serde(rename = "es-ES")]
    Spanish,
    #[serde(rename = "fr-FR")]
    French,
    #[serde(rename = "it-IT")]
    Italian,
    #[serde(rename = "ko-KR")]
    Korean,
    #[serde(rename = "nl-NL")]
    Dutch,
    #[serde(rename = "pt-PT")]
    Portuguese,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::German => "de-DE",
            Language::BritishEnglish => "en-GB",
            Language::AmericanEnglish => "en-US",
            Language::Spanish => "es-ES",
            Language::French => "fr-FR",
            Language::Italian => "it-IT",
            Language::Korean => "ko-KR",
            Language::Dutch => "nl-NL",
            Language::Portuguese => "pt-PT",
        }
    }
}

impl ToWire for Language {
    fn to_wire(&self) -> String {
        self.as_str().to_string()
    }
}

/// Geopolitical view; controls disputed-border rendering and result sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    #[serde(rename = "Unified")]
    Unified,
    #[serde(rename = "AR")]
    Argentina,
    #[serde(rename = "IN")]
    India,
    #[serde(rename = "IL")]
    Israel,
    #[serde(rename = "MA")]
    Morocco,
    #[serde(rename = "PK")]
    Pakistan,
    #[serde(rename = "RU")]
    Russia,
    #[serde(rename = "TR")]
    Turkey,
    #[serde(rename = "CN")]
    China,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Unified => "Unified",
            View::Argentina => "AR",
            View::India => "IN",
            View::Israel => "IL",
            View::Morocco => "MA",
            View::Pakistan => "PK",
            View::Russia => "RU",
            View::Turkey => "TR",
            View::China => "CN",
        }
    }
}

impl ToWire for View {
    fn to_wire(&self) -> String {
        self.as_str().to_string()
    }
}

/// Raster tile edge length in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileSize {
    #[serde(rename = "256")]
    Px256,
    #[serde(rename = "512")]
    Px512,
}

impl TileSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileSize::Px256 => "256",
            TileSize::Px512 => "512",
        }
    }
}

impl ToWire for TileSize {
    fn to_wire(&self) -> String {
        self.as_str().to_string()
    }
}

/// Travel modes shared by the routing and search services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelMode {
    #[serde(rename = "car")]
    Car,
    #[serde(rename = "truck")]
    Truck,
    #[serde(rename = "taxi")]
    Taxi,
    #[serde(rename = "bus")]
    Bus,
    #[serde(rename = "van")]
    Van,
    #[serde(rename = "motorcycle")]
    Motorcycle,
    #[serde(rename = "bicycle")]
    Bicycle,
    #[serde(rename = "pedestrian")]
    Pedestrian,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Car => "car",
            TravelMode::Truck => "truck",
            TravelMode::Taxi => "taxi",
            TravelMode::Bus => "bus",
            TravelMode::Van => "van",
            TravelMode::Motorcycle => "motorcycle",
            TravelMode::Bicycle => "bicycle",
            TravelMode::Pedestrian => "pedestrian",
        }
    }
}

impl ToWire for TravelMode {
    fn to_wire(&self) -> String {
        self.as_str().to_string()
    }
}
