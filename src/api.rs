use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{
    Coordinates, Location, LocationSource, PlaceSuggestion, ServiceArea, TripEstimate,
    VehicleClass,
};
use crate::error::Error;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Pickup, intermediate stops and drop-off, in travel order.
    pub waypoints: Vec<Coordinates>,
    #[serde(default)]
    pub is_round_trip: bool,
    #[serde(default)]
    pub vehicle_class: VehicleClass,
    #[serde(default)]
    pub departure_time: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait LocationAPI {
    async fn create_location(&self, source: LocationSource) -> Result<Location, Error>;

    async fn find_place_suggestions(
        &self,
        input: String,
        session_token: Option<String>,
    ) -> Result<Vec<PlaceSuggestion>, Error>;
}

#[async_trait]
pub trait EstimateAPI {
    fn service_area(&self) -> ServiceArea;

    async fn create_estimate(&self, request: EstimateRequest) -> Result<TripEstimate, Error>;
}

pub trait API: LocationAPI + EstimateAPI {}
