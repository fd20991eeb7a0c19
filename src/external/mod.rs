pub mod google_maps;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    entities::{Coordinates, Location, PlaceSuggestion, RouteLeg, ServiceArea},
    error::Error,
};

/// Routing, geocoding and place lookups. Only coordinates and leg
/// distance/duration cross this boundary.
#[async_trait]
pub trait MapsProvider: Send + Sync {
    async fn find_place_suggestions(
        &self,
        input: String,
        area: ServiceArea,
        session_token: String,
    ) -> Result<Vec<PlaceSuggestion>, Error>;

    async fn find_place(&self, place_id: String, session_token: String) -> Result<Location, Error>;

    /// `None` when the address matches nothing.
    async fn geocode(&self, address: String) -> Result<Option<Location>, Error>;

    /// Legs through `waypoints` in order, or `None` when no route exists.
    async fn find_route(
        &self,
        waypoints: Vec<Coordinates>,
        departure_time: Option<DateTime<Utc>>,
    ) -> Result<Option<Vec<RouteLeg>>, Error>;
}
