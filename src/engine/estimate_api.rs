use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{EstimateAPI, EstimateRequest},
    entities::{ServiceArea, TripEstimate},
    error::{invalid_input_error, Error},
};

#[async_trait]
impl EstimateAPI for Engine {
    fn service_area(&self) -> ServiceArea {
        self.service_area
    }

    #[tracing::instrument(skip(self))]
    async fn create_estimate(&self, request: EstimateRequest) -> Result<TripEstimate, Error> {
        if request.waypoints.len() < 2 {
            return Err(invalid_input_error());
        }

        for waypoint in request.waypoints.iter() {
            self.ensure_within_service_area(waypoint)?;
        }

        let maybe_legs = self
            .maps
            .find_route(request.waypoints, request.departure_time)
            .await?;

        let estimate = match maybe_legs {
            Some(legs) => {
                self.rates
                    .aggregate_route(&legs, request.is_round_trip, request.vehicle_class)
            }
            None => TripEstimate::Unavailable,
        };

        if !estimate.is_available() {
            tracing::info!("no route between the requested waypoints");
        }

        Ok(estimate)
    }
}
