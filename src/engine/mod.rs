mod estimate_api;
mod location_api;

use std::sync::Arc;

use crate::{
    api::API,
    config::Config,
    entities::{is_within_service_area, Coordinates, RateTable, ServiceArea},
    error::{invalid_input_error, out_of_service_area_error, Error},
    external::{google_maps, MapsProvider},
};

pub struct Engine {
    maps: Arc<dyn MapsProvider>,
    service_area: ServiceArea,
    rates: RateTable,
}

impl Engine {
    pub fn new(maps: Arc<dyn MapsProvider>, service_area: ServiceArea, rates: RateTable) -> Self {
        Self {
            maps,
            service_area,
            rates,
        }
    }

    #[tracing::instrument(name = "Engine::from_config", skip_all)]
    pub fn from_config(config: &Config) -> Self {
        let maps = google_maps::Client::new(
            config.google_maps_api_base.clone(),
            config.google_maps_api_key.clone(),
        );

        tracing::info!(
            "service area {:?} centered at {}",
            config.service_area,
            config.service_area.center()
        );

        Self::new(Arc::new(maps), config.service_area, config.rates.clone())
    }

    /// Rejects a selection outside the geofence; the caller picks another location.
    fn ensure_within_service_area(&self, coordinates: &Coordinates) -> Result<(), Error> {
        if !coordinates.is_valid() {
            return Err(invalid_input_error());
        }

        if !is_within_service_area(coordinates, &self.service_area) {
            tracing::warn!("{} is outside the service area", coordinates);
            return Err(out_of_service_area_error());
        }

        Ok(())
    }
}

impl API for Engine {}
