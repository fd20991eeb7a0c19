use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::LocationAPI,
    entities::{Location, LocationSource, PlaceSuggestion},
    error::{invalid_input_error, Error},
};

#[async_trait]
impl LocationAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_location(&self, source: LocationSource) -> Result<Location, Error> {
        let location: Location = match source {
            LocationSource::Coordinates(coordinates) => Location::new(coordinates, "".into()),
            LocationSource::GooglePlaces {
                place_id,
                session_token,
            } => self.maps.find_place(place_id, session_token).await?,
            LocationSource::Address { address } => self
                .maps
                .geocode(address)
                .await?
                .ok_or_else(invalid_input_error)?,
        };

        self.ensure_within_service_area(&location.coordinates)?;

        Ok(location)
    }

    #[tracing::instrument(skip(self))]
    async fn find_place_suggestions(
        &self,
        input: String,
        session_token: Option<String>,
    ) -> Result<Vec<PlaceSuggestion>, Error> {
        let input = input.trim().to_string();

        if input.is_empty() {
            return Ok(vec![]);
        }

        let session_token = session_token.unwrap_or_else(|| Uuid::new_v4().to_string());

        self.maps
            .find_place_suggestions(input, self.service_area, session_token)
            .await
    }
}
