use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    entities::{Coordinates, Location, PlaceSuggestion, RouteLeg, ServiceArea},
    error::{invalid_input_error, upstream_error, Error},
    external::MapsProvider,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Place {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Prediction {
    place_id: String,
    description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsRoute {
    legs: Vec<DirectionsLeg>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsLeg {
    distance: Measure,
    duration: Measure,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct Measure {
    value: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    result: Option<T>,
    results: Option<T>,
    predictions: Option<T>,
    routes: Option<T>,
}

impl Place {
    fn into_location(self) -> Location {
        let coordinates = Coordinates {
            latitude: self.geometry.location.lat,
            longitude: self.geometry.location.lng,
        };

        Location::new(coordinates, self.formatted_address)
    }
}

impl Prediction {
    fn into_suggestion(self) -> PlaceSuggestion {
        PlaceSuggestion {
            place_id: self.place_id,
            description: self.description,
        }
    }
}

impl DirectionsLeg {
    fn into_route_leg(self) -> RouteLeg {
        RouteLeg::new(self.distance.value, self.duration.value)
    }
}

pub struct Client {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn new(api_base: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base,
            api_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("https://{}/maps/api/{}/json", self.api_base, path)
    }

    async fn get<T>(&self, request: reqwest::RequestBuilder) -> Result<Response<T>, Error>
    where
        T: for<'de> Deserialize<'de>,
    {
        let res = request.query(&[("key", &self.api_key)]).send().await?;

        let status_code = res.status().as_u16();

        if (400..500).contains(&status_code) {
            tracing::warn!("maps request rejected with status {}", status_code);
            return Err(invalid_input_error());
        } else if status_code != 200 {
            tracing::warn!("maps request failed with status {}", status_code);
            return Err(upstream_error());
        }

        Ok(res.json().await?)
    }
}

// statuses caused by what the caller sent: a stale place id, too many stops
const REJECTED_STATUSES: [&str; 4] = [
    "INVALID_REQUEST",
    "NOT_FOUND",
    "MAX_WAYPOINTS_EXCEEDED",
    "MAX_ROUTE_LENGTH_EXCEEDED",
];

fn check_status<T>(data: &Response<T>, accepted: &[&str]) -> Result<(), Error> {
    let status = data.status.as_str();

    if accepted.contains(&status) {
        return Ok(());
    }

    tracing::warn!("maps response status {}", status);

    if REJECTED_STATUSES.contains(&status) {
        return Err(invalid_input_error());
    }

    Err(upstream_error())
}

fn location_from_details_response(data: Response<Place>) -> Result<Location, Error> {
    check_status(&data, &["OK"])?;

    Ok(data.result.ok_or_else(upstream_error)?.into_location())
}

fn suggestions_from_response(
    data: Response<Vec<Prediction>>,
) -> Result<Vec<PlaceSuggestion>, Error> {
    check_status(&data, &["OK", "ZERO_RESULTS"])?;

    if data.status == "ZERO_RESULTS" {
        return Ok(vec![]);
    }

    let predictions = data.predictions.ok_or_else(upstream_error)?;

    Ok(predictions.into_iter().map(Prediction::into_suggestion).collect())
}

fn location_from_geocode_response(
    data: Response<Vec<Place>>,
) -> Result<Option<Location>, Error> {
    check_status(&data, &["OK", "ZERO_RESULTS"])?;

    if data.status == "ZERO_RESULTS" {
        return Ok(None);
    }

    let results = data.results.ok_or_else(upstream_error)?;

    Ok(results.into_iter().next().map(Place::into_location))
}

fn legs_from_directions_response(
    data: Response<Vec<DirectionsRoute>>,
) -> Result<Option<Vec<RouteLeg>>, Error> {
    check_status(&data, &["OK", "ZERO_RESULTS", "NOT_FOUND"])?;

    if data.status != "OK" {
        return Ok(None);
    }

    let routes = data.routes.ok_or_else(upstream_error)?;

    Ok(routes
        .into_iter()
        .next()
        .map(|route| route.legs.into_iter().map(DirectionsLeg::into_route_leg).collect()))
}

#[async_trait]
impl MapsProvider for Client {
    #[tracing::instrument(skip(self))]
    async fn find_place_suggestions(
        &self,
        input: String,
        area: ServiceArea,
        session_token: String,
    ) -> Result<Vec<PlaceSuggestion>, Error> {
        let request = self
            .http
            .get(self.url("place/autocomplete"))
            .query(&[("input", input)])
            .query(&[("locationrestriction", area.to_rectangle_param())])
            .query(&[("sessiontoken", session_token)]);

        let data: Response<Vec<Prediction>> = self.get(request).await?;

        suggestions_from_response(data)
    }

    #[tracing::instrument(skip(self))]
    async fn find_place(&self, place_id: String, session_token: String) -> Result<Location, Error> {
        let request = self
            .http
            .get(self.url("place/details"))
            .query(&[("sessiontoken", session_token)])
            .query(&[("place_id", place_id)])
            .query(&[("fields", "formatted_address,geometry")]);

        let data: Response<Place> = self.get(request).await?;

        location_from_details_response(data)
    }

    #[tracing::instrument(skip(self))]
    async fn geocode(&self, address: String) -> Result<Option<Location>, Error> {
        let request = self
            .http
            .get(self.url("geocode"))
            .query(&[("address", address)]);

        let data: Response<Vec<Place>> = self.get(request).await?;

        location_from_geocode_response(data)
    }

    #[tracing::instrument(skip(self))]
    async fn find_route(
        &self,
        waypoints: Vec<Coordinates>,
        departure_time: Option<DateTime<Utc>>,
    ) -> Result<Option<Vec<RouteLeg>>, Error> {
        let (origin, destination) = match (waypoints.first(), waypoints.last()) {
            (Some(origin), Some(destination)) if waypoints.len() >= 2 => (origin, destination),
            _ => return Err(invalid_input_error()),
        };

        let mut request = self
            .http
            .get(self.url("directions"))
            .query(&[("origin", origin.to_string())])
            .query(&[("destination", destination.to_string())]);

        let stops = &waypoints[1..waypoints.len() - 1];
        if !stops.is_empty() {
            let stops: Vec<String> = stops.iter().map(|stop| stop.to_string()).collect();
            request = request.query(&[("waypoints", stops.join("|"))]);
        }

        if let Some(departure_time) = departure_time {
            request = request.query(&[("departure_time", departure_time.timestamp())]);
        }

        let data: Response<Vec<DirectionsRoute>> = self.get(request).await?;

        legs_from_directions_response(data)
    }
}
