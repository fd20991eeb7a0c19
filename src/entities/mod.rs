mod fare;
mod location;
mod route;
mod service_area;

pub use fare::{estimate_fare, RateTable, VehicleClass, VehicleRate};
pub use location::{Coordinates, Location, LocationSource, PlaceSuggestion};
pub use route::{aggregate_route, RouteLeg, RouteTotals, TripEstimate};
pub use service_area::{is_within_service_area, ServiceArea};
