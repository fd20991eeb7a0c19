use geo_types::{Point, Rect};
use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;
use crate::error::{invalid_input_error, Error};

/// Rectangular geofence within which pickups, stops and drop-offs are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceArea {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl ServiceArea {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Result<Self, Error> {
        let corners_valid = Coordinates::new(north, east).is_ok() && Coordinates::new(south, west).is_ok();

        if !corners_valid || north <= south || east <= west {
            return Err(invalid_input_error());
        }

        Ok(Self {
            north,
            south,
            east,
            west,
        })
    }

    /// Bounds are inclusive. Non-finite coordinates are always outside.
    pub fn contains(&self, coordinates: &Coordinates) -> bool {
        if !coordinates.is_finite() {
            return false;
        }

        let point: Point<f64> = (*coordinates).into();
        let bounds: Rect<f64> = (*self).into();

        bounds.min().x <= point.x()
            && point.x() <= bounds.max().x
            && bounds.min().y <= point.y()
            && point.y() <= bounds.max().y
    }

    pub fn center(&self) -> Coordinates {
        let center = Rect::from(*self).center();

        Coordinates {
            latitude: center.y,
            longitude: center.x,
        }
    }

    /// `south,west|north,east`, as used by rectangle restrictions in place queries.
    pub fn to_rectangle_param(&self) -> String {
        format!(
            "rectangle:{},{}|{},{}",
            self.south, self.west, self.north, self.east
        )
    }
}

impl From<ServiceArea> for Rect<f64> {
    fn from(area: ServiceArea) -> Self {
        Rect::new((area.west, area.south), (area.east, area.north))
    }
}

pub fn is_within_service_area(coordinates: &Coordinates, area: &ServiceArea) -> bool {
    area.contains(coordinates)
}
