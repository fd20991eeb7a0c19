use serde::{Deserialize, Serialize};

use crate::entities::{RateTable, VehicleClass};

/// One waypoint-to-waypoint segment as reported by the routing provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub distance_meters: u64,
    pub duration_seconds: u64,
}

impl RouteLeg {
    pub fn new(distance_meters: u64, duration_seconds: u64) -> Self {
        Self {
            distance_meters,
            duration_seconds,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TripEstimate {
    Available {
        distance_km: f64,
        duration_min: u64,
        fare: f64,
    },
    Unavailable,
}

impl TripEstimate {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    pub fn fare(&self) -> Option<f64> {
        match self {
            Self::Available { fare, .. } => Some(*fare),
            Self::Unavailable => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteTotals {
    pub distance_meters: u64,
    pub duration_seconds: u64,
}

impl RouteTotals {
    /// Sums the legs, doubling for a round trip. `None` when there are no
    /// legs or the totals do not fit in a `u64`.
    pub fn from_legs(legs: &[RouteLeg], is_round_trip: bool) -> Option<Self> {
        if legs.is_empty() {
            return None;
        }

        let factor: u64 = if is_round_trip { 2 } else { 1 };

        let totals = legs.iter().try_fold((0u64, 0u64), |(meters, seconds), leg| {
            Some((
                meters.checked_add(leg.distance_meters)?,
                seconds.checked_add(leg.duration_seconds)?,
            ))
        });

        let totals = totals.and_then(|(meters, seconds)| {
            Some(Self {
                distance_meters: meters.checked_mul(factor)?,
                duration_seconds: seconds.checked_mul(factor)?,
            })
        });

        if totals.is_none() {
            tracing::warn!("route totals overflow across {} legs", legs.len());
        }

        totals
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_meters as f64 / 1000.0
    }

    /// Partial minutes round up.
    pub fn duration_min(&self) -> u64 {
        self.duration_seconds / 60 + u64::from(self.duration_seconds % 60 != 0)
    }
}

impl RateTable {
    /// The return leg of a round trip is assumed to mirror the outbound route.
    #[tracing::instrument(skip(self, legs), fields(legs = legs.len()))]
    pub fn aggregate_route(
        &self,
        legs: &[RouteLeg],
        is_round_trip: bool,
        vehicle_class: VehicleClass,
    ) -> TripEstimate {
        let totals = match RouteTotals::from_legs(legs, is_round_trip) {
            Some(totals) => totals,
            None => return TripEstimate::Unavailable,
        };

        let distance_km = totals.distance_km();
        let duration_min = totals.duration_min();

        TripEstimate::Available {
            distance_km,
            duration_min,
            fare: self.estimate_fare(distance_km, duration_min, vehicle_class),
        }
    }
}

/// Aggregates legs and prices them with the default rates.
pub fn aggregate_route(
    legs: &[RouteLeg],
    is_round_trip: bool,
    vehicle_class: impl Into<VehicleClass>,
) -> TripEstimate {
    RateTable::default().aggregate_route(legs, is_round_trip, vehicle_class.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_way_trip() {
        let legs = [RouteLeg::new(15000, 1200)];

        assert_eq!(
            aggregate_route(&legs, false, "sedan"),
            TripEstimate::Available {
                distance_km: 15.0,
                duration_min: 20,
                fare: 48.5,
            }
        );
    }

    #[test]
    fn round_trip_doubles_totals() {
        let legs = [RouteLeg::new(15000, 1200)];

        assert_eq!(
            aggregate_route(&legs, true, "sedan"),
            TripEstimate::Available {
                distance_km: 30.0,
                duration_min: 40,
                fare: 91.5,
            }
        );

        let legs = [
            RouteLeg::new(4321, 611),
            RouteLeg::new(987, 95),
            RouteLeg::new(12000, 1333),
        ];
        let one_way = RouteTotals::from_legs(&legs, false).unwrap();
        let round_trip = RouteTotals::from_legs(&legs, true).unwrap();

        assert_eq!(round_trip.distance_meters, 2 * one_way.distance_meters);
        assert_eq!(round_trip.duration_seconds, 2 * one_way.duration_seconds);
    }

    #[test]
    fn sums_multi_stop_legs() {
        let legs = [RouteLeg::new(2500, 300), RouteLeg::new(7500, 901)];

        match aggregate_route(&legs, false, "van") {
            TripEstimate::Available {
                distance_km,
                duration_min,
                fare,
            } => {
                assert_eq!(distance_km, 10.0);
                assert_eq!(duration_min, 21);
                assert_eq!(fare, 8.0 + 30.0 + 10.5);
            }
            TripEstimate::Unavailable => panic!("expected an estimate"),
        }
    }

    #[test]
    fn overflowing_totals_are_unavailable() {
        let doubled_too_far = [RouteLeg::new(u64::MAX / 2 + 1, 60)];
        assert_eq!(aggregate_route(&doubled_too_far, true, "sedan"), TripEstimate::Unavailable);
        assert!(aggregate_route(&doubled_too_far, false, "sedan").is_available());

        let summed_too_far = [RouteLeg::new(1000, u64::MAX - 10), RouteLeg::new(1000, 11)];
        assert_eq!(aggregate_route(&summed_too_far, false, "sedan"), TripEstimate::Unavailable);
    }

    #[test]
    fn minutes_round_up_near_max() {
        let totals = RouteTotals::from_legs(&[RouteLeg::new(1000, u64::MAX - 10)], false).unwrap();
        assert_eq!(totals.duration_min(), u64::MAX / 60 + 1);

        let totals = RouteTotals::from_legs(&[RouteLeg::new(1000, 120)], false).unwrap();
        assert_eq!(totals.duration_min(), 2);

        let totals = RouteTotals::from_legs(&[RouteLeg::new(1000, 121)], false).unwrap();
        assert_eq!(totals.duration_min(), 3);
    }

    #[test]
    fn round_trip_doubles_seconds_before_rounding_minutes() {
        let legs = [RouteLeg::new(1000, 30)];

        assert_eq!(
            aggregate_route(&legs, false, "sedan"),
            TripEstimate::Available {
                distance_km: 1.0,
                duration_min: 1,
                fare: 8.2,
            }
        );
        assert_eq!(
            aggregate_route(&legs, true, "sedan"),
            TripEstimate::Available {
                distance_km: 2.0,
                duration_min: 1,
                fare: 10.4,
            }
        );

        let legs = [RouteLeg::new(15000, 1200), RouteLeg::new(3000, 300)];
        match (aggregate_route(&legs, false, "suv"), aggregate_route(&legs, true, "suv")) {
            (
                TripEstimate::Available {
                    distance_km: one_km,
                    duration_min: one_min,
                    ..
                },
                TripEstimate::Available {
                    distance_km: two_km,
                    duration_min: two_min,
                    ..
                },
            ) => {
                assert_eq!(two_km, 2.0 * one_km);
                assert_eq!(two_min, 2 * one_min);
            }
            _ => panic!("expected estimates"),
        }
    }

    #[test]
    fn no_legs_is_unavailable() {
        let estimate = aggregate_route(&[], false, "sedan");

        assert_eq!(estimate, TripEstimate::Unavailable);
        assert!(!estimate.is_available());
        assert_eq!(estimate.fare(), None);
    }

    #[test]
    fn serializes_with_status_tag() {
        let value = serde_json::to_value(TripEstimate::Unavailable).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "unavailable" }));

        let value = serde_json::to_value(aggregate_route(&[RouteLeg::new(1000, 60)], false, "suv"))
            .unwrap();
        assert_eq!(value["status"], "available");
        assert_eq!(value["duration_min"], 1);
    }
}
