use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "snake_case")]
pub enum VehicleClass {
    Sedan,
    Suv,
    Van,
    Luxury,
}

impl Default for VehicleClass {
    fn default() -> Self {
        Self::Sedan
    }
}

/// Unknown names fall back to sedan so an estimate can always be produced.
impl From<&str> for VehicleClass {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "sedan" => Self::Sedan,
            "suv" => Self::Suv,
            "van" => Self::Van,
            "luxury" => Self::Luxury,
            other => {
                tracing::debug!("unknown vehicle class {:?}, using sedan rates", other);
                Self::Sedan
            }
        }
    }
}

impl From<String> for VehicleClass {
    fn from(name: String) -> Self {
        name.as_str().into()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleRate {
    pub base_fare: f64,
    pub per_kilometer_rate: f64,
}

impl VehicleRate {
    pub const fn new(base_fare: f64, per_kilometer_rate: f64) -> Self {
        Self {
            base_fare,
            per_kilometer_rate,
        }
    }
}

/// Per-class distance pricing plus one time rate shared by every class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub sedan: VehicleRate,
    pub suv: VehicleRate,
    pub van: VehicleRate,
    pub luxury: VehicleRate,
    pub time_rate_per_minute: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            sedan: VehicleRate::new(5.5, 2.2),
            suv: VehicleRate::new(7.0, 2.8),
            van: VehicleRate::new(8.0, 3.0),
            luxury: VehicleRate::new(12.0, 4.0),
            time_rate_per_minute: 0.5,
        }
    }
}

impl RateTable {
    pub fn rate(&self, vehicle_class: VehicleClass) -> VehicleRate {
        match vehicle_class {
            VehicleClass::Sedan => self.sedan,
            VehicleClass::Suv => self.suv,
            VehicleClass::Van => self.van,
            VehicleClass::Luxury => self.luxury,
        }
    }

    /// `base + km * per_km + min * time_rate`, rounded to the nearest cent.
    /// The rounded value is what callers see, not the raw formula result.
    pub fn estimate_fare(
        &self,
        distance_km: f64,
        duration_min: u64,
        vehicle_class: VehicleClass,
    ) -> f64 {
        let rate = self.rate(vehicle_class);

        let fare = rate.base_fare
            + distance_km * rate.per_kilometer_rate
            + duration_min as f64 * self.time_rate_per_minute;

        round_to_cents(fare)
    }
}

/// Prices a trip with the default rates. `vehicle_class` accepts any name.
pub fn estimate_fare(distance_km: f64, duration_min: u64, vehicle_class: impl Into<VehicleClass>) -> f64 {
    RateTable::default().estimate_fare(distance_km, duration_min, vehicle_class.into())
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sedan_fare() {
        assert_eq!(estimate_fare(15.0, 20, "sedan"), 48.5);
        assert_eq!(estimate_fare(30.0, 40, VehicleClass::Sedan), 91.5);
    }

    #[test]
    fn unknown_class_uses_sedan_rates() {
        assert_eq!(estimate_fare(10.0, 20, "unknown"), estimate_fare(10.0, 20, "sedan"));
        assert_eq!(VehicleClass::from(""), VehicleClass::Sedan);
        assert_eq!(VehicleClass::from(" SUV "), VehicleClass::Suv);
    }

    #[test]
    fn time_rate_is_shared_across_classes() {
        let rates = RateTable::default();

        for class in [
            VehicleClass::Sedan,
            VehicleClass::Suv,
            VehicleClass::Van,
            VehicleClass::Luxury,
        ] {
            let extra = rates.estimate_fare(0.0, 10, class) - rates.estimate_fare(0.0, 0, class);
            assert!((extra - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn fare_is_monotonic() {
        let rates = RateTable::default();

        for class in [VehicleClass::Sedan, VehicleClass::Luxury] {
            let mut previous = rates.estimate_fare(0.0, 0, class);
            for step in 1..200u64 {
                let distance = step as f64 * 0.37;
                let fare = rates.estimate_fare(distance, step / 3, class);
                assert!(fare >= previous);
                previous = fare;
            }
        }
    }

    #[test]
    fn fare_grows_with_distance_alone() {
        let rates = RateTable::default();

        for class in [VehicleClass::Sedan, VehicleClass::Van] {
            for duration_min in [0, 17, 240] {
                let mut previous = rates.estimate_fare(0.0, duration_min, class);
                for step in 1..500u64 {
                    let fare = rates.estimate_fare(step as f64 * 0.013, duration_min, class);
                    assert!(fare >= previous);
                    previous = fare;
                }
            }
        }
    }

    #[test]
    fn fare_grows_with_duration_alone() {
        let rates = RateTable::default();

        for class in [VehicleClass::Suv, VehicleClass::Luxury] {
            for distance_km in [0.0, 3.217, 88.4] {
                let mut previous = rates.estimate_fare(distance_km, 0, class);
                for duration_min in 1..500u64 {
                    let fare = rates.estimate_fare(distance_km, duration_min, class);
                    assert!(fare >= previous);
                    previous = fare;
                }
            }
        }
    }

    #[test]
    fn fare_is_rounded_to_cents() {
        let rates = RateTable::default();

        assert_eq!(rates.estimate_fare(0.001, 0, VehicleClass::Sedan), 5.5);
        assert_eq!(rates.estimate_fare(0.005, 0, VehicleClass::Sedan), 5.51);
    }

    #[test]
    fn deserializes_any_name() {
        let class: VehicleClass = serde_json::from_str(r#""luxury""#).unwrap();
        assert_eq!(class, VehicleClass::Luxury);

        let class: VehicleClass = serde_json::from_str(r#""limousine""#).unwrap();
        assert_eq!(class, VehicleClass::Sedan);

        assert_eq!(serde_json::to_string(&VehicleClass::Van).unwrap(), r#""van""#);
    }
}
