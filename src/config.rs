use std::env;
use std::net::SocketAddr;

use crate::entities::{RateTable, ServiceArea};
use crate::error::{config_error, Error};

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub google_maps_api_base: String,
    pub google_maps_api_key: String,
    pub service_area: ServiceArea,
    pub rates: RateTable,
}

impl Config {
    /// Reads the process environment after loading `.env`, if present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default =
            |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let listen_addr: SocketAddr = or_default("LISTEN_ADDR", "127.0.0.1:3000").parse()?;
        let google_maps_api_base = or_default("GOOGLE_MAPS_API_BASE", "maps.googleapis.com");
        let google_maps_api_key = lookup("GOOGLE_MAPS_API_KEY")
            .ok_or_else(|| config_error("GOOGLE_MAPS_API_KEY is not set"))?;

        let north: f64 = or_default("SERVICE_AREA_NORTH", "39.05").parse()?;
        let south: f64 = or_default("SERVICE_AREA_SOUTH", "38.55").parse()?;
        let east: f64 = or_default("SERVICE_AREA_EAST", "-8.85").parse()?;
        let west: f64 = or_default("SERVICE_AREA_WEST", "-9.50").parse()?;

        let service_area = ServiceArea::new(north, south, east, west)
            .map_err(|_| config_error((north, south, east, west)))?;

        Ok(Self {
            listen_addr,
            google_maps_api_base,
            google_maps_api_key,
            service_area,
            rates: RateTable::default(),
        })
    }
}
