//! Environment-driven configuration

use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::geo::{maps::DEFAULT_MAPS_URL, Coordinate};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/location";

pub struct Config {
    pub endpoint: String,
    pub port: u16,
    pub ack_delay: Duration,
    pub request_timeout: Duration,
    pub position_timeout: Duration,
    pub maps_url: String,
    pub fixed_position: Option<Coordinate>,
}

impl Config {
    /// Loads configuration from `GEOBEACON_*` environment variables
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let latitude: Option<f64> = try_parse(&lookup, "GEOBEACON_LATITUDE")?;
        let longitude: Option<f64> = try_parse(&lookup, "GEOBEACON_LONGITUDE")?;

        let fixed_position = match (latitude, longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)?),
            (None, None) => None,
            _ => {
                return Err(Error::Config(
                    "GEOBEACON_LATITUDE and GEOBEACON_LONGITUDE must be set together".to_string(),
                ))
            }
        };

        Ok(Self {
            endpoint: try_load(&lookup, "GEOBEACON_ENDPOINT", DEFAULT_ENDPOINT)?,
            port: try_load(&lookup, "GEOBEACON_PORT", "3000")?,
            ack_delay: millis(try_load(&lookup, "GEOBEACON_ACK_DELAY_MS", "1000")?),
            request_timeout: millis(try_load(&lookup, "GEOBEACON_REQUEST_TIMEOUT_MS", "10000")?),
            position_timeout: millis(try_load(&lookup, "GEOBEACON_POSITION_TIMEOUT_MS", "10000")?),
            maps_url: try_load(&lookup, "GEOBEACON_MAPS_URL", DEFAULT_MAPS_URL)?,
            fixed_position,
        })
    }
}

fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    parse(key, &raw)
}

fn try_parse<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map(|raw| parse(key, &raw)).transpose()
}

fn parse<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        Error::Config(format!("{key}={raw}: {e}"))
    })
}
