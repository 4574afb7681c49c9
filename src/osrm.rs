//! OSRM HTTP adapter for route directions.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config;
use crate::coordinate::Coordinate;
use crate::error::{ConfigError, RoutingError};
use crate::polyline::Polyline;
use crate::routing::{Directions, Leg, ensure_routable, to_lng_lat};
use crate::traits::DirectionsProvider;

#[derive(Debug, Clone, Deserialize)]
pub struct OsrmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_profile")]
    pub profile: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_profile() -> String {
    "car".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            profile: default_profile(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OsrmConfig {
    /// Reads `OSRM_BASE_URL`, `OSRM_PROFILE` and `OSRM_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        config::from_prefixed_env("OSRM_")
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn route_url(&self, coordinates: &[Coordinate]) -> String {
        let coords = coordinates
            .iter()
            .map(|coordinate| {
                let [lng, lat] = to_lng_lat(coordinate);
                format!("{:.6},{:.6}", lng, lat)
            })
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/route/v1/{}/{}?overview=full&geometries=polyline&steps=false",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            coords
        )
    }
}

impl DirectionsProvider for OsrmClient {
    fn directions(&self, coordinates: &[Coordinate]) -> Result<Directions, RoutingError> {
        ensure_routable(coordinates)?;

        let url = self.route_url(coordinates);
        debug!(%url, count = coordinates.len(), "requesting OSRM route");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            warn!(%status, %message, "OSRM route request failed");
            return Err(RoutingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.json::<OsrmRouteResponse>()?;
        body.into_directions(status.as_u16())
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: String,
    legs: Vec<OsrmLeg>,
}

#[derive(Debug, Deserialize)]
struct OsrmLeg {
    distance: f64,
    duration: f64,
}

impl OsrmRouteResponse {
    fn into_directions(self, status: u16) -> Result<Directions, RoutingError> {
        if self.code != "Ok" {
            return Err(RoutingError::Api {
                status,
                message: match self.message {
                    Some(message) => format!("{}: {}", self.code, message),
                    None => self.code,
                },
            });
        }

        let route = self.routes.into_iter().next().ok_or(RoutingError::NoRoute)?;
        let geometry = Polyline::decode(&route.geometry)?;
        let legs = route
            .legs
            .into_iter()
            .map(|leg| Leg {
                distance_m: leg.distance,
                duration_s: leg.duration,
            })
            .collect();

        Ok(Directions::from_legs(geometry, legs))
    }
}
