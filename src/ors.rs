//! openrouteservice directions adapter.

use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config;
use crate::coordinate::Coordinate;
use crate::error::{ConfigError, RoutingError};
use crate::polyline::Polyline;
use crate::routing::{Directions, Leg, ensure_routable, to_lng_lat};
use crate::traits::DirectionsProvider;

pub const ORS_API_URL: &str = "https://api.openrouteservice.org";

#[derive(Debug, Clone, Deserialize)]
pub struct OrsConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_profile")]
    pub profile: String,
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    ORS_API_URL.to_string()
}

fn default_profile() -> String {
    "driving-car".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl OrsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            profile: default_profile(),
            api_key: api_key.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Reads `ORS_API_KEY` (required), `ORS_BASE_URL`, `ORS_PROFILE` and
    /// `ORS_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        config::from_prefixed_env("ORS_")
    }
}

#[derive(Debug, Clone)]
pub struct OrsClient {
    config: OrsConfig,
    client: reqwest::blocking::Client,
}

impl OrsClient {
    pub fn new(config: OrsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn directions_url(&self) -> String {
        format!(
            "{}/v2/directions/{}/json",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile
        )
    }
}

impl DirectionsProvider for OrsClient {
    fn directions(&self, coordinates: &[Coordinate]) -> Result<Directions, RoutingError> {
        ensure_routable(coordinates)?;

        let url = self.directions_url();
        let body = DirectionsRequestBody::new(coordinates);
        debug!(%url, count = coordinates.len(), "requesting openrouteservice directions");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, &self.config.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            warn!(%status, %message, "openrouteservice request failed");
            return Err(RoutingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<DirectionsResponse>()?.into_directions()
    }
}

#[derive(Debug, Serialize)]
struct DirectionsRequestBody {
    /// `[longitude, latitude]` pairs in visiting order.
    coordinates: Vec<[f64; 2]>,
    /// Segments (one per leg) are only returned with instructions on.
    instructions: bool,
}

impl DirectionsRequestBody {
    fn new(coordinates: &[Coordinate]) -> Self {
        Self {
            coordinates: coordinates.iter().map(to_lng_lat).collect(),
            instructions: true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<OrsRoute>,
}

#[derive(Debug, Deserialize)]
struct OrsRoute {
    geometry: String,
    #[serde(default)]
    summary: OrsSummary,
    #[serde(default)]
    segments: Vec<OrsSegment>,
}

// Zero-length routes and segments come back without distance/duration.
#[derive(Debug, Default, Deserialize)]
struct OrsSummary {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct OrsSegment {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

impl DirectionsResponse {
    fn into_directions(self) -> Result<Directions, RoutingError> {
        let route = self.routes.into_iter().next().ok_or(RoutingError::NoRoute)?;
        let geometry = Polyline::decode(&route.geometry)?;
        let legs = route
            .segments
            .into_iter()
            .map(|segment| Leg {
                distance_m: segment.distance,
                duration_s: segment.duration,
            })
            .collect();

        Ok(Directions::with_totals(
            geometry,
            legs,
            route.summary.distance,
            route.summary.duration,
        ))
    }
}
