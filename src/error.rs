//! Error types shared across the planner.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlannerError>;

/// A latitude/longitude pair that cannot be placed on the map.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("coordinate ({lat}, {lng}) is not finite")]
    NonFinite { lat: f64, lng: f64 },

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// An encoded polyline that does not decode to a whole number of points.
///
/// Offsets are byte positions into the encoded string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolylineError {
    #[error("invalid polyline byte 0x{byte:02x} at offset {offset}")]
    InvalidCharacter { byte: u8, offset: usize },

    #[error("polyline ends inside the value starting at offset {offset}")]
    Truncated { offset: usize },

    #[error("polyline ends after a latitude with no longitude at offset {offset}")]
    MissingLongitude { offset: usize },

    #[error("polyline value starting at offset {offset} exceeds 35 bits")]
    Overflow { offset: usize },
}

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("routing provider returned no route")]
    NoRoute,

    #[error("a route needs at least two coordinates, got {0}")]
    TooFewCoordinates(usize),

    #[error("route geometry is malformed: {0}")]
    Polyline(#[from] PolylineError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration from environment: {0}")]
    Env(#[from] envy::Error),
}

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    #[error("waypoint '{name}' has an invalid location: {source}")]
    InvalidWaypoint {
        name: String,
        #[source]
        source: CoordinateError,
    },

    #[error("waypoint '{name}' appears more than once")]
    DuplicateWaypoint { name: String },

    #[error("routing failed: {0}")]
    Routing(#[from] RoutingError),
}
