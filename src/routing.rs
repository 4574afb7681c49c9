//! Shared types for talking to external routing providers.

use serde::Serialize;

use crate::coordinate::Coordinate;
use crate::error::RoutingError;
use crate::polyline::Polyline;

/// One leg between two consecutive coordinates of a request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Leg {
    /// Meters.
    pub distance_m: f64,
    /// Seconds.
    pub duration_s: f64,
}

/// A routed path as returned by a provider, geometry already decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Directions {
    pub geometry: Polyline,
    pub legs: Vec<Leg>,
    pub distance_m: f64,
    pub duration_s: f64,
}

impl Directions {
    /// Builds directions from decoded geometry and legs; totals are summed
    /// from the legs.
    pub fn from_legs(geometry: Polyline, legs: Vec<Leg>) -> Self {
        let distance_m = legs.iter().fold(0.0, |total, leg| total + leg.distance_m);
        let duration_s = legs.iter().fold(0.0, |total, leg| total + leg.duration_s);
        Self {
            geometry,
            legs,
            distance_m,
            duration_s,
        }
    }

    /// Builds directions with totals reported by the provider.
    pub fn with_totals(
        geometry: Polyline,
        legs: Vec<Leg>,
        distance_m: f64,
        duration_s: f64,
    ) -> Self {
        Self {
            geometry,
            legs,
            distance_m,
            duration_s,
        }
    }
}

/// Converts an internal coordinate to the `[longitude, latitude]` order
/// routing providers expect.
///
/// This is the only place the axis order is swapped.
pub fn to_lng_lat(coordinate: &Coordinate) -> [f64; 2] {
    [coordinate.lng(), coordinate.lat()]
}

pub(crate) fn ensure_routable(coordinates: &[Coordinate]) -> Result<(), RoutingError> {
    if coordinates.len() < 2 {
        return Err(RoutingError::TooFewCoordinates(coordinates.len()));
    }
    Ok(())
}
