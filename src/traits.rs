//! Core traits for the tour planner.
//!
//! These are intentionally minimal. Callers implement [`Waypoint`] for
//! their own records; [`crate::temple::Temple`] is the stock one.

use std::hash::Hash;

use crate::coordinate::Coordinate;
use crate::error::RoutingError;
use crate::routing::Directions;

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A point of interest to be visited on a tour.
pub trait Waypoint {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Display name, used in errors and logs.
    fn name(&self) -> &str;

    /// Location coordinates (lat, lng).
    fn location(&self) -> (f64, f64);
}

/// Fetches road geometry and timings for an ordered list of coordinates.
///
/// Implementations make exactly one attempt per call.
pub trait DirectionsProvider {
    fn directions(&self, coordinates: &[Coordinate]) -> Result<Directions, RoutingError>;
}

impl<P: DirectionsProvider + ?Sized> DirectionsProvider for &P {
    fn directions(&self, coordinates: &[Coordinate]) -> Result<Directions, RoutingError> {
        (**self).directions(coordinates)
    }
}
