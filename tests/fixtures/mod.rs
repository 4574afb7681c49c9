//! Test fixtures for temple-tour-planner.
//!
//! Provides real temple locations (from OpenStreetMap) and a scripted
//! directions provider.

#![allow(dead_code, unused_imports)]

pub mod sri_lanka_temples;

pub use sri_lanka_temples::*;

use std::cell::RefCell;

use temple_tour_planner::{
    Coordinate, Directions, DirectionsProvider, Leg, Polyline, RoutingError,
};

/// Records every request and answers with a straight line through the
/// requested coordinates, or a scripted failure.
#[derive(Default)]
pub struct ScriptedProvider {
    pub requests: RefCell<Vec<Vec<Coordinate>>>,
    pub fail_with_status: Option<u16>,
}

impl ScriptedProvider {
    pub fn failing(status: u16) -> Self {
        Self {
            requests: RefCell::default(),
            fail_with_status: Some(status),
        }
    }
}

impl DirectionsProvider for ScriptedProvider {
    fn directions(&self, coordinates: &[Coordinate]) -> Result<Directions, RoutingError> {
        self.requests.borrow_mut().push(coordinates.to_vec());

        if let Some(status) = self.fail_with_status {
            return Err(RoutingError::Api {
                status,
                message: "upstream unavailable".to_string(),
            });
        }

        let points: Vec<(f64, f64)> = coordinates.iter().map(|&c| c.into()).collect();
        let legs = coordinates
            .windows(2)
            .map(|pair| {
                let km = pair[0].distance_km(&pair[1]);
                Leg {
                    distance_m: km * 1000.0,
                    duration_s: km / 40.0 * 3600.0,
                }
            })
            .collect();

        // Round-trip through the wire format like a real provider response.
        let geometry = Polyline::decode(&Polyline::new(points).encode())?;
        Ok(Directions::from_legs(geometry, legs))
    }
}
