//! Tour planning: sequence the selected waypoints between two regions
//! and fetch the road route for that order.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::coordinate::Coordinate;
use crate::error::{PlannerError, Result};
use crate::region::{self, RegionReference};
use crate::routing::Directions;
use crate::sequencer::plan_sequence;
use crate::traits::{DirectionsProvider, Waypoint};

/// A planned tour. Start and end are region coordinates, not stops.
#[derive(Debug, Clone, Serialize)]
pub struct TourPlan<'a, W> {
    pub start: RegionReference,
    pub end: RegionReference,
    pub stops: Vec<&'a W>,
    pub directions: Directions,
}

impl<W: Waypoint> TourPlan<'_, W> {
    pub fn stop_ids(&self) -> Vec<&W::Id> {
        self.stops.iter().map(|stop| stop.id()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct TourPlanner<P> {
    provider: P,
}

impl<P: DirectionsProvider> TourPlanner<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Plans a tour between two districts looked up by name.
    pub fn plan<'a, W: Waypoint>(
        &self,
        start: &str,
        end: &str,
        waypoints: &'a [W],
    ) -> Result<TourPlan<'a, W>> {
        let start = region::district(start)
            .ok_or_else(|| PlannerError::UnknownRegion(start.to_string()))?;
        let end =
            region::district(end).ok_or_else(|| PlannerError::UnknownRegion(end.to_string()))?;

        self.plan_between(start, end, waypoints)
    }

    /// Plans a tour between two arbitrary regions.
    ///
    /// Every waypoint is validated before sequencing; a provider failure is
    /// returned as is and never retried.
    pub fn plan_between<'a, W: Waypoint>(
        &self,
        start: &RegionReference,
        end: &RegionReference,
        waypoints: &'a [W],
    ) -> Result<TourPlan<'a, W>> {
        validate_waypoints(waypoints)?;

        let stops = plan_sequence(waypoints, start, end);
        debug!(start = %start.name, end = %end.name, stops = stops.len(), "sequenced tour");

        let mut coordinates = Vec::with_capacity(stops.len() + 2);
        coordinates.push(start.coordinate);
        for stop in &stops {
            let (lat, lng) = stop.location();
            coordinates.push(Coordinate::from_degrees(lat, lng));
        }
        coordinates.push(end.coordinate);

        let directions = self.provider.directions(&coordinates)?;
        info!(
            start = %start.name,
            end = %end.name,
            stops = stops.len(),
            distance_m = directions.distance_m,
            duration_s = directions.duration_s,
            "planned tour"
        );

        Ok(TourPlan {
            start: start.clone(),
            end: end.clone(),
            stops,
            directions,
        })
    }
}

fn validate_waypoints<W: Waypoint>(waypoints: &[W]) -> Result<()> {
    let mut seen = HashSet::with_capacity(waypoints.len());
    for waypoint in waypoints {
        let (lat, lng) = waypoint.location();
        Coordinate::new(lat, lng).map_err(|source| PlannerError::InvalidWaypoint {
            name: waypoint.name().to_string(),
            source,
        })?;
        if !seen.insert(waypoint.id()) {
            return Err(PlannerError::DuplicateWaypoint {
                name: waypoint.name().to_string(),
            });
        }
    }
    Ok(())
}
