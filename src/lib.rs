//! temple-tour-planner
//!
//! Orders a hand-picked list of temples into a visiting sequence between
//! two Sri Lanka districts, fetches the road route from an external
//! routing provider, and decodes its geometry for the map.

mod config;
pub mod coordinate;
pub mod error;
pub mod haversine;
pub mod ors;
pub mod osrm;
pub mod osrm_data;
pub mod planner;
pub mod polyline;
pub mod region;
pub mod routing;
pub mod sequencer;
pub mod temple;
pub mod traits;

pub use coordinate::Coordinate;
pub use error::{CoordinateError, PlannerError, PolylineError, Result, RoutingError};
pub use planner::{TourPlan, TourPlanner};
pub use polyline::{Polyline, decode_polyline, encode_polyline};
pub use region::RegionReference;
pub use routing::{Directions, Leg, to_lng_lat};
pub use sequencer::{find_nearest_to_region, plan_sequence, sequence};
pub use temple::Temple;
pub use traits::{DirectionsProvider, Waypoint};
