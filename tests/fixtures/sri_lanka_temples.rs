//! Real Hindu temple locations in Sri Lanka for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap, rounded to four decimals.
//! All are routable with the Geofabrik Sri Lanka extract.

use temple_tour_planner::Temple;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(id: &'static str, name: &'static str, lat: f64, lng: f64) -> Self {
        Self { id, name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn temple(&self) -> Temple {
        Temple::new(self.id, self.name, self.lat, self.lng)
    }
}

// ============================================================================
// Northern Province
// ============================================================================

pub const NORTH: &[Location] = &[
    Location::new("nallur", "Nallur Kandaswamy Kovil", 9.6747, 80.0293),
    Location::new("naguleswaram", "Naguleswaram Temple", 9.8161, 80.0458),
    Location::new("maviddapuram", "Maviddapuram Kandaswamy Kovil", 9.7862, 80.0371),
    Location::new("nainativu", "Nainativu Nagapooshani Amman", 9.6143, 79.7743),
    Location::new("ketheeswaram", "Thiruketheeswaram Temple", 8.9397, 79.9294),
];

// ============================================================================
// Eastern Province
// ============================================================================

pub const EAST: &[Location] = &[
    Location::new("koneswaram", "Koneswaram Temple", 8.5833, 81.2461),
    Location::new("mamangam", "Mamangam Pillaiyar Kovil", 7.7360, 81.6810),
    Location::new("thirukkovil", "Thirukkovil Chithira Velayutha Swamy", 7.1170, 81.8540),
];

// ============================================================================
// Western, Central and Southern
// ============================================================================

pub const WEST_AND_SOUTH: &[Location] = &[
    Location::new("munneswaram", "Munneswaram Temple", 7.5802, 79.8162),
    Location::new("ponnambalavaneswaram", "Sri Ponnambalavaneswaram", 6.8556, 79.8650),
    Location::new("new-kathiresan", "New Kathiresan Kovil", 6.9440, 79.8540),
    Location::new("muthumariamman", "Matale Sri Muthumariamman", 7.4705, 80.6233),
    Location::new("seetha-amman", "Seetha Amman Temple", 6.9247, 80.8090),
    Location::new("kataragama", "Kataragama Devalaya", 6.4172, 81.3326),
];

pub fn all_temples() -> Vec<Temple> {
    NORTH
        .iter()
        .chain(EAST)
        .chain(WEST_AND_SOUTH)
        .map(Location::temple)
        .collect()
}
