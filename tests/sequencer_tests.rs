//! Sequencing tests
//!
//! Nearest-to-region lookup, greedy ordering and tour end pinning.

mod fixtures;

use std::collections::HashSet;

use temple_tour_planner::region::{self, RegionReference};
use temple_tour_planner::{
    Coordinate, Temple, Waypoint, find_nearest_to_region, plan_sequence, sequence,
};

use fixtures::sri_lanka_temples::{self, all_temples};

// ============================================================================
// Test Fixtures
// ============================================================================

fn point(id: &str, lat: f64, lng: f64) -> Temple {
    Temple::new(id, id, lat, lng)
}

fn ids<'a>(route: &[&'a Temple]) -> Vec<&'a str> {
    route.iter().map(|temple| temple.id.as_str()).collect()
}

fn region_at(lat: f64, lng: f64) -> RegionReference {
    RegionReference::new("reference", Coordinate::new(lat, lng).unwrap())
}

// ============================================================================
// find_nearest_to_region
// ============================================================================

#[test]
fn nearest_to_region_empty_is_none() {
    let empty: Vec<Temple> = Vec::new();
    let jaffna = region::district("Jaffna").unwrap();
    assert!(find_nearest_to_region(&empty, jaffna).is_none());
}

#[test]
fn nearest_to_region_tie_goes_to_first() {
    let temples = vec![point("east", 0.0, 1.0), point("west", 0.0, -1.0)];
    let nearest = find_nearest_to_region(&temples, &region_at(0.0, 0.0)).unwrap();
    assert_eq!(nearest.id, "east");

    let reversed = vec![point("west", 0.0, -1.0), point("east", 0.0, 1.0)];
    let nearest = find_nearest_to_region(&reversed, &region_at(0.0, 0.0)).unwrap();
    assert_eq!(nearest.id, "west");
}

#[test]
fn nearest_to_real_districts() {
    let temples = all_temples();

    let jaffna = region::district("Jaffna").unwrap();
    assert_eq!(find_nearest_to_region(&temples, jaffna).unwrap().id, "nallur");

    let trinco = region::district("Trincomalee").unwrap();
    assert_eq!(find_nearest_to_region(&temples, trinco).unwrap().id, "koneswaram");

    let matale = region::district("Matale").unwrap();
    assert_eq!(find_nearest_to_region(&temples, matale).unwrap().id, "muthumariamman");
}

// ============================================================================
// sequence
// ============================================================================

#[test]
fn sequence_empty_is_empty() {
    let empty: Vec<Temple> = Vec::new();
    assert!(sequence(&empty, (0.0, 0.0)).is_empty());
}

#[test]
fn sequence_greedy_from_origin() {
    let temples = vec![point("a", 0.0, 1.0), point("c", 0.0, 5.0), point("b", 0.0, 3.0)];
    let route = sequence(&temples, (0.0, 0.0));

    let locations: Vec<(f64, f64)> = route.iter().map(|t| t.location()).collect();
    assert_eq!(locations, vec![(0.0, 1.0), (0.0, 3.0), (0.0, 5.0)]);
}

#[test]
fn sequence_is_permutation() {
    let temples = all_temples();
    let colombo = region::district("Colombo").unwrap().coordinate;
    let route = sequence(&temples, colombo.into());

    assert_eq!(route.len(), temples.len());
    let routed: HashSet<&str> = ids(&route).into_iter().collect();
    let input: HashSet<&str> = temples.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(routed, input);
}

#[test]
fn sequence_crosses_anchor_when_other_side_is_nearer() {
    // Greedy has no sense of direction, only of the next hop.
    let temples = vec![
        point("w2", 0.0, -2.0),
        point("e1", 0.0, 0.9),
        point("w1", 0.0, -1.0),
        point("e3", 0.0, 3.0),
    ];
    let route = sequence(&temples, (0.0, 0.0));
    assert_eq!(ids(&route), vec!["e1", "w1", "w2", "e3"]);
}

#[test]
fn sequence_leaves_input_untouched() {
    let temples = all_temples();
    let before = temples.clone();
    let _ = sequence(&temples, (7.0, 80.0));
    assert_eq!(temples, before);
}

// ============================================================================
// plan_sequence
// ============================================================================

#[test]
fn plan_jaffna_to_colombo() {
    let temples: Vec<Temple> = sri_lanka_temples::NORTH
        .iter()
        .chain(&sri_lanka_temples::WEST_AND_SOUTH[..3])
        .map(|location| location.temple())
        .collect();

    let jaffna = region::district("Jaffna").unwrap();
    let colombo = region::district("Colombo").unwrap();
    let route = plan_sequence(&temples, jaffna, colombo);

    assert_eq!(route.len(), temples.len());
    assert_eq!(route.first().unwrap().id, "nallur");
    assert_eq!(route.last().unwrap().id, "new-kathiresan");
}

#[test]
fn plan_with_same_start_and_end() {
    let temples = all_temples();
    let kandy = region::district("Kandy").unwrap();
    let route = plan_sequence(&temples, kandy, kandy);

    assert_eq!(route.len(), temples.len());
    let unique: HashSet<&str> = ids(&route).into_iter().collect();
    assert_eq!(unique.len(), temples.len());
}
