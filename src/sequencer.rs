//! Greedy visiting order for a hand-picked set of waypoints.
//!
//! Nearest-neighbor heuristic, O(n²) distance evaluations. Visit lists are
//! curated by hand (dozens of stops), so this is not an optimal tour solver.

use crate::haversine::haversine_km;
use crate::region::RegionReference;
use crate::traits::Waypoint;

/// Returns the waypoint closest to the region's reference coordinate.
///
/// `None` for an empty list. Ties go to the waypoint earliest in the input.
pub fn find_nearest_to_region<'a, W: Waypoint>(
    waypoints: &'a [W],
    region: &RegionReference,
) -> Option<&'a W> {
    nearest_index(waypoints, region.coordinate.into()).map(|index| &waypoints[index])
}

/// Orders `waypoints` by repeatedly visiting the nearest unvisited one,
/// starting from `anchor` (lat, lng).
///
/// The result is a permutation of the input.
pub fn sequence<'a, W: Waypoint>(waypoints: &'a [W], anchor: (f64, f64)) -> Vec<&'a W> {
    sequence_from(waypoints.iter().collect(), anchor)
}

/// Orders a tour between two regions.
///
/// The waypoint nearest `start` goes first and the one nearest `end` (of
/// those left) goes last. The rest are sequenced greedily from the first
/// stop.
pub fn plan_sequence<'a, W: Waypoint>(
    waypoints: &'a [W],
    start: &RegionReference,
    end: &RegionReference,
) -> Vec<&'a W> {
    let mut pool: Vec<&W> = waypoints.iter().collect();
    let Some(first_index) = nearest_index(pool.iter().copied(), start.coordinate.into()) else {
        return Vec::new();
    };
    let first = pool.remove(first_index);
    let last = nearest_index(pool.iter().copied(), end.coordinate.into()).map(|index| pool.remove(index));

    let mut stops = Vec::with_capacity(waypoints.len());
    stops.push(first);
    stops.extend(sequence_from(pool, first.location()));
    stops.extend(last);
    stops
}

fn sequence_from<W: Waypoint>(mut pool: Vec<&W>, anchor: (f64, f64)) -> Vec<&W> {
    let mut route = Vec::with_capacity(pool.len());
    let mut current = anchor;

    // `remove` keeps the pool in input order so ties stay stable.
    while let Some(index) = nearest_index(pool.iter().copied(), current) {
        let next = pool.remove(index);
        current = next.location();
        route.push(next);
    }

    route
}

/// Position of the waypoint closest to `from`, first on ties.
fn nearest_index<'a, W: Waypoint + 'a>(
    waypoints: impl IntoIterator<Item = &'a W>,
    from: (f64, f64),
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, waypoint) in waypoints.into_iter().enumerate() {
        let distance = haversine_km(from, waypoint.location());
        let closer = match best {
            None => true,
            Some((_, best_distance)) => distance < best_distance,
        };
        if closer {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}
