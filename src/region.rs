//! Named regions used to anchor the ends of a tour.
//!
//! Each Sri Lanka district maps to one reference coordinate (the district
//! capital). The table is static and read-only.

use std::borrow::Cow;

use serde::Serialize;

use crate::coordinate::Coordinate;

/// A named region with one representative coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionReference {
    pub name: Cow<'static, str>,
    pub coordinate: Coordinate,
}

impl RegionReference {
    /// A caller-defined region outside the district table.
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            coordinate,
        }
    }

    const fn district(name: &'static str, lat: f64, lng: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            coordinate: Coordinate::from_degrees(lat, lng),
        }
    }
}

static DISTRICTS: [RegionReference; 25] = [
    RegionReference::district("Ampara", 7.2975, 81.6820),
    RegionReference::district("Anuradhapura", 8.3114, 80.4037),
    RegionReference::district("Badulla", 6.9934, 81.0550),
    RegionReference::district("Batticaloa", 7.7310, 81.6747),
    RegionReference::district("Colombo", 6.9271, 79.8612),
    RegionReference::district("Galle", 6.0535, 80.2210),
    RegionReference::district("Gampaha", 7.0917, 79.9999),
    RegionReference::district("Hambantota", 6.1241, 81.1185),
    RegionReference::district("Jaffna", 9.6615, 80.0255),
    RegionReference::district("Kalutara", 6.5854, 79.9607),
    RegionReference::district("Kandy", 7.2906, 80.6337),
    RegionReference::district("Kegalle", 7.2513, 80.3464),
    RegionReference::district("Kilinochchi", 9.3803, 80.3770),
    RegionReference::district("Kurunegala", 7.4863, 80.3647),
    RegionReference::district("Mannar", 8.9810, 79.9044),
    RegionReference::district("Matale", 7.4675, 80.6234),
    RegionReference::district("Matara", 5.9549, 80.5550),
    RegionReference::district("Monaragala", 6.8728, 81.3507),
    RegionReference::district("Mullaitivu", 9.2671, 80.8142),
    RegionReference::district("Nuwara Eliya", 6.9497, 80.7891),
    RegionReference::district("Polonnaruwa", 7.9403, 81.0188),
    RegionReference::district("Puttalam", 8.0362, 79.8283),
    RegionReference::district("Ratnapura", 6.7056, 80.3847),
    RegionReference::district("Trincomalee", 8.5874, 81.2152),
    RegionReference::district("Vavuniya", 8.7514, 80.4971),
];

/// All districts, sorted by name.
pub fn districts() -> &'static [RegionReference] {
    &DISTRICTS
}

/// Looks up a district by name, ignoring case and surrounding whitespace.
pub fn district(name: &str) -> Option<&'static RegionReference> {
    let name = name.trim();
    DISTRICTS
        .iter()
        .find(|region| region.name.eq_ignore_ascii_case(name))
}
