//! Polyline representation for route geometries.
//!
//! Routing providers return geometry in the compact encoded polyline
//! format (Google/OSRM/openrouteservice, 1e5 precision). Decoding happens
//! once at the provider boundary; the rest of the planner works with
//! [`Polyline`] points.

use serde::{Deserialize, Serialize};

use crate::error::PolylineError;

/// Fixed-point scale of the encoding (five decimal digits).
const PRECISION: f64 = 1e5;

/// Every encoded byte is offset by this value into printable ASCII.
const CHAR_OFFSET: u8 = 63;

const CONTINUATION: i64 = 0x20;
const CHUNK_MASK: i64 = 0x1f;

/// Seven 5-bit chunks; a degree value at 1e5 never needs more.
const MAX_SHIFT: u32 = 35;

/// A polyline representing a route geometry as decoded coordinates.
///
/// Each point is a `(latitude, longitude)` tuple, the order the map layer
/// draws in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline string.
    pub fn decode(encoded: &str) -> Result<Self, PolylineError> {
        decode_polyline(encoded).map(Self::new)
    }

    /// Encodes the points back into the compact string form.
    pub fn encode(&self) -> String {
        encode_polyline(&self.points)
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        self.points.last().copied()
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

/// Decodes an encoded polyline into `(latitude, longitude)` pairs.
///
/// Any malformed input fails the whole decode; no partial geometry is
/// returned.
pub fn decode_polyline(encoded: &str) -> Result<Vec<(f64, f64)>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        lat += decode_value(bytes, &mut index)?;
        if index >= bytes.len() {
            return Err(PolylineError::MissingLongitude { offset: index });
        }
        lng += decode_value(bytes, &mut index)?;

        points.push((lat as f64 / PRECISION, lng as f64 / PRECISION));
    }

    Ok(points)
}

/// Reads one zig-zag encoded delta starting at `index`, advancing it past
/// the value.
fn decode_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let start = *index;
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(PolylineError::Truncated { offset: start });
        };
        if !(CHAR_OFFSET..=b'~').contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                byte,
                offset: *index,
            });
        }
        *index += 1;

        let chunk = i64::from(byte - CHAR_OFFSET);
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;

        if chunk < CONTINUATION {
            break;
        }
        if shift >= MAX_SHIFT {
            return Err(PolylineError::Overflow { offset: start });
        }
    }

    Ok(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

/// Encodes `(latitude, longitude)` pairs at 1e5 precision.
pub fn encode_polyline(points: &[(f64, f64)]) -> String {
    let mut encoded = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for &(lat, lng) in points {
        let lat = (lat * PRECISION).round() as i64;
        let lng = (lng * PRECISION).round() as i64;

        encode_value(lat - prev_lat, &mut encoded);
        encode_value(lng - prev_lng, &mut encoded);

        prev_lat = lat;
        prev_lng = lng;
    }

    encoded
}

fn encode_value(delta: i64, out: &mut String) {
    let mut value = if delta < 0 { !(delta << 1) } else { delta << 1 };
    while value >= CONTINUATION {
        out.push(char::from(((CONTINUATION | (value & CHUNK_MASK)) as u8) + CHAR_OFFSET));
        value >>= 5;
    }
    out.push(char::from(value as u8 + CHAR_OFFSET));
}
