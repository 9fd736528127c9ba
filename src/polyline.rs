//! Encoded polyline support for route geometries.
//!
//! Directions providers ship step geometry in the compact 5-decimal
//! polyline format. Decoding happens at the provider boundary; everything
//! past it works with [`Polyline`] as a plain list of coordinates.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

const PRECISION: f64 = 1e5;

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline string. See [`decode`].
    pub fn decode(encoded: &str) -> Self {
        Self::new(decode(encoded))
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Encodes the points back into the compact polyline format.
    pub fn encode(&self) -> String {
        encode(&self.points)
    }
}

/// Decodes a 5-decimal encoded polyline into coordinates.
///
/// The input must be a well-formed encoded polyline. It is not validated:
/// a truncated string stops at the last complete point, anything else
/// malformed yields meaningless coordinates.
pub fn decode(encoded: &str) -> Vec<Coordinate> {
    let mut bytes = encoded.bytes();
    let mut points = Vec::new();
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    loop {
        let Some(dlat) = next_delta(&mut bytes) else {
            break;
        };
        let Some(dlng) = next_delta(&mut bytes) else {
            break;
        };
        lat += dlat;
        lng += dlng;
        points.push(Coordinate::new(
            lat as f64 / PRECISION,
            lng as f64 / PRECISION,
        ));
    }

    points
}

/// Reads one zig-zag encoded delta, or `None` once the input runs out.
fn next_delta(bytes: &mut impl Iterator<Item = u8>) -> Option<i64> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        let chunk = i64::from(bytes.next()?) - 63;
        result |= (chunk & 0x1f).wrapping_shl(shift);
        shift += 5;
        if chunk < 0x20 {
            break;
        }
    }

    if result & 1 != 0 {
        Some(!(result >> 1))
    } else {
        Some(result >> 1)
    }
}

/// Encodes coordinates into the 5-decimal polyline format.
pub fn encode(points: &[Coordinate]) -> String {
    let mut out = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for point in points {
        let lat = (point.lat * PRECISION).round() as i64;
        let lng = (point.lng * PRECISION).round() as i64;
        push_delta(&mut out, lat - prev_lat);
        push_delta(&mut out, lng - prev_lng);
        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

fn push_delta(out: &mut String, delta: i64) {
    let mut value = if delta < 0 { !(delta << 1) } else { delta << 1 };
    while value >= 0x20 {
        out.push(char::from((0x20 | (value & 0x1f)) as u8 + 63));
        value >>= 5;
    }
    out.push(char::from(value as u8 + 63));
}
