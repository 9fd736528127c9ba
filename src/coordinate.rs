//! Geographic value types shared by every navigation module.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Converts a `(lat, lng)` tuple.
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

/// Compass heading in degrees, clockwise from north, within `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    degrees: f64,
}

impl Heading {
    pub fn new(degrees: f64) -> Self {
        Self {
            degrees: degrees.rem_euclid(360.0),
        }
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }
}
