//! Real airport and city locations for navigation fixtures.
//!
//! Coordinates are terminal forecourts / landmarks taken from OpenStreetMap.

use airport_nav::coordinate::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

// ============================================================================
// Airports
// ============================================================================

pub const SOEKARNO_HATTA: Location = Location::new("Soekarno-Hatta (CGK)", -6.1256, 106.6559);
pub const HALIM_PERDANAKUSUMA: Location = Location::new("Halim Perdanakusuma (HLP)", -6.2666, 106.8910);

// ============================================================================
// City start points
// ============================================================================

pub const MONAS: Location = Location::new("Monumen Nasional", -6.1754, 106.8272);
pub const BUNDARAN_HI: Location = Location::new("Bundaran HI", -6.1950, 106.8230);
