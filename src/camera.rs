//! Camera framing handed to the map presentation layer.

use std::time::Duration;

use crate::coordinate::{Coordinate, Heading};

const FOLLOW_PITCH_DEG: f64 = 65.0;
const FOLLOW_ZOOM: f64 = 19.0;
const FOLLOW_ANIMATION: Duration = Duration::from_millis(500);
const OVERVIEW_ZOOM: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraUpdate {
    pub center: Coordinate,
    pub heading: Heading,
    pub pitch_deg: f64,
    pub zoom: f64,
    pub animation: Duration,
}

impl CameraUpdate {
    /// Tilted, close-in framing that tracks the driver while navigating.
    pub fn follow(center: Coordinate, heading: Heading) -> Self {
        Self {
            center,
            heading,
            pitch_deg: FOLLOW_PITCH_DEG,
            zoom: FOLLOW_ZOOM,
            animation: FOLLOW_ANIMATION,
        }
    }

    /// North-up, flat framing restored once navigation ends.
    pub fn overview(center: Coordinate) -> Self {
        Self {
            center,
            heading: Heading::new(0.0),
            pitch_deg: 0.0,
            zoom: OVERVIEW_ZOOM,
            animation: Duration::ZERO,
        }
    }
}
