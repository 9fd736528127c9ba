//! Typed route model produced by a route provider.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::RouteError;
use crate::polyline::Polyline;

/// Maneuver reported for steps whose provider omits one.
pub const DEFAULT_MANEUVER: &str = "straight";

/// Arrow category of a maneuver, matched by substring on the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Turn {
    Left,
    Right,
    Straight,
}

impl Turn {
    pub fn classify(maneuver: &str) -> Self {
        if maneuver.contains("left") {
            Turn::Left
        } else if maneuver.contains("right") {
            Turn::Right
        } else {
            Turn::Straight
        }
    }
}

/// One maneuver segment of a route leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub polyline: Polyline,
    pub end: Coordinate,
    pub distance_text: String,
    /// Step length in meters, when the provider reports it.
    pub distance_m: Option<f64>,
    pub duration_text: String,
    /// Step duration in seconds, when the provider reports it.
    pub duration_s: Option<f64>,
    pub maneuver: String,
    /// Instruction text with markup removed.
    pub instruction: String,
}

impl RouteStep {
    pub fn turn(&self) -> Turn {
        Turn::classify(&self.maneuver)
    }
}

/// A single-leg route: a non-empty list of steps in traversal order plus
/// the leg totals as reported at acquisition time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    steps: Vec<RouteStep>,
    distance_text: String,
    duration_text: String,
}

impl Route {
    pub fn new(
        steps: Vec<RouteStep>,
        distance_text: impl Into<String>,
        duration_text: impl Into<String>,
    ) -> Result<Self, RouteError> {
        if steps.is_empty() {
            return Err(RouteError::EmptyLeg);
        }

        Ok(Self {
            steps,
            distance_text: distance_text.into(),
            duration_text: duration_text.into(),
        })
    }

    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&RouteStep> {
        self.steps.get(index)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn distance_text(&self) -> &str {
        &self.distance_text
    }

    pub fn duration_text(&self) -> &str {
        &self.duration_text
    }

    /// All step geometries concatenated in step order, for drawing.
    pub fn path(&self) -> Vec<Coordinate> {
        self.steps
            .iter()
            .flat_map(|step| step.polyline.points().iter().copied())
            .collect()
    }
}

/// Removes every `<...>` tag from provider instruction markup.
///
/// An unterminated `<` swallows the rest of the string.
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;

    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }

    out
}
