//! Route progress tracking against a live position stream.
//!
//! The tracker owns a [`Route`] and a cursor into its steps. Each position
//! update either advances the cursor, when the current step's end is close
//! enough, or refreshes the live distance to that end.

use serde::Serialize;
use tracing::debug;

use crate::coordinate::Coordinate;
use crate::haversine::distance_m;
use crate::route::{Route, RouteStep, Turn};

/// A step end closer than this counts as reached.
pub const STEP_REACHED_THRESHOLD_M: f64 = 40.0;

/// What the driver sees after each position update.
///
/// Leg totals are the values reported when the route was acquired; they
/// are not recomputed as the driver progresses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub step_index: usize,
    pub distance_remaining: String,
    pub time_remaining: String,
    pub next_instruction: String,
    pub next_maneuver: String,
    pub distance_to_turn: String,
    pub distance_to_turn_m: Option<f64>,
}

impl ProgressSummary {
    pub fn turn(&self) -> Turn {
        Turn::classify(&self.next_maneuver)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    pub step_index: usize,
    pub last_position: Option<Coordinate>,
}

#[derive(Debug, Clone)]
pub struct RouteProgressTracker {
    route: Route,
    state: NavigationState,
    summary: ProgressSummary,
}

impl RouteProgressTracker {
    pub fn new(route: Route) -> Self {
        let summary = step_summary(&route, 0);
        Self {
            route,
            state: NavigationState::default(),
            summary,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn step_index(&self) -> usize {
        self.state.step_index
    }

    pub fn current_step(&self) -> &RouteStep {
        &self.route.steps()[self.state.step_index]
    }

    /// True once the cursor sits on the last step. No further advancement
    /// happens from here; distance keeps tracking the final step's end.
    pub fn is_on_final_step(&self) -> bool {
        self.state.step_index + 1 == self.route.step_count()
    }

    /// The most recently emitted summary.
    pub fn summary(&self) -> &ProgressSummary {
        &self.summary
    }

    /// Applies one position sample and returns the refreshed summary.
    pub fn update(&mut self, position: Coordinate) -> &ProgressSummary {
        self.state.last_position = Some(position);
        let distance = distance_m(position, self.current_step().end);

        if step_reached(distance) && !self.is_on_final_step() {
            self.state.step_index += 1;
            self.summary = step_summary(&self.route, self.state.step_index);
            debug!(
                step = self.state.step_index,
                maneuver = %self.summary.next_maneuver,
                "advanced to next step"
            );
        } else {
            self.summary.distance_to_turn = format_distance(distance);
            self.summary.distance_to_turn_m = Some(distance);
        }

        &self.summary
    }
}

fn step_reached(distance_m: f64) -> bool {
    distance_m < STEP_REACHED_THRESHOLD_M
}

/// Summary for the moment a step becomes current: its own static distance
/// stands in for the live one until the next update.
fn step_summary(route: &Route, index: usize) -> ProgressSummary {
    let step = &route.steps()[index];
    ProgressSummary {
        step_index: index,
        distance_remaining: route.distance_text().to_string(),
        time_remaining: route.duration_text().to_string(),
        next_instruction: step.instruction.clone(),
        next_maneuver: step.maneuver.clone(),
        distance_to_turn: step.distance_text.clone(),
        distance_to_turn_m: step.distance_m,
    }
}

/// `"X.X km"` above one kilometer, whole meters otherwise.
pub fn format_distance(meters: f64) -> String {
    if meters > 1000.0 {
        format!("{:.1} km", meters / 1000.0)
    } else {
        format!("{} m", meters.round() as i64)
    }
}
