//! Directions response builders and a scripted provider.

use std::cell::Cell;

use serde_json::{Value, json};

use airport_nav::coordinate::Coordinate;
use airport_nav::directions::parse_directions_json;
use airport_nav::error::RouteError;
use airport_nav::polyline::encode;
use airport_nav::route::Route;
use airport_nav::session::PendingRoute;
use airport_nav::traits::RouteProvider;

/// Builder for one `legs[0].steps[]` entry.
#[derive(Debug, Clone)]
pub struct StepFixture {
    start: Coordinate,
    end: Coordinate,
    distance_text: String,
    distance_value: Option<f64>,
    html: String,
    maneuver: Option<String>,
}

impl StepFixture {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self {
            start,
            end,
            distance_text: "1 km".to_string(),
            distance_value: None,
            html: "Continue".to_string(),
            maneuver: None,
        }
    }

    pub fn distance(mut self, text: &str) -> Self {
        self.distance_text = text.to_string();
        self
    }

    pub fn distance_value(mut self, meters: f64) -> Self {
        self.distance_value = Some(meters);
        self
    }

    pub fn html(mut self, html: &str) -> Self {
        self.html = html.to_string();
        self
    }

    pub fn maneuver(mut self, maneuver: &str) -> Self {
        self.maneuver = Some(maneuver.to_string());
        self
    }

    fn to_json(&self) -> Value {
        let mut step = json!({
            "polyline": { "points": encode(&[self.start, self.end]) },
            "end_location": { "lat": self.end.lat, "lng": self.end.lng },
            "distance": { "text": self.distance_text },
            "duration": { "text": "1 min", "value": 60 },
            "html_instructions": self.html,
        });
        if let Some(value) = self.distance_value {
            step["distance"]["value"] = json!(value);
        }
        if let Some(maneuver) = &self.maneuver {
            step["maneuver"] = json!(maneuver);
        }
        step
    }
}

/// A complete `status: OK` body with one route of one leg.
pub fn directions_body(steps: &[StepFixture], distance: &str, duration: &str) -> String {
    json!({
        "status": "OK",
        "routes": [{
            "legs": [{
                "distance": { "text": distance },
                "duration": { "text": duration },
                "steps": steps.iter().map(StepFixture::to_json).collect::<Vec<_>>(),
            }]
        }]
    })
    .to_string()
}

pub fn empty_routes_body() -> String {
    json!({ "status": "OK", "routes": [] }).to_string()
}

/// Answers every request by parsing a fixed body, counting calls.
#[derive(Debug)]
pub struct ScriptedProvider {
    body: String,
    calls: Cell<usize>,
    last_destination: Cell<Option<Coordinate>>,
}

impl ScriptedProvider {
    pub fn new(body: String) -> Self {
        Self {
            body,
            calls: Cell::new(0),
            last_destination: Cell::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_destination(&self) -> Option<Coordinate> {
        self.last_destination.get()
    }

    /// Answers a pending request out of band, as a background worker would.
    pub fn request_route_for(&self, pending: &PendingRoute) -> Result<Route, RouteError> {
        self.request_route(pending.origin(), pending.destination())
    }
}

impl RouteProvider for ScriptedProvider {
    fn request_route(&self, _origin: Coordinate, destination: Coordinate) -> Result<Route, RouteError> {
        self.calls.set(self.calls.get() + 1);
        self.last_destination.set(Some(destination));
        parse_directions_json(&self.body)
    }
}

/// Point due north of `origin` at the given distance in meters.
pub fn north_of(origin: Coordinate, meters: f64) -> Coordinate {
    let delta = (meters / 6_371_000.0).to_degrees();
    Coordinate::new(origin.lat + delta, origin.lng)
}
