//! Directions HTTP adapter for driving routes.
//!
//! Speaks the Google-Directions-style JSON API. The response is mapped into
//! a typed [`Route`] right here; nothing provider-shaped leaves this module.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::coordinate::Coordinate;
use crate::error::RouteError;
use crate::polyline::Polyline;
use crate::route::{DEFAULT_MANEUVER, Route, RouteStep, strip_html};
use crate::traits::RouteProvider;

pub const DIRECTIONS_API_PATH: &str = "/maps/api/directions/json";

const API_KEY_VAR: &str = "DIRECTIONS_API_KEY";
const BASE_URL_VAR: &str = "DIRECTIONS_BASE_URL";

#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    pub base_url: String,
    pub api_key: String,
    /// Travel mode sent to the provider.
    pub mode: String,
    pub timeout_secs: u64,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com".to_string(),
            api_key: String::new(),
            mode: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

impl DirectionsConfig {
    /// Reads `DIRECTIONS_API_KEY` and, if set, `DIRECTIONS_BASE_URL`.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        let mut config = Self {
            api_key: std::env::var(API_KEY_VAR)?,
            ..Self::default()
        };
        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct DirectionsClient {
    config: DirectionsConfig,
    client: reqwest::blocking::Client,
}

impl DirectionsClient {
    pub fn new(config: DirectionsConfig) -> Result<Self, RouteError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &DirectionsConfig {
        &self.config
    }
}

impl RouteProvider for DirectionsClient {
    fn request_route(&self, origin: Coordinate, destination: Coordinate) -> Result<Route, RouteError> {
        let url = format!("{}{}", self.config.base_url, DIRECTIONS_API_PATH);
        debug!(%origin, %destination, mode = %self.config.mode, "requesting directions");

        let response = self
            .client
            .get(url)
            .query(&[
                ("origin", origin.to_string()),
                ("destination", destination.to_string()),
                ("mode", self.config.mode.clone()),
                ("key", self.config.api_key.clone()),
            ])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<DirectionsResponse>());

        let body = match response {
            Ok(body) => body,
            Err(err) => {
                // The request URL carries the API key.
                let err = err.without_url();
                warn!(error = %err, "directions request failed");
                return Err(err.into());
            }
        };

        let route = Route::try_from(body)?;
        debug!(
            steps = route.step_count(),
            distance = route.distance_text(),
            duration = route.duration_text(),
            "directions received"
        );
        Ok(route)
    }
}

/// Parses a raw directions JSON body into a [`Route`].
pub fn parse_directions_json(body: &str) -> Result<Route, RouteError> {
    let response: DirectionsResponse = serde_json::from_str(body)?;
    Route::try_from(response)
}

#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    #[serde(default)]
    legs: Vec<DirectionsLeg>,
}

#[derive(Debug, Deserialize)]
struct DirectionsLeg {
    distance: Option<TextValue>,
    duration: Option<TextValue>,
    #[serde(default)]
    steps: Vec<DirectionsStep>,
}

#[derive(Debug, Deserialize)]
struct DirectionsStep {
    polyline: Option<EncodedPolyline>,
    end_location: Option<LatLng>,
    distance: Option<TextValue>,
    duration: Option<TextValue>,
    html_instructions: Option<String>,
    maneuver: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    text: Option<String>,
    value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct EncodedPolyline {
    points: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl TryFrom<DirectionsResponse> for Route {
    type Error = RouteError;

    fn try_from(response: DirectionsResponse) -> Result<Self, Self::Error> {
        match response.status.as_deref() {
            None | Some("OK") => {}
            Some("ZERO_RESULTS") => return Err(RouteError::NoRoute),
            Some(status) => {
                return Err(RouteError::Status {
                    status: status.to_string(),
                    message: response.error_message.unwrap_or_default(),
                });
            }
        }

        let route = response.routes.into_iter().next().ok_or(RouteError::NoRoute)?;
        let leg = route.legs.into_iter().next().ok_or(RouteError::MissingField("routes[0].legs"))?;

        let distance_text = leg
            .distance
            .and_then(|d| d.text)
            .ok_or(RouteError::MissingField("legs[0].distance.text"))?;
        let duration_text = leg
            .duration
            .and_then(|d| d.text)
            .ok_or(RouteError::MissingField("legs[0].duration.text"))?;

        let steps = leg
            .steps
            .into_iter()
            .map(route_step)
            .collect::<Result<Vec<_>, _>>()?;

        Route::new(steps, distance_text, duration_text)
    }
}

fn route_step(step: DirectionsStep) -> Result<RouteStep, RouteError> {
    let encoded = step
        .polyline
        .and_then(|p| p.points)
        .ok_or(RouteError::MissingField("steps[].polyline.points"))?;
    let end = step
        .end_location
        .ok_or(RouteError::MissingField("steps[].end_location"))?;
    let distance = step
        .distance
        .ok_or(RouteError::MissingField("steps[].distance"))?;
    let duration = step
        .duration
        .ok_or(RouteError::MissingField("steps[].duration"))?;
    let html = step
        .html_instructions
        .ok_or(RouteError::MissingField("steps[].html_instructions"))?;

    Ok(RouteStep {
        polyline: Polyline::decode(&encoded),
        end: Coordinate::new(end.lat, end.lng),
        distance_text: distance
            .text
            .ok_or(RouteError::MissingField("steps[].distance.text"))?,
        distance_m: distance.value,
        duration_text: duration
            .text
            .ok_or(RouteError::MissingField("steps[].duration.text"))?,
        duration_s: duration.value,
        maneuver: step
            .maneuver
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MANEUVER.to_string()),
        instruction: strip_html(&html),
    })
}
