//! Error types for the provider, device and session boundaries.

use thiserror::Error;

/// Failures at the route provider boundary.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Provider returned status {status}: {message}")]
    Status { status: String, message: String },

    #[error("No route between origin and destination")]
    NoRoute,

    #[error("Response is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Route leg has no steps")]
    EmptyLeg,

    #[error("Route request was superseded by a newer request or a stop")]
    Superseded,
}

/// Failures of the device location streams.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

/// Failures reported by [`crate::session::NavigationSession`].
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("Route unavailable: {0}")]
    RouteUnavailable(#[from] RouteError),

    #[error("Current location unavailable")]
    LocationUnavailable(#[source] Option<LocationError>),
}
