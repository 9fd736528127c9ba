//! airport-nav: turn-by-turn driving navigation to a chosen airport.
//!
//! Route acquisition, polyline decoding and step-by-step progress tracking
//! against a live position stream. Device sensors, the directions backend
//! and the map camera are reached through the traits in [`traits`].

pub mod camera;
pub mod coordinate;
pub mod directions;
pub mod error;
pub mod haversine;
pub mod polyline;
pub mod progress;
pub mod route;
pub mod session;
pub mod subscription;
pub mod traits;
