//! Seams to the collaborators the navigation core depends on.
//!
//! The core never talks to a device, a network or a map directly. Apps
//! implement these for their platform; tests implement them with channels.

use crate::camera::CameraUpdate;
use crate::coordinate::{Coordinate, Heading};
use crate::error::{LocationError, RouteError};
use crate::route::Route;
use crate::subscription::Subscription;

/// Computes a driving route between two points.
pub trait RouteProvider {
    fn request_route(&self, origin: Coordinate, destination: Coordinate) -> Result<Route, RouteError>;
}

/// Live device position and compass heading.
pub trait LocationSource {
    /// Starts delivering position fixes. Metadata such as accuracy or
    /// timestamps is dropped before it reaches the channel.
    fn watch_positions(&self) -> Result<Subscription<Coordinate>, LocationError>;

    fn watch_headings(&self) -> Result<Subscription<Heading>, LocationError>;
}

/// Map camera owned by the presentation layer.
pub trait CameraSink {
    fn apply(&mut self, update: CameraUpdate);
}

impl<P: RouteProvider + ?Sized> RouteProvider for &P {
    fn request_route(&self, origin: Coordinate, destination: Coordinate) -> Result<Route, RouteError> {
        (**self).request_route(origin, destination)
    }
}

impl<L: LocationSource + ?Sized> LocationSource for &L {
    fn watch_positions(&self) -> Result<Subscription<Coordinate>, LocationError> {
        (**self).watch_positions()
    }

    fn watch_headings(&self) -> Result<Subscription<Heading>, LocationError> {
        (**self).watch_headings()
    }
}
