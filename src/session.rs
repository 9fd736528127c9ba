//! Drive-to-target navigation session.
//!
//! A session acquires a route, subscribes to the device's position and
//! heading streams, and feeds every position sample through a
//! [`RouteProgressTracker`]. Everything runs on the caller's thread: samples
//! are processed one at a time, fully, in the order they were queued.
//!
//! Route requests are stamped with a generation. `stop()` and every new
//! request bump it, so a response that arrives late is rejected instead of
//! resurrecting a navigation the user already ended.

use std::fmt;

use tracing::{debug, info, warn};

use crate::camera::CameraUpdate;
use crate::coordinate::{Coordinate, Heading};
use crate::error::{NavigationError, RouteError};
use crate::haversine::{initial_bearing_deg, nearest};
use crate::progress::{ProgressSummary, RouteProgressTracker};
use crate::route::Route;
use crate::subscription::Subscription;
use crate::traits::{CameraSink, LocationSource, RouteProvider};

/// Result of a successful start: the full geometry to draw and the first
/// summary to show.
#[derive(Debug, Clone, PartialEq)]
pub struct StartedNavigation {
    pub path: Vec<Coordinate>,
    pub summary: ProgressSummary,
}

/// A route request issued by [`NavigationSession::begin`] and not yet
/// completed.
#[derive(Debug)]
pub struct PendingRoute {
    generation: u64,
    origin: Coordinate,
    destination: Coordinate,
}

impl PendingRoute {
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn destination(&self) -> Coordinate {
        self.destination
    }
}

#[derive(Debug)]
struct ActiveNavigation {
    tracker: RouteProgressTracker,
    positions: Subscription<Coordinate>,
    headings: Subscription<Heading>,
    heading_seen: bool,
}

pub struct NavigationSession<P, L> {
    provider: P,
    location: L,
    camera: Option<Box<dyn CameraSink>>,
    generation: u64,
    active: Option<ActiveNavigation>,
}

impl<P, L> NavigationSession<P, L>
where
    P: RouteProvider,
    L: LocationSource,
{
    pub fn new(provider: P, location: L) -> Self {
        Self {
            provider,
            location,
            camera: None,
            generation: 0,
            active: None,
        }
    }

    /// Routes heading samples (and the end-of-navigation reset) to a map
    /// camera.
    pub fn with_camera(mut self, camera: impl CameraSink + 'static) -> Self {
        self.camera = Some(Box::new(camera));
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn route(&self) -> Option<&Route> {
        self.active.as_ref().map(|active| active.tracker.route())
    }

    pub fn tracker(&self) -> Option<&RouteProgressTracker> {
        self.active.as_ref().map(|active| &active.tracker)
    }

    /// Latest summary of the active navigation.
    pub fn summary(&self) -> Option<&ProgressSummary> {
        self.active.as_ref().map(|active| active.tracker.summary())
    }

    /// Requests a route and starts navigating along it.
    ///
    /// `origin` is the device's current fix; `None` fails with
    /// `LocationUnavailable`. Any provider failure, including transport
    /// errors, fails with `RouteUnavailable`. On failure the session is
    /// left idle.
    pub fn start(
        &mut self,
        origin: Option<Coordinate>,
        destination: Coordinate,
    ) -> Result<StartedNavigation, NavigationError> {
        let pending = self.begin(origin, destination)?;
        let result = self.provider.request_route(pending.origin, pending.destination);
        self.complete(pending, result)
    }

    /// Navigates to whichever candidate is closest to `origin`, returning
    /// its index alongside the started navigation. `Ok(None)` when there
    /// are no candidates; the session is then left as it was.
    pub fn start_to_nearest(
        &mut self,
        origin: Option<Coordinate>,
        candidates: &[Coordinate],
    ) -> Result<Option<(usize, StartedNavigation)>, NavigationError> {
        let origin = origin.ok_or(NavigationError::LocationUnavailable(None))?;
        let Some((index, km)) = nearest(origin, candidates) else {
            return Ok(None);
        };
        debug!(index, km, "nearest destination selected");

        let started = self.start(Some(origin), candidates[index])?;
        Ok(Some((index, started)))
    }

    /// First half of [`start`](Self::start), for callers that run the
    /// provider request elsewhere. Stops any active navigation and
    /// invalidates every earlier pending request. Without an origin it
    /// fails before touching either.
    pub fn begin(
        &mut self,
        origin: Option<Coordinate>,
        destination: Coordinate,
    ) -> Result<PendingRoute, NavigationError> {
        let origin = origin.ok_or(NavigationError::LocationUnavailable(None))?;

        if self.active.is_some() {
            warn!("navigation already active, stopping it before a new start");
            self.stop();
        }
        self.generation += 1;

        debug!(generation = self.generation, %origin, %destination, "route requested");

        Ok(PendingRoute {
            generation: self.generation,
            origin,
            destination,
        })
    }

    /// Second half of [`start`](Self::start): installs the provider's answer
    /// unless the request was superseded in the meantime.
    pub fn complete(
        &mut self,
        pending: PendingRoute,
        result: Result<Route, RouteError>,
    ) -> Result<StartedNavigation, NavigationError> {
        if pending.generation != self.generation || self.active.is_some() {
            debug!(
                generation = pending.generation,
                current = self.generation,
                "discarding stale route response"
            );
            return Err(RouteError::Superseded.into());
        }

        let route = result.inspect_err(|err| warn!(error = %err, "route unavailable"))?;

        let positions = self.location.watch_positions().map_err(|err| {
            warn!(error = %err, "position stream unavailable");
            NavigationError::LocationUnavailable(Some(err))
        })?;
        let headings = self.location.watch_headings().map_err(|err| {
            warn!(error = %err, "heading stream unavailable");
            NavigationError::LocationUnavailable(Some(err))
        })?;

        let path = route.path();
        let tracker = RouteProgressTracker::new(route);
        let summary = tracker.summary().clone();
        info!(
            steps = tracker.route().step_count(),
            distance = %summary.distance_remaining,
            duration = %summary.time_remaining,
            "navigation started"
        );

        self.active = Some(ActiveNavigation {
            tracker,
            positions,
            headings,
            heading_seen: false,
        });

        Ok(StartedNavigation { path, summary })
    }

    /// Ends navigation: releases both streams, drops the route, and
    /// invalidates any request still in flight. A no-op on stream state
    /// when idle.
    pub fn stop(&mut self) {
        self.generation += 1;

        let Some(active) = self.active.take() else {
            return;
        };
        if let (Some(camera), Some(position)) =
            (self.camera.as_mut(), active.tracker.state().last_position)
        {
            camera.apply(CameraUpdate::overview(position));
        }
        info!(step = active.tracker.step_index(), "navigation stopped");
    }

    /// Processes one position sample. Returns the refreshed summary, or
    /// `None` when no navigation is active.
    pub fn on_position(&mut self, position: Coordinate) -> Option<ProgressSummary> {
        let active = self.active.as_mut()?;
        let previous = active.tracker.state().last_position;
        let summary = active.tracker.update(position).clone();

        // Until the compass reports in, face the direction of travel.
        if !active.heading_seen {
            if let (Some(camera), Some(previous)) = (self.camera.as_mut(), previous) {
                if previous != position {
                    let heading = Heading::new(initial_bearing_deg(previous, position));
                    camera.apply(CameraUpdate::follow(position, heading));
                }
            }
        }

        Some(summary)
    }

    /// Forwards one heading sample to the camera. Ignored while idle or
    /// before the first position fix.
    pub fn on_heading(&mut self, heading: Heading) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.heading_seen = true;

        if let (Some(camera), Some(position)) =
            (self.camera.as_mut(), active.tracker.state().last_position)
        {
            camera.apply(CameraUpdate::follow(position, heading));
        }
    }

    /// Drains every queued position and heading sample, returning the last
    /// summary published, if any position was processed.
    pub fn pump(&mut self) -> Option<ProgressSummary> {
        let mut latest = None;

        while let Some(position) = self.active.as_ref().and_then(|a| a.positions.try_next()) {
            latest = self.on_position(position).or(latest);
        }
        while let Some(heading) = self.active.as_ref().and_then(|a| a.headings.try_next()) {
            self.on_heading(heading);
        }

        latest
    }
}

impl<P, L> fmt::Debug for NavigationSession<P, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationSession")
            .field("generation", &self.generation)
            .field("active", &self.active)
            .field("camera", &self.camera.is_some())
            .finish_non_exhaustive()
    }
}
