//! Fake device sensors and map camera.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Sender};

use airport_nav::camera::CameraUpdate;
use airport_nav::coordinate::{Coordinate, Heading};
use airport_nav::error::LocationError;
use airport_nav::subscription::Subscription;
use airport_nav::traits::{CameraSink, LocationSource};

/// Location source backed by mpsc channels the test pushes samples into.
#[derive(Debug, Default)]
pub struct FakeLocation {
    positions: RefCell<Vec<Sender<Coordinate>>>,
    headings: RefCell<Vec<Sender<Heading>>>,
    opened: AtomicUsize,
    closed: Arc<AtomicUsize>,
    denied: bool,
}

impl FakeLocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every watch call fails with `PermissionDenied`.
    pub fn denied() -> Self {
        Self {
            denied: true,
            ..Self::default()
        }
    }

    pub fn send_position(&self, position: Coordinate) {
        for tx in self.positions.borrow().iter() {
            let _ = tx.send(position);
        }
    }

    pub fn send_heading(&self, degrees: f64) {
        for tx in self.headings.borrow().iter() {
            let _ = tx.send(Heading::new(degrees));
        }
    }

    /// Subscriptions handed out so far.
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Subscriptions released so far.
    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    fn subscribe<T>(&self, senders: &RefCell<Vec<Sender<T>>>) -> Result<Subscription<T>, LocationError> {
        if self.denied {
            return Err(LocationError::PermissionDenied);
        }
        let (tx, rx) = mpsc::channel();
        senders.borrow_mut().push(tx);
        self.opened.fetch_add(1, Ordering::SeqCst);

        let closed = Arc::clone(&self.closed);
        Ok(Subscription::new(rx, move || {
            closed.fetch_add(1, Ordering::SeqCst);
        }))
    }
}

impl LocationSource for FakeLocation {
    fn watch_positions(&self) -> Result<Subscription<Coordinate>, LocationError> {
        self.subscribe(&self.positions)
    }

    fn watch_headings(&self) -> Result<Subscription<Heading>, LocationError> {
        self.subscribe(&self.headings)
    }
}

/// Camera that records every update it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingCamera {
    updates: Rc<RefCell<Vec<CameraUpdate>>>,
}

impl RecordingCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<CameraUpdate> {
        self.updates.borrow().clone()
    }
}

impl CameraSink for RecordingCamera {
    fn apply(&mut self, update: CameraUpdate) {
        self.updates.borrow_mut().push(update);
    }
}
