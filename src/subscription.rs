//! Handles to live sensor streams.

use std::fmt;
use std::sync::mpsc::{Receiver, TryRecvError};

type Unsubscribe = Box<dyn FnOnce() + Send>;

/// An active subscription to a stream of samples.
///
/// Samples arrive on an mpsc channel fed by the platform. The optional
/// unsubscribe hook runs exactly once, when the subscription is dropped.
pub struct Subscription<T> {
    receiver: Receiver<T>,
    unsubscribe: Option<Unsubscribe>,
}

impl<T> Subscription<T> {
    pub fn new(receiver: Receiver<T>, unsubscribe: impl FnOnce() + Send + 'static) -> Self {
        Self {
            receiver,
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Wraps a receiver whose sender needs no explicit teardown.
    pub fn from_receiver(receiver: Receiver<T>) -> Self {
        Self {
            receiver,
            unsubscribe: None,
        }
    }

    /// Next queued sample, without blocking.
    ///
    /// A disconnected sender reads the same as an empty queue.
    pub fn try_next(&self) -> Option<T> {
        match self.receiver.try_recv() {
            Ok(sample) => Some(sample),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}
