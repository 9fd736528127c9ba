//! Test fixtures for airport-nav.
//!
//! Provides:
//! - Real airport / city coordinates
//! - Directions JSON builders and a scripted route provider
//! - A channel-backed location source and a recording camera

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod airports;
pub mod directions;
pub mod devices;

pub use airports::*;
pub use devices::*;
pub use directions::*;
