//! Generation Module
//!
//! Builds layered mazes:
//! - Layer Path Registry (continuation candidates per layer)
//! - Path Generator (randomized runs under alternating axis constraints)
//! - Structured generation events for observers

mod events;
mod generator;
mod registry;

pub use events::{Direction, EventRecorder, GenerationEvent, GenerationObserver, NoopObserver};
pub use generator::{generate, movement_axis, PathGenerator};
pub use registry::LayerPathRegistry;
