//! Grid Module
//!
//! Storage types for the maze:
//! - Three-dimensional occupancy volume
//! - Two-dimensional slices and accumulators
//! - Binary dump format

pub mod io;
pub mod plane;
pub mod volume;

pub use io::{load_volume, read_volume, save_volume, write_volume};
pub use plane::Plane;
pub use volume::{Axis, Cell, GridVolume, Point};
