//! Layermaze - Layered Maze Generation
//!
//! Builds a stack of 2D grids (layers) where each layer holds straight path
//! runs and consecutive layers always overlap, so a path can descend from the
//! top layer to the bottom.
//!
//! # Architecture
//!
//! - Grid: the 3D occupancy volume, 2D slices, and the binary dump format
//! - Generate: the per-layer registry and the randomized path generator
//! - Analysis: corridor reachability and volume collapse
//! - Maze: the container tying a volume to its sources
//! - Render: the visualization interface and a text renderer

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod grid;
pub mod maze;
pub mod render;

pub use config::MazeConfig;
pub use error::{MazeError, Result};
pub use maze::LayeredMaze;
