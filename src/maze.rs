//! Layered Maze
//!
//! Owns a generated volume together with its layer registry and exposes the
//! read-only views consumed by renderers and analysis.

use tracing::info;

use crate::analysis;
use crate::config::MazeConfig;
use crate::error::{MazeError, Result};
use crate::generate::{LayerPathRegistry, PathGenerator};
use crate::grid::{Axis, Cell, GridVolume, Plane, Point};

/// A generated layered maze
///
/// The source points are every occupied cell on layer 0, one per path
/// attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayeredMaze {
    volume: GridVolume,
    registry: LayerPathRegistry,
    num_paths: usize,
    source_points: Vec<Cell>,
}

impl LayeredMaze {
    /// Wrap a generated volume
    ///
    /// # Errors
    /// `SourceCountMismatch` if layer 0 does not hold exactly `num_paths`
    /// occupied cells.
    pub fn new(volume: GridVolume, registry: LayerPathRegistry, num_paths: usize) -> Result<Self> {
        let source_points = volume.occupied_on_layer(0)?;
        if source_points.len() != num_paths {
            return Err(MazeError::SourceCountMismatch {
                expected: num_paths,
                found: source_points.len(),
            });
        }

        Ok(Self {
            volume,
            registry,
            num_paths,
            source_points,
        })
    }

    /// Generate a new maze with an entropy-seeded generator
    pub fn from_generator(
        columns: usize,
        rows: usize,
        layers: usize,
        num_paths: usize,
    ) -> Result<Self> {
        Self::from_path_generator(
            &mut PathGenerator::from_entropy(),
            columns,
            rows,
            layers,
            num_paths,
        )
    }

    /// Generate a new maze with the given generator
    pub fn from_path_generator<R: rand::Rng>(
        generator: &mut PathGenerator<R>,
        columns: usize,
        rows: usize,
        layers: usize,
        num_paths: usize,
    ) -> Result<Self> {
        let (volume, registry) = generator.generate(columns, rows, layers, num_paths)?;
        Self::new(volume, registry, num_paths)
    }

    /// Generate a new maze from a configuration, seeded if it carries a seed
    pub fn from_config(config: &MazeConfig) -> Result<Self> {
        config.validate()?;
        let mut generator = match config.seed {
            Some(seed) => PathGenerator::seeded(seed),
            None => PathGenerator::from_entropy(),
        };
        let maze = Self::from_path_generator(
            &mut generator,
            config.columns,
            config.rows,
            config.layers,
            config.num_paths,
        )?;
        info!(seed = ?config.seed, sources = maze.source_points.len(), "maze ready");
        Ok(maze)
    }

    pub fn volume(&self) -> &GridVolume {
        &self.volume
    }

    pub fn registry(&self) -> &LayerPathRegistry {
        &self.registry
    }

    pub fn num_paths(&self) -> usize {
        self.num_paths
    }

    /// Occupied cells on layer 0
    pub fn source_points(&self) -> &[Cell] {
        &self.source_points
    }

    /// Shape as `(columns, rows, layers)`
    pub fn shape(&self) -> (usize, usize, usize) {
        self.volume.shape()
    }

    // ------------------------------------------------------------------------
    // Visualization hand-off
    // ------------------------------------------------------------------------

    /// Layer slice, shape `(columns, rows)`
    pub fn get_layer(&self, index: usize) -> Result<Plane<u8>> {
        self.volume.layer(index)
    }

    /// Row slice, shape `(columns, layers)`
    pub fn get_row(&self, index: usize) -> Result<Plane<u8>> {
        self.volume.row(index)
    }

    /// Column slice, shape `(rows, layers)`
    pub fn get_column(&self, index: usize) -> Result<Plane<u8>> {
        self.volume.column(index)
    }

    /// Every occupied cell as a `(column, row, layer)` point
    pub fn get_all_accessible_points(&self) -> Vec<Point> {
        self.volume.occupied()
    }

    // ------------------------------------------------------------------------
    // Analysis
    // ------------------------------------------------------------------------

    /// Corridor check from a layer-0 source
    pub fn is_reachable(&self, source: Cell) -> Result<bool> {
        analysis::is_reachable(&self.volume, source)
    }

    /// Source points with a straight corridor through every layer
    pub fn reachable_sources(&self) -> Result<Vec<Cell>> {
        let mut reachable = Vec::new();
        for &source in &self.source_points {
            if self.is_reachable(source)? {
                reachable.push(source);
            }
        }
        Ok(reachable)
    }

    /// Collapse the volume along an axis
    pub fn collapse(&self, axis: Axis) -> Result<Plane<u32>> {
        analysis::collapse(&self.volume, axis)
    }
}
