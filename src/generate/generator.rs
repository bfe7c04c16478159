//! Path Generator
//!
//! Walks the volume layer by layer. Every path attempt picks an anchor on
//! layer ℓ from the registry of layer ℓ-1, then extends a straight run along
//! the layer's movement axis:
//! - even layers move along columns (horizontal)
//! - odd layers move along rows (vertical)
//!
//! Because each anchor comes from the previous layer's registry, every layer
//! overlaps the one above it in at least one cell.

use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::error::{MazeError, Result};
use crate::generate::events::{Direction, GenerationEvent, GenerationObserver, NoopObserver};
use crate::generate::registry::LayerPathRegistry;
use crate::grid::{Axis, Cell, GridVolume};

/// Movement axis for a layer: columns on even layers, rows on odd layers
pub fn movement_axis(layer: usize) -> Axis {
    if layer % 2 == 0 {
        Axis::Column
    } else {
        Axis::Row
    }
}

/// Randomized layered-path generator
///
/// Holds its random source so repeated runs from one seeded generator form
/// a reproducible sequence.
#[derive(Debug, Clone)]
pub struct PathGenerator<R = StdRng> {
    rng: R,
}

impl PathGenerator<StdRng> {
    /// Deterministic generator for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from operating-system entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> PathGenerator<R> {
    /// Generator over any random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a volume and its layer registry
    ///
    /// # Errors
    /// - `InvalidDimension` if a dimension or `num_paths` is zero, or if
    ///   `num_paths` exceeds the number of cells on a layer
    /// - `EmptyPredecessorLayer` if a layer has nothing to continue from
    pub fn generate(
        &mut self,
        columns: usize,
        rows: usize,
        layers: usize,
        num_paths: usize,
    ) -> Result<(GridVolume, LayerPathRegistry)> {
        self.generate_observed(columns, rows, layers, num_paths, &mut NoopObserver)
    }

    /// Generate while reporting each step to `observer`
    pub fn generate_observed(
        &mut self,
        columns: usize,
        rows: usize,
        layers: usize,
        num_paths: usize,
        observer: &mut dyn GenerationObserver,
    ) -> Result<(GridVolume, LayerPathRegistry)> {
        let mut volume = GridVolume::new(columns, rows, layers)?;
        check_path_count(num_paths, columns * rows)?;

        let mut registry = LayerPathRegistry::new(layers);
        self.seed_starts(&mut volume, &mut registry, num_paths, observer)?;

        for path in 0..num_paths {
            for layer in 1..layers {
                self.extend_layer(&mut volume, &mut registry, path, layer, observer)?;
            }
            observer.on_event(&GenerationEvent::PathCompleted { path });
        }

        info!(
            columns,
            rows,
            layers,
            num_paths,
            occupied = volume.count_occupied(),
            "maze generated"
        );
        Ok((volume, registry))
    }

    /// Place one distinct starting cell per path attempt on layer 0
    fn seed_starts(
        &mut self,
        volume: &mut GridVolume,
        registry: &mut LayerPathRegistry,
        num_paths: usize,
        observer: &mut dyn GenerationObserver,
    ) -> Result<()> {
        let rows = volume.rows();
        let picks = index::sample(&mut self.rng, volume.columns() * rows, num_paths);

        for (path, flat) in picks.into_iter().enumerate() {
            let cell = Cell::new(flat / rows, flat % rows);
            volume.mark(cell.column, cell.row, 0);
            registry.register(0, cell)?;
            debug!(path, %cell, "start seeded");
            observer.on_event(&GenerationEvent::StartSeeded { path, cell });
        }
        Ok(())
    }

    /// Choose an anchor on `layer` and extend one run from it
    fn extend_layer(
        &mut self,
        volume: &mut GridVolume,
        registry: &mut LayerPathRegistry,
        path: usize,
        layer: usize,
        observer: &mut dyn GenerationObserver,
    ) -> Result<()> {
        let anchor = *registry
            .cells(layer - 1)?
            .choose(&mut self.rng)
            .ok_or(MazeError::EmptyPredecessorLayer { layer: layer - 1 })?;

        volume.mark(anchor.column, anchor.row, layer);
        registry.register(layer, anchor)?;
        debug!(path, layer, %anchor, "anchor chosen");
        observer.on_event(&GenerationEvent::AnchorChosen {
            path,
            layer,
            cell: anchor,
        });

        let axis = movement_axis(layer);
        let direction = Direction::from_draw(self.rng.gen_range(0..3));

        let (position, size) = match axis {
            Axis::Row => (anchor.row, volume.rows()),
            _ => (anchor.column, volume.columns()),
        };
        let distance = match direction {
            Direction::Stay => 0,
            Direction::Positive => size - position,
            Direction::Negative => position + 1,
        };
        let length = if distance == 0 {
            0
        } else {
            self.rng.gen_range(0..distance)
        };

        debug!(path, layer, %axis, ?direction, length, "direction drawn");
        observer.on_event(&GenerationEvent::DirectionDrawn {
            path,
            layer,
            axis,
            direction,
            length,
        });

        if direction == Direction::Stay {
            registry.register(layer, anchor)?;
            observer.on_event(&GenerationEvent::CellRegistered {
                path,
                layer,
                cell: anchor,
            });
            return Ok(());
        }

        for offset in 1..length {
            let along = match direction {
                Direction::Negative => position - offset,
                _ => position + offset,
            };
            let cell = match axis {
                Axis::Row => Cell::new(anchor.column, along),
                _ => Cell::new(along, anchor.row),
            };
            volume.mark(cell.column, cell.row, layer);
            registry.register(layer, cell)?;
            trace!(path, layer, %cell, "run cell registered");
            observer.on_event(&GenerationEvent::CellRegistered { path, layer, cell });
        }
        Ok(())
    }
}

impl Default for PathGenerator<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Generate with a fresh entropy-seeded generator
pub fn generate(
    columns: usize,
    rows: usize,
    layers: usize,
    num_paths: usize,
) -> Result<(GridVolume, LayerPathRegistry)> {
    PathGenerator::from_entropy().generate(columns, rows, layers, num_paths)
}

fn check_path_count(num_paths: usize, cells_per_layer: usize) -> Result<()> {
    if num_paths == 0 {
        return Err(MazeError::InvalidDimension {
            reason: "num_paths must be at least 1".to_string(),
        });
    }
    if num_paths > cells_per_layer {
        return Err(MazeError::InvalidDimension {
            reason: format!(
                "num_paths {} exceeds the {} cells available on layer 0",
                num_paths, cells_per_layer
            ),
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
