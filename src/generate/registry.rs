//! Layer Path Registry
//!
//! Records, per layer, every cell a path attempt touched. The registry of
//! layer ℓ supplies the continuation candidates for layer ℓ+1.

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};
use crate::grid::Cell;

/// Per-layer record of path cells
///
/// Sized to the layer count at construction. Entries are only ever appended;
/// duplicates across attempts are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerPathRegistry {
    layers: Vec<Vec<Cell>>,
}

impl LayerPathRegistry {
    /// Create an empty registry for `layers` layers
    pub fn new(layers: usize) -> Self {
        Self {
            layers: vec![Vec::new(); layers],
        }
    }

    /// Number of layers tracked
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Append a cell to a layer's registry
    pub fn register(&mut self, layer: usize, cell: Cell) -> Result<()> {
        let bound = self.layers.len();
        let entries = self
            .layers
            .get_mut(layer)
            .ok_or_else(|| MazeError::coordinate("layer", layer, bound))?;
        entries.push(cell);
        Ok(())
    }

    /// Cells registered on a layer, in insertion order
    pub fn cells(&self, layer: usize) -> Result<&[Cell]> {
        self.layers
            .get(layer)
            .map(Vec::as_slice)
            .ok_or_else(|| MazeError::coordinate("layer", layer, self.layers.len()))
    }

    /// True if the cell appears in the layer's registry
    pub fn contains(&self, layer: usize, cell: Cell) -> bool {
        self.layers
            .get(layer)
            .map(|entries| entries.contains(&cell))
            .unwrap_or(false)
    }

    /// Total number of entries over all layers, duplicates included
    pub fn total_entries(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    /// Iterate over `(layer, cells)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Cell])> {
        self.layers
            .iter()
            .enumerate()
            .map(|(layer, cells)| (layer, cells.as_slice()))
    }
}
