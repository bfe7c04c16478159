//! Reachability Analyzer
//!
//! Tests for a column-aligned corridor: a single (column, row) position,
//! seeded at the source on layer 0, that stays occupied on every deeper
//! layer. This is stricter than graph reachability. A `false` result only
//! means no straight drop exists below the source.

use crate::error::Result;
use crate::grid::{Cell, GridVolume, Plane, Point};

/// Fold the layer masks from layer 1 down into an accumulator seeded at `source`
///
/// Returns `None` when the source itself is empty on layer 0.
///
/// # Errors
/// `InvalidCoordinate` if `source` lies outside the grid.
pub fn corridor_mask(volume: &GridVolume, source: Cell) -> Result<Option<Plane<u8>>> {
    volume.check_cell(source)?;
    if volume.get(Point::new(source.column, source.row, 0))? == 0 {
        return Ok(None);
    }

    let mut accumulator = Plane::<u8>::zeros(volume.columns(), volume.rows());
    accumulator.set(source.column, source.row, 1)?;

    for layer in 1..volume.layers() {
        accumulator = accumulator.and(&volume.layer(layer)?)?;
        if !accumulator.any() {
            break;
        }
    }
    Ok(Some(accumulator))
}

/// True if a straight corridor runs from `source` through every layer
///
/// # Errors
/// `InvalidCoordinate` if `source` lies outside the grid.
pub fn is_reachable(volume: &GridVolume, source: Cell) -> Result<bool> {
    Ok(corridor_mask(volume, source)?
        .map(|mask| mask.any())
        .unwrap_or(false))
}
