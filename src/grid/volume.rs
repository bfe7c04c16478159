//! Grid Volume
//!
//! A three-dimensional binary field indexed `[column][row][layer]`.
//! 1 marks a traversable cell, 0 an empty one. Dimensions are fixed at
//! creation; only the path generator writes into a volume.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};
use crate::grid::plane::Plane;

// ============================================================================
// Coordinates
// ============================================================================

/// A (column, row) position within one layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
}

impl Cell {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Coordinate along a planar axis
    ///
    /// `Axis::Layer` has no planar coordinate and yields `None`.
    pub fn along(&self, axis: Axis) -> Option<usize> {
        match axis {
            Axis::Column => Some(self.column),
            Axis::Row => Some(self.row),
            Axis::Layer => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// A (column, row, layer) position in the volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub column: usize,
    pub row: usize,
    pub layer: usize,
}

impl Point {
    pub fn new(column: usize, row: usize, layer: usize) -> Self {
        Self { column, row, layer }
    }

    /// Planar part of this point
    pub fn cell(&self) -> Cell {
        Cell::new(self.column, self.row)
    }

    /// `[column, row, layer]` triple
    pub fn to_array(&self) -> [usize; 3] {
        [self.column, self.row, self.layer]
    }
}

/// One of the three volume axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Column,
    Row,
    #[default]
    Layer,
}

impl Axis {
    pub fn name(self) -> &'static str {
        match self {
            Axis::Column => "column",
            Axis::Row => "row",
            Axis::Layer => "layer",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "column" | "col" | "x" => Ok(Axis::Column),
            "row" | "y" => Ok(Axis::Row),
            "layer" | "z" => Ok(Axis::Layer),
            other => Err(format!(
                "unknown axis '{}' (expected column, row or layer)",
                other
            )),
        }
    }
}

// ============================================================================
// Grid Volume
// ============================================================================

/// Three-dimensional binary occupancy field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridVolume {
    columns: usize,
    rows: usize,
    layers: usize,
    cells: Vec<u8>,
}

impl GridVolume {
    /// Allocate a zero-filled volume
    ///
    /// # Errors
    /// `InvalidDimension` if any dimension is zero.
    pub fn new(columns: usize, rows: usize, layers: usize) -> Result<Self> {
        let len = cell_count(columns, rows, layers)?;
        Ok(Self {
            columns,
            rows,
            layers,
            cells: vec![0; len],
        })
    }

    /// Build a volume with exactly the given points set
    pub fn from_points(
        columns: usize,
        rows: usize,
        layers: usize,
        points: impl IntoIterator<Item = Point>,
    ) -> Result<Self> {
        let mut volume = Self::new(columns, rows, layers)?;
        for p in points {
            volume.check_point(p)?;
            volume.mark(p.column, p.row, p.layer);
        }
        Ok(volume)
    }

    /// Rebuild a volume from dense `[column][row][layer]` bytes
    ///
    /// # Errors
    /// - `InvalidDimension` on a zero dimension or a length mismatch
    /// - `CorruptDump` if a byte is neither 0 nor 1
    pub fn from_raw(columns: usize, rows: usize, layers: usize, cells: Vec<u8>) -> Result<Self> {
        let len = cell_count(columns, rows, layers)?;
        if cells.len() != len {
            return Err(MazeError::InvalidDimension {
                reason: format!(
                    "expected {} cells for {}x{}x{}, got {}",
                    len,
                    columns,
                    rows,
                    layers,
                    cells.len()
                ),
            });
        }
        if let Some(pos) = cells.iter().position(|&v| v > 1) {
            return Err(MazeError::CorruptDump {
                reason: format!("cell {} holds non-binary value {}", pos, cells[pos]),
            });
        }
        Ok(Self {
            columns,
            rows,
            layers,
            cells,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Shape as `(columns, rows, layers)`
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.columns, self.rows, self.layers)
    }

    /// Number of slices along `axis`
    pub fn size_along(&self, axis: Axis) -> usize {
        match axis {
            Axis::Column => self.columns,
            Axis::Row => self.rows,
            Axis::Layer => self.layers,
        }
    }

    /// Dense cell bytes in `[column][row][layer]` order
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    #[inline]
    fn index(&self, column: usize, row: usize, layer: usize) -> usize {
        (column * self.rows + row) * self.layers + layer
    }

    #[inline]
    fn value(&self, column: usize, row: usize, layer: usize) -> u8 {
        self.cells[self.index(column, row, layer)]
    }

    /// Set a cell to 1. Callers guarantee the coordinates are in range.
    #[inline]
    pub(crate) fn mark(&mut self, column: usize, row: usize, layer: usize) {
        let idx = self.index(column, row, layer);
        self.cells[idx] = 1;
    }

    /// Validate a planar cell against the volume bounds
    pub fn check_cell(&self, cell: Cell) -> Result<()> {
        if cell.column >= self.columns {
            return Err(MazeError::coordinate("column", cell.column, self.columns));
        }
        if cell.row >= self.rows {
            return Err(MazeError::coordinate("row", cell.row, self.rows));
        }
        Ok(())
    }

    /// Validate a 3D point against the volume bounds
    pub fn check_point(&self, point: Point) -> Result<()> {
        self.check_cell(point.cell())?;
        if point.layer >= self.layers {
            return Err(MazeError::coordinate("layer", point.layer, self.layers));
        }
        Ok(())
    }

    /// Value at a point
    pub fn get(&self, point: Point) -> Result<u8> {
        self.check_point(point)?;
        Ok(self.value(point.column, point.row, point.layer))
    }

    /// True if the point is in range and occupied
    pub fn is_open(&self, point: Point) -> bool {
        self.get(point).map(|v| v == 1).unwrap_or(false)
    }

    /// Layer slice, shape `(columns, rows)`
    pub fn layer(&self, layer: usize) -> Result<Plane<u8>> {
        self.slice(Axis::Layer, layer)
    }

    /// Row slice, shape `(columns, layers)`
    pub fn row(&self, row: usize) -> Result<Plane<u8>> {
        self.slice(Axis::Row, row)
    }

    /// Column slice, shape `(rows, layers)`
    pub fn column(&self, column: usize) -> Result<Plane<u8>> {
        self.slice(Axis::Column, column)
    }

    /// Axis-aligned slice at `index`
    ///
    /// The two remaining axes keep their `column, row, layer` order.
    pub fn slice(&self, axis: Axis, index: usize) -> Result<Plane<u8>> {
        let bound = self.size_along(axis);
        if index >= bound {
            return Err(MazeError::coordinate(axis.name(), index, bound));
        }
        let plane = match axis {
            Axis::Layer => Plane::from_fn(self.columns, self.rows, |c, r| self.value(c, r, index)),
            Axis::Row => Plane::from_fn(self.columns, self.layers, |c, l| self.value(c, index, l)),
            Axis::Column => Plane::from_fn(self.rows, self.layers, |r, l| self.value(index, r, l)),
        };
        Ok(plane)
    }

    /// Every occupied point in `(column, row, layer)` order
    pub fn occupied(&self) -> Vec<Point> {
        let mut points = Vec::new();
        for c in 0..self.columns {
            for r in 0..self.rows {
                for l in 0..self.layers {
                    if self.value(c, r, l) == 1 {
                        points.push(Point::new(c, r, l));
                    }
                }
            }
        }
        points
    }

    /// Occupied cells of one layer in `(column, row)` order
    pub fn occupied_on_layer(&self, layer: usize) -> Result<Vec<Cell>> {
        let plane = self.layer(layer)?;
        let mut cells = Vec::new();
        for c in 0..self.columns {
            for r in 0..self.rows {
                if plane.get(c, r) == Some(1) {
                    cells.push(Cell::new(c, r));
                }
            }
        }
        Ok(cells)
    }

    /// Total number of occupied cells
    pub fn count_occupied(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 1).count()
    }
}

/// Validate dimensions and return the total cell count
fn cell_count(columns: usize, rows: usize, layers: usize) -> Result<usize> {
    check_dimension("columns", columns)?;
    check_dimension("rows", rows)?;
    check_dimension("layers", layers)?;
    columns
        .checked_mul(rows)
        .and_then(|n| n.checked_mul(layers))
        .ok_or_else(|| MazeError::InvalidDimension {
            reason: format!("volume {}x{}x{} is too large", columns, rows, layers),
        })
}

fn check_dimension(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(MazeError::InvalidDimension {
            reason: format!("{} must be at least 1", name),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let volume = GridVolume::new(3, 4, 2).unwrap();
        assert_eq!(volume.shape(), (3, 4, 2));
        assert_eq!(volume.count_occupied(), 0);
        assert_eq!(volume.as_bytes().len(), 24);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = GridVolume::new(3, 0, 2).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");
    }

    #[test]
    fn test_slices_have_expected_shapes() {
        let volume =
            GridVolume::from_points(3, 4, 2, [Point::new(2, 1, 1), Point::new(0, 3, 0)]).unwrap();

        let layer = volume.layer(1).unwrap();
        assert_eq!(layer.shape(), (3, 4));
        assert_eq!(layer.get(2, 1), Some(1));

        let row = volume.row(3).unwrap();
        assert_eq!(row.shape(), (3, 2));
        assert_eq!(row.get(0, 0), Some(1));

        let column = volume.column(2).unwrap();
        assert_eq!(column.shape(), (4, 2));
        assert_eq!(column.get(1, 1), Some(1));
        assert_eq!(column.count_ones(), 1);
    }

    #[test]
    fn test_slice_out_of_range() {
        let volume = GridVolume::new(2, 2, 2).unwrap();
        assert!(matches!(
            volume.layer(2),
            Err(MazeError::InvalidCoordinate { bound: 2, .. })
        ));
        assert!(volume.row(5).is_err());
        assert!(volume.column(2).is_err());
    }

    #[test]
    fn test_from_raw_rejects_non_binary() {
        let err = GridVolume::from_raw(1, 1, 2, vec![0, 2]).unwrap_err();
        assert_eq!(err.error_code(), "CORRUPT_DUMP");
        assert!(GridVolume::from_raw(1, 1, 2, vec![1]).is_err());
    }

    #[test]
    fn test_from_raw_validates_dimensions() {
        let err = GridVolume::from_raw(0, 3, 3, Vec::new()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");

        let volume = GridVolume::from_raw(1, 2, 1, vec![1, 0]).unwrap();
        assert_eq!(volume.shape(), (1, 2, 1));
        assert_eq!(volume.count_occupied(), 1);
    }

    #[test]
    fn test_occupied_order() {
        let volume = GridVolume::from_points(
            2,
            2,
            2,
            [Point::new(1, 0, 0), Point::new(0, 1, 1), Point::new(0, 0, 1)],
        )
        .unwrap();
        assert_eq!(
            volume.occupied(),
            vec![Point::new(0, 0, 1), Point::new(0, 1, 1), Point::new(1, 0, 0)]
        );
        assert_eq!(volume.occupied_on_layer(1).unwrap().len(), 2);
    }

    #[test]
    fn test_axis_from_str() {
        assert_eq!("Layer".parse::<Axis>().unwrap(), Axis::Layer);
        assert_eq!("col".parse::<Axis>().unwrap(), Axis::Column);
        assert!("depth".parse::<Axis>().is_err());
    }
}
