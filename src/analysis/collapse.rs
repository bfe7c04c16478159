//! Collapse Reducer
//!
//! Projects the volume onto the plane orthogonal to an axis. Each adjacent
//! pair of slices is ANDed and the results summed, so a cell counts how many
//! consecutive slice pairs it was occupied in. Values range over
//! `0..=size_along(axis) - 1`.

use tracing::debug;

use crate::error::Result;
use crate::grid::{Axis, GridVolume, Plane};

/// Collapse the volume along `axis`
///
/// The result keeps the remaining axes in `column, row, layer` order:
/// `Layer` yields `(columns, rows)`, `Row` yields `(columns, layers)`,
/// `Column` yields `(rows, layers)`.
pub fn collapse(volume: &GridVolume, axis: Axis) -> Result<Plane<u32>> {
    let size = volume.size_along(axis);
    let mut first = volume.slice(axis, 0)?;
    let (width, height) = first.shape();
    let mut collapsed = Plane::<u32>::zeros(width, height);

    for i in 1..size {
        let next = volume.slice(axis, i)?;
        collapsed.accumulate(&first.and(&next)?)?;
        first = next;
    }

    debug!(%axis, size, peak = collapsed.max_value(), "volume collapsed");
    Ok(collapsed)
}
