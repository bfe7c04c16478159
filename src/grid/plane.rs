//! Two-dimensional slices
//!
//! A [`Plane`] is a dense 2D array used for layer masks, axis-aligned slices
//! handed to renderers, and the collapse accumulator.

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};

/// Dense 2D array indexed `[i][j]`, stored row-major over `i`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plane<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Plane<T> {
    /// Create a plane of `width × height` filled with `T::default()`
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }

    /// Build a plane from a generator function `f(i, j)`
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for i in 0..width {
            for j in 0..height {
                data.push(f(i, j));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }
}

impl<T: Copy> Plane<T> {
    /// Size of the first index
    pub fn width(&self) -> usize {
        self.width
    }

    /// Size of the second index
    pub fn height(&self) -> usize {
        self.height
    }

    /// Shape as `(width, height)`
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Value at `(i, j)`, or `None` outside the plane
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i >= self.width || j >= self.height {
            return None;
        }
        Some(self.data[i * self.height + j])
    }

    /// Set the value at `(i, j)`
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        if i >= self.width {
            return Err(MazeError::coordinate("plane first", i, self.width));
        }
        if j >= self.height {
            return Err(MazeError::coordinate("plane second", j, self.height));
        }
        self.data[i * self.height + j] = value;
        Ok(())
    }

    /// Iterate over all values in storage order
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.data.iter().copied()
    }

    /// Copy into nested vectors, outer index `i`
    pub fn to_nested(&self) -> Vec<Vec<T>> {
        self.data
            .chunks(self.height.max(1))
            .take(self.width)
            .map(|chunk| chunk.to_vec())
            .collect()
    }

    fn check_same_shape<U>(&self, other: &Plane<U>) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            return Err(MazeError::InvalidDimension {
                reason: format!(
                    "plane shapes differ: {}x{} vs {}x{}",
                    self.width, self.height, other.width, other.height
                ),
            });
        }
        Ok(())
    }
}

impl Plane<u8> {
    /// Element-wise logical AND of two binary masks
    pub fn and(&self, other: &Plane<u8>) -> Result<Plane<u8>> {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| u8::from(a != 0 && b != 0))
            .collect();
        Ok(Plane {
            width: self.width,
            height: self.height,
            data,
        })
    }

    /// True if any cell is set
    pub fn any(&self) -> bool {
        self.data.iter().any(|&v| v != 0)
    }

    /// Number of set cells
    pub fn count_ones(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

impl Plane<u32> {
    /// Add a binary mask into this accumulator
    pub fn accumulate(&mut self, mask: &Plane<u8>) -> Result<()> {
        self.check_same_shape(mask)?;
        for (acc, &m) in self.data.iter_mut().zip(&mask.data) {
            *acc += u32::from(m);
        }
        Ok(())
    }

    /// Largest value in the plane (0 for an empty plane)
    pub fn max_value(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Binary mask of cells with value at least `threshold`
    pub fn threshold(&self, threshold: u32) -> Plane<u8> {
        Plane {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| u8::from(v >= threshold)).collect(),
        }
    }
}
