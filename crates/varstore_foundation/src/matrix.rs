//! Dense row-major matrix of single-precision cells.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A dense `rows x cols` grid of `f32` cells stored row-major.
///
/// Invariant: `data.len() == rows * cols`.
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawMatrix")
)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

/// Unchecked wire shape of a matrix, validated on conversion.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for Matrix {
    type Error = Error;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::new(raw.rows, raw.cols, raw.data)
    }
}

impl Matrix {
    /// The 0x0 matrix.
    pub const EMPTY: Matrix = Matrix {
        rows: 0,
        cols: 0,
        data: Vec::new(),
    };

    /// Creates a matrix from row-major cell data.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::dimension_mismatch(rows, cols, data.len()));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix by copying `rows * cols` cells from a slice.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the slice length does not match.
    pub fn from_slice(data: &[f32], rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols, data.to_vec())
    }

    /// Creates a matrix with every cell set to `fill`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, fill: f32) -> Self {
        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }

    /// Creates a matrix from rows, zero-padding short rows to the longest.
    #[must_use]
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Self {
        let cols = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        let mut m = Self::filled(rows.len(), cols, 0.0);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            m.data[r * cols..r * cols + row.len()].copy_from_slice(row);
        }
        m
    }

    /// Creates an `n x 1` column vector.
    #[must_use]
    pub fn column(data: &[f32]) -> Self {
        Self {
            rows: data.len(),
            cols: 1,
            data: data.to_vec(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub const fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the matrix has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the cell at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Sets the cell at `(row, col)`. Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> bool {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
            true
        } else {
            false
        }
    }

    /// Returns one row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f32]> {
        (row < self.rows).then(|| &self.data[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterates over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f32]> {
        // chunks(0) panics, and a zero-column matrix has no cells to yield
        let cols = self.cols.max(1);
        self.data.chunks(cols).take(if self.cols == 0 { 0 } else { self.rows })
    }

    /// Row-major cell data.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable row-major cell data.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the matrix, returning its row-major cells.
    #[must_use]
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Bitwise cell equality (NaN equals NaN with the same payload).
    #[must_use]
    pub fn bit_eq(&self, other: &Self) -> bool {
        self.dims() == other.dims()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix({}x{}) ", self.rows, self.cols)?;
        f.debug_list().entries(self.iter_rows()).finish()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                write!(f, " ")?;
            }
            write!(f, "[")?;
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
