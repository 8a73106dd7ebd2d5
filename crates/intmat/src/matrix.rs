//! The `Matrix` type and its allocation lifecycle.
//!
//! Cells live in one contiguous row-major buffer; cell `(r, c)` is stored at
//! `r * columns + c`. The buffer length always equals `rows * columns`.
use std::ops::{Index, IndexMut};

use crate::error::{MatrixError, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Matrix {
    data: Vec<i32>,
    rows: usize,
    columns: usize,
}

impl Matrix {
    /// Allocate a `rows x columns` matrix with every cell set to zero.
    ///
    /// The buffer is reserved fallibly, so an impossible request (including a
    /// `rows * columns` that overflows `usize`) is reported as
    /// [`MatrixError::OutOfMemory`] instead of aborting. `0 x 0` never touches
    /// the allocator.
    pub fn allocate(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 && columns == 0 {
            return Ok(Self::default());
        }
        let len = rows
            .checked_mul(columns)
            .ok_or(MatrixError::OutOfMemory { rows, columns })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::OutOfMemory { rows, columns })?;
        data.resize(len, 0);
        Ok(Self {
            data,
            rows,
            columns,
        })
    }

    /// Release the storage and reset the shape to `0 x 0`.
    ///
    /// A freed matrix is a valid empty matrix; freeing it again does nothing.
    pub fn free(&mut self) {
        self.data = Vec::new();
        self.rows = 0;
        self.columns = 0;
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<i32>) -> Result<Self> {
        let (rows, columns) = shape;
        if rows.checked_mul(columns) != Some(data.len()) {
            return Err(MatrixError::BufferLength {
                rows,
                columns,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            rows,
            columns,
        })
    }

    /// Wrap a buffer whose length is already known to match the shape.
    pub(crate) fn from_parts(rows: usize, columns: usize, data: Vec<i32>) -> Self {
        debug_assert_eq!(data.len(), rows * columns);
        Self {
            data,
            rows,
            columns,
        }
    }

    /// Build a matrix from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(MatrixError::malformed(
                    idx + 1,
                    format!("expected {} values, found {}", ncols, row.len()),
                ));
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            columns: ncols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.columns,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.columns
        );
        row * self.columns + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row < self.rows && col < self.columns {
            Some(self.data[row * self.columns + col])
        } else {
            None
        }
    }

    pub fn row_slice(&self, row: usize) -> &[i32] {
        assert!(row < self.rows, "row index out of bounds");
        let start = row * self.columns;
        &self.data[start..start + self.columns]
    }

    pub fn column(&self, col: usize) -> Vec<i32> {
        assert!(col < self.columns, "column index out of bounds");
        (0..self.rows).map(|row| self[(row, col)]).collect()
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        // chunks_exact panics on a zero chunk size, and an n x 0 matrix has
        // n empty rows.
        (0..self.rows).map(move |row| {
            let start = row * self.columns;
            &self.data[start..start + self.columns]
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.iter_rows().map(<[i32]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i32;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}
