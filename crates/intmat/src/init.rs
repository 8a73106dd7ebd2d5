//! In-place initialization of an allocated matrix.
use rand::Rng;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

impl Matrix {
    /// Set every cell to `value`.
    pub fn init_constant(&mut self, value: i32) {
        self.as_mut_slice().fill(value);
    }

    pub fn init_zeros(&mut self) {
        self.init_constant(0);
    }

    /// Overwrite the matrix with the identity. The matrix is left untouched
    /// when it is not square.
    pub fn init_identity(&mut self) -> Result<()> {
        let (rows, columns) = self.shape();
        if rows != columns {
            return Err(MatrixError::NotSquare { rows, columns });
        }
        for r in 0..rows {
            for c in 0..columns {
                self[(r, c)] = i32::from(r == c);
            }
        }
        Ok(())
    }

    /// Fill every cell with an independent draw from `[min, max]`.
    ///
    /// The generator is supplied by the caller; seed it (e.g.
    /// `StdRng::seed_from_u64`) for reproducible contents. Nothing is written
    /// when `min > max`.
    pub fn init_random<R: Rng + ?Sized>(&mut self, rng: &mut R, min: i32, max: i32) -> Result<()> {
        if min > max {
            return Err(MatrixError::InvalidRange { min, max });
        }
        for cell in self.as_mut_slice() {
            *cell = rng.gen_range(min..=max);
        }
        Ok(())
    }
}
