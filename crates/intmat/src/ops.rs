//! Comparison and arithmetic.
//!
//! Every operation borrows its operands and returns a freshly allocated
//! result. Cell arithmetic wraps on overflow in all build profiles.
use std::ops::{Add, Mul};

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// True when both matrices have the same shape and identical cells.
pub fn equal(a: &Matrix, b: &Matrix) -> bool {
    if a.shape() != b.shape() {
        return false;
    }
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .all(|(x, y)| x == y)
}

/// Elementwise sum of two matrices of the same shape.
pub fn sum(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    let (rows, columns) = a.shape();
    let mut result = Matrix::allocate(rows, columns)?;
    for ((out, x), y) in result
        .as_mut_slice()
        .iter_mut()
        .zip(a.as_slice())
        .zip(b.as_slice())
    {
        *out = x.wrapping_add(*y);
    }
    Ok(result)
}

pub fn scalar_product(a: &Matrix, scalar: i32) -> Matrix {
    let data = a.as_slice().iter().map(|v| v.wrapping_mul(scalar)).collect();
    Matrix::from_parts(a.rows(), a.columns(), data)
}

/// `columns x rows` matrix with `result[(j, i)] == a[(i, j)]`.
pub fn transpose(a: &Matrix) -> Matrix {
    let (rows, columns) = a.shape();
    let mut data = Vec::with_capacity(rows * columns);
    for j in 0..columns {
        for i in 0..rows {
            data.push(a[(i, j)]);
        }
    }
    Matrix::from_parts(columns, rows, data)
}

/// Matrix product via the plain triple loop.
///
/// Requires `a.columns() == b.rows()`; the result is `a.rows() x b.columns()`.
pub fn product(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.columns() != b.rows() {
        return Err(MatrixError::IncompatibleShapes {
            left: a.shape(),
            right: b.shape(),
        });
    }
    let mut result = Matrix::allocate(a.rows(), b.columns())?;
    for i in 0..a.rows() {
        for j in 0..b.columns() {
            let mut acc: i32 = 0;
            for k in 0..a.columns() {
                acc = acc.wrapping_add(a[(i, k)].wrapping_mul(b[(k, j)]));
            }
            result[(i, j)] = acc;
        }
    }
    Ok(result)
}

impl Matrix {
    pub fn equal(&self, other: &Matrix) -> bool {
        equal(self, other)
    }

    pub fn sum(&self, other: &Matrix) -> Result<Matrix> {
        sum(self, other)
    }

    pub fn scalar_product(&self, scalar: i32) -> Matrix {
        scalar_product(self, scalar)
    }

    pub fn transpose(&self) -> Matrix {
        transpose(self)
    }

    pub fn product(&self, other: &Matrix) -> Result<Matrix> {
        product(self, other)
    }
}

/// Elementwise sum, `&a + &b`.
///
/// # Panics
///
/// Panics when the shapes differ. Use [`sum`] to get a
/// [`MatrixError::DimensionMismatch`] instead.
impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Self::Output {
        sum(self, rhs).unwrap_or_else(|e| panic!("matrix addition failed: {}", e))
    }
}

/// Matrix product, `&a * &b`.
///
/// # Panics
///
/// Panics when `a.columns() != b.rows()`. Use [`product`] to get a
/// [`MatrixError::IncompatibleShapes`] instead.
impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Self::Output {
        product(self, rhs).unwrap_or_else(|e| panic!("matrix product failed: {}", e))
    }
}

impl<'a> Mul<i32> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: i32) -> Self::Output {
        scalar_product(self, rhs)
    }
}
