//! Dense integer matrices for walk counting.
//!
//! Entries are `u64`. Products accumulate in 64 bits with wrap-around on
//! overflow, so very long walks on dense graphs produce counts modulo 2^64
//! rather than arbitrary-precision values.

use std::ops::Index;

use crate::error::{Result, RouteError};

/// Row-major dense matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<u64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn set(&mut self, row: usize, col: usize, value: u64) {
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[u64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = u64;

    fn index(&self, (row, col): (usize, usize)) -> &u64 {
        &self.data[row * self.cols + col]
    }
}

/// `n×n` identity matrix.
pub fn identity(n: usize) -> Matrix {
    let mut m = Matrix::zeros(n, n);
    for i in 0..n {
        m.set(i, i, 1);
    }
    m
}

/// Standard matrix product `a × b`.
///
/// Fails with [`RouteError::DimensionMismatch`] when `a.cols() != b.rows()`.
/// Uses i-k-j loop order so the inner loop walks both `b` and the output row
/// contiguously; zero cells of `a` are skipped, which matters for sparse
/// connectivity matrices.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols != b.rows {
        return Err(RouteError::DimensionMismatch {
            left_rows: a.rows,
            left_cols: a.cols,
            right_rows: b.rows,
            right_cols: b.cols,
        });
    }

    let mut out = Matrix::zeros(a.rows, b.cols);
    for i in 0..a.rows {
        let out_row = &mut out.data[i * b.cols..(i + 1) * b.cols];
        for k in 0..a.cols {
            let lhs = a.data[i * a.cols + k];
            if lhs == 0 {
                continue;
            }
            let b_row = b.row(k);
            for (cell, &rhs) in out_row.iter_mut().zip(b_row) {
                *cell = cell.wrapping_add(lhs.wrapping_mul(rhs));
            }
        }
    }
    Ok(out)
}

/// `m^exponent` by repeated squaring: O(n³ · log(exponent)).
///
/// `m^0` is the identity. Fails if `m` is not square.
pub fn pow(m: &Matrix, exponent: u32) -> Result<Matrix> {
    if !m.is_square() {
        return Err(RouteError::DimensionMismatch {
            left_rows: m.rows,
            left_cols: m.cols,
            right_rows: m.rows,
            right_cols: m.cols,
        });
    }

    let mut result = identity(m.rows);
    let mut base = m.clone();
    let mut remaining = exponent;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = multiply(&result, &base)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            base = multiply(&base, &base)?;
        }
    }

    Ok(result)
}
