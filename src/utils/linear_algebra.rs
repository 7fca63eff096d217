/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Linear algebra utilities using the Faer library
//!
//! Dynamical matrices are assembled as `ndarray` arrays and diagonalized
//! with Faer's self-adjoint eigen-decomposition.

use super::errors::{Result, UtilsError};
use faer::{Mat, Side};
use ndarray::Array2;
use num_complex::Complex64;

/// Relative tolerance for the Hermiticity check
const HERMITIAN_TOLERANCE: f64 = 1e-8;

/// Convert from ndarray::Array2<Complex64> to faer::Mat<Complex64>
pub fn ndarray_to_faer(array: &Array2<Complex64>) -> Mat<Complex64> {
    let (rows, cols) = array.dim();
    Mat::from_fn(rows, cols, |i, j| array[(i, j)])
}

/// Eigenvalues and eigenvectors of a Hermitian matrix
#[derive(Debug, Clone)]
pub struct HermitianEigen {
    /// Eigenvalues in ascending order
    pub values: Vec<f64>,
    /// Orthonormal eigenvectors, one per column, in the order of `values`
    pub vectors: Array2<Complex64>,
}

/// Diagonalize a Hermitian matrix
///
/// The matrix must be Hermitian to a relative tolerance of 1e-8; only its
/// lower triangle is read by the decomposition.
///
/// # Errors
///
/// * `DimensionMismatch` if the matrix is not square
/// * `NotHermitian` if `A` differs from `A†` beyond tolerance
/// * `ConvergenceError` if the decomposition does not converge
pub fn hermitian_eigen(matrix: &Array2<Complex64>) -> Result<HermitianEigen> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(UtilsError::DimensionMismatch(format!(
            "expected a square matrix, got {}x{}",
            rows, cols
        )));
    }

    let a = ndarray_to_faer(matrix);
    let scale = frobenius_norm(&a).max(f64::MIN_POSITIVE);

    let mut asymmetry: f64 = 0.0;
    for i in 0..rows {
        for j in i..rows {
            asymmetry = asymmetry.max((a[(i, j)] - a[(j, i)].conj()).norm());
        }
    }
    if asymmetry > HERMITIAN_TOLERANCE * scale {
        return Err(UtilsError::NotHermitian(asymmetry));
    }

    let eig = a
        .self_adjoint_eigen(Side::Lower)
        .map_err(|e| UtilsError::ConvergenceError(format!("{:?}", e)))?;

    let values = eig.S().column_vector().iter().map(|s| s.re).collect();
    let u = eig.U();
    let vectors = Array2::from_shape_fn((rows, rows), |(i, j)| u[(i, j)]);

    Ok(HermitianEigen { values, vectors })
}

/// Frobenius norm of a complex matrix
pub fn frobenius_norm(a: &Mat<Complex64>) -> f64 {
    let mut sum = 0.0;
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            sum += a[(i, j)].norm_sqr();
        }
    }
    sum.sqrt()
}
