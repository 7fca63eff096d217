/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the utils module

use thiserror::Error;

/// Errors that can occur in the utils module
#[derive(Error, Debug)]
pub enum UtilsError {
    /// Matrix dimensions are incompatible with the operation
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Matrix is not Hermitian within tolerance
    #[error("Matrix is not Hermitian: max |A - A†| = {0:.3e}")]
    NotHermitian(f64),

    /// Eigen-decomposition did not converge
    #[error("Eigen-decomposition did not converge: {0}")]
    ConvergenceError(String),
}

/// A specialized Result type for utils operations
pub type Result<T> = std::result::Result<T, UtilsError>;
