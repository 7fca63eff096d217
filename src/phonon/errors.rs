/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the phonon module

use thiserror::Error;

/// Result type for phonon operations
pub type Result<T> = std::result::Result<T, PhononError>;

/// Errors raised by the phonon solver and its sampling helpers
#[derive(Error, Debug)]
pub enum PhononError {
    /// Invalid crystal structure
    #[error("Atom error: {0}")]
    AtomError(#[from] crate::atoms::AtomError),

    /// Diagonalization failure
    #[error("Linear algebra error: {0}")]
    LinearAlgebra(#[from] crate::utils::UtilsError),

    /// Pair spring definition is unusable
    #[error("Invalid spring: {0}")]
    InvalidSpring(String),

    /// Sampling mesh has a zero dimension
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Band path has too few points
    #[error("Invalid band path: {0}")]
    InvalidPath(String),

    /// Solver output does not match the cell
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Physical parameter out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
