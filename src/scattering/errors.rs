/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the scattering module

use thiserror::Error;

/// Result type for scattering amplitude operations
pub type Result<T> = std::result::Result<T, ScatteringError>;

/// Errors raised while building or evaluating scattering amplitudes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScatteringError {
    /// Form-factor coefficient list does not hold a1 b1 ... a5 b5 c
    #[error("Invalid form factor parameter count: expected {expected}, found {found}")]
    InvalidParameterCount { expected: usize, found: usize },

    /// A Gaussian exponent is negative or a coefficient is not finite
    #[error("Invalid form factor coefficient: {0}")]
    InvalidCoefficient(String),

    /// Both or neither of form factors and scattering lengths were supplied
    #[error("Ambiguous amplitude source: {0}")]
    AmbiguousAmplitudeSource(&'static str),

    /// The amplitude source has no entry for a species of the cell
    #[error("No scattering amplitude for species {0}")]
    MissingSpecies(String),
}
