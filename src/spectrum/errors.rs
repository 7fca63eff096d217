/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the spectrum module

use thiserror::Error;

/// Result type for structure-factor operations
pub type Result<T> = std::result::Result<T, SpectrumError>;

/// Errors raised while computing or validating dynamic structure factors
#[derive(Error, Debug)]
pub enum SpectrumError {
    /// Amplitude source problem
    #[error("Scattering error: {0}")]
    Scattering(#[from] crate::scattering::ScatteringError),

    /// Solver or sampling problem
    #[error("Phonon error: {0}")]
    Phonon(#[from] crate::phonon::PhononError),

    /// Array shapes disagree
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Temperature is negative or not finite
    #[error("Invalid temperature: {0} K")]
    InvalidTemperature(f64),

    /// Other out-of-range parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Grouped intensities differ from the reference beyond tolerance
    #[error(
        "Reference mismatch at q-point {qpoint}, branches {branches:?}: computed {computed:.6}, reference {reference:.6}"
    )]
    ReferenceMismatch {
        qpoint: usize,
        branches: Vec<usize>,
        computed: f64,
        reference: f64,
    },

    /// Malformed numeric table
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration file could not be decoded
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// File error
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),
}
