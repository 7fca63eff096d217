/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the atoms module

/// Error types for the atoms module
#[derive(Debug, thiserror::Error)]
pub enum AtomError {
    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),

    #[error("Invalid atomic mass for {symbol}: {mass}")]
    InvalidMass { symbol: String, mass: f64 },

    #[error("Invalid lattice: {0}")]
    InvalidLattice(String),

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
