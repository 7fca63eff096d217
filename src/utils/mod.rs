/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility functions for phonon calculations
//!
//! Physical constants, Hermitian eigen-decomposition and thermal
//! occupation factors shared by the solver and the structure factor.

pub mod constants;
pub mod errors;
pub mod linear_algebra;
pub mod thermal;

pub use errors::{Result, UtilsError};
pub use linear_algebra::{hermitian_eigen, HermitianEigen};
pub use thermal::{bose_einstein_occupation, mode_mean_square_amplitude};
