/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Scattering amplitudes
//!
//! Atomic X-ray form factors (Waasmaier & Kirfel 1995) and the per-species
//! amplitude source consumed by the dynamic structure factor.

pub mod amplitude;
pub mod errors;
pub mod form_factor;

pub use amplitude::{AmplitudeSource, FormFactorFn};
pub use errors::{Result, ScatteringError};
pub use form_factor::{
    atomic_form_factor_wk1995, tabulate, wk1995_params, FormFactorParams, NUM_FORM_FACTOR_PARAMS,
    WK1995_PARAMS,
};
