/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Phonon dynamic structure factor
//!
//! Combines phonon modes, scattering amplitudes, Bose occupation and
//! Debye-Waller factors into one-phonon intensities S(Q, ν), and compares
//! them with reference tables while treating degenerate branches as one.

pub mod config;
pub mod degeneracy;
pub mod dynamic_structure_factor;
pub mod errors;
pub mod reference;
pub mod runner;

pub use config::{AmplitudeConfig, DsfConfig, ScatteringPath};
pub use degeneracy::{
    compare_by_frequency, compare_grouped, degenerate_groups, sum_over_groups, uniform_groups,
    DEFAULT_DEGENERACY_TOLERANCE,
};
pub use dynamic_structure_factor::{
    split_scattering_vector, DynamicStructureFactor, PointIntensities, StructureFactorResult,
    DEFAULT_FREQ_MIN,
};
pub use errors::{Result, SpectrumError};
pub use reference::{format_table, load_table, parse_table};
pub use runner::{run_config, PathReport, PathResult};
