/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Lattice dynamics
//!
//! The structure factor only needs frequencies and eigenvectors at given
//! wave vectors, which it obtains through the [`PhononSolver`] trait. This
//! module provides a pair-spring force-constant model implementing it, plus
//! mesh and band-path sampling and the thermal displacement matrices built
//! from mesh phonons.

pub mod band;
pub mod errors;
pub mod force_constants;
pub mod mesh;
pub mod modes;
pub mod presets;
pub mod thermal_displacement;

pub use band::{band_path, run_band_structure, BandStructure};
pub use errors::{PhononError, Result};
pub use force_constants::{ForceConstantModel, PairSpring};
pub use mesh::{mesh_qpoints, run_mesh, MeshPhonons};
pub use modes::{PhononModes, PhononSolver};
pub use presets::nacl_model;
pub use thermal_displacement::ThermalDisplacements;
