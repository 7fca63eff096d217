/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # phonon-dsf
//!
//! Phonon-resolved dynamic structure factors for inelastic X-ray and
//! neutron scattering.
//!
//! Intensities S(Q, ν) are built from phonon frequencies and eigenvectors,
//! atomic form factors (Waasmaier & Kirfel 1995) or neutron scattering
//! lengths, the Bose-Einstein population and Debye-Waller factors from
//! mesh-sampled thermal displacements.
//!
//! ```no_run
//! use phonon_dsf::phonon::{nacl_model, run_mesh};
//! use phonon_dsf::scattering::AmplitudeSource;
//! use phonon_dsf::spectrum::DynamicStructureFactor;
//!
//! let model = nacl_model()?;
//! let mesh = run_mesh(&model, [5, 5, 5])?;
//! let source = AmplitudeSource::scattering_lengths([("Na", 3.63), ("Cl", 9.577)]);
//! let qpoints = vec![[1.05, 4.05, 4.05], [1.1, 4.1, 4.1]];
//! let result = DynamicStructureFactor::new(&model, &mesh, qpoints, 300.0, source, 1e-3)?.run()?;
//! println!("{:?}", result.intensities);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod atoms;
pub mod cli;
pub mod phonon;
pub mod scattering;
pub mod spectrum;
pub mod utils;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
