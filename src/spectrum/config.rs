/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Run configuration for structure-factor calculations
//!
//! A run is described by a JSON document such as
//!
//! ```json
//! {
//!   "temperature": 300.0,
//!   "mesh": [5, 5, 5],
//!   "n_points": 11,
//!   "g_points": [[7, 1, 1]],
//!   "directions": [[0.5, 0.5, 0.5]],
//!   "amplitude": { "scattering_lengths": { "Na": 3.63, "Cl": 9.577 } }
//! }
//! ```
//!
//! G-points and directions are given in conventional cubic coordinates and
//! converted to the primitive basis with `primitive_matrix`. Missing fields
//! take their defaults.

use super::dynamic_structure_factor::DEFAULT_FREQ_MIN;
use super::errors::{Result, SpectrumError};
use crate::atoms::{transform_row, FCC_PRIMITIVE_MATRIX};
use crate::scattering::{AmplitudeSource, FormFactorParams, ScatteringError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Where scattering amplitudes come from
///
/// Exactly one source is named, so a configuration cannot ask for both form
/// factors and scattering lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmplitudeConfig {
    /// Explicit WK1995 coefficient lists per species
    FormFactors(BTreeMap<String, FormFactorParams>),
    /// Built-in WK1995 table for every species of the cell
    Wk1995,
    /// Neutron scattering lengths per species
    ScatteringLengths(BTreeMap<String, f64>),
}

impl AmplitudeConfig {
    /// Build the amplitude source for the given species
    pub fn to_source(&self, species: &[&str]) -> Result<AmplitudeSource> {
        let source = match self {
            Self::FormFactors(params) => {
                AmplitudeSource::form_factors(params.iter().map(|(k, v)| (k.clone(), *v)))
            }
            Self::Wk1995 => AmplitudeSource::wk1995(species)?,
            Self::ScatteringLengths(lengths) => {
                AmplitudeSource::scattering_lengths(lengths.iter().map(|(k, v)| (k.clone(), *v)))
            }
        };
        source.check_species(species)?;
        Ok(source)
    }
}

impl Default for AmplitudeConfig {
    fn default() -> Self {
        Self::Wk1995
    }
}

/// Scattering vectors along one direction from a reciprocal lattice point
#[derive(Debug, Clone, PartialEq)]
pub struct ScatteringPath {
    /// G in conventional coordinates
    pub g_point: [f64; 3],
    /// Direction in conventional coordinates
    pub direction: [f64; 3],
    /// Q = G + x·direction in primitive coordinates, x in (0, 1]
    pub qpoints: Vec<[f64; 3]>,
}

/// Parameters of a structure-factor run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DsfConfig {
    /// Temperature in Kelvin
    pub temperature: f64,
    /// Lower frequency cutoff in THz
    pub freq_min: f64,
    /// Mesh for the Debye-Waller factor
    pub mesh: [usize; 3],
    /// Points per direction, including the excluded G itself
    pub n_points: usize,
    /// Reciprocal lattice points (conventional coordinates)
    pub g_points: Vec<[f64; 3]>,
    /// Directions away from each G (conventional coordinates)
    pub directions: Vec<[f64; 3]>,
    /// Conventional to primitive transformation
    pub primitive_matrix: [[f64; 3]; 3],
    /// Amplitude source
    pub amplitude: AmplitudeConfig,
}

impl Default for DsfConfig {
    fn default() -> Self {
        Self {
            temperature: 300.0,
            freq_min: DEFAULT_FREQ_MIN,
            mesh: [5, 5, 5],
            n_points: 11,
            g_points: vec![[7.0, 1.0, 1.0]],
            directions: vec![[0.5, 0.5, 0.5]],
            primitive_matrix: FCC_PRIMITIVE_MATRIX,
            amplitude: AmplitudeConfig::default(),
        }
    }
}

impl DsfConfig {
    /// Read and validate a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if !(self.temperature.is_finite() && self.temperature >= 0.0) {
            return Err(SpectrumError::InvalidTemperature(self.temperature));
        }
        if !(self.freq_min.is_finite() && self.freq_min >= 0.0) {
            return Err(SpectrumError::InvalidParameter(format!(
                "freq_min {} must be finite and non-negative",
                self.freq_min
            )));
        }
        if self.mesh.contains(&0) {
            return Err(SpectrumError::InvalidParameter(format!(
                "mesh {:?} has a zero dimension",
                self.mesh
            )));
        }
        if self.n_points < 2 {
            return Err(SpectrumError::InvalidParameter(format!(
                "n_points must be at least 2, got {}",
                self.n_points
            )));
        }
        if self.g_points.is_empty() || self.directions.is_empty() {
            return Err(SpectrumError::InvalidParameter(
                "at least one G-point and one direction are required".to_string(),
            ));
        }
        let finite = |v: &[f64; 3]| v.iter().all(|x| x.is_finite());
        if !self.g_points.iter().chain(&self.directions).all(finite)
            || !self.primitive_matrix.iter().all(finite)
        {
            return Err(SpectrumError::InvalidParameter(
                "G-points, directions and primitive matrix must be finite".to_string(),
            ));
        }
        if let AmplitudeConfig::ScatteringLengths(lengths) = &self.amplitude {
            if let Some((s, b)) = lengths.iter().find(|(_, b)| !b.is_finite()) {
                return Err(ScatteringError::InvalidCoefficient(format!(
                    "scattering length {} for {}",
                    b, s
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Scattering vectors for every (G, direction) pair
    ///
    /// Each path holds `n_points - 1` vectors; G itself is left out.
    pub fn scattering_paths(&self) -> Result<Vec<ScatteringPath>> {
        self.validate()?;
        let step = 1.0 / (self.n_points - 1) as f64;
        let mut paths = Vec::with_capacity(self.g_points.len() * self.directions.len());
        for &g_point in &self.g_points {
            let g = transform_row(g_point, &self.primitive_matrix);
            for &direction in &self.directions {
                let d = transform_row(direction, &self.primitive_matrix);
                let qpoints = (1..self.n_points)
                    .map(|i| {
                        let x = i as f64 * step;
                        [g[0] + x * d[0], g[1] + x * d[1], g[2] + x * d[2]]
                    })
                    .collect();
                paths.push(ScatteringPath {
                    g_point,
                    direction,
                    qpoints,
                });
            }
        }
        Ok(paths)
    }
}
