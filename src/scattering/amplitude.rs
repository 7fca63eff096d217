/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Per-species scattering amplitudes
//!
//! An [`AmplitudeSource`] is either Q-dependent (X-ray form factors) or
//! Q-independent (neutron scattering lengths). Exactly one kind is active
//! for a structure-factor run, which the enum enforces by construction.

use super::errors::{Result, ScatteringError};
use super::form_factor::{wk1995_params, FormFactorParams};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// User-supplied form factor `f(species, |Q|)`
pub type FormFactorFn = dyn Fn(&str, f64) -> f64 + Send + Sync;

/// Source of per-atom scattering amplitudes
#[derive(Clone)]
pub enum AmplitudeSource {
    /// WK1995 coefficients per species
    FormFactors(HashMap<String, FormFactorParams>),
    /// Arbitrary form-factor function of species and |Q|
    FormFactorFunction(Arc<FormFactorFn>),
    /// Fixed neutron scattering lengths per species
    ScatteringLengths(HashMap<String, f64>),
}

impl AmplitudeSource {
    /// Form factors from explicit coefficient sets
    pub fn form_factors<S: Into<String>>(
        params: impl IntoIterator<Item = (S, FormFactorParams)>,
    ) -> Self {
        Self::FormFactors(params.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Form factors from the built-in WK1995 table
    pub fn wk1995(species: &[&str]) -> Result<Self> {
        let mut params = HashMap::new();
        for &s in species {
            let p = wk1995_params(s).ok_or_else(|| ScatteringError::MissingSpecies(s.to_string()))?;
            params.insert(s.to_string(), p);
        }
        Ok(Self::FormFactors(params))
    }

    /// Form factor given as a function of species and |Q|
    pub fn form_factor_fn<F>(f: F) -> Self
    where
        F: Fn(&str, f64) -> f64 + Send + Sync + 'static,
    {
        Self::FormFactorFunction(Arc::new(f))
    }

    /// Fixed scattering lengths
    pub fn scattering_lengths<S: Into<String>>(lengths: impl IntoIterator<Item = (S, f64)>) -> Self {
        Self::ScatteringLengths(lengths.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Resolve the optional-argument calling style into a single source
    ///
    /// # Errors
    ///
    /// `AmbiguousAmplitudeSource` when both or neither are given.
    pub fn from_options(
        form_factor: Option<Arc<FormFactorFn>>,
        scattering_lengths: Option<HashMap<String, f64>>,
    ) -> Result<Self> {
        match (form_factor, scattering_lengths) {
            (Some(f), None) => Ok(Self::FormFactorFunction(f)),
            (None, Some(b)) => Ok(Self::ScatteringLengths(b)),
            (Some(_), Some(_)) => Err(ScatteringError::AmbiguousAmplitudeSource(
                "both a form factor and scattering lengths were supplied",
            )),
            (None, None) => Err(ScatteringError::AmbiguousAmplitudeSource(
                "neither a form factor nor scattering lengths were supplied",
            )),
        }
    }

    /// Whether the amplitude varies with |Q|
    pub fn is_q_dependent(&self) -> bool {
        !matches!(self, Self::ScatteringLengths(_))
    }

    /// Amplitude of `species` at momentum transfer `q` (Å⁻¹, 2π included)
    pub fn amplitude(&self, species: &str, q: f64) -> Result<f64> {
        match self {
            Self::FormFactors(params) => params
                .get(species)
                .map(|p| p.evaluate(q))
                .ok_or_else(|| ScatteringError::MissingSpecies(species.to_string())),
            Self::FormFactorFunction(f) => {
                let value = f(species, q);
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(ScatteringError::InvalidCoefficient(format!(
                        "form factor {} for {} at Q = {}",
                        value, species, q
                    )))
                }
            }
            Self::ScatteringLengths(lengths) => lengths
                .get(species)
                .copied()
                .ok_or_else(|| ScatteringError::MissingSpecies(species.to_string())),
        }
    }

    /// Fail fast if any species lacks an entry
    ///
    /// A form-factor function is assumed to cover every species.
    pub fn check_species(&self, species: &[&str]) -> Result<()> {
        let missing = match self {
            Self::FormFactors(params) => species.iter().find(|s| !params.contains_key(**s)),
            Self::FormFactorFunction(_) => None,
            Self::ScatteringLengths(lengths) => species.iter().find(|s| !lengths.contains_key(**s)),
        };
        match missing {
            Some(s) => Err(ScatteringError::MissingSpecies(s.to_string())),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for AmplitudeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FormFactors(params) => f.debug_tuple("FormFactors").field(params).finish(),
            Self::FormFactorFunction(_) => f.write_str("FormFactorFunction(..)"),
            Self::ScatteringLengths(lengths) => {
                f.debug_tuple("ScatteringLengths").field(lengths).finish()
            }
        }
    }
}
