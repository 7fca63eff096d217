/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atomic X-ray form factors
//!
//! Analytic fit of Waasmaier & Kirfel, Acta Cryst. A51, 416 (1995):
//!
//! f(Q) = Σᵢ aᵢ exp(-bᵢ s²) + c,   s = sin(θ)/λ = Q / 4π
//!
//! with Q in Å⁻¹ including the 2π factor, so that `bᵢ` are the tabulated
//! values in Å².

use super::errors::{Result, ScatteringError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f64::consts::PI;

/// Number of coefficients in a WK1995 parameter set: five (a, b) pairs and c
pub const NUM_FORM_FACTOR_PARAMS: usize = 11;

/// Validated WK1995 coefficients for one species
///
/// Serialized as the flat list `[a1, b1, a2, b2, a3, b3, a4, b4, a5, b5, c]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct FormFactorParams {
    a: [f64; 5],
    b: [f64; 5],
    c: f64,
}

impl FormFactorParams {
    /// Build from the flat coefficient list
    ///
    /// # Errors
    ///
    /// * `InvalidParameterCount` unless exactly 11 values are given
    /// * `InvalidCoefficient` for non-finite values or a negative `bᵢ`
    pub fn new(coefficients: &[f64]) -> Result<Self> {
        if coefficients.len() != NUM_FORM_FACTOR_PARAMS {
            return Err(ScatteringError::InvalidParameterCount {
                expected: NUM_FORM_FACTOR_PARAMS,
                found: coefficients.len(),
            });
        }

        if let Some(bad) = coefficients.iter().find(|x| !x.is_finite()) {
            return Err(ScatteringError::InvalidCoefficient(format!(
                "non-finite value {}",
                bad
            )));
        }

        let mut raw = [0.0; NUM_FORM_FACTOR_PARAMS];
        raw.copy_from_slice(coefficients);
        let params = Self::from_coefficients(raw);

        if let Some(i) = params.b.iter().position(|&b| b < 0.0) {
            return Err(ScatteringError::InvalidCoefficient(format!(
                "b{} = {} is negative",
                i + 1,
                params.b[i]
            )));
        }

        Ok(params)
    }

    const fn from_coefficients(x: [f64; NUM_FORM_FACTOR_PARAMS]) -> Self {
        Self {
            a: [x[0], x[2], x[4], x[6], x[8]],
            b: [x[1], x[3], x[5], x[7], x[9]],
            c: x[10],
        }
    }

    /// Evaluate f(Q) for |Q| in Å⁻¹ (2π included)
    pub fn evaluate(&self, q: f64) -> f64 {
        let s = q / (4.0 * PI);
        let s2 = s * s;
        self.a
            .iter()
            .zip(self.b.iter())
            .map(|(a, b)| a * (-b * s2).exp())
            .sum::<f64>()
            + self.c
    }

    /// Gaussian amplitudes a1..a5
    pub fn a(&self) -> &[f64; 5] {
        &self.a
    }

    /// Gaussian exponents b1..b5 in Å²
    pub fn b(&self) -> &[f64; 5] {
        &self.b
    }

    /// Constant term
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Value at Q = 0, Σ aᵢ + c
    pub fn forward_value(&self) -> f64 {
        self.a.iter().sum::<f64>() + self.c
    }

    /// Flat coefficient list in WK1995 order
    pub fn to_vec(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(NUM_FORM_FACTOR_PARAMS);
        for (a, b) in self.a.iter().zip(self.b.iter()) {
            out.push(*a);
            out.push(*b);
        }
        out.push(self.c);
        out
    }
}

impl TryFrom<Vec<f64>> for FormFactorParams {
    type Error = ScatteringError;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<FormFactorParams> for Vec<f64> {
    fn from(params: FormFactorParams) -> Self {
        params.to_vec()
    }
}

/// Atomic form factor from a flat WK1995 coefficient list
///
/// Only the coefficient count is checked; use [`FormFactorParams::new`] to
/// also validate the exponents once and evaluate repeatedly.
pub fn atomic_form_factor_wk1995(q: f64, params: &[f64]) -> Result<f64> {
    if params.len() != NUM_FORM_FACTOR_PARAMS {
        return Err(ScatteringError::InvalidParameterCount {
            expected: NUM_FORM_FACTOR_PARAMS,
            found: params.len(),
        });
    }

    let s2 = (q / (4.0 * PI)).powi(2);
    let gaussians: f64 = params[..10]
        .chunks_exact(2)
        .map(|ab| ab[0] * (-ab[1] * s2).exp())
        .sum();
    Ok(gaussians + params[10])
}

/// Built-in WK1995 coefficients keyed by species label
///
/// "Na" is Na⁺, "Cl" is Cl⁻, "Pb" is Pb⁴⁺ and "Pb0" is neutral Pb;
/// "Si" and "Te" are neutral.
pub static WK1995_PARAMS: Lazy<HashMap<&'static str, FormFactorParams>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "Na",
        FormFactorParams::from_coefficients([
            3.148690, 2.594987, 4.073989, 6.046925, 0.767888, 0.070139, 0.995612, 14.1226457,
            0.968249, 0.217037, 0.045300,
        ]),
    );
    m.insert(
        "Cl",
        FormFactorParams::from_coefficients([
            1.061802, 0.144727, 7.139886, 1.171795, 6.524271, 19.467656, 2.355626, 60.320301,
            35.829404, 0.000436, -34.916604,
        ]),
    );
    m.insert(
        "Si",
        FormFactorParams::from_coefficients([
            5.275329, 2.631338, 3.191038, 33.730728, 1.511514, 0.081119, 1.356849, 86.288640,
            2.519114, 1.170087, 0.145073,
        ]),
    );
    m.insert(
        "Pb",
        FormFactorParams::from_coefficients([
            32.505656, 1.047035, 20.014240, 6.670321, 14.645661, 0.105279, 5.029499, 16.525040,
            1.760138, 0.105279, 4.044678,
        ]),
    );
    m.insert(
        "Pb0",
        FormFactorParams::from_coefficients([
            16.419567, 0.105499, 32.738592, 1.055049, 6.530247, 25.025890, 2.342742, 80.906596,
            19.916475, 6.664449, 4.049824,
        ]),
    );
    m.insert(
        "Te",
        FormFactorParams::from_coefficients([
            6.660302, 33.031656, 6.940756, 0.025750, 19.847015, 5.065547, 1.557175, 84.101613,
            17.802427, 0.487660, -0.806668,
        ]),
    );
    m
});

/// Look up built-in WK1995 coefficients for a species label
pub fn wk1995_params(species: &str) -> Option<FormFactorParams> {
    WK1995_PARAMS.get(species).copied()
}

/// Tabulate f(Q) on `points` evenly spaced values in `[0, q_max]`
pub fn tabulate(params: &FormFactorParams, q_max: f64, points: usize) -> Vec<(f64, f64)> {
    let step = if points > 1 {
        q_max / (points - 1) as f64
    } else {
        0.0
    };
    (0..points)
        .map(|i| {
            let q = i as f64 * step;
            (q, params.evaluate(q))
        })
        .collect()
}
