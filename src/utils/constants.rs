/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical constants and unit conversions used in phonon calculations
//!
//! Values from CODATA 2018.

use std::f64::consts::PI;

/// Boltzmann constant in eV/K
pub const BOLTZMANN_EV: f64 = 8.617333262e-5;

/// Planck constant in eV·s
pub const PLANCK_EV: f64 = 4.135667696e-15;

/// Reduced Planck constant in eV·s
pub const HBAR_EV: f64 = 6.582119569e-16;

/// Elementary charge in C (1 eV in J)
pub const EV_IN_JOULE: f64 = 1.602176634e-19;

/// Atomic mass unit in kg
pub const AMU_IN_KG: f64 = 1.66053906660e-27;

/// 1 THz in Hz
pub const THZ: f64 = 1.0e12;

/// Phonon energy in eV of a 1 THz mode
pub const THZ_TO_EV: f64 = PLANCK_EV * THZ;

/// sqrt(eV/Å²/amu) to THz: sqrt(eV/amu)/Å/(2π)/1e12
pub const EIGENVALUE_TO_THZ: f64 = 15.633302;

/// ħ/(amu · 2π · 1 THz) expressed in Å²
///
/// Dividing by a frequency in THz gives ħ/(mω) in Å² for a mass in amu.
pub const THERMAL_DISPLACEMENT_UNIT: f64 =
    HBAR_EV * EV_IN_JOULE / AMU_IN_KG / (2.0 * PI * THZ) * 1.0e20;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derived_constants() {
        assert_relative_eq!(THZ_TO_EV, 4.135667696e-3, epsilon = 1e-15);
        assert_relative_eq!(HBAR_EV * 2.0 * PI, PLANCK_EV, max_relative = 1e-9);
        assert_relative_eq!(THERMAL_DISPLACEMENT_UNIT, 1.010758, max_relative = 1e-5);

        let computed = (EV_IN_JOULE / AMU_IN_KG).sqrt() / 1.0e-10 / (2.0 * PI) / THZ;
        assert_relative_eq!(EIGENVALUE_TO_THZ, computed, max_relative = 1e-6);
    }
}
