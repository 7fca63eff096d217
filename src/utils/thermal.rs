/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Thermal occupation of phonon modes
//!
//! Bose-Einstein populations and single-mode mean-square amplitudes used
//! by the Debye-Waller factor and the Stokes intensity factor.

use super::constants::{BOLTZMANN_EV, THERMAL_DISPLACEMENT_UNIT, THZ_TO_EV};

/// Bose-Einstein occupation number of a mode
///
/// # Arguments
///
/// * `frequency` - Mode frequency in THz
/// * `temperature` - Temperature in Kelvin
///
/// # Returns
///
/// `1 / (exp(hν / kT) - 1)`, or zero at T = 0 and for non-positive frequencies
pub fn bose_einstein_occupation(frequency: f64, temperature: f64) -> f64 {
    if temperature <= 0.0 || frequency <= 0.0 {
        return 0.0;
    }

    let x = frequency * THZ_TO_EV / (BOLTZMANN_EV * temperature);
    1.0 / x.exp_m1()
}

/// Mean-square amplitude factor `ħ/(mω) (n + ½)` of a single mode
///
/// # Arguments
///
/// * `frequency` - Mode frequency in THz
/// * `mass` - Atomic mass in amu
/// * `temperature` - Temperature in Kelvin
///
/// # Returns
///
/// Amplitude factor in Å², or zero for non-positive frequencies
pub fn mode_mean_square_amplitude(frequency: f64, mass: f64, temperature: f64) -> f64 {
    if frequency <= 0.0 {
        return 0.0;
    }
    let n = bose_einstein_occupation(frequency, temperature);
    THERMAL_DISPLACEMENT_UNIT / (mass * frequency) * (n + 0.5)
}
