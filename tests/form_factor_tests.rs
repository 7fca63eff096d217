/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Properties of the WK1995 atomic form factors

use approx::assert_relative_eq;
use phonon_dsf::scattering::{
    atomic_form_factor_wk1995, wk1995_params, FormFactorParams, ScatteringError,
};
use rstest::rstest;

#[rstest]
#[case("Na")]
#[case("Cl")]
#[case("Si")]
#[case("Pb")]
#[case("Pb0")]
#[case("Te")]
fn test_forward_value_is_sum_of_coefficients(#[case] species: &str) {
    let params = wk1995_params(species).unwrap();
    let coefficients = params.to_vec();
    let expected: f64 = coefficients.iter().step_by(2).sum();

    let f0 = atomic_form_factor_wk1995(0.0, &coefficients).unwrap();
    assert_relative_eq!(f0, expected, epsilon = 1e-10);
    assert_relative_eq!(params.evaluate(0.0), f0, epsilon = 1e-12);
}

#[rstest]
#[case("Na")]
#[case("Cl")]
#[case("Si")]
#[case("Pb")]
#[case("Pb0")]
#[case("Te")]
fn test_non_increasing_and_tends_to_c(#[case] species: &str) {
    let params = wk1995_params(species).unwrap();

    let mut previous = params.evaluate(0.0);
    for i in 1..=200 {
        let f = params.evaluate(i as f64 * 0.05);
        assert!(f <= previous + 1e-12, "{} increases at Q = {}", species, i as f64 * 0.05);
        previous = f;
    }

    assert_relative_eq!(params.evaluate(1.0e4), params.c(), epsilon = 1e-6);
}

#[test]
fn test_ionic_electron_counts() {
    // Na+ has 10 electrons and Cl- has 18
    assert_relative_eq!(wk1995_params("Na").unwrap().forward_value(), 10.0, epsilon = 1e-3);
    assert_relative_eq!(wk1995_params("Cl").unwrap().forward_value(), 18.0, epsilon = 1e-2);
}

#[test]
fn test_q_includes_two_pi() {
    // With s = Q / 4π, a single Gaussian with b = 1 drops to 1/e at Q = 4π
    let mut coefficients = vec![0.0; 11];
    coefficients[0] = 1.0;
    coefficients[1] = 1.0;
    let f = atomic_form_factor_wk1995(4.0 * std::f64::consts::PI, &coefficients).unwrap();
    assert_relative_eq!(f, (-1.0f64).exp(), epsilon = 1e-12);
}

#[rstest]
#[case(0)]
#[case(10)]
#[case(12)]
fn test_wrong_parameter_count(#[case] n: usize) {
    let coefficients = vec![1.0; n];
    assert_eq!(
        atomic_form_factor_wk1995(1.0, &coefficients),
        Err(ScatteringError::InvalidParameterCount {
            expected: 11,
            found: n
        })
    );
    assert!(FormFactorParams::new(&coefficients).is_err());
}
