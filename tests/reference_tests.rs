/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Degeneracy-aware comparison against tabulated NaCl intensities
//!
//! Rows 0-5 of each table have degenerate pairs (0, 1) and (3, 4); rows 6-9
//! have (0, 1) and (2, 3). Intensities of degenerate branches are only
//! meaningful as sums.

use ndarray::Array2;
use phonon_dsf::spectrum::{
    compare_by_frequency, compare_grouped, load_table, uniform_groups, SpectrumError,
};
use rstest::rstest;

const ATOL: f64 = 1e-5;

fn table_path(name: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn nacl_groups() -> Vec<Vec<Vec<usize>>> {
    let mut groups = uniform_groups(6, &[vec![0, 1], vec![2], vec![3, 4], vec![5]]);
    groups.extend(uniform_groups(4, &[vec![0, 1], vec![2, 3], vec![4], vec![5]]));
    groups
}

/// Frequencies with the same degeneracy pattern as the tables
fn nacl_like_frequencies() -> Array2<f64> {
    Array2::from_shape_fn((10, 6), |(j, b)| {
        let pattern: [f64; 6] = if j < 6 {
            [1.0, 1.0, 2.0, 3.0, 3.0, 4.0]
        } else {
            [1.0, 1.0, 2.0, 2.0, 3.0, 4.0]
        };
        pattern[b] + 0.1 * j as f64
    })
}

/// Swap two branches inside every degenerate pair
fn mix_degenerate(table: &Array2<f64>) -> Array2<f64> {
    let mut mixed = table.clone();
    for j in 0..table.nrows() {
        let pairs: [(usize, usize); 2] = if j < 6 { [(0, 1), (3, 4)] } else { [(0, 1), (2, 3)] };
        for (a, b) in pairs {
            mixed[(j, a)] = table[(j, b)];
            mixed[(j, b)] = table[(j, a)];
        }
    }
    mixed
}

#[rstest]
#[case("nacl_form_factor.dat")]
#[case("nacl_scattering_length.dat")]
fn test_reference_tables_load(#[case] name: &str) {
    let table = load_table(table_path(name)).unwrap();
    assert_eq!(table.dim(), (10, 6));
    assert!(table.iter().all(|&s| s >= 0.0));
}

#[rstest]
#[case("nacl_form_factor.dat")]
#[case("nacl_scattering_length.dat")]
fn test_mixing_within_groups_passes(#[case] name: &str) {
    let reference = load_table(table_path(name)).unwrap();
    let mixed = mix_degenerate(&reference);

    compare_grouped(&mixed, &reference, &nacl_groups(), ATOL).unwrap();
    compare_by_frequency(&nacl_like_frequencies(), &mixed, &reference, 1e-4, ATOL).unwrap();
}

#[rstest]
#[case("nacl_form_factor.dat")]
#[case("nacl_scattering_length.dat")]
fn test_mixing_across_groups_fails(#[case] name: &str) {
    let reference = load_table(table_path(name)).unwrap();
    let mut mixed = reference.clone();
    mixed[(0, 1)] = reference[(0, 2)];
    mixed[(0, 2)] = reference[(0, 1)];

    match compare_grouped(&mixed, &reference, &nacl_groups(), ATOL) {
        Err(SpectrumError::ReferenceMismatch {
            qpoint, branches, ..
        }) => {
            assert_eq!(qpoint, 0);
            assert_eq!(branches, vec![0, 1]);
        }
        other => panic!("expected a reference mismatch, got {:?}", other),
    }
}

#[test]
fn test_small_perturbation_detected() {
    let reference = load_table(table_path("nacl_form_factor.dat")).unwrap();

    let mut within = reference.clone();
    within[(7, 5)] += 0.5 * ATOL;
    compare_grouped(&within, &reference, &nacl_groups(), ATOL).unwrap();

    let mut beyond = reference.clone();
    beyond[(7, 5)] += 10.0 * ATOL;
    match compare_grouped(&beyond, &reference, &nacl_groups(), ATOL) {
        Err(SpectrumError::ReferenceMismatch {
            qpoint, branches, ..
        }) => {
            assert_eq!(qpoint, 7);
            assert_eq!(branches, vec![5]);
        }
        other => panic!("expected a reference mismatch, got {:?}", other),
    }
}

#[test]
fn test_tables_are_not_interchangeable() {
    let aff = load_table(table_path("nacl_form_factor.dat")).unwrap();
    let b = load_table(table_path("nacl_scattering_length.dat")).unwrap();
    assert!(compare_grouped(&aff, &b, &nacl_groups(), ATOL).is_err());
}

#[test]
fn test_group_list_must_cover_rows() {
    let reference = load_table(table_path("nacl_form_factor.dat")).unwrap();
    let short = uniform_groups(3, &[vec![0, 1, 2, 3, 4, 5]]);
    assert!(matches!(
        compare_grouped(&reference, &reference, &short, ATOL),
        Err(SpectrumError::ShapeMismatch(_))
    ));
}
