/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Degenerate phonon branches
//!
//! Branches with equal frequencies are physically indistinguishable and
//! come out of the eigensolver in arbitrary relative order, so per-branch
//! intensities can only be compared after summing over each degenerate
//! group.

use super::errors::{Result, SpectrumError};
use ndarray::Array2;

/// Default frequency tolerance (THz) for grouping degenerate branches
pub const DEFAULT_DEGENERACY_TOLERANCE: f64 = 1e-4;

/// Group consecutive branches whose frequencies lie within `tolerance`
/// of the first frequency of the group
///
/// Frequencies are expected in ascending order, as returned by the solver.
pub fn degenerate_groups(frequencies: &[f64], tolerance: f64) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut start = f64::NAN;

    for (i, &f) in frequencies.iter().enumerate() {
        match groups.last_mut() {
            Some(group) if (f - start).abs() < tolerance => group.push(i),
            _ => {
                groups.push(vec![i]);
                start = f;
            }
        }
    }
    groups
}

/// Sum `values` within each group of branch indices
pub fn sum_over_groups(values: &[f64], groups: &[Vec<usize>]) -> Result<Vec<f64>> {
    groups
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|&i| {
                    values.get(i).copied().ok_or_else(|| {
                        SpectrumError::ShapeMismatch(format!(
                            "branch index {} out of range for {} branches",
                            i,
                            values.len()
                        ))
                    })
                })
                .sum::<Result<f64>>()
        })
        .collect()
}

/// Compare two intensity tables row by row after summing over groups
///
/// `groups[j]` lists the degenerate groups of row j.
///
/// # Errors
///
/// * `ShapeMismatch` if the tables or the group list disagree in size
/// * `ReferenceMismatch` for the first group whose sums differ by more than `atol`
pub fn compare_grouped(
    computed: &Array2<f64>,
    reference: &Array2<f64>,
    groups: &[Vec<Vec<usize>>],
    atol: f64,
) -> Result<()> {
    if computed.dim() != reference.dim() {
        return Err(SpectrumError::ShapeMismatch(format!(
            "computed table is {:?} but reference is {:?}",
            computed.dim(),
            reference.dim()
        )));
    }
    if groups.len() != computed.nrows() {
        return Err(SpectrumError::ShapeMismatch(format!(
            "{} group lists for {} rows",
            groups.len(),
            computed.nrows()
        )));
    }

    for (j, row_groups) in groups.iter().enumerate() {
        let c_row = computed.row(j).to_vec();
        let r_row = reference.row(j).to_vec();
        let c_sums = sum_over_groups(&c_row, row_groups)?;
        let r_sums = sum_over_groups(&r_row, row_groups)?;

        for ((group, c), r) in row_groups.iter().zip(c_sums).zip(r_sums) {
            if (c - r).abs() > atol || c.is_nan() != r.is_nan() {
                return Err(SpectrumError::ReferenceMismatch {
                    qpoint: j,
                    branches: group.clone(),
                    computed: c,
                    reference: r,
                });
            }
        }
    }
    Ok(())
}

/// Compare intensities against a reference, grouping branches by frequency
pub fn compare_by_frequency(
    frequencies: &Array2<f64>,
    computed: &Array2<f64>,
    reference: &Array2<f64>,
    freq_tolerance: f64,
    atol: f64,
) -> Result<()> {
    if frequencies.dim() != computed.dim() {
        return Err(SpectrumError::ShapeMismatch(format!(
            "frequency table is {:?} but intensity table is {:?}",
            frequencies.dim(),
            computed.dim()
        )));
    }

    let groups: Vec<Vec<Vec<usize>>> = frequencies
        .rows()
        .into_iter()
        .map(|row| degenerate_groups(&row.to_vec(), freq_tolerance))
        .collect();
    compare_grouped(computed, reference, &groups, atol)
}

/// Repeat a fixed grouping for every row in `rows`
///
/// Useful for reference data where the degeneracy pattern is known to be
/// constant along a segment of the path.
pub fn uniform_groups(rows: usize, groups: &[Vec<usize>]) -> Vec<Vec<Vec<usize>>> {
    vec![groups.to_vec(); rows]
}
