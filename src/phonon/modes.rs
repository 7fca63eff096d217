/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Phonon modes at a wave vector and the solver interface

use super::errors::{PhononError, Result};
use crate::atoms::Cell;
use ndarray::Array2;
use num_complex::Complex64;

/// Frequencies and polarization vectors at one q-point
#[derive(Debug, Clone)]
pub struct PhononModes {
    /// Reduced wave vector in the primitive reciprocal basis
    pub qpoint: [f64; 3],
    /// Frequencies in THz, ascending; imaginary modes are negative
    pub frequencies: Vec<f64>,
    /// Mass-weighted eigenvectors, one column per branch
    ///
    /// Row `3k + α` is the Cartesian component α of atom k.
    pub eigenvectors: Array2<Complex64>,
}

impl PhononModes {
    /// Number of branches
    pub fn num_branches(&self) -> usize {
        self.frequencies.len()
    }

    /// Cartesian polarization of atom `atom` in branch `branch`
    pub fn polarization(&self, atom: usize, branch: usize) -> [Complex64; 3] {
        [
            self.eigenvectors[(3 * atom, branch)],
            self.eigenvectors[(3 * atom + 1, branch)],
            self.eigenvectors[(3 * atom + 2, branch)],
        ]
    }

    /// Check that the modes describe a cell with `num_atoms` atoms
    pub fn validate(&self, num_atoms: usize) -> Result<()> {
        let n = 3 * num_atoms;
        if self.frequencies.len() != n || self.eigenvectors.dim() != (n, n) {
            return Err(PhononError::ShapeMismatch(format!(
                "expected {} branches with {}x{} eigenvectors at q = {:?}, got {} and {:?}",
                n,
                n,
                n,
                self.qpoint,
                self.frequencies.len(),
                self.eigenvectors.dim()
            )));
        }
        Ok(())
    }
}

/// Source of phonon frequencies and eigenvectors
///
/// Eigenvectors follow the phase convention in which the displacement of
/// atom k in cell L is proportional to `e_k exp(2πi q·(L + x_k))`.
pub trait PhononSolver: Sync {
    /// Primitive cell the modes refer to
    fn cell(&self) -> &Cell;

    /// Solve for the modes at a reduced wave vector
    fn solve(&self, qpoint: [f64; 3]) -> Result<PhononModes>;
}
