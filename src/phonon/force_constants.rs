/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Central-force lattice dynamics
//!
//! A [`ForceConstantModel`] builds force constants from pair springs: every
//! pair of atoms of the given species at the given distance is joined by a
//! spring of stiffness k acting along the bond. The force-constant block of
//! a bond with unit vector n is `-k n nᵀ`, and the on-site block is the sum
//! of `k n nᵀ` over all bonds of the atom, which enforces the acoustic sum
//! rule.

use super::errors::{PhononError, Result};
use super::modes::{PhononModes, PhononSolver};
use crate::atoms::{Cell, Vector3D};
use crate::utils::constants::EIGENVALUE_TO_THZ;
use crate::utils::hermitian_eigen;
use log::debug;
use ndarray::Array2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Bond lengths closer than this (Å) to a spring's distance use that spring
const DISTANCE_TOLERANCE: f64 = 1e-3;

/// Central spring between two species at a fixed distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairSpring {
    /// First species label
    pub species_a: String,
    /// Second species label (order does not matter)
    pub species_b: String,
    /// Bond length in Å
    pub distance: f64,
    /// Stiffness in eV/Å²
    pub stiffness: f64,
}

impl PairSpring {
    /// Create a spring between `a` and `b` at `distance` with stiffness `k`
    pub fn new(a: &str, b: &str, distance: f64, stiffness: f64) -> Self {
        Self {
            species_a: a.to_string(),
            species_b: b.to_string(),
            distance,
            stiffness,
        }
    }

    fn connects(&self, a: &str, b: &str) -> bool {
        (self.species_a == a && self.species_b == b) || (self.species_a == b && self.species_b == a)
    }
}

/// One directed bond from atom `i` in the home cell to atom `j` in cell `translation`
#[derive(Debug, Clone)]
struct Bond {
    i: usize,
    j: usize,
    translation: [f64; 3],
    /// k n nᵀ in eV/Å²
    block: [[f64; 3]; 3],
}

/// Pair-spring force-constant model of a crystal
#[derive(Debug, Clone)]
pub struct ForceConstantModel {
    cell: Cell,
    bonds: Vec<Bond>,
}

impl ForceConstantModel {
    /// Enumerate all bonds of `cell` matched by `springs`
    pub fn new(cell: Cell, springs: Vec<PairSpring>) -> Result<Self> {
        for spring in &springs {
            if !(spring.distance.is_finite() && spring.distance > 0.0) {
                return Err(PhononError::InvalidSpring(format!(
                    "{}-{} distance {} must be positive",
                    spring.species_a, spring.species_b, spring.distance
                )));
            }
            if !spring.stiffness.is_finite() {
                return Err(PhononError::InvalidSpring(format!(
                    "{}-{} stiffness is not finite",
                    spring.species_a, spring.species_b
                )));
            }
        }

        let bonds = enumerate_bonds(&cell, &springs);
        debug!(
            "Force-constant model: {} springs, {} directed bonds",
            springs.len(),
            bonds.len()
        );

        Ok(Self { cell, bonds })
    }

    /// Number of directed bonds (each physical bond is counted from both ends)
    pub fn num_bonds(&self) -> usize {
        self.bonds.len()
    }

    /// Mass-weighted dynamical matrix at a reduced wave vector, in eV/Å²/amu
    ///
    /// `D(q)[iα, jβ] = Σ_L Φ[iα, jβ](0, L) exp(2πi q·(L + x_j - x_i)) / sqrt(m_i m_j)`
    pub fn dynamical_matrix(&self, qpoint: [f64; 3]) -> Array2<Complex64> {
        let atoms = self.cell.atoms();
        let n = 3 * atoms.len();
        let mut dm = Array2::<Complex64>::zeros((n, n));

        for bond in &self.bonds {
            let xi = atoms[bond.i].position();
            let xj = atoms[bond.j].position();
            let arg: f64 = (0..3)
                .map(|k| qpoint[k] * (bond.translation[k] + xj[k] - xi[k]))
                .sum::<f64>()
                * 2.0
                * PI;
            let phase = Complex64::new(arg.cos(), arg.sin());
            let mi = atoms[bond.i].mass();
            let mj = atoms[bond.j].mass();
            let off_site = phase / (mi * mj).sqrt();

            for a in 0..3 {
                for b in 0..3 {
                    let k = bond.block[a][b];
                    dm[(3 * bond.i + a, 3 * bond.j + b)] -= off_site * k;
                    dm[(3 * bond.i + a, 3 * bond.i + b)] += Complex64::new(k / mi, 0.0);
                }
            }
        }

        dm
    }
}

impl PhononSolver for ForceConstantModel {
    fn cell(&self) -> &Cell {
        &self.cell
    }

    fn solve(&self, qpoint: [f64; 3]) -> Result<PhononModes> {
        let eig = hermitian_eigen(&self.dynamical_matrix(qpoint))?;
        let frequencies = eig
            .values
            .iter()
            .map(|&v| v.signum() * v.abs().sqrt() * EIGENVALUE_TO_THZ)
            .collect();

        Ok(PhononModes {
            qpoint,
            frequencies,
            eigenvectors: eig.vectors,
        })
    }
}

fn enumerate_bonds(cell: &Cell, springs: &[PairSpring]) -> Vec<Bond> {
    let max_distance = springs
        .iter()
        .map(|s| s.distance + DISTANCE_TOLERANCE)
        .fold(0.0, f64::max);
    if max_distance <= DISTANCE_TOLERANCE {
        return Vec::new();
    }

    // |L_k| ≤ |b_k| d_max + 1 covers every bond shorter than d_max
    let reach: Vec<i32> = cell
        .reciprocal_lattice()
        .iter()
        .map(|b| (b.length() * max_distance).ceil() as i32 + 1)
        .collect();

    let atoms = cell.atoms();
    let mut bonds = Vec::new();
    for (i, atom_i) in atoms.iter().enumerate() {
        for (j, atom_j) in atoms.iter().enumerate() {
            let matching: Vec<&PairSpring> = springs
                .iter()
                .filter(|s| s.connects(atom_i.symbol(), atom_j.symbol()))
                .collect();
            if matching.is_empty() {
                continue;
            }

            let xi = atom_i.position();
            let xj = atom_j.position();
            for l0 in -reach[0]..=reach[0] {
                for l1 in -reach[1]..=reach[1] {
                    for l2 in -reach[2]..=reach[2] {
                        let translation = [l0 as f64, l1 as f64, l2 as f64];
                        let frac = [
                            translation[0] + xj[0] - xi[0],
                            translation[1] + xj[1] - xi[1],
                            translation[2] + xj[2] - xi[2],
                        ];
                        let d = cell.to_cartesian(frac);
                        let length = d.length();
                        if length < 1e-8 {
                            continue;
                        }

                        let stiffness: f64 = matching
                            .iter()
                            .filter(|s| (s.distance - length).abs() < DISTANCE_TOLERANCE)
                            .map(|s| s.stiffness)
                            .sum();
                        if stiffness == 0.0 {
                            continue;
                        }

                        bonds.push(Bond {
                            i,
                            j,
                            translation,
                            block: outer_block(d * (1.0 / length), stiffness),
                        });
                    }
                }
            }
        }
    }
    bonds
}

fn outer_block(n: Vector3D, k: f64) -> [[f64; 3]; 3] {
    let mut block = [[0.0; 3]; 3];
    for (a, row) in block.iter_mut().enumerate() {
        for (b, value) in row.iter_mut().enumerate() {
            *value = k * n.component(a) * n.component(b);
        }
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Atom;
    use approx::assert_relative_eq;

    fn chain_cell() -> Cell {
        // Simple cubic lattice with one atom; only the x neighbours are bonded
        // when the lattice is stretched along x.
        Cell::new(
            [[2.0, 0.0, 0.0], [0.0, 10.0, 0.0], [0.0, 0.0, 10.0]],
            vec![Atom::with_mass("X", 1.0, [0.0, 0.0, 0.0]).unwrap()],
        )
        .unwrap()
    }

    #[test]
    fn test_monatomic_chain_dispersion() {
        let k = 2.0;
        let model = ForceConstantModel::new(chain_cell(), vec![PairSpring::new("X", "X", 2.0, k)]).unwrap();
        assert_eq!(model.num_bonds(), 2);

        // ω² = 4k/m sin²(πq) for longitudinal motion along the chain
        for q in [0.1, 0.25, 0.5] {
            let modes = model.solve([q, 0.0, 0.0]).unwrap();
            let expected = (4.0 * k * (PI * q).sin().powi(2)).sqrt() * EIGENVALUE_TO_THZ;
            assert_relative_eq!(modes.frequencies[2], expected, max_relative = 1e-10);
            assert!(modes.frequencies[0].abs() < 1e-6);
            assert!(modes.frequencies[1].abs() < 1e-6);
        }
    }

    #[test]
    fn test_acoustic_sum_rule_at_gamma() {
        let cell = Cell::rock_salt(5.69, "Na", "Cl").unwrap();
        let model = ForceConstantModel::new(cell, vec![PairSpring::new("Na", "Cl", 2.845, 1.0)]).unwrap();
        // 6 nearest neighbours per atom, both atoms
        assert_eq!(model.num_bonds(), 12);

        let modes = model.solve([0.0, 0.0, 0.0]).unwrap();
        modes.validate(2).unwrap();
        for f in &modes.frequencies[..3] {
            assert!(f.abs() < 1e-5, "acoustic frequency {} at Gamma", f);
        }
        // Σ n nᵀ over the six neighbours is 2I, so optical ω² = 2k(1/m₁ + 1/m₂)
        let reduced: f64 = 1.0 / 22.990 + 1.0 / 35.45;
        let expected = (2.0 * reduced).sqrt() * EIGENVALUE_TO_THZ;
        for f in &modes.frequencies[3..] {
            assert_relative_eq!(*f, expected, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_dynamical_matrix_is_hermitian_and_periodic() {
        let cell = Cell::rock_salt(5.69, "Na", "Cl").unwrap();
        let model = ForceConstantModel::new(
            cell,
            vec![
                PairSpring::new("Na", "Cl", 2.845, 1.0),
                PairSpring::new("Na", "Na", 4.0235, 0.1),
            ],
        )
        .unwrap();
        let q = [0.13, -0.27, 0.41];
        let dm = model.dynamical_matrix(q);
        for i in 0..6 {
            for j in 0..6 {
                let diff = dm[(i, j)] - dm[(j, i)].conj();
                assert!(diff.norm() < 1e-12);
            }
        }

        let a = model.solve(q).unwrap();
        let b = model.solve([q[0] + 1.0, q[1] - 2.0, q[2]]).unwrap();
        for (fa, fb) in a.frequencies.iter().zip(b.frequencies.iter()) {
            assert_relative_eq!(fa, fb, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_invalid_spring() {
        let err = ForceConstantModel::new(chain_cell(), vec![PairSpring::new("X", "X", -1.0, 1.0)]);
        assert!(matches!(err, Err(PhononError::InvalidSpring(_))));
    }
}
