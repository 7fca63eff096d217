/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Anisotropic mean-square displacements and Debye-Waller factors
//!
//! For atom k the thermal displacement matrix is
//!
//! B_k = (1/N_q) Σ_q Σ_ν ħ/(m_k ω_qν) (n_qν + ½) Re(e_k,qν e*_k,qν)
//!
//! summed over a uniform mesh, skipping modes at or below `freq_min`.

use super::errors::{PhononError, Result};
use super::mesh::MeshPhonons;
use crate::atoms::{Cell, Vector3D};
use crate::utils::mode_mean_square_amplitude;
use log::debug;

/// Thermal displacement matrices of every atom of a cell, in Å²
#[derive(Debug, Clone)]
pub struct ThermalDisplacements {
    temperature: f64,
    matrices: Vec<[[f64; 3]; 3]>,
}

impl ThermalDisplacements {
    /// Accumulate displacement matrices over mesh phonons
    pub fn from_mesh(
        cell: &Cell,
        mesh: &MeshPhonons,
        temperature: f64,
        freq_min: f64,
    ) -> Result<Self> {
        if !(temperature.is_finite() && temperature >= 0.0) {
            return Err(PhononError::InvalidParameter(format!(
                "temperature {} K must be finite and non-negative",
                temperature
            )));
        }
        if mesh.modes.is_empty() {
            return Err(PhononError::InvalidMesh("mesh has no q-points".to_string()));
        }

        let atoms = cell.atoms();
        let mut matrices = vec![[[0.0; 3]; 3]; atoms.len()];
        let mut skipped = 0usize;

        for modes in &mesh.modes {
            modes.validate(atoms.len())?;
            for (branch, &freq) in modes.frequencies.iter().enumerate() {
                if freq <= freq_min {
                    skipped += 1;
                    continue;
                }
                for (k, atom) in atoms.iter().enumerate() {
                    let amplitude = mode_mean_square_amplitude(freq, atom.mass(), temperature);
                    let e = modes.polarization(k, branch);
                    for a in 0..3 {
                        for b in 0..3 {
                            matrices[k][a][b] += amplitude * (e[a] * e[b].conj()).re;
                        }
                    }
                }
            }
        }

        let norm = 1.0 / mesh.modes.len() as f64;
        for m in &mut matrices {
            for row in m.iter_mut() {
                for value in row.iter_mut() {
                    *value *= norm;
                }
            }
        }
        debug!(
            "Thermal displacements at {} K: {} modes below freq_min skipped",
            temperature, skipped
        );

        Ok(Self {
            temperature,
            matrices,
        })
    }

    /// Temperature in Kelvin
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Displacement matrix of atom `atom` in Å²
    pub fn matrix(&self, atom: usize) -> &[[f64; 3]; 3] {
        &self.matrices[atom]
    }

    /// Number of atoms
    pub fn num_atoms(&self) -> usize {
        self.matrices.len()
    }

    /// Isotropic mean-square displacement U_iso = tr(B)/3 in Å²
    pub fn isotropic(&self, atom: usize) -> f64 {
        let m = &self.matrices[atom];
        (m[0][0] + m[1][1] + m[2][2]) / 3.0
    }

    /// Debye-Waller factor exp(-½ Qᵀ B Q) for Q in Å⁻¹ with 2π included
    pub fn debye_waller_factor(&self, atom: usize, q: Vector3D) -> f64 {
        let m = &self.matrices[atom];
        let mut quad = 0.0;
        for a in 0..3 {
            for b in 0..3 {
                quad += q.component(a) * m[a][b] * q.component(b);
            }
        }
        (-0.5 * quad).exp()
    }
}
