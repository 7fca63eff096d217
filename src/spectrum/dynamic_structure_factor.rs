/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Phonon-resolved dynamic structure factor
//!
//! For a scattering vector Q = G + q and branch ν with frequency ω above
//! `freq_min`, the one-phonon Stokes intensity is
//!
//! S(Q, ν) = |F(Q, ν)|² (n(ω) + 1)
//!
//! F(Q, ν) = ω^(-½) Σ_k f_k(|Q|) / sqrt(2 m_k) · W_k(Q) · (Q · e_k,ν) · exp(-2πi G·x_k)
//!
//! where f_k is the form factor or scattering length of atom k, W_k the
//! Debye-Waller factor from the thermal displacement matrices and n the
//! Bose-Einstein occupation. Q is Cartesian in Å⁻¹ with 2π included, ω in
//! THz and m in amu, so intensities are in arbitrary but consistent units.

use super::degeneracy::{compare_by_frequency, degenerate_groups, sum_over_groups};
use super::errors::{Result, SpectrumError};
use crate::atoms::Vector3D;
use crate::phonon::{MeshPhonons, PhononModes, PhononSolver, ThermalDisplacements};
use crate::scattering::{AmplitudeSource, FormFactorFn};
use crate::utils::bose_einstein_occupation;
use log::{debug, info};
use ndarray::Array2;
use num_complex::Complex64;
use rayon::prelude::*;
use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::Arc;

/// Default lower frequency cutoff (THz)
pub const DEFAULT_FREQ_MIN: f64 = 1e-3;

/// Split Q into the nearest reciprocal lattice point G and the reduced q = Q - G
///
/// Half-integer components round to even, so the zone-boundary point
/// (1.5, 4.5, 4.5) maps to G = (2, 4, 4).
pub fn split_scattering_vector(big_q: [f64; 3]) -> ([f64; 3], [f64; 3]) {
    let g = big_q.map(f64::round_ties_even);
    let q = [big_q[0] - g[0], big_q[1] - g[1], big_q[2] - g[2]];
    (g, q)
}

/// Intensities per q-point and branch, with the frequencies they belong to
#[derive(Debug, Clone)]
pub struct StructureFactorResult {
    /// Scattering vectors Q in reduced primitive coordinates
    pub qpoints: Vec<[f64; 3]>,
    /// Reduced phonon wave vectors q = Q - G
    pub reduced_qpoints: Vec<[f64; 3]>,
    /// |Q| in Å⁻¹ with 2π included
    pub q_magnitudes: Vec<f64>,
    /// Frequencies in THz, (n_q × n_branches)
    pub frequencies: Array2<f64>,
    /// S(Q, ν), (n_q × n_branches), non-negative
    pub intensities: Array2<f64>,
    /// Temperature in Kelvin
    pub temperature: f64,
}

impl StructureFactorResult {
    /// Number of q-points
    pub fn num_qpoints(&self) -> usize {
        self.intensities.nrows()
    }

    /// Number of branches
    pub fn num_branches(&self) -> usize {
        self.intensities.ncols()
    }

    /// Degenerate groups at every q-point
    pub fn degenerate_groups(&self, tolerance: f64) -> Vec<Vec<Vec<usize>>> {
        self.frequencies
            .rows()
            .into_iter()
            .map(|row| degenerate_groups(&row.to_vec(), tolerance))
            .collect()
    }

    /// Intensities summed within degenerate groups, one list per q-point
    pub fn grouped_intensities(&self, tolerance: f64) -> Result<Vec<Vec<f64>>> {
        self.degenerate_groups(tolerance)
            .iter()
            .zip(self.intensities.rows())
            .map(|(groups, row)| sum_over_groups(&row.to_vec(), groups))
            .collect()
    }

    /// Check intensities against a reference table, summing degenerate branches
    ///
    /// Branches are grouped by the computed frequencies with `freq_tolerance`;
    /// group sums must agree within `atol`.
    pub fn compare_with_reference(
        &self,
        reference: &Array2<f64>,
        freq_tolerance: f64,
        atol: f64,
    ) -> Result<()> {
        compare_by_frequency(
            &self.frequencies,
            &self.intensities,
            reference,
            freq_tolerance,
            atol,
        )
    }
}

/// Dynamic structure factor along a list of scattering vectors
///
/// All inputs are validated on construction; [`run`](Self::run) then either
/// returns the complete table or an error, never a partial result.
pub struct DynamicStructureFactor<'a, S: PhononSolver + ?Sized> {
    solver: &'a S,
    qpoints: Vec<[f64; 3]>,
    temperature: f64,
    source: AmplitudeSource,
    freq_min: f64,
    displacements: ThermalDisplacements,
}

impl<'a, S: PhononSolver + ?Sized> DynamicStructureFactor<'a, S> {
    /// Prepare a structure-factor calculation
    ///
    /// # Arguments
    ///
    /// * `solver` - Phonon solver for the primitive cell
    /// * `mesh` - Mesh phonons used for the Debye-Waller factor
    /// * `qpoints` - Scattering vectors Q in reduced primitive coordinates
    /// * `temperature` - Temperature in Kelvin
    /// * `source` - Form factors or scattering lengths
    /// * `freq_min` - Branches at or below this frequency (THz) give no intensity
    pub fn new(
        solver: &'a S,
        mesh: &MeshPhonons,
        qpoints: Vec<[f64; 3]>,
        temperature: f64,
        source: AmplitudeSource,
        freq_min: f64,
    ) -> Result<Self> {
        if !(temperature.is_finite() && temperature >= 0.0) {
            return Err(SpectrumError::InvalidTemperature(temperature));
        }
        if !(freq_min.is_finite() && freq_min >= 0.0) {
            return Err(SpectrumError::InvalidParameter(format!(
                "freq_min {} must be finite and non-negative",
                freq_min
            )));
        }
        if let Some(q) = qpoints.iter().find(|q| q.iter().any(|x| !x.is_finite())) {
            return Err(SpectrumError::InvalidParameter(format!(
                "q-point {:?} is not finite",
                q
            )));
        }

        let cell = solver.cell();
        source.check_species(&cell.symbols())?;

        let displacements = ThermalDisplacements::from_mesh(cell, mesh, temperature, freq_min)?;
        if displacements.num_atoms() != cell.num_atoms() {
            return Err(SpectrumError::ShapeMismatch(format!(
                "thermal displacements for {} atoms, cell has {}",
                displacements.num_atoms(),
                cell.num_atoms()
            )));
        }

        Ok(Self {
            solver,
            qpoints,
            temperature,
            source,
            freq_min,
            displacements,
        })
    }

    /// Prepare a calculation from optional form-factor / scattering-length arguments
    ///
    /// Exactly one must be given; otherwise `AmbiguousAmplitudeSource` is
    /// returned before the mesh or solver is touched.
    pub fn with_options(
        solver: &'a S,
        mesh: &MeshPhonons,
        qpoints: Vec<[f64; 3]>,
        temperature: f64,
        form_factor: Option<Arc<FormFactorFn>>,
        scattering_lengths: Option<HashMap<String, f64>>,
        freq_min: f64,
    ) -> Result<Self> {
        let source = AmplitudeSource::from_options(form_factor, scattering_lengths)?;
        Self::new(solver, mesh, qpoints, temperature, source, freq_min)
    }

    /// Scattering vectors
    pub fn qpoints(&self) -> &[[f64; 3]] {
        &self.qpoints
    }

    /// Thermal displacement matrices used for the Debye-Waller factor
    pub fn thermal_displacements(&self) -> &ThermalDisplacements {
        &self.displacements
    }

    /// Compute S(Q, ν) at every scattering vector
    pub fn run(&self) -> Result<StructureFactorResult> {
        let n_branches = self.solver.cell().num_branches();
        info!(
            "Dynamic structure factor: {} Q-points, {} branches, T = {} K, {} amplitudes",
            self.qpoints.len(),
            n_branches,
            self.temperature,
            if self.source.is_q_dependent() {
                "form-factor"
            } else {
                "scattering-length"
            }
        );

        let rows = self
            .qpoints
            .par_iter()
            .map(|&big_q| self.compute_at(big_q))
            .collect::<Result<Vec<_>>>()?;

        let n_q = rows.len();
        let mut reduced_qpoints = Vec::with_capacity(n_q);
        let mut q_magnitudes = Vec::with_capacity(n_q);
        let mut frequencies = Array2::<f64>::zeros((n_q, n_branches));
        let mut intensities = Array2::<f64>::zeros((n_q, n_branches));

        for (j, point) in rows.into_iter().enumerate() {
            reduced_qpoints.push(point.modes.qpoint);
            q_magnitudes.push(point.q_magnitude);
            for (b, (&f, s)) in point
                .modes
                .frequencies
                .iter()
                .zip(point.intensities)
                .enumerate()
            {
                frequencies[(j, b)] = f;
                intensities[(j, b)] = s;
            }
        }

        Ok(StructureFactorResult {
            qpoints: self.qpoints.clone(),
            reduced_qpoints,
            q_magnitudes,
            frequencies,
            intensities,
            temperature: self.temperature,
        })
    }

    /// Modes and per-branch intensities at one scattering vector
    pub fn compute_at(&self, big_q: [f64; 3]) -> Result<PointIntensities> {
        let cell = self.solver.cell();
        let atoms = cell.atoms();
        let n_branches = cell.num_branches();

        let (g, q) = split_scattering_vector(big_q);
        let q_cart = cell.reciprocal_to_cartesian(big_q) * (2.0 * PI);
        let q_norm = q_cart.length();

        let modes = self.solver.solve(q)?;
        if modes.frequencies.len() != n_branches || modes.eigenvectors.dim() != (n_branches, n_branches)
        {
            return Err(SpectrumError::ShapeMismatch(format!(
                "solver returned {} branches with {:?} eigenvectors at q = {:?}, expected {}",
                modes.frequencies.len(),
                modes.eigenvectors.dim(),
                q,
                n_branches
            )));
        }

        // Per-atom factors that do not depend on the branch
        let mut weights = Vec::with_capacity(atoms.len());
        for (k, atom) in atoms.iter().enumerate() {
            let amplitude = self.source.amplitude(atom.symbol(), q_norm)?;
            let dw = self.displacements.debye_waller_factor(k, q_cart);
            let x = atom.position();
            let arg = -2.0 * PI * (g[0] * x[0] + g[1] * x[1] + g[2] * x[2]);
            let phase = Complex64::new(arg.cos(), arg.sin());
            weights.push(phase * (amplitude / (2.0 * atom.mass()).sqrt() * dw));
        }

        let intensities = (0..n_branches)
            .map(|branch| self.branch_intensity(&modes, branch, q_cart, &weights))
            .collect();

        debug!("S(Q) at Q = {:?} (q = {:?}, |Q| = {:.4})", big_q, q, q_norm);

        Ok(PointIntensities {
            modes,
            q_magnitude: q_norm,
            intensities,
        })
    }

    fn branch_intensity(
        &self,
        modes: &PhononModes,
        branch: usize,
        q_cart: Vector3D,
        weights: &[Complex64],
    ) -> f64 {
        let freq = modes.frequencies[branch];
        if freq <= self.freq_min {
            return 0.0;
        }

        let mut f = Complex64::new(0.0, 0.0);
        for (k, weight) in weights.iter().enumerate() {
            let e = modes.polarization(k, branch);
            let projection = e[0] * q_cart.x + e[1] * q_cart.y + e[2] * q_cart.z;
            f += projection * weight;
        }

        let n = bose_einstein_occupation(freq, self.temperature);
        f.norm_sqr() / freq * (n + 1.0)
    }
}

/// Modes and intensities at a single scattering vector
#[derive(Debug, Clone)]
pub struct PointIntensities {
    /// Modes at the reduced q
    pub modes: PhononModes,
    /// |Q| in Å⁻¹ with 2π included
    pub q_magnitude: f64,
    /// S(Q, ν) per branch
    pub intensities: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_scattering_vector() {
        let (g, q) = split_scattering_vector([1.05, 4.05, 4.05]);
        assert_eq!(g, [1.0, 4.0, 4.0]);
        assert!((q[0] - 0.05).abs() < 1e-12);

        // Ties round to even
        let (g, q) = split_scattering_vector([1.5, 4.5, 4.5]);
        assert_eq!(g, [2.0, 4.0, 4.0]);
        assert_eq!(q, [-0.5, 0.5, 0.5]);
    }
}
