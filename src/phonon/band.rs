/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Phonon band structure along straight paths in reciprocal space

use super::errors::{PhononError, Result};
use super::modes::{PhononModes, PhononSolver};
use log::info;
use rayon::prelude::*;

/// Evenly spaced reduced wave vectors from `start` to `end`
///
/// With `include_start = false` the first point is dropped, which is how
/// scattering paths leaving a Bragg point avoid the Gamma singularity.
pub fn band_path(
    start: [f64; 3],
    end: [f64; 3],
    n_points: usize,
    include_start: bool,
) -> Result<Vec<[f64; 3]>> {
    if n_points < 2 {
        return Err(PhononError::InvalidPath(format!(
            "a path needs at least 2 points, got {}",
            n_points
        )));
    }

    let first = if include_start { 0 } else { 1 };
    Ok((first..n_points)
        .map(|i| {
            let x = i as f64 / (n_points - 1) as f64;
            [
                start[0] + (end[0] - start[0]) * x,
                start[1] + (end[1] - start[1]) * x,
                start[2] + (end[2] - start[2]) * x,
            ]
        })
        .collect())
}

/// Modes along a set of paths with cumulative Cartesian distances
#[derive(Debug, Clone)]
pub struct BandStructure {
    /// Modes per path, per point
    pub paths: Vec<Vec<PhononModes>>,
    /// Cumulative distance (Å⁻¹, without 2π) per path, per point
    pub distances: Vec<Vec<f64>>,
}

impl BandStructure {
    /// Frequencies of one path as rows of branches
    pub fn frequencies(&self, path: usize) -> Vec<Vec<f64>> {
        self.paths
            .get(path)
            .map(|p| p.iter().map(|m| m.frequencies.clone()).collect())
            .unwrap_or_default()
    }
}

/// Solve the phonon problem along each path
///
/// Distances continue from the end of the previous path.
pub fn run_band_structure<S: PhononSolver + ?Sized>(
    solver: &S,
    paths: &[Vec<[f64; 3]>],
) -> Result<BandStructure> {
    let cell = solver.cell();
    let num_atoms = cell.num_atoms();
    info!("Running band structure along {} path(s)", paths.len());

    let mut all_modes = Vec::with_capacity(paths.len());
    let mut all_distances = Vec::with_capacity(paths.len());
    let mut offset = 0.0;

    for path in paths {
        let modes = path
            .par_iter()
            .map(|&q| -> Result<PhononModes> {
                let m = solver.solve(q)?;
                m.validate(num_atoms)?;
                Ok(m)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut distances = Vec::with_capacity(path.len());
        let mut previous: Option<[f64; 3]> = None;
        for &q in path {
            if let Some(p) = previous {
                let dq = [q[0] - p[0], q[1] - p[1], q[2] - p[2]];
                offset += cell.reciprocal_to_cartesian(dq).length();
            }
            distances.push(offset);
            previous = Some(q);
        }

        all_modes.push(modes);
        all_distances.push(distances);
    }

    Ok(BandStructure {
        paths: all_modes,
        distances: all_distances,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_path_with_and_without_start() {
        let full = band_path([0.0; 3], [0.5, 0.5, 0.5], 11, true).unwrap();
        assert_eq!(full.len(), 11);
        assert_eq!(full[0], [0.0; 3]);
        assert_relative_eq!(full[10][2], 0.5, epsilon = 1e-15);

        let open = band_path([0.0; 3], [0.5, 0.5, 0.5], 11, false).unwrap();
        assert_eq!(open.len(), 10);
        assert_relative_eq!(open[0][0], 0.05, epsilon = 1e-15);
        assert_eq!(open[9], full[10]);
    }

    #[test]
    fn test_path_too_short() {
        assert!(band_path([0.0; 3], [1.0; 3], 1, true).is_err());
    }
}
