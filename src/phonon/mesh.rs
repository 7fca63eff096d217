/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Uniform sampling of the Brillouin zone

use super::errors::{PhononError, Result};
use super::modes::{PhononModes, PhononSolver};
use log::{debug, info};
use rayon::prelude::*;

/// Phonon modes on a Gamma-centred uniform mesh without symmetry reduction
#[derive(Debug, Clone)]
pub struct MeshPhonons {
    /// Number of divisions along each reciprocal axis
    pub mesh: [usize; 3],
    /// Modes at every mesh point, equally weighted
    pub modes: Vec<PhononModes>,
}

impl MeshPhonons {
    /// Number of q-points
    pub fn num_qpoints(&self) -> usize {
        self.modes.len()
    }
}

/// Reduced coordinates of a Gamma-centred mesh, folded into (-½, ½]
pub fn mesh_qpoints(mesh: [usize; 3]) -> Result<Vec<[f64; 3]>> {
    if mesh.contains(&0) {
        return Err(PhononError::InvalidMesh(format!(
            "mesh {:?} has a zero dimension",
            mesh
        )));
    }

    let fold = |i: usize, n: usize| {
        let x = i as f64 / n as f64;
        if x > 0.5 {
            x - 1.0
        } else {
            x
        }
    };

    let mut points = Vec::with_capacity(mesh.iter().product());
    for k in 0..mesh[2] {
        for j in 0..mesh[1] {
            for i in 0..mesh[0] {
                points.push([fold(i, mesh[0]), fold(j, mesh[1]), fold(k, mesh[2])]);
            }
        }
    }
    Ok(points)
}

/// Solve the phonon problem on every point of a uniform mesh
pub fn run_mesh<S: PhononSolver + ?Sized>(solver: &S, mesh: [usize; 3]) -> Result<MeshPhonons> {
    let points = mesh_qpoints(mesh)?;
    info!("Running phonons on a {:?} mesh ({} q-points)", mesh, points.len());

    let num_atoms = solver.cell().num_atoms();
    let modes = points
        .par_iter()
        .map(|&q| -> Result<PhononModes> {
            let m = solver.solve(q)?;
            m.validate(num_atoms)?;
            Ok(m)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Mesh sampling finished");
    Ok(MeshPhonons { mesh, modes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_points() {
        let points = mesh_qpoints([5, 5, 5]).unwrap();
        assert_eq!(points.len(), 125);
        assert_eq!(points[0], [0.0, 0.0, 0.0]);
        assert!(points
            .iter()
            .all(|q| q.iter().all(|&x| x > -0.5 && x <= 0.5)));

        let even = mesh_qpoints([2, 1, 1]).unwrap();
        assert_eq!(even, vec![[0.0, 0.0, 0.0], [0.5, 0.0, 0.0]]);
    }

    #[test]
    fn test_zero_mesh_rejected() {
        assert!(matches!(
            mesh_qpoints([4, 0, 4]),
            Err(PhononError::InvalidMesh(_))
        ));
    }
}
