/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! End-to-end structure-factor runs driven by [`DsfConfig`]

use super::config::{DsfConfig, ScatteringPath};
use super::dynamic_structure_factor::{DynamicStructureFactor, StructureFactorResult};
use super::errors::Result;
use crate::phonon::{run_mesh, PhononSolver};
use log::info;
use ndarray::Array2;
use serde::Serialize;

/// Intensities along one scattering path
#[derive(Debug, Clone)]
pub struct PathResult {
    pub path: ScatteringPath,
    pub result: StructureFactorResult,
}

/// Serializable summary of a path result
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub g_point: [f64; 3],
    pub direction: [f64; 3],
    pub temperature: f64,
    pub qpoints: Vec<[f64; 3]>,
    pub frequencies: Vec<Vec<f64>>,
    pub intensities: Vec<Vec<f64>>,
}

impl From<&PathResult> for PathReport {
    fn from(r: &PathResult) -> Self {
        let rows = |a: &Array2<f64>| -> Vec<Vec<f64>> {
            a.rows().into_iter().map(|row| row.to_vec()).collect()
        };
        Self {
            g_point: r.path.g_point,
            direction: r.path.direction,
            temperature: r.result.temperature,
            qpoints: r.result.qpoints.clone(),
            frequencies: rows(&r.result.frequencies),
            intensities: rows(&r.result.intensities),
        }
    }
}

/// Run the mesh once, then compute S(Q, ν) along every configured path
pub fn run_config<S: PhononSolver + ?Sized>(
    solver: &S,
    config: &DsfConfig,
) -> Result<Vec<PathResult>> {
    config.validate()?;

    let species = solver.cell().symbols();
    let source = config.amplitude.to_source(&species)?;
    let mesh = run_mesh(solver, config.mesh)?;

    let paths = config.scattering_paths()?;
    info!("Computing {} scattering paths", paths.len());

    paths
        .into_iter()
        .map(|path| {
            let dsf = DynamicStructureFactor::new(
                solver,
                &mesh,
                path.qpoints.clone(),
                config.temperature,
                source.clone(),
                config.freq_min,
            )?;
            let result = dsf.run()?;
            Ok(PathResult { path, result })
        })
        .collect()
}
