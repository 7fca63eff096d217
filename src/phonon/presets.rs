/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Ready-made force-constant models

use super::errors::Result;
use super::force_constants::{ForceConstantModel, PairSpring};
use crate::atoms::Cell;

/// Lattice constant of rock-salt NaCl in Å
pub const NACL_LATTICE_CONSTANT: f64 = 5.69;

/// Rock-salt NaCl with nearest-neighbour Na-Cl springs and
/// next-nearest-neighbour Na-Na and Cl-Cl springs
///
/// Stiffnesses (eV/Å²) are chosen to give an optical band near 5 THz and
/// stable transverse acoustic modes.
pub fn nacl_model() -> Result<ForceConstantModel> {
    rock_salt_model(NACL_LATTICE_CONSTANT, "Na", "Cl", 1.0, 0.08, 0.12)
}

/// Rock-salt model with first- and second-shell central springs
pub fn rock_salt_model(
    a: f64,
    cation: &str,
    anion: &str,
    k_nearest: f64,
    k_cation: f64,
    k_anion: f64,
) -> Result<ForceConstantModel> {
    let cell = Cell::rock_salt(a, cation, anion)?;
    let nearest = a / 2.0;
    let second = a / 2.0_f64.sqrt();
    ForceConstantModel::new(
        cell,
        vec![
            PairSpring::new(cation, anion, nearest, k_nearest),
            PairSpring::new(cation, cation, second, k_cation),
            PairSpring::new(anion, anion, second, k_anion),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonon::PhononSolver;

    #[test]
    fn test_nacl_bonds_and_stability() {
        let model = nacl_model().unwrap();
        // 6 Na-Cl bonds from each atom, 12 like-atom bonds from each atom
        assert_eq!(model.num_bonds(), 2 * 6 + 2 * 12);

        for q in [[0.1, 0.0, 0.0], [0.25, 0.25, 0.25], [0.5, 0.5, 0.0], [0.3, -0.2, 0.1]] {
            let modes = model.solve(q).unwrap();
            assert!(modes.frequencies.iter().all(|&f| f > 0.0), "unstable at {:?}", q);
        }
    }
}
