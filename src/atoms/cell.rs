/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Primitive cell: lattice vectors, reciprocal lattice and atoms

use super::atom::Atom;
use super::errors::{AtomError, Result};
use super::vector::Vector3D;

/// Transformation from conventional cubic to FCC primitive reduced coordinates
///
/// A reciprocal-space point `v` given in cubic coordinates maps to `v · P`
/// in the primitive basis.
pub const FCC_PRIMITIVE_MATRIX: [[f64; 3]; 3] = [[0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0]];

/// Apply a row-vector transformation `v · m`
pub fn transform_row(v: [f64; 3], m: &[[f64; 3]; 3]) -> [f64; 3] {
    let mut out = [0.0; 3];
    for (j, o) in out.iter_mut().enumerate() {
        *o = (0..3).map(|i| v[i] * m[i][j]).sum();
    }
    out
}

/// Primitive cell of a crystal
///
/// Lattice vectors are stored as rows in Å. Reciprocal vectors are stored
/// without the 2π factor, so that `a_i · b_j = δ_ij`.
#[derive(Debug, Clone)]
pub struct Cell {
    lattice: [Vector3D; 3],
    reciprocal: [Vector3D; 3],
    atoms: Vec<Atom>,
}

impl Cell {
    /// Create a cell from row lattice vectors (Å) and atoms
    pub fn new(lattice: [[f64; 3]; 3], atoms: Vec<Atom>) -> Result<Self> {
        if atoms.is_empty() {
            return Err(AtomError::InvalidStructure(
                "a cell needs at least one atom".to_string(),
            ));
        }

        let lattice = lattice.map(Vector3D::from_array);
        let volume = lattice[0].dot(&lattice[1].cross(&lattice[2]));
        if !volume.is_finite() || volume.abs() < 1e-10 {
            return Err(AtomError::InvalidLattice(format!(
                "lattice vectors are degenerate (volume {:.3e})",
                volume
            )));
        }

        let reciprocal = [
            lattice[1].cross(&lattice[2]) * (1.0 / volume),
            lattice[2].cross(&lattice[0]) * (1.0 / volume),
            lattice[0].cross(&lattice[1]) * (1.0 / volume),
        ];

        Ok(Self {
            lattice,
            reciprocal,
            atoms,
        })
    }

    /// Rock-salt primitive cell with lattice constant `a` (Å)
    ///
    /// The cation sits at the origin and the anion at (½, ½, ½).
    pub fn rock_salt(a: f64, cation: &str, anion: &str) -> Result<Self> {
        let lattice = FCC_PRIMITIVE_MATRIX.map(|row| row.map(|x| x * a));
        let atoms = vec![
            Atom::new(cation, [0.0, 0.0, 0.0])?,
            Atom::new(anion, [0.5, 0.5, 0.5])?,
        ];
        Self::new(lattice, atoms)
    }

    /// Lattice vectors (rows)
    pub fn lattice(&self) -> &[Vector3D; 3] {
        &self.lattice
    }

    /// Reciprocal lattice vectors without 2π
    pub fn reciprocal_lattice(&self) -> &[Vector3D; 3] {
        &self.reciprocal
    }

    /// Cell volume in Å³
    pub fn volume(&self) -> f64 {
        self.lattice[0]
            .dot(&self.lattice[1].cross(&self.lattice[2]))
            .abs()
    }

    /// Atoms of the cell
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Number of atoms
    pub fn num_atoms(&self) -> usize {
        self.atoms.len()
    }

    /// Number of phonon branches (3 per atom)
    pub fn num_branches(&self) -> usize {
        3 * self.atoms.len()
    }

    /// Species labels in atom order
    pub fn symbols(&self) -> Vec<&str> {
        self.atoms.iter().map(Atom::symbol).collect()
    }

    /// Cartesian position (Å) of a fractional coordinate
    pub fn to_cartesian(&self, fractional: [f64; 3]) -> Vector3D {
        self.lattice[0] * fractional[0]
            + self.lattice[1] * fractional[1]
            + self.lattice[2] * fractional[2]
    }

    /// Cartesian wave vector (Å⁻¹, without 2π) of a reduced reciprocal coordinate
    pub fn reciprocal_to_cartesian(&self, reduced: [f64; 3]) -> Vector3D {
        self.reciprocal[0] * reduced[0]
            + self.reciprocal[1] * reduced[1]
            + self.reciprocal[2] * reduced[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reciprocal_is_dual_basis() {
        let cell = Cell::rock_salt(5.69, "Na", "Cl").unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(
                    cell.lattice()[i].dot(&cell.reciprocal_lattice()[j]),
                    expected,
                    epsilon = 1e-12
                );
            }
        }
        assert_relative_eq!(cell.volume(), 5.69_f64.powi(3) / 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rock_salt_geometry() {
        let cell = Cell::rock_salt(5.69, "Na", "Cl").unwrap();
        assert_eq!(cell.num_atoms(), 2);
        assert_eq!(cell.num_branches(), 6);
        assert_eq!(cell.symbols(), vec!["Na", "Cl"]);

        // Anion at (½, ½, ½) of the primitive cell is (a/2, a/2, a/2) Cartesian
        let cl = cell.to_cartesian(cell.atoms()[1].position());
        assert_relative_eq!(cl.x, 2.845, epsilon = 1e-12);
        assert_relative_eq!(cl.y, 2.845, epsilon = 1e-12);
        assert_relative_eq!(cl.z, 2.845, epsilon = 1e-12);
    }

    #[test]
    fn test_cubic_to_primitive() {
        let g = transform_row([7.0, 1.0, 1.0], &FCC_PRIMITIVE_MATRIX);
        assert_eq!(g, [1.0, 4.0, 4.0]);

        // The cubic (7,1,1) point has Cartesian length sqrt(51)/a without 2π
        let cell = Cell::rock_salt(5.69, "Na", "Cl").unwrap();
        let g_cart = cell.reciprocal_to_cartesian(g);
        assert_relative_eq!(g_cart.length(), 51.0_f64.sqrt() / 5.69, epsilon = 1e-10);
    }

    #[test]
    fn test_invalid_cells() {
        assert!(Cell::new([[1.0, 0.0, 0.0]; 3], vec![Atom::new("Na", [0.0; 3]).unwrap()]).is_err());
        assert!(Cell::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]], vec![]).is_err());
    }
}
