/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atom in a primitive cell

use super::database;
use super::errors::{AtomError, Result};
use std::fmt;

/// An atom of the primitive cell: species label, mass and fractional position
///
/// The species label is the key used to look up form factors and scattering
/// lengths, so it may carry a suffix that is not an element symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    symbol: String,
    /// Mass in atomic mass units (amu)
    mass: f64,
    /// Position in fractional coordinates of the lattice vectors
    position: [f64; 3],
}

impl Atom {
    /// Create an atom whose mass is the standard atomic weight of `symbol`
    pub fn new(symbol: &str, position: [f64; 3]) -> Result<Self> {
        let mass = database::atomic_weight_by_symbol(symbol)
            .ok_or_else(|| AtomError::UnknownElement(symbol.to_string()))?;
        Self::with_mass(symbol, mass, position)
    }

    /// Create an atom with an explicit mass in amu
    pub fn with_mass(symbol: &str, mass: f64, position: [f64; 3]) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(AtomError::InvalidMass {
                symbol: symbol.to_string(),
                mass,
            });
        }

        Ok(Self {
            symbol: symbol.to_string(),
            mass,
            position,
        })
    }

    /// Get the species label
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the mass in amu
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Get the fractional position
    pub fn position(&self) -> [f64; 3] {
        self.position
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.4} amu) at ({:.6}, {:.6}, {:.6})",
            self.symbol, self.mass, self.position[0], self.position[1], self.position[2]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_creation() {
        let atom = Atom::new("Na", [0.0, 0.0, 0.0]).unwrap();
        assert_eq!(atom.symbol(), "Na");
        assert_eq!(atom.mass(), 22.990);
        assert_eq!(atom.position(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_explicit_mass() {
        let atom = Atom::with_mass("Pb0", 207.2, [0.5, 0.5, 0.5]).unwrap();
        assert_eq!(atom.symbol(), "Pb0");
        assert_eq!(atom.mass(), 207.2);
    }

    #[test]
    fn test_invalid_atom() {
        assert!(matches!(
            Atom::new("Xx", [0.0; 3]),
            Err(AtomError::UnknownElement(_))
        ));
        assert!(Atom::with_mass("Na", 0.0, [0.0; 3]).is_err());
        assert!(Atom::with_mass("Na", f64::NAN, [0.0; 3]).is_err());
    }
}
