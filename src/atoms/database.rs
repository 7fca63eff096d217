/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atomic database for element properties
//!
//! Element symbols and standard atomic weights used to assign masses to
//! the atoms of a primitive cell.

/// Element symbols and standard atomic weights (amu), indexed by Z - 1
///
/// Values are based on the relative atomic masses from IUPAC 2013
const ELEMENTS: [(&str, f64); 86] = [
    ("H", 1.008),
    ("He", 4.0026),
    ("Li", 6.94),
    ("Be", 9.0122),
    ("B", 10.81),
    ("C", 12.011),
    ("N", 14.007),
    ("O", 15.999),
    ("F", 18.998),
    ("Ne", 20.180),
    ("Na", 22.990),
    ("Mg", 24.305),
    ("Al", 26.982),
    ("Si", 28.085),
    ("P", 30.974),
    ("S", 32.06),
    ("Cl", 35.45),
    ("Ar", 39.95),
    ("K", 39.098),
    ("Ca", 40.078),
    ("Sc", 44.956),
    ("Ti", 47.867),
    ("V", 50.942),
    ("Cr", 51.996),
    ("Mn", 54.938),
    ("Fe", 55.845),
    ("Co", 58.933),
    ("Ni", 58.693),
    ("Cu", 63.546),
    ("Zn", 65.38),
    ("Ga", 69.723),
    ("Ge", 72.630),
    ("As", 74.922),
    ("Se", 78.971),
    ("Br", 79.904),
    ("Kr", 83.798),
    ("Rb", 85.468),
    ("Sr", 87.62),
    ("Y", 88.906),
    ("Zr", 91.224),
    ("Nb", 92.906),
    ("Mo", 95.95),
    ("Tc", 98.0), // no stable isotopes
    ("Ru", 101.07),
    ("Rh", 102.91),
    ("Pd", 106.42),
    ("Ag", 107.87),
    ("Cd", 112.41),
    ("In", 114.82),
    ("Sn", 118.71),
    ("Sb", 121.76),
    ("Te", 127.60),
    ("I", 126.90),
    ("Xe", 131.29),
    ("Cs", 132.91),
    ("Ba", 137.33),
    ("La", 138.91),
    ("Ce", 140.12),
    ("Pr", 140.91),
    ("Nd", 144.24),
    ("Pm", 145.0),
    ("Sm", 150.36),
    ("Eu", 151.96),
    ("Gd", 157.25),
    ("Tb", 158.93),
    ("Dy", 162.50),
    ("Ho", 164.93),
    ("Er", 167.26),
    ("Tm", 168.93),
    ("Yb", 173.05),
    ("Lu", 174.97),
    ("Hf", 178.49),
    ("Ta", 180.95),
    ("W", 183.84),
    ("Re", 186.21),
    ("Os", 190.23),
    ("Ir", 192.22),
    ("Pt", 195.08),
    ("Au", 196.97),
    ("Hg", 200.59),
    ("Tl", 204.38),
    ("Pb", 207.2),
    ("Bi", 208.98),
    ("Po", 209.0),
    ("At", 210.0),
    ("Rn", 222.0),
];

/// Provides element symbols for atomic numbers
pub fn element_symbol(atomic_number: i32) -> Option<&'static str> {
    index(atomic_number).map(|i| ELEMENTS[i].0)
}

/// Returns the atomic weight in atomic mass units (amu)
pub fn atomic_weight(atomic_number: i32) -> Option<f64> {
    index(atomic_number).map(|i| ELEMENTS[i].1)
}

/// Returns the atomic number for an element symbol
///
/// The lookup is case-insensitive, so "Cl", "CL" and "cl" all resolve to 17.
/// Trailing charge or label suffixes ("Pb0", "Cl1-") are not stripped.
pub fn atomic_number_from_symbol(symbol: &str) -> Option<i32> {
    let symbol = symbol.trim();
    ELEMENTS
        .iter()
        .position(|(s, _)| s.eq_ignore_ascii_case(symbol))
        .map(|i| i as i32 + 1)
}

/// Atomic weight looked up by element symbol
pub fn atomic_weight_by_symbol(symbol: &str) -> Option<f64> {
    atomic_number_from_symbol(symbol).and_then(atomic_weight)
}

fn index(atomic_number: i32) -> Option<usize> {
    if atomic_number >= 1 && atomic_number as usize <= ELEMENTS.len() {
        Some(atomic_number as usize - 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(element_symbol(11), Some("Na"));
        assert_eq!(element_symbol(17), Some("Cl"));
        assert_eq!(element_symbol(82), Some("Pb"));
        assert_eq!(element_symbol(0), None);
        assert_eq!(element_symbol(119), None);
    }

    #[test]
    fn test_symbol_round_trip_is_case_insensitive() {
        assert_eq!(atomic_number_from_symbol("cl"), Some(17));
        assert_eq!(atomic_number_from_symbol("TE"), Some(52));
        assert_eq!(atomic_number_from_symbol("Xx"), None);
    }

    #[test]
    fn test_weights() {
        assert_eq!(atomic_weight_by_symbol("Na"), Some(22.990));
        assert_eq!(atomic_weight_by_symbol("Cl"), Some(35.45));
        assert!(atomic_weight(0).is_none());
    }
}
