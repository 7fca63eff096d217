/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Crystal structure data
//!
//! Primitive cells, atoms with masses and fractional positions, and the
//! element database used to fill in standard atomic weights.

pub mod atom;
pub mod cell;
pub mod database;
pub mod errors;
pub mod vector;

pub use atom::Atom;
pub use cell::{transform_row, Cell, FCC_PRIMITIVE_MATRIX};
pub use errors::{AtomError, Result};
pub use vector::Vector3D;
