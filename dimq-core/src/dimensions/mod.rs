//! Named dimensions grouped by field.
//!
//! Every name here is a type alias over [`Dim`](crate::Dim), built from the base dimensions with
//! [`MulDim`](crate::MulDim) and [`DivDim`](crate::DivDim). Two names that describe the same exponents (for example
//! [`mechanics::Energy`] and a hand-written `dim!(mass = 1, length = 2, time = -2)`) are the same type.
//!
//! ## Modules
//!
//! - [`base`]: the seven SI base dimensions.
//! - [`mechanics`]: area, velocity, force, energy, power, …
//! - [`electromagnetism`]: charge, voltage, resistance, capacitance.
//! - [`thermodynamics`]: entropy, heat capacity, molar quantities.

pub mod base;
pub mod electromagnetism;
pub mod mechanics;
pub mod thermodynamics;
