//! The seven SI base dimensions.
//!
//! Each has exactly one exponent equal to one. [`Dimensionless`](crate::Dimensionless) lives at the crate root.
//!
//! ```rust
//! use dimq_core::Quantity;
//! use dimq_core::base::Length;
//!
//! let a = Quantity::<Length>::new(10.25);
//! let b = Quantity::<Length>::new(5.0);
//! assert_eq!((a + b).value(), 15.25);
//! ```

use crate::Dim;
use typenum::{P1, Z0};

/// Mass (M).
pub type Mass = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Length (L).
pub type Length = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
/// Time (T).
pub type Time = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
/// Electric current (I).
pub type Current = Dim<Z0, Z0, Z0, P1, Z0, Z0, Z0>;
/// Thermodynamic temperature (Θ).
pub type Temperature = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
/// Luminous intensity (J).
pub type LuminousIntensity = Dim<Z0, Z0, Z0, Z0, Z0, P1, Z0>;
/// Amount of substance (N).
pub type AmountOfSubstance = Dim<Z0, Z0, Z0, Z0, Z0, Z0, P1>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BaseDimension, Dimension, Quantity};

    #[test]
    fn each_base_has_a_single_unit_exponent() {
        let all = [
            Mass::EXPONENTS,
            Length::EXPONENTS,
            Time::EXPONENTS,
            Current::EXPONENTS,
            Temperature::EXPONENTS,
            LuminousIntensity::EXPONENTS,
            AmountOfSubstance::EXPONENTS,
        ];
        for (i, exponents) in all.iter().enumerate() {
            for (j, e) in exponents.iter().enumerate() {
                assert_eq!(*e, i32::from(i == j));
            }
        }
    }

    #[test]
    fn base_axis_lookup() {
        assert_eq!(Temperature::exponent(BaseDimension::Temperature), 1);
        assert_eq!(Temperature::exponent(BaseDimension::Mass), 0);
    }

    #[test]
    fn same_base_adds() {
        let a = Quantity::<Mass>::new(2.0);
        let b = Quantity::<Mass>::new(0.5);
        assert_eq!((a + b).value(), 2.5);
        assert_eq!((a - b).value(), 1.5);
    }

    #[test]
    fn integer_representation() {
        let a = Quantity::<Current, i32>::new(7);
        let b = Quantity::<Current, i32>::new(3);
        assert_eq!((a - b).value(), 4);
        assert_eq!((a / b).value(), 2);
        assert!((a / b).dimension().iter().all(|e| *e == 0));
    }
}
