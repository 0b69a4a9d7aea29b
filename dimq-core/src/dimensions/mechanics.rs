//! Mechanical dimensions derived from mass, length and time.
//!
//! ## Examples
//!
//! ```rust
//! use dimq_core::Quantity;
//! use dimq_core::base::{Length, Mass, Time};
//! use dimq_core::mechanics::{Acceleration, Force, Velocity};
//!
//! let v: Quantity<Velocity> = Quantity::<Length>::new(30.0) / Quantity::<Time>::new(10.0);
//! let a: Quantity<Acceleration> = v / Quantity::<Time>::new(3.0);
//! let f: Quantity<Force> = Quantity::<Mass>::new(2.0) * a;
//! assert!((f.value() - 2.0).abs() < 1e-12);
//! ```

use crate::base::{Length, Mass, Time};
use crate::{DivDim, Dimensionless, MulDim};

/// Area (L²).
pub type Area = MulDim<Length, Length>;
/// Volume (L³).
pub type Volume = MulDim<Area, Length>;
/// Velocity (L·T⁻¹).
pub type Velocity = DivDim<Length, Time>;
/// Acceleration (L·T⁻²).
pub type Acceleration = DivDim<Velocity, Time>;
/// Frequency (T⁻¹).
pub type Frequency = DivDim<Dimensionless, Time>;
/// Force (M·L·T⁻²).
pub type Force = MulDim<Mass, Acceleration>;
/// Pressure (M·L⁻¹·T⁻²).
pub type Pressure = DivDim<Force, Area>;
/// Energy (M·L²·T⁻²).
pub type Energy = MulDim<Force, Length>;
/// Power (M·L²·T⁻³).
pub type Power = DivDim<Energy, Time>;
/// Momentum (M·L·T⁻¹).
pub type Momentum = MulDim<Mass, Velocity>;
/// Density (M·L⁻³).
pub type Density = DivDim<Mass, Volume>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dimension, Quantity};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    #[cfg(feature = "std")]
    use proptest::prelude::*;

    type Meters = Quantity<Length>;
    type Seconds = Quantity<Time>;
    type Kilograms = Quantity<Mass>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Exponents of the named dimensions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn named_exponents() {
        assert_eq!(Area::EXPONENTS, [0, 2, 0, 0, 0, 0, 0]);
        assert_eq!(Volume::EXPONENTS, [0, 3, 0, 0, 0, 0, 0]);
        assert_eq!(Velocity::EXPONENTS, [0, 1, -1, 0, 0, 0, 0]);
        assert_eq!(Acceleration::EXPONENTS, [0, 1, -2, 0, 0, 0, 0]);
        assert_eq!(Frequency::EXPONENTS, [0, 0, -1, 0, 0, 0, 0]);
        assert_eq!(Force::EXPONENTS, [1, 1, -2, 0, 0, 0, 0]);
        assert_eq!(Pressure::EXPONENTS, [1, -1, -2, 0, 0, 0, 0]);
        assert_eq!(Energy::EXPONENTS, [1, 2, -2, 0, 0, 0, 0]);
        assert_eq!(Power::EXPONENTS, [1, 2, -3, 0, 0, 0, 0]);
        assert_eq!(Momentum::EXPONENTS, [1, 1, -1, 0, 0, 0, 0]);
        assert_eq!(Density::EXPONENTS, [1, -3, 0, 0, 0, 0, 0]);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Derivation through operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn length_over_time_is_velocity() {
        let v: Quantity<Velocity> = Meters::new(100.0) / Seconds::new(20.0);
        assert_abs_diff_eq!(v.value(), 5.0, epsilon = 1e-12);
        assert_eq!(v.dimension(), [0, 1, -1, 0, 0, 0, 0]);
    }

    #[test]
    fn length_times_frequency_is_velocity() {
        let f: Quantity<Frequency> = Seconds::new(4.0).recip();
        let v: Quantity<Velocity> = Meters::new(10.0) * f;
        assert_abs_diff_eq!(v.value(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn length_times_length_is_area() {
        let a: Quantity<Area> = Meters::new(3.0) * Meters::new(4.0);
        assert_abs_diff_eq!(a.value(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn length_over_length_is_dimensionless() {
        let r = Meters::new(3.0) / Meters::new(4.0);
        assert!(r.dimension().iter().all(|e| *e == 0));
        assert_abs_diff_eq!(f64::from(r), 0.75, epsilon = 1e-12);
    }

    #[test]
    fn velocity_times_time_is_length() {
        let v: Quantity<Velocity> = Quantity::new(12.0);
        let d: Meters = v * Seconds::new(0.5);
        assert_abs_diff_eq!(d.value(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn kinetic_energy() {
        let m = Kilograms::new(2.0);
        let v: Quantity<Velocity> = Quantity::new(3.0);
        let e: Quantity<Energy> = 0.5 * m * v.squared();
        assert_relative_eq!(e.value(), 9.0, max_relative = 1e-12);
    }

    #[test]
    fn power_from_force_and_velocity() {
        let f: Quantity<Force> = Quantity::new(10.0);
        let v: Quantity<Velocity> = Quantity::new(2.0);
        let p: Quantity<Power> = f * v;
        assert_relative_eq!(p.value(), 20.0, max_relative = 1e-12);
    }

    #[test]
    fn pressure_from_force_over_area() {
        let f: Quantity<Force> = Quantity::new(50.0);
        let a: Quantity<Area> = Meters::new(5.0).squared();
        let p: Quantity<Pressure> = f / a;
        assert_relative_eq!(p.value(), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn sqrt_of_area_is_length() {
        let a: Quantity<Area> = Quantity::new(16.0);
        let side: Meters = a.sqrt();
        assert_abs_diff_eq!(side.value(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn density_of_a_cube() {
        let side = Meters::new(2.0);
        let volume: Quantity<Volume> = side * side * side;
        let rho: Quantity<Density> = Kilograms::new(16.0) / volume;
        assert_relative_eq!(rho.value(), 2.0, max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "std")]
    proptest! {
        #[test]
        fn prop_velocity_times_time_recovers_length(
            d in 1e-6..1e6f64,
            t in 1e-6..1e6f64
        ) {
            let v: Quantity<Velocity> = Meters::new(d) / Seconds::new(t);
            let back: Meters = v * Seconds::new(t);
            prop_assert!((back.value() - d).abs() / d < 1e-12);
        }

        #[test]
        fn prop_momentum_is_mass_times_velocity(
            m in -1e6..1e6f64,
            v in -1e6..1e6f64
        ) {
            let p: Quantity<Momentum> = Kilograms::new(m) * Quantity::<Velocity>::new(v);
            prop_assert_eq!(p.value(), m * v);
        }
    }
}
