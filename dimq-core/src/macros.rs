//! Macros for spelling out dimensions.

/// Names a dimension by its exponents.
///
/// Keys are the [`BaseDimension`](crate::BaseDimension) names (`mass`, `length`, `time`, `current`, `temperature`,
/// `luminosity`, `amount`); keys that are left out have exponent zero. The expansion is an ordinary
/// [`Dim`](crate::Dim) type, so it is interchangeable with the named aliases.
///
/// ```rust
/// use dimq_core::{dim, Dimension, Quantity};
/// use dimq_core::base::{Length, Time};
/// use dimq_core::mechanics::Velocity;
///
/// type Jerk = dim!(length = 1, time = -3);
/// assert_eq!(<Jerk as Dimension>::EXPONENTS, [0, 1, -3, 0, 0, 0, 0]);
///
/// let v: Quantity<dim!(length = 1, time = -1)> = Quantity::<Length>::new(4.0) / Quantity::<Time>::new(2.0);
/// let same: Quantity<Velocity> = v;
/// assert_eq!(same.value(), 2.0);
/// ```
///
/// Unknown keys are rejected at compile time:
///
/// ```compile_fail
/// type Bad = dimq_core::dim!(lenght = 1);
/// ```
#[macro_export]
macro_rules! dim {
    ($($body:tt)*) => {
        $crate::__private::dim_type!($crate; $($body)*)
    };
}
