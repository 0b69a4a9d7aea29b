//! Dimension vectors and the type-level arithmetic on them.

use core::cmp::Ordering;
use core::fmt::{Debug, Formatter, Result};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Add, Div, Mul, Sub};
use typenum::{Diff, Integer, PartialDiv, PartialQuot, Sum, P2, Z0};

mod sealed {
    pub trait Sealed {}
}

/// The seven SI base dimensions, in the canonical order used by [`Dim`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BaseDimension {
    /// Mass (kilogram).
    Mass,
    /// Length (metre).
    Length,
    /// Time (second).
    Time,
    /// Electric current (ampere).
    Current,
    /// Thermodynamic temperature (kelvin).
    Temperature,
    /// Luminous intensity (candela).
    LuminousIntensity,
    /// Amount of substance (mole).
    AmountOfSubstance,
}

impl BaseDimension {
    /// Every base dimension, in canonical order.
    pub const ALL: [BaseDimension; 7] = [
        BaseDimension::Mass,
        BaseDimension::Length,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::LuminousIntensity,
        BaseDimension::AmountOfSubstance,
    ];

    /// Position of this axis inside a dimension vector.
    ///
    /// ```rust
    /// use dimq_core::BaseDimension;
    /// assert_eq!(BaseDimension::Time.index(), 2);
    /// ```
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lower-case name of the axis, as accepted by [`dim!`](crate::dim).
    pub const fn name(self) -> &'static str {
        match self {
            BaseDimension::Mass => "mass",
            BaseDimension::Length => "length",
            BaseDimension::Time => "time",
            BaseDimension::Current => "current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::LuminousIntensity => "luminosity",
            BaseDimension::AmountOfSubstance => "amount",
        }
    }
}

/// Marker trait for **dimension vectors**.
///
/// A dimension is the physical category of a value (length, mass, velocity …), expressed as the seven exponents of
/// the SI base dimensions. The only implementor is [`Dim`]; two dimensions are the same iff they are the same type,
/// which the compiler checks for free.
///
/// The exponents are also available at run time for inspection:
///
/// ```rust
/// use dimq_core::{Dimension, BaseDimension};
/// use dimq_core::mechanics::Velocity;
///
/// assert_eq!(Velocity::EXPONENTS, [0, 1, -1, 0, 0, 0, 0]);
/// assert_eq!(Velocity::exponent(BaseDimension::Time), -1);
/// ```
pub trait Dimension:
    sealed::Sealed + Copy + Debug + Default + Eq + Ord + Hash + Send + Sync + 'static
{
    /// Exponent of mass.
    type Mass: Integer;
    /// Exponent of length.
    type Length: Integer;
    /// Exponent of time.
    type Time: Integer;
    /// Exponent of electric current.
    type Current: Integer;
    /// Exponent of thermodynamic temperature.
    type Temperature: Integer;
    /// Exponent of luminous intensity.
    type LuminousIntensity: Integer;
    /// Exponent of amount of substance.
    type AmountOfSubstance: Integer;

    /// The seven exponents, in [`BaseDimension::ALL`] order.
    const EXPONENTS: [i32; 7] = [
        <Self::Mass as Integer>::I32,
        <Self::Length as Integer>::I32,
        <Self::Time as Integer>::I32,
        <Self::Current as Integer>::I32,
        <Self::Temperature as Integer>::I32,
        <Self::LuminousIntensity as Integer>::I32,
        <Self::AmountOfSubstance as Integer>::I32,
    ];

    /// `true` when every exponent is zero.
    const IS_DIMENSIONLESS: bool = all_zero(&Self::EXPONENTS);

    /// Exponent of a single base dimension.
    #[inline]
    fn exponent(axis: BaseDimension) -> i32 {
        Self::EXPONENTS[axis.index()]
    }
}

const fn all_zero(exponents: &[i32; 7]) -> bool {
    let mut i = 0;
    while i < exponents.len() {
        if exponents[i] != 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// A dimension vector: one `typenum` integer exponent per SI base dimension.
///
/// Parameters are, in order: mass, length, time, electric current, thermodynamic temperature, luminous intensity,
/// amount of substance. Prefer the named aliases ([`Length`](crate::base::Length),
/// [`Velocity`](crate::mechanics::Velocity), …) or [`dim!`](crate::dim) over spelling this out.
pub struct Dim<M, L, T, I, Th, J, N>(PhantomData<fn() -> (M, L, T, I, Th, J, N)>);

impl<M, L, T, I, Th, J, N> Dim<M, L, T, I, Th, J, N> {
    /// The (zero-sized) value of this dimension.
    pub const fn new() -> Self {
        Dim(PhantomData)
    }
}

// The impls below carry no bounds on the exponents; `derive` would require
// every exponent type to implement each trait.

impl<M, L, T, I, Th, J, N> Clone for Dim<M, L, T, I, Th, J, N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, L, T, I, Th, J, N> Copy for Dim<M, L, T, I, Th, J, N> {}

impl<M, L, T, I, Th, J, N> Default for Dim<M, L, T, I, Th, J, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<M, L, T, I, Th, J, N> PartialEq for Dim<M, L, T, I, Th, J, N> {
    #[inline]
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<M, L, T, I, Th, J, N> Eq for Dim<M, L, T, I, Th, J, N> {}

impl<M, L, T, I, Th, J, N> PartialOrd for Dim<M, L, T, I, Th, J, N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<M, L, T, I, Th, J, N> Ord for Dim<M, L, T, I, Th, J, N> {
    #[inline]
    fn cmp(&self, _: &Self) -> Ordering {
        Ordering::Equal
    }
}

impl<M, L, T, I, Th, J, N> Hash for Dim<M, L, T, I, Th, J, N> {
    #[inline]
    fn hash<H: Hasher>(&self, _: &mut H) {}
}

impl<M, L, T, I, Th, J, N> Debug for Dim<M, L, T, I, Th, J, N>
where
    M: Integer,
    L: Integer,
    T: Integer,
    I: Integer,
    Th: Integer,
    J: Integer,
    N: Integer,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let exponents = [M::I32, L::I32, T::I32, I::I32, Th::I32, J::I32, N::I32];
        f.debug_tuple("Dim").field(&exponents).finish()
    }
}

impl<M, L, T, I, Th, J, N> sealed::Sealed for Dim<M, L, T, I, Th, J, N> {}

impl<M, L, T, I, Th, J, N> Dimension for Dim<M, L, T, I, Th, J, N>
where
    M: Integer,
    L: Integer,
    T: Integer,
    I: Integer,
    Th: Integer,
    J: Integer,
    N: Integer,
{
    type Mass = M;
    type Length = L;
    type Time = T;
    type Current = I;
    type Temperature = Th;
    type LuminousIntensity = J;
    type AmountOfSubstance = N;
}

/// Dimension with every exponent zero: a pure number.
pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;

// ─────────────────────────────────────────────────────────────────────────────
// Type-level derivation
// ─────────────────────────────────────────────────────────────────────────────

/// Multiplying dimensions adds their exponents.
impl<M1, L1, T1, I1, Th1, J1, N1, M2, L2, T2, I2, Th2, J2, N2> Mul<Dim<M2, L2, T2, I2, Th2, J2, N2>>
    for Dim<M1, L1, T1, I1, Th1, J1, N1>
where
    M1: Add<M2>,
    L1: Add<L2>,
    T1: Add<T2>,
    I1: Add<I2>,
    Th1: Add<Th2>,
    J1: Add<J2>,
    N1: Add<N2>,
{
    type Output = Dim<Sum<M1, M2>, Sum<L1, L2>, Sum<T1, T2>, Sum<I1, I2>, Sum<Th1, Th2>, Sum<J1, J2>, Sum<N1, N2>>;

    #[inline]
    fn mul(self, _: Dim<M2, L2, T2, I2, Th2, J2, N2>) -> Self::Output {
        Dim::new()
    }
}

/// Dividing dimensions subtracts the right exponents from the left ones.
impl<M1, L1, T1, I1, Th1, J1, N1, M2, L2, T2, I2, Th2, J2, N2> Div<Dim<M2, L2, T2, I2, Th2, J2, N2>>
    for Dim<M1, L1, T1, I1, Th1, J1, N1>
where
    M1: Sub<M2>,
    L1: Sub<L2>,
    T1: Sub<T2>,
    I1: Sub<I2>,
    Th1: Sub<Th2>,
    J1: Sub<J2>,
    N1: Sub<N2>,
{
    type Output =
        Dim<Diff<M1, M2>, Diff<L1, L2>, Diff<T1, T2>, Diff<I1, I2>, Diff<Th1, Th2>, Diff<J1, J2>, Diff<N1, N2>>;

    #[inline]
    fn div(self, _: Dim<M2, L2, T2, I2, Th2, J2, N2>) -> Self::Output {
        Dim::new()
    }
}

/// Product of two dimensions (exponent-wise sum).
///
/// ```rust
/// use dimq_core::{Dimension, MulDim};
/// use dimq_core::base::Length;
///
/// assert_eq!(<MulDim<Length, Length>>::EXPONENTS, [0, 2, 0, 0, 0, 0, 0]);
/// ```
pub type MulDim<A, B> = <A as Mul<B>>::Output;

/// Quotient of two dimensions (exponent-wise difference, left minus right).
///
/// ```rust
/// use dimq_core::{Dimension, DivDim};
/// use dimq_core::base::{Length, Time};
///
/// assert_eq!(<DivDim<Length, Time>>::EXPONENTS, [0, 1, -1, 0, 0, 0, 0]);
/// ```
pub type DivDim<A, B> = <A as Div<B>>::Output;

/// Dimensions whose exponents are all even, and therefore have a square root.
pub trait SquareRoot: Dimension {
    /// The dimension with every exponent halved.
    type Output: Dimension;
}

impl<M, L, T, I, Th, J, N> SquareRoot for Dim<M, L, T, I, Th, J, N>
where
    Self: Dimension,
    M: PartialDiv<P2>,
    L: PartialDiv<P2>,
    T: PartialDiv<P2>,
    I: PartialDiv<P2>,
    Th: PartialDiv<P2>,
    J: PartialDiv<P2>,
    N: PartialDiv<P2>,
    Dim<
        PartialQuot<M, P2>,
        PartialQuot<L, P2>,
        PartialQuot<T, P2>,
        PartialQuot<I, P2>,
        PartialQuot<Th, P2>,
        PartialQuot<J, P2>,
        PartialQuot<N, P2>,
    >: Dimension,
{
    type Output = Dim<
        PartialQuot<M, P2>,
        PartialQuot<L, P2>,
        PartialQuot<T, P2>,
        PartialQuot<I, P2>,
        PartialQuot<Th, P2>,
        PartialQuot<J, P2>,
        PartialQuot<N, P2>,
    >;
}

/// Square root of a dimension (every exponent halved).
///
/// Only defined when every exponent is even:
///
/// ```compile_fail
/// use dimq_core::SqrtDim;
/// use dimq_core::base::Length;
///
/// fn takes<D: dimq_core::Dimension>() {}
/// takes::<SqrtDim<Length>>();
/// ```
pub type SqrtDim<D> = <D as SquareRoot>::Output;
