//! Quantity type and its implementations.

use crate::dimension::{DivDim, Dimension, Dimensionless, MulDim, SquareRoot, SqrtDim};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value tagged with a dimension.
///
/// `Quantity<D, V>` wraps a scalar of representation type `V` (default `f64`) together with phantom type information
/// about its dimension `D`. The tag only exists at compile time: a quantity is exactly as large as its scalar.
///
/// - `+` and `-` only exist between quantities of the same dimension.
/// - `*` and `/` exist between any two dimensions and derive the dimension of the result.
///
/// # Examples
///
/// ```rust
/// use dimq_core::Quantity;
/// use dimq_core::base::{Length, Time};
/// use dimq_core::mechanics::Velocity;
///
/// let d = Quantity::<Length>::new(100.0);
/// let t = Quantity::<Time>::new(20.0);
/// let v: Quantity<Velocity> = d / t;
/// assert_eq!(v.value(), 5.0);
/// ```
///
/// Adding a length to a mass is a type error:
///
/// ```compile_fail
/// use dimq_core::Quantity;
/// use dimq_core::base::{Length, Mass};
///
/// let l = Quantity::<Length>::new(1.0);
/// let m = Quantity::<Mass>::new(1.0);
/// let _ = l + m;
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity<D: Dimension, V = f64>(V, PhantomData<D>);

impl<D: Dimension, V> Quantity<D, V> {
    /// Creates a new quantity with the given value.
    ///
    /// ```rust
    /// use dimq_core::Quantity;
    /// use dimq_core::base::Length;
    /// let d = Quantity::<Length>::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: V) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub fn value(self) -> V {
        self.0
    }

    /// Borrows the raw numeric value.
    #[inline]
    pub const fn value_ref(&self) -> &V {
        &self.0
    }

    /// The dimension exponents of this quantity.
    ///
    /// ```rust
    /// use dimq_core::Quantity;
    /// use dimq_core::mechanics::Force;
    /// let f = Quantity::<Force>::new(1.0);
    /// assert_eq!(f.dimension(), [1, 1, -2, 0, 0, 0, 0]);
    /// ```
    #[inline]
    pub const fn dimension(&self) -> [i32; 7] {
        D::EXPONENTS
    }

    /// The zero of this quantity, i.e. `V::default()`.
    #[inline]
    pub fn zero() -> Self
    where
        V: Default,
    {
        Self::new(V::default())
    }

    /// Multiplies the quantity by itself.
    ///
    /// ```rust
    /// use dimq_core::{Dimension, Quantity};
    /// use dimq_core::base::Length;
    /// use dimq_core::mechanics::Area;
    ///
    /// let a: Quantity<Area> = Quantity::<Length>::new(3.0).squared();
    /// assert_eq!(a.value(), 9.0);
    /// ```
    #[inline]
    pub fn squared(self) -> Quantity<MulDim<D, D>, V>
    where
        D: Mul<D>,
        MulDim<D, D>: Dimension,
        V: Mul<Output = V> + Clone,
    {
        Quantity::new(self.0.clone() * self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Float-only helpers
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_float_quantity {
    ($($float:ident => $libm_sqrt:ident, $libm_abs:ident);* $(;)?) => {
        $(
            impl<D: Dimension> Quantity<D, $float> {
                /// A constant representing NaN for this quantity type.
                pub const NAN: Self = Self::new($float::NAN);

                /// Returns the absolute value.
                #[inline]
                pub fn abs(self) -> Self {
                    #[cfg(feature = "std")]
                    {
                        Self::new(self.0.abs())
                    }
                    #[cfg(not(feature = "std"))]
                    {
                        Self::new(libm::$libm_abs(self.0))
                    }
                }

                /// Returns the smaller of two quantities of the same dimension.
                #[inline]
                pub fn min(self, other: Self) -> Self {
                    Self::new(self.0.min(other.0))
                }

                /// Returns the larger of two quantities of the same dimension.
                #[inline]
                pub fn max(self, other: Self) -> Self {
                    Self::new(self.0.max(other.0))
                }

                /// Returns `1 / self`; every exponent is negated.
                #[inline]
                pub fn recip(self) -> Quantity<DivDim<Dimensionless, D>, $float>
                where
                    Dimensionless: Div<D>,
                    DivDim<Dimensionless, D>: Dimension,
                {
                    Quantity::new(1.0 / self.0)
                }

                /// Square root; only available when every exponent is even.
                #[inline]
                pub fn sqrt(self) -> Quantity<SqrtDim<D>, $float>
                where
                    D: SquareRoot,
                {
                    #[cfg(feature = "std")]
                    {
                        Quantity::new(self.0.sqrt())
                    }
                    #[cfg(not(feature = "std"))]
                    {
                        Quantity::new(libm::$libm_sqrt(self.0))
                    }
                }
            }
        )*
    };
}

impl_float_quantity! {
    f32 => sqrtf, fabsf;
    f64 => sqrt, fabs;
}

// ─────────────────────────────────────────────────────────────────────────────
// Same-dimension operators
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, V: Add<Output = V>> Add for Quantity<D, V> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<D: Dimension, V: AddAssign> AddAssign for Quantity<D, V> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<D: Dimension, V: Sub<Output = V>> Sub for Quantity<D, V> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<D: Dimension, V: SubAssign> SubAssign for Quantity<D, V> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<D: Dimension, V: Neg<Output = V>> Neg for Quantity<D, V> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<D: Dimension, V: Add<Output = V> + Default> Sum for Quantity<D, V> {
    fn sum<It: Iterator<Item = Self>>(iter: It) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a, D: Dimension, V: Add<Output = V> + Default + Copy> Sum<&'a Quantity<D, V>> for Quantity<D, V> {
    fn sum<It: Iterator<Item = &'a Quantity<D, V>>>(iter: It) -> Self {
        iter.copied().sum()
    }
}

impl<D: Dimension, V> From<V> for Quantity<D, V> {
    #[inline]
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimension-deriving operators
// ─────────────────────────────────────────────────────────────────────────────

impl<D1, D2, V> Mul<Quantity<D2, V>> for Quantity<D1, V>
where
    D1: Dimension + Mul<D2>,
    D2: Dimension,
    MulDim<D1, D2>: Dimension,
    V: Mul<Output = V>,
{
    type Output = Quantity<MulDim<D1, D2>, V>;
    #[inline]
    fn mul(self, rhs: Quantity<D2, V>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<D1, D2, V> Div<Quantity<D2, V>> for Quantity<D1, V>
where
    D1: Dimension + Div<D2>,
    D2: Dimension,
    DivDim<D1, D2>: Dimension,
    V: Div<Output = V>,
{
    type Output = Quantity<DivDim<D1, D2>, V>;
    #[inline]
    fn div(self, rhs: Quantity<D2, V>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scaling by bare scalars
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_scalar_ops {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl<D: Dimension> Mul<$scalar> for Quantity<D, $scalar> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $scalar) -> Self {
                    Self::new(self.0 * rhs)
                }
            }

            impl<D: Dimension> Mul<Quantity<D, $scalar>> for $scalar {
                type Output = Quantity<D, $scalar>;
                #[inline]
                fn mul(self, rhs: Quantity<D, $scalar>) -> Self::Output {
                    rhs * self
                }
            }

            impl<D: Dimension> MulAssign<$scalar> for Quantity<D, $scalar> {
                #[inline]
                fn mul_assign(&mut self, rhs: $scalar) {
                    self.0 *= rhs;
                }
            }

            impl<D: Dimension> Div<$scalar> for Quantity<D, $scalar> {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $scalar) -> Self {
                    Self::new(self.0 / rhs)
                }
            }

            impl<D: Dimension> DivAssign<$scalar> for Quantity<D, $scalar> {
                #[inline]
                fn div_assign(&mut self, rhs: $scalar) {
                    self.0 /= rhs;
                }
            }

            impl<D> Div<Quantity<D, $scalar>> for $scalar
            where
                D: Dimension,
                Dimensionless: Div<D>,
                DivDim<Dimensionless, D>: Dimension,
            {
                type Output = Quantity<DivDim<Dimensionless, D>, $scalar>;
                #[inline]
                fn div(self, rhs: Quantity<D, $scalar>) -> Self::Output {
                    Quantity::new(self / rhs.0)
                }
            }

            impl From<Quantity<Dimensionless, $scalar>> for $scalar {
                #[inline]
                fn from(value: Quantity<Dimensionless, $scalar>) -> Self {
                    value.0
                }
            }
        )*
    };
}

impl_scalar_ops!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension, V: Serialize> Serialize for Quantity<D, V> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension, V: Deserialize<'de>> Deserialize<'de> for Quantity<D, V> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        V::deserialize(deserializer).map(Quantity::new)
    }
}

/// Serde helper module for serializing quantities together with their dimension.
///
/// Use this with the `#[serde(with = "...")]` attribute to keep the exponent vector in serialized data. On input the
/// `dimension` field is optional, but when present it must match the target type.
///
/// # Examples
///
/// ```rust
/// use dimq_core::Quantity;
/// use dimq_core::mechanics::Velocity;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Runner {
///     #[serde(with = "dimq_core::serde_with_dimension")]
///     speed: Quantity<Velocity>,  // {"value": 3.0, "dimension": [0, 1, -1, 0, 0, 0, 0]}
///
///     cruise: Quantity<Velocity>, // 2.5
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_dimension {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Quantity<D, T>` as a struct with `value` and `dimension` fields.
    pub fn serialize<D, T, S>(quantity: &Quantity<D, T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        D: Dimension,
        T: Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", quantity.value_ref())?;
        state.serialize_field("dimension", &D::EXPONENTS)?;
        state.end()
    }

    /// Deserializes a `Quantity<D, T>` from a struct with `value` and optionally `dimension` fields.
    pub fn deserialize<'de, D, T, De>(deserializer: De) -> Result<Quantity<D, T>, De::Error>
    where
        D: Dimension,
        T: Deserialize<'de>,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Dimension,
        }

        struct QuantityVisitor<D, T>(PhantomData<(D, T)>);

        impl<'de, D: Dimension, T: Deserialize<'de>> Visitor<'de> for QuantityVisitor<D, T> {
            type Value = Quantity<D, T>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and dimension fields")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Quantity<D, T>, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut value: Option<T> = None;
                let mut dimension: Option<[i32; 7]> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Dimension => {
                            if dimension.is_some() {
                                return Err(de::Error::duplicate_field("dimension"));
                            }
                            dimension = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(found) = dimension {
                    if found != D::EXPONENTS {
                        return Err(de::Error::custom(format_args!(
                            "dimension mismatch: expected {:?}, found {:?}",
                            D::EXPONENTS,
                            found
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "dimension"],
            QuantityVisitor(PhantomData),
        )
    }
}
