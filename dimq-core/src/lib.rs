//! Core type system for compile-time dimension-checked quantities.
//!
//! `dimq-core` provides a minimal, zero-cost dimensional-analysis model:
//!
//! - A *dimension* is a zero-sized [`Dim`] type carrying seven `typenum` exponents, one per SI base dimension.
//! - A value tagged with a dimension is a [`Quantity<D, V>`], backed by any numeric `V` (default `f64`).
//! - `+` and `-` only type-check between identical dimensions.
//! - `*` and `/` accept any pair of dimensions and derive the result's exponents at compile time.
//!
//! Most users should depend on `dimq` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time rejection of physically inconsistent arithmetic (a length plus a mass does not compile).
//! - Automatic derivation of composite dimensions (`Length / Time` is [`mechanics::Velocity`]).
//! - Zero runtime overhead for dimension tags (phantom types only).
//!
//! # What this crate does not try to solve
//!
//! - Units and scale: metres and feet are not modeled, only the dimension category.
//! - Parsing or formatting unit strings, SI prefixes.
//! - Exponent overflow: exponents are expected to stay small.
//!
//! # Quick start
//!
//! ```rust
//! use dimq_core::Quantity;
//! use dimq_core::base::{Length, Time};
//! use dimq_core::mechanics::Velocity;
//!
//! let d = Quantity::<Length>::new(100.0);
//! let t = Quantity::<Time>::new(20.0);
//! let v: Quantity<Velocity> = d / t;
//! assert!((v.value() - 5.0).abs() < 1e-12);
//! assert_eq!(v.dimension(), [0, 1, -1, 0, 0, 0, 0]);
//! ```
//!
//! Composite dimensions can be written out with [`dim!`]:
//!
//! ```rust
//! use dimq_core::{dim, Dimension};
//! use dimq_core::mechanics::Force;
//!
//! type Newton = dim!(mass = 1, length = 1, time = -2);
//! assert_eq!(<Newton as Dimension>::EXPONENTS, Force::EXPONENTS);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `dimq-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! dimq-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<D, V>`; serialization is the raw value only, or value plus
//!   exponents through [`serde_with_dimension`].
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Dimension
//! mismatches are compile errors; numeric behavior (overflow, division by zero, NaN) is that of `V`.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod macros;
mod quantity;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{BaseDimension, Dim, Dimension, Dimensionless, DivDim, MulDim, SqrtDim, SquareRoot};
pub use quantity::Quantity;

#[cfg(feature = "serde")]
pub use quantity::serde_with_dimension;

/// Type-level integers used as exponents.
pub use typenum;

#[doc(hidden)]
pub mod __private {
    pub use dimq_macros::dim_type;
}

// ─────────────────────────────────────────────────────────────────────────────
// Named dimensions (grouped by field)
// ─────────────────────────────────────────────────────────────────────────────

/// Named dimensions (grouped by field).
pub mod dimensions;

pub use dimensions::base;
pub use dimensions::electromagnetism;
pub use dimensions::mechanics;
pub use dimensions::thermodynamics;
