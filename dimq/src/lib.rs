//! Compile-time dimensional analysis.
//!
//! `dimq` is the user-facing crate in this workspace. It re-exports the full API from `dimq-core` plus the named
//! dimensions (base, mechanics, electromagnetism, thermodynamics).
//!
//! The core idea is: a value is always a `Quantity<D, V>`, where `D` is a zero-sized type holding the seven SI
//! exponents. This keeps dimensions at compile time with no runtime overhead beyond the scalar `V`.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add a length to a mass).
//! - Derives the dimension of products and quotients automatically (`Length / Time` is `Velocity`).
//! - Lets you name any dimension, including ones this crate doesn't predefine, with [`dim!`].
//!
//! # What this crate does not try to solve
//!
//! - Units and scale factors: there is no metre or foot, only the length dimension.
//! - Parsing, formatting or converting unit strings.
//!
//! # Quick start
//!
//! ```rust
//! use dimq::{Length, Quantity, Time, Velocity};
//!
//! let d = Quantity::<Length>::new(1_000.0);
//! let t = Quantity::<Time>::new(100.0);
//! let v: Quantity<Velocity> = d / t;
//! assert!((v.value() - 10.0).abs() < 1e-12);
//! ```
//!
//! Multiplying a length by a frequency also gives a velocity:
//!
//! ```rust
//! use dimq::{Frequency, Length, Quantity, Velocity};
//!
//! let wavelength = Quantity::<Length>::new(2.0);
//! let f = Quantity::<Frequency>::new(3.0);
//! let v: Quantity<Velocity> = wavelength * f;
//! assert_eq!(v.dimension(), [0, 1, -1, 0, 0, 0, 0]);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use dimq::{Length, Mass, Quantity};
//!
//! let l = Quantity::<Length>::new(1.0);
//! let m = Quantity::<Mass>::new(1.0);
//! let _ = l + m; // cannot add different dimensions
//! ```
//!
//! ```compile_fail
//! use dimq::{Length, Mass, Quantity};
//!
//! let l = Quantity::<Length>::new(1.0);
//! let m = Quantity::<Mass>::new(1.0);
//! let _ = l - m; // nor subtract them
//! ```
//!
//! ```compile_fail
//! use dimq::{Length, Quantity, Time};
//!
//! let mut l = Quantity::<Length>::new(1.0);
//! l += Quantity::<Time>::new(1.0);
//! ```
//!
//! ```compile_fail
//! use dimq::{Length, Quantity};
//!
//! let l = Quantity::<Length, f64>::new(1.0);
//! let r = Quantity::<Length, f32>::new(1.0);
//! let _ = l * r; // representations must match
//! ```
//!
//! ```compile_fail
//! use dimq::{Length, Quantity};
//!
//! let _ = Quantity::<Length>::new(4.0).sqrt(); // odd exponent
//! ```
//!
//! # Modules
//!
//! Dimensions are grouped by field under modules (also re-exported at the crate root for convenience):
//!
//! - `dimq::base` (mass, length, time, current, temperature, luminous intensity, amount of substance)
//! - `dimq::mechanics` (area, velocity, force, energy, power, …)
//! - `dimq::electromagnetism` (charge, voltage, resistance, capacitance)
//! - `dimq::thermodynamics` (entropy, heat capacity, molar mass, concentration)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `dimq-core`.
//! - `serde`: enables `serde` support for `Quantity<D, V>`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! dimq = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type. Dimension mismatches are compile errors; arithmetic follows the
//! numeric semantics of the representation type.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use dimq_core::*;

pub use dimq_core::dimensions::base;
pub use dimq_core::dimensions::electromagnetism;
pub use dimq_core::dimensions::mechanics;
pub use dimq_core::dimensions::thermodynamics;

pub use dimq_core::dimensions::base::*;
pub use dimq_core::dimensions::electromagnetism::*;
pub use dimq_core::dimensions::mechanics::*;
pub use dimq_core::dimensions::thermodynamics::*;
