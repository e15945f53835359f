#![cfg_attr(not(test), no_std)]
//! This crate provides fast *double-word* extended precision floating point arithmetic, and a
//! generic solver for π built on top of it.
//!
//! # Introduction
//!
//! An [`ExtendedFloat<P>`] represents a number as the unevaluated sum of two primitive floats of
//! type `P` (`f32` or `f64`): a `head`, and a `tail` holding what the head cannot represent. This
//! roughly doubles the number of significant bits (106 for `ExtendedFloat<f64>`, versus 53 for a
//! plain `f64`) while keeping every operation a short sequence of native instructions. No
//! allocation, no big integers.
//!
//! The technique is old and well known; the following references are useful:
//!
//!   - T. J. Dekker, "A floating-point technique for extending the available precision" (1971)
//!   - Y. Hida, X. S. Li, D. H. Bailey, "Library for double-double and quad-double arithmetic"
//!     (2000)
//!   - M. Joldes, J.-M. Muller, V. Popescu, "Tight and rigorous error bounds for basic building
//!     blocks of double-word arithmetic" (2017)
//!
//! The [`gauss_legendre`] module computes π with the quadratically convergent Gauss–Legendre
//! algorithm, generically over any [`Numeric`] type: the primitive floats, the extended floats,
//! or your own.
//!
//! # Usage
//!
//! ```
//! use extended_float::{ef64, compute_pi};
//!
//! // Construct from a single value, or from a (head, tail) pair.
//! let a = ef64::from_value(1.0);
//! let b = ef64::from_parts(1.0, 1e-20);
//! assert!(a < b);
//!
//! // Perform basic arithmetic and comparisons with the usual operators. Increments far below
//! // the precision of an `f64` are not lost.
//! let tiny = ef64::from_value(2f64.powi(-60));
//! let mut sum = ef64::ONE;
//! for _ in 0 .. 1024 {
//!   sum += tiny;
//! }
//! assert_eq!(sum.value(), 1.0 + 2f64.powi(-50));
//!
//! // Compute π in any precision.
//! let pi: ef64 = compute_pi(5)?;
//! assert_eq!(pi.value(), core::f64::consts::PI);
//! # Ok::<(), extended_float::Error>(())
//! ```
//!
//! # Logging
//!
//! The solver logs through the [`log`] facade: each round at `trace` level, each finished
//! computation and each square root that fails to reach its tolerance at `debug` level. The
//! crate never installs a logger.
//!
//! This crate includes benchmarks; run them with `cargo bench -F bench`.

mod extended;
mod underlying;
mod numeric;
mod error;
pub mod gauss_legendre;

pub use extended::ExtendedFloat;
pub use underlying::Primitive;
pub use numeric::Numeric;
pub use error::{Error, Result};
pub use gauss_legendre::{Counter, GaussLegendre, Observer, SqrtPolicy, compute_pi};

/// Extended float made of two `f32`s (~48 significant bits).
#[allow(non_camel_case_types)]
pub type ef32 = ExtendedFloat<f32>;

/// Extended float made of two `f64`s (~106 significant bits).
#[allow(non_camel_case_types)]
pub type ef64 = ExtendedFloat<f64>;

/// Number of cases for each proptest. Every case is checked against an exact rational result,
/// which is slow in debug builds.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x400} else {0x1_0000};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;
