//! This module and its submodules contain a software implementation of *double-word* floating
//! point numbers: a value is represented as the unevaluated sum of two machine floats, a `head`
//! and a `tail`, which together carry (roughly) twice as many mantissa bits as either one alone.
//!
//! The idea goes back to Dekker (1971). It is not arbitrary precision: the exponent range is
//! still that of the primitive type, and the precision is fixed at about `2 * MANTISSA_DIGITS`
//! bits. But it is *fast*, since every operation is a short, branch-light sequence of native
//! floating point instructions.
//!
//! Some notation used in the comments:
//!
//!   - **fl(x)**: the real number `x` rounded to the nearest primitive float (ties to even).
//!   - **ulp(x)**: unit in the last place, the gap between `x` and the next primitive float away
//!     from zero.
//!   - **Normalised**: a pair where `head = fl(head + tail)`, i.e. `|tail| ≤ ulp(head) / 2`. Every
//!     value returned by a public function of this module is normalised.

/// A double-word extended precision float, made of two `P` components.
///
/// The represented value is the *exact* real sum `head + tail`. The `tail` only ever holds what
/// the `head` cannot represent, so collapsing the pair with [`value`](Self::value) simply rounds
/// to the nearest `P`.
///
/// Examples:
///
/// ```
/// # use extended_float::ExtendedFloat;
/// type Foo = ExtendedFloat<f64>;  // ~106 significant bits, ~31 decimal digits
/// type Bar = ExtendedFloat<f32>;  // ~48 significant bits, ~14 decimal digits
/// ```
pub struct ExtendedFloat<P: crate::Primitive> {
  pub(crate) head: P,
  pub(crate) tail: P,
}

/// Basics: construction, normalisation, accessors.
mod basics;

/// Constants (zero, one, epsilon, etc).
mod consts;

/// Manual impls of Copy, Eq, Ord, etc, and the four-way comparison.
mod traits;

/// Arithmetic operations.
mod ops;

/// Negation and absolute value.
mod unary;

/// Conversions to and from primitive floats.
mod convert;

/// Debug and Display impls.
mod fmt;

/// Conversion to exact rationals, as a test oracle.
#[cfg(test)]
pub(crate) mod rational;

/// Test utilities.
#[cfg(test)]
mod test;
