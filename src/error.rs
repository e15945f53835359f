//! The error type of this crate.
//!
//! Note that arithmetic itself never fails: degenerate values (division by zero, square root of a
//! negative number, overflow) propagate as NaN or infinity, exactly like with primitive floats.
//! Errors are only returned for invalid *configurations*, and by the strict
//! [`try_sqrt`](crate::gauss_legendre::try_sqrt).

use thiserror::Error;

/// The error type for configuring and running a [`GaussLegendre`](crate::GaussLegendre) solver.
#[derive(Debug, Error)]
#[derive(Clone, Copy, PartialEq)]
pub enum Error {
  /// More rounds were requested than the solver supports. Each round doubles `p`, so past this
  /// limit it overflows for `f32`; long before that, no type in this crate gains any precision.
  #[error("{rounds} rounds requested, but at most {max} are supported")]
  TooManyRounds {
    rounds: u32,
    max: u32,
  },

  /// A square root policy that allows zero Newton iterations.
  #[error("square root policy must allow at least one iteration")]
  ZeroIterations,

  /// A square root tolerance that is not finite and strictly positive.
  #[error("invalid square root tolerance: {0}")]
  InvalidTolerance(f64),

  /// Square root of a negative number, from [`try_sqrt`](crate::gauss_legendre::try_sqrt).
  #[error("square root of a negative number")]
  NegativeSqrt,
}

/// Convenient Result type alias.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(
      Error::TooManyRounds { rounds: 100, max: 64 }.to_string(),
      "100 rounds requested, but at most 64 are supported",
    );
    assert_eq!(Error::InvalidTolerance(-1.0).to_string(), "invalid square root tolerance: -1");
    assert_eq!(Error::NegativeSqrt.to_string(), "square root of a negative number");
  }
}
