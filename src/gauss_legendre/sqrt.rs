//! Square roots by Newton–Raphson (Babylonian) iteration.

use log::debug;

use crate::Numeric;
use crate::error::{Error, Result};

/// How many Newton–Raphson iterations a square root runs.
///
/// ```
/// # use extended_float::SqrtPolicy;
/// assert_eq!(SqrtPolicy::default(), SqrtPolicy::Fixed { iterations: 32 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SqrtPolicy {
  /// Run exactly this many iterations, regardless of convergence. Fully deterministic.
  Fixed {
    iterations: u32,
  },
  /// Stop as soon as an iteration changes the guess by at most `epsilon` relative to the new
  /// guess, or after `max_iterations`, whichever comes first. An `epsilon` of `None` means the
  /// [precision](Numeric::EPSILON) of the number type.
  Tolerance {
    epsilon: Option<f64>,
    max_iterations: u32,
  },
}

impl SqrtPolicy {
  /// Number of iterations of the default policy. From a seed that is already accurate to a
  /// primitive, two or three are enough in practice.
  pub const DEFAULT_ITERATIONS: u32 = 32;

  /// Check that the policy can produce a result: at least one iteration, and a finite, strictly
  /// positive tolerance.
  pub fn validate(self) -> Result<Self> {
    match self {
      Self::Fixed { iterations: 0 } | Self::Tolerance { max_iterations: 0, .. } =>
        Err(Error::ZeroIterations),
      Self::Tolerance { epsilon: Some(epsilon), .. } if !(epsilon.is_finite() && epsilon > 0.) =>
        Err(Error::InvalidTolerance(epsilon)),
      _ => Ok(self),
    }
  }
}

impl Default for SqrtPolicy {
  fn default() -> Self {
    Self::Fixed { iterations: Self::DEFAULT_ITERATIONS }
  }
}

/// Refine `seed` towards the square root of `x`, by iterating `guess = (guess + x / guess) / 2`
/// as prescribed by `policy`.
///
/// The square root of 0 is 0. For negative `x` there is no fixed point, and the result is
/// meaningless (typically NaN, or whatever the last guess was); use [`try_sqrt`] or check the
/// sign beforehand.
///
/// ```
/// # use extended_float::{SqrtPolicy, ef64, gauss_legendre::sqrt::newton};
/// let two = ef64::from_value(2.0);
/// let root = newton(two, ef64::ONE, SqrtPolicy::default());
/// assert_eq!(root * root, two);
/// ```
pub fn newton<T: Numeric>(x: T, seed: T, policy: SqrtPolicy) -> T {
  if x == T::from_f64(0.) {
    return x
  }
  let half = T::from_f64(0.5);
  let step = |guess: T| (guess + x / guess) * half;
  match policy {
    SqrtPolicy::Fixed { iterations } => (0 .. iterations).fold(seed, |guess, _| step(guess)),
    SqrtPolicy::Tolerance { epsilon, max_iterations } => {
      let epsilon = epsilon.unwrap_or(T::EPSILON);
      let mut guess = seed;
      for _ in 0 .. max_iterations {
        let next = step(guess);
        let delta = num_traits::Float::abs((next - guess).to_f64());
        if delta <= epsilon * num_traits::Float::abs(next.to_f64()) {
          return next
        }
        guess = next;
      }
      debug!("sqrt({x:?}) not within {epsilon:e} after {max_iterations} iterations: {guess:?}");
      guess
    },
  }
}

/// As [`Numeric::sqrt`], but returns an error for a negative `x` (rather than NaN) or an invalid
/// `policy`.
///
/// ```
/// # use extended_float::{Error, SqrtPolicy, ef64, gauss_legendre::try_sqrt};
/// assert_eq!(try_sqrt(ef64::from_value(4.0), SqrtPolicy::default()), Ok(ef64::TWO));
/// assert_eq!(try_sqrt(-1.0_f64, SqrtPolicy::default()), Err(Error::NegativeSqrt));
/// ```
pub fn try_sqrt<T: Numeric>(x: T, policy: SqrtPolicy) -> Result<T> {
  let policy = policy.validate()?;
  if x < T::from_f64(0.) {
    return Err(Error::NegativeSqrt)
  }
  Ok(x.sqrt(policy))
}
