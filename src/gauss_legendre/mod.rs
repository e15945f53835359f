//! Computing π with the Gauss–Legendre (or Brent–Salamin) algorithm.
//!
//! Starting from
//!
//!   a₀ = 1,  b₀ = 1/√2,  p₀ = 1,  t₀ = 1/4
//!
//! each round computes
//!
//!   aₙ₊₁ = (aₙ + bₙ) / 2
//!   bₙ₊₁ = √(aₙ·bₙ)
//!   tₙ₊₁ = tₙ - pₙ·(aₙ - aₙ₊₁)²
//!   pₙ₊₁ = 2·pₙ
//!
//! and after any number of rounds, π ≈ (a + b)² / 4t. Convergence is quadratic: every round
//! roughly doubles the number of correct digits, so 3 rounds are enough for `f32`, 4 for `f64`,
//! and 5 for [`ExtendedFloat<f64>`](crate::ExtendedFloat). Past that point, more rounds gain
//! nothing, since the result is limited by the precision of the number type.
//!
//! The computation is generic over any [`Numeric`] type.
//!
//! ```
//! # use extended_float::{GaussLegendre, compute_pi, ef64};
//! let pi: f32 = compute_pi(5)?;
//! assert_eq!(pi, core::f32::consts::PI);
//!
//! let pi: ef64 = GaussLegendre::new(5)?.compute();
//! assert_eq!(pi.value(), core::f64::consts::PI);
//! assert!((pi.tail() - 1.2246467991473532e-16).abs() < 1e-31);
//! # Ok::<(), extended_float::Error>(())
//! ```

use log::{debug, trace};

use crate::Numeric;
use crate::error::{Error, Result};

/// Square roots.
pub mod sqrt;

/// Observer hooks.
mod observe;

pub use observe::{Counter, Observer};
pub use sqrt::{SqrtPolicy, try_sqrt};

/// A configured Gauss–Legendre solver: how many rounds to run, and how to compute square roots.
///
/// ```
/// # use extended_float::{GaussLegendre, SqrtPolicy};
/// let solver = GaussLegendre::new(4)?
///   .with_sqrt_policy(SqrtPolicy::Tolerance { epsilon: None, max_iterations: 10 })?;
/// let pi: f64 = solver.compute();
/// # Ok::<(), extended_float::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussLegendre {
  rounds: u32,
  sqrt: SqrtPolicy,
}

impl GaussLegendre {
  /// Number of rounds of the [default](Self::default) solver.
  pub const DEFAULT_ROUNDS: u32 = 5;

  /// Maximum number of rounds: `p` doubles every round, and must not overflow even for `f32`.
  pub const MAX_ROUNDS: u32 = 64;

  /// A solver running `rounds` rounds, with the default square root policy.
  ///
  /// Zero rounds is valid: the result is computed straight from the initial values,
  /// (1 + 1/√2)² ≈ 2.914.
  pub fn new(rounds: u32) -> Result<Self> {
    if rounds > Self::MAX_ROUNDS {
      return Err(Error::TooManyRounds { rounds, max: Self::MAX_ROUNDS })
    }
    Ok(Self { rounds, sqrt: SqrtPolicy::default() })
  }

  /// Replace the square root policy.
  pub fn with_sqrt_policy(self, policy: SqrtPolicy) -> Result<Self> {
    Ok(Self { sqrt: policy.validate()?, ..self })
  }

  /// The number of rounds this solver runs.
  pub fn rounds(&self) -> u32 {
    self.rounds
  }

  /// The square root policy of this solver.
  pub fn sqrt_policy(&self) -> SqrtPolicy {
    self.sqrt
  }

  /// Run the solver and return the approximation of π.
  pub fn compute<T: Numeric>(&self) -> T {
    self.compute_observed(&mut ())
  }

  /// As [`Self::compute`], calling back into `observer` as the computation progresses.
  pub fn compute_observed<T: Numeric, O: Observer<T>>(&self, observer: &mut O) -> T {
    let mut state = State::initial_observed(self.rounds, self.sqrt, observer);
    observer.start(&state);
    for index in 1 ..= self.rounds {
      state = state.step_observed(self.sqrt, observer);
      observer.round(index, &state);
      if log::log_enabled!(log::Level::Trace) {
        trace!("round {index}/{}: π ≈ {:?}", self.rounds, state.estimate());
      }
    }
    let result = state.estimate();
    debug!("Gauss–Legendre finished after {} rounds: π ≈ {result:?}", self.rounds);
    observer.finish(result);
    result
  }

  /// An iterator over the successive approximations of π: that of the initial state, then that
  /// after each round, for `rounds + 1` items in total. The last one is the result of
  /// [`Self::compute`].
  ///
  /// ```
  /// # use extended_float::GaussLegendre;
  /// let errors: Vec<f64> = GaussLegendre::new(3)?
  ///   .estimates::<f64>()
  ///   .map(|pi| (pi - core::f64::consts::PI).abs())
  ///   .collect();
  /// assert_eq!(errors.len(), 4);
  /// assert!(errors.is_sorted_by(|a, b| a > b));
  /// # Ok::<(), extended_float::Error>(())
  /// ```
  pub fn estimates<T: Numeric>(&self) -> Estimates<T> {
    Estimates {
      state: Some(State::initial(self.rounds, self.sqrt)),
      sqrt: self.sqrt,
    }
  }
}

impl Default for GaussLegendre {
  fn default() -> Self {
    Self { rounds: Self::DEFAULT_ROUNDS, sqrt: SqrtPolicy::default() }
  }
}

/// Approximate π by running `rounds` rounds of the Gauss–Legendre algorithm with the default
/// square root policy, in the number type `T`.
///
/// ```
/// # use extended_float::{compute_pi, ef32};
/// let pi: ef32 = compute_pi(5)?;
/// assert_eq!(pi.value(), core::f32::consts::PI);
/// assert!((pi.to_f64() - core::f64::consts::PI).abs() < 1e-13);
/// # Ok::<(), extended_float::Error>(())
/// ```
pub fn compute_pi<T: Numeric>(rounds: u32) -> Result<T> {
  Ok(GaussLegendre::new(rounds)?.compute())
}

/// The state of a Gauss–Legendre computation: the four running values, and how many rounds are
/// still to go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<T> {
  a: T,
  b: T,
  p: T,
  t: T,
  rounds_remaining: u32,
}

impl<T: Copy> State<T> {
  /// The arithmetic mean, starting at 1.
  pub fn a(&self) -> T { self.a }
  /// The geometric mean, starting at 1/√2.
  pub fn b(&self) -> T { self.b }
  /// The power of two that weights each correction to `t`, starting at 1.
  pub fn p(&self) -> T { self.p }
  /// The accumulated correction term, starting at 1/4.
  pub fn t(&self) -> T { self.t }

  /// How many more times [`step`](Self::step) will advance the state.
  pub fn rounds_remaining(&self) -> u32 {
    self.rounds_remaining
  }

  /// Whether there are no more rounds to run.
  pub fn is_terminal(&self) -> bool {
    self.rounds_remaining == 0
  }
}

impl<T: Numeric> State<T> {
  /// The initial state, `a = 1`, `b = 1/√2`, `p = 1`, `t = 1/4`, with `rounds` rounds to go.
  pub fn initial(rounds: u32, sqrt: SqrtPolicy) -> Self {
    Self::initial_observed(rounds, sqrt, &mut ())
  }

  /// Run one round. Stepping a terminal state is allowed; it simply keeps `rounds_remaining` at
  /// 0.
  pub fn step(self, sqrt: SqrtPolicy) -> Self {
    self.step_observed(sqrt, &mut ())
  }

  /// The approximation of π given by this state, `(a + b)² / 4t`.
  pub fn estimate(&self) -> T {
    let s = self.a + self.b;
    (s * s) / (T::from_f64(4.) * self.t)
  }

  fn initial_observed<O: Observer<T>>(rounds: u32, sqrt: SqrtPolicy, observer: &mut O) -> Self {
    let one = T::from_f64(1.);
    Self {
      a: one,
      b: one / sqrt_observed(T::from_f64(2.), sqrt, observer),
      p: one,
      t: T::from_f64(0.25),
      rounds_remaining: rounds,
    }
  }

  fn step_observed<O: Observer<T>>(self, sqrt: SqrtPolicy, observer: &mut O) -> Self {
    let two = T::from_f64(2.);
    let a_next = (self.a + self.b) / two;
    // `b` is the geometric mean of the *previous* `a` and `b`.
    let b_next = sqrt_observed(self.a * self.b, sqrt, observer);
    let d = self.a - a_next;
    Self {
      a: a_next,
      b: b_next,
      p: two * self.p,
      t: self.t - self.p * d * d,
      rounds_remaining: self.rounds_remaining.saturating_sub(1),
    }
  }
}

fn sqrt_observed<T: Numeric, O: Observer<T>>(x: T, policy: SqrtPolicy, observer: &mut O) -> T {
  let root = x.sqrt(policy);
  observer.sqrt(x, root);
  root
}

/// The iterator returned by [`GaussLegendre::estimates`].
#[derive(Debug, Clone)]
pub struct Estimates<T> {
  state: Option<State<T>>,
  sqrt: SqrtPolicy,
}

impl<T: Numeric> Iterator for Estimates<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    let state = self.state.take()?;
    if !state.is_terminal() {
      self.state = Some(state.step(self.sqrt))
    }
    Some(state.estimate())
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.state.as_ref().map_or(0, |state| state.rounds_remaining as usize + 1);
    (len, Some(len))
  }
}

impl<T: Numeric> ExactSizeIterator for Estimates<T> {}
