//! Hooks for watching a solver run.

use super::State;

/// Receives callbacks as a [`GaussLegendre`](super::GaussLegendre) computation progresses. Every
/// method defaults to doing nothing, so implement only the ones you need.
///
/// The unit type `()` is the observer that ignores everything.
pub trait Observer<T> {
  /// The initial state has been set up (this includes the square root of 2).
  fn start(&mut self, _state: &State<T>) {}

  /// Round number `index` (counting from 1) has been completed, resulting in `state`.
  fn round(&mut self, _index: u32, _state: &State<T>) {}

  /// A square root of `x` has been computed.
  fn sqrt(&mut self, _x: T, _root: T) {}

  /// The computation has finished with `result`.
  fn finish(&mut self, _result: T) {}
}

impl<T> Observer<T> for () {}

/// An [`Observer`] that counts events. One instance can be reused over many computations, and
/// the counts accumulate.
///
/// ```
/// # use extended_float::{Counter, GaussLegendre, ef64};
/// let mut counter = Counter::default();
/// let _: ef64 = GaussLegendre::default().compute_observed(&mut counter);
/// assert_eq!(counter, Counter { solves: 1, rounds: 5, sqrts: 6 });
/// ```
#[derive(Debug, Default)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Counter {
  /// Computations finished.
  pub solves: u32,
  /// Rounds completed.
  pub rounds: u32,
  /// Square roots evaluated.
  pub sqrts: u32,
}

impl<T> Observer<T> for Counter {
  fn round(&mut self, _index: u32, _state: &State<T>) {
    self.rounds += 1
  }

  fn sqrt(&mut self, _x: T, _root: T) {
    self.sqrts += 1
  }

  fn finish(&mut self, _result: T) {
    self.solves += 1
  }
}
