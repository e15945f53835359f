use super::*;

impl<P: crate::Primitive> ExtendedFloat<P> {
  /// Return the normalised sum of `x` and `y`.
  ///
  /// Both the heads and the tails are added with an exact
  /// [`two_sum`](crate::underlying::Sealed::two_sum); the rounding error of the heads is then
  /// folded together with the sum of the tails, in two steps.
  /// This is the "accurate" double-word sum: unlike the cheaper variant that adds the tails with a
  /// plain `+`, its relative error stays within a small multiple of [`Self::EPSILON`] even when
  /// `x` and `y` nearly cancel.
  #[inline]
  pub(crate) fn add_kernel(x: Self, y: Self) -> Self {
    let (s1, s2) = x.head.two_sum(y.head);
    let (t1, t2) = x.tail.two_sum(y.tail);
    let (s1, s2) = s1.quick_two_sum(s2 + t1);
    let (s1, s2) = s1.quick_two_sum(s2 + t2);
    Self::from_parts(s1, s2)
  }

  /// Return the sum `self + other`.
  ///
  /// ```
  /// # use extended_float::ef64;
  /// let tiny = ef64::from_value(2f64.powi(-60));
  /// let x = ef64::ONE + tiny;
  /// assert_eq!((x.head(), x.tail()), (1.0, 2f64.powi(-60)));
  /// ```
  #[inline]
  pub fn add(self, other: Self) -> Self {
    Self::add_kernel(self, other)
  }

  /// Return the difference `self - other`.
  #[inline]
  pub fn sub(self, other: Self) -> Self {
    Self::add_kernel(self, -other)
  }
}

super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}

#[cfg(test)]
mod tests {
  use crate::{ef32, ef64};

  #[test]
  fn identity() {
    for x in [ef64::from_value(3.5), ef64::from_parts(1.0, 1e-20), ef64::from_value(-0.1)] {
      assert_eq!(x + ef64::ZERO, x);
      assert_eq!(ef64::ZERO + x, x);
      assert_eq!(x - ef64::ZERO, x);
      assert_eq!(x - x, ef64::ZERO);
    }
  }

  #[test]
  fn commutative() {
    let a = ef64::from_parts(1.0, 1e-17);
    let b = ef64::from_parts(-3.0e-5, 2.5e-22);
    assert_eq!(a + b, b + a);
    let a = ef32::from_parts(7.0, 1e-7);
    let b = ef32::from_parts(0.3, -1e-9);
    assert_eq!(a + b, b + a);
  }

  #[test]
  fn accumulate_below_ulp_f64() {
    // Each increment is far below half an ulp of 1, so a plain `f64` never moves.
    let tiny = 2f64.powi(-60);
    let mut native = 1.0_f64;
    let mut extended = ef64::ONE;
    for _ in 0 .. 1024 {
      native += tiny;
      extended += ef64::from_value(tiny);
    }
    assert_eq!(native, 1.0);
    assert_eq!((extended.head(), extended.tail()), (1.0 + 2f64.powi(-50), 0.0));
  }

  #[test]
  fn accumulate_below_ulp_f32() {
    let tiny = 2f32.powi(-30);
    let mut native = 1.0_f32;
    let mut extended = ef32::ONE;
    for _ in 0 .. 64 {
      native += tiny;
      extended += ef32::from_value(tiny);
    }
    assert_eq!(native, 1.0);
    // 1 + 2^-24 is a tie in `f32` and rounds to even, so the increments stay in the tail.
    assert_eq!((extended.head(), extended.tail()), (1.0, 2f32.powi(-24)));
    assert_eq!(extended.to_f64(), 1.0 + 2f64.powi(-24));
  }

  #[test]
  fn tails_are_summed() {
    // 1 + 2⁻⁵³ is a tie, so its head is 1; doubling it lands on a tie again.
    let a = ef64::from_parts(1.0, 2f64.powi(-53));
    let x = a + a;
    assert_eq!((x.head(), x.tail()), (2.0, 2f64.powi(-52)));
    let x = a + ef64::from_parts(1.0, 2f64.powi(-53) + 2f64.powi(-60));
    // Now the exact sum is just above the tie, so the head rounds up.
    assert_eq!((x.head(), x.tail()), (2.0 + 2f64.powi(-51), 2f64.powi(-60) - 2f64.powi(-52)));
  }

  #[test]
  fn cancellation() {
    let a = ef64::from_parts(1.0, 3.0 * 2f64.powi(-70));
    let b = ef64::from_parts(1.0, 2f64.powi(-70));
    assert_eq!(a - b, ef64::from_value(2f64.powi(-69)));
  }

  #[test]
  fn non_finite() {
    let inf = ef64::INFINITY;
    assert_eq!(inf + ef64::ONE, inf);
    assert_eq!(ef64::ONE - inf, -inf);
    assert!((inf - inf).is_nan());
    assert!((ef64::NAN + ef64::ONE).is_nan());
    let max = ef64::from_value(f64::MAX);
    assert_eq!(max + max, inf);
  }

  super::super::mk_tests!{+, +=}
}
