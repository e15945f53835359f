use super::*;

impl<P: crate::Primitive> ExtendedFloat<P> {
  /// Construct the extended float nearest to the `f64` value `v`.
  ///
  /// For `ExtendedFloat<f64>` this is exact. For `ExtendedFloat<f32>`, the `f64` is cut in two:
  /// the head is `v` rounded to an `f32`, and the tail is what remains, rounded again. Since an
  /// `f64` has 53 bits of mantissa and the pair holds at least 48, the result is accurate to
  /// [`EPSILON`](Self::EPSILON) (or exact, if `v` has few enough significant bits).
  ///
  /// ```
  /// # use extended_float::ef32;
  /// let x = ef32::from_f64(core::f64::consts::PI);
  /// assert_eq!(x.head(), core::f32::consts::PI);
  /// assert!((x.to_f64() - core::f64::consts::PI).abs() < 1e-14);
  /// ```
  pub fn from_f64(v: f64) -> Self {
    let head = P::of_f64(v);
    if !head.is_finite() {
      return Self::from_value(head)
    }
    let tail = P::of_f64(v - head.as_f64());
    Self::from_parts(head, tail)
  }

  /// Collapse to the `f64` nearest to `head + tail`.
  ///
  /// For `ExtendedFloat<f64>` this is [`value`](Self::value); for `ExtendedFloat<f32>` it keeps
  /// more of the precision than the `f32` value would.
  pub fn to_f64(self) -> f64 {
    self.head.as_f64() + self.tail.as_f64()
  }
}

impl<P: crate::Primitive> From<P> for ExtendedFloat<P> {
  #[inline]
  fn from(value: P) -> Self {
    Self::from_value(value)
  }
}

impl From<f64> for ExtendedFloat<f32> {
  #[inline]
  fn from(value: f64) -> Self {
    Self::from_f64(value)
  }
}

#[cfg(test)]
mod tests {
  use crate::{ef32, ef64};
  use malachite::rational::Rational;
  use proptest::prelude::*;

  #[test]
  fn from_primitive() {
    assert_eq!(ef64::from(0.1), ef64::from_value(0.1));
    assert_eq!(ef32::from(0.1_f32), ef32::from_value(0.1));
  }

  #[test]
  fn f64_into_ef32() {
    let v = 1.0 + 2f64.powi(-40);
    let x = ef32::from(v);
    assert_eq!((x.head(), x.tail()), (1.0, 2f32.powi(-40)));
    assert_eq!(x.to_f64(), v);
  }

  #[test]
  fn f64_into_ef32_rounded() {
    // A sparse value fits exactly, even though it spans 53 bits.
    let v = 1.0 + 2f64.powi(-52);
    let x = ef32::from(v);
    assert_eq!((x.head(), x.tail()), (1.0, 2f32.powi(-52)));
    assert_eq!(x.to_f64(), v);
    // Here the head rounds up, which leaves a residual of 29 bits: too many for the tail.
    let v = 1.0 + 2f64.powi(-24) + 2f64.powi(-52);
    let x = ef32::from(v);
    assert_eq!((x.head(), x.tail()), (1.0, 2f32.powi(-24)));
    assert_ne!(x.to_f64(), v);
  }

  #[test]
  fn f64_into_ef32_non_finite() {
    assert_eq!(ef32::from(f64::INFINITY), ef32::INFINITY);
    assert_eq!(ef32::from(1e300), ef32::INFINITY);
    assert!(ef32::from(f64::NAN).is_nan());
    assert!(ef32::from(f64::NAN).is_normalised());
  }

  #[test]
  fn ef64_round_trip() {
    for v in [0.1, -1e300, 5e-324, core::f64::consts::E] {
      assert_eq!(ef64::from_f64(v).to_f64(), v);
    }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn f64_into_ef32_accurate(v in -1e30..1e30_f64) {
      let x = ef32::from(v);
      prop_assert!(x.is_normalised());
      let exact = Rational::try_from(v).unwrap();
      let error = Rational::try_from(x).unwrap() - &exact;
      let bound = Rational::try_from(v.abs() * ef32::EPSILON).unwrap();
      prop_assert!(error <= bound && -error <= bound);
    }
  }
}
