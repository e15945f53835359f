use super::*;

impl<P: crate::Primitive> core::ops::Neg for ExtendedFloat<P> {
  type Output = ExtendedFloat<P>;

  /// Negating both components is exact, and preserves normalisation.
  #[inline]
  fn neg(self) -> Self::Output {
    ExtendedFloat { head: -self.head, tail: -self.tail }
  }
}

impl<P: crate::Primitive> core::ops::Neg for &ExtendedFloat<P> {
  type Output = ExtendedFloat<P>;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}

impl<P: crate::Primitive> ExtendedFloat<P> {
  /// Return the absolute value of `self`. The sign of the value is the sign of the head (the
  /// tail of a normalised value can have either sign), so this is exact.
  ///
  /// ```
  /// # use extended_float::ef64;
  /// let x = ef64::from_parts(-1.0, 1e-20);
  /// assert_eq!(x.abs(), ef64::from_parts(1.0, -1e-20));
  /// ```
  #[inline]
  pub fn abs(self) -> Self {
    if self.head.is_sign_negative() {-self} else {self}
  }
}
