use super::*;

impl<P: crate::Primitive> ExtendedFloat<P> {
  /// Return the normalised quotient of `x` and `y`, by long division.
  #[inline]
  pub(crate) fn div_kernel(x: Self, y: Self) -> Self {
    // First approximation: just the quotient of the heads. This also takes care of all special
    // cases (division by 0, infinities, NaN) with the same IEEE semantics as `P`.
    let q1 = x.head / y.head;
    if !q1.is_finite() || !y.head.is_finite() {
      return Self::from_value(q1)
    }
    // Then, like in long division, compute the remainder `x - q1·y` in extended precision, and
    // divide it by `y` again to get the next "digit" of the quotient. Two such corrections give a
    // quotient with an error well below `EPSILON`.
    let r = x - y.scale(q1);
    let q2 = r.head / y.head;
    let r = r - y.scale(q2);
    let q3 = r.head / y.head;
    Self::from_parts(q1, q2) + Self::from_value(q3)
  }

  /// Return the quotient `self / other`.
  ///
  /// ```
  /// # use extended_float::ef64;
  /// let third = ef64::ONE / ef64::from_value(3.0);
  /// assert_eq!(third.head(), 1.0 / 3.0);
  /// assert_eq!(third * ef64::from_value(3.0), ef64::ONE);
  /// ```
  #[inline]
  pub fn div(self, other: Self) -> Self {
    Self::div_kernel(self, other)
  }
}

super::mk_ops!{Div, DivAssign, div, div_assign}
