use super::*;

impl<P: crate::Primitive> ExtendedFloat<P> {
  /// Return the normalised product of `x` and `y`.
  ///
  /// Writing `x = xh + xt` and `y = yh + yt`, the product is
  ///
  ///   xh·yh + (xh·yt + xt·yh) + xt·yt
  ///
  /// The first term is computed exactly with [`two_prod`](crate::underlying::Sealed::two_prod).
  /// The cross terms are each about `EPSILON_P` smaller and only need to be accurate to a
  /// primitive, so they are computed with plain products and added to the error of the first
  /// term. The last term is below the precision of the result and is dropped entirely.
  #[inline]
  pub(crate) fn mul_kernel(x: Self, y: Self) -> Self {
    let (p, e) = x.head.two_prod(y.head);
    if !p.is_finite() {
      return Self::from_value(p)
    }
    let cross = x.head * y.tail + x.tail * y.head;
    let (p, e) = p.quick_two_sum(e + cross);
    Self::from_parts(p, e)
  }

  /// Return the product `self × other`.
  ///
  /// ```
  /// # use extended_float::ef64;
  /// let x = ef64::from_value(1.0 + 2f64.powi(-30));
  /// let y = x * x;
  /// assert_eq!((y.head(), y.tail()), (1.0 + 2f64.powi(-29), 2f64.powi(-60)));
  /// ```
  #[inline]
  pub fn mul(self, other: Self) -> Self {
    Self::mul_kernel(self, other)
  }

  /// Return the product `self × c`, where `c` is a single primitive float. This is a bit cheaper
  /// than multiplying by `ExtendedFloat::from_value(c)`, since one of the cross terms is known to
  /// be 0.
  #[inline]
  pub fn scale(self, c: P) -> Self {
    let (p, e) = self.head.two_prod(c);
    if !p.is_finite() {
      return Self::from_value(p)
    }
    let (p, e) = p.quick_two_sum(e + self.tail * c);
    Self::from_parts(p, e)
  }
}

super::mk_ops!{Mul, MulAssign, mul, mul_assign}

#[cfg(test)]
mod tests {
  use crate::{ef32, ef64};

  #[test]
  fn identity() {
    for x in [ef64::from_value(3.5), ef64::from_parts(1.0, 1e-20), ef64::from_value(-0.1)] {
      assert_eq!(x * ef64::ONE, x);
      assert_eq!(ef64::ONE * x, x);
      assert_eq!(x * ef64::MINUS_ONE, -x);
      assert_eq!(x * ef64::ZERO, ef64::ZERO);
    }
  }

  #[test]
  fn commutative() {
    let a = ef64::from_parts(1.0, 1e-17);
    let b = ef64::from_parts(-3.0e-5, 2.5e-22);
    assert_eq!(a * b, b * a);
    let a = ef32::from_parts(7.0, 1e-7);
    let b = ef32::from_parts(0.3, -1e-9);
    assert_eq!(a * b, b * a);
  }

  #[test]
  fn exact_square() {
    // (1 + 2⁻³⁰)² = 1 + 2⁻²⁹ + 2⁻⁶⁰, the last term is lost by a plain `f64` product.
    let x = ef64::from_value(1.0 + 2f64.powi(-30));
    let y = x * x;
    assert_eq!((y.head(), y.tail()), (1.0 + 2f64.powi(-29), 2f64.powi(-60)));
    // Same with `f32`: (1 + 2⁻¹⁵)² = 1 + 2⁻¹⁴ + 2⁻³⁰.
    let x = ef32::from_value(1.0 + 2f32.powi(-15));
    let y = x * x;
    assert_eq!((y.head(), y.tail()), (1.0 + 2f32.powi(-14), 2f32.powi(-30)));
  }

  #[test]
  fn third_times_three() {
    let third = ef64::ONE / ef64::from_value(3.0);
    assert_eq!(third * ef64::from_value(3.0), ef64::ONE);
    assert_eq!(third.scale(3.0), ef64::ONE);
  }

  #[test]
  fn scale() {
    let x = ef64::from_parts(1.0, 1e-20);
    assert_eq!(x.scale(2.0), x + x);
    assert_eq!(x.scale(1.0), x);
    assert_eq!(x.scale(-0.5), x * ef64::from_value(-0.5));
    assert_eq!(x.scale(f64::INFINITY), ef64::INFINITY);
  }

  #[test]
  fn non_finite() {
    let inf = ef64::INFINITY;
    assert_eq!(inf * ef64::TWO, inf);
    assert_eq!(inf * ef64::from_parts(-1.0, 1e-20), -inf);
    assert!((inf * ef64::ZERO).is_nan());
    assert!((ef64::NAN * ef64::ONE).is_nan());
    let big = ef64::from_value(1e200);
    assert_eq!(big * big, inf);
  }

  super::super::mk_tests!{*, *=}
}
