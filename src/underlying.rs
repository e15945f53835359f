//! This module contains the primitive floating point operations that double-word arithmetic is
//! built from. These are hidden from the end-user, which only sees the sealed [`Primitive`] trait,
//! implemented for `f32` and `f64`.
//!
//! The interesting ones are the *error-free transformations*: operations that return the rounded
//! result of an IEEE operation **together with** its exact rounding error, as a second float. All
//! of double-word arithmetic is a careful composition of these.
//!
//! References:
//!
//!   - T. J. Dekker, "A floating-point technique for extending the available precision" (1971)
//!   - D. E. Knuth, *The Art of Computer Programming* vol. 2, §4.2.2
//!   - Y. Hida, X. S. Li, D. H. Bailey, "Library for double-double and quad-double arithmetic"

/// The trait for the primitive machine float types that can be used as the components of an
/// [`ExtendedFloat`](crate::ExtendedFloat) (only satisfied by `f32` and `f64`).
///
/// This is a *sealed* type.
pub trait Primitive: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  num_traits::Float +
  core::fmt::Debug + core::fmt::Display + core::fmt::LowerExp +
  Default + Send + Sync + 'static
{
  const ZERO: Self;
  const ONE: Self;
  const MINUS_ONE: Self;
  const HALF: Self;
  const TWO: Self;
  const NAN: Self;
  const INFINITY: Self;

  /// Number of significant binary digits, *including* the hidden bit (24 for `f32`, 53 for
  /// `f64`).
  const MANTISSA_DIGITS: u32;

  /// The Veltkamp splitting factor, `2^ceil(MANTISSA_DIGITS / 2) + 1`. Multiplying by it and
  /// subtracting back cuts a float into two halves of at most `MANTISSA_DIGITS / 2` bits each (see
  /// [`Sealed::split`]).
  const SPLITTER: Self;

  /// Machine epsilon of the type, as an `f64`.
  const EPSILON_F64: f64;

  /// Widen to an `f64` (exact).
  fn as_f64(self) -> f64;

  /// Narrow from an `f64`, rounding to nearest.
  fn of_f64(x: f64) -> Self;

  /// Returns `(s, e)` where `s = fl(self + other)` and `s + e = self + other` *exactly*.
  ///
  /// If `s` overflows, `e` is 0.
  #[inline]
  fn two_sum(self, other: Self) -> (Self, Self) {
    let s = self + other;
    if !s.is_finite() {
      return (s, Self::ZERO)
    }
    // Knuth's branch-free version: does not need |self| ≥ |other|. The only rounding errors are
    // in `s` itself; every other operation below is exact.
    let v = s - self;
    let e = (self - (s - v)) + (other - v);
    (s, e)
  }

  /// As [`Sealed::two_sum`], but `|self| >= |other|` must hold (or `self` is 0), otherwise the
  /// error term is not exact.
  #[inline]
  fn quick_two_sum(self, other: Self) -> (Self, Self) {
    let s = self + other;
    if !s.is_finite() {
      return (s, Self::ZERO)
    }
    let e = other - (s - self);
    (s, e)
  }

  /// Split `self` into `(hi, lo)` with `hi + lo = self` exactly, where both `hi` and `lo` fit in
  /// half the mantissa. The product of two halves is therefore always exact.
  ///
  /// ```ignore
  /// let (hi, lo) = 0.1_f64.split();
  /// assert_eq!(hi.to_bits() & ((1 << 27) - 1), 0);
  /// assert_eq!(hi + lo, 0.1);
  /// ```
  ///
  /// Overflows (to NaN) if `|self|` is within `SPLITTER` of the largest finite value.
  #[inline]
  fn split(self) -> (Self, Self) {
    let t = Self::SPLITTER * self;
    let hi = t - (t - self);
    let lo = self - hi;
    (hi, lo)
  }

  /// Returns `(p, e)` where `p = fl(self * other)` and `p + e = self * other` *exactly* (barring
  /// underflow of `e`).
  ///
  /// This is Dekker's algorithm, which only needs plain multiplications rather than a fused
  /// multiply-add: each operand is [`split`](Sealed::split) in halves, the four partial products
  /// are then exact, and subtracting them from `p` in decreasing order of magnitude yields the
  /// error exactly.
  ///
  /// If `p` is not finite, or the operands are too large to split, `e` is 0.
  #[inline]
  fn two_prod(self, other: Self) -> (Self, Self) {
    let p = self * other;
    if !p.is_finite() {
      return (p, Self::ZERO)
    }
    let (a_hi, a_lo) = self.split();
    let (b_hi, b_lo) = other.split();
    let e = ((a_hi * b_hi - p) + a_hi * b_lo + a_lo * b_hi) + a_lo * b_lo;
    if !e.is_finite() {
      return (p, Self::ZERO)
    }
    (p, e)
  }
}

/// Implementation of the constants and conversions; the error-free transformations are generic.
macro_rules! impl_common {
  ($float:ty) => {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const MINUS_ONE: Self = -1.0;
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;
    const NAN: Self = <$float>::NAN;
    const INFINITY: Self = <$float>::INFINITY;

    const MANTISSA_DIGITS: u32 = <$float>::MANTISSA_DIGITS;

    const SPLITTER: Self = {
      let half_digits = <$float>::MANTISSA_DIGITS.div_ceil(2);
      (1u64 << half_digits) as $float + 1.0
    };

    const EPSILON_F64: f64 = <$float>::EPSILON as f64;

    #[inline]
    fn as_f64(self) -> f64 { self as f64 }

    #[inline]
    fn of_f64(x: f64) -> Self { x as $float }
  }
}

impl Primitive for f32 {}
impl Sealed for f32 {
  impl_common!{f32}
}

impl Primitive for f64 {}
impl Sealed for f64 {
  impl_common!{f64}
}
