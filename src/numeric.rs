//! The arithmetic contract that [`GaussLegendre`](crate::GaussLegendre) is generic over.

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::ExtendedFloat;
use crate::gauss_legendre::sqrt::{SqrtPolicy, newton};

/// A number type that the [Gauss–Legendre solver](crate::GaussLegendre) can run on.
///
/// Implemented for `f32`, `f64`, and [`ExtendedFloat`] over either; user types can implement it
/// too. All that is needed is the four arithmetic operations, comparisons, conversions from and
/// to `f64`, and a square root.
///
/// ```
/// # use extended_float::{Numeric, SqrtPolicy, ef64};
/// let two = ef64::from_f64(2.0);
/// let root = two.sqrt(SqrtPolicy::default());
/// assert_eq!(root * root, two);
/// ```
pub trait Numeric:
  Copy + PartialEq + PartialOrd + core::fmt::Debug +
  Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> +
  Neg<Output = Self>
{
  /// The relative precision of the type: the default convergence tolerance of a
  /// [tolerance-driven](SqrtPolicy::Tolerance) square root.
  const EPSILON: f64;

  /// The value of this type nearest to `v`.
  fn from_f64(v: f64) -> Self;

  /// The `f64` nearest to `self`.
  fn to_f64(self) -> f64;

  /// The square root of `self`.
  ///
  /// Types with a correctly rounded square root of their own, like the primitive floats, may
  /// ignore `policy`. Negative inputs give NaN.
  fn sqrt(self, policy: SqrtPolicy) -> Self;
}

macro_rules! impl_primitive {
  ($float:ty) => {
    impl Numeric for $float {
      const EPSILON: f64 = <$float>::EPSILON as f64;

      #[inline]
      fn from_f64(v: f64) -> Self { v as $float }

      #[inline]
      fn to_f64(self) -> f64 { self as f64 }

      #[inline]
      fn sqrt(self, _policy: SqrtPolicy) -> Self { num_traits::Float::sqrt(self) }
    }
  }
}

impl_primitive!{f32}
impl_primitive!{f64}

impl<P: crate::Primitive> Numeric for ExtendedFloat<P> {
  const EPSILON: f64 = ExtendedFloat::<P>::EPSILON;

  #[inline]
  fn from_f64(v: f64) -> Self { ExtendedFloat::from_f64(v) }

  #[inline]
  fn to_f64(self) -> f64 { ExtendedFloat::to_f64(self) }

  /// Newton–Raphson refinement of the primitive square root of the head, which is already
  /// accurate to half the precision of the pair.
  fn sqrt(self, policy: SqrtPolicy) -> Self {
    let seed = num_traits::Float::sqrt(self.head);
    // 0, negatives, infinities and NaN: nothing to refine.
    if !(self.head > P::ZERO) || !seed.is_finite() {
      return Self::from_value(seed)
    }
    newton(self, Self::from_value(seed), policy)
  }
}
