use super::*;

impl<P: crate::Primitive> ExtendedFloat<P> {
  /// Zero (`0`), the additive identity element.
  pub const ZERO: Self = Self { head: P::ZERO, tail: P::ZERO };

  /// One (`1`), the multiplicative identity element.
  pub const ONE: Self = Self { head: P::ONE, tail: P::ZERO };

  /// Negative one (`-1`).
  pub const MINUS_ONE: Self = Self { head: P::MINUS_ONE, tail: P::ZERO };

  /// One half (`0.5`).
  pub const HALF: Self = Self { head: P::HALF, tail: P::ZERO };

  /// Two (`2`).
  pub const TWO: Self = Self { head: P::TWO, tail: P::ZERO };

  /// Not-a-number. Note that NaN is never equal to itself, like for primitive floats.
  pub const NAN: Self = Self { head: P::NAN, tail: P::ZERO };

  /// Positive infinity.
  pub const INFINITY: Self = Self { head: P::INFINITY, tail: P::ZERO };

  /// Number of significant binary digits of the pair: two mantissas, i.e. 48 for
  /// `ExtendedFloat<f32>` and 106 for `ExtendedFloat<f64>`.
  ///
  /// This is a lower bound: a pair like `1 + 2⁻¹⁰⁰⁰` is exactly representable, though it needs
  /// many more digits.
  pub const MANTISSA_DIGITS: u32 = 2 * P::MANTISSA_DIGITS;

  /// Relative precision of the pair, as an `f64`: the square of the machine epsilon of `P`.
  pub const EPSILON: f64 = P::EPSILON_F64 * P::EPSILON_F64;
}
