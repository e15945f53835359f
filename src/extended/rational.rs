use super::*;

use core::str::FromStr;
use malachite::{Integer, rational::Rational};
use malachite::base::num::arithmetic::traits::{Abs, Pow, PowerOf2};

/// The error type returned when an [`ExtendedFloat`] cannot be converted to a [`Rational`]
/// because one of its components is infinite or NaN.
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct NotFinite;

impl<P: crate::Primitive> TryFrom<ExtendedFloat<P>> for Rational {
  type Error = NotFinite;

  /// The *exact* value `head + tail`, with no rounding whatsoever. This is what we check the
  /// double-word arithmetic against.
  fn try_from(value: ExtendedFloat<P>) -> Result<Self, Self::Error> {
    // Widening to `f64` is exact, so going through it is fine for both `f32` and `f64`.
    let head = Rational::try_from(value.head.as_f64()).map_err(|_| NotFinite)?;
    let tail = Rational::try_from(value.tail.as_f64()).map_err(|_| NotFinite)?;
    Ok(head + tail)
  }
}

/// π to 76 significant digits, far beyond what any type in this crate can hold.
pub fn pi_reference() -> Rational {
  const DIGITS: &str = "3141592653589793238462643383279502884197169399375105820974944592307816406286";
  let numerator = Integer::from_str(DIGITS).unwrap();
  let denominator = Integer::from(10).pow(DIGITS.len() as u64 - 1);
  Rational::from_integers(numerator, denominator)
}

/// Check whether `approx` is within a relative distance of `2^-bits` of `exact`.
pub fn is_accurate_to(approx: &Rational, exact: &Rational, bits: i64) -> bool {
  let error = (approx - exact).abs();
  error <= exact.abs() * Rational::power_of_2(-bits)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{ef32, ef64};

  #[test]
  fn exact_sum() {
    let x = ef64::from_parts(1.0, 2f64.powi(-60));
    assert_eq!(
      Rational::try_from(x),
      Ok(Rational::from(1) + Rational::power_of_2(-60i64)),
    );
    let x = ef32::from_parts(-3.0, 2f32.powi(-40));
    assert_eq!(
      Rational::try_from(x),
      Ok(Rational::from(-3) + Rational::power_of_2(-40i64)),
    );
  }

  #[test]
  fn not_finite() {
    assert_eq!(Rational::try_from(ef64::NAN), Err(NotFinite));
    assert_eq!(Rational::try_from(ef32::INFINITY), Err(NotFinite));
  }

  #[test]
  fn reference() {
    let pi = pi_reference();
    assert!(Rational::try_from(3.14159).unwrap() < pi);
    assert!(pi < Rational::try_from(3.1416).unwrap());
    assert!(is_accurate_to(&Rational::try_from(core::f64::consts::PI).unwrap(), &pi, 52));
    assert!(!is_accurate_to(&Rational::try_from(core::f64::consts::PI).unwrap(), &pi, 60));
  }
}
