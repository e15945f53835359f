use super::*;

impl<P: crate::Primitive> ExtendedFloat<P> {
  /// A [proptest Strategy](proptest::strategy::Strategy) that yields finite, normalised values
  /// of either sign with a non-trivial tail, spread over 60 binades around 1.
  ///
  /// The range is narrow enough that no product or quotient of two cases comes near to
  /// overflowing or underflowing, even for `ExtendedFloat<f32>`.
  pub(crate) fn cases_proptest() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    (
      any::<bool>(),
      1.0 .. 2.0_f64,
      -30 .. 30_i32,
      -1.0 .. 1.0_f64,
    ).prop_map(|(negative, mantissa, exp, residual)| {
      let sign = if negative {-1.0} else {1.0};
      let head = P::of_f64(sign * mantissa * 2f64.powi(exp));
      let tail = P::of_f64(residual * head.as_f64() * P::EPSILON_F64);
      Self::from_parts(head, tail)
    })
  }
}

#[cfg(test)]
mod tests {
  use crate::{ef32, ef64};
  use proptest::prelude::*;

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn cases_are_normalised(a in ef64::cases_proptest(), b in ef32::cases_proptest()) {
      prop_assert!(a.is_normalised() && a.is_finite());
      prop_assert!(b.is_normalised() && b.is_finite());
    }
  }
}
