use super::*;

/// Addition and subtraction (`a - b` is simply `a + (-b)`).
mod add;

/// Multiplication, by another extended float or by a primitive.
mod mul;

/// Division.
mod div;

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl<P: crate::Primitive>
    core::ops::$trait<ExtendedFloat<P>> for ExtendedFloat<P> {
      type Output = ExtendedFloat<P>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name(rhs) }
    }

    impl<P: crate::Primitive>
    core::ops::$trait<&ExtendedFloat<P>> for ExtendedFloat<P> {
      type Output = ExtendedFloat<P>;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl<P: crate::Primitive>
    core::ops::$trait<ExtendedFloat<P>> for &ExtendedFloat<P> {
      type Output = ExtendedFloat<P>;

      #[inline]
      fn $name(self, rhs: ExtendedFloat<P>) -> Self::Output { (*self).$name(rhs) }
    }

    impl<P: crate::Primitive>
    core::ops::$trait<&ExtendedFloat<P>> for &ExtendedFloat<P> {
      type Output = ExtendedFloat<P>;

      #[inline]
      fn $name(self, rhs: &ExtendedFloat<P>) -> Self::Output { (*self).$name(*rhs) }
    }

    impl<P: crate::Primitive>
    core::ops::$trait_assign<ExtendedFloat<P>> for ExtendedFloat<P> {
      #[inline]
      fn $name_assign(&mut self, rhs: ExtendedFloat<P>) { *self = self.$name(rhs) }
    }

    impl<P: crate::Primitive>
    core::ops::$trait_assign<&ExtendedFloat<P>> for ExtendedFloat<P> {
      #[inline]
      fn $name_assign(&mut self, rhs: &ExtendedFloat<P>) { *self = self.$name(*rhs) }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantiating the suite of tests for a binary operator of extended floats: every
/// result must be normalised and within a few units of `EPSILON` of the exact rational result.
#[cfg(test)]
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt) => {
    use crate::ExtendedFloat;
    use crate::extended::rational::is_accurate_to;
    use malachite::rational::Rational;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = crate::ef64::ONE;
      let mut b = crate::ef64::MINUS_ONE;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
    }

    /// Aux function: check that `a $op b` is normalised and accurate to `2 * MANTISSA_DIGITS - 4`
    /// bits (i.e. to 16 times `EPSILON`).
    fn is_accurate<P: crate::Primitive>(a: ExtendedFloat<P>, b: ExtendedFloat<P>) -> bool {
      let result = a $op b;
      if !result.is_normalised() {
        return false
      }
      let (Ok(a), Ok(b)) = (Rational::try_from(a), Rational::try_from(b)) else {
        return result.is_nan()
      };
      if stringify!($op) == "/" && b == Rational::from(0) {
        return !result.is_finite()
      }
      let exact = a $op b;
      let Ok(result) = Rational::try_from(result) else {
        return false
      };
      if exact == Rational::from(0) {
        return result == exact
      }
      let bits = ExtendedFloat::<P>::MANTISSA_DIGITS - 4;
      is_accurate_to(&result, &exact, bits.into())
    }

    proptest!{
      #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

      #[test]
      fn ef64_proptest(a in crate::ef64::cases_proptest(), b in crate::ef64::cases_proptest()) {
        prop_assert!(is_accurate(a, b), "{:?} ⋅ {:?} = {:?}", a, b, a $op b)
      }

      #[test]
      fn ef32_proptest(a in crate::ef32::cases_proptest(), b in crate::ef32::cases_proptest()) {
        prop_assert!(is_accurate(a, b), "{:?} ⋅ {:?} = {:?}", a, b, a $op b)
      }

      #[test]
      fn ef64_proptest_close(a in crate::ef64::cases_proptest(), residual in -1.0..1.0_f64) {
        // Operands that agree in the head, so that `a - b` cancels catastrophically.
        let b = crate::ef64::from_parts(a.head(), residual * a.head() * 1e-20);
        prop_assert!(is_accurate(a, b), "{:?} ⋅ {:?} = {:?}", a, b, a $op b)
      }
    }
  }
}

#[cfg(test)]
pub(crate) use mk_tests;
