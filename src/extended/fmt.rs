use super::*;

use core::fmt::{Debug, Display, LowerExp};

impl<P: crate::Primitive> Debug for ExtendedFloat<P> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let (head, tail) = (self.head, self.tail);
    f.debug_struct("ExtendedFloat")
      .field("head", &format_args!("{head:e}"))
      .field("tail", &format_args!("{tail:e}"))
      .finish()
  }
}

/// Formats the collapsed [`value`](ExtendedFloat::value); width, precision and sign flags are
/// forwarded as they are.
impl<P: crate::Primitive> Display for ExtendedFloat<P> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Display::fmt(&self.value(), f)
  }
}

impl<P: crate::Primitive> LowerExp for ExtendedFloat<P> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    LowerExp::fmt(&self.value(), f)
  }
}

#[cfg(test)]
mod tests {
  use crate::{ef32, ef64};

  #[test]
  fn debug() {
    assert_eq!(
      format!("{:?}", ef64::from_parts(1.0, 2f64.powi(-60))).as_str(),
      "ExtendedFloat { head: 1e0, tail: 8.673617379884035e-19 }",
    );
    assert_eq!(
      format!("{:?}", ef32::from_value(-0.5)).as_str(),
      "ExtendedFloat { head: -5e-1, tail: 0e0 }",
    );
    assert_eq!(
      format!("{:?}", ef64::NAN).as_str(),
      "ExtendedFloat { head: NaN, tail: 0e0 }",
    );
  }

  #[test]
  fn display() {
    let x = ef64::from_parts(core::f64::consts::PI, 1.2e-16);
    assert_eq!(format!("{x}").as_str(), "3.141592653589793");
    assert_eq!(format!("{x:.3}").as_str(), "3.142");
    assert_eq!(format!("{x:>8.2}").as_str(), "    3.14");
    assert_eq!(format!("{}", ef32::INFINITY).as_str(), "inf");
  }

  #[test]
  fn lower_exp() {
    assert_eq!(format!("{:e}", ef64::from_value(1500.0)).as_str(), "1.5e3");
    assert_eq!(format!("{:.1e}", ef32::from_value(0.25)).as_str(), "2.5e-1");
  }
}
