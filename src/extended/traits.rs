use super::*;

use core::cmp::Ordering;

// `P` has bounds indirectly, via `Sealed`, so the derive macros would not find `P: Copy` etc.
// (and `PartialOrd` must not be the derived one anyway). Implement explicitly.

impl<P: crate::Primitive> Clone for ExtendedFloat<P> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<P: crate::Primitive> Copy for ExtendedFloat<P> {}

impl<P: crate::Primitive> PartialEq for ExtendedFloat<P> {
  /// Component-wise equality. For normalised pairs this is the same as equality of the exact
  /// values, since the representation of a value as a normalised pair is unique (up to the sign
  /// of zeros).
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.head == other.head && self.tail == other.tail
  }
}

impl<P: crate::Primitive> PartialOrd for ExtendedFloat<P> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.compare(other)
  }
}

impl<P: crate::Primitive> Default for ExtendedFloat<P> {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl<P: crate::Primitive> ExtendedFloat<P> {
  /// Compare two values: lexicographically by head, then by tail.
  ///
  /// Since both sides are normalised, this agrees with comparing the exact values `head + tail`:
  /// two different heads mean the values lie in disjoint intervals around each head. Returns
  /// `None` (*unordered*) iff some component of either side is NaN.
  ///
  /// ```
  /// # use extended_float::ef64;
  /// # use core::cmp::Ordering;
  /// let x = ef64::from_parts(1.0, 1e-20);
  /// assert_eq!(x.compare(&ef64::ONE), Some(Ordering::Greater));
  /// assert_eq!(x.compare(&ef64::NAN), None);
  /// ```
  pub fn compare(&self, other: &Self) -> Option<Ordering> {
    match self.head.partial_cmp(&other.head)? {
      Ordering::Equal => self.tail.partial_cmp(&other.tail),
      ordering => other.tail.partial_cmp(&self.tail).map(|_| ordering),
    }
  }
}
