use super::*;

impl<P: crate::Primitive> ExtendedFloat<P> {
  /// Construct an extended float holding exactly the primitive value `v` (so the tail is 0).
  ///
  /// ```
  /// # use extended_float::ef64;
  /// let x = ef64::from_value(0.1);
  /// assert_eq!((x.head(), x.tail()), (0.1, 0.0));
  /// ```
  #[inline]
  pub fn from_value(v: P) -> Self {
    Self::from_parts_unchecked(v, P::ZERO).normalize()
  }

  /// Construct an extended float representing the exact sum `head + tail`.
  ///
  /// The pair does not need to be [normalised](Self::is_normalised), it is normalised before
  /// returning; so in general `from_parts(h, t).head() != h`.
  ///
  /// ```
  /// # use extended_float::ef64;
  /// let x = ef64::from_parts(1.0, 3.0);
  /// assert_eq!((x.head(), x.tail()), (4.0, 0.0));
  /// let y = ef64::from_parts(1.0, 1e-20);
  /// assert_eq!((y.head(), y.tail()), (1.0, 1e-20));
  /// ```
  #[inline]
  pub fn from_parts(head: P, tail: P) -> Self {
    Self::from_parts_unchecked(head, tail).normalize()
  }

  /// As [`Self::from_parts`], but does not normalise the pair.
  ///
  /// This is not *unsafe* in the Rust sense, but arithmetic on a pair that is not normalised
  /// silently loses the extra precision, and comparisons between such pairs are meaningless.
  /// Use only if `head == fl(head + tail)` is known to hold, or to inspect the effect of
  /// [`Self::normalize`].
  #[inline]
  pub const fn from_parts_unchecked(head: P, tail: P) -> Self {
    Self { head, tail }
  }

  /// The leading component.
  #[inline]
  pub const fn head(self) -> P {
    self.head
  }

  /// The trailing component, i.e. the part of the value that the head cannot represent.
  #[inline]
  pub const fn tail(self) -> P {
    self.tail
  }

  /// Collapse the pair to the nearest single primitive value, `fl(head + tail)`. Since `self` is
  /// normalised, this is always just `head`, but it is computed as the sum so that pairs built
  /// with [`Self::from_parts_unchecked`] collapse correctly as well.
  #[inline]
  pub fn value(self) -> P {
    self.head + self.tail
  }

  /// Re-split the pair so that the tail holds only what the head cannot represent, without
  /// changing the exact value `head + tail`.
  ///
  /// If the pair is already consistent, i.e. adding the tail to the head does not change the
  /// head, it is returned untouched. Otherwise the head becomes the rounded sum and the exact
  /// remainder of that rounding is moved into the tail. Non-finite sums collapse into the head,
  /// with a zero tail.
  ///
  /// ```
  /// # use extended_float::ef64;
  /// let x = ef64::from_parts_unchecked(0.5, 0.75);
  /// assert!(!x.is_normalised());
  /// assert!(x.normalize().is_normalised());
  /// assert_eq!(x.normalize().head(), 1.25);
  /// ```
  #[inline]
  pub fn normalize(self) -> Self {
    let sum = self.head + self.tail;
    let result = if !sum.is_finite() {
      Self { head: sum, tail: P::ZERO }
    } else if sum == self.head {
      self
    } else {
      let (head, tail) = self.head.two_sum(self.tail);
      Self { head, tail }
    };
    debug_assert!(result.is_normalised(), "{self:?} normalised to {result:?}");
    result
  }

  /// Checks whether `self` is *normalised*, i.e. whether `|tail| ≤ ulp(head) / 2`, or more
  /// precisely whether `head = fl(head + tail)` (ties are broken to even, like the rounding). A
  /// non-finite head must have a zero tail.
  #[inline]
  pub fn is_normalised(self) -> bool {
    if self.head.is_finite() {
      self.head + self.tail == self.head
    } else {
      self.tail == P::ZERO
    }
  }

  /// Returns `true` if the value is neither infinite nor NaN.
  #[inline]
  pub fn is_finite(self) -> bool {
    self.head.is_finite() && self.tail.is_finite()
  }

  /// Returns `true` if either component is NaN.
  #[inline]
  pub fn is_nan(self) -> bool {
    self.head.is_nan() || self.tail.is_nan()
  }
}
