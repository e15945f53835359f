//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::underlying::Sealed;
use crate::{ExtendedFloat, GaussLegendre, ef32, ef64};

impl<P: crate::Primitive> ExtendedFloat<P> {
  pub fn bench_add_kernel(x: Self, y: Self) -> Self {
    Self::add_kernel(x, y)
  }

  pub fn bench_mul_kernel(x: Self, y: Self) -> Self {
    Self::mul_kernel(x, y)
  }

  pub fn bench_div_kernel(x: Self, y: Self) -> Self {
    Self::div_kernel(x, y)
  }

  pub fn bench_normalize(head: P, tail: P) -> Self {
    Self::from_parts_unchecked(head, tail).normalize()
  }

  pub fn bench_two_prod(a: P, b: P) -> (P, P) {
    a.two_prod(b)
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn two_sum_f64(a: f64, b: f64) -> (f64, f64) {
  a.two_sum(b)
}

#[unsafe(no_mangle)]
pub fn two_prod_f64(a: f64, b: f64) -> (f64, f64) {
  a.two_prod(b)
}

#[unsafe(no_mangle)]
pub fn normalize_ef64(x: ef64) -> ef64 {
  x.normalize()
}

//

#[unsafe(no_mangle)]
pub fn add_ef32(x: ef32, y: ef32) -> ef32 {
  x.add(y)
}

#[unsafe(no_mangle)]
pub fn add_ef64(x: ef64, y: ef64) -> ef64 {
  x.add(y)
}

#[unsafe(no_mangle)]
pub fn mul_ef32(x: ef32, y: ef32) -> ef32 {
  x.mul(y)
}

#[unsafe(no_mangle)]
pub fn mul_ef64(x: ef64, y: ef64) -> ef64 {
  x.mul(y)
}

#[unsafe(no_mangle)]
pub fn div_ef32(x: ef32, y: ef32) -> ef32 {
  x.div(y)
}

#[unsafe(no_mangle)]
pub fn div_ef64(x: ef64, y: ef64) -> ef64 {
  x.div(y)
}

//

#[unsafe(no_mangle)]
pub fn pi_f64() -> f64 {
  GaussLegendre::default().compute()
}

#[unsafe(no_mangle)]
pub fn pi_ef64() -> ef64 {
  GaussLegendre::default().compute()
}
