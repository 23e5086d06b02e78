// src/math/extensions.rs

/// Binary exponent of `x` in the `frexp` sense: `x = m * 2^exp` with `|m|` in `[0.5, 1)`.
///
/// Returns 0 for zero, infinities and NaN, which mirrors C's `frexp`.
#[inline]
pub(crate) fn _frexp_exp(x: f64) -> i32 {
  if x == 0.0 || !x.is_finite() {
    return 0;
  }
  let bits = x.to_bits();
  let biased = ((bits >> 52) & 0x7ff) as i32;
  if biased == 0 {
    // Subnormal: renormalize by scaling up 2^64.
    return _frexp_exp(x * f64::from_bits(0x43f0_0000_0000_0000)) - 64;
  }
  biased - 1022
}

/// Unbiased exponent of `x`: `floor(log2(|x|))` for finite non-zero `x`.
#[inline]
pub(crate) fn _ilogb(x: f64) -> i32 {
  _frexp_exp(x) - 1
}

/// `x * 2^exp`, computed exactly for the exponents metrics use.
#[inline]
pub(crate) fn _ldexp(x: f64, exp: i32) -> f64 {
  x * 2f64.powi(exp)
}
