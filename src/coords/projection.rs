// src/coords/projection.rs
//! The s/t to u/v projections.

use crate::constants::{M_PI_2, M_PI_4};
use crate::types::Projection;

/// The projection used by every cell-id conversion in this crate.
pub const DEFAULT_PROJECTION: Projection = Projection::Quadratic;

impl Projection {
  /// Converts an s or t value in `[0, 1]` to the matching u or v value in `[-1, 1]`.
  #[inline]
  #[must_use]
  pub fn st_to_uv(self, s: f64) -> f64 {
    match self {
      Projection::Linear => 2.0 * s - 1.0,
      Projection::Tan => {
        // The scale factor keeps st_to_uv(1.0) at exactly 1.0 after rounding.
        let u = (M_PI_2 * s - M_PI_4).tan();
        u + (1.0 / (1u64 << 53) as f64) * u
      }
      Projection::Quadratic => {
        if s >= 0.5 {
          (1.0 / 3.0) * (4.0 * s * s - 1.0)
        } else {
          (1.0 / 3.0) * (1.0 - 4.0 * (1.0 - s) * (1.0 - s))
        }
      }
    }
  }

  /// Inverse of `st_to_uv`. Values outside `[-1, 1]` extrapolate smoothly.
  #[inline]
  #[must_use]
  pub fn uv_to_st(self, u: f64) -> f64 {
    match self {
      Projection::Linear => 0.5 * (u + 1.0),
      Projection::Tan => (2.0 * std::f64::consts::FRAC_1_PI) * (u.atan() + M_PI_4),
      Projection::Quadratic => {
        if u >= 0.0 {
          0.5 * (1.0 + 3.0 * u).sqrt()
        } else {
          1.0 - 0.5 * (1.0 - 3.0 * u).sqrt()
        }
      }
    }
  }
}

/// `st_to_uv` under `DEFAULT_PROJECTION`.
#[inline]
#[must_use]
pub fn st_to_uv(s: f64) -> f64 {
  DEFAULT_PROJECTION.st_to_uv(s)
}

/// `uv_to_st` under `DEFAULT_PROJECTION`.
#[inline]
#[must_use]
pub fn uv_to_st(u: f64) -> f64 {
  DEFAULT_PROJECTION.uv_to_st(u)
}

#[cfg(test)]
mod tests {
  use super::*;

  const ALL: [Projection; 3] = [Projection::Linear, Projection::Tan, Projection::Quadratic];

  #[test]
  fn test_endpoints() {
    for p in ALL {
      assert_eq!(p.st_to_uv(0.0), -1.0, "{p:?}");
      assert_eq!(p.st_to_uv(1.0), 1.0, "{p:?}");
      assert!(p.st_to_uv(0.5).abs() < 1e-15, "{p:?}");
      assert_eq!(p.uv_to_st(-1.0), 0.0, "{p:?}");
      assert_eq!(p.uv_to_st(1.0), 1.0, "{p:?}");
      assert!((p.uv_to_st(0.0) - 0.5).abs() < 1e-15, "{p:?}");
    }
  }

  #[test]
  fn test_round_trip() {
    for p in ALL {
      for k in 0..=1000 {
        let s = f64::from(k) / 1000.0;
        assert!((p.uv_to_st(p.st_to_uv(s)) - s).abs() < 1e-15, "{p:?} s={s}");
        let u = 2.0 * s - 1.0;
        assert!((p.st_to_uv(p.uv_to_st(u)) - u).abs() < 1e-15, "{p:?} u={u}");
      }
    }
  }

  #[test]
  fn test_monotonic() {
    for p in ALL {
      let mut prev = p.st_to_uv(0.0);
      for k in 1..=256 {
        let next = p.st_to_uv(f64::from(k) / 256.0);
        assert!(next > prev, "{p:?} not increasing at {k}");
        prev = next;
      }
    }
  }

  #[test]
  fn test_quadratic_is_default() {
    assert_eq!(DEFAULT_PROJECTION, Projection::default());
    assert_eq!(st_to_uv(0.75), Projection::Quadratic.st_to_uv(0.75));
    assert!((st_to_uv(0.75) - 5.0 / 12.0).abs() < 1e-15);
    assert!((uv_to_st(5.0 / 12.0) - 0.75).abs() < 1e-15);
  }
}
