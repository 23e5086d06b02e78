// src/coords/st_ij.rs
//! Quantization between continuous s/t coordinates and the integer leaf grid.

use crate::constants::{MAX_LEVEL, MAX_SIZE, MAX_SI_TI};
use crate::coords::face_uv::face_uv_to_xyz;
use crate::coords::projection::st_to_uv;
use crate::types::Point;

/// Quantizes `s` in `[0, 1]` onto the grid of `2^level` cells per face edge.
/// Out-of-range values clamp to the first or last cell. Levels above 30 use the leaf grid.
#[inline]
#[must_use]
pub fn st_to_ij(s: f64, level: u8) -> u32 {
  let size = 1u32 << level.min(MAX_LEVEL);
  let scaled = (f64::from(size) * s).floor();
  if scaled <= 0.0 {
    return 0;
  }
  if scaled >= f64::from(size - 1) {
    return size - 1;
  }
  scaled as u32
}

/// Leaf-level quantization, `st_to_ij(s, MAX_LEVEL)`.
#[inline]
#[must_use]
pub fn st_to_leaf_ij(s: f64) -> u32 {
  st_to_ij(s, MAX_LEVEL)
}

/// Lower edge, in s or t, of grid cell `i` at `level`. Levels above 30 use the leaf grid.
#[inline]
#[must_use]
pub fn ij_to_st_min(i: u32, level: u8) -> f64 {
  let size = 1u32 << level.min(MAX_LEVEL);
  debug_assert!(i <= size);
  f64::from(i) / f64::from(size)
}

/// Converts a doubled leaf coordinate (`2i`, `2i + 1` for a leaf centre) to s or t.
#[inline]
#[must_use]
pub fn si_ti_to_st(si: u32) -> f64 {
  debug_assert!(si <= MAX_SI_TI);
  f64::from(si) / f64::from(MAX_SI_TI)
}

/// Inverse of `si_ti_to_st`, rounding to the nearest doubled coordinate.
#[inline]
#[must_use]
pub fn st_to_si_ti(s: f64) -> u32 {
  let scaled = (s * f64::from(MAX_SI_TI)).round();
  scaled.clamp(0.0, f64::from(MAX_SI_TI)) as u32
}

/// Point on the cube surface for doubled leaf coordinates on `face`.
#[inline]
#[must_use]
pub fn face_si_ti_to_xyz(face: u8, si: u32, ti: u32) -> Point {
  let u = st_to_uv(si_ti_to_st(si));
  let v = st_to_uv(si_ti_to_st(ti));
  face_uv_to_xyz(face, u, v)
}

/// Number of leaf cells along the edge of a cell at `level`; 1 for any level past 30.
#[inline]
#[must_use]
pub const fn size_ij(level: u8) -> u32 {
  if level >= MAX_LEVEL {
    return 1;
  }
  MAX_SIZE >> level
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_levels_past_leaf_use_leaf_grid() {
    assert_eq!(size_ij(31), 1);
    assert_eq!(size_ij(200), 1);
    assert_eq!(st_to_ij(0.5, 40), st_to_ij(0.5, MAX_LEVEL));
    assert_eq!(st_to_ij(1.0, u8::MAX), MAX_SIZE - 1);
    assert!((ij_to_st_min(1 << 29, 64) - 0.5).abs() < 1e-15);
  }

  #[test]
  fn test_st_to_ij_clamps() {
    assert_eq!(st_to_ij(-0.25, 10), 0);
    assert_eq!(st_to_ij(0.0, 10), 0);
    assert_eq!(st_to_ij(1.0, 10), 1023);
    assert_eq!(st_to_ij(1.5, 10), 1023);
    assert_eq!(st_to_ij(0.5, 0), 0);
    assert_eq!(st_to_leaf_ij(1.0), MAX_SIZE - 1);
  }

  #[test]
  fn test_st_to_ij_cell_boundaries() {
    // The lower edge of a cell belongs to that cell.
    for level in [1u8, 5, 17, 30] {
      let size = 1u32 << level;
      for i in [0, 1, size / 3, size / 2, size - 1] {
        assert_eq!(st_to_ij(ij_to_st_min(i, level), level), i, "level {level} i {i}");
      }
    }
  }

  #[test]
  fn test_si_ti() {
    assert_eq!(si_ti_to_st(0), 0.0);
    assert_eq!(si_ti_to_st(MAX_SI_TI), 1.0);
    assert_eq!(si_ti_to_st(MAX_SI_TI / 2), 0.5);
    // Leaf centres sit at odd doubled coordinates and quantize back to their leaf.
    for i in [0u32, 1, 12345, MAX_SIZE - 1] {
      let centre = si_ti_to_st(2 * i + 1);
      assert_eq!(st_to_leaf_ij(centre), i);
      assert_eq!(st_to_si_ti(centre), 2 * i + 1);
    }
  }

  #[test]
  fn test_face_si_ti_to_xyz_centre() {
    let p = face_si_ti_to_xyz(2, MAX_SI_TI / 2, MAX_SI_TI / 2);
    assert_eq!(p.z, 1.0);
    assert!(p.x.abs() < 1e-15 && p.y.abs() < 1e-15);
  }

  #[test]
  fn test_size_ij() {
    assert_eq!(size_ij(0), MAX_SIZE);
    assert_eq!(size_ij(MAX_LEVEL), 1);
    assert_eq!(size_ij(29), 2);
  }
}
