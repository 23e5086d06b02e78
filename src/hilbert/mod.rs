// src/hilbert/mod.rs
//! Hilbert-curve orientation rules and the lookup tables built from them.
//!
//! A cell's four children are visited in Hilbert order. Which quadrant comes at
//! which position depends on the parent's orientation, a 2-bit value combining
//! `SWAP_MASK` (i and j exchanged) and `INVERT_MASK` (both axes reversed). Quadrants
//! are written as `ij = (i_bit << 1) | j_bit`.

pub mod lookup;

use crate::constants::{INVERT_MASK, SWAP_MASK};

pub use lookup::{lookup_tables, LookupTables};

/// Quadrant `ij` visited at each curve position, per orientation.
#[rustfmt::skip]
const POS_TO_IJ: [[u8; 4]; 4] = [
  [0, 1, 3, 2], // canonical: (0,0), (0,1), (1,1), (1,0)
  [0, 2, 3, 1], // axes swapped
  [3, 2, 0, 1], // axes inverted
  [3, 1, 0, 2], // swapped and inverted
];

/// Inverse of `POS_TO_IJ`: curve position of each quadrant, per orientation.
#[rustfmt::skip]
const IJ_TO_POS: [[u8; 4]; 4] = [
  [0, 1, 3, 2],
  [0, 3, 1, 2],
  [2, 3, 1, 0],
  [2, 1, 3, 0],
];

/// Orientation change applied to the child at each curve position.
const POS_TO_ORIENTATION: [u8; 4] = [SWAP_MASK, 0, 0, INVERT_MASK | SWAP_MASK];

/// Quadrant `ij` of the child at curve position `pos` under `orientation`.
#[inline]
#[must_use]
pub fn pos_to_ij(orientation: u8, pos: u8) -> u8 {
  POS_TO_IJ[usize::from(orientation & 3)][usize::from(pos & 3)]
}

/// Curve position of quadrant `ij` under `orientation`.
#[inline]
#[must_use]
pub fn ij_to_pos(orientation: u8, ij: u8) -> u8 {
  IJ_TO_POS[usize::from(orientation & 3)][usize::from(ij & 3)]
}

/// Orientation flip for the child at curve position `pos`. XOR it into the parent's
/// orientation to get the child's.
#[inline]
#[must_use]
pub fn pos_to_orientation(pos: u8) -> u8 {
  POS_TO_ORIENTATION[usize::from(pos & 3)]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tables_are_inverse() {
    for orientation in 0..4u8 {
      for pos in 0..4u8 {
        assert_eq!(ij_to_pos(orientation, pos_to_ij(orientation, pos)), pos);
      }
    }
  }

  #[test]
  fn test_consecutive_quadrants_are_adjacent() {
    // Each step along the curve moves to an edge-adjacent quadrant: exactly one of
    // the i or j bits changes.
    for orientation in 0..4u8 {
      for pos in 0..3u8 {
        let a = pos_to_ij(orientation, pos);
        let b = pos_to_ij(orientation, pos + 1);
        assert_eq!((a ^ b).count_ones(), 1, "orientation {orientation} pos {pos}");
      }
    }
  }

  #[test]
  fn test_swap_and_invert_relations() {
    for pos in 0..4u8 {
      let ij = pos_to_ij(0, pos);
      let swapped = ((ij & 1) << 1) | (ij >> 1);
      assert_eq!(pos_to_ij(SWAP_MASK, pos), swapped);
      assert_eq!(pos_to_ij(INVERT_MASK, pos), 3 - ij);
    }
  }

  #[test]
  fn test_pos_to_orientation() {
    assert_eq!(pos_to_orientation(0), SWAP_MASK);
    assert_eq!(pos_to_orientation(1), 0);
    assert_eq!(pos_to_orientation(2), 0);
    assert_eq!(pos_to_orientation(3), SWAP_MASK | INVERT_MASK);
  }
}
