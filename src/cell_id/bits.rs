// src/cell_id/bits.rs
//! Bit-level helpers behind the cell-id layout.
//!
//! An id is `face (3 bits) | position (2 bits per level) | 1 | 0...`. The lowest set
//! bit is the level sentinel: at level `L` it sits at bit `2 * (30 - L)`, so a leaf has
//! bit 0 set and a face cell bit 60. Every descendant of a cell lies strictly within
//! `id - (lsb - 1) ..= id + (lsb - 1)`.

use crate::constants::{MAX_LEVEL, NUM_FACES, POS_BITS, POS_MASK, SENTINEL_POSITIONS};

/// The lowest set bit of `id` (its level sentinel), or 0 for the zero id.
#[inline(always)]
#[must_use]
pub const fn lowest_on_bit(id: u64) -> u64 {
  id & id.wrapping_neg()
}

/// The sentinel bit of a cell at `level`. `level` must be at most `MAX_LEVEL`.
#[inline(always)]
#[must_use]
pub const fn lowest_on_bit_for_level(level: u8) -> u64 {
  1u64 << (2 * (MAX_LEVEL - level) as u32)
}

/// Level encoded by the sentinel of `id`. Meaningless (0) for the zero id.
#[inline(always)]
#[must_use]
pub const fn level_of(id: u64) -> u8 {
  let half = id.trailing_zeros() >> 1;
  if half >= MAX_LEVEL as u32 {
    return 0;
  }
  MAX_LEVEL - half as u8
}

/// Face number stored in the top 3 bits. May be 6 or 7 for invalid ids.
#[inline(always)]
#[must_use]
pub const fn face_of(id: u64) -> u8 {
  (id >> POS_BITS) as u8
}

/// Position bits: everything below the face, sentinel included.
#[inline(always)]
#[must_use]
pub const fn pos_of(id: u64) -> u64 {
  id & POS_MASK
}

/// True when the face is in range and the sentinel sits at a level boundary.
#[inline(always)]
#[must_use]
pub const fn is_valid_id(id: u64) -> bool {
  face_of(id) < NUM_FACES && (lowest_on_bit(id) & SENTINEL_POSITIONS) != 0
}

/// Replaces the sentinel of `id` with the one for `level`, clearing finer position bits.
/// `level` must not exceed the level of `id`.
#[inline(always)]
#[must_use]
pub const fn truncate_to_level(id: u64, level: u8) -> u64 {
  let lsb = lowest_on_bit_for_level(level);
  (id & lsb.wrapping_neg()) | lsb
}
