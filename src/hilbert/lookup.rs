// src/hilbert/lookup.rs
//! Lazily built 4-level Hilbert lookup tables.

use std::sync::OnceLock;

use crate::constants::{INVERT_MASK, LOOKUP_BITS, LOOKUP_TABLE_SIZE, SWAP_MASK};
use crate::hilbert::{pos_to_ij, pos_to_orientation};

/// Lookup tables covering one group of `LOOKUP_BITS` levels.
///
/// `pos` is indexed by `(i << 6) | (j << 2) | orientation` (4 bits each of i and j)
/// and yields `(position << 2) | outgoing_orientation` with an 8-bit position chunk.
/// `ij` is the inverse: indexed by `(position << 2) | orientation`, it yields
/// `(i << 6) | (j << 2) | outgoing_orientation`.
#[derive(Debug, Clone)]
pub struct LookupTables {
  pub pos: [u16; LOOKUP_TABLE_SIZE],
  pub ij: [u16; LOOKUP_TABLE_SIZE],
}

static TABLES: OnceLock<LookupTables> = OnceLock::new();

/// The process-wide lookup tables, built on first use.
#[inline]
pub fn lookup_tables() -> &'static LookupTables {
  TABLES.get_or_init(LookupTables::build)
}

impl LookupTables {
  fn build() -> Self {
    let mut tables = LookupTables {
      pos: [0; LOOKUP_TABLE_SIZE],
      ij: [0; LOOKUP_TABLE_SIZE],
    };
    for orientation in [0, SWAP_MASK, INVERT_MASK, SWAP_MASK | INVERT_MASK] {
      tables.init_cell(0, 0, 0, orientation, 0, orientation);
    }
    tracing::debug!(entries = LOOKUP_TABLE_SIZE, "built Hilbert curve lookup tables");
    tables
  }

  /// Walks the curve `LOOKUP_BITS` levels deep below a cell, recording every leaf of
  /// the walk against the orientation the walk started with.
  fn init_cell(&mut self, level: u32, i: u16, j: u16, orig_orientation: u8, pos: u16, orientation: u8) {
    if level == LOOKUP_BITS {
      let ij = (i << LOOKUP_BITS) | j;
      self.pos[usize::from((ij << 2) | u16::from(orig_orientation))] = (pos << 2) | u16::from(orientation);
      self.ij[usize::from((pos << 2) | u16::from(orig_orientation))] = (ij << 2) | u16::from(orientation);
      return;
    }
    for sub_pos in 0..4u8 {
      let ij = pos_to_ij(orientation, sub_pos);
      self.init_cell(
        level + 1,
        (i << 1) | u16::from(ij >> 1),
        (j << 1) | u16::from(ij & 1),
        orig_orientation,
        (pos << 2) | u16::from(sub_pos),
        orientation ^ pos_to_orientation(sub_pos),
      );
    }
  }
}
