// src/iterators.rs
//! Iteration over runs of same-level cells in Hilbert order.

use std::iter::FusedIterator;

use crate::types::{CellId, S2Error};

/// The cells of one level from `begin` (inclusive) to `end` (exclusive), in Hilbert
/// order. `end` is usually a `child_end` or `CellId::end` sentinel and need not be a
/// valid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellIdRange {
  next: CellId,
  end: CellId,
}

impl CellIdRange {
  /// Both ends must be at the same level.
  #[must_use]
  pub fn new(begin: CellId, end: CellId) -> Self {
    debug_assert_eq!(begin.lsb(), end.lsb(), "range ends are at different levels");
    Self { next: begin, end }
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.next >= self.end
  }

  fn remaining(&self) -> u64 {
    if self.is_empty() {
      return 0;
    }
    (self.end.id() - self.next.id()) / (self.next.lsb() << 1)
  }
}

impl Iterator for CellIdRange {
  type Item = CellId;

  fn next(&mut self) -> Option<CellId> {
    if self.is_empty() {
      return None;
    }
    let current = self.next;
    self.next = current.next();
    Some(current)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    // Leaf-level ranges can exceed usize on 32-bit targets.
    match usize::try_from(self.remaining()) {
      Ok(n) => (n, Some(n)),
      Err(_) => (usize::MAX, None),
    }
  }

  fn nth(&mut self, n: usize) -> Option<CellId> {
    if (n as u64) >= self.remaining() {
      self.next = self.end;
      return None;
    }
    let step = self.next.lsb() << 1;
    self.next = CellId(self.next.id() + n as u64 * step);
    self.next()
  }
}

impl DoubleEndedIterator for CellIdRange {
  fn next_back(&mut self) -> Option<CellId> {
    if self.is_empty() {
      return None;
    }
    self.end = self.end.prev();
    Some(self.end)
  }
}

impl ExactSizeIterator for CellIdRange {}

impl FusedIterator for CellIdRange {}

impl CellId {
  /// All descendants of this cell at `level`.
  ///
  /// # Errors
  ///
  /// As `child_begin_at_level`.
  pub fn child_range(self, level: u8) -> Result<CellIdRange, S2Error> {
    Ok(CellIdRange::new(self.child_begin_at_level(level)?, self.child_end_at_level(level)?))
  }

  /// Every cell at `level` on all six faces.
  ///
  /// # Errors
  ///
  /// `LevelInvalid` if `level > 30`.
  pub fn level_range(level: u8) -> Result<CellIdRange, S2Error> {
    Ok(CellIdRange::new(CellId::begin(level)?, CellId::end(level)?))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::NUM_FACES;

  #[test]
  fn test_child_range() {
    let parent = CellId::from_face_pos_level(2, 0x0123_4567_0000_0000, 5).unwrap();
    let children: Vec<CellId> = parent.child_range(7).unwrap().collect();
    assert_eq!(children.len(), 16);
    assert_eq!(children[0], parent.child_begin_at_level(7).unwrap());
    for pair in children.windows(2) {
      assert_eq!(pair[0].next(), pair[1]);
    }
    for child in &children {
      assert_eq!(child.parent_at_level(5).unwrap(), parent);
    }
    assert_eq!(parent.child_range(5).unwrap().collect::<Vec<_>>(), vec![parent]);
    assert_eq!(parent.child_range(4), Err(S2Error::LevelInvalid));
  }

  #[test]
  fn test_level_range() {
    let faces: Vec<u8> = CellId::level_range(0).unwrap().map(CellId::face).collect();
    assert_eq!(faces, (0..NUM_FACES).collect::<Vec<_>>());
    assert_eq!(CellId::level_range(3).unwrap().len(), 6 * 64);
    assert!(CellId::level_range(31).is_err());
  }

  #[test]
  fn test_double_ended() {
    let parent = CellId::from_face_pos_level(0, 0, 1).unwrap();
    let forward: Vec<CellId> = parent.child_range(3).unwrap().collect();
    let mut backward: Vec<CellId> = parent.child_range(3).unwrap().rev().collect();
    backward.reverse();
    assert_eq!(forward, backward);

    let mut range = parent.child_range(2).unwrap();
    assert_eq!(range.len(), 4);
    let first = range.next().unwrap();
    let last = range.next_back().unwrap();
    assert_eq!(range.len(), 2);
    assert_eq!(first.next().next().next(), last);
    range.next();
    range.next_back();
    assert_eq!(range.next(), None);
    assert_eq!(range.next_back(), None);
    assert!(range.is_empty());
  }

  #[test]
  fn test_nth() {
    let mut range = CellId::level_range(2).unwrap();
    assert_eq!(range.nth(17), Some(CellId::begin(2).unwrap().advance(17)));
    assert_eq!(range.len(), 96 - 18);
    assert_eq!(range.nth(1000), None);
    assert_eq!(range.next(), None);
  }
}
