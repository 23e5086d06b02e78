// src/cell_id/mod.rs
//! The `CellId` value type: construction, hierarchy navigation, traversal order and
//! interval containment.

pub mod bits;
pub mod conversion;
pub mod token;

use crate::constants::{MAX_LEVEL, NUM_FACES, POS_BITS, POS_MASK, WRAP_OFFSET};
use crate::coords::st_ij;
use crate::types::{CellId, S2Error};
use bits::{
  face_of, is_valid_id, level_of, lowest_on_bit, lowest_on_bit_for_level, pos_of, truncate_to_level,
};

impl CellId {
  /// The invalid id, all bits zero.
  pub const NONE: CellId = CellId(0);

  #[inline]
  #[must_use]
  pub const fn none() -> CellId {
    CellId::NONE
  }

  /// Raw 64-bit value.
  #[inline]
  #[must_use]
  pub const fn id(self) -> u64 {
    self.0
  }

  /// Builds a cell from a face, a 61-bit Hilbert position and a level.
  ///
  /// Position bits below `level` are discarded and the level sentinel is set, so any
  /// `pos` yields a valid cell. `pos` is masked to 61 bits.
  ///
  /// # Errors
  ///
  /// `FaceInvalid` if `face >= 6`, `LevelInvalid` if `level > 30`.
  pub fn from_face_pos_level(face: u8, pos: u64, level: u8) -> Result<CellId, S2Error> {
    if face >= NUM_FACES {
      return Err(S2Error::FaceInvalid);
    }
    if level > MAX_LEVEL {
      return Err(S2Error::LevelInvalid);
    }
    let leaf = (u64::from(face) << POS_BITS) | (pos & POS_MASK) | 1;
    Ok(CellId(truncate_to_level(leaf, level)))
  }

  /// First cell of the whole Hilbert order at `level` (on face 0).
  ///
  /// # Errors
  ///
  /// `LevelInvalid` if `level > 30`.
  pub fn begin(level: u8) -> Result<CellId, S2Error> {
    if level > MAX_LEVEL {
      return Err(S2Error::LevelInvalid);
    }
    Ok(CellId(lowest_on_bit_for_level(level)))
  }

  /// One past the last cell at `level` (past face 5). Not a valid cell itself.
  ///
  /// # Errors
  ///
  /// `LevelInvalid` if `level > 30`.
  pub fn end(level: u8) -> Result<CellId, S2Error> {
    if level > MAX_LEVEL {
      return Err(S2Error::LevelInvalid);
    }
    Ok(CellId(WRAP_OFFSET.wrapping_add(lowest_on_bit_for_level(level))))
  }

  #[inline]
  #[must_use]
  pub const fn is_valid(self) -> bool {
    is_valid_id(self.0)
  }

  /// Cube face, 0-5 for valid ids.
  #[inline]
  #[must_use]
  pub const fn face(self) -> u8 {
    face_of(self.0)
  }

  /// Hilbert position within the face, including the sentinel bit.
  #[inline]
  #[must_use]
  pub const fn pos(self) -> u64 {
    pos_of(self.0)
  }

  /// Subdivision level, 0 (face) to 30 (leaf).
  #[inline]
  #[must_use]
  pub const fn level(self) -> u8 {
    level_of(self.0)
  }

  #[inline]
  #[must_use]
  pub const fn is_leaf(self) -> bool {
    self.0 & 1 != 0
  }

  #[inline]
  #[must_use]
  pub const fn is_face(self) -> bool {
    self.0 & (lowest_on_bit_for_level(0) - 1) == 0
  }

  /// The sentinel bit of this id.
  #[inline]
  #[must_use]
  pub const fn lsb(self) -> u64 {
    lowest_on_bit(self.0)
  }

  /// Position (0-3) of this cell's ancestor at `level` among its siblings, in Hilbert
  /// order. `level` must be in `1..=self.level()`.
  #[inline]
  #[must_use]
  pub const fn child_position(self, level: u8) -> u8 {
    ((self.0 >> (2 * (MAX_LEVEL - level) as u32 + 1)) & 3) as u8
  }

  /// The cell one level up.
  ///
  /// # Errors
  ///
  /// `CellInvalid` for an invalid id, `LevelInvalid` for a face cell.
  pub fn parent(self) -> Result<CellId, S2Error> {
    if !self.is_valid() {
      return Err(S2Error::CellInvalid);
    }
    if self.is_face() {
      return Err(S2Error::LevelInvalid);
    }
    Ok(self.parent_unchecked(self.level() - 1))
  }

  /// The ancestor at `level`, which must not be finer than this cell.
  ///
  /// # Errors
  ///
  /// `CellInvalid` for an invalid id, `LevelInvalid` if `level > self.level()`.
  pub fn parent_at_level(self, level: u8) -> Result<CellId, S2Error> {
    if !self.is_valid() {
      return Err(S2Error::CellInvalid);
    }
    if level > self.level() {
      return Err(S2Error::LevelInvalid);
    }
    Ok(self.parent_unchecked(level))
  }

  #[inline]
  pub(crate) const fn parent_unchecked(self, level: u8) -> CellId {
    CellId(truncate_to_level(self.0, level))
  }

  /// First of the four children.
  ///
  /// # Errors
  ///
  /// `CellInvalid` for an invalid id, `LevelInvalid` for a leaf.
  pub fn child_begin(self) -> Result<CellId, S2Error> {
    self.check_has_children()?;
    let lsb = self.lsb();
    Ok(CellId(self.0 - lsb + (lsb >> 2)))
  }

  /// One past the last child. Equals `child_begin()` advanced four times.
  ///
  /// # Errors
  ///
  /// As `child_begin`.
  pub fn child_end(self) -> Result<CellId, S2Error> {
    self.check_has_children()?;
    let lsb = self.lsb();
    Ok(CellId(self.0.wrapping_add(lsb).wrapping_add(lsb >> 2)))
  }

  /// First descendant at `level`. `level` may equal this cell's own level.
  ///
  /// # Errors
  ///
  /// `CellInvalid` for an invalid id, `LevelInvalid` unless `self.level() <= level <= 30`.
  pub fn child_begin_at_level(self, level: u8) -> Result<CellId, S2Error> {
    self.check_descendant_level(level)?;
    Ok(self.child_begin_unchecked(level))
  }

  /// One past the last descendant at `level`.
  ///
  /// # Errors
  ///
  /// As `child_begin_at_level`.
  pub fn child_end_at_level(self, level: u8) -> Result<CellId, S2Error> {
    self.check_descendant_level(level)?;
    Ok(self.child_end_unchecked(level))
  }

  #[inline]
  pub(crate) const fn child_begin_unchecked(self, level: u8) -> CellId {
    CellId(self.0 - self.lsb() + lowest_on_bit_for_level(level))
  }

  #[inline]
  pub(crate) const fn child_end_unchecked(self, level: u8) -> CellId {
    CellId(self.0.wrapping_add(self.lsb()).wrapping_add(lowest_on_bit_for_level(level)))
  }

  /// The four children in Hilbert order.
  ///
  /// # Errors
  ///
  /// As `child_begin`.
  pub fn children(self) -> Result<[CellId; 4], S2Error> {
    let first = self.child_begin()?;
    let step = first.lsb() << 1;
    Ok([
      first,
      CellId(first.0 + step),
      CellId(first.0 + 2 * step),
      CellId(first.0 + 3 * step),
    ])
  }

  fn check_has_children(self) -> Result<(), S2Error> {
    if !self.is_valid() {
      return Err(S2Error::CellInvalid);
    }
    if self.is_leaf() {
      return Err(S2Error::LevelInvalid);
    }
    Ok(())
  }

  fn check_descendant_level(self, level: u8) -> Result<(), S2Error> {
    if !self.is_valid() {
      return Err(S2Error::CellInvalid);
    }
    if level < self.level() || level > MAX_LEVEL {
      return Err(S2Error::LevelInvalid);
    }
    Ok(())
  }

  /// The next cell at the same level in Hilbert order. Past the last cell of face 5
  /// this is `end(level)`, which is not valid.
  #[inline]
  #[must_use]
  pub const fn next(self) -> CellId {
    CellId(self.0.wrapping_add(self.lsb() << 1))
  }

  /// The previous cell at the same level. Before `begin(level)` the result is not valid.
  #[inline]
  #[must_use]
  pub const fn prev(self) -> CellId {
    CellId(self.0.wrapping_sub(self.lsb() << 1))
  }

  /// Like `next`, but the last cell of face 5 is followed by the first of face 0.
  #[inline]
  #[must_use]
  pub const fn next_wrap(self) -> CellId {
    let n = self.next();
    if n.0 < WRAP_OFFSET {
      return n;
    }
    CellId(n.0.wrapping_sub(WRAP_OFFSET))
  }

  /// Like `prev`, but the first cell of face 0 is preceded by the last of face 5.
  #[inline]
  #[must_use]
  pub const fn prev_wrap(self) -> CellId {
    let p = self.prev();
    if p.0 < WRAP_OFFSET {
      return p;
    }
    CellId(p.0.wrapping_add(WRAP_OFFSET))
  }

  /// Moves `steps` cells along the Hilbert order at this level, clamped to
  /// `begin(level)` and `end(level)`.
  #[must_use]
  pub fn advance(self, steps: i64) -> CellId {
    if steps == 0 {
      return self;
    }
    let step_shift = self.step_shift();
    // Both bounds fit in an i64: at most 2^63 - 1 leaf steps exist.
    let steps = if steps < 0 {
      let min_steps = -((self.0 >> step_shift) as i64);
      steps.max(min_steps)
    } else {
      let max_steps = (WRAP_OFFSET.wrapping_add(self.lsb()).wrapping_sub(self.0) >> step_shift) as i64;
      steps.min(max_steps)
    };
    CellId(self.0.wrapping_add((steps as u64) << step_shift))
  }

  /// Moves `steps` cells along the Hilbert order, treating the six faces as a cycle.
  #[must_use]
  pub fn advance_wrap(self, steps: i64) -> CellId {
    if steps == 0 {
      return self;
    }
    let step_shift = self.step_shift();
    let step_wrap = (WRAP_OFFSET >> step_shift) as i64;
    let mut steps = steps;
    if steps < 0 {
      let min_steps = -((self.0 >> step_shift) as i64);
      if steps < min_steps {
        steps %= step_wrap;
        if steps < min_steps {
          steps += step_wrap;
        }
      }
    } else {
      // Unlike advance(), never land on end(level).
      let max_steps = (WRAP_OFFSET.wrapping_sub(self.0) >> step_shift) as i64;
      if steps > max_steps {
        steps %= step_wrap;
        if steps > max_steps {
          steps -= step_wrap;
        }
      }
    }
    CellId(self.0.wrapping_add((steps as u64) << step_shift))
  }

  #[inline]
  const fn step_shift(self) -> u32 {
    2 * (MAX_LEVEL - self.level()) as u32 + 1
  }

  /// First leaf cell contained in this cell.
  #[inline]
  #[must_use]
  pub const fn range_min(self) -> CellId {
    CellId(self.0.wrapping_sub(self.lsb().wrapping_sub(1)))
  }

  /// Last leaf cell contained in this cell.
  #[inline]
  #[must_use]
  pub const fn range_max(self) -> CellId {
    CellId(self.0.wrapping_add(self.lsb().wrapping_sub(1)))
  }

  /// True if `other` is this cell or one of its descendants.
  #[inline]
  #[must_use]
  pub const fn contains(self, other: CellId) -> bool {
    other.0 >= self.range_min().0 && other.0 <= self.range_max().0
  }

  /// True if either cell contains the other.
  #[inline]
  #[must_use]
  pub const fn intersects(self, other: CellId) -> bool {
    other.range_min().0 <= self.range_max().0 && other.range_max().0 >= self.range_min().0
  }

  /// Edge length in leaf units of a cell at `level`. Levels past 30 give 1.
  #[inline]
  #[must_use]
  pub const fn size_ij(level: u8) -> u32 {
    st_ij::size_ij(level)
  }

  /// Edge length in (s, t) units of a cell at `level`.
  #[inline]
  #[must_use]
  pub fn size_st(level: u8) -> f64 {
    st_ij::ij_to_st_min(Self::size_ij(level), MAX_LEVEL)
  }
}
