// src/cell_id/conversion.rs
//! Conversions between `CellId` and face/(i, j), points and lat/lng.

use crate::constants::{
  DBL_EPSILON, INVERT_MASK, LOOKUP_BITS, MAX_LEVEL, MAX_SIZE, NUM_FACES, ORIENTATION_FIX_POSITIONS, POS_BITS, SWAP_MASK,
};
use crate::coords::{
  face_si_ti_to_xyz, face_uv_to_xyz, ij_to_st_min, si_ti_to_st, st_to_leaf_ij, st_to_uv, uv_to_st, xyz_to_face_uv,
};
use crate::hilbert::lookup_tables;
use crate::types::{CellId, FaceIJ, LatLng, Point, S2Error, Vec2d};

/// Mask selecting one `LOOKUP_BITS` group of i or j.
const LOOKUP_MASK: u32 = (1 << LOOKUP_BITS) - 1;
/// Number of table lookups needed to cover all 30 levels.
const LOOKUP_STEPS: u32 = (MAX_LEVEL as u32 + LOOKUP_BITS - 1) / LOOKUP_BITS;

impl CellId {
  /// The leaf cell at (`i`, `j`) on `face`.
  ///
  /// # Errors
  ///
  /// `FaceInvalid` if `face >= 6`, `CoordinateInvalid` if `i` or `j` is not below `2^30`.
  pub fn from_face_ij(face: u8, i: u32, j: u32) -> Result<CellId, S2Error> {
    if face >= NUM_FACES {
      return Err(S2Error::FaceInvalid);
    }
    if i >= MAX_SIZE || j >= MAX_SIZE {
      return Err(S2Error::CoordinateInvalid);
    }
    Ok(Self::from_face_ij_unchecked(face, i, j))
  }

  /// Encodes leaf coordinates eight bits of position at a time.
  pub(crate) fn from_face_ij_unchecked(face: u8, i: u32, j: u32) -> CellId {
    let tables = lookup_tables();
    let mut n = u64::from(face) << (POS_BITS - 1);
    let mut bits = u32::from(face & SWAP_MASK);
    for k in (0..LOOKUP_STEPS).rev() {
      bits += ((i >> (k * LOOKUP_BITS)) & LOOKUP_MASK) << (LOOKUP_BITS + 2);
      bits += ((j >> (k * LOOKUP_BITS)) & LOOKUP_MASK) << 2;
      bits = u32::from(tables.pos[bits as usize]);
      n |= u64::from(bits >> 2) << (k * 2 * LOOKUP_BITS);
      bits &= u32::from(SWAP_MASK | INVERT_MASK);
    }
    CellId(n * 2 + 1)
  }

  /// Like `from_face_ij`, but (`i`, `j`) may lie up to one leaf beyond the face. Such
  /// coordinates are projected through the cube surface onto the adjacent face.
  pub(crate) fn from_face_ij_wrap(face: u8, i: i64, j: i64) -> CellId {
    let max_size = i64::from(MAX_SIZE);
    let i = i.clamp(-1, max_size);
    let j = j.clamp(-1, max_size);

    // Map to (u, v) with the linear projection, which is exact for these values. The
    // clamp keeps points just past the edge from reaching a third face at a corner.
    let scale = 1.0 / f64::from(MAX_SIZE);
    let limit = 1.0 + DBL_EPSILON;
    let u = (scale * (2 * (i - max_size / 2) + 1) as f64).clamp(-limit, limit);
    let v = (scale * (2 * (j - max_size / 2) + 1) as f64).clamp(-limit, limit);

    let (face, uv) = xyz_to_face_uv(&face_uv_to_xyz(face, u, v));
    Self::from_face_ij_unchecked(face, st_to_leaf_ij(0.5 * (uv.x + 1.0)), st_to_leaf_ij(0.5 * (uv.y + 1.0)))
  }

  /// Dispatches to the plain or wrapping encoder. `same_face` asserts that (`i`, `j`)
  /// lies on `face`.
  #[inline]
  pub(crate) fn from_face_ij_same(face: u8, i: i64, j: i64, same_face: bool) -> CellId {
    if same_face {
      Self::from_face_ij_unchecked(face, i as u32, j as u32)
    } else {
      Self::from_face_ij_wrap(face, i, j)
    }
  }

  /// Decodes the face, the leaf (i, j) of this id's position and the Hilbert orientation
  /// of the cell.
  ///
  /// For a non-leaf cell (i, j) is a leaf near the cell centre, not its corner.
  #[must_use]
  pub fn to_face_ij_orientation(self) -> FaceIJ {
    let tables = lookup_tables();
    let face = self.face();
    let mut i = 0u32;
    let mut j = 0u32;
    let mut bits = u32::from(face & SWAP_MASK);
    for k in (0..LOOKUP_STEPS).rev() {
      // The top group only holds the levels left over after the full groups.
      let nbits = if k == LOOKUP_STEPS - 1 {
        u32::from(MAX_LEVEL) - k * LOOKUP_BITS
      } else {
        LOOKUP_BITS
      };
      bits += ((self.0 >> (k * 2 * LOOKUP_BITS + 1)) as u32 & ((1 << (2 * nbits)) - 1)) << 2;
      bits = u32::from(tables.ij[bits as usize]);
      i += (bits >> (LOOKUP_BITS + 2)) << (k * LOOKUP_BITS);
      j += ((bits >> 2) & LOOKUP_MASK) << (k * LOOKUP_BITS);
      bits &= u32::from(SWAP_MASK | INVERT_MASK);
    }

    // The lookups ran past the sentinel into trailing zero positions. Each zero step
    // flips SWAP, so an odd count within the last group has to be undone.
    if self.lsb() & ORIENTATION_FIX_POSITIONS != 0 {
      bits ^= u32::from(SWAP_MASK);
    }
    FaceIJ {
      face,
      i,
      j,
      orientation: bits as u8,
    }
  }

  /// Face and doubled (si, ti) coordinates of the cell centre.
  #[must_use]
  pub fn center_si_ti(self) -> (u8, u32, u32) {
    let FaceIJ { face, i, j, .. } = self.to_face_ij_orientation();
    // Leaf centres sit half a leaf in. For larger cells the decoded (i, j) is one of
    // the leaves next to the centre; bit 0 of i tells which side it is on.
    let delta = if self.is_leaf() {
      1
    } else if (i ^ ((self.0 as u32) >> 2)) & 1 != 0 {
      2
    } else {
      0
    };
    (face, 2 * i + delta, 2 * j + delta)
  }

  /// The leaf cell containing `p`. Total: any direction, including zero or NaN
  /// components, yields some valid leaf.
  #[must_use]
  pub fn from_point(p: &Point) -> CellId {
    let (face, uv) = xyz_to_face_uv(p);
    let i = st_to_leaf_ij(uv_to_st(uv.x));
    let j = st_to_leaf_ij(uv_to_st(uv.y));
    Self::from_face_ij_unchecked(face, i, j)
  }

  /// The leaf cell containing `ll`.
  #[inline]
  #[must_use]
  pub fn from_lat_lng(ll: &LatLng) -> CellId {
    Self::from_point(&ll.to_point())
  }

  /// Cell centre on the cube surface, not unit length.
  #[must_use]
  pub fn to_point_raw(self) -> Point {
    let (face, si, ti) = self.center_si_ti();
    face_si_ti_to_xyz(face, si, ti)
  }

  /// Cell centre as a unit vector.
  #[inline]
  #[must_use]
  pub fn to_point(self) -> Point {
    self.to_point_raw().normalize()
  }

  #[inline]
  #[must_use]
  pub fn to_lat_lng(self) -> LatLng {
    LatLng::from_point(&self.to_point_raw())
  }

  /// Cell centre in (s, t).
  #[must_use]
  pub fn center_st(self) -> Vec2d {
    let (_, si, ti) = self.center_si_ti();
    Vec2d::new(si_ti_to_st(si), si_ti_to_st(ti))
  }

  /// Cell centre in (u, v).
  #[must_use]
  pub fn center_uv(self) -> Vec2d {
    let st = self.center_st();
    Vec2d::new(st_to_uv(st.x), st_to_uv(st.y))
  }

  /// Lower and upper corners of the cell in (s, t).
  #[must_use]
  pub fn bound_st(self) -> (Vec2d, Vec2d) {
    let FaceIJ { i, j, .. } = self.to_face_ij_orientation();
    let size = Self::size_ij(self.level());
    let i_lo = i & !(size - 1);
    let j_lo = j & !(size - 1);
    (
      Vec2d::new(ij_to_st_min(i_lo, MAX_LEVEL), ij_to_st_min(j_lo, MAX_LEVEL)),
      Vec2d::new(ij_to_st_min(i_lo + size, MAX_LEVEL), ij_to_st_min(j_lo + size, MAX_LEVEL)),
    )
  }

  /// Lower and upper corners of the cell in (u, v).
  #[must_use]
  pub fn bound_uv(self) -> (Vec2d, Vec2d) {
    let (lo, hi) = self.bound_st();
    (
      Vec2d::new(st_to_uv(lo.x), st_to_uv(lo.y)),
      Vec2d::new(st_to_uv(hi.x), st_to_uv(hi.y)),
    )
  }
}
