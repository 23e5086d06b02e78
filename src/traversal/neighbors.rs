// src/traversal/neighbors.rs
//! Edge, vertex and ring neighbors of a cell, including across cube faces.

use crate::constants::{MAX_LEVEL, MAX_SIZE};
use crate::types::{CellId, FaceIJ, S2Error};

impl CellId {
  /// The four cells sharing an edge with this one, at the same level, in the order
  /// down (j-), right (i+), up (j+), left (i-). Neighbors on another face are found by
  /// projecting through the cube edge.
  #[must_use]
  pub fn edge_neighbors(self) -> [CellId; 4] {
    let level = self.level();
    let size = i64::from(Self::size_ij(level));
    let max_size = i64::from(MAX_SIZE);
    let FaceIJ { face, i, j, .. } = self.to_face_ij_orientation();
    let (i, j) = (i64::from(i), i64::from(j));

    [
      Self::from_face_ij_same(face, i, j - size, j - size >= 0).parent_unchecked(level),
      Self::from_face_ij_same(face, i + size, j, i + size < max_size).parent_unchecked(level),
      Self::from_face_ij_same(face, i, j + size, j + size < max_size).parent_unchecked(level),
      Self::from_face_ij_same(face, i - size, j, i - size >= 0).parent_unchecked(level),
    ]
  }

  /// Cells at `level` sharing the vertex of the enclosing `level` cell that is closest
  /// to this cell. Usually four cells; three when that vertex is a cube corner.
  ///
  /// # Errors
  ///
  /// `CellInvalid` for an invalid id, `LevelInvalid` unless `level < self.level()`.
  pub fn vertex_neighbors(self, level: u8) -> Result<Vec<CellId>, S2Error> {
    if !self.is_valid() {
      return Err(S2Error::CellInvalid);
    }
    if level >= self.level() {
      return Err(S2Error::LevelInvalid);
    }
    let FaceIJ { face, i, j, .. } = self.to_face_ij_orientation();
    let (i, j) = (i64::from(i), i64::from(j));
    let max_size = i64::from(MAX_SIZE);

    // The closest vertex is picked by which half of the `level` cell we are in.
    let halfsize = i64::from(Self::size_ij(level + 1));
    let size = halfsize << 1;
    let (ioffset, isame) = if i & halfsize != 0 {
      (size, i + size < max_size)
    } else {
      (-size, i - size >= 0)
    };
    let (joffset, jsame) = if j & halfsize != 0 {
      (size, j + size < max_size)
    } else {
      (-size, j - size >= 0)
    };

    let mut neighbors = Vec::with_capacity(4);
    neighbors.push(self.parent_unchecked(level));
    neighbors.push(Self::from_face_ij_same(face, i + ioffset, j, isame).parent_unchecked(level));
    neighbors.push(Self::from_face_ij_same(face, i, j + joffset, jsame).parent_unchecked(level));
    // At a cube corner the diagonal cell does not exist.
    if isame || jsame {
      neighbors.push(Self::from_face_ij_same(face, i + ioffset, j + joffset, isame && jsame).parent_unchecked(level));
    }
    Ok(neighbors)
  }

  /// All cells at `nbr_level` that touch this cell along an edge or at a vertex,
  /// sorted and without duplicates. The cell itself is never included.
  ///
  /// # Errors
  ///
  /// `CellInvalid` for an invalid id, `LevelInvalid` unless
  /// `self.level() <= nbr_level <= 30`.
  pub fn all_neighbors(self, nbr_level: u8) -> Result<Vec<CellId>, S2Error> {
    if !self.is_valid() {
      return Err(S2Error::CellInvalid);
    }
    if nbr_level < self.level() || nbr_level > MAX_LEVEL {
      return Err(S2Error::LevelInvalid);
    }
    let FaceIJ { face, i, j, .. } = self.to_face_ij_orientation();
    let max_size = i64::from(MAX_SIZE);

    // Snap to the lower-left leaf of this cell.
    let size = i64::from(Self::size_ij(self.level()));
    let i = i64::from(i) & -size;
    let j = i64::from(j) & -size;
    let nbr_size = i64::from(Self::size_ij(nbr_level));

    // Walk k along both axes from one neighbor before the cell to one past it,
    // emitting the left/right columns and, inside the span, the bottom/top rows.
    let mut neighbors = Vec::new();
    let mut k = -nbr_size;
    loop {
      let same_face = if k < 0 {
        j + k >= 0
      } else if k >= size {
        j + k < max_size
      } else {
        neighbors.push(Self::from_face_ij_same(face, i + k, j - nbr_size, j - size >= 0).parent_unchecked(nbr_level));
        neighbors.push(Self::from_face_ij_same(face, i + k, j + size, j + size < max_size).parent_unchecked(nbr_level));
        true
      };
      neighbors.push(
        Self::from_face_ij_same(face, i - nbr_size, j + k, same_face && i - size >= 0).parent_unchecked(nbr_level),
      );
      neighbors.push(
        Self::from_face_ij_same(face, i + size, j + k, same_face && i + size < max_size).parent_unchecked(nbr_level),
      );
      if k >= size {
        break;
      }
      k += nbr_size;
    }
    neighbors.sort_unstable();
    neighbors.dedup();
    Ok(neighbors)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Point;

  fn face_cell(face: u8) -> CellId {
    CellId::from_face_pos_level(face, 0, 0).unwrap()
  }

  #[test]
  fn test_face_edge_neighbors() {
    assert_eq!(
      face_cell(1).edge_neighbors(),
      [face_cell(5), face_cell(3), face_cell(2), face_cell(0)]
    );
    assert_eq!(
      face_cell(0).edge_neighbors(),
      [face_cell(5), face_cell(1), face_cell(2), face_cell(4)]
    );
  }

  #[test]
  fn test_interior_edge_neighbors() {
    let id = CellId::from_face_ij(3, 1 << 20, 1 << 21).unwrap().parent_at_level(12).unwrap();
    let size = CellId::size_ij(12);
    let expected = [
      CellId::from_face_ij(3, 1 << 20, (1 << 21) - size).unwrap(),
      CellId::from_face_ij(3, (1 << 20) + size, 1 << 21).unwrap(),
      CellId::from_face_ij(3, 1 << 20, (1 << 21) + size).unwrap(),
      CellId::from_face_ij(3, (1 << 20) - size, 1 << 21).unwrap(),
    ];
    for (nbr, leaf) in id.edge_neighbors().into_iter().zip(expected) {
      assert_eq!(nbr, leaf.parent_at_level(12).unwrap());
    }
  }

  #[test]
  fn test_vertex_neighbors_at_face_centre() {
    let id = CellId::from_point(&Point::new(0.0, 0.0, 1.0));
    let mut neighbors = id.vertex_neighbors(5).unwrap();
    neighbors.sort();
    assert_eq!(neighbors.len(), 4);
    for (k, nbr) in neighbors.into_iter().enumerate() {
      let i = (1u32 << 29) - u32::from(k < 2);
      let j = (1u32 << 29) - u32::from(k == 0 || k == 3);
      let expected = CellId::from_face_ij(2, i, j).unwrap().parent_at_level(5).unwrap();
      assert_eq!(nbr, expected, "neighbor {k}");
    }
  }

  #[test]
  fn test_vertex_neighbors_at_cube_corner() {
    let id = CellId::from_face_pos_level(0, 0, MAX_LEVEL).unwrap();
    let mut neighbors = id.vertex_neighbors(0).unwrap();
    neighbors.sort();
    assert_eq!(neighbors, vec![face_cell(0), face_cell(4), face_cell(5)]);
  }

  #[test]
  fn test_vertex_neighbors_level_check() {
    let id = CellId::from_face_pos_level(2, 0x0abc_0000_0000, 10).unwrap();
    assert_eq!(id.vertex_neighbors(10), Err(S2Error::LevelInvalid));
    assert!(id.vertex_neighbors(9).is_ok());
    assert_eq!(CellId::NONE.vertex_neighbors(0), Err(S2Error::CellInvalid));
  }

  #[test]
  fn test_all_neighbors_of_face() {
    assert_eq!(
      face_cell(1).all_neighbors(0).unwrap(),
      vec![face_cell(0), face_cell(2), face_cell(3), face_cell(5)]
    );
  }

  #[test]
  fn test_all_neighbors_interior_ring() {
    let id = CellId::from_face_ij(4, 1 << 25, 1 << 26).unwrap().parent_at_level(10).unwrap();
    let ring = id.all_neighbors(10).unwrap();
    assert_eq!(ring.len(), 8);
    assert!(!ring.contains(&id));
    for nbr in id.edge_neighbors() {
      assert!(ring.contains(&nbr));
    }
    // Two levels finer: 4 cells per side plus the 4 corners.
    assert_eq!(id.all_neighbors(12).unwrap().len(), 20);
    assert_eq!(id.all_neighbors(9), Err(S2Error::LevelInvalid));
    assert_eq!(id.all_neighbors(31), Err(S2Error::LevelInvalid));
  }
}
