//! Core S2 data structures.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A 64-bit S2 cell identifier.
///
/// The top 3 bits hold the cube face, followed by up to 30 pairs of Hilbert-curve
/// position bits and a single sentinel `1` bit marking the level. Ordering is the raw
/// unsigned order, under which every cell's descendants form a contiguous range.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellId(pub u64);

/// A face number together with leaf (i, j) coordinates and the Hilbert orientation
/// of the cell at that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceIJ {
  /// Cube face (0-5).
  pub face: u8,
  /// Leaf i coordinate in `[0, 2^30)`.
  pub i: u32,
  /// Leaf j coordinate in `[0, 2^30)`.
  pub j: u32,
  /// Orientation of the cell's Hilbert sub-curve (`SWAP_MASK` | `INVERT_MASK` bits).
  pub orientation: u8,
}

/// A point in 3-D space. Points on the sphere are unit length.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

/// Latitude/longitude coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

/// A 2-D vector, used for (u, v) and (s, t) coordinate pairs.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2d {
  pub x: f64,
  pub y: f64,
}

impl Vec2d {
  #[inline]
  #[must_use]
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

/// Selects the per-axis warp between the (u, v) tangent plane and the (s, t) cell grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Projection {
  /// `u = 2s - 1`. Fast, but cell areas vary by a factor of about 5.2.
  Linear,
  /// Tangent warp. Areas vary by about 1.4, at the cost of trigonometry per conversion.
  Tan,
  /// Quadratic warp. Areas vary by about 2.1 and conversion stays cheap.
  #[default]
  Quadratic,
}

/// Represents an S2 error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum S2Error {
  /// The operation failed but a more specific error is not available.
  #[error("operation failed")]
  Failed = 1,
  /// Face argument was outside of `[0, 6)`.
  #[error("face argument was outside of acceptable range")]
  FaceInvalid = 2,
  /// Level argument was outside of `[0, 30]` or of the range the cell allows.
  #[error("level argument was outside of acceptable range")]
  LevelInvalid = 3,
  /// `CellId` argument was not valid.
  #[error("cell argument was not valid")]
  CellInvalid = 4,
  /// Token or debug string could not be parsed.
  #[error("token was malformed")]
  TokenInvalid = 5,
  /// Latitude or longitude arguments were outside of acceptable range.
  #[error("latitude or longitude arguments were outside of acceptable range")]
  LatLngDomain = 6,
  /// (i, j) coordinates were outside of the face grid.
  #[error("ij coordinates were outside of the face grid")]
  CoordinateInvalid = 7,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    assert_eq!(CellId::default(), CellId(0));
    assert_eq!(Projection::default(), Projection::Quadratic);
    assert_eq!(FaceIJ::default().orientation, 0);
  }

  #[test]
  fn test_error_codes_and_messages() {
    assert_eq!(S2Error::FaceInvalid as u32, 2);
    assert_eq!(S2Error::TokenInvalid as u32, 5);
    assert_eq!(S2Error::CellInvalid.to_string(), "cell argument was not valid");
  }

  #[test]
  fn test_cell_id_orders_unsigned() {
    // Face 4 and 5 ids have the top bit set and must still sort after face 0.
    assert!(CellId(0x1000_0000_0000_0000) < CellId(0x9000_0000_0000_0000));
  }
}
