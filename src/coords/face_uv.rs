// src/coords/face_uv.rs
//! Cube faces: (face, u, v) to and from points on the sphere, plus face axes.

use crate::types::{Point, Vec2d};

/// Per-face (u, v, w) axes: the directions of increasing u and v, and the face normal.
#[rustfmt::skip]
static FACE_UVW_AXES: [[Point; 3]; 6] = [
  [Point::new( 0.0,  1.0,  0.0), Point::new( 0.0,  0.0,  1.0), Point::new( 1.0,  0.0,  0.0)],
  [Point::new(-1.0,  0.0,  0.0), Point::new( 0.0,  0.0,  1.0), Point::new( 0.0,  1.0,  0.0)],
  [Point::new(-1.0,  0.0,  0.0), Point::new( 0.0, -1.0,  0.0), Point::new( 0.0,  0.0,  1.0)],
  [Point::new( 0.0,  0.0, -1.0), Point::new( 0.0, -1.0,  0.0), Point::new(-1.0,  0.0,  0.0)],
  [Point::new( 0.0,  0.0, -1.0), Point::new( 1.0,  0.0,  0.0), Point::new( 0.0, -1.0,  0.0)],
  [Point::new( 0.0,  1.0,  0.0), Point::new( 1.0,  0.0,  0.0), Point::new( 0.0,  0.0, -1.0)],
];

/// Converts face-local (u, v) to a (non unit-length) point on the cube surface.
#[inline]
#[must_use]
pub fn face_uv_to_xyz(face: u8, u: f64, v: f64) -> Point {
  match face {
    0 => Point::new(1.0, u, v),
    1 => Point::new(-u, 1.0, v),
    2 => Point::new(-u, -v, 1.0),
    3 => Point::new(-1.0, -v, -u),
    4 => Point::new(v, -1.0, -u),
    _ => Point::new(v, u, -1.0),
  }
}

/// Face whose axis carries the largest-magnitude component of `p`.
///
/// Ties resolve deterministically (see `Point::largest_abs_component`), so every
/// non-zero point maps to exactly one face.
#[inline]
#[must_use]
pub fn xyz_to_face(p: &Point) -> u8 {
  let axis = p.largest_abs_component();
  let face = axis as u8;
  if p.get(axis) < 0.0 {
    face + 3
  } else {
    face
  }
}

/// Projects `p` onto `face` without checking that it belongs there.
#[inline]
fn face_xyz_to_uv_unchecked(face: u8, p: &Point) -> Vec2d {
  match face {
    0 => Vec2d::new(p.y / p.x, p.z / p.x),
    1 => Vec2d::new(-p.x / p.y, p.z / p.y),
    2 => Vec2d::new(-p.x / p.z, -p.y / p.z),
    3 => Vec2d::new(p.z / p.x, p.y / p.x),
    4 => Vec2d::new(p.z / p.y, -p.x / p.y),
    _ => Vec2d::new(-p.y / p.z, -p.x / p.z),
  }
}

/// Projects `p` onto the plane of `face`.
///
/// # Panics
///
/// Panics if `p` does not lie in the open hemisphere centred on `face`. Callers are
/// expected to pick the face with `xyz_to_face` first.
#[inline]
#[must_use]
pub fn valid_face_xyz_to_uv(face: u8, p: &Point) -> Vec2d {
  assert!(p.dot(&norm(face)) > 0.0, "point {p:?} is not on face {face}");
  face_xyz_to_uv_unchecked(face, p)
}

/// Projects `p` onto the plane of `face`, or `None` if `p` lies on the far side of it.
///
/// Unlike `valid_face_xyz_to_uv`, the point only needs to be in the face's
/// hemisphere, so the result may fall outside `[-1, 1]`.
#[inline]
#[must_use]
pub fn face_xyz_to_uv(face: u8, p: &Point) -> Option<Vec2d> {
  let component = if face < 3 {
    p.get(usize::from(face))
  } else {
    -p.get(usize::from(face - 3))
  };
  if component <= 0.0 {
    return None;
  }
  Some(face_xyz_to_uv_unchecked(face, p))
}

/// Face and (u, v) of `p` in a single step.
#[inline]
#[must_use]
pub fn xyz_to_face_uv(p: &Point) -> (u8, Vec2d) {
  let face = xyz_to_face(p);
  (face, face_xyz_to_uv_unchecked(face, p))
}

/// Unit vector along the positive u direction of `face`.
#[inline]
#[must_use]
pub fn u_axis(face: u8) -> Point {
  FACE_UVW_AXES[usize::from(face)][0]
}

/// Unit vector along the positive v direction of `face`.
#[inline]
#[must_use]
pub fn v_axis(face: u8) -> Point {
  FACE_UVW_AXES[usize::from(face)][1]
}

/// Outward unit normal of `face`.
#[inline]
#[must_use]
pub fn norm(face: u8) -> Point {
  FACE_UVW_AXES[usize::from(face)][2]
}

/// Normal (not unit length) of the plane through the origin containing the line
/// `u = const` on `face`, right-handed with respect to that line traversed towards +v.
#[inline]
#[must_use]
pub fn u_norm(face: u8, u: f64) -> Point {
  match face {
    0 => Point::new(u, -1.0, 0.0),
    1 => Point::new(1.0, u, 0.0),
    2 => Point::new(1.0, 0.0, u),
    3 => Point::new(-u, 0.0, 1.0),
    4 => Point::new(0.0, -u, 1.0),
    _ => Point::new(0.0, -1.0, -u),
  }
}

/// Normal (not unit length) of the plane through the origin containing the line
/// `v = const` on `face`, right-handed with respect to that line traversed towards +u.
#[inline]
#[must_use]
pub fn v_norm(face: u8, v: f64) -> Point {
  match face {
    0 => Point::new(-v, 0.0, 1.0),
    1 => Point::new(0.0, -v, 1.0),
    2 => Point::new(0.0, -1.0, -v),
    3 => Point::new(v, -1.0, 0.0),
    4 => Point::new(1.0, v, 0.0),
    _ => Point::new(1.0, 0.0, v),
  }
}
