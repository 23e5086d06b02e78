// src/coords/mod.rs
//! Conversions between the coordinate systems a cell id passes through.
//!
//! * (x, y, z): a direction in 3-D space, usually a unit vector on the sphere.
//! * face + (u, v): gnomonic projection onto one of six cube faces, `u, v` in `[-1, 1]`.
//! * (s, t): (u, v) warped per axis by the active `Projection`, in `[0, 1]`.
//! * (i, j): (s, t) quantized to the leaf grid, in `[0, 2^30)`.
//! * (si, ti): doubled leaf coordinates, which represent cell centres exactly.
#![allow(clippy::module_name_repetitions)]

pub mod face_uv;
pub mod projection;
pub mod st_ij;

pub use face_uv::{
  face_uv_to_xyz, face_xyz_to_uv, norm, u_axis, u_norm, v_axis, v_norm, valid_face_xyz_to_uv, xyz_to_face,
  xyz_to_face_uv,
};
pub use projection::{st_to_uv, uv_to_st, DEFAULT_PROJECTION};
pub use st_ij::{face_si_ti_to_xyz, ij_to_st_min, si_ti_to_st, size_ij, st_to_ij, st_to_leaf_ij, st_to_si_ti};
