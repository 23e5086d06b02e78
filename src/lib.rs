#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::cast_possible_truncation)] // Bit fields are narrowed deliberately
#![allow(clippy::cast_possible_wrap)] // Step counts move between u64 and i64
#![allow(clippy::cast_precision_loss)] // Leaf coordinates fit in an f64 mantissa
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)] // Bit masks read better unseparated
#![allow(clippy::similar_names)] // i/j, si/ti, u/v pairs
#![allow(clippy::many_single_char_names)]

//! `xs-s2` is a Rust implementation of the S2 cell id: a 64-bit name for a cell of a
//! hierarchical subdivision of the sphere.
//!
//! The sphere is projected onto the six faces of a cube, each face is split into a
//! quadtree 30 levels deep, and the cells of each level are ordered along a Hilbert
//! curve. A `CellId` packs the face, the curve position and the level into one `u64`,
//! so that every cell's descendants form one contiguous id range.
//!
//! ```
//! use xs_s2::{CellId, LatLng};
//!
//! let leaf = CellId::from_lat_lng(&LatLng::from_degrees(40.7128, -74.0060));
//! let city = leaf.parent_at_level(10).unwrap();
//! assert!(city.contains(leaf));
//! assert_eq!(CellId::from_token(&city.to_token()).unwrap(), city);
//! ```

// Declare modules
pub mod cell_id;
pub mod constants;
pub mod coords;
pub mod hilbert;
pub mod iterators;
pub mod latlng;
pub mod math;
pub mod measures;
pub mod traversal;
pub mod types;

// Re-export key public types and functions for easier use
pub use constants::{MAX_LEVEL, MAX_SIZE, NUM_FACES};
pub use coords::{face_uv_to_xyz, face_xyz_to_uv, st_to_ij, st_to_uv, uv_to_st, valid_face_xyz_to_uv, xyz_to_face};
pub use iterators::CellIdRange;
pub use latlng::{constrain_lng, degs_to_rads, geo_almost_equal, geo_almost_equal_threshold, rads_to_degs};
pub use measures::{CellMetrics, Metric};
pub use types::{CellId, FaceIJ, LatLng, Point, Projection, S2Error, Vec2d};
