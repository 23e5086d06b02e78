//! S2 cell-id core library constants.

use std::f64::consts;

// Mathematical constants
/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// pi / 4.0
pub const M_PI_4: f64 = consts::FRAC_PI_4;
/// 2.0 * PI
pub const M_2PI: f64 = 2.0 * consts::PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;
/// sqrt(2)
pub const M_SQRT2: f64 = consts::SQRT_2;

/// Epsilon for floating point comparisons. ~0.1mm in degrees.
pub const EPSILON_DEG: f64 = 0.000_000_001;
/// Epsilon for floating point comparisons. ~0.1mm in radians.
pub const EPSILON_RAD: f64 = EPSILON_DEG * M_PI_180;

/// Machine epsilon for `f64` (C's `DBL_EPSILON`).
pub const DBL_EPSILON: f64 = f64::EPSILON;

// Cell hierarchy constants

/// Number of faces of the cube the sphere is projected onto.
pub const NUM_FACES: u8 = 6;
/// Deepest subdivision level. Level 0 is a whole face, level 30 a leaf cell.
pub const MAX_LEVEL: u8 = 30;
/// Number of bits used for the face number.
pub const FACE_BITS: u32 = 3;
/// Number of bits below the face bits: two per level plus the sentinel bit.
pub const POS_BITS: u32 = 2 * MAX_LEVEL as u32 + 1;
/// Number of leaf cells along one edge of a face (`2^30`).
pub const MAX_SIZE: u32 = 1 << MAX_LEVEL;
/// Upper bound of the doubled (si, ti) leaf coordinates (`2^31`).
pub const MAX_SI_TI: u32 = 1 << (MAX_LEVEL + 1);

// Bit-layout masks (as u64 for direct use in bitwise ops)

/// Mask selecting the position bits (everything below the face bits).
pub const POS_MASK: u64 = u64::MAX >> FACE_BITS;
/// The id space treated as cyclic by the wrapping traversal methods (`6 << 61`).
pub const WRAP_OFFSET: u64 = (NUM_FACES as u64) << POS_BITS;
/// Every bit position a level sentinel may occupy (even positions 0..=60).
pub const SENTINEL_POSITIONS: u64 = 0x1555_5555_5555_5555;
/// Sentinel positions that land mid-way through a 4-level lookup group.
pub const ORIENTATION_FIX_POSITIONS: u64 = 0x1111_1111_1111_1110;

// Hilbert curve constants

/// Orientation bit: the i and j axes are swapped.
pub const SWAP_MASK: u8 = 0x01;
/// Orientation bit: both axes are inverted.
pub const INVERT_MASK: u8 = 0x02;
/// Number of levels handled by one lookup-table step.
pub const LOOKUP_BITS: u32 = 4;
/// Number of entries in each lookup table (4 bits of i, 4 of j, 2 of orientation).
pub const LOOKUP_TABLE_SIZE: usize = 1 << (2 * LOOKUP_BITS + 2);

// Token codec

/// Maximum length of a cell token: one hex digit per nibble of a u64.
pub const MAX_TOKEN_LEN: usize = 16;
/// Token accepted on input for the none id.
pub const LEGACY_NONE_TOKEN: &str = "X";
