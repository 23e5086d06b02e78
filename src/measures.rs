// src/measures.rs
//! Per-level bounds on cell size.
//!
//! Every cell measure scales by a constant factor per level: lengths halve and areas
//! quarter. A `Metric` stores the level-0 derivative of one such measure and answers
//! "how big are cells at level L" and "which level has cells about this big".
//! All values are for the unit sphere (lengths are angles in radians, areas are
//! steradians).

use crate::constants::{MAX_LEVEL, M_PI_2, M_SQRT2};
use crate::math::extensions::{_frexp_exp, _ilogb, _ldexp};
use crate::types::{CellId, Projection};

/// A measure that scales as `deriv * 2^(-dim * level)`. `dim` is 1 for lengths and
/// 2 for areas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
  dim: u8,
  deriv: f64,
}

impl Metric {
  #[inline]
  #[must_use]
  pub const fn new(dim: u8, deriv: f64) -> Self {
    Self { dim, deriv }
  }

  #[inline]
  #[must_use]
  pub const fn dim(&self) -> u8 {
    self.dim
  }

  /// Value of the metric at level 0.
  #[inline]
  #[must_use]
  pub const fn deriv(&self) -> f64 {
    self.deriv
  }

  /// Value of the metric for cells at `level`.
  #[inline]
  #[must_use]
  pub fn get_value(&self, level: u8) -> f64 {
    _ldexp(self.deriv, -i32::from(self.dim) * i32::from(level))
  }

  /// Smallest level whose cells have a metric value of at most `value`, or 30 if
  /// none do. Only meaningful for "max" metrics.
  #[must_use]
  pub fn get_level_for_max_value(&self, value: f64) -> u8 {
    if value <= 0.0 {
      return MAX_LEVEL;
    }
    // Equivalent to -log2(value / deriv) / dim, rounded up.
    let level = -((_frexp_exp(value / self.deriv) - 1) >> (self.dim - 1));
    clamp_level(level)
  }

  /// Largest level whose cells have a metric value of at least `value`, or 0 if none
  /// do. Only meaningful for "min" metrics.
  #[must_use]
  pub fn get_level_for_min_value(&self, value: f64) -> u8 {
    if value <= 0.0 {
      return MAX_LEVEL;
    }
    let level = _ilogb(self.deriv / value) >> (self.dim - 1);
    clamp_level(level)
  }

  /// Level whose cells have a metric value closest to `value`, rounding in log space.
  #[must_use]
  pub fn get_closest_level(&self, value: f64) -> u8 {
    let scale = if self.dim == 1 { M_SQRT2 } else { 2.0 };
    self.get_level_for_max_value(scale * value)
  }
}

#[inline]
fn clamp_level(level: i32) -> u8 {
  level.clamp(0, i32::from(MAX_LEVEL)) as u8
}

/// The full set of size metrics for one projection.
///
/// Angle span is the angle between the two planes bounding a cell along one axis;
/// width is the minimum distance between opposite edges; diag is the diagonal length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
  pub min_angle_span: Metric,
  pub avg_angle_span: Metric,
  pub max_angle_span: Metric,
  pub min_width: Metric,
  pub avg_width: Metric,
  pub max_width: Metric,
  pub min_edge: Metric,
  pub avg_edge: Metric,
  pub max_edge: Metric,
  /// Upper bound on the ratio of a cell's longest edge to its shortest.
  pub max_edge_aspect: f64,
  pub min_diag: Metric,
  pub avg_diag: Metric,
  pub max_diag: Metric,
  /// Upper bound on the ratio of a cell's longest diagonal to its shortest.
  pub max_diag_aspect: f64,
  pub min_area: Metric,
  pub avg_area: Metric,
  pub max_area: Metric,
}

const fn length(deriv: f64) -> Metric {
  Metric::new(1, deriv)
}

const fn area(deriv: f64) -> Metric {
  Metric::new(2, deriv)
}

/// 4π / 6: the sphere split evenly among the six faces.
const AVG_FACE_AREA: f64 = 2.094_395_102_393_195_3;
const SQRT_3: f64 = 1.732_050_807_568_877_2;

#[rustfmt::skip]
pub const LINEAR_METRICS: CellMetrics = CellMetrics {
  min_angle_span: length(1.0),
  avg_angle_span: length(M_PI_2),
  max_angle_span: length(2.0),
  min_width:      length(0.816_496_580_927_726),           // sqrt(2/3)
  avg_width:      length(1.411_459_345_844_456_9),
  max_width:      length(2.0),
  min_edge:       length(0.942_809_041_582_063_5),         // 2 sqrt(2) / 3
  avg_edge:       length(1.440_034_192_955_603_8),
  max_edge:       length(2.0),
  max_edge_aspect: M_SQRT2,
  min_diag:       length(0.942_809_041_582_063_5),         // 2 sqrt(2) / 3
  avg_diag:       length(2.031_817_866_418_812_5),
  max_diag:       length(2.828_427_124_746_190_3),         // 2 sqrt(2)
  max_diag_aspect: SQRT_3,
  min_area:       area(0.769_800_358_919_501),             // 4 / (3 sqrt(3))
  avg_area:       area(AVG_FACE_AREA),
  max_area:       area(4.0),
};

#[rustfmt::skip]
pub const TAN_METRICS: CellMetrics = CellMetrics {
  min_angle_span: length(M_PI_2),
  avg_angle_span: length(M_PI_2),
  max_angle_span: length(M_PI_2),
  min_width:      length(1.110_720_734_539_591_5),         // π / (2 sqrt(2))
  avg_width:      length(1.437_318_638_925_160_9),
  max_width:      length(M_PI_2),
  min_edge:       length(1.110_720_734_539_591_5),         // π / (2 sqrt(2))
  avg_edge:       length(1.461_667_032_546_739_4),
  max_edge:       length(M_PI_2),
  max_edge_aspect: M_SQRT2,
  min_diag:       length(1.480_960_979_386_122),           // π sqrt(2) / 3
  avg_diag:       length(2.063_623_197_195_635_6),
  max_diag:       length(2.565_099_660_323_728),           // π sqrt(2/3)
  max_diag_aspect: SQRT_3,
  min_area:       area(1.744_716_049_909_719_6),           // π² / (4 sqrt(2))
  avg_area:       area(AVG_FACE_AREA),
  max_area:       area(2.467_401_100_272_339_5),           // π² / 4
};

#[rustfmt::skip]
pub const QUADRATIC_METRICS: CellMetrics = CellMetrics {
  min_angle_span: length(1.333_333_333_333_333_3),         // 4 / 3
  avg_angle_span: length(M_PI_2),
  max_angle_span: length(1.704_897_179_199_218_5),
  min_width:      length(0.942_809_041_582_063_5),         // 2 sqrt(2) / 3
  avg_width:      length(1.434_523_672_886_099_5),
  max_width:      length(1.704_897_179_199_218_5),
  min_edge:       length(0.942_809_041_582_063_5),         // 2 sqrt(2) / 3
  avg_edge:       length(1.459_213_746_386_106_1),
  max_edge:       length(1.704_897_179_199_218_5),
  max_edge_aspect: 1.442_615_274_452_683,
  min_diag:       length(1.257_078_722_109_418),           // 8 sqrt(2) / 9
  avg_diag:       length(2.060_422_738_998_471_7),
  max_diag:       length(2.438_654_594_434_021),
  max_diag_aspect: SQRT_3,
  min_area:       area(1.257_078_722_109_418),             // 8 sqrt(2) / 9
  avg_area:       area(AVG_FACE_AREA),
  max_area:       area(2.635_799_256_963_161_4),
};

impl Projection {
  /// Size metrics of cells under this projection.
  #[must_use]
  pub const fn metrics(self) -> &'static CellMetrics {
    match self {
      Projection::Linear => &LINEAR_METRICS,
      Projection::Tan => &TAN_METRICS,
      Projection::Quadratic => &QUADRATIC_METRICS,
    }
  }
}

// Metrics of the default projection, the one `CellId` conversions use.
pub const MIN_ANGLE_SPAN: Metric = QUADRATIC_METRICS.min_angle_span;
pub const AVG_ANGLE_SPAN: Metric = QUADRATIC_METRICS.avg_angle_span;
pub const MAX_ANGLE_SPAN: Metric = QUADRATIC_METRICS.max_angle_span;
pub const MIN_WIDTH: Metric = QUADRATIC_METRICS.min_width;
pub const AVG_WIDTH: Metric = QUADRATIC_METRICS.avg_width;
pub const MAX_WIDTH: Metric = QUADRATIC_METRICS.max_width;
pub const MIN_EDGE: Metric = QUADRATIC_METRICS.min_edge;
pub const AVG_EDGE: Metric = QUADRATIC_METRICS.avg_edge;
pub const MAX_EDGE: Metric = QUADRATIC_METRICS.max_edge;
pub const MAX_EDGE_ASPECT: f64 = QUADRATIC_METRICS.max_edge_aspect;
pub const MIN_DIAG: Metric = QUADRATIC_METRICS.min_diag;
pub const AVG_DIAG: Metric = QUADRATIC_METRICS.avg_diag;
pub const MAX_DIAG: Metric = QUADRATIC_METRICS.max_diag;
pub const MAX_DIAG_ASPECT: f64 = QUADRATIC_METRICS.max_diag_aspect;
pub const MIN_AREA: Metric = QUADRATIC_METRICS.min_area;
pub const AVG_AREA: Metric = QUADRATIC_METRICS.avg_area;
pub const MAX_AREA: Metric = QUADRATIC_METRICS.max_area;

impl CellId {
  /// Average area in steradians of cells at `level`.
  #[inline]
  #[must_use]
  pub fn average_area(level: u8) -> f64 {
    AVG_AREA.get_value(level)
  }
}
