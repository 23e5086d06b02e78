// src/math/point.rs

use crate::types::Point;
use std::ops::{Add, Mul, Neg, Sub};

impl Point {
  #[inline]
  #[must_use]
  pub const fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }

  /// Component by axis index (0 = x, 1 = y, 2 = z).
  ///
  /// # Panics
  ///
  /// Panics if `axis > 2`.
  #[inline]
  #[must_use]
  pub fn get(&self, axis: usize) -> f64 {
    match axis {
      0 => self.x,
      1 => self.y,
      2 => self.z,
      _ => panic!("axis index {axis} out of range"),
    }
  }

  #[inline]
  #[must_use]
  pub fn dot(&self, other: &Point) -> f64 {
    self.x * other.x + self.y * other.y + self.z * other.z
  }

  #[inline]
  #[must_use]
  pub fn cross(&self, other: &Point) -> Point {
    Point::new(
      self.y * other.z - self.z * other.y,
      self.z * other.x - self.x * other.z,
      self.x * other.y - self.y * other.x,
    )
  }

  #[inline]
  #[must_use]
  pub fn norm2(&self) -> f64 {
    self.dot(self)
  }

  #[inline]
  #[must_use]
  pub fn norm(&self) -> f64 {
    self.norm2().sqrt()
  }

  /// Scales the vector to unit length. The zero vector is returned unchanged.
  #[must_use]
  pub fn normalize(&self) -> Point {
    let n = self.norm();
    if n == 0.0 {
      return *self;
    }
    *self * (1.0 / n)
  }

  #[inline]
  #[must_use]
  pub fn abs(&self) -> Point {
    Point::new(self.x.abs(), self.y.abs(), self.z.abs())
  }

  /// Index of the component with the largest absolute value.
  /// Ties go to the later axis unless the earlier one is strictly larger.
  #[inline]
  #[must_use]
  pub fn largest_abs_component(&self) -> usize {
    let a = self.abs();
    if a.x > a.y {
      if a.x > a.z {
        0
      } else {
        2
      }
    } else if a.y > a.z {
      1
    } else {
      2
    }
  }

  /// Angle between two vectors in radians, in `[0, pi]`. Neither needs to be unit length.
  #[inline]
  #[must_use]
  pub fn angle(&self, other: &Point) -> f64 {
    self.cross(other).norm().atan2(self.dot(other))
  }
}

impl Add for Point {
  type Output = Point;
  fn add(self, rhs: Point) -> Point {
    Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
  }
}

impl Sub for Point {
  type Output = Point;
  fn sub(self, rhs: Point) -> Point {
    Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
  }
}

impl Mul<f64> for Point {
  type Output = Point;
  fn mul(self, rhs: f64) -> Point {
    Point::new(self.x * rhs, self.y * rhs, self.z * rhs)
  }
}

impl Neg for Point {
  type Output = Point;
  fn neg(self) -> Point {
    Point::new(-self.x, -self.y, -self.z)
  }
}
