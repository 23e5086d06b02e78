// src/latlng.rs

use crate::constants::{EPSILON_RAD, M_180_PI, M_2PI, M_PI, M_PI_180, M_PI_2};
use crate::types::{LatLng, Point, S2Error};

/// Determines if the components of two spherical coordinates are within some
/// threshold distance of each other.
#[inline]
#[must_use]
pub fn geo_almost_equal_threshold(p1: &LatLng, p2: &LatLng, threshold: f64) -> bool {
  (p1.lat - p2.lat).abs() < threshold && (p1.lng - p2.lng).abs() < threshold
}

/// Determines if the components of two spherical coordinates are within the
/// standard epsilon distance of each other.
#[inline]
#[must_use]
pub fn geo_almost_equal(p1: &LatLng, p2: &LatLng) -> bool {
  geo_almost_equal_threshold(p1, p2, EPSILON_RAD)
}

/// Constrains longitude to the range `[-PI, PI]`.
#[inline]
#[must_use]
pub fn constrain_lng(mut lng: f64) -> f64 {
  while lng > M_PI {
    lng -= M_2PI;
  }
  while lng < -M_PI {
    lng += M_2PI;
  }
  lng
}

/// Converts degrees to radians.
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

/// Converts radians to degrees.
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}

impl LatLng {
  #[inline]
  #[must_use]
  pub const fn from_radians(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }

  #[inline]
  #[must_use]
  pub fn from_degrees(lat_degs: f64, lng_degs: f64) -> Self {
    Self {
      lat: degs_to_rads(lat_degs),
      lng: degs_to_rads(lng_degs),
    }
  }

  /// Like `from_degrees`, but rejects coordinates outside the valid range.
  ///
  /// # Errors
  ///
  /// `LatLngDomain` if `|lat| > 90` or `|lng| > 180` degrees.
  pub fn try_from_degrees(lat_degs: f64, lng_degs: f64) -> Result<Self, S2Error> {
    let ll = Self::from_degrees(lat_degs, lng_degs);
    if !ll.is_valid() {
      return Err(S2Error::LatLngDomain);
    }
    Ok(ll)
  }

  /// Latitude/longitude of the direction of `p`. `p` need not be unit length.
  #[must_use]
  pub fn from_point(p: &Point) -> Self {
    Self {
      lat: p.z.atan2((p.x * p.x + p.y * p.y).sqrt()),
      lng: p.y.atan2(p.x),
    }
  }

  /// Unit vector for this coordinate.
  #[must_use]
  pub fn to_point(&self) -> Point {
    let cos_lat = self.lat.cos();
    Point::new(self.lng.cos() * cos_lat, self.lng.sin() * cos_lat, self.lat.sin())
  }

  #[inline]
  #[must_use]
  pub fn lat_degrees(&self) -> f64 {
    rads_to_degs(self.lat)
  }

  #[inline]
  #[must_use]
  pub fn lng_degrees(&self) -> f64 {
    rads_to_degs(self.lng)
  }

  /// True when `|lat| <= pi/2` and `|lng| <= pi`.
  #[inline]
  #[must_use]
  pub fn is_valid(&self) -> bool {
    self.lat.abs() <= M_PI_2 && self.lng.abs() <= M_PI
  }

  /// Clamps latitude to `[-pi/2, pi/2]` and wraps longitude into `[-pi, pi]`.
  #[must_use]
  pub fn normalized(&self) -> Self {
    Self {
      lat: self.lat.clamp(-M_PI_2, M_PI_2),
      lng: constrain_lng(self.lng),
    }
  }
}

impl From<Point> for LatLng {
  fn from(p: Point) -> Self {
    LatLng::from_point(&p)
  }
}

impl From<LatLng> for Point {
  fn from(ll: LatLng) -> Self {
    ll.to_point()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{EPSILON_DEG, M_PI_4};

  #[test]
  fn test_degrees_radians() {
    assert_eq!(degs_to_rads(180.0), M_PI);
    assert!((rads_to_degs(M_PI_2) - 90.0).abs() < 1e-12);
    let ll = LatLng::from_degrees(45.0, -90.0);
    assert!((ll.lat - M_PI_4).abs() < 1e-15);
    assert!((ll.lng_degrees() + 90.0).abs() < 1e-12);
  }

  #[test]
  fn test_point_conversion() {
    let north = LatLng::from_degrees(90.0, 0.0).to_point();
    assert!((north.z - 1.0).abs() < f64::EPSILON);
    assert!(north.x.abs() < 1e-16);

    let origin = LatLng::from_radians(0.0, 0.0).to_point();
    assert_eq!(origin, Point::new(1.0, 0.0, 0.0));

    let ll = LatLng::from_degrees(-37.5, 144.9);
    let back = LatLng::from_point(&ll.to_point());
    assert!(geo_almost_equal(&ll, &back));

    // Scaling the vector does not change its direction.
    let scaled = LatLng::from_point(&(ll.to_point() * 7.0));
    assert!(geo_almost_equal(&ll, &scaled));
  }

  #[test]
  fn test_validity_and_normalization() {
    assert!(LatLng::from_degrees(90.0, 180.0).is_valid());
    assert!(!LatLng::from_degrees(91.0, 0.0).is_valid());
    assert!(!LatLng::from_degrees(0.0, 181.0).is_valid());
    assert_eq!(LatLng::try_from_degrees(100.0, 0.0), Err(S2Error::LatLngDomain));

    let n = LatLng::from_degrees(95.0, 270.0).normalized();
    assert_eq!(n.lat, M_PI_2);
    assert!((n.lng_degrees() + 90.0).abs() < 1e-9);
    assert!(n.is_valid());
  }

  #[test]
  fn test_geo_almost_equal_threshold() {
    let a = LatLng::from_degrees(15.0, 10.0);
    let mut b = a;
    assert!(geo_almost_equal_threshold(&a, &b, EPSILON_RAD / 2.0), "same point");

    b.lat = (15.0 + EPSILON_DEG * 2.0) * M_PI_180;
    assert!(!geo_almost_equal_threshold(&a, &b, EPSILON_RAD), "lat over threshold");
    assert!(geo_almost_equal_threshold(&a, &b, EPSILON_RAD * 3.0), "under a wider threshold");
  }

  #[test]
  fn test_constrain_lng() {
    assert_eq!(constrain_lng(0.0), 0.0, "lng 0");
    assert_eq!(constrain_lng(M_PI), M_PI, "lng pi (antimeridian)");
    assert_eq!(constrain_lng(M_2PI), 0.0, "lng 2pi wraps to 0");
    assert_eq!(constrain_lng(-M_PI), -M_PI, "lng -pi (antimeridian)");
    assert_eq!(constrain_lng(-M_2PI), 0.0, "lng -2pi wraps to 0");
  }
}
