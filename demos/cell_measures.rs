use xs_s2::measures::{AVG_AREA, AVG_EDGE, MAX_DIAG, MIN_WIDTH};
use xs_s2::{CellId, Projection, MAX_LEVEL};

const EARTH_RADIUS_KM: f64 = 6371.01;

fn main() {
  println!("--- S2 Cell Measures Example ---");
  println!("{:>5} {:>16} {:>14} {:>14}", "level", "avg area km^2", "avg edge km", "max diag km");
  for level in (0..=MAX_LEVEL).step_by(3) {
    println!(
      "{:>5} {:>16.6} {:>14.6} {:>14.6}",
      level,
      AVG_AREA.get_value(level) * EARTH_RADIUS_KM * EARTH_RADIUS_KM,
      AVG_EDGE.get_value(level) * EARTH_RADIUS_KM,
      MAX_DIAG.get_value(level) * EARTH_RADIUS_KM,
    );
  }

  // Choosing a level from a size requirement
  let one_km = 1.0 / EARTH_RADIUS_KM;
  println!("\nCoarsest level whose cells are at most ~1 km across: {}", MAX_DIAG.get_level_for_max_value(one_km));
  println!("Finest level whose cells are at least ~1 km wide: {}", MIN_WIDTH.get_level_for_min_value(one_km));
  println!("Level with edges closest to 1 km: {}", AVG_EDGE.get_closest_level(one_km));

  // Projection trade-offs
  println!("\nArea spread (max / min) per projection:");
  for projection in [Projection::Linear, Projection::Tan, Projection::Quadratic] {
    let m = projection.metrics();
    println!("  {:?}: {:.3}", projection, m.max_area.deriv() / m.min_area.deriv());
  }

  println!("\nSix level 0 cells cover {:.6} steradians", 6.0 * CellId::average_area(0));
}
