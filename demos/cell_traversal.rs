use xs_s2::{CellId, LatLng, S2Error};

fn main() -> Result<(), S2Error> {
  println!("--- S2 Cell Traversal Example ---");

  let origin = CellId::from_lat_lng(&LatLng::from_degrees(51.5074, -0.1278)).parent_at_level(10)?;
  println!("Origin cell: {origin} (token {})", origin.to_token());

  // 1. Edge neighbors, in down/right/up/left order
  println!("\nEdge neighbors:");
  for (name, nbr) in ["down", "right", "up", "left"].iter().zip(origin.edge_neighbors()) {
    println!("  {name:>5}: {}", nbr.to_token());
  }

  // 2. Cells sharing the closest vertex at the parent level
  println!("\nVertex neighbors at level 9:");
  for nbr in origin.vertex_neighbors(9)? {
    println!("  {}", nbr.to_token());
  }

  // 3. The ring of level 11 cells around the origin
  let ring = origin.all_neighbors(11)?;
  println!("\n{} neighbors at level 11", ring.len());

  // 4. Children in Hilbert order
  println!("\nChildren:");
  for child in origin.child_range(11)? {
    let c = child.to_lat_lng();
    println!("  {child} at ({:.4}, {:.4})", c.lat_degrees(), c.lng_degrees());
  }

  // 5. Walking along the curve, wrapping past the last face
  let last = CellId::end(2)?.prev();
  println!("\nAfter the last level 2 cell ({last}) comes {}", last.next_wrap());
  println!("Ten steps back from there: {}", last.advance_wrap(-10));

  Ok(())
}
