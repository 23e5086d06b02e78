use xs_s2::{CellId, LatLng, S2Error};

fn main() -> Result<(), S2Error> {
  println!("--- Basic S2 Cell Indexing Example ---");

  // 1. Define a LatLng point (e.g., San Francisco City Hall)
  let lat_deg = 37.779265;
  let lng_deg = -122.419277;
  let point = LatLng::try_from_degrees(lat_deg, lng_deg)?;
  println!("Original Point: Lat {lat_deg:.6} deg, Lng {lng_deg:.6} deg");

  // 2. Find the leaf cell containing this point, then its level 14 ancestor
  let leaf = CellId::from_lat_lng(&point);
  let level = 14;
  let cell = leaf.parent_at_level(level)?;
  println!("Leaf cell: {} (token {})", leaf.id(), leaf.to_token());
  println!("Cell at level {level}: {cell} (token {})", cell.to_token());

  // 3. Inspect the cell
  println!("Face: {}, Level: {}, Is leaf: {}", cell.face(), cell.level(), cell.is_leaf());
  println!("Contains the leaf: {}", cell.contains(leaf));
  println!("Leaf id range: {:#018x} ..= {:#018x}", cell.range_min().id(), cell.range_max().id());

  // 4. Get the center of the cell
  let center = cell.to_lat_lng();
  println!(
    "Cell Center: Lat {:.6} deg, Lng {:.6} deg",
    center.lat_degrees(),
    center.lng_degrees()
  );

  // 5. Round-trip the compact token
  let token = cell.to_token();
  let parsed = CellId::from_token(&token)?;
  println!("Token {token} parses back to the same cell: {}", parsed == cell);

  // 6. Malformed tokens are rejected
  match CellId::from_token("not-a-token") {
    Ok(id) => println!("Unexpectedly parsed {id}"),
    Err(e) => println!("Rejected bad token: {e}"),
  }

  Ok(())
}
