use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use xs_s2::*;

fn get_fixed_cell(level: u8) -> CellId {
  CellId::from_lat_lng(&LatLng::from_degrees(48.8566, 2.3522)) // Paris
    .parent_at_level(level)
    .unwrap()
}

fn bench_edge_neighbors(c: &mut Criterion) {
  let interior = get_fixed_cell(15);
  // A face cell crosses onto four other faces.
  let face = CellId::from_face_pos_level(2, 0, 0).unwrap();
  c.benchmark_group("edge_neighbors")
    .bench_function("interior", |b| b.iter(|| black_box(interior).edge_neighbors()))
    .bench_function("face_crossing", |b| b.iter(|| black_box(face).edge_neighbors()));
}

fn bench_vertex_neighbors(c: &mut Criterion) {
  let cell = get_fixed_cell(16);
  c.bench_function("vertex_neighbors", |b| b.iter(|| black_box(cell).vertex_neighbors(black_box(15))));
}

fn bench_all_neighbors(c: &mut Criterion) {
  let cell = get_fixed_cell(12);
  let mut group = c.benchmark_group("all_neighbors");
  for diff in [0u8, 2, 4] {
    group.bench_with_input(BenchmarkId::from_parameter(diff), &diff, |b, &d| {
      b.iter(|| black_box(cell).all_neighbors(12 + d));
    });
  }
  group.finish();
}

criterion_group!(neighbor_benches, bench_edge_neighbors, bench_vertex_neighbors, bench_all_neighbors);
criterion_main!(neighbor_benches);
