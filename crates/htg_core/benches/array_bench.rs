//! Dense and sparse array access benchmarks.
//!
//! - **dense**: fill, typed 3D access, variant access
//! - **sparse**: lookup by linear scan vs. binary search after a full sort

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use htg_core::{
  Array, ArraySort, Coordinates, DenseArray, Extents, SparseArray, TypedArray, Variant,
};

fn bench_dense(c: &mut Criterion) {
  let extents = Extents::from_sizes(&[64, 64, 64]);
  let mut array = DenseArray::<f32>::with_extents(&extents);

  c.bench_function("dense::fill (64³)", |b| {
    b.iter(|| array.fill(black_box(&1.0)))
  });

  c.bench_function("dense::value_3d (64³ sweep)", |b| {
    b.iter(|| {
      let mut sum = 0.0f32;
      for k in 0..64 {
        for j in 0..64 {
          for i in 0..64 {
            sum += *array.value_3d(i, j, k);
          }
        }
      }
      black_box(sum)
    })
  });

  c.bench_function("dense::variant_value_n (64³ sweep)", |b| {
    b.iter(|| {
      let mut sum = 0.0f64;
      for n in 0..array.size() {
        if let Variant::F32(v) = array.variant_value_n(n) {
          sum += v as f64;
        }
      }
      black_box(sum)
    })
  });
}

fn populate_sparse(count: i64) -> SparseArray<f64> {
  let mut array = SparseArray::<f64>::with_extents(&Extents::from_sizes(&[count, count]));
  // reversed diagonal so an unsorted scan has no lucky ordering
  for n in (0..count).rev() {
    array.add_value_2d(n, (n * 7) % count, n as f64);
  }
  array
}

fn bench_sparse_lookup(c: &mut Criterion) {
  let mut group = c.benchmark_group("sparse::lookup");

  for count in [256i64, 4096] {
    let unsorted = populate_sparse(count);
    let mut sorted = populate_sparse(count);
    sorted
      .sort(&ArraySort::identity(2))
      .expect("identity sort is valid");

    let probes: Vec<Coordinates> = (0..count)
      .step_by(17)
      .map(|n| Coordinates::from([n, (n * 7) % count]))
      .collect();

    group.bench_with_input(BenchmarkId::new("linear", count), &probes, |b, probes| {
      b.iter(|| {
        probes
          .iter()
          .map(|p| *unsorted.value(black_box(p)))
          .sum::<f64>()
      })
    });

    group.bench_with_input(BenchmarkId::new("sorted", count), &probes, |b, probes| {
      b.iter(|| {
        probes
          .iter()
          .map(|p| *sorted.value(black_box(p)))
          .sum::<f64>()
      })
    });
  }

  group.finish();
}

criterion_group!(benches, bench_dense, bench_sparse_lookup);
criterion_main!(benches);
