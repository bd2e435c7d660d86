//! Randomized consistency checks between sparse and dense arrays.

use std::collections::HashMap;

use htg_core::{
  Array, ArraySort, Coordinates, DenseArray, Extents, SparseArray, TypedArray, Variant,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIDE: i64 = 24;

/// Distinct random cells of a `SIDE`³ box, each with a value.
fn random_cells(seed: u64, count: usize) -> HashMap<[i64; 3], f64> {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut cells = HashMap::new();
  while cells.len() < count {
    let key = [
      rng.random_range(0..SIDE),
      rng.random_range(0..SIDE),
      rng.random_range(0..SIDE),
    ];
    cells.entry(key).or_insert_with(|| rng.random_range(-100.0..100.0));
  }
  cells
}

fn populate(cells: &HashMap<[i64; 3], f64>) -> SparseArray<f64> {
  let mut array = SparseArray::<f64>::with_extents(&Extents::from_sizes(&[SIDE, SIDE, SIDE]));
  array.set_null_value(f64::NAN);
  for (key, value) in cells {
    array.add_value_3d(key[0], key[1], key[2], *value);
  }
  array
}

fn check_lookups(array: &SparseArray<f64>, cells: &HashMap<[i64; 3], f64>, seed: u64) {
  for (key, value) in cells {
    assert_eq!(
      *array.value_3d(key[0], key[1], key[2]),
      *value,
      "stored value at {:?}",
      key
    );
  }

  let mut rng = StdRng::seed_from_u64(seed);
  for _ in 0..500 {
    let key = [
      rng.random_range(0..SIDE),
      rng.random_range(0..SIDE),
      rng.random_range(0..SIDE),
    ];
    if !cells.contains_key(&key) {
      assert!(array.value_3d(key[0], key[1], key[2]).is_nan(), "null value at {:?}", key);
    }
  }
}

// =========================================================================
// Sparse lookups
// =========================================================================

#[test]
fn test_sparse_lookup_unsorted_and_sorted() {
  let cells = random_cells(7, 800);
  let mut array = populate(&cells);
  assert_eq!(array.non_null_size(), 800);
  array.validate().expect("distinct in-bounds entries");

  check_lookups(&array, &cells, 11);

  array.sort(&ArraySort::from([2, 0, 1])).expect("valid sort");
  check_lookups(&array, &cells, 12);

  array.sort(&ArraySort::identity(3)).expect("valid sort");
  check_lookups(&array, &cells, 13);
}

#[test]
fn test_sparse_entries_match_nth_accessors() {
  let cells = random_cells(21, 300);
  let mut array = populate(&cells);
  array.sort(&ArraySort::identity(3)).expect("valid sort");

  let mut coordinates = Coordinates::zeros(3);
  let mut previous: Option<[i64; 3]> = None;
  for n in 0..array.non_null_size() {
    array.coordinates_n(n, &mut coordinates);
    let key = [coordinates[0], coordinates[1], coordinates[2]];
    let expected = cells.get(&key).copied().expect("entry was inserted");
    assert_eq!(array.variant_value_n(n), Variant::F64(expected));
    assert_eq!(*array.value_n(n), expected);

    if let Some(prev) = previous {
      assert!(prev < key, "identity sort orders lexicographically");
    }
    previous = Some(key);
  }
}

#[test]
fn test_sparse_duplicate_detected_by_validate() {
  let cells = random_cells(3, 50);
  let mut array = populate(&cells);
  let (key, _) = cells.iter().next().expect("non-empty");
  array.add_value_3d(key[0], key[1], key[2], 0.0);
  assert!(array.validate().is_err(), "duplicate coordinates rejected");
}

// =========================================================================
// Dense
// =========================================================================

#[test]
fn test_sparse_copied_into_dense() {
  let cells = random_cells(42, 400);
  let sparse = populate(&cells);
  let mut dense = DenseArray::<f64>::with_extents(sparse.extents());
  dense.fill(&f64::NAN);

  let mut coordinates = Coordinates::zeros(3);
  for n in 0..sparse.non_null_size() {
    sparse.coordinates_n(n, &mut coordinates);
    dense
      .copy_value_from_n(&sparse, n, &coordinates)
      .expect("same value type");
  }

  for n in 0..dense.size() {
    dense.coordinates_n(n, &mut coordinates);
    let key = [coordinates[0], coordinates[1], coordinates[2]];
    let value = *dense.value_n(n);
    match cells.get(&key) {
      Some(expected) => assert_eq!(value, *expected, "copied value at {:?}", key),
      None => assert!(value.is_nan(), "untouched cell at {:?}", key),
    }
  }
}

#[test]
fn test_dense_deep_copy_is_independent() {
  let mut rng = StdRng::seed_from_u64(5);
  let mut dense = DenseArray::<i32>::with_extents(&Extents::from_sizes(&[7, 5, 3]));
  for n in 0..dense.size() {
    dense.set_value_n(n, rng.random_range(-1000..1000));
  }

  let copy = dense.deep_copy();
  let typed = copy
    .as_any()
    .downcast_ref::<DenseArray<i32>>()
    .expect("deep copy keeps the concrete type");

  dense.fill(&0);
  let mut rng = StdRng::seed_from_u64(5);
  for n in 0..typed.size() {
    let expected: i32 = rng.random_range(-1000..1000);
    assert_eq!(*typed.value_n(n), expected, "copy unaffected by fill");
    assert_eq!(*dense.value_n(n), 0);
  }
}
