//! SparseArray - coordinate-list storage with a null value.
//!
//! Storage is one coordinate list per dimension plus a parallel value list.
//! Lookups binary-search when the last `sort` covered every dimension and
//! nothing has been appended since; otherwise they scan linearly.

use std::any::Any;
use std::cmp::Ordering;

use super::{
  check_linear_index, convert_variant, Array, ArrayError, ArrayMetadata, ArrayValue, TypedArray,
  ValueType, Variant,
};
use crate::extents::{ArraySort, Coordinates, CoordinateT, Extents, Range, SizeT};

/// Sparse array of `T`.
#[derive(Clone, Debug)]
pub struct SparseArray<T: ArrayValue> {
  metadata: ArrayMetadata,
  extents: Extents,
  coordinates: Vec<Vec<CoordinateT>>,
  values: Vec<T>,
  null_value: T,
  /// Order the storage is currently sorted by, if any.
  sort_order: Option<ArraySort>,
}

impl<T: ArrayValue> SparseArray<T> {
  pub fn new() -> Self {
    Self {
      metadata: ArrayMetadata::default(),
      extents: Extents::default(),
      coordinates: Vec::new(),
      values: Vec::new(),
      null_value: T::default(),
      sort_order: None,
    }
  }

  pub fn with_extents(extents: &Extents) -> Self {
    let mut array = Self::new();
    array.resize(extents);
    array
  }

  /// Value returned for coordinates with no stored entry.
  pub fn null_value(&self) -> &T {
    &self.null_value
  }

  pub fn set_null_value(&mut self, value: T) {
    self.null_value = value;
  }

  /// Append an entry without checking for duplicates. Amortized O(1).
  ///
  /// Coordinates of the wrong dimensionality are logged and dropped.
  pub fn add_value(&mut self, coordinates: &Coordinates, value: T) {
    if self.check_dimensions(coordinates).is_err() {
      return;
    }
    for (storage, &c) in self.coordinates.iter_mut().zip(coordinates.iter()) {
      storage.push(c);
    }
    self.values.push(value);
    self.sort_order = None;
  }

  pub fn add_value_1d(&mut self, i: CoordinateT, value: T) {
    self.add_value(&Coordinates::from([i]), value);
  }

  pub fn add_value_2d(&mut self, i: CoordinateT, j: CoordinateT, value: T) {
    self.add_value(&Coordinates::from([i, j]), value);
  }

  pub fn add_value_3d(&mut self, i: CoordinateT, j: CoordinateT, k: CoordinateT, value: T) {
    self.add_value(&Coordinates::from([i, j, k]), value);
  }

  /// Drop every entry; extents and labels are kept.
  pub fn clear(&mut self) {
    for storage in &mut self.coordinates {
      storage.clear();
    }
    self.values.clear();
    self.sort_order = None;
  }

  /// Resize storage to `count` entries.
  ///
  /// New entries have zero coordinates and default values; fill them
  /// through the raw storage accessors.
  pub fn reserve_storage(&mut self, count: usize) {
    for storage in &mut self.coordinates {
      storage.resize(count, 0);
    }
    self.values.resize(count, T::default());
    self.sort_order = None;
  }

  /// Coordinates of every entry along `dim`.
  pub fn coordinate_storage(&self, dim: usize) -> &[CoordinateT] {
    &self.coordinates[dim]
  }

  /// Mutable coordinates along `dim`. Invalidates the sort order.
  pub fn coordinate_storage_mut(&mut self, dim: usize) -> &mut [CoordinateT] {
    self.sort_order = None;
    &mut self.coordinates[dim]
  }

  pub fn value_storage(&self) -> &[T] {
    &self.values
  }

  pub fn value_storage_mut(&mut self) -> &mut [T] {
    &mut self.values
  }

  /// Current sort order, if the storage is known to be sorted.
  pub fn sort_order(&self) -> Option<&ArraySort> {
    self.sort_order.as_ref()
  }

  /// Stable sort of the entries by the dimensions named in `sort`.
  ///
  /// Dimensions not named keep their relative order.
  pub fn sort(&mut self, sort: &ArraySort) -> Result<(), ArrayError> {
    let dimensions = self.dimensions();
    let mut seen = vec![false; dimensions];
    for &dim in sort.as_slice() {
      if dim >= dimensions {
        let err = ArrayError::DimensionOutOfRange {
          index: dim,
          dimensions,
        };
        log::error!("sort: {}", err);
        return Err(err);
      }
      if std::mem::replace(&mut seen[dim], true) {
        let err = ArrayError::DuplicateSortDimension { dim };
        log::error!("sort: {}", err);
        return Err(err);
      }
    }

    let mut permutation: Vec<usize> = (0..self.values.len()).collect();
    permutation.sort_by(|&a, &b| self.compare_entries(sort.as_slice(), a, b));

    for storage in &mut self.coordinates {
      *storage = permutation.iter().map(|&p| storage[p]).collect();
    }
    self.values = permutation.iter().map(|&p| self.values[p].clone()).collect();
    self.sort_order = Some(sort.clone());
    Ok(())
  }

  /// Set each dimension to `[0, 1 + max coordinate)`, or empty without entries.
  pub fn set_extents_from_contents(&mut self) {
    let extents = self
      .coordinates
      .iter()
      .map(|storage| match storage.iter().max() {
        Some(&max) => Range::new(0, max + 1),
        None => Range::default(),
      })
      .collect();
    self.extents = extents;
  }

  /// Replace the extents without touching contents.
  ///
  /// The caller keeps the extents at least as large as the stored
  /// coordinates; `validate` reports violations.
  pub fn set_extents(&mut self, extents: &Extents) -> Result<(), ArrayError> {
    if extents.dimensions() != self.dimensions() {
      let err = ArrayError::DimensionMismatch {
        expected: self.dimensions(),
        actual: extents.dimensions(),
      };
      log::error!("set_extents: {}", err);
      return Err(err);
    }
    self.extents = extents.clone();
    Ok(())
  }

  /// Check that every entry lies inside the extents and no coordinates repeat.
  ///
  /// O(N log N). A debugging aid; nothing calls it implicitly.
  pub fn validate(&self) -> Result<(), ArrayError> {
    let mut coords = Coordinates::default();
    for n in 0..self.values.len() {
      self.entry_coordinates(n, &mut coords);
      if !self.extents.contains(&coords) {
        let err = ArrayError::OutOfExtents {
          coordinates: coords,
        };
        log::error!("validate: {}", err);
        return Err(err);
      }
    }

    let all_dims: Vec<usize> = (0..self.dimensions()).collect();
    let mut order: Vec<usize> = (0..self.values.len()).collect();
    order.sort_unstable_by(|&a, &b| self.compare_entries(&all_dims, a, b));
    for pair in order.windows(2) {
      if self.compare_entries(&all_dims, pair[0], pair[1]) == Ordering::Equal {
        self.entry_coordinates(pair[0], &mut coords);
        let err = ArrayError::DuplicateCoordinates {
          coordinates: coords,
        };
        log::error!("validate: {}", err);
        return Err(err);
      }
    }
    Ok(())
  }

  fn entry_coordinates(&self, n: usize, coordinates: &mut Coordinates) {
    coordinates.set_dimensions(self.coordinates.len());
    for (dim, storage) in self.coordinates.iter().enumerate() {
      coordinates[dim] = storage[n];
    }
  }

  fn compare_entries(&self, dims: &[usize], a: usize, b: usize) -> Ordering {
    dims
      .iter()
      .map(|&d| self.coordinates[d][a].cmp(&self.coordinates[d][b]))
      .find(|o| o.is_ne())
      .unwrap_or(Ordering::Equal)
  }

  fn check_dimensions(&self, coordinates: &Coordinates) -> Result<(), ArrayError> {
    if coordinates.dimensions() == self.coordinates.len() {
      return Ok(());
    }
    let err = ArrayError::DimensionMismatch {
      expected: self.coordinates.len(),
      actual: coordinates.dimensions(),
    };
    log::error!("sparse array write: {}", err);
    Err(err)
  }

  fn compare_entry_to(&self, dims: &[usize], n: usize, coordinates: &Coordinates) -> Ordering {
    dims
      .iter()
      .map(|&d| self.coordinates[d][n].cmp(&coordinates[d]))
      .find(|o| o.is_ne())
      .unwrap_or(Ordering::Equal)
  }

  fn find(&self, coordinates: &Coordinates) -> Option<usize> {
    if coordinates.dimensions() != self.coordinates.len() {
      return None;
    }
    match &self.sort_order {
      Some(sort) if sort.covers(self.coordinates.len()) => {
        let dims = sort.as_slice();
        let (mut lo, mut hi) = (0, self.values.len());
        while lo < hi {
          let mid = lo + (hi - lo) / 2;
          match self.compare_entry_to(dims, mid, coordinates) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return Some(mid),
          }
        }
        None
      }
      _ => (0..self.values.len()).find(|&n| {
        self
          .coordinates
          .iter()
          .zip(coordinates.iter())
          .all(|(storage, &c)| storage[n] == c)
      }),
    }
  }
}

impl<T: ArrayValue> Default for SparseArray<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: ArrayValue> Array for SparseArray<T> {
  fn is_dense(&self) -> bool {
    false
  }

  fn extents(&self) -> &Extents {
    &self.extents
  }

  fn non_null_size(&self) -> SizeT {
    self.values.len() as SizeT
  }

  fn resize(&mut self, extents: &Extents) {
    self.extents = extents.clone();
    self.coordinates = vec![Vec::new(); extents.dimensions()];
    self.values.clear();
    self.sort_order = None;
    self.metadata.reset_labels(extents.dimensions());
  }

  fn metadata(&self) -> &ArrayMetadata {
    &self.metadata
  }

  fn metadata_mut(&mut self) -> &mut ArrayMetadata {
    &mut self.metadata
  }

  fn coordinates_n(&self, n: SizeT, coordinates: &mut Coordinates) {
    self.entry_coordinates(n as usize, coordinates);
  }

  fn value_type(&self) -> ValueType {
    T::VALUE_TYPE
  }

  fn variant_value(&self, coordinates: &Coordinates) -> Variant {
    self.value(coordinates).to_variant()
  }

  fn variant_value_n(&self, n: SizeT) -> Variant {
    self.values[n as usize].to_variant()
  }

  fn set_variant_value(&mut self, coordinates: &Coordinates, value: &Variant) -> Result<(), ArrayError> {
    self.check_dimensions(coordinates)?;
    let value = convert_variant(value)?;
    self.set_value(coordinates, value);
    Ok(())
  }

  fn set_variant_value_n(&mut self, n: SizeT, value: &Variant) -> Result<(), ArrayError> {
    check_linear_index(n, self.non_null_size())?;
    self.values[n as usize] = convert_variant(value)?;
    Ok(())
  }

  fn deep_copy(&self) -> Box<dyn Array> {
    Box::new(self.clone())
  }

  fn as_any(&self) -> &dyn Any {
    self
  }

  fn as_any_mut(&mut self) -> &mut dyn Any {
    self
  }
}

impl<T: ArrayValue> TypedArray<T> for SparseArray<T> {
  fn value(&self, coordinates: &Coordinates) -> &T {
    match self.find(coordinates) {
      Some(n) => &self.values[n],
      None => &self.null_value,
    }
  }

  fn value_n(&self, n: SizeT) -> &T {
    &self.values[n as usize]
  }

  /// Overwrite an existing entry or append a new one.
  fn set_value(&mut self, coordinates: &Coordinates, value: T) {
    match self.find(coordinates) {
      Some(n) => self.values[n] = value,
      None => self.add_value(coordinates, value),
    }
  }

  fn set_value_n(&mut self, n: SizeT, value: T) {
    self.values[n as usize] = value;
  }
}

#[cfg(test)]
#[path = "sparse_test.rs"]
mod sparse_test;
