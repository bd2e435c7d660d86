//! N-dimensional arrays with dense and sparse storage.
//!
//! Two orthogonal axes:
//!
//! - [`Array`]: object-safe interface over any backend and value type,
//!   reading and writing through [`Variant`]
//! - [`TypedArray<T>`]: typed access for one element type
//!
//! Backends are [`DenseArray<T>`] (contiguous buffer, dimension 0 fastest)
//! and [`SparseArray<T>`] (parallel coordinate/value lists plus a null
//! value). [`create_array`] builds either behind `Box<dyn Array>`.

use std::any::Any;
use std::fmt;

use crate::extents::{Coordinates, Extents, Range, SizeT};

pub mod dense;
pub mod error;
pub mod factory;
pub mod memory;
pub mod metadata;
pub mod sparse;
pub mod value;

pub use dense::DenseArray;
pub use error::ArrayError;
pub use factory::{create_array, create_array_from_codes, StorageKind};
pub use memory::{HeapMemoryBlock, MemoryBlock, StaticMemoryBlock};
pub use metadata::ArrayMetadata;
pub use sparse::SparseArray;
pub use value::{ArrayValue, ValueType, ValueTypeTag, Variant};

// =============================================================================
// Array - type-erased interface
// =============================================================================

/// Type-erased N-dimensional array.
///
/// The `n`-th linear index visits non-null values in a backend-defined
/// order. `coordinates_n(n)` and `variant_value_n(n)` always refer to the
/// same cell.
pub trait Array: fmt::Debug + Send + Sync {
  /// True for contiguous storage.
  fn is_dense(&self) -> bool;

  fn extents(&self) -> &Extents;

  #[inline]
  fn dimensions(&self) -> usize {
    self.extents().dimensions()
  }

  /// Capacity: product of extent sizes.
  #[inline]
  fn size(&self) -> SizeT {
    self.extents().size()
  }

  /// Number of explicitly stored values.
  fn non_null_size(&self) -> SizeT;

  /// Resize to `extents`, discarding contents and dimension labels.
  ///
  /// Callers re-query `extents()` afterwards; both backends in this crate
  /// store exactly the requested extents.
  fn resize(&mut self, extents: &Extents);

  fn resize_1d(&mut self, i: Range) {
    self.resize(&Extents::from(i));
  }

  fn resize_2d(&mut self, i: Range, j: Range) {
    self.resize(&Extents::from((i, j)));
  }

  fn resize_3d(&mut self, i: Range, j: Range, k: Range) {
    self.resize(&Extents::from((i, j, k)));
  }

  fn metadata(&self) -> &ArrayMetadata;

  fn metadata_mut(&mut self) -> &mut ArrayMetadata;

  fn name(&self) -> &str {
    self.metadata().name()
  }

  /// Set the array name; CR and LF are stripped.
  fn set_name(&mut self, name: &str) {
    self.metadata_mut().set_name(name);
  }

  /// Label of dimension `i`; empty (and logged) when `i` is out of range.
  fn dimension_label(&self, i: usize) -> &str {
    self.metadata().label(i)
  }

  /// Set the label of dimension `i`; CR and LF are stripped.
  fn set_dimension_label(&mut self, i: usize, label: &str) -> Result<(), ArrayError> {
    self.metadata_mut().set_label(i, label)
  }

  /// Coordinates of the `n`-th non-null value.
  fn coordinates_n(&self, n: SizeT, coordinates: &mut Coordinates);

  fn value_type(&self) -> ValueType;

  fn variant_value(&self, coordinates: &Coordinates) -> Variant;

  fn variant_value_1d(&self, i: i64) -> Variant {
    self.variant_value(&Coordinates::from([i]))
  }

  fn variant_value_2d(&self, i: i64, j: i64) -> Variant {
    self.variant_value(&Coordinates::from([i, j]))
  }

  fn variant_value_3d(&self, i: i64, j: i64, k: i64) -> Variant {
    self.variant_value(&Coordinates::from([i, j, k]))
  }

  /// Value of the `n`-th non-null entry.
  fn variant_value_n(&self, n: SizeT) -> Variant;

  fn set_variant_value(&mut self, coordinates: &Coordinates, value: &Variant) -> Result<(), ArrayError>;

  fn set_variant_value_1d(&mut self, i: i64, value: &Variant) -> Result<(), ArrayError> {
    self.set_variant_value(&Coordinates::from([i]), value)
  }

  fn set_variant_value_2d(&mut self, i: i64, j: i64, value: &Variant) -> Result<(), ArrayError> {
    self.set_variant_value(&Coordinates::from([i, j]), value)
  }

  fn set_variant_value_3d(&mut self, i: i64, j: i64, k: i64, value: &Variant) -> Result<(), ArrayError> {
    self.set_variant_value(&Coordinates::from([i, j, k]), value)
  }

  fn set_variant_value_n(&mut self, n: SizeT, value: &Variant) -> Result<(), ArrayError>;

  /// Copy one value from `source` at `source_coordinates` to `target_coordinates`.
  ///
  /// Both arrays must hold the same value type; on mismatch nothing is written.
  fn copy_value(
    &mut self,
    source: &dyn Array,
    source_coordinates: &Coordinates,
    target_coordinates: &Coordinates,
  ) -> Result<(), ArrayError> {
    check_copy_types(source, self.value_type())?;
    self.set_variant_value(target_coordinates, &source.variant_value(source_coordinates))
  }

  /// Copy the `source_n`-th non-null value of `source` to `target_coordinates`.
  fn copy_value_from_n(
    &mut self,
    source: &dyn Array,
    source_n: SizeT,
    target_coordinates: &Coordinates,
  ) -> Result<(), ArrayError> {
    check_copy_types(source, self.value_type())?;
    check_linear_index(source_n, source.non_null_size())?;
    self.set_variant_value(target_coordinates, &source.variant_value_n(source_n))
  }

  /// Copy the value at `source_coordinates` into this array's `target_n`-th entry.
  fn copy_value_to_n(
    &mut self,
    source: &dyn Array,
    source_coordinates: &Coordinates,
    target_n: SizeT,
  ) -> Result<(), ArrayError> {
    check_copy_types(source, self.value_type())?;
    check_linear_index(target_n, self.non_null_size())?;
    self.set_variant_value_n(target_n, &source.variant_value(source_coordinates))
  }

  /// Independent copy: new storage, new labels.
  fn deep_copy(&self) -> Box<dyn Array>;

  fn as_any(&self) -> &dyn Any;

  fn as_any_mut(&mut self) -> &mut dyn Any;
}

fn check_copy_types(source: &dyn Array, target_type: ValueType) -> Result<(), ArrayError> {
  if source.value_type() != target_type {
    let err = ArrayError::TypeMismatch {
      source_type: source.value_type(),
      target_type,
    };
    log::error!("copy_value: {}", err);
    return Err(err);
  }
  Ok(())
}

pub(crate) fn check_linear_index(n: SizeT, size: SizeT) -> Result<(), ArrayError> {
  if n >= size {
    let err = ArrayError::IndexOutOfRange { index: n, size };
    log::error!("copy_value: {}", err);
    return Err(err);
  }
  Ok(())
}

/// Convert a variant for storage in a `T` array, logging failures.
pub(crate) fn convert_variant<T: ArrayValue>(value: &Variant) -> Result<T, ArrayError> {
  T::from_variant(value).ok_or_else(|| {
    let err = ArrayError::UnconvertibleValue {
      value: value.to_string(),
      target_type: T::VALUE_TYPE,
    };
    log::error!("set_variant_value: {}", err);
    err
  })
}

// =============================================================================
// TypedArray<T> - typed access
// =============================================================================

/// Typed access to an array of `T`.
pub trait TypedArray<T: ArrayValue>: Array {
  fn value(&self, coordinates: &Coordinates) -> &T;

  fn value_1d(&self, i: i64) -> &T {
    self.value(&Coordinates::from([i]))
  }

  fn value_2d(&self, i: i64, j: i64) -> &T {
    self.value(&Coordinates::from([i, j]))
  }

  fn value_3d(&self, i: i64, j: i64, k: i64) -> &T {
    self.value(&Coordinates::from([i, j, k]))
  }

  fn value_n(&self, n: SizeT) -> &T;

  fn set_value(&mut self, coordinates: &Coordinates, value: T);

  fn set_value_1d(&mut self, i: i64, value: T) {
    self.set_value(&Coordinates::from([i]), value);
  }

  fn set_value_2d(&mut self, i: i64, j: i64, value: T) {
    self.set_value(&Coordinates::from([i, j]), value);
  }

  fn set_value_3d(&mut self, i: i64, j: i64, k: i64, value: T) {
    self.set_value(&Coordinates::from([i, j, k]), value);
  }

  fn set_value_n(&mut self, n: SizeT, value: T);
}
