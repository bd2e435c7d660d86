//! DenseArray - contiguous N-D storage.
//!
//! Layout: dimension 0 varies fastest. `stride[0] = 1` and
//! `stride[k] = size[0] * .. * size[k-1]`; `offset[k]` is the begin of
//! dimension `k`, so non-zero-based extents address the same buffer.
//!
//! Indexing does not check bounds against the extents; out-of-extents
//! coordinates either hit an unrelated element or panic on the slice.

use std::any::Any;
use std::fmt;
use std::ops::{Index, IndexMut};

use smallvec::SmallVec;

use super::{
  check_linear_index, convert_variant, Array, ArrayError, ArrayMetadata, ArrayValue,
  HeapMemoryBlock, MemoryBlock, TypedArray, ValueType, Variant,
};
use crate::extents::{Coordinates, CoordinateT, Extents, SizeT};

/// Dense array of `T`.
pub struct DenseArray<T: ArrayValue> {
  metadata: ArrayMetadata,
  extents: Extents,
  storage: Box<dyn MemoryBlock<T>>,
  strides: SmallVec<[SizeT; 4]>,
  offsets: SmallVec<[CoordinateT; 4]>,
}

impl<T: ArrayValue> DenseArray<T> {
  /// Zero-dimensional, empty array.
  pub fn new() -> Self {
    Self {
      metadata: ArrayMetadata::default(),
      extents: Extents::default(),
      storage: Box::new(HeapMemoryBlock::<T>::new(0)),
      strides: SmallVec::new(),
      offsets: SmallVec::new(),
    }
  }

  /// Array allocated to `extents`, filled with `T::default()`.
  pub fn with_extents(extents: &Extents) -> Self {
    let mut array = Self::new();
    array.resize(extents);
    array
  }

  /// Adopt `block` as storage for `extents`.
  ///
  /// The previous storage is released. Fails without mutation when the
  /// block holds fewer than `extents.size()` values.
  pub fn external_storage(
    &mut self,
    extents: &Extents,
    block: Box<dyn MemoryBlock<T>>,
  ) -> Result<(), ArrayError> {
    let required = extents.size();
    if (block.len() as SizeT) < required {
      let err = ArrayError::StorageTooSmall {
        required,
        available: block.len() as SizeT,
      };
      log::error!("external_storage: {}", err);
      return Err(err);
    }
    self.storage = block;
    self.reconfigure(extents);
    Ok(())
  }

  /// Set every element to `value` in one linear pass.
  pub fn fill(&mut self, value: &T) {
    self.storage_mut().fill(value.clone());
  }

  /// The `size()` values in storage order.
  #[inline]
  pub fn storage(&self) -> &[T] {
    &self.storage.as_slice()[..self.extents.size() as usize]
  }

  #[inline]
  pub fn storage_mut(&mut self) -> &mut [T] {
    let size = self.extents.size() as usize;
    &mut self.storage.as_mut_slice()[..size]
  }

  pub fn strides(&self) -> &[SizeT] {
    &self.strides
  }

  /// Linear offset of `coordinates` in storage.
  #[inline]
  pub fn map_coordinates(&self, coordinates: &Coordinates) -> usize {
    debug_assert_eq!(coordinates.dimensions(), self.extents.dimensions());
    coordinates
      .iter()
      .zip(self.offsets.iter().zip(self.strides.iter()))
      .map(|(&c, (&offset, &stride))| (c - offset) as SizeT * stride)
      .sum::<SizeT>() as usize
  }

  fn reconfigure(&mut self, extents: &Extents) {
    self.extents = extents.clone();
    self.metadata.reset_labels(extents.dimensions());

    self.strides.clear();
    self.offsets.clear();
    let mut stride: SizeT = 1;
    for range in extents.iter() {
      self.strides.push(stride);
      self.offsets.push(range.begin());
      stride *= range.size();
    }
  }
}

impl<T: ArrayValue> Default for DenseArray<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: ArrayValue> Clone for DenseArray<T> {
  fn clone(&self) -> Self {
    Self {
      metadata: self.metadata.clone(),
      extents: self.extents.clone(),
      storage: Box::new(HeapMemoryBlock::from(self.storage().to_vec())),
      strides: self.strides.clone(),
      offsets: self.offsets.clone(),
    }
  }
}

impl<T: ArrayValue> fmt::Debug for DenseArray<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DenseArray")
      .field("name", &self.metadata.name())
      .field("value_type", &T::VALUE_TYPE)
      .field("extents", &self.extents)
      .finish()
  }
}

impl<T: ArrayValue> Index<&Coordinates> for DenseArray<T> {
  type Output = T;

  #[inline]
  fn index(&self, coordinates: &Coordinates) -> &T {
    &self.storage.as_slice()[self.map_coordinates(coordinates)]
  }
}

impl<T: ArrayValue> IndexMut<&Coordinates> for DenseArray<T> {
  #[inline]
  fn index_mut(&mut self, coordinates: &Coordinates) -> &mut T {
    let offset = self.map_coordinates(coordinates);
    &mut self.storage.as_mut_slice()[offset]
  }
}

impl<T: ArrayValue> Array for DenseArray<T> {
  fn is_dense(&self) -> bool {
    true
  }

  fn extents(&self) -> &Extents {
    &self.extents
  }

  fn non_null_size(&self) -> SizeT {
    self.extents.size()
  }

  fn resize(&mut self, extents: &Extents) {
    self.storage = Box::new(HeapMemoryBlock::<T>::new(extents.size() as usize));
    self.reconfigure(extents);
  }

  fn metadata(&self) -> &ArrayMetadata {
    &self.metadata
  }

  fn metadata_mut(&mut self) -> &mut ArrayMetadata {
    &mut self.metadata
  }

  fn coordinates_n(&self, n: SizeT, coordinates: &mut Coordinates) {
    self.extents.left_to_right_coordinates_n(n, coordinates);
  }

  fn value_type(&self) -> ValueType {
    T::VALUE_TYPE
  }

  fn variant_value(&self, coordinates: &Coordinates) -> Variant {
    self[coordinates].to_variant()
  }

  fn variant_value_n(&self, n: SizeT) -> Variant {
    self.storage()[n as usize].to_variant()
  }

  fn set_variant_value(&mut self, coordinates: &Coordinates, value: &Variant) -> Result<(), ArrayError> {
    self[coordinates] = convert_variant(value)?;
    Ok(())
  }

  fn set_variant_value_n(&mut self, n: SizeT, value: &Variant) -> Result<(), ArrayError> {
    check_linear_index(n, self.non_null_size())?;
    self.storage_mut()[n as usize] = convert_variant(value)?;
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

impl<T: ArrayValue> TypedArray<T> for DenseArray<T> {
  #[inline]
  fn value(&self, coordinates: &Coordinates) -> &T {
    &self[coordinates]
  }

  #[inline]
  fn value_1d(&self, i: CoordinateT) -> &T {
    &self.storage.as_slice()[(i - self.offsets[0]) as usize]
  }

  #[inline]
  fn value_2d(&self, i: CoordinateT, j: CoordinateT) -> &T {
    let offset = (i - self.offsets[0]) as SizeT + (j - self.offsets[1]) as SizeT * self.strides[1];
    &self.storage.as_slice()[offset as usize]
  }

  #[inline]
  fn value_3d(&self, i: CoordinateT, j: CoordinateT, k: CoordinateT) -> &T {
    let offset = (i - self.offsets[0]) as SizeT
      + (j - self.offsets[1]) as SizeT * self.strides[1]
      + (k - self.offsets[2]) as SizeT * self.strides[2];
    &self.storage.as_slice()[offset as usize]
  }

  #[inline]
  fn value_n(&self, n: SizeT) -> &T {
    &self.storage()[n as usize]
  }

  #[inline]
  fn set_value(&mut self, coordinates: &Coordinates, value: T) {
    self[coordinates] = value;
  }

  #[inline]
  fn set_value_n(&mut self, n: SizeT, value: T) {
    self.storage_mut()[n as usize] = value;
  }
}

#[cfg(test)]
#[path = "dense_test.rs"]
mod dense_test;
