//! Backing memory for dense arrays.
//!
//! - [`HeapMemoryBlock`]: owned allocation, freed on drop
//! - [`StaticMemoryBlock`]: caller memory that outlives the program's use of
//!   the array; never freed by the array

use std::fmt;

/// Contiguous storage adopted by a `DenseArray`.
pub trait MemoryBlock<T>: fmt::Debug + Send + Sync {
  fn as_slice(&self) -> &[T];

  fn as_mut_slice(&mut self) -> &mut [T];

  fn len(&self) -> usize {
    self.as_slice().len()
  }

  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Heap allocation owned by the array.
#[derive(Debug, Clone)]
pub struct HeapMemoryBlock<T>(Box<[T]>);

impl<T: Clone + Default> HeapMemoryBlock<T> {
  /// Allocate `len` default values.
  pub fn new(len: usize) -> Self {
    Self(vec![T::default(); len].into_boxed_slice())
  }
}

impl<T> From<Vec<T>> for HeapMemoryBlock<T> {
  fn from(values: Vec<T>) -> Self {
    Self(values.into_boxed_slice())
  }
}

impl<T: fmt::Debug + Send + Sync> MemoryBlock<T> for HeapMemoryBlock<T> {
  #[inline]
  fn as_slice(&self) -> &[T] {
    &self.0
  }

  #[inline]
  fn as_mut_slice(&mut self) -> &mut [T] {
    &mut self.0
  }
}

/// Caller-provided memory; dropping the block does not free it.
#[derive(Debug)]
pub struct StaticMemoryBlock<T: 'static>(&'static mut [T]);

impl<T> StaticMemoryBlock<T> {
  pub fn new(memory: &'static mut [T]) -> Self {
    Self(memory)
  }
}

impl<T: fmt::Debug + Send + Sync> MemoryBlock<T> for StaticMemoryBlock<T> {
  #[inline]
  fn as_slice(&self) -> &[T] {
    &self.0[..]
  }

  #[inline]
  fn as_mut_slice(&mut self) -> &mut [T] {
    &mut self.0[..]
  }
}
