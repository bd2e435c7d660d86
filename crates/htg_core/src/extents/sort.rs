//! ArraySort - dimension order for sorting sparse storage.

use std::ops::{Index, IndexMut};

use smallvec::SmallVec;

use super::coordinates::INLINE_DIMENSIONS;

/// Ordered list of dimension indices.
///
/// Sorting by `[1, 0]` orders entries by dimension 1 first, then breaks
/// ties on dimension 0.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct ArraySort(SmallVec<[usize; INLINE_DIMENSIONS]>);

impl ArraySort {
  /// Identity order `[0, 1, .., dimensions - 1]`.
  pub fn identity(dimensions: usize) -> Self {
    Self((0..dimensions).collect())
  }

  pub fn from_slice(dims: &[usize]) -> Self {
    Self(SmallVec::from_slice(dims))
  }

  /// Number of dimensions participating in the sort.
  #[inline]
  pub fn dimensions(&self) -> usize {
    self.0.len()
  }

  pub fn set_dimensions(&mut self, dimensions: usize) {
    self.0.resize(dimensions, 0);
  }

  #[inline]
  pub fn as_slice(&self) -> &[usize] {
    &self.0
  }

  /// True if every dimension in `0..dimensions` appears in the sort.
  pub fn covers(&self, dimensions: usize) -> bool {
    (0..dimensions).all(|d| self.0.contains(&d))
  }
}

impl Index<usize> for ArraySort {
  type Output = usize;

  #[inline]
  fn index(&self, i: usize) -> &usize {
    &self.0[i]
  }
}

impl IndexMut<usize> for ArraySort {
  #[inline]
  fn index_mut(&mut self, i: usize) -> &mut usize {
    &mut self.0[i]
  }
}

impl<const N: usize> From<[usize; N]> for ArraySort {
  fn from(dims: [usize; N]) -> Self {
    Self::from_slice(&dims)
  }
}
