//! Coordinates - one index per dimension.

use std::fmt;
use std::ops::{Index, IndexMut};

use smallvec::SmallVec;

use super::CoordinateT;

/// Inline capacity: arrays of up to four dimensions never allocate.
pub(crate) const INLINE_DIMENSIONS: usize = 4;

/// Ordered list of per-dimension indices.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Coordinates(SmallVec<[CoordinateT; INLINE_DIMENSIONS]>);

impl Coordinates {
  /// Zero coordinates with `dimensions` entries.
  pub fn zeros(dimensions: usize) -> Self {
    Self(SmallVec::from_elem(0, dimensions))
  }

  pub fn from_slice(values: &[CoordinateT]) -> Self {
    Self(SmallVec::from_slice(values))
  }

  /// Number of dimensions.
  #[inline]
  pub fn dimensions(&self) -> usize {
    self.0.len()
  }

  /// Resize to `dimensions` entries, all reset to zero.
  pub fn set_dimensions(&mut self, dimensions: usize) {
    self.0.clear();
    self.0.resize(dimensions, 0);
  }

  #[inline]
  pub fn as_slice(&self) -> &[CoordinateT] {
    &self.0
  }

  #[inline]
  pub fn iter(&self) -> std::slice::Iter<'_, CoordinateT> {
    self.0.iter()
  }
}

impl Index<usize> for Coordinates {
  type Output = CoordinateT;

  #[inline]
  fn index(&self, dim: usize) -> &CoordinateT {
    &self.0[dim]
  }
}

impl IndexMut<usize> for Coordinates {
  #[inline]
  fn index_mut(&mut self, dim: usize) -> &mut CoordinateT {
    &mut self.0[dim]
  }
}

impl From<&[CoordinateT]> for Coordinates {
  fn from(values: &[CoordinateT]) -> Self {
    Self::from_slice(values)
  }
}

impl<const N: usize> From<[CoordinateT; N]> for Coordinates {
  fn from(values: [CoordinateT; N]) -> Self {
    Self::from_slice(&values)
  }
}

impl FromIterator<CoordinateT> for Coordinates {
  fn from_iter<I: IntoIterator<Item = CoordinateT>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl fmt::Display for Coordinates {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("(")?;
    for (i, value) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      write!(f, "{}", value)?;
    }
    f.write_str(")")
  }
}
