//! Extents - one half-open range per dimension.
//!
//! Provides the two linearization orders used by the array backends:
//!
//! - `left_to_right`: dimension 0 varies fastest (Fortran order)
//! - `right_to_left`: the last dimension varies fastest (C order)
//!
//! Both decompose `n` in mixed radix with per-dimension `size` as the radix
//! and per-dimension `begin` as offset. Callers guarantee `n < size()`.

use std::fmt;
use std::ops::{Index, IndexMut};

use smallvec::SmallVec;

use super::coordinates::INLINE_DIMENSIONS;
use super::{Coordinates, Range, SizeT};

/// Per-dimension ranges describing an array's index space.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Extents(SmallVec<[Range; INLINE_DIMENSIONS]>);

impl Extents {
  /// Zero-based extents from per-dimension sizes.
  pub fn from_sizes(sizes: &[i64]) -> Self {
    Self(sizes.iter().map(|&s| Range::new(0, s)).collect())
  }

  pub fn from_ranges(ranges: &[Range]) -> Self {
    Self(SmallVec::from_slice(ranges))
  }

  /// Extents with `dimensions` empty ranges.
  pub fn with_dimensions(dimensions: usize) -> Self {
    Self(SmallVec::from_elem(Range::default(), dimensions))
  }

  /// Number of dimensions.
  #[inline]
  pub fn dimensions(&self) -> usize {
    self.0.len()
  }

  /// Resize to `dimensions` ranges; new ranges are empty.
  pub fn set_dimensions(&mut self, dimensions: usize) {
    self.0.resize(dimensions, Range::default());
  }

  /// Product of per-dimension sizes; zero for zero dimensions.
  pub fn size(&self) -> SizeT {
    if self.0.is_empty() {
      return 0;
    }
    self.0.iter().map(Range::size).product()
  }

  /// True if every range begins at zero.
  pub fn zero_based(&self) -> bool {
    self.0.iter().all(|r| r.begin() == 0)
  }

  /// True if both extents have the same per-dimension sizes.
  pub fn same_shape(&self, other: &Extents) -> bool {
    self.0.len() == other.0.len()
      && self
        .0
        .iter()
        .zip(other.0.iter())
        .all(|(a, b)| a.size() == b.size())
  }

  /// True if `coordinates` lies inside every range.
  pub fn contains(&self, coordinates: &Coordinates) -> bool {
    coordinates.dimensions() == self.0.len()
      && self
        .0
        .iter()
        .zip(coordinates.iter())
        .all(|(r, &c)| r.contains(c))
  }

  /// True if every range of `other` is inside the matching range of `self`.
  pub fn contains_extents(&self, other: &Extents) -> bool {
    self.0.len() == other.0.len()
      && self
        .0
        .iter()
        .zip(other.0.iter())
        .all(|(a, b)| a.contains_range(b))
  }

  /// Coordinates of linear index `n` with dimension 0 varying fastest.
  pub fn left_to_right_coordinates_n(&self, n: SizeT, coordinates: &mut Coordinates) {
    coordinates.set_dimensions(self.0.len());
    let mut divisor: SizeT = 1;
    for (dim, range) in self.0.iter().enumerate() {
      let size = range.size().max(1);
      coordinates[dim] = ((n / divisor) % size) as i64 + range.begin();
      divisor *= size;
    }
  }

  /// Coordinates of linear index `n` with the last dimension varying fastest.
  pub fn right_to_left_coordinates_n(&self, n: SizeT, coordinates: &mut Coordinates) {
    coordinates.set_dimensions(self.0.len());
    let mut divisor: SizeT = 1;
    for (dim, range) in self.0.iter().enumerate().rev() {
      let size = range.size().max(1);
      coordinates[dim] = ((n / divisor) % size) as i64 + range.begin();
      divisor *= size;
    }
  }

  pub fn left_to_right(&self, n: SizeT) -> Coordinates {
    let mut coordinates = Coordinates::default();
    self.left_to_right_coordinates_n(n, &mut coordinates);
    coordinates
  }

  pub fn right_to_left(&self, n: SizeT) -> Coordinates {
    let mut coordinates = Coordinates::default();
    self.right_to_left_coordinates_n(n, &mut coordinates);
    coordinates
  }

  #[inline]
  pub fn as_slice(&self) -> &[Range] {
    &self.0
  }

  #[inline]
  pub fn iter(&self) -> std::slice::Iter<'_, Range> {
    self.0.iter()
  }
}

impl Index<usize> for Extents {
  type Output = Range;

  #[inline]
  fn index(&self, dim: usize) -> &Range {
    &self.0[dim]
  }
}

impl IndexMut<usize> for Extents {
  #[inline]
  fn index_mut(&mut self, dim: usize) -> &mut Range {
    &mut self.0[dim]
  }
}

impl From<Range> for Extents {
  fn from(i: Range) -> Self {
    Self::from_ranges(&[i])
  }
}

impl From<(Range, Range)> for Extents {
  fn from((i, j): (Range, Range)) -> Self {
    Self::from_ranges(&[i, j])
  }
}

impl From<(Range, Range, Range)> for Extents {
  fn from((i, j, k): (Range, Range, Range)) -> Self {
    Self::from_ranges(&[i, j, k])
  }
}

impl FromIterator<Range> for Extents {
  fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl fmt::Display for Extents {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, range) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str("x")?;
      }
      write!(f, "{}", range)?;
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;
