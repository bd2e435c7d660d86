//! Range - half-open interval along a single dimension.

use std::fmt;

use super::{CoordinateT, SizeT};

/// Half-open interval `[begin, end)`.
///
/// Construction clamps `end` so that `end >= begin` always holds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Range {
  begin: CoordinateT,
  end: CoordinateT,
}

impl Range {
  /// Create a range, clamping `end = max(begin, end)`.
  pub fn new(begin: CoordinateT, end: CoordinateT) -> Self {
    Self {
      begin,
      end: begin.max(end),
    }
  }

  /// First index in the range.
  #[inline]
  pub fn begin(&self) -> CoordinateT {
    self.begin
  }

  /// One past the last index in the range.
  #[inline]
  pub fn end(&self) -> CoordinateT {
    self.end
  }

  /// Number of indices in the range.
  #[inline]
  pub fn size(&self) -> SizeT {
    (self.end - self.begin) as SizeT
  }

  /// True if the range holds no index.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.begin == self.end
  }

  /// True if `begin <= value < end`.
  #[inline]
  pub fn contains(&self, value: CoordinateT) -> bool {
    self.begin <= value && value < self.end
  }

  /// True if every index of `other` is also in `self`.
  pub fn contains_range(&self, other: &Range) -> bool {
    self.begin <= other.begin && other.end <= self.end
  }
}

impl fmt::Display for Range {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}, {})", self.begin, self.end)
  }
}

#[cfg(test)]
#[path = "range_test.rs"]
mod range_test;
