//! GeometryLevelEntry - a `LevelEntry` that also tracks cell bounds.

use std::ops::Deref;

use glam::DVec3;

use super::{HyperTree, HyperTreeGrid, LevelEntry};

/// Cell address plus world-space origin and size.
///
/// Refinement splits the first `dimension` axes; the others keep the root
/// size.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct GeometryLevelEntry {
  entry: LevelEntry,
  origin: DVec3,
  size: DVec3,
}

impl GeometryLevelEntry {
  pub fn at_root(grid: &HyperTreeGrid, tree_index: u64) -> Self {
    let mut entry = Self::default();
    entry.initialize(grid, tree_index);
    entry
  }

  /// Point at the root of `tree_index` with the tree's bounds.
  pub fn initialize<'g>(&mut self, grid: &'g HyperTreeGrid, tree_index: u64) -> Option<&'g HyperTree> {
    self.origin = grid.tree_origin(tree_index);
    self.size = grid.tree_size();
    self.entry.initialize(grid, tree_index)
  }

  pub fn reset(&mut self) {
    *self = Self::default();
  }

  #[inline]
  pub fn entry(&self) -> &LevelEntry {
    &self.entry
  }

  #[inline]
  pub fn origin(&self) -> DVec3 {
    self.origin
  }

  #[inline]
  pub fn size(&self) -> DVec3 {
    self.size
  }

  /// `(min, max)` corners.
  #[inline]
  pub fn bounds(&self) -> (DVec3, DVec3) {
    (self.origin, self.origin + self.size)
  }

  /// Cell center.
  #[inline]
  pub fn point(&self) -> DVec3 {
    self.origin + self.size * 0.5
  }

  pub fn to_child(&mut self, grid: &HyperTreeGrid, child: u32) {
    self.entry.to_child(grid, child);

    let f = grid.branch_factor();
    let position = [child % f, (child / f) % f, child / (f * f)];
    for axis in 0..grid.dimension() as usize {
      self.size[axis] /= f as f64;
      self.origin[axis] += position[axis] as f64 * self.size[axis];
    }
  }
}

impl Deref for GeometryLevelEntry {
  type Target = LevelEntry;

  #[inline]
  fn deref(&self) -> &LevelEntry {
    &self.entry
  }
}

#[cfg(test)]
#[path = "geometry_entry_test.rs"]
mod geometry_entry_test;
