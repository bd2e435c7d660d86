//! LevelEntry - address of one cell: `{tree, level, vertex}`.
//!
//! The tree is named by its level-zero index; the grid owns it. Every
//! query takes the grid, so an entry is a plain `Copy` value.

use super::{HyperTree, HyperTreeGrid};

/// Cell address within a grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct LevelEntry {
  tree: Option<u64>,
  level: u32,
  index: u32,
}

impl LevelEntry {
  /// Entry at the root of `tree_index`.
  ///
  /// Holds no tree when the grid has none at that index.
  pub fn at_root(grid: &HyperTreeGrid, tree_index: u64) -> Self {
    let mut entry = Self::default();
    entry.initialize(grid, tree_index);
    entry
  }

  /// Point at the root of `tree_index`; returns the tree if present.
  pub fn initialize<'g>(&mut self, grid: &'g HyperTreeGrid, tree_index: u64) -> Option<&'g HyperTree> {
    let tree = grid.get_tree(tree_index);
    self.tree = tree.map(|_| tree_index);
    self.level = 0;
    self.index = 0;
    tree
  }

  /// Like `initialize`, creating a single-leaf tree when absent.
  pub fn initialize_or_create<'g>(
    &mut self,
    grid: &'g mut HyperTreeGrid,
    tree_index: u64,
  ) -> Option<&'g mut HyperTree> {
    let tree = grid.get_or_create_tree(tree_index);
    self.tree = tree.as_ref().map(|_| tree_index);
    self.level = 0;
    self.index = 0;
    tree
  }

  /// Drop the tree: the entry reads as "no neighbor".
  #[inline]
  pub fn reset(&mut self) {
    *self = Self::default();
  }

  #[inline]
  pub fn has_tree(&self) -> bool {
    self.tree.is_some()
  }

  #[inline]
  pub fn tree_index(&self) -> Option<u64> {
    self.tree
  }

  #[inline]
  pub fn tree<'g>(&self, grid: &'g HyperTreeGrid) -> Option<&'g HyperTree> {
    self.tree.and_then(|index| grid.get_tree(index))
  }

  #[inline]
  pub fn level(&self) -> u32 {
    self.level
  }

  /// Local vertex index inside the tree.
  #[inline]
  pub fn index(&self) -> u32 {
    self.index
  }

  #[inline]
  pub fn is_root(&self) -> bool {
    self.level == 0
  }

  /// Global index of the cell; -1 without a tree.
  #[inline]
  pub fn global_node_index(&self, grid: &HyperTreeGrid) -> i64 {
    self
      .tree(grid)
      .map_or(-1, |tree| tree.global_index_from_local(self.index))
  }

  pub fn set_global_index_from_local(&self, grid: &mut HyperTreeGrid, global: i64) {
    if let Some(tree) = self.tree.and_then(|index| grid.get_tree_mut(index)) {
      tree.set_global_index_from_local(self.index, global);
    }
  }

  pub fn set_mask(&self, grid: &mut HyperTreeGrid, masked: bool) {
    debug_assert!(self.has_tree(), "set_mask without a tree");
    let global = self.global_node_index(grid);
    grid.set_mask_value(global, masked);
  }

  /// Mask state; false without a tree.
  #[inline]
  pub fn is_masked(&self, grid: &HyperTreeGrid) -> bool {
    self.has_tree() && grid.has_mask() && grid.is_masked(self.global_node_index(grid))
  }

  /// True at the depth limiter or on a structural leaf; false without a tree.
  #[inline]
  pub fn is_leaf(&self, grid: &HyperTreeGrid) -> bool {
    match self.tree(grid) {
      Some(tree) => self.level == grid.depth_limiter() || tree.is_leaf(self.index),
      None => false,
    }
  }

  /// Refine the cell. It must be an unmasked leaf above the depth limiter.
  pub fn subdivide_leaf(&self, grid: &mut HyperTreeGrid) {
    debug_assert!(self.is_leaf(grid), "subdivide_leaf on a refined cell");
    debug_assert!(!self.is_masked(grid), "subdivide_leaf on a masked cell");
    debug_assert!(self.level < grid.depth_limiter(), "subdivide_leaf at the depth limiter");
    if let Some(tree_index) = self.tree {
      grid.subdivide_leaf(tree_index, self.index, self.level);
    }
  }

  /// Descend into `child`. The cell must be refined, unmasked and above
  /// the depth limiter.
  #[inline]
  pub fn to_child(&mut self, grid: &HyperTreeGrid, child: u32) {
    debug_assert!(!self.is_leaf(grid), "to_child on a leaf");
    debug_assert!(!self.is_masked(grid), "to_child on a masked cell");
    debug_assert!(child < grid.number_of_children(), "child index out of range");
    debug_assert!(self.level < grid.depth_limiter(), "to_child past the depth limiter");
    if let Some(tree) = self.tree(grid) {
      self.index = tree.elder_child_index(self.index) + child;
      self.level += 1;
    }
  }
}

#[cfg(test)]
#[path = "entry_test.rs"]
mod entry_test;
