//! HyperTreeGrid - a rectilinear arrangement of independently refined trees.
//!
//! Root trees are addressed by a level-zero index. With the default
//! indexing x varies fastest; transposed indexing makes z fastest.
//! Cells are addressed grid-wide by global index, which is also the key
//! of the optional mask.

use std::sync::atomic::{AtomicU64, Ordering};

use glam::DVec3;

use super::{GridConfig, GridError, HyperTree};

// =============================================================================
// GridId - unique identifier
// =============================================================================

static GRID_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-unique grid identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GridId(u64);

impl GridId {
  pub fn new() -> Self {
    Self(GRID_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
  }

  pub fn raw(&self) -> u64 {
    self.0
  }
}

impl Default for GridId {
  fn default() -> Self {
    Self::new()
  }
}

// =============================================================================
// HyperTreeGrid
// =============================================================================

/// Grid of hyper trees. Owns every tree and the cell mask.
#[derive(Debug)]
pub struct HyperTreeGrid {
  id: GridId,
  config: GridConfig,
  trees: Vec<Option<HyperTree>>,
  mask: Option<Vec<bool>>,
  /// First global index not yet handed out.
  next_global_index: i64,
}

impl HyperTreeGrid {
  /// Empty grid: no tree is materialized yet.
  pub fn new(config: GridConfig) -> Result<Self, GridError> {
    config.validate()?;
    let trees = (0..config.number_of_trees()).map(|_| None).collect();
    Ok(Self {
      id: GridId::new(),
      config,
      trees,
      mask: None,
      next_global_index: 0,
    })
  }

  #[inline]
  pub fn id(&self) -> GridId {
    self.id
  }

  #[inline]
  pub fn config(&self) -> &GridConfig {
    &self.config
  }

  #[inline]
  pub fn dimension(&self) -> u32 {
    self.config.dimension
  }

  #[inline]
  pub fn branch_factor(&self) -> u32 {
    self.config.branch_factor
  }

  #[inline]
  pub fn number_of_children(&self) -> u32 {
    self.config.number_of_children()
  }

  #[inline]
  pub fn cell_dims(&self) -> [u32; 3] {
    self.config.cell_dims
  }

  /// Number of root slots, materialized or not.
  #[inline]
  pub fn number_of_trees(&self) -> u64 {
    self.trees.len() as u64
  }

  #[inline]
  pub fn depth_limiter(&self) -> u32 {
    self.config.depth_limiter
  }

  pub fn set_depth_limiter(&mut self, depth: u32) {
    self.config.depth_limiter = depth;
  }

  // ---------------------------------------------------------------------------
  // Trees
  // ---------------------------------------------------------------------------

  #[inline]
  pub fn get_tree(&self, index: u64) -> Option<&HyperTree> {
    self.trees.get(index as usize).and_then(Option::as_ref)
  }

  #[inline]
  pub fn get_tree_mut(&mut self, index: u64) -> Option<&mut HyperTree> {
    self.trees.get_mut(index as usize).and_then(Option::as_mut)
  }

  /// Fetch the tree at `index`, creating a single-leaf tree if absent.
  ///
  /// `None` (logged) when `index` is outside the grid.
  pub fn get_or_create_tree(&mut self, index: u64) -> Option<&mut HyperTree> {
    let number_of_children = self.number_of_children();
    let number_of_trees = self.trees.len();
    match self.trees.get_mut(index as usize) {
      Some(slot) => Some(slot.get_or_insert_with(|| HyperTree::new(index, number_of_children))),
      None => {
        log::error!(
          "tree index {} outside grid of {} trees",
          index,
          number_of_trees
        );
        None
      }
    }
  }

  /// Level-zero indices of materialized trees, ascending.
  pub fn tree_indices(&self) -> impl Iterator<Item = u64> + '_ {
    self
      .trees
      .iter()
      .enumerate()
      .filter(|(_, tree)| tree.is_some())
      .map(|(index, _)| index as u64)
  }

  /// Total vertices over all trees.
  pub fn number_of_vertices(&self) -> u64 {
    self
      .trees
      .iter()
      .flatten()
      .map(|tree| tree.number_of_vertices() as u64)
      .sum()
  }

  /// Give each tree a consecutive global range, in tree index order.
  ///
  /// Returns the number of global indices handed out.
  pub fn assign_global_indices(&mut self) -> i64 {
    let mut start = 0i64;
    for tree in self.trees.iter_mut().flatten() {
      tree.set_global_index_start(start);
      start += tree.number_of_vertices() as i64;
    }
    self.next_global_index = start;
    start
  }

  /// First global index that refinement would hand out next.
  #[inline]
  pub fn next_global_index(&self) -> i64 {
    self.next_global_index
  }

  /// Refine leaf `index` at `level` of tree `tree_index`.
  ///
  /// In a tree that already holds global indices, the new children take
  /// fresh ids past every range handed out so far; ids of other trees are
  /// never reused.
  pub fn subdivide_leaf(&mut self, tree_index: u64, index: u32, level: u32) {
    let next = self.next_global_index;
    let number_of_children = self.number_of_children();
    let Some(tree) = self.get_tree_mut(tree_index) else {
      log::error!("subdivide_leaf on missing tree {}", tree_index);
      return;
    };

    let elder = tree.number_of_vertices();
    let assigned = tree.has_global_indices();
    tree.subdivide_leaf(index, level);
    if !assigned {
      return;
    }

    tree.pin_global_indices(elder);
    for child in 0..number_of_children {
      tree.set_global_index_from_local(elder + child, next + child as i64);
    }
    self.next_global_index = next + number_of_children as i64;
  }

  /// Refine every tree uniformly to `number_of_levels` levels.
  ///
  /// Materializes all trees and assigns global indices.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "htg::initialize_uniform"))]
  pub fn initialize_uniform(&mut self, number_of_levels: u32) {
    let number_of_children = self.number_of_children();
    for index in 0..self.number_of_trees() {
      let mut tree = HyperTree::new(index, number_of_children);
      refine_uniform(&mut tree, 0, 0, number_of_levels);
      self.trees[index as usize] = Some(tree);
    }
    self.assign_global_indices();
  }

  // ---------------------------------------------------------------------------
  // Root indexing
  // ---------------------------------------------------------------------------

  /// Per-axis position of root tree `index`.
  pub fn level_zero_coordinates_from_index(&self, index: u64) -> [u32; 3] {
    let [nx, ny, nz] = self.config.cell_dims.map(|d| d as u64);
    if self.config.transposed_root_indexing {
      [
        (index / (ny * nz)) as u32,
        ((index / nz) % ny) as u32,
        (index % nz) as u32,
      ]
    } else {
      [
        (index % nx) as u32,
        ((index / nx) % ny) as u32,
        (index / (nx * ny)) as u32,
      ]
    }
  }

  pub fn level_zero_index_from_coordinates(&self, i: u32, j: u32, k: u32) -> u64 {
    let [nx, ny, nz] = self.config.cell_dims.map(|d| d as u64);
    let (i, j, k) = (i as u64, j as u64, k as u64);
    if self.config.transposed_root_indexing {
      k + nz * (j + ny * i)
    } else {
      i + nx * (j + ny * k)
    }
  }

  /// Index of the root tree offset by `(di, dj, dk)` from `index`.
  ///
  /// The caller keeps the shifted position inside the grid.
  pub fn shifted_level_zero_index(&self, index: u64, di: i32, dj: i32, dk: i32) -> u64 {
    let [i, j, k] = self.level_zero_coordinates_from_index(index);
    let shift = |c: u32, d: i32| (c as i64 + d as i64) as u32;
    self.level_zero_index_from_coordinates(shift(i, di), shift(j, dj), shift(k, dk))
  }

  // ---------------------------------------------------------------------------
  // Mask
  // ---------------------------------------------------------------------------

  #[inline]
  pub fn has_mask(&self) -> bool {
    self.mask.is_some()
  }

  pub fn mask(&self) -> Option<&[bool]> {
    self.mask.as_deref()
  }

  /// Mask state of global index `global`; unmasked when no mask is set.
  #[inline]
  pub fn is_masked(&self, global: i64) -> bool {
    match &self.mask {
      Some(mask) if global >= 0 => mask.get(global as usize).copied().unwrap_or(false),
      _ => false,
    }
  }

  /// Set the mask bit of `global`, creating the mask on first use.
  pub fn set_mask_value(&mut self, global: i64, masked: bool) {
    if global < 0 {
      log::error!("set_mask_value on unassigned global index");
      return;
    }
    let size = (self.number_of_vertices() as i64)
      .max(self.next_global_index)
      .max(global + 1) as usize;
    let mask = self.mask.get_or_insert_with(Vec::new);
    if mask.len() < size {
      mask.resize(size, false);
    }
    mask[global as usize] = masked;
  }

  pub fn clear_mask(&mut self) {
    self.mask = None;
  }

  // ---------------------------------------------------------------------------
  // Geometry
  // ---------------------------------------------------------------------------

  /// World-space minimum corner of root tree `index`.
  pub fn tree_origin(&self, index: u64) -> DVec3 {
    let [i, j, k] = self.level_zero_coordinates_from_index(index);
    self.config.origin + self.config.spacing * DVec3::new(i as f64, j as f64, k as f64)
  }

  /// World-space size of every root tree.
  #[inline]
  pub fn tree_size(&self) -> DVec3 {
    self.config.spacing
  }
}

fn refine_uniform(tree: &mut HyperTree, index: u32, level: u32, number_of_levels: u32) {
  if level + 1 >= number_of_levels {
    return;
  }
  tree.subdivide_leaf(index, level);
  let elder = tree.elder_child_index(index);
  for child in 0..tree.number_of_children() {
    refine_uniform(tree, elder + child, level + 1, number_of_levels);
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
