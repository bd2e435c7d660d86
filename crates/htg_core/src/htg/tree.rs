//! HyperTree - one refinable root cell of a grid.
//!
//! Vertices are stored in creation order. A refined vertex
//! records the local index of its first child ("elder child"); its siblings
//! follow contiguously. Vertex 0 is the root.

/// Elder-child sentinel marking a leaf vertex.
const LEAF: u32 = u32::MAX;

/// Refinement structure of a single root tree.
#[derive(Clone, Debug)]
pub struct HyperTree {
  tree_index: u64,
  number_of_children: u32,
  elder_children: Vec<u32>,
  number_of_levels: u32,
  global_index_start: i64,
  /// Explicit local -> global map; empty means `start + local`.
  global_index_table: Vec<i64>,
}

impl HyperTree {
  /// Single-leaf tree at level-zero index `tree_index`.
  pub fn new(tree_index: u64, number_of_children: u32) -> Self {
    Self {
      tree_index,
      number_of_children,
      elder_children: vec![LEAF],
      number_of_levels: 1,
      global_index_start: -1,
      global_index_table: Vec::new(),
    }
  }

  #[inline]
  pub fn tree_index(&self) -> u64 {
    self.tree_index
  }

  #[inline]
  pub fn number_of_children(&self) -> u32 {
    self.number_of_children
  }

  #[inline]
  pub fn number_of_vertices(&self) -> u32 {
    self.elder_children.len() as u32
  }

  pub fn number_of_leaves(&self) -> u32 {
    self.elder_children.iter().filter(|&&e| e == LEAF).count() as u32
  }

  /// Depth of the deepest level plus one.
  #[inline]
  pub fn number_of_levels(&self) -> u32 {
    self.number_of_levels
  }

  #[inline]
  pub fn is_leaf(&self, index: u32) -> bool {
    self.elder_children[index as usize] == LEAF
  }

  /// Local index of the first child of `index`.
  #[inline]
  pub fn elder_child_index(&self, index: u32) -> u32 {
    debug_assert!(!self.is_leaf(index), "elder_child_index on a leaf");
    self.elder_children[index as usize]
  }

  /// Refine leaf `index` sitting at `level`.
  pub fn subdivide_leaf(&mut self, index: u32, level: u32) {
    debug_assert!(self.is_leaf(index), "subdivide_leaf on a refined vertex");
    let elder = self.elder_children.len() as u32;
    self
      .elder_children
      .resize(self.elder_children.len() + self.number_of_children as usize, LEAF);
    self.elder_children[index as usize] = elder;
    self.number_of_levels = self.number_of_levels.max(level + 2);
  }

  #[inline]
  pub fn global_index_start(&self) -> i64 {
    self.global_index_start
  }

  /// Use implicit global indices `start + local`.
  pub fn set_global_index_start(&mut self, start: i64) {
    self.global_index_start = start;
    self.global_index_table.clear();
  }

  /// Whether any global index has been handed to this tree.
  #[inline]
  pub fn has_global_indices(&self) -> bool {
    self.global_index_start >= 0 || !self.global_index_table.is_empty()
  }

  /// Switch implicit `start + local` indices of the first `count` vertices
  /// to explicit ones, so later vertices can take ids from elsewhere.
  pub fn pin_global_indices(&mut self, count: u32) {
    if self.global_index_table.is_empty() && self.global_index_start >= 0 {
      let start = self.global_index_start;
      self.global_index_table = (0..count as i64).map(|local| start + local).collect();
    }
  }

  /// Record an explicit global index for one vertex.
  pub fn set_global_index_from_local(&mut self, local: u32, global: i64) {
    let local = local as usize;
    if self.global_index_table.len() <= local {
      self.global_index_table.resize(local + 1, -1);
    }
    self.global_index_table[local] = global;
  }

  /// Global index of `local`; -1 when none has been assigned.
  #[inline]
  pub fn global_index_from_local(&self, local: u32) -> i64 {
    if self.global_index_table.is_empty() {
      if self.global_index_start < 0 {
        return -1;
      }
      return self.global_index_start + local as i64;
    }
    self
      .global_index_table
      .get(local as usize)
      .copied()
      .unwrap_or(-1)
  }

  /// Largest global index in use, or -1.
  pub fn maximum_global_index(&self) -> i64 {
    if self.global_index_table.is_empty() {
      if self.global_index_start < 0 {
        return -1;
      }
      return self.global_index_start + self.number_of_vertices() as i64 - 1;
    }
    self.global_index_table.iter().copied().max().unwrap_or(-1)
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
