//! SuperCursor - a center cell plus its same-level neighbor window.
//!
//! The window is kept incrementally: `to_child` derives each neighbor of
//! the new center from the parent's window through the topology tables,
//! so a descent costs O(cursors) regardless of depth.
//!
//! # Storage
//!
//! - `entries`: arena of neighbor entries, bump-allocated per level
//! - `first_non_valid_entry_by_level[l]`: first free arena slot at level `l`
//! - `reference_entries`: per level, `cursors - 1` arena slots, one per
//!   non-central cursor; the current level starts at
//!   `first_current_neighbor_reference_entry`
//!
//! Ascending pops one level of bookkeeping; the parent window was never
//! overwritten, so nothing is recomputed.
//!
//! When the parent-frame cell supplying a neighbor is absent, a leaf or
//! masked, the child frame references that same coarser entry. Neighbor
//! levels can therefore be lower than the center's level.

use glam::DVec3;
use smallvec::SmallVec;

use super::topology::{corner_neighbor_cursors, CursorTables, Neighborhood};
use super::{GeometryLevelEntry, GridId, HyperTreeGrid};

/// Snapshot of one cursor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CursorInformation {
  pub tree_index: Option<u64>,
  pub level: u32,
  pub is_leaf: bool,
  pub global_node_index: i64,
}

/// Cursors touching one corner of the center, with the ownership verdict.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CornerLeaves {
  pub cursors: SmallVec<[usize; 8]>,
  /// True when the center emits this corner.
  pub owner: bool,
}

/// Center cell plus neighbor window over a borrowed grid.
pub struct SuperCursor<'g> {
  grid: &'g HyperTreeGrid,
  tables: CursorTables,
  central: GeometryLevelEntry,
  central_history: Vec<GeometryLevelEntry>,
  entries: Vec<GeometryLevelEntry>,
  first_non_valid_entry_by_level: Vec<usize>,
  current_level_slot: usize,
  reference_entries: Vec<usize>,
  first_current_neighbor_reference_entry: usize,
}

impl<'g> SuperCursor<'g> {
  pub fn new(grid: &'g HyperTreeGrid, neighborhood: Neighborhood) -> Self {
    let tables = CursorTables::for_grid(neighborhood, grid);
    debug_assert_eq!(tables.number_of_children(), grid.number_of_children());
    Self {
      grid,
      tables,
      central: GeometryLevelEntry::default(),
      central_history: Vec::new(),
      entries: Vec::new(),
      first_non_valid_entry_by_level: Vec::new(),
      current_level_slot: 0,
      reference_entries: Vec::new(),
      first_current_neighbor_reference_entry: 0,
    }
  }

  #[inline]
  pub fn grid(&self) -> &'g HyperTreeGrid {
    self.grid
  }

  #[inline]
  pub fn grid_id(&self) -> GridId {
    self.grid.id()
  }

  #[inline]
  pub fn neighborhood(&self) -> Neighborhood {
    self.tables.neighborhood
  }

  #[inline]
  pub fn number_of_cursors(&self) -> usize {
    self.tables.number_of_cursors
  }

  #[inline]
  pub fn central_index(&self) -> usize {
    self.tables.central_index
  }

  #[inline]
  pub fn number_of_children(&self) -> u32 {
    self.tables.number_of_children()
  }

  #[inline]
  pub fn dimension(&self) -> u32 {
    self.tables.dimension
  }

  /// Arena slot of a non-central cursor within one level's window.
  #[inline]
  fn window_slot(&self, cursor: usize) -> usize {
    debug_assert_ne!(cursor, self.tables.central_index);
    cursor - usize::from(cursor > self.tables.central_index)
  }

  // ---------------------------------------------------------------------------
  // Navigation
  // ---------------------------------------------------------------------------

  /// Place the center at the root of `tree_index` and rebuild the window.
  ///
  /// Neighbors outside the grid read as "no tree". Returns whether the
  /// center itself has a tree.
  pub fn initialize(&mut self, tree_index: u64) -> bool {
    let grid = self.grid;
    let n = self.tables.number_of_cursors;
    let dimension = self.tables.dimension;

    let has_tree = self.central.initialize(grid, tree_index).is_some();
    self.central_history.clear();

    self.entries.clear();
    self.entries.resize(n - 1, GeometryLevelEntry::default());
    self.reference_entries.clear();
    self.reference_entries.extend(0..n - 1);
    self.first_non_valid_entry_by_level.clear();
    self.first_non_valid_entry_by_level.push(n - 1);
    self.current_level_slot = 0;
    self.first_current_neighbor_reference_entry = 0;

    let position = grid.level_zero_coordinates_from_index(tree_index);
    let cell_dims = grid.cell_dims();
    for cursor in 0..n {
      if cursor == self.tables.central_index {
        continue;
      }
      let offset = self.tables.neighborhood.offset(dimension, cursor);
      let in_grid = (0..3).all(|axis| {
        let shifted = position[axis] as i64 + offset[axis] as i64;
        shifted >= 0 && shifted < cell_dims[axis] as i64
      });
      let slot = self.window_slot(cursor);
      if in_grid {
        let neighbor = grid.shifted_level_zero_index(tree_index, offset[0], offset[1], offset[2]);
        self.entries[slot].initialize(grid, neighbor);
      } else {
        self.entries[slot].reset();
      }
    }
    has_tree
  }

  fn allocate_entry(&mut self) -> usize {
    let level = self.current_level_slot;
    let slot = self.first_non_valid_entry_by_level[level];
    self.first_non_valid_entry_by_level[level] += 1;
    if self.entries.len() <= slot {
      self.entries.resize(slot + 1, GeometryLevelEntry::default());
    }
    slot
  }

  /// Descend the center into `child`, deriving the new neighbor window.
  ///
  /// The center must be refined and unmasked.
  pub fn to_child(&mut self, child: u32) {
    debug_assert!(self.central.has_tree(), "to_child without a tree");
    debug_assert!(!self.is_leaf(), "to_child on a leaf");
    debug_assert!(!self.is_masked(), "to_child on a masked cell");
    debug_assert!(child < self.number_of_children(), "child index out of range");

    let grid = self.grid;
    let tables = self.tables;
    let window = tables.number_of_cursors - 1;
    let parent_first = self.first_current_neighbor_reference_entry;

    self.current_level_slot += 1;
    let level = self.current_level_slot;
    if self.first_non_valid_entry_by_level.len() <= level {
      self.first_non_valid_entry_by_level.push(0);
    }
    self.first_non_valid_entry_by_level[level] = self.first_non_valid_entry_by_level[level - 1];

    self.first_current_neighbor_reference_entry += window;
    let first = self.first_current_neighbor_reference_entry;
    if self.reference_entries.len() < first + window {
      self.reference_entries.resize(first + window, 0);
    }

    for cursor in 0..tables.number_of_cursors {
      if cursor == tables.central_index {
        continue;
      }
      let parent_cursor = tables.parent_cursor(child, cursor);
      let target_child = tables.child_index(child, cursor);

      let reference = if parent_cursor == tables.central_index {
        let mut entry = self.central;
        entry.to_child(grid, target_child);
        let slot = self.allocate_entry();
        self.entries[slot] = entry;
        slot
      } else {
        let previous = self.reference_entries[parent_first + self.window_slot(parent_cursor)];
        let parent = self.entries[previous];
        if parent.has_tree() && !parent.is_leaf(grid) && !parent.is_masked(grid) {
          let mut entry = parent;
          entry.to_child(grid, target_child);
          let slot = self.allocate_entry();
          self.entries[slot] = entry;
          slot
        } else {
          previous
        }
      };
      let slot = self.window_slot(cursor);
      self.reference_entries[first + slot] = reference;
    }

    self.central_history.push(self.central);
    self.central.to_child(grid, child);
  }

  /// Return to the parent of the center.
  pub fn to_parent(&mut self) {
    debug_assert!(self.current_level_slot > 0, "to_parent at the root");
    if let Some(parent) = self.central_history.pop() {
      self.central = parent;
      self.current_level_slot -= 1;
      self.first_current_neighbor_reference_entry -= self.tables.number_of_cursors - 1;
    }
  }

  /// Return to the root of the current tree.
  pub fn to_root(&mut self) {
    if let Some(&root) = self.central_history.first() {
      self.central = root;
      self.central_history.clear();
      self.current_level_slot = 0;
      self.first_current_neighbor_reference_entry = 0;
    }
  }

  // ---------------------------------------------------------------------------
  // Center queries
  // ---------------------------------------------------------------------------

  #[inline]
  pub fn central(&self) -> &GeometryLevelEntry {
    &self.central
  }

  #[inline]
  pub fn has_tree(&self) -> bool {
    self.central.has_tree()
  }

  #[inline]
  pub fn tree_index(&self) -> Option<u64> {
    self.central.tree_index()
  }

  #[inline]
  pub fn level(&self) -> u32 {
    self.central.level()
  }

  #[inline]
  pub fn is_root(&self) -> bool {
    self.central.is_root()
  }

  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.central.is_leaf(self.grid)
  }

  #[inline]
  pub fn is_masked(&self) -> bool {
    self.central.is_masked(self.grid)
  }

  #[inline]
  pub fn global_node_index(&self) -> i64 {
    self.central.global_node_index(self.grid)
  }

  #[inline]
  pub fn origin(&self) -> DVec3 {
    self.central.origin()
  }

  #[inline]
  pub fn size(&self) -> DVec3 {
    self.central.size()
  }

  #[inline]
  pub fn bounds(&self) -> (DVec3, DVec3) {
    self.central.bounds()
  }

  #[inline]
  pub fn point(&self) -> DVec3 {
    self.central.point()
  }

  // ---------------------------------------------------------------------------
  // Per-cursor queries; `central_index()` answers for the center
  // ---------------------------------------------------------------------------

  /// Entry currently behind `cursor`.
  #[inline]
  pub fn entry_at(&self, cursor: usize) -> &GeometryLevelEntry {
    debug_assert!(cursor < self.tables.number_of_cursors, "cursor out of range");
    if cursor == self.tables.central_index {
      return &self.central;
    }
    let reference =
      self.reference_entries[self.first_current_neighbor_reference_entry + self.window_slot(cursor)];
    &self.entries[reference]
  }

  #[inline]
  pub fn has_tree_at(&self, cursor: usize) -> bool {
    self.entry_at(cursor).has_tree()
  }

  #[inline]
  pub fn tree_index_at(&self, cursor: usize) -> Option<u64> {
    self.entry_at(cursor).tree_index()
  }

  /// False when the cursor has no tree.
  #[inline]
  pub fn is_leaf_at(&self, cursor: usize) -> bool {
    self.entry_at(cursor).is_leaf(self.grid)
  }

  #[inline]
  pub fn is_masked_at(&self, cursor: usize) -> bool {
    self.entry_at(cursor).is_masked(self.grid)
  }

  #[inline]
  pub fn level_at(&self, cursor: usize) -> u32 {
    self.entry_at(cursor).level()
  }

  #[inline]
  pub fn global_node_index_at(&self, cursor: usize) -> i64 {
    self.entry_at(cursor).global_node_index(self.grid)
  }

  #[inline]
  pub fn origin_at(&self, cursor: usize) -> DVec3 {
    self.entry_at(cursor).origin()
  }

  #[inline]
  pub fn size_at(&self, cursor: usize) -> DVec3 {
    self.entry_at(cursor).size()
  }

  #[inline]
  pub fn bounds_at(&self, cursor: usize) -> (DVec3, DVec3) {
    self.entry_at(cursor).bounds()
  }

  pub fn information(&self, cursor: usize) -> CursorInformation {
    let entry = self.entry_at(cursor);
    CursorInformation {
      tree_index: entry.tree_index(),
      level: entry.level(),
      is_leaf: entry.is_leaf(self.grid),
      global_node_index: entry.global_node_index(self.grid),
    }
  }

  // ---------------------------------------------------------------------------
  // Corner ownership (Moore)
  // ---------------------------------------------------------------------------

  /// Cursor of the `leaf`-th cell touching `corner`, and whether that cell
  /// lets the center own the corner.
  ///
  /// A neighbor blocks ownership when it is absent, refined, or masked,
  /// or when it sits at the center's level with a higher cursor index.
  pub fn get_corner_cursors(&self, corner: usize, leaf: usize) -> (usize, bool) {
    let central = self.tables.central_index;
    if self.tables.neighborhood != Neighborhood::Moore {
      log::error!("corner cursors need a Moore super-cursor");
      return (central, false);
    }

    let cursor = corner_neighbor_cursors(self.tables.dimension, corner)[leaf] as usize;
    if cursor == central {
      return (cursor, true);
    }

    let entry = self.entry_at(cursor);
    let owner = if !entry.has_tree() || !entry.is_leaf(self.grid) {
      false
    } else if self.grid.has_mask() && entry.is_masked(self.grid) {
      false
    } else {
      !(central < cursor && entry.level() == self.level())
    };
    (cursor, owner)
  }

  /// Every cursor touching `corner`; the center owns the corner only if no
  /// touching cell blocks it.
  pub fn get_corner_leaves(&self, corner: usize) -> CornerLeaves {
    let mut leaves = CornerLeaves {
      cursors: SmallVec::new(),
      owner: true,
    };
    for leaf in 0..(1usize << self.tables.dimension) {
      let (cursor, owner) = self.get_corner_cursors(corner, leaf);
      leaves.cursors.push(cursor);
      leaves.owner &= owner;
    }
    leaves
  }
}

#[cfg(test)]
#[path = "super_cursor_test.rs"]
mod super_cursor_test;
