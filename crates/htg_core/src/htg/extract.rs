//! Traversal consumers: boundary faces and dual corners.
//!
//! Each root tree is walked depth-first by its own super-cursor; trees are
//! processed in parallel with rayon over the shared, read-only grid and
//! results are concatenated in tree order.

use rayon::prelude::*;
use smallvec::SmallVec;

use super::{HyperTreeGrid, Neighborhood, SuperCursor};

/// A leaf face toward an absent or masked neighbor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Face {
  /// Global index of the emitting leaf.
  pub global_index: i64,
  /// Von Neumann cursor the face looks toward.
  pub neighbor: usize,
  pub level: u32,
}

/// Leaves sharing one owned corner, by global index.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DualCell {
  pub leaves: SmallVec<[i64; 8]>,
}

/// Counters from one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
  /// Cells the cursor stood on, including masked ones.
  pub cells_visited: usize,
  /// Unmasked leaves reached.
  pub leaves_visited: usize,
  pub records_emitted: usize,
}

impl TraversalStats {
  fn merge(self, other: Self) -> Self {
    Self {
      cells_visited: self.cells_visited + other.cells_visited,
      leaves_visited: self.leaves_visited + other.leaves_visited,
      records_emitted: self.records_emitted + other.records_emitted,
    }
  }
}

#[derive(Debug, Clone, Default)]
pub struct BoundaryFaces {
  pub faces: Vec<Face>,
  pub stats: TraversalStats,
}

#[derive(Debug, Clone, Default)]
pub struct DualCorners {
  pub cells: Vec<DualCell>,
  pub stats: TraversalStats,
}

/// Run `walk` over every tree in parallel, concatenating in tree order.
fn walk_trees<R, W>(grid: &HyperTreeGrid, neighborhood: Neighborhood, walk: W) -> (Vec<R>, TraversalStats)
where
  R: Send,
  W: Fn(&mut SuperCursor<'_>, &mut Vec<R>, &mut TraversalStats) + Sync,
{
  let trees: Vec<u64> = grid.tree_indices().collect();
  let per_tree: Vec<(Vec<R>, TraversalStats)> = {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("walk_trees").entered();
    trees
      .into_par_iter()
      .map(|tree| {
        let mut cursor = SuperCursor::new(grid, neighborhood);
        let mut records = Vec::new();
        let mut stats = TraversalStats::default();
        if cursor.initialize(tree) {
          walk(&mut cursor, &mut records, &mut stats);
        }
        (records, stats)
      })
      .collect()
  };

  let mut records = Vec::with_capacity(per_tree.iter().map(|(r, _)| r.len()).sum());
  let mut stats = TraversalStats::default();
  for (tree_records, tree_stats) in per_tree {
    records.extend(tree_records);
    stats = stats.merge(tree_stats);
  }
  (records, stats)
}

/// Faces of unmasked leaves that border the grid boundary or a masked cell.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "extract::boundary_faces"))]
pub fn extract_boundary_faces(grid: &HyperTreeGrid) -> BoundaryFaces {
  let (faces, stats) = walk_trees(grid, Neighborhood::VonNeumann, walk_faces);
  log::debug!(
    "boundary faces: {} faces from {} leaves",
    stats.records_emitted,
    stats.leaves_visited
  );
  BoundaryFaces { faces, stats }
}

fn walk_faces(cursor: &mut SuperCursor<'_>, faces: &mut Vec<Face>, stats: &mut TraversalStats) {
  stats.cells_visited += 1;
  if cursor.is_masked() {
    return;
  }

  if cursor.is_leaf() {
    stats.leaves_visited += 1;
    let central = cursor.central_index();
    for neighbor in (0..cursor.number_of_cursors()).filter(|&i| i != central) {
      if !cursor.has_tree_at(neighbor) || cursor.is_masked_at(neighbor) {
        faces.push(Face {
          global_index: cursor.global_node_index(),
          neighbor,
          level: cursor.level(),
        });
        stats.records_emitted += 1;
      }
    }
    return;
  }

  for child in 0..cursor.number_of_children() {
    cursor.to_child(child);
    walk_faces(cursor, faces, stats);
    cursor.to_parent();
  }
}

/// One dual cell per corner, emitted by the leaf that owns it.
///
/// Only corners surrounded by unmasked leaves are emitted, so the grid
/// boundary contributes nothing.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "extract::dual_corners"))]
pub fn extract_dual_corners(grid: &HyperTreeGrid) -> DualCorners {
  let (cells, stats) = walk_trees(grid, Neighborhood::Moore, walk_corners);
  log::debug!(
    "dual corners: {} cells from {} leaves",
    stats.records_emitted,
    stats.leaves_visited
  );
  DualCorners { cells, stats }
}

fn walk_corners(cursor: &mut SuperCursor<'_>, cells: &mut Vec<DualCell>, stats: &mut TraversalStats) {
  stats.cells_visited += 1;
  if cursor.is_masked() {
    return;
  }

  if cursor.is_leaf() {
    stats.leaves_visited += 1;
    for corner in 0..(1usize << cursor.dimension()) {
      let corner_leaves = cursor.get_corner_leaves(corner);
      if corner_leaves.owner {
        cells.push(DualCell {
          leaves: corner_leaves
            .cursors
            .iter()
            .map(|&c| cursor.global_node_index_at(c))
            .collect(),
        });
        stats.records_emitted += 1;
      }
    }
    return;
  }

  for child in 0..cursor.number_of_children() {
    cursor.to_child(child);
    walk_corners(cursor, cells, stats);
    cursor.to_parent();
  }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;
