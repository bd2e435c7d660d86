use super::*;
use crate::htg::{GridConfig, LevelEntry};

fn uniform(dimension: u32, f: u32, cell_dims: [u32; 3], levels: u32) -> HyperTreeGrid {
  let mut grid = HyperTreeGrid::new(GridConfig::new(dimension, f, cell_dims)).unwrap();
  grid.initialize_uniform(levels);
  grid
}

/// Global index of the cell at fine position `coords + offset` on `level`,
/// found by descending from the root; -1 outside the grid.
fn expected_global(grid: &HyperTreeGrid, coords: [i64; 3], level: u32, offset: [i32; 3]) -> i64 {
  let f = grid.branch_factor() as i64;
  let scale = f.pow(level);
  let dims = grid.cell_dims();
  let mut fine = [0i64; 3];
  for axis in 0..3 {
    fine[axis] = coords[axis] + offset[axis] as i64;
    if fine[axis] < 0 || fine[axis] >= dims[axis] as i64 * scale {
      return -1;
    }
  }
  let root = grid.level_zero_index_from_coordinates(
    (fine[0] / scale) as u32,
    (fine[1] / scale) as u32,
    (fine[2] / scale) as u32,
  );
  let mut entry = LevelEntry::at_root(grid, root);
  for l in 1..=level {
    let div = f.pow(level - l);
    let digit = |axis: usize| ((fine[axis] % scale) / div) % f;
    let child = digit(0) + f * digit(1) + f * f * digit(2);
    entry.to_child(grid, child as u32);
  }
  entry.global_node_index(grid)
}

fn child_coords(coords: [i64; 3], f: u32, dimension: u32, child: u32) -> [i64; 3] {
  let f = f as i64;
  let c = child as i64;
  let position = [c % f, (c / f) % f, c / (f * f)];
  let mut out = coords;
  for axis in 0..dimension as usize {
    out[axis] = coords[axis] * f + position[axis];
  }
  out
}

fn check_walk(cursor: &mut SuperCursor<'_>, coords: [i64; 3], visited: &mut usize) {
  let grid = cursor.grid();
  *visited += 1;
  for i in 0..cursor.number_of_cursors() {
    let offset = cursor.neighborhood().offset(grid.dimension(), i);
    let expected = expected_global(grid, coords, cursor.level(), offset);
    assert_eq!(
      cursor.global_node_index_at(i),
      expected,
      "cursor {} at level {} coords {:?}",
      i,
      cursor.level(),
      coords
    );
    if expected >= 0 {
      assert_eq!(cursor.level_at(i), cursor.level(), "uniform grid keeps levels");
    } else {
      assert!(!cursor.has_tree_at(i));
    }
  }
  if cursor.is_leaf() {
    return;
  }
  for child in 0..cursor.number_of_children() {
    cursor.to_child(child);
    let next = child_coords(coords, grid.branch_factor(), grid.dimension(), child);
    check_walk(cursor, next, visited);
    cursor.to_parent();
  }
}

fn check_grid(grid: &HyperTreeGrid, neighborhood: Neighborhood) {
  let mut cursor = SuperCursor::new(grid, neighborhood);
  let mut visited = 0;
  for tree in grid.tree_indices() {
    assert!(cursor.initialize(tree));
    let [i, j, k] = grid.level_zero_coordinates_from_index(tree);
    check_walk(&mut cursor, [i as i64, j as i64, k as i64], &mut visited);
  }
  assert_eq!(visited as u64, grid.number_of_vertices());
}

// =========================================================================
// Neighbor window against brute force
// =========================================================================

#[test]
fn test_window_matches_brute_force_2d() {
  let grid = uniform(2, 2, [3, 2, 1], 4);
  check_grid(&grid, Neighborhood::VonNeumann);
  check_grid(&grid, Neighborhood::Moore);
}

#[test]
fn test_window_matches_brute_force_2d_ternary() {
  let grid = uniform(2, 3, [2, 2, 1], 3);
  check_grid(&grid, Neighborhood::VonNeumann);
  check_grid(&grid, Neighborhood::Moore);
}

#[test]
fn test_window_matches_brute_force_3d() {
  let grid = uniform(3, 2, [2, 2, 2], 3);
  check_grid(&grid, Neighborhood::VonNeumann);
  check_grid(&grid, Neighborhood::Moore);

  let grid = uniform(3, 3, [2, 1, 1], 2);
  check_grid(&grid, Neighborhood::VonNeumann);
  check_grid(&grid, Neighborhood::Moore);
}

#[test]
fn test_window_matches_brute_force_1d() {
  for f in [2, 3] {
    let grid = uniform(1, f, [4, 1, 1], 3);
    check_grid(&grid, Neighborhood::VonNeumann);
    check_grid(&grid, Neighborhood::Moore);
  }
}

#[test]
fn test_window_matches_brute_force_transposed() {
  let config = GridConfig::new(3, 2, [2, 3, 2]).with_transposed_root_indexing(true);
  let mut grid = HyperTreeGrid::new(config).unwrap();
  grid.initialize_uniform(2);
  check_grid(&grid, Neighborhood::Moore);
}

// =========================================================================
// Initialization and navigation
// =========================================================================

#[test]
fn test_initialize_resets_out_of_grid_neighbors() {
  let grid = uniform(2, 2, [2, 2, 1], 2);
  let mut cursor = SuperCursor::new(&grid, Neighborhood::VonNeumann);
  assert!(cursor.initialize(0));

  assert_eq!(cursor.number_of_cursors(), 5);
  assert_eq!(cursor.central_index(), 2);
  assert!(!cursor.has_tree_at(0), "south is outside");
  assert!(!cursor.has_tree_at(1), "west is outside");
  assert_eq!(cursor.tree_index_at(3), Some(1));
  assert_eq!(cursor.tree_index_at(4), Some(2));
  assert_eq!(cursor.tree_index_at(2), Some(0));
  assert!(cursor.is_root());
}

#[test]
fn test_initialize_on_missing_tree() {
  let mut grid = HyperTreeGrid::new(GridConfig::new(2, 2, [2, 1, 1])).unwrap();
  grid.get_or_create_tree(1);
  let mut cursor = SuperCursor::new(&grid, Neighborhood::VonNeumann);
  assert!(!cursor.initialize(0));
  assert!(!cursor.has_tree());
  assert_eq!(cursor.tree_index_at(3), Some(1));
}

#[test]
fn test_to_parent_restores_window() {
  let grid = uniform(2, 2, [2, 2, 1], 3);
  let mut cursor = SuperCursor::new(&grid, Neighborhood::Moore);
  cursor.initialize(3);
  let before: Vec<_> = (0..9).map(|i| cursor.information(i)).collect();

  cursor.to_child(2);
  cursor.to_child(1);
  assert_eq!(cursor.level(), 2);
  cursor.to_parent();
  cursor.to_parent();

  let after: Vec<_> = (0..9).map(|i| cursor.information(i)).collect();
  assert_eq!(before, after);
}

#[test]
fn test_to_root() {
  let grid = uniform(3, 2, [1, 1, 1], 3);
  let mut cursor = SuperCursor::new(&grid, Neighborhood::VonNeumann);
  cursor.initialize(0);
  cursor.to_child(7);
  cursor.to_child(0);
  cursor.to_root();
  assert!(cursor.is_root());
  assert_eq!(cursor.global_node_index(), 0);
  assert_eq!(cursor.size(), DVec3::ONE);

  cursor.to_child(1);
  assert_eq!(cursor.level(), 1);
  assert!(!cursor.has_tree_at(4), "+x of child 1 is outside the single tree");
}

#[test]
fn test_neighbor_geometry() {
  let grid = uniform(2, 2, [2, 1, 1], 2);
  let mut cursor = SuperCursor::new(&grid, Neighborhood::VonNeumann);
  cursor.initialize(0);
  cursor.to_child(1);
  assert_eq!(cursor.origin(), DVec3::new(0.5, 0.0, 0.0));
  assert_eq!(cursor.origin_at(3), DVec3::new(1.0, 0.0, 0.0));
  assert_eq!(cursor.size_at(3), DVec3::new(0.5, 0.5, 1.0));
  assert_eq!(cursor.bounds_at(4).0, DVec3::new(0.5, 0.5, 0.0));
  assert_eq!(cursor.point(), DVec3::new(0.75, 0.25, 0.5));
}

// =========================================================================
// Adaptive grids
// =========================================================================

/// Two trees side by side; only tree 0's child 1 is refined again.
fn adaptive_grid() -> HyperTreeGrid {
  let mut grid = HyperTreeGrid::new(GridConfig::new(2, 2, [2, 1, 1])).unwrap();
  for tree in 0..2 {
    let mut entry = LevelEntry::default();
    entry.initialize_or_create(&mut grid, tree);
    entry.subdivide_leaf(&mut grid);
  }
  let mut entry = LevelEntry::at_root(&grid, 0);
  entry.to_child(&grid, 1);
  entry.subdivide_leaf(&mut grid);
  grid.assign_global_indices();
  grid
}

/// A leaf neighbor one level up is shared, not descended.
#[test]
fn test_coarser_neighbor_is_shared() {
  let grid = adaptive_grid();
  let mut cursor = SuperCursor::new(&grid, Neighborhood::VonNeumann);
  cursor.initialize(0);
  cursor.to_child(1);
  cursor.to_child(1);

  assert_eq!(cursor.level(), 2);
  assert_eq!(cursor.level_at(3), 1, "east neighbor is tree 1 child 0");
  assert!(cursor.is_leaf_at(3));
  assert_eq!(cursor.tree_index_at(3), Some(1));
  // tree 0 holds 9 vertices; tree 1 child 0 is its vertex 1
  assert_eq!(cursor.global_node_index_at(3), 10);
  // west neighbor is the sibling at level 2
  assert_eq!(cursor.level_at(1), 2);
  assert_eq!(cursor.global_node_index_at(1), 5 + 0);
}

#[test]
fn test_masked_neighbor_is_not_descended() {
  let mut grid = adaptive_grid();
  let east = {
    let mut e = LevelEntry::at_root(&grid, 1);
    e.to_child(&grid, 0);
    e
  };
  east.set_mask(&mut grid, true);

  let mut cursor = SuperCursor::new(&grid, Neighborhood::Moore);
  cursor.initialize(0);
  cursor.to_child(1);
  assert!(cursor.is_masked_at(5));
  assert!(!cursor.is_masked());
  cursor.to_child(3);
  assert!(cursor.is_masked_at(5), "still the masked coarse cell");
  assert_eq!(cursor.level_at(5), 1);
}

// =========================================================================
// Corner ownership
// =========================================================================

/// Corner 3 of child 0 is shared with higher cursors at the same level.
#[test]
fn test_corner_tie_break_favors_higher_cursor() {
  let grid = uniform(2, 2, [1, 1, 1], 2);
  let mut cursor = SuperCursor::new(&grid, Neighborhood::Moore);
  cursor.initialize(0);

  cursor.to_child(0);
  let leaves = cursor.get_corner_leaves(3);
  assert_eq!(leaves.cursors.as_slice(), &[4, 5, 7, 8]);
  assert!(!leaves.owner);
  cursor.to_parent();

  cursor.to_child(3);
  let leaves = cursor.get_corner_leaves(0);
  assert_eq!(leaves.cursors.as_slice(), &[0, 1, 3, 4]);
  assert!(leaves.owner, "upper-right cell owns the shared corner");
  assert_eq!(cursor.get_corner_cursors(0, 3), (4, true));
  assert_eq!(cursor.get_corner_cursors(0, 0), (0, true));
}

#[test]
fn test_boundary_corners_are_not_owned() {
  let grid = uniform(2, 2, [1, 1, 1], 2);
  let mut cursor = SuperCursor::new(&grid, Neighborhood::Moore);
  cursor.initialize(0);
  cursor.to_child(3);
  for corner in 1..4 {
    assert!(!cursor.get_corner_leaves(corner).owner, "corner {}", corner);
  }
}

#[test]
fn test_corner_cursors_require_moore() {
  let grid = uniform(2, 2, [1, 1, 1], 2);
  let mut cursor = SuperCursor::new(&grid, Neighborhood::VonNeumann);
  cursor.initialize(0);
  assert_eq!(cursor.get_corner_cursors(0, 0), (2, false));
}
