use super::*;

fn grid_2d(nx: u32, ny: u32) -> HyperTreeGrid {
  HyperTreeGrid::new(GridConfig::new(2, 2, [nx, ny, 1])).expect("valid config")
}

#[test]
fn test_new_grid_has_no_trees() {
  let grid = grid_2d(3, 2);
  assert_eq!(grid.number_of_trees(), 6);
  assert_eq!(grid.tree_indices().count(), 0);
  assert!(grid.get_tree(0).is_none());
  assert_eq!(grid.number_of_children(), 4);
}

#[test]
fn test_invalid_config_is_rejected() {
  let err = HyperTreeGrid::new(GridConfig::new(2, 5, [1, 1, 1])).unwrap_err();
  assert_eq!(err, GridError::InvalidBranchFactor(5));
}

#[test]
fn test_grid_ids_are_unique() {
  assert_ne!(grid_2d(1, 1).id(), grid_2d(1, 1).id());
}

#[test]
fn test_get_or_create_tree() {
  let mut grid = grid_2d(2, 2);
  assert!(grid.get_or_create_tree(3).is_some());
  assert!(grid.get_or_create_tree(4).is_none(), "outside the grid");
  assert_eq!(grid.tree_indices().collect::<Vec<_>>(), vec![3]);
  assert_eq!(grid.get_tree(3).map(HyperTree::tree_index), Some(3));
}

// =========================================================================
// Root indexing
// =========================================================================

#[test]
fn test_level_zero_coordinates_x_fastest() {
  let grid = HyperTreeGrid::new(GridConfig::new(3, 2, [3, 2, 2])).unwrap();
  assert_eq!(grid.level_zero_coordinates_from_index(0), [0, 0, 0]);
  assert_eq!(grid.level_zero_coordinates_from_index(1), [1, 0, 0]);
  assert_eq!(grid.level_zero_coordinates_from_index(3), [0, 1, 0]);
  assert_eq!(grid.level_zero_coordinates_from_index(7), [1, 0, 1]);
  for index in 0..grid.number_of_trees() {
    let [i, j, k] = grid.level_zero_coordinates_from_index(index);
    assert_eq!(grid.level_zero_index_from_coordinates(i, j, k), index);
  }
}

#[test]
fn test_level_zero_coordinates_transposed() {
  let config = GridConfig::new(3, 2, [3, 2, 2]).with_transposed_root_indexing(true);
  let grid = HyperTreeGrid::new(config).unwrap();
  assert_eq!(grid.level_zero_coordinates_from_index(1), [0, 0, 1]);
  assert_eq!(grid.level_zero_coordinates_from_index(2), [0, 1, 0]);
  assert_eq!(grid.level_zero_coordinates_from_index(4), [1, 0, 0]);
  for index in 0..grid.number_of_trees() {
    let [i, j, k] = grid.level_zero_coordinates_from_index(index);
    assert_eq!(grid.level_zero_index_from_coordinates(i, j, k), index);
  }
}

#[test]
fn test_shifted_level_zero_index() {
  let grid = grid_2d(3, 3);
  assert_eq!(grid.shifted_level_zero_index(4, 1, 0, 0), 5);
  assert_eq!(grid.shifted_level_zero_index(4, -1, 0, 0), 3);
  assert_eq!(grid.shifted_level_zero_index(4, 0, 1, 0), 7);
  assert_eq!(grid.shifted_level_zero_index(4, -1, -1, 0), 0);
}

// =========================================================================
// Global indices and mask
// =========================================================================

#[test]
fn test_initialize_uniform_assigns_consecutive_ranges() {
  let mut grid = grid_2d(2, 1);
  grid.initialize_uniform(3);

  // 1 + 4 + 16 vertices per tree
  assert_eq!(grid.number_of_vertices(), 42);
  assert_eq!(grid.get_tree(0).map(|t| t.global_index_start()), Some(0));
  assert_eq!(grid.get_tree(1).map(|t| t.global_index_start()), Some(21));
  assert_eq!(grid.get_tree(1).map(|t| t.number_of_leaves()), Some(16));
  assert_eq!(grid.get_tree(1).map(|t| t.number_of_levels()), Some(3));
}

fn all_global_indices(grid: &HyperTreeGrid) -> Vec<i64> {
  grid
    .tree_indices()
    .filter_map(|index| grid.get_tree(index))
    .flat_map(|tree| (0..tree.number_of_vertices()).map(|local| tree.global_index_from_local(local)))
    .collect()
}

/// Refining after ranges are assigned must not reuse another tree's ids.
#[test]
fn test_refinement_after_assignment_takes_fresh_ids() {
  let mut grid = grid_2d(2, 1);
  grid.initialize_uniform(1);
  assert_eq!(grid.next_global_index(), 2);

  grid.subdivide_leaf(0, 0, 0);
  assert_eq!(grid.next_global_index(), 6);

  let mut ids = all_global_indices(&grid);
  assert_eq!(ids.len(), 6);
  assert!(ids.iter().all(|&id| id >= 0));
  ids.sort_unstable();
  ids.dedup();
  assert_eq!(ids, vec![0, 1, 2, 3, 4, 5], "ids unique across trees");

  let tree0 = grid.get_tree(0).expect("tree 0");
  assert_eq!(tree0.global_index_from_local(0), 0);
  assert_eq!(tree0.global_index_from_local(1), 2);
  assert_eq!(grid.get_tree(1).map(|t| t.global_index_from_local(0)), Some(1));

  assert_eq!(grid.assign_global_indices(), 6);
  assert_eq!(grid.get_tree(1).map(|t| t.global_index_start()), Some(5), "compacted again");
}

#[test]
fn test_refinement_before_assignment_stays_unassigned() {
  let mut grid = grid_2d(1, 1);
  grid.get_or_create_tree(0);
  grid.subdivide_leaf(0, 0, 0);
  assert_eq!(grid.next_global_index(), 0);
  assert!(all_global_indices(&grid).iter().all(|&id| id == -1));

  grid.subdivide_leaf(7, 0, 0);
  assert_eq!(grid.number_of_vertices(), 5, "missing tree is ignored");
}

#[test]
fn test_mask_defaults_to_unmasked() {
  let mut grid = grid_2d(1, 1);
  grid.initialize_uniform(2);
  assert!(!grid.has_mask());
  assert!(!grid.is_masked(0));

  grid.set_mask_value(3, true);
  assert!(grid.has_mask());
  assert!(grid.is_masked(3));
  assert!(!grid.is_masked(2));
  assert!(!grid.is_masked(-1));
  assert_eq!(grid.mask().map(<[bool]>::len), Some(5));

  grid.clear_mask();
  assert!(!grid.is_masked(3));
}

#[test]
fn test_tree_geometry() {
  let config = GridConfig::new(2, 2, [2, 2, 1])
    .with_origin(DVec3::new(-1.0, 0.0, 0.0))
    .with_spacing(DVec3::new(2.0, 0.5, 1.0));
  let grid = HyperTreeGrid::new(config).unwrap();
  assert_eq!(grid.tree_origin(3), DVec3::new(1.0, 0.5, 0.0));
  assert_eq!(grid.tree_size(), DVec3::new(2.0, 0.5, 1.0));
}
