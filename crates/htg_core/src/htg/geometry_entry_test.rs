use super::*;
use crate::htg::GridConfig;

#[test]
fn test_root_bounds_match_tree() {
  let config = GridConfig::new(2, 2, [2, 2, 1]).with_spacing(DVec3::new(2.0, 4.0, 1.0));
  let mut grid = HyperTreeGrid::new(config).unwrap();
  grid.initialize_uniform(2);

  let entry = GeometryLevelEntry::at_root(&grid, 3);
  assert_eq!(entry.origin(), DVec3::new(2.0, 4.0, 0.0));
  assert_eq!(entry.bounds(), (DVec3::new(2.0, 4.0, 0.0), DVec3::new(4.0, 8.0, 1.0)));
  assert_eq!(entry.point(), DVec3::new(3.0, 6.0, 0.5));
}

/// Only the first `dimension` axes are split.
#[test]
fn test_to_child_splits_active_axes() {
  let mut grid = HyperTreeGrid::new(GridConfig::new(2, 3, [1, 1, 1])).unwrap();
  grid.initialize_uniform(2);

  let mut entry = GeometryLevelEntry::at_root(&grid, 0);
  entry.to_child(&grid, 5);
  let third = 1.0 / 3.0;
  assert_eq!(entry.level(), 1);
  assert!((entry.size() - DVec3::new(third, third, 1.0)).length() < 1e-12);
  assert!((entry.origin() - DVec3::new(2.0 * third, third, 0.0)).length() < 1e-12);
}

#[test]
fn test_to_child_3d_octant() {
  let mut grid = HyperTreeGrid::new(GridConfig::new(3, 2, [1, 1, 1])).unwrap();
  grid.initialize_uniform(3);

  let mut entry = GeometryLevelEntry::at_root(&grid, 0);
  entry.to_child(&grid, 6);
  assert_eq!(entry.origin(), DVec3::new(0.0, 0.5, 0.5));
  entry.to_child(&grid, 1);
  assert_eq!(entry.origin(), DVec3::new(0.25, 0.5, 0.5));
  assert_eq!(entry.size(), DVec3::splat(0.25));
  assert_eq!(entry.global_node_index(&grid), entry.entry().global_node_index(&grid));
}
