use super::*;

#[test]
fn test_new_tree_is_single_leaf() {
  let tree = HyperTree::new(5, 4);
  assert_eq!(tree.tree_index(), 5);
  assert_eq!(tree.number_of_vertices(), 1);
  assert_eq!(tree.number_of_leaves(), 1);
  assert_eq!(tree.number_of_levels(), 1);
  assert!(tree.is_leaf(0));
}

/// Children of a subdivided vertex are contiguous from the elder child.
#[test]
fn test_subdivide_appends_contiguous_children() {
  let mut tree = HyperTree::new(0, 4);
  tree.subdivide_leaf(0, 0);
  assert!(!tree.is_leaf(0));
  assert_eq!(tree.elder_child_index(0), 1);
  assert_eq!(tree.number_of_vertices(), 5);
  assert_eq!(tree.number_of_levels(), 2);

  tree.subdivide_leaf(3, 1);
  assert_eq!(tree.elder_child_index(3), 5);
  assert_eq!(tree.number_of_vertices(), 9);
  assert_eq!(tree.number_of_leaves(), 7);
  assert_eq!(tree.number_of_levels(), 3);

  tree.subdivide_leaf(1, 1);
  assert_eq!(tree.number_of_levels(), 3, "levels only grow with depth");
}

#[test]
fn test_implicit_global_indices() {
  let mut tree = HyperTree::new(0, 8);
  assert_eq!(tree.global_index_from_local(0), -1, "unassigned");
  tree.subdivide_leaf(0, 0);
  tree.set_global_index_start(100);
  assert_eq!(tree.global_index_from_local(0), 100);
  assert_eq!(tree.global_index_from_local(8), 108);
  assert_eq!(tree.maximum_global_index(), 108);
}

#[test]
fn test_explicit_global_indices() {
  let mut tree = HyperTree::new(0, 2);
  tree.subdivide_leaf(0, 0);
  tree.set_global_index_from_local(2, 40);
  tree.set_global_index_from_local(0, 7);
  assert_eq!(tree.global_index_from_local(0), 7);
  assert_eq!(tree.global_index_from_local(1), -1);
  assert_eq!(tree.global_index_from_local(2), 40);
  assert_eq!(tree.maximum_global_index(), 40);

  tree.set_global_index_start(0);
  assert_eq!(tree.global_index_from_local(1), 1, "start replaces the table");
}

#[test]
fn test_pin_global_indices() {
  let mut tree = HyperTree::new(0, 2);
  assert!(!tree.has_global_indices());
  tree.set_global_index_start(10);
  assert!(tree.has_global_indices());

  tree.subdivide_leaf(0, 0);
  tree.pin_global_indices(1);
  tree.set_global_index_from_local(1, 50);
  tree.set_global_index_from_local(2, 51);
  assert_eq!(tree.global_index_from_local(0), 10, "pinned from the old start");
  assert_eq!(tree.global_index_from_local(2), 51);
  assert_eq!(tree.maximum_global_index(), 51);
}
