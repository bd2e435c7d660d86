//! GridConfig - shape and placement of a hyper tree grid.

use glam::DVec3;

use super::GridError;

/// Traversal depth meaning "no limit".
pub const UNLIMITED_DEPTH: u32 = u32::MAX;

/// Configuration for a hyper tree grid.
///
/// `cell_dims` counts root trees per axis. Axes at or beyond `dimension`
/// must hold a single tree.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
  /// Spatial dimension, 1..=3.
  pub dimension: u32,

  /// Subdivisions per axis when a cell is refined, 2 or 3.
  pub branch_factor: u32,

  /// Root trees along x, y, z.
  pub cell_dims: [u32; 3],

  /// World-space minimum corner of tree (0, 0, 0).
  pub origin: DVec3,

  /// World-space size of one root tree per axis.
  pub spacing: DVec3,

  /// Level at which every cell is treated as a leaf.
  pub depth_limiter: u32,

  /// Root indexing with z fastest instead of x fastest.
  pub transposed_root_indexing: bool,
}

impl GridConfig {
  pub fn new(dimension: u32, branch_factor: u32, cell_dims: [u32; 3]) -> Self {
    Self {
      dimension,
      branch_factor,
      cell_dims,
      ..Self::default()
    }
  }

  pub fn with_dimension(mut self, dimension: u32) -> Self {
    self.dimension = dimension;
    self
  }

  pub fn with_branch_factor(mut self, branch_factor: u32) -> Self {
    self.branch_factor = branch_factor;
    self
  }

  pub fn with_cell_dims(mut self, cell_dims: [u32; 3]) -> Self {
    self.cell_dims = cell_dims;
    self
  }

  pub fn with_origin(mut self, origin: DVec3) -> Self {
    self.origin = origin;
    self
  }

  pub fn with_spacing(mut self, spacing: DVec3) -> Self {
    self.spacing = spacing;
    self
  }

  pub fn with_depth_limiter(mut self, depth_limiter: u32) -> Self {
    self.depth_limiter = depth_limiter;
    self
  }

  pub fn with_transposed_root_indexing(mut self, transposed: bool) -> Self {
    self.transposed_root_indexing = transposed;
    self
  }

  /// Children per refined cell: `branch_factor ^ dimension`.
  #[inline]
  pub fn number_of_children(&self) -> u32 {
    self.branch_factor.pow(self.dimension)
  }

  /// Number of root trees.
  #[inline]
  pub fn number_of_trees(&self) -> u64 {
    self.cell_dims.iter().map(|&d| d as u64).product()
  }

  pub fn validate(&self) -> Result<(), GridError> {
    if !(1..=3).contains(&self.dimension) {
      return Err(GridError::InvalidDimension(self.dimension));
    }
    if !(2..=3).contains(&self.branch_factor) {
      return Err(GridError::InvalidBranchFactor(self.branch_factor));
    }
    let bad_axis = self
      .cell_dims
      .iter()
      .enumerate()
      .any(|(axis, &n)| n == 0 || (axis as u32 >= self.dimension && n != 1));
    if bad_axis {
      return Err(GridError::InvalidCellDims {
        dims: self.cell_dims,
        dimension: self.dimension,
      });
    }
    Ok(())
  }
}

impl Default for GridConfig {
  fn default() -> Self {
    Self {
      dimension: 3,
      branch_factor: 2,
      cell_dims: [1, 1, 1],
      origin: DVec3::ZERO,
      spacing: DVec3::ONE,
      depth_limiter: UNLIMITED_DEPTH,
      transposed_root_indexing: false,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
