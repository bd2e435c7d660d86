//! Grid construction errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
  #[error("grid dimension {0} not in 1..=3")]
  InvalidDimension(u32),

  #[error("branch factor {0} not in {{2, 3}}")]
  InvalidBranchFactor(u32),

  #[error("cell dims {dims:?} invalid for a {dimension}-dimensional grid")]
  InvalidCellDims { dims: [u32; 3], dimension: u32 },
}
