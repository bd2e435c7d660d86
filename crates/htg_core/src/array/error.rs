//! Error types for array operations.

use thiserror::Error;

use super::ValueType;
use crate::extents::{Coordinates, SizeT};

/// Runtime failures of array operations.
///
/// Every variant is also logged at the failure site, so callers that drop
/// the `Result` still leave a diagnostic behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArrayError {
  #[error("dimension index {index} out of range for {dimensions}-dimensional array")]
  DimensionOutOfRange { index: usize, dimensions: usize },

  #[error("value type mismatch: source holds {source_type:?}, target holds {target_type:?}")]
  TypeMismatch {
    source_type: ValueType,
    target_type: ValueType,
  },

  #[error("variant {value} cannot be stored as {target_type:?}")]
  UnconvertibleValue { value: String, target_type: ValueType },

  #[error("got {actual} dimensions, expected {expected}")]
  DimensionMismatch { expected: usize, actual: usize },

  #[error("coordinates {coordinates} lie outside the array extents")]
  OutOfExtents { coordinates: Coordinates },

  #[error("coordinates {coordinates} are stored more than once")]
  DuplicateCoordinates { coordinates: Coordinates },

  #[error("sort names dimension {dim} more than once")]
  DuplicateSortDimension { dim: usize },

  #[error("linear index {index} out of range (non-null size {size})")]
  IndexOutOfRange { index: SizeT, size: SizeT },

  #[error("memory block holds {available} values, extents need {required}")]
  StorageTooSmall { required: SizeT, available: SizeT },
}
