//! htg_core - N-dimensional arrays and hyper tree grid traversal.
//!
//! Two independent layers:
//!
//! - **Arrays**: dense and sparse N-D storage behind one [`Array`]
//!   interface, addressed through the [`extents`] algebra
//! - **Hyper tree grids**: grids of adaptively refined trees, walked by a
//!   [`SuperCursor`] that keeps each cell's neighbors at hand across tree
//!   boundaries
//!
//! # Example
//!
//! ```ignore
//! use htg_core::{extract_dual_corners, GridConfig, HyperTreeGrid};
//!
//! let mut grid = HyperTreeGrid::new(GridConfig::new(2, 2, [4, 4, 1]))?;
//! grid.initialize_uniform(3);
//!
//! let corners = extract_dual_corners(&grid);
//! println!("{} dual cells", corners.cells.len());
//! ```

pub mod array;
pub mod extents;
pub mod htg;

pub use array::{
  create_array, create_array_from_codes, Array, ArrayError, ArrayValue, DenseArray,
  HeapMemoryBlock, MemoryBlock, SparseArray, StaticMemoryBlock, StorageKind, TypedArray,
  ValueType, ValueTypeTag, Variant,
};
pub use extents::{ArraySort, Coordinates, Extents, Range};
pub use htg::{
  extract_boundary_faces, extract_dual_corners, GeometryLevelEntry, GridConfig, GridError, GridId,
  HyperTree, HyperTreeGrid, LevelEntry, Neighborhood, SuperCursor,
};
