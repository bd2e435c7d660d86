//! Hyper tree grids and the super-cursor traversal engine.
//!
//! - [`HyperTreeGrid`] owns a rectilinear set of [`HyperTree`]s plus mask
//! - [`LevelEntry`] / [`GeometryLevelEntry`] address one cell
//! - [`SuperCursor`] walks a tree while tracking same-level neighbors
//!   across tree boundaries, driven by the [`topology`] tables
//! - [`extract`] holds traversal consumers built on the super-cursor

pub mod config;
pub mod entry;
pub mod error;
pub mod extract;
pub mod geometry_entry;
pub mod grid;
pub mod super_cursor;
pub mod topology;
pub mod tree;

pub use config::{GridConfig, UNLIMITED_DEPTH};
pub use entry::LevelEntry;
pub use error::GridError;
pub use extract::{
  extract_boundary_faces, extract_dual_corners, BoundaryFaces, DualCell, DualCorners, Face,
  TraversalStats,
};
pub use geometry_entry::GeometryLevelEntry;
pub use grid::{GridId, HyperTreeGrid};
pub use super_cursor::{CornerLeaves, CursorInformation, SuperCursor};
pub use topology::{CursorTables, Neighborhood};
pub use tree::HyperTree;
