//! Coordinate and extents algebra shared by every array backend.
//!
//! Pure value types, no storage:
//!
//! - [`Range`]: half-open interval `[begin, end)` along one dimension
//! - [`Coordinates`]: one index per dimension
//! - [`Extents`]: one `Range` per dimension, plus linearization helpers
//! - [`ArraySort`]: dimension order used to sort sparse storage
//!
//! Coordinate systems need not be zero-based: a range `[5, 8)` addresses
//! indices 5, 6 and 7.

pub mod coordinates;
pub mod range;
pub mod shape;
pub mod sort;

pub use coordinates::Coordinates;
pub use range::Range;
pub use shape::Extents;
pub use sort::ArraySort;

/// Index along one dimension.
pub type CoordinateT = i64;

/// Element counts. 64-bit so realistic grid sizes never overflow silently.
pub type SizeT = u64;
