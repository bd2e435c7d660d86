//! Static super-cursor topology tables.
//!
//! For every `(neighborhood, dimension, branch factor)` two flat tables of
//! `children x cursors` entries drive `SuperCursor::to_child`. Row `c` is
//! the child being descended into; column `i` is a cursor in the child's
//! frame.
//!
//! - `PARENT[c * N + i]`: cursor of the parent's frame holding the cell
//!   that contains neighbor `i` of child `c` (the central index means the
//!   parent cell itself)
//! - `CHILD[c * N + i]`: child of that cell which is neighbor `i`
//!
//! # Cursor numbering
//!
//! ```text
//! Von Neumann (faces only)        Moore (all 3^d neighbors)
//!
//! 1D:  0 1 2                      1D:  0 1 2
//!
//! 2D:    4                        2D:  6 7 8
//!      1 2 3                           3 4 5
//!        0                             0 1 2
//!
//! 3D:  0 = -z   1 = -y   2 = -x   3D:  index = (dx+1) + 3(dy+1) + 9(dz+1)
//!      3 = center
//!      4 = +x   5 = +y   6 = +z
//! ```
//!
//! Children are numbered with x fastest: `c = cx + f*cy + f²*cz`.

use super::HyperTreeGrid;

/// Neighborhood shape tracked by a super-cursor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Neighborhood {
  /// Face neighbors only: `2 * dimension + 1` cursors.
  VonNeumann,
  /// Face, edge and corner neighbors: `3 ^ dimension` cursors.
  Moore,
}

#[rustfmt::skip]
const VON_NEUMANN_OFFSETS_1D: [[i32; 3]; 3] = [
  [-1, 0, 0], [0, 0, 0], [1, 0, 0],
];

#[rustfmt::skip]
const VON_NEUMANN_OFFSETS_2D: [[i32; 3]; 5] = [
  [0, -1, 0], [-1, 0, 0], [0, 0, 0], [1, 0, 0], [0, 1, 0],
];

#[rustfmt::skip]
const VON_NEUMANN_OFFSETS_3D: [[i32; 3]; 7] = [
  [0, 0, -1], [0, -1, 0], [-1, 0, 0], [0, 0, 0], [1, 0, 0], [0, 1, 0], [0, 0, 1],
];

impl Neighborhood {
  /// Cursors including the center.
  #[inline]
  pub fn number_of_cursors(self, dimension: u32) -> usize {
    match self {
      Neighborhood::VonNeumann => 2 * dimension as usize + 1,
      Neighborhood::Moore => 3usize.pow(dimension),
    }
  }

  /// Index of the center cursor.
  #[inline]
  pub fn central_index(self, dimension: u32) -> usize {
    self.number_of_cursors(dimension) / 2
  }

  /// Per-axis root offset `(dx, dy, dz)` of `cursor`; unused axes are zero.
  pub fn offset(self, dimension: u32, cursor: usize) -> [i32; 3] {
    match self {
      Neighborhood::VonNeumann => match dimension {
        1 => VON_NEUMANN_OFFSETS_1D[cursor],
        2 => VON_NEUMANN_OFFSETS_2D[cursor],
        _ => VON_NEUMANN_OFFSETS_3D[cursor],
      },
      Neighborhood::Moore => {
        let mut offset = [0; 3];
        let mut rest = cursor;
        for axis in offset.iter_mut().take(dimension as usize) {
          *axis = (rest % 3) as i32 - 1;
          rest /= 3;
        }
        offset
      }
    }
  }
}

// =============================================================================
// CursorTables - table selection
// =============================================================================

/// Tables for one `(neighborhood, dimension, branch factor)`.
#[derive(Clone, Copy, Debug)]
pub struct CursorTables {
  pub neighborhood: Neighborhood,
  pub dimension: u32,
  pub branch_factor: u32,
  pub number_of_cursors: usize,
  pub central_index: usize,
  child_to_parent: &'static [u8],
  child_to_child: &'static [u8],
}

impl CursorTables {
  /// `None` for a dimension outside 1..=3 or a branch factor outside {2, 3}.
  pub fn lookup(neighborhood: Neighborhood, dimension: u32, branch_factor: u32) -> Option<Self> {
    if !(1..=3).contains(&dimension) || !(2..=3).contains(&branch_factor) {
      return None;
    }
    Some(Self::select(neighborhood, dimension, branch_factor))
  }

  /// Tables for a grid; its config has already been validated.
  pub fn for_grid(neighborhood: Neighborhood, grid: &HyperTreeGrid) -> Self {
    Self::select(neighborhood, grid.dimension(), grid.branch_factor())
  }

  fn select(neighborhood: Neighborhood, dimension: u32, branch_factor: u32) -> Self {
    let d = (dimension.clamp(1, 3) - 1) as usize;
    let b = (branch_factor.clamp(2, 3) - 2) as usize;
    let (child_to_parent, child_to_child) = match neighborhood {
      Neighborhood::VonNeumann => (VON_NEUMANN_PARENT[d][b], VON_NEUMANN_CHILD[d][b]),
      Neighborhood::Moore => (MOORE_PARENT[d][b], MOORE_CHILD[d][b]),
    };
    let dimension = d as u32 + 1;
    Self {
      neighborhood,
      dimension,
      branch_factor: b as u32 + 2,
      number_of_cursors: neighborhood.number_of_cursors(dimension),
      central_index: neighborhood.central_index(dimension),
      child_to_parent,
      child_to_child,
    }
  }

  /// Tables selected from the child count alone.
  ///
  /// 2, 3, 4, 9, 8 and 27 children map to (1,2), (1,3), (2,2), (2,3),
  /// (3,2) and (3,3).
  pub fn for_number_of_children(neighborhood: Neighborhood, number_of_children: u32) -> Option<Self> {
    let (dimension, branch_factor) = match number_of_children {
      2 => (1, 2),
      3 => (1, 3),
      4 => (2, 2),
      9 => (2, 3),
      8 => (3, 2),
      27 => (3, 3),
      _ => return None,
    };
    Self::lookup(neighborhood, dimension, branch_factor)
  }

  #[inline]
  pub fn number_of_children(&self) -> u32 {
    self.branch_factor.pow(self.dimension)
  }

  /// Parent-frame cursor supplying cursor `cursor` of child `child`.
  #[inline]
  pub fn parent_cursor(&self, child: u32, cursor: usize) -> usize {
    self.child_to_parent[child as usize * self.number_of_cursors + cursor] as usize
  }

  /// Child of the parent-frame cell that is cursor `cursor` of child `child`.
  #[inline]
  pub fn child_index(&self, child: u32, cursor: usize) -> u32 {
    self.child_to_child[child as usize * self.number_of_cursors + cursor] as u32
  }
}

// =============================================================================
// Corner tables (Moore)
// =============================================================================

/// Moore cursors touching each corner of the center cell in 1D.
pub static CORNER_NEIGHBOR_CURSORS_1D: [[u8; 2]; 2] = [[0, 1], [1, 2]];

/// Moore cursors touching each corner of the center cell in 2D.
pub static CORNER_NEIGHBOR_CURSORS_2D: [[u8; 4]; 4] =
  [[0, 1, 3, 4], [1, 2, 4, 5], [3, 4, 6, 7], [4, 5, 7, 8]];

/// Moore cursors touching each corner of the center cell in 3D.
///
/// Corners are numbered with x fastest, like children of a binary split.
#[rustfmt::skip]
pub static CORNER_NEIGHBOR_CURSORS_3D: [[u8; 8]; 8] = [
  [ 0,  1,  3,  4,  9, 10, 12, 13],
  [ 1,  2,  4,  5, 10, 11, 13, 14],
  [ 3,  4,  6,  7, 12, 13, 15, 16],
  [ 4,  5,  7,  8, 13, 14, 16, 17],
  [ 9, 10, 12, 13, 18, 19, 21, 22],
  [10, 11, 13, 14, 19, 20, 22, 23],
  [12, 13, 15, 16, 21, 22, 24, 25],
  [13, 14, 16, 17, 22, 23, 25, 26],
];

/// Moore cursors sharing `corner` of the center cell, center included.
pub fn corner_neighbor_cursors(dimension: u32, corner: usize) -> &'static [u8] {
  match dimension {
    1 => &CORNER_NEIGHBOR_CURSORS_1D[corner],
    2 => &CORNER_NEIGHBOR_CURSORS_2D[corner],
    _ => &CORNER_NEIGHBOR_CURSORS_3D[corner],
  }
}

// =============================================================================
// Tables indexed [dimension - 1][branch factor - 2]
// =============================================================================

static VON_NEUMANN_PARENT: [[&[u8]; 2]; 3] = [
  [&VON_NEUMANN_PARENT_12, &VON_NEUMANN_PARENT_13],
  [&VON_NEUMANN_PARENT_22, &VON_NEUMANN_PARENT_23],
  [&VON_NEUMANN_PARENT_32, &VON_NEUMANN_PARENT_33],
];

static VON_NEUMANN_CHILD: [[&[u8]; 2]; 3] = [
  [&VON_NEUMANN_CHILD_12, &VON_NEUMANN_CHILD_13],
  [&VON_NEUMANN_CHILD_22, &VON_NEUMANN_CHILD_23],
  [&VON_NEUMANN_CHILD_32, &VON_NEUMANN_CHILD_33],
];

static MOORE_PARENT: [[&[u8]; 2]; 3] = [
  [&MOORE_PARENT_12, &MOORE_PARENT_13],
  [&MOORE_PARENT_22, &MOORE_PARENT_23],
  [&MOORE_PARENT_32, &MOORE_PARENT_33],
];

static MOORE_CHILD: [[&[u8]; 2]; 3] = [
  [&MOORE_CHILD_12, &MOORE_CHILD_13],
  [&MOORE_CHILD_22, &MOORE_CHILD_23],
  [&MOORE_CHILD_32, &MOORE_CHILD_33],
];

// Von Neumann, dimension 1, branch factor 2: 2 children x 3 cursors

#[rustfmt::skip]
static VON_NEUMANN_PARENT_12: [u8; 6] = [
  0, 1, 1,
  1, 1, 2,
];

#[rustfmt::skip]
static VON_NEUMANN_CHILD_12: [u8; 6] = [
  1, 0, 1,
  0, 1, 0,
];

// Von Neumann, dimension 1, branch factor 3: 3 children x 3 cursors

#[rustfmt::skip]
static VON_NEUMANN_PARENT_13: [u8; 9] = [
  0, 1, 1,
  1, 1, 1,
  1, 1, 2,
];

#[rustfmt::skip]
static VON_NEUMANN_CHILD_13: [u8; 9] = [
  2, 0, 1,
  0, 1, 2,
  1, 2, 0,
];

// Von Neumann, dimension 2, branch factor 2: 4 children x 5 cursors

#[rustfmt::skip]
static VON_NEUMANN_PARENT_22: [u8; 20] = [
  0, 1, 2, 2, 2,
  0, 2, 2, 3, 2,
  2, 1, 2, 2, 4,
  2, 2, 2, 3, 4,
];

#[rustfmt::skip]
static VON_NEUMANN_CHILD_22: [u8; 20] = [
  2, 1, 0, 1, 2,
  3, 0, 1, 0, 3,
  0, 3, 2, 3, 0,
  1, 2, 3, 2, 1,
];

// Von Neumann, dimension 2, branch factor 3: 9 children x 5 cursors

#[rustfmt::skip]
static VON_NEUMANN_PARENT_23: [u8; 45] = [
  0, 1, 2, 2, 2,
  0, 2, 2, 2, 2,
  0, 2, 2, 3, 2,
  2, 1, 2, 2, 2,
  2, 2, 2, 2, 2,
  2, 2, 2, 3, 2,
  2, 1, 2, 2, 4,
  2, 2, 2, 2, 4,
  2, 2, 2, 3, 4,
];

#[rustfmt::skip]
static VON_NEUMANN_CHILD_23: [u8; 45] = [
  6, 2, 0, 1, 3,
  7, 0, 1, 2, 4,
  8, 1, 2, 0, 5,
  0, 5, 3, 4, 6,
  1, 3, 4, 5, 7,
  2, 4, 5, 3, 8,
  3, 8, 6, 7, 0,
  4, 6, 7, 8, 1,
  5, 7, 8, 6, 2,
];

// Von Neumann, dimension 3, branch factor 2: 8 children x 7 cursors

#[rustfmt::skip]
static VON_NEUMANN_PARENT_32: [u8; 56] = [
  0, 1, 2, 3, 3, 3, 3,
  0, 1, 3, 3, 4, 3, 3,
  0, 3, 2, 3, 3, 5, 3,
  0, 3, 3, 3, 4, 5, 3,
  3, 1, 2, 3, 3, 3, 6,
  3, 1, 3, 3, 4, 3, 6,
  3, 3, 2, 3, 3, 5, 6,
  3, 3, 3, 3, 4, 5, 6,
];

#[rustfmt::skip]
static VON_NEUMANN_CHILD_32: [u8; 56] = [
  4, 2, 1, 0, 1, 2, 4,
  5, 3, 0, 1, 0, 3, 5,
  6, 0, 3, 2, 3, 0, 6,
  7, 1, 2, 3, 2, 1, 7,
  0, 6, 5, 4, 5, 6, 0,
  1, 7, 4, 5, 4, 7, 1,
  2, 4, 7, 6, 7, 4, 2,
  3, 5, 6, 7, 6, 5, 3,
];

// Von Neumann, dimension 3, branch factor 3: 27 children x 7 cursors

#[rustfmt::skip]
static VON_NEUMANN_PARENT_33: [u8; 189] = [
  0, 1, 2, 3, 3, 3, 3,
  0, 1, 3, 3, 3, 3, 3,
  0, 1, 3, 3, 4, 3, 3,
  0, 3, 2, 3, 3, 3, 3,
  0, 3, 3, 3, 3, 3, 3,
  0, 3, 3, 3, 4, 3, 3,
  0, 3, 2, 3, 3, 5, 3,
  0, 3, 3, 3, 3, 5, 3,
  0, 3, 3, 3, 4, 5, 3,
  3, 1, 2, 3, 3, 3, 3,
  3, 1, 3, 3, 3, 3, 3,
  3, 1, 3, 3, 4, 3, 3,
  3, 3, 2, 3, 3, 3, 3,
  3, 3, 3, 3, 3, 3, 3,
  3, 3, 3, 3, 4, 3, 3,
  3, 3, 2, 3, 3, 5, 3,
  3, 3, 3, 3, 3, 5, 3,
  3, 3, 3, 3, 4, 5, 3,
  3, 1, 2, 3, 3, 3, 6,
  3, 1, 3, 3, 3, 3, 6,
  3, 1, 3, 3, 4, 3, 6,
  3, 3, 2, 3, 3, 3, 6,
  3, 3, 3, 3, 3, 3, 6,
  3, 3, 3, 3, 4, 3, 6,
  3, 3, 2, 3, 3, 5, 6,
  3, 3, 3, 3, 3, 5, 6,
  3, 3, 3, 3, 4, 5, 6,
];

#[rustfmt::skip]
static VON_NEUMANN_CHILD_33: [u8; 189] = [
  18,  6,  2,  0,  1,  3,  9,
  19,  7,  0,  1,  2,  4, 10,
  20,  8,  1,  2,  0,  5, 11,
  21,  0,  5,  3,  4,  6, 12,
  22,  1,  3,  4,  5,  7, 13,
  23,  2,  4,  5,  3,  8, 14,
  24,  3,  8,  6,  7,  0, 15,
  25,  4,  6,  7,  8,  1, 16,
  26,  5,  7,  8,  6,  2, 17,
   0, 15, 11,  9, 10, 12, 18,
   1, 16,  9, 10, 11, 13, 19,
   2, 17, 10, 11,  9, 14, 20,
   3,  9, 14, 12, 13, 15, 21,
   4, 10, 12, 13, 14, 16, 22,
   5, 11, 13, 14, 12, 17, 23,
   6, 12, 17, 15, 16,  9, 24,
   7, 13, 15, 16, 17, 10, 25,
   8, 14, 16, 17, 15, 11, 26,
   9, 24, 20, 18, 19, 21,  0,
  10, 25, 18, 19, 20, 22,  1,
  11, 26, 19, 20, 18, 23,  2,
  12, 18, 23, 21, 22, 24,  3,
  13, 19, 21, 22, 23, 25,  4,
  14, 20, 22, 23, 21, 26,  5,
  15, 21, 26, 24, 25, 18,  6,
  16, 22, 24, 25, 26, 19,  7,
  17, 23, 25, 26, 24, 20,  8,
];

// Moore, dimension 1, branch factor 2: 2 children x 3 cursors

#[rustfmt::skip]
static MOORE_PARENT_12: [u8; 6] = [
  0, 1, 1,
  1, 1, 2,
];

#[rustfmt::skip]
static MOORE_CHILD_12: [u8; 6] = [
  1, 0, 1,
  0, 1, 0,
];

// Moore, dimension 1, branch factor 3: 3 children x 3 cursors

#[rustfmt::skip]
static MOORE_PARENT_13: [u8; 9] = [
  0, 1, 1,
  1, 1, 1,
  1, 1, 2,
];

#[rustfmt::skip]
static MOORE_CHILD_13: [u8; 9] = [
  2, 0, 1,
  0, 1, 2,
  1, 2, 0,
];

// Moore, dimension 2, branch factor 2: 4 children x 9 cursors

#[rustfmt::skip]
static MOORE_PARENT_22: [u8; 36] = [
  0, 1, 1, 3, 4, 4, 3, 4, 4,
  1, 1, 2, 4, 4, 5, 4, 4, 5,
  3, 4, 4, 3, 4, 4, 6, 7, 7,
  4, 4, 5, 4, 4, 5, 7, 7, 8,
];

#[rustfmt::skip]
static MOORE_CHILD_22: [u8; 36] = [
  3, 2, 3, 1, 0, 1, 3, 2, 3,
  2, 3, 2, 0, 1, 0, 2, 3, 2,
  1, 0, 1, 3, 2, 3, 1, 0, 1,
  0, 1, 0, 2, 3, 2, 0, 1, 0,
];

// Moore, dimension 2, branch factor 3: 9 children x 9 cursors

#[rustfmt::skip]
static MOORE_PARENT_23: [u8; 81] = [
  0, 1, 1, 3, 4, 4, 3, 4, 4,
  1, 1, 1, 4, 4, 4, 4, 4, 4,
  1, 1, 2, 4, 4, 5, 4, 4, 5,
  3, 4, 4, 3, 4, 4, 3, 4, 4,
  4, 4, 4, 4, 4, 4, 4, 4, 4,
  4, 4, 5, 4, 4, 5, 4, 4, 5,
  3, 4, 4, 3, 4, 4, 6, 7, 7,
  4, 4, 4, 4, 4, 4, 7, 7, 7,
  4, 4, 5, 4, 4, 5, 7, 7, 8,
];

#[rustfmt::skip]
static MOORE_CHILD_23: [u8; 81] = [
  8, 6, 7, 2, 0, 1, 5, 3, 4,
  6, 7, 8, 0, 1, 2, 3, 4, 5,
  7, 8, 6, 1, 2, 0, 4, 5, 3,
  2, 0, 1, 5, 3, 4, 8, 6, 7,
  0, 1, 2, 3, 4, 5, 6, 7, 8,
  1, 2, 0, 4, 5, 3, 7, 8, 6,
  5, 3, 4, 8, 6, 7, 2, 0, 1,
  3, 4, 5, 6, 7, 8, 0, 1, 2,
  4, 5, 3, 7, 8, 6, 1, 2, 0,
];

// Moore, dimension 3, branch factor 2: 8 children x 27 cursors

#[rustfmt::skip]
static MOORE_PARENT_32: [u8; 216] = [
   0,  1,  1,  3,  4,  4,  3,  4,  4,  9, 10, 10, 12, 13, 13, 12, 13, 13,  9, 10, 10, 12, 13, 13, 12, 13, 13,
   1,  1,  2,  4,  4,  5,  4,  4,  5, 10, 10, 11, 13, 13, 14, 13, 13, 14, 10, 10, 11, 13, 13, 14, 13, 13, 14,
   3,  4,  4,  3,  4,  4,  6,  7,  7, 12, 13, 13, 12, 13, 13, 15, 16, 16, 12, 13, 13, 12, 13, 13, 15, 16, 16,
   4,  4,  5,  4,  4,  5,  7,  7,  8, 13, 13, 14, 13, 13, 14, 16, 16, 17, 13, 13, 14, 13, 13, 14, 16, 16, 17,
   9, 10, 10, 12, 13, 13, 12, 13, 13,  9, 10, 10, 12, 13, 13, 12, 13, 13, 18, 19, 19, 21, 22, 22, 21, 22, 22,
  10, 10, 11, 13, 13, 14, 13, 13, 14, 10, 10, 11, 13, 13, 14, 13, 13, 14, 19, 19, 20, 22, 22, 23, 22, 22, 23,
  12, 13, 13, 12, 13, 13, 15, 16, 16, 12, 13, 13, 12, 13, 13, 15, 16, 16, 21, 22, 22, 21, 22, 22, 24, 25, 25,
  13, 13, 14, 13, 13, 14, 16, 16, 17, 13, 13, 14, 13, 13, 14, 16, 16, 17, 22, 22, 23, 22, 22, 23, 25, 25, 26,
];

#[rustfmt::skip]
static MOORE_CHILD_32: [u8; 216] = [
  7, 6, 7, 5, 4, 5, 7, 6, 7, 3, 2, 3, 1, 0, 1, 3, 2, 3, 7, 6, 7, 5, 4, 5, 7, 6, 7,
  6, 7, 6, 4, 5, 4, 6, 7, 6, 2, 3, 2, 0, 1, 0, 2, 3, 2, 6, 7, 6, 4, 5, 4, 6, 7, 6,
  5, 4, 5, 7, 6, 7, 5, 4, 5, 1, 0, 1, 3, 2, 3, 1, 0, 1, 5, 4, 5, 7, 6, 7, 5, 4, 5,
  4, 5, 4, 6, 7, 6, 4, 5, 4, 0, 1, 0, 2, 3, 2, 0, 1, 0, 4, 5, 4, 6, 7, 6, 4, 5, 4,
  3, 2, 3, 1, 0, 1, 3, 2, 3, 7, 6, 7, 5, 4, 5, 7, 6, 7, 3, 2, 3, 1, 0, 1, 3, 2, 3,
  2, 3, 2, 0, 1, 0, 2, 3, 2, 6, 7, 6, 4, 5, 4, 6, 7, 6, 2, 3, 2, 0, 1, 0, 2, 3, 2,
  1, 0, 1, 3, 2, 3, 1, 0, 1, 5, 4, 5, 7, 6, 7, 5, 4, 5, 1, 0, 1, 3, 2, 3, 1, 0, 1,
  0, 1, 0, 2, 3, 2, 0, 1, 0, 4, 5, 4, 6, 7, 6, 4, 5, 4, 0, 1, 0, 2, 3, 2, 0, 1, 0,
];

// Moore, dimension 3, branch factor 3: 27 children x 27 cursors

#[rustfmt::skip]
static MOORE_PARENT_33: [u8; 729] = [
   0,  1,  1,  3,  4,  4,  3,  4,  4,  9, 10, 10, 12, 13, 13, 12, 13, 13,  9, 10, 10, 12, 13, 13, 12, 13, 13,
   1,  1,  1,  4,  4,  4,  4,  4,  4, 10, 10, 10, 13, 13, 13, 13, 13, 13, 10, 10, 10, 13, 13, 13, 13, 13, 13,
   1,  1,  2,  4,  4,  5,  4,  4,  5, 10, 10, 11, 13, 13, 14, 13, 13, 14, 10, 10, 11, 13, 13, 14, 13, 13, 14,
   3,  4,  4,  3,  4,  4,  3,  4,  4, 12, 13, 13, 12, 13, 13, 12, 13, 13, 12, 13, 13, 12, 13, 13, 12, 13, 13,
   4,  4,  4,  4,  4,  4,  4,  4,  4, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
   4,  4,  5,  4,  4,  5,  4,  4,  5, 13, 13, 14, 13, 13, 14, 13, 13, 14, 13, 13, 14, 13, 13, 14, 13, 13, 14,
   3,  4,  4,  3,  4,  4,  6,  7,  7, 12, 13, 13, 12, 13, 13, 15, 16, 16, 12, 13, 13, 12, 13, 13, 15, 16, 16,
   4,  4,  4,  4,  4,  4,  7,  7,  7, 13, 13, 13, 13, 13, 13, 16, 16, 16, 13, 13, 13, 13, 13, 13, 16, 16, 16,
   4,  4,  5,  4,  4,  5,  7,  7,  8, 13, 13, 14, 13, 13, 14, 16, 16, 17, 13, 13, 14, 13, 13, 14, 16, 16, 17,
   9, 10, 10, 12, 13, 13, 12, 13, 13,  9, 10, 10, 12, 13, 13, 12, 13, 13,  9, 10, 10, 12, 13, 13, 12, 13, 13,
  10, 10, 10, 13, 13, 13, 13, 13, 13, 10, 10, 10, 13, 13, 13, 13, 13, 13, 10, 10, 10, 13, 13, 13, 13, 13, 13,
  10, 10, 11, 13, 13, 14, 13, 13, 14, 10, 10, 11, 13, 13, 14, 13, 13, 14, 10, 10, 11, 13, 13, 14, 13, 13, 14,
  12, 13, 13, 12, 13, 13, 12, 13, 13, 12, 13, 13, 12, 13, 13, 12, 13, 13, 12, 13, 13, 12, 13, 13, 12, 13, 13,
  13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
  13, 13, 14, 13, 13, 14, 13, 13, 14, 13, 13, 14, 13, 13, 14, 13, 13, 14, 13, 13, 14, 13, 13, 14, 13, 13, 14,
  12, 13, 13, 12, 13, 13, 15, 16, 16, 12, 13, 13, 12, 13, 13, 15, 16, 16, 12, 13, 13, 12, 13, 13, 15, 16, 16,
  13, 13, 13, 13, 13, 13, 16, 16, 16, 13, 13, 13, 13, 13, 13, 16, 16, 16, 13, 13, 13, 13, 13, 13, 16, 16, 16,
  13, 13, 14, 13, 13, 14, 16, 16, 17, 13, 13, 14, 13, 13, 14, 16, 16, 17, 13, 13, 14, 13, 13, 14, 16, 16, 17,
   9, 10, 10, 12, 13, 13, 12, 13, 13,  9, 10, 10, 12, 13, 13, 12, 13, 13, 18, 19, 19, 21, 22, 22, 21, 22, 22,
  10, 10, 10, 13, 13, 13, 13, 13, 13, 10, 10, 10, 13, 13, 13, 13, 13, 13, 19, 19, 19, 22, 22, 22, 22, 22, 22,
  10, 10, 11, 13, 13, 14, 13, 13, 14, 10, 10, 11, 13, 13, 14, 13, 13, 14, 19, 19, 20, 22, 22, 23, 22, 22, 23,
  12, 13, 13, 12, 13, 13, 12, 13, 13, 12, 13, 13, 12, 13, 13, 12, 13, 13, 21, 22, 22, 21, 22, 22, 21, 22, 22,
  13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 22, 22, 22, 22, 22, 22, 22, 22, 22,
  13, 13, 14, 13, 13, 14, 13, 13, 14, 13, 13, 14, 13, 13, 14, 13, 13, 14, 22, 22, 23, 22, 22, 23, 22, 22, 23,
  12, 13, 13, 12, 13, 13, 15, 16, 16, 12, 13, 13, 12, 13, 13, 15, 16, 16, 21, 22, 22, 21, 22, 22, 24, 25, 25,
  13, 13, 13, 13, 13, 13, 16, 16, 16, 13, 13, 13, 13, 13, 13, 16, 16, 16, 22, 22, 22, 22, 22, 22, 25, 25, 25,
  13, 13, 14, 13, 13, 14, 16, 16, 17, 13, 13, 14, 13, 13, 14, 16, 16, 17, 22, 22, 23, 22, 22, 23, 25, 25, 26,
];

#[rustfmt::skip]
static MOORE_CHILD_33: [u8; 729] = [
  26, 24, 25, 20, 18, 19, 23, 21, 22,  8,  6,  7,  2,  0,  1,  5,  3,  4, 17, 15, 16, 11,  9, 10, 14, 12, 13,
  24, 25, 26, 18, 19, 20, 21, 22, 23,  6,  7,  8,  0,  1,  2,  3,  4,  5, 15, 16, 17,  9, 10, 11, 12, 13, 14,
  25, 26, 24, 19, 20, 18, 22, 23, 21,  7,  8,  6,  1,  2,  0,  4,  5,  3, 16, 17, 15, 10, 11,  9, 13, 14, 12,
  20, 18, 19, 23, 21, 22, 26, 24, 25,  2,  0,  1,  5,  3,  4,  8,  6,  7, 11,  9, 10, 14, 12, 13, 17, 15, 16,
  18, 19, 20, 21, 22, 23, 24, 25, 26,  0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15, 16, 17,
  19, 20, 18, 22, 23, 21, 25, 26, 24,  1,  2,  0,  4,  5,  3,  7,  8,  6, 10, 11,  9, 13, 14, 12, 16, 17, 15,
  23, 21, 22, 26, 24, 25, 20, 18, 19,  5,  3,  4,  8,  6,  7,  2,  0,  1, 14, 12, 13, 17, 15, 16, 11,  9, 10,
  21, 22, 23, 24, 25, 26, 18, 19, 20,  3,  4,  5,  6,  7,  8,  0,  1,  2, 12, 13, 14, 15, 16, 17,  9, 10, 11,
  22, 23, 21, 25, 26, 24, 19, 20, 18,  4,  5,  3,  7,  8,  6,  1,  2,  0, 13, 14, 12, 16, 17, 15, 10, 11,  9,
   8,  6,  7,  2,  0,  1,  5,  3,  4, 17, 15, 16, 11,  9, 10, 14, 12, 13, 26, 24, 25, 20, 18, 19, 23, 21, 22,
   6,  7,  8,  0,  1,  2,  3,  4,  5, 15, 16, 17,  9, 10, 11, 12, 13, 14, 24, 25, 26, 18, 19, 20, 21, 22, 23,
   7,  8,  6,  1,  2,  0,  4,  5,  3, 16, 17, 15, 10, 11,  9, 13, 14, 12, 25, 26, 24, 19, 20, 18, 22, 23, 21,
   2,  0,  1,  5,  3,  4,  8,  6,  7, 11,  9, 10, 14, 12, 13, 17, 15, 16, 20, 18, 19, 23, 21, 22, 26, 24, 25,
   0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
   1,  2,  0,  4,  5,  3,  7,  8,  6, 10, 11,  9, 13, 14, 12, 16, 17, 15, 19, 20, 18, 22, 23, 21, 25, 26, 24,
   5,  3,  4,  8,  6,  7,  2,  0,  1, 14, 12, 13, 17, 15, 16, 11,  9, 10, 23, 21, 22, 26, 24, 25, 20, 18, 19,
   3,  4,  5,  6,  7,  8,  0,  1,  2, 12, 13, 14, 15, 16, 17,  9, 10, 11, 21, 22, 23, 24, 25, 26, 18, 19, 20,
   4,  5,  3,  7,  8,  6,  1,  2,  0, 13, 14, 12, 16, 17, 15, 10, 11,  9, 22, 23, 21, 25, 26, 24, 19, 20, 18,
  17, 15, 16, 11,  9, 10, 14, 12, 13, 26, 24, 25, 20, 18, 19, 23, 21, 22,  8,  6,  7,  2,  0,  1,  5,  3,  4,
  15, 16, 17,  9, 10, 11, 12, 13, 14, 24, 25, 26, 18, 19, 20, 21, 22, 23,  6,  7,  8,  0,  1,  2,  3,  4,  5,
  16, 17, 15, 10, 11,  9, 13, 14, 12, 25, 26, 24, 19, 20, 18, 22, 23, 21,  7,  8,  6,  1,  2,  0,  4,  5,  3,
  11,  9, 10, 14, 12, 13, 17, 15, 16, 20, 18, 19, 23, 21, 22, 26, 24, 25,  2,  0,  1,  5,  3,  4,  8,  6,  7,
   9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,  0,  1,  2,  3,  4,  5,  6,  7,  8,
  10, 11,  9, 13, 14, 12, 16, 17, 15, 19, 20, 18, 22, 23, 21, 25, 26, 24,  1,  2,  0,  4,  5,  3,  7,  8,  6,
  14, 12, 13, 17, 15, 16, 11,  9, 10, 23, 21, 22, 26, 24, 25, 20, 18, 19,  5,  3,  4,  8,  6,  7,  2,  0,  1,
  12, 13, 14, 15, 16, 17,  9, 10, 11, 21, 22, 23, 24, 25, 26, 18, 19, 20,  3,  4,  5,  6,  7,  8,  0,  1,  2,
  13, 14, 12, 16, 17, 15, 10, 11,  9, 22, 23, 21, 25, 26, 24, 19, 20, 18,  4,  5,  3,  7,  8,  6,  1,  2,  0,
];

#[cfg(test)]
#[path = "topology_test.rs"]
mod topology_test;
