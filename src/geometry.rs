//! Key matrix geometry
//!
//! The LED grid mirrors the 5x14 key matrix, one LED per matrix position,
//! stored row-major.

/// Number of matrix rows
pub const NUM_ROWS: usize = 5;

/// Number of matrix columns
pub const NUM_COLUMNS: usize = 14;

/// Number of LEDs in the grid
pub const NUM_KEYS: usize = NUM_ROWS * NUM_COLUMNS;

/// Matrix positions of the modifier keys.
///
/// Outer columns of every row plus the non-space keys of the bottom row.
pub const MOD_KEYS: [(usize, usize); 15] = [
    (0, 0),
    (0, 13),
    (1, 0),
    (1, 13),
    (2, 0),
    (2, 13),
    (3, 0),
    (3, 13),
    (4, 0),
    (4, 1),
    (4, 2),
    (4, 10),
    (4, 11),
    (4, 12),
    (4, 13),
];

/// Linear LED index of a matrix position
///
/// Callers must pass an in-range position, see [`checked_index`] otherwise.
#[inline]
pub const fn index(row: usize, col: usize) -> usize {
    row * NUM_COLUMNS + col
}

/// Linear LED index of a possibly out-of-range position
///
/// Returns `None` for negative coordinates and for coordinates past the grid.
#[allow(clippy::cast_sign_loss)]
pub const fn checked_index(row: i16, col: i16) -> Option<usize> {
    if row < 0 || col < 0 {
        return None;
    }
    let (row, col) = (row as usize, col as usize);
    if row >= NUM_ROWS || col >= NUM_COLUMNS {
        return None;
    }
    Some(index(row, col))
}

/// Matrix position of a linear LED index
pub const fn position_of(index: usize) -> (usize, usize) {
    (index / NUM_COLUMNS, index % NUM_COLUMNS)
}
