//! Key frame buffer and its write primitives
//!
//! A [`KeyFrame`] holds one color per key, row-major, together with the naive
//! dimming applied by the HSV write primitives. Profiles borrow it mutably for
//! the duration of a single `init`/`tick`/`keypress` call.

use crate::color::{BLACK, Hsv, Rgb, hsv2rgb};
use crate::dim::NaiveDim;
use crate::geometry::{NUM_COLUMNS, NUM_KEYS, NUM_ROWS, checked_index, index};

/// LED colors of the whole key matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFrame {
    leds: [Rgb; NUM_KEYS],
    dim: NaiveDim,
}

impl Default for KeyFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyFrame {
    /// Create a blank, undimmed frame
    pub const fn new() -> Self {
        Self::with_dim(NaiveDim::NONE)
    }

    /// Create a blank frame with the given dimming
    pub const fn with_dim(dim: NaiveDim) -> Self {
        Self {
            leds: [BLACK; NUM_KEYS],
            dim,
        }
    }

    /// Dimming applied by the HSV primitives and [`Self::naive_dim`]
    pub const fn dim(&self) -> NaiveDim {
        self.dim
    }

    pub fn set_dim(&mut self, dim: NaiveDim) {
        self.dim = dim;
    }

    /// All LED colors, row-major
    pub const fn leds(&self) -> &[Rgb; NUM_KEYS] {
        &self.leds
    }

    /// Color of a single key, `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        if row >= NUM_ROWS || col >= NUM_COLUMNS {
            return None;
        }
        self.leds.get(index(row, col)).copied()
    }

    /// Check if every key is switched off
    pub fn is_blank(&self) -> bool {
        self.leds.iter().all(|led| *led == BLACK)
    }

    /// Dim a color with the frame's dimming
    pub const fn naive_dim(&self, color: Rgb) -> Rgb {
        self.dim.apply(color)
    }

    /// Convert a HSV color and dim it
    pub fn dimmed_hsv(&self, color: Hsv) -> Rgb {
        self.dim.apply(hsv2rgb(color))
    }

    /// Set a key by linear index, as is
    ///
    /// Indexes past the grid are ignored.
    pub fn set_key(&mut self, index: usize, color: Rgb) {
        if let Some(led) = self.leds.get_mut(index) {
            *led = color;
        }
    }

    /// Set a key by linear index from a HSV color, dimmed
    pub fn set_key_hsv(&mut self, index: usize, color: Hsv) {
        let color = self.dimmed_hsv(color);
        self.set_key(index, color);
    }

    /// Set a list of matrix positions to one color, as is
    pub fn set_keys(&mut self, keys: &[(usize, usize)], color: Rgb) {
        for &(row, col) in keys {
            if row < NUM_ROWS && col < NUM_COLUMNS {
                self.set_key(index(row, col), color);
            }
        }
    }

    /// Set every key to one color, as is
    pub fn set_all(&mut self, color: Rgb) {
        self.leds.fill(color);
    }

    /// Set every key from a HSV color, dimmed
    pub fn set_all_hsv(&mut self, color: Hsv) {
        let color = self.dimmed_hsv(color);
        self.set_all(color);
    }

    /// Set every key of a row to one color, as is
    pub fn set_row(&mut self, row: usize, color: Rgb) {
        if row >= NUM_ROWS {
            return;
        }
        let start = index(row, 0);
        self.leds[start..start + NUM_COLUMNS].fill(color);
    }

    /// Set every key of a row from a HSV color, dimmed
    pub fn set_row_hsv(&mut self, row: usize, color: Hsv) {
        let color = self.dimmed_hsv(color);
        self.set_row(row, color);
    }

    /// Set every key of a column to one color, as is
    pub fn set_column(&mut self, col: usize, color: Rgb) {
        if col >= NUM_COLUMNS {
            return;
        }
        for row in 0..NUM_ROWS {
            self.leds[index(row, col)] = color;
        }
    }

    /// Set every key of a column from a HSV color, dimmed
    pub fn set_column_hsv(&mut self, col: usize, color: Hsv) {
        let color = self.dimmed_hsv(color);
        self.set_column(col, color);
    }

    /// Switch every key off
    pub fn blank(&mut self) {
        self.set_all(BLACK);
    }

    /// Set a key that may lie outside the matrix
    ///
    /// Returns `false` and leaves the frame untouched when the position is
    /// out of range.
    pub fn mark(&mut self, row: i16, col: i16, color: Rgb) -> bool {
        let Some(index) = checked_index(row, col) else {
            return false;
        };
        self.leds[index] = color;
        true
    }
}
