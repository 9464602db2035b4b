//! Color bleed test pattern
//!
//! Pure red, green and blue neighbours make light leaking between keys easy
//! to spot. Colors are written undimmed.

use super::Profile;
use crate::{
    color::Rgb,
    frame::KeyFrame,
    geometry::{NUM_COLUMNS, NUM_ROWS, index},
};

const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

/// Last row of the blue part of the first column
const EDGE_COLUMN_BLUE_ROWS: usize = 3;
/// Last column of the blue part of the first row
const EDGE_ROW_BLUE_COLUMNS: usize = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct ColorBleedProfile;

impl ColorBleedProfile {
    /// Pattern color of a key
    pub const fn color_at(row: usize, col: usize) -> Rgb {
        if col == 0 {
            return if row <= EDGE_COLUMN_BLUE_ROWS { BLUE } else { RED };
        }
        if row == 0 {
            return if col <= EDGE_ROW_BLUE_COLUMNS { BLUE } else { RED };
        }
        match index(row, col) % 3 {
            0 => BLUE,
            1 => GREEN,
            _ => RED,
        }
    }
}

impl Profile for ColorBleedProfile {
    fn tick(&mut self, frame: &mut KeyFrame) {
        for row in 0..NUM_ROWS {
            for col in 0..NUM_COLUMNS {
                frame.set_key(index(row, col), Self::color_at(row, col));
            }
        }
    }
}
