//! Palette stripe profiles
//!
//! Paint rows or columns with consecutive palette colors. The column variant
//! can scroll the palette sideways by one entry per tick.

use super::Profile;
use crate::{
    color::{PALETTE, palette_color},
    frame::KeyFrame,
    geometry::{NUM_COLUMNS, NUM_ROWS},
};

/// Direction the stripes run in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripeAxis {
    /// One color per row
    Rows,
    /// One color per column
    Columns,
}

#[derive(Debug, Clone)]
pub struct PaletteStripesProfile {
    axis: StripeAxis,
    scrolling: bool,
    /// Palette entry of the first stripe
    offset: usize,
}

impl PaletteStripesProfile {
    pub const fn new(axis: StripeAxis) -> Self {
        Self {
            axis,
            scrolling: false,
            offset: 0,
        }
    }

    /// Advance the palette by one entry per tick
    #[must_use]
    pub const fn with_scrolling(mut self) -> Self {
        self.scrolling = true;
        self
    }

    /// Palette entry of the first stripe
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl Profile for PaletteStripesProfile {
    fn init(&mut self, frame: &mut KeyFrame) {
        self.offset = 0;
        frame.blank();
    }

    fn tick(&mut self, frame: &mut KeyFrame) {
        match self.axis {
            StripeAxis::Rows => {
                for row in 0..NUM_ROWS {
                    let color = frame.naive_dim(palette_color(row + self.offset));
                    frame.set_row(row, color);
                }
            }
            StripeAxis::Columns => {
                for col in 0..NUM_COLUMNS {
                    let color = frame.naive_dim(palette_color(col + self.offset));
                    frame.set_column(col, color);
                }
            }
        }

        if self.scrolling {
            self.offset = (self.offset + 1) % PALETTE.len();
        }
    }
}
