//! Rainbow sweep profiles
//!
//! Every lane (column or row) carries its own hue that rotates by a fixed
//! step each tick. Lanes start phase-shifted so the rainbow appears to move
//! across the keyboard.

use super::{Profile, StripeAxis};
use crate::{
    color::Hsv,
    frame::KeyFrame,
    geometry::{NUM_COLUMNS, NUM_ROWS},
};

/// Hue added per tick
const HUE_STEP: u8 = 3;
/// Hues in `SKIP_START..SKIP_END` jump straight to `SKIP_END`
const SKIP_START: u8 = 179;
const SKIP_END: u8 = 240;

const FLOW_HUES: [u8; NUM_COLUMNS] =
    [0, 11, 22, 33, 44, 55, 66, 77, 88, 99, 110, 121, 132, 143];
const FLOW_VALUE: u8 = 255;

const WATERFALL_HUES: [u8; NUM_COLUMNS] =
    [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130];
const WATERFALL_VALUE: u8 = 125;

#[derive(Debug, Clone)]
pub struct RainbowSweepProfile {
    axis: StripeAxis,
    value: u8,
    initial: [u8; NUM_COLUMNS],
    /// Current hue of every lane; rows only use the first `NUM_ROWS` entries
    hues: [u8; NUM_COLUMNS],
}

impl RainbowSweepProfile {
    const fn new(axis: StripeAxis, hues: [u8; NUM_COLUMNS], value: u8) -> Self {
        Self {
            axis,
            value,
            initial: hues,
            hues,
        }
    }

    /// Full-brightness rainbow flowing along the columns
    pub const fn flow() -> Self {
        Self::new(StripeAxis::Columns, FLOW_HUES, FLOW_VALUE)
    }

    /// Half-brightness rainbow falling down the rows
    pub const fn waterfall() -> Self {
        Self::new(StripeAxis::Rows, WATERFALL_HUES, WATERFALL_VALUE)
    }

    /// Current hues of the lanes
    pub fn hues(&self) -> &[u8] {
        &self.hues[..self.lanes()]
    }

    const fn lanes(&self) -> usize {
        match self.axis {
            StripeAxis::Rows => NUM_ROWS,
            StripeAxis::Columns => NUM_COLUMNS,
        }
    }

    const fn next_hue(hue: u8) -> u8 {
        let hue = if hue >= SKIP_START && hue < SKIP_END {
            SKIP_END
        } else {
            hue
        };
        hue.wrapping_add(HUE_STEP)
    }
}

impl Profile for RainbowSweepProfile {
    fn init(&mut self, frame: &mut KeyFrame) {
        self.hues = self.initial;
        frame.blank();
    }

    fn tick(&mut self, frame: &mut KeyFrame) {
        let lanes = self.lanes();
        for (lane, hue) in self.hues.iter_mut().take(lanes).enumerate() {
            let color = Hsv {
                hue: *hue,
                sat: 255,
                val: self.value,
            };
            match self.axis {
                StripeAxis::Rows => frame.set_row_hsv(lane, color),
                StripeAxis::Columns => frame.set_column_hsv(lane, color),
            }
            *hue = Self::next_hue(*hue);
        }
    }
}
