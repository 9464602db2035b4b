//! Oscillating profiles
//!
//! Breathing, spectrum and wave bounce a single channel of a HSV color between
//! two limits with a constant stride.

use super::Profile;
use crate::{color::Hsv, frame::KeyFrame, geometry::NUM_COLUMNS};

/// Value bouncing between two limits
///
/// Each step the direction flips to downwards once the value reaches `high`,
/// and to upwards once it reaches `low`, then the value moves by `stride`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Oscillator {
    value: u8,
    direction: i8,
    low: u8,
    high: u8,
    stride: i8,
}

impl Oscillator {
    pub const fn new(value: u8, low: u8, high: u8, stride: i8) -> Self {
        Self {
            value,
            direction: stride,
            low,
            high,
            stride,
        }
    }

    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Move to the next value
    pub const fn advance(&mut self) {
        if self.value >= self.high {
            self.direction = -self.stride;
        } else if self.value <= self.low {
            self.direction = self.stride;
        }
        self.value = self.value.wrapping_add_signed(self.direction);
    }
}

const BREATHING_HUE: u8 = 85;
const BREATHING: Oscillator = Oscillator::new(180, 2, 180, 2);

const SPECTRUM_VALUE: u8 = 125;
const SPECTRUM: Oscillator = Oscillator::new(2, 2, 177, 3);

const WAVE_HUE: u8 = 190;
const WAVE_LOW: u8 = 10;
const WAVE_HIGH: u8 = 140;
const WAVE_STRIDE: i8 = 3;
const WAVE_START: [u8; NUM_COLUMNS] =
    [0, 0, 0, 10, 15, 20, 25, 40, 55, 75, 100, 115, 135, 140];

/// Whole keyboard breathing in green
#[derive(Debug, Clone)]
pub struct BreathingProfile {
    value: Oscillator,
}

impl Default for BreathingProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl BreathingProfile {
    pub const fn new() -> Self {
        Self { value: BREATHING }
    }

    /// Brightness painted on the next tick
    pub const fn value(&self) -> u8 {
        self.value.value()
    }
}

impl Profile for BreathingProfile {
    fn init(&mut self, frame: &mut KeyFrame) {
        *self = Self::new();
        frame.blank();
    }

    fn tick(&mut self, frame: &mut KeyFrame) {
        frame.set_all_hsv(Hsv {
            hue: BREATHING_HUE,
            sat: 255,
            val: self.value.value(),
        });
        self.value.advance();
    }
}

/// Whole keyboard bouncing through the hue circle
#[derive(Debug, Clone)]
pub struct SpectrumProfile {
    hue: Oscillator,
}

impl Default for SpectrumProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectrumProfile {
    pub const fn new() -> Self {
        Self { hue: SPECTRUM }
    }

    /// Hue painted on the next tick
    pub const fn hue(&self) -> u8 {
        self.hue.value()
    }
}

impl Profile for SpectrumProfile {
    fn init(&mut self, frame: &mut KeyFrame) {
        *self = Self::new();
        frame.blank();
    }

    fn tick(&mut self, frame: &mut KeyFrame) {
        frame.set_all_hsv(Hsv {
            hue: self.hue.value(),
            sat: 255,
            val: SPECTRUM_VALUE,
        });
        self.hue.advance();
    }
}

/// Brightness wave travelling across the columns
#[derive(Debug, Clone)]
pub struct WaveProfile {
    columns: [Oscillator; NUM_COLUMNS],
}

impl Default for WaveProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveProfile {
    pub const fn new() -> Self {
        let mut columns = [Self::column(0); NUM_COLUMNS];
        let mut col = 0;
        while col < NUM_COLUMNS {
            columns[col] = Self::column(WAVE_START[col]);
            col += 1;
        }
        Self { columns }
    }

    const fn column(value: u8) -> Oscillator {
        Oscillator::new(value, WAVE_LOW, WAVE_HIGH, WAVE_STRIDE)
    }

    /// Brightness of a column painted on the next tick
    pub fn value(&self, col: usize) -> u8 {
        self.columns.get(col).map_or(0, Oscillator::value)
    }
}

impl Profile for WaveProfile {
    fn init(&mut self, frame: &mut KeyFrame) {
        *self = Self::new();
        frame.blank();
    }

    fn tick(&mut self, frame: &mut KeyFrame) {
        for (col, value) in self.columns.iter_mut().enumerate() {
            frame.set_column_hsv(
                col,
                Hsv {
                    hue: WAVE_HUE,
                    sat: 255,
                    val: value.value(),
                },
            );
            value.advance();
        }
    }
}
