//! Reactive fade profile
//!
//! A pressed key flashes red, then fades out through a hue ramp.
//! Every key carries its own intensity, decaying linearly on each tick.

use super::Profile;
use crate::{
    color::{BLACK, Hsv, Rgb},
    frame::KeyFrame,
    geometry::{NUM_COLUMNS, NUM_KEYS, checked_index, index},
};

/// Intensity a key press sets its key to
const PEAK_INTENSITY: u8 = 100;
/// Intensity lost per tick
const DECAY_STEP: u8 = 5;

/// Activation sweep: row `r` starts at `FALL_BASE + FALL_STEP * r`
const FALL_BASE: u8 = 25;
const FALL_STEP: u8 = 15;

/// Flash written at the moment of the press, undimmed
const PRESS_COLOR: Rgb = Rgb { r: 255, g: 0, b: 0 };

const FADE_SATURATION: u8 = 255;
const FADE_VALUE: u8 = 225;

/// Per-key fade-out after a key press
#[derive(Debug, Clone)]
pub struct ReactiveFadeProfile {
    /// Intensity of every key, 0..=100, row-major
    intensity: [u8; NUM_KEYS],
}

impl Default for ReactiveFadeProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactiveFadeProfile {
    pub const fn new() -> Self {
        Self {
            intensity: [0; NUM_KEYS],
        }
    }

    /// Current intensity of a key
    pub fn intensity(&self, row: usize, col: usize) -> u8 {
        if col >= NUM_COLUMNS {
            return 0;
        }
        self.intensity.get(index(row, col)).copied().unwrap_or(0)
    }

    /// Fade color for an intensity
    ///
    /// The hue moves away from red as the intensity drops.
    const fn fade_color(intensity: u8) -> Hsv {
        Hsv {
            hue: PEAK_INTENSITY - intensity,
            sat: FADE_SATURATION,
            val: FADE_VALUE,
        }
    }
}

impl Profile for ReactiveFadeProfile {
    const REACTIVE: bool = true;

    fn init(&mut self, frame: &mut KeyFrame) {
        // Falling rows make the activation visible
        for (row, keys) in self.intensity.chunks_exact_mut(NUM_COLUMNS).enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            keys.fill(FALL_BASE + FALL_STEP * row as u8);
        }
        frame.blank();
    }

    fn tick(&mut self, frame: &mut KeyFrame) {
        for (i, intensity) in self.intensity.iter_mut().enumerate() {
            if *intensity > DECAY_STEP {
                *intensity -= DECAY_STEP;
                frame.set_key_hsv(i, Self::fade_color(*intensity));
            } else if *intensity > 0 {
                *intensity = 0;
                frame.set_key(i, BLACK);
            }
        }
    }

    fn keypress(&mut self, frame: &mut KeyFrame, row: u8, col: u8) {
        let Some(i) = checked_index(i16::from(row), i16::from(col)) else {
            return;
        };
        self.intensity[i] = PEAK_INTENSITY;
        frame.set_key(i, PRESS_COLOR);
    }
}
