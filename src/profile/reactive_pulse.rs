//! Reactive pulse profile
//!
//! Pressing any key of a row lights the whole row blue, then the row fades
//! out in a handful of ticks.

use super::Profile;
use crate::{
    color::{BLACK, Rgb},
    frame::KeyFrame,
    geometry::NUM_ROWS,
};

/// Intensity a key press sets its row to
const PEAK_INTENSITY: u8 = 80;
/// Intensity lost per tick
const DECAY_STEP: u8 = 16;
/// Extra intensity per row at activation, so rows decay out of phase
const ROW_STAGGER: u8 = 5;
/// Blue channel of a lit row is `BLUE_BASE + intensity`
const BLUE_BASE: u8 = 175;

/// Per-row pulse after a key press
#[derive(Debug, Clone)]
pub struct ReactivePulseProfile {
    /// Intensity of every row
    intensity: [u8; NUM_ROWS],
}

impl Default for ReactivePulseProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactivePulseProfile {
    pub const fn new() -> Self {
        Self {
            intensity: [0; NUM_ROWS],
        }
    }

    /// Current intensity of a row
    pub fn intensity(&self, row: usize) -> u8 {
        self.intensity.get(row).copied().unwrap_or(0)
    }
}

impl Profile for ReactivePulseProfile {
    const REACTIVE: bool = true;

    fn init(&mut self, frame: &mut KeyFrame) {
        for (row, intensity) in self.intensity.iter_mut().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            {
                *intensity = PEAK_INTENSITY + ROW_STAGGER * row as u8;
            }
        }
        frame.blank();
    }

    fn tick(&mut self, frame: &mut KeyFrame) {
        for (row, intensity) in self.intensity.iter_mut().enumerate() {
            if *intensity > PEAK_INTENSITY {
                // Staggered activation values stay dark until below the peak
                *intensity -= DECAY_STEP;
            } else if *intensity > DECAY_STEP {
                let color = Rgb {
                    r: 0,
                    g: 0,
                    b: BLUE_BASE.saturating_add(*intensity),
                };
                frame.set_row(row, color);
                *intensity -= DECAY_STEP;
            } else if *intensity > 0 {
                *intensity = 0;
                frame.set_row(row, BLACK);
            }
        }
    }

    fn keypress(&mut self, _frame: &mut KeyFrame, row: u8, _col: u8) {
        if let Some(intensity) = self.intensity.get_mut(usize::from(row)) {
            *intensity = PEAK_INTENSITY;
        }
    }
}
