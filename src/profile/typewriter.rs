//! Typewriter profile
//!
//! A pulsing red cursor walks along the top row, one column per key press.
//! The row of the last pressed key flashes green for a single frame.
//! Once the cursor runs off the end of the row, a two-key wide marker sweeps
//! back in from the right before typing resumes at the first column.

use super::Profile;
use crate::{
    color::Rgb,
    frame::KeyFrame,
    math8::triangle8,
};

/// Row the cursor lives on
const CURSOR_ROW: i16 = 0;
/// Cursor position that ends a line
const LINE_END: i8 = 13;
/// Cursor position a finished line restarts from; negative means sweeping in
const SWEEP_START: i8 = -14;
/// Columns the sweep-in marker moves per tick
const SWEEP_STEP: i8 = 2;

/// Last value of the glyph phase counter before it wraps
const PHASE_MAX: u16 = 140;
/// Phase at which the glyph starts dimming
const PHASE_PEAK: u16 = 70;
/// Brightness gained or lost per phase step, full in 5 steps
const RAMP_SLOPE: u16 = 51;

const SWEEP_COLOR: Rgb = Rgb { r: 255, g: 0, b: 0 };
const HIGHLIGHT_COLOR: Rgb = Rgb { r: 0, g: 255, b: 0 };

/// Cursor state of the typewriter
#[derive(Debug, Clone, Default)]
pub struct TypewriterProfile {
    /// Cursor column on the top row, negative while sweeping in
    position: i8,
    /// Glyph animation phase, 0..=140
    phase: u16,
    /// Row to flash on the next tick
    highlight: Option<u8>,
}

impl TypewriterProfile {
    pub const fn new() -> Self {
        Self {
            position: 0,
            phase: 0,
            highlight: None,
        }
    }

    /// Cursor position, negative while sweeping in
    pub const fn position(&self) -> i8 {
        self.position
    }

    /// Glyph animation phase
    pub const fn phase(&self) -> u16 {
        self.phase
    }

    /// Row armed to flash on the next tick
    pub const fn highlight(&self) -> Option<u8> {
        self.highlight
    }

    /// Check if the sweep-in marker is running
    pub const fn is_sweeping(&self) -> bool {
        self.position < 0
    }

    /// Brightness of the cursor glyph for a phase
    pub fn glyph_brightness(phase: u16) -> u8 {
        triangle8(phase, PHASE_PEAK, RAMP_SLOPE)
    }

    fn draw_sweep(&mut self, frame: &mut KeyFrame) {
        let color = frame.naive_dim(SWEEP_COLOR);
        let col = -i16::from(self.position);
        // The leading column is past the grid on the first step
        frame.mark(CURSOR_ROW, col, color);
        frame.mark(CURSOR_ROW, col + 1, color);
        self.position += SWEEP_STEP;
    }

    fn draw_highlight(frame: &mut KeyFrame, row: u8) {
        let color = frame.naive_dim(HIGHLIGHT_COLOR);
        // Rows past the grid are dropped by the frame
        frame.set_row(usize::from(row), color);
    }

    fn advance_phase(&mut self) {
        self.phase += 1;
        if self.phase > PHASE_MAX {
            self.phase = 0;
        }
    }
}

impl Profile for TypewriterProfile {
    const REACTIVE: bool = true;

    fn init(&mut self, frame: &mut KeyFrame) {
        *self = Self::new();
        frame.blank();
    }

    fn tick(&mut self, frame: &mut KeyFrame) {
        frame.blank();

        if self.is_sweeping() {
            self.draw_sweep(frame);
            return;
        }

        if let Some(row) = self.highlight.take() {
            Self::draw_highlight(frame, row);
        }

        self.advance_phase();
        let brightness = Self::glyph_brightness(self.phase);
        let glyph = frame.naive_dim(Rgb {
            r: brightness,
            g: 0,
            b: 0,
        });
        frame.mark(CURSOR_ROW, i16::from(self.position), glyph);
    }

    fn keypress(&mut self, frame: &mut KeyFrame, row: u8, _col: u8) {
        if self.position >= 0 {
            self.position += 1;
            if self.position == LINE_END {
                self.position = SWEEP_START;
            }
        }
        self.phase = 0;
        self.highlight = Some(row);
        frame.blank();
    }
}
