//! Naive dimming
//!
//! Scales every channel of a color by the same factor before it reaches the
//! LED driver. Mixed colors can drift in hue under this kind of dimming, so
//! profiles that need a stable hue go through the HSV write primitives.

use crate::color::Rgb;
use crate::math8::scale8;

/// Level that leaves colors untouched
pub const UNDIMMED: u8 = 255;

/// Uniform per-channel dimming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaiveDim {
    /// Scale factor for each channel (0-255 = 0%-100%)
    level: u8,
}

impl NaiveDim {
    /// Dimming that passes colors through unchanged
    pub const NONE: Self = Self::new(UNDIMMED);

    /// Create a new dimming with the given level
    pub const fn new(level: u8) -> Self {
        Self { level }
    }

    /// Current level
    pub const fn level(self) -> u8 {
        self.level
    }

    /// Check if dimming is active
    pub const fn is_active(self) -> bool {
        self.level != UNDIMMED
    }

    /// Dim a single color
    pub const fn apply(self, color: Rgb) -> Rgb {
        if !self.is_active() {
            return color;
        }
        Rgb {
            r: scale8(color.r, self.level),
            g: scale8(color.g, self.level),
            b: scale8(color.b, self.level),
        }
    }
}

impl Default for NaiveDim {
    fn default() -> Self {
        Self::NONE
    }
}
