//! Solid color profiles
//!
//! Fill every key with one color, optionally painting the modifier keys with
//! an accent color on top.

use core::fmt;

use super::Profile;
use crate::{
    color::{Hsv, Rgb, rgb_from_u32},
    frame::KeyFrame,
    geometry::MOD_KEYS,
};

/// White as seen through red and blue switch housings
const WHITE: Hsv = Hsv {
    hue: 63,
    sat: 125,
    val: 255,
};

const MIAMI_TEAL: Rgb = rgb_from_u32(0x0000_979c);
const MIAMI_MAGENTA: Rgb = rgb_from_u32(0x009c_008f);

#[derive(Clone, Copy)]
enum Fill {
    Rgb(Rgb),
    Hsv(Hsv),
}

// `Hsv` has no `Debug` impl
impl fmt::Debug for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(color) => f.debug_tuple("Rgb").field(color).finish(),
            Self::Hsv(color) => f
                .debug_struct("Hsv")
                .field("hue", &color.hue)
                .field("sat", &color.sat)
                .field("val", &color.val)
                .finish(),
        }
    }
}

/// Solid color fill
#[derive(Debug, Clone)]
pub struct SolidColorProfile {
    fill: Fill,
    /// Color painted over the modifier keys
    accent: Option<Rgb>,
}

impl SolidColorProfile {
    /// Create a profile filling every key with a color
    pub const fn new(color: Rgb) -> Self {
        Self {
            fill: Fill::Rgb(color),
            accent: None,
        }
    }

    /// Create a profile filling every key with a HSV color
    pub const fn new_hsv(color: Hsv) -> Self {
        Self {
            fill: Fill::Hsv(color),
            accent: None,
        }
    }

    /// Paint the modifier keys with an accent color
    #[must_use]
    pub const fn with_mod_keys(mut self, color: Rgb) -> Self {
        self.accent = Some(color);
        self
    }

    pub const fn red() -> Self {
        Self::new(rgb_from_u32(0x00ff_0000))
    }

    pub const fn green() -> Self {
        Self::new(rgb_from_u32(0x0000_ff00))
    }

    pub const fn blue() -> Self {
        Self::new(rgb_from_u32(0x0000_00ff))
    }

    pub const fn white() -> Self {
        Self::new_hsv(WHITE)
    }

    pub const fn miami_nights() -> Self {
        Self::new(MIAMI_TEAL).with_mod_keys(MIAMI_MAGENTA)
    }
}

impl Profile for SolidColorProfile {
    fn tick(&mut self, frame: &mut KeyFrame) {
        match self.fill {
            Fill::Rgb(color) => frame.set_all(frame.naive_dim(color)),
            Fill::Hsv(color) => frame.set_all_hsv(color),
        }

        if let Some(accent) = self.accent {
            frame.set_keys(&MOD_KEYS, frame.naive_dim(accent));
        }
    }
}
