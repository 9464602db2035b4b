mod palette;
mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use palette::{PALETTE, palette_color};
pub use utils::{BLACK, hsv2rgb, rgb_from_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;
