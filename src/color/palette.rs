//! Basic colors shared by the stripe profiles

use crate::color::{Rgb, rgb_from_u32};

/// Palette walked by the rainbow stripe profiles, red to magenta
pub const PALETTE: [Rgb; 8] = [
    rgb_from_u32(0x00cc_0000),
    rgb_from_u32(0x00cc_cc00),
    rgb_from_u32(0x005f_cc00),
    rgb_from_u32(0x0000_c7cc),
    rgb_from_u32(0x0000_6ecc),
    rgb_from_u32(0x0000_33ff),
    rgb_from_u32(0x0069_00cc),
    rgb_from_u32(0x00cc_00bf),
];

/// Palette entry for any position, wrapping around the palette length
#[inline]
pub const fn palette_color(position: usize) -> Rgb {
    PALETTE[position % PALETTE.len()]
}
