/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
/// A factor of 255 returns the value unchanged.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Triangular 0-255-0 ramp turning at `half_period`
///
/// Rises by `slope` per step for steps below `half_period`, falls from 255 by
/// `slope` per step from `half_period` on. Both edges clamp to 0..=255.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn triangle8(step: u16, half_period: u16, slope: u16) -> u8 {
    let level = if step < half_period {
        i32::from(step) * i32::from(slope)
    } else {
        255 - (i32::from(step) - i32::from(half_period)) * i32::from(slope)
    };
    level.clamp(0, 255) as u8
}
