//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{Lighting, OutputDriver};

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Maximum drift before resetting frame timing (2 frames worth).
///
/// If we fall behind by more than this, we skip the backlog instead of catching up.
pub const MAX_DRIFT: Duration = Duration::from_millis(2 * (1000 / DEFAULT_FPS as u64));

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// Every tick renders exactly one frame, so the animation speed of a profile
/// is set by the frame duration. Frames that take key presses do not advance
/// the animation.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(lighting, driver);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, const KEY_CHANNEL_SIZE: usize> {
    output: O,
    lighting: Lighting<'a, KEY_CHANNEL_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const KEY_CHANNEL_SIZE: usize> FrameScheduler<'a, O, KEY_CHANNEL_SIZE> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (60 FPS) for frame timing.
    pub fn new(lighting: Lighting<'a, KEY_CHANNEL_SIZE>, driver: O) -> Self {
        Self::with_frame_duration(lighting, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        lighting: Lighting<'a, KEY_CHANNEL_SIZE>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            lighting,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Renders the current frame
    /// 3. Writes to the output driver
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after long stalls instead of bursting
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            #[cfg(feature = "esp32-log")]
            println!(
                "[FrameScheduler.tick] {}ms behind, resetting deadline",
                now.as_millis() - self.next_frame.as_millis()
            );
            self.next_frame = now;
        }

        let frame = self.lighting.render();
        self.output.write(frame);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the lighting engine.
    pub fn lighting(&self) -> &Lighting<'a, KEY_CHANNEL_SIZE> {
        &self.lighting
    }

    /// Get a mutable reference to the lighting engine.
    pub fn lighting_mut(&mut self) -> &mut Lighting<'a, KEY_CHANNEL_SIZE> {
        &mut self.lighting
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Frame duration used for pacing
    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }
}
