#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::dim::NaiveDim;
use crate::frame::KeyFrame;
use crate::key_event::KeyReceiver;
use crate::profile::{ProfileId, ProfileSlot};

/// Configuration for the lighting engine
#[derive(Debug, Clone, Copy)]
pub struct LightingConfig {
    /// Profile active at start-up
    pub profile: ProfileId,
    /// Naive dimming level (255 = undimmed)
    pub dim: u8,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            profile: ProfileId::ReactiveFade,
            dim: crate::dim::UNDIMMED,
        }
    }
}

/// Lighting engine - owns the active profile and the key frame
///
/// Key presses and ticks are both applied from [`Self::render`], so a
/// profile never sees them interleaved within a call. A frame carries either
/// key presses or one tick, never both.
pub struct Lighting<'a, const KEY_CHANNEL_SIZE: usize> {
    // External dependencies
    keys: KeyReceiver<'a, KEY_CHANNEL_SIZE>,

    // Internal state
    profile: ProfileSlot,
    frame: KeyFrame,
}

impl<'a, const KEY_CHANNEL_SIZE: usize> Lighting<'a, KEY_CHANNEL_SIZE> {
    /// Create a new lighting engine and initialize the configured profile
    pub fn new(keys: KeyReceiver<'a, KEY_CHANNEL_SIZE>, config: &LightingConfig) -> Self {
        let mut frame = KeyFrame::with_dim(NaiveDim::new(config.dim));
        let mut profile = config.profile.to_slot();
        profile.init(&mut frame);
        Self {
            keys,
            profile,
            frame,
        }
    }

    /// Process one frame
    ///
    /// Applies pending key presses, or advances the profile by one tick when
    /// there were none. A frame that took key presses is returned as the
    /// presses left it, so their immediate feedback reaches the output
    /// before the next tick decays it. Call this once per frame.
    pub fn render(&mut self) -> &[Rgb] {
        if !self.process_keys() {
            self.profile.tick(&mut self.frame);
        }
        self.frame.leds()
    }

    /// Drain pending key presses into the active profile (non-blocking)
    ///
    /// Returns `true` if at least one press reached the profile.
    fn process_keys(&mut self) -> bool {
        if !self.profile.is_reactive() {
            let _dropped = self.keys.clear();
            #[cfg(feature = "esp32-log")]
            if _dropped > 0 {
                println!(
                    "[Lighting.process_keys] dropped {} key presses for {}",
                    _dropped,
                    self.profile.id().as_str()
                );
            }
            return false;
        }

        let mut applied = false;
        while let Ok(key) = self.keys.try_receive() {
            self.profile.keypress(&mut self.frame, key.row(), key.col());
            applied = true;
        }
        applied
    }

    /// Activate a profile, starting from its initial state
    ///
    /// Key presses queued for the previous profile are discarded.
    pub fn switch_profile(&mut self, id: ProfileId) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[Lighting.switch_profile] {} -> {}",
            self.profile.id().as_str(),
            id.as_str()
        );
        self.keys.clear();
        self.profile = id.to_slot();
        self.profile.init(&mut self.frame);
    }

    /// Id of the active profile
    pub fn profile_id(&self) -> ProfileId {
        self.profile.id()
    }

    /// Active profile state
    pub fn profile(&self) -> &ProfileSlot {
        &self.profile
    }

    /// Change the naive dimming level
    ///
    /// Takes effect from the next write of each key.
    pub fn set_dim(&mut self, level: u8) {
        self.frame.set_dim(NaiveDim::new(level));
    }

    /// Current frame
    pub fn frame(&self) -> &KeyFrame {
        &self.frame
    }
}
