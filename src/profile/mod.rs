//! Profile system with compile-time known profile variants
//!
//! All profiles are stored in an enum to avoid heap allocations.
//! Each profile implements the `Profile` trait.

mod color_bleed;
mod oscillating;
mod palette_stripes;
mod rainbow_sweep;
mod reactive_fade;
mod reactive_pulse;
mod solid_color;
mod typewriter;

pub use color_bleed::ColorBleedProfile;
pub use oscillating::{BreathingProfile, Oscillator, SpectrumProfile, WaveProfile};
pub use palette_stripes::{PaletteStripesProfile, StripeAxis};
pub use rainbow_sweep::RainbowSweepProfile;
pub use reactive_fade::ReactiveFadeProfile;
pub use reactive_pulse::ReactivePulseProfile;
pub use solid_color::SolidColorProfile;
pub use typewriter::TypewriterProfile;

use crate::frame::KeyFrame;

const PROFILE_NAME_RED: &str = "red";
const PROFILE_NAME_GREEN: &str = "green";
const PROFILE_NAME_BLUE: &str = "blue";
const PROFILE_NAME_COLOR_BLEED: &str = "color_bleed";
const PROFILE_NAME_WHITE: &str = "white";
const PROFILE_NAME_MIAMI_NIGHTS: &str = "miami_nights";
const PROFILE_NAME_RAINBOW_HORIZONTAL: &str = "rainbow_horizontal";
const PROFILE_NAME_RAINBOW_VERTICAL: &str = "rainbow_vertical";
const PROFILE_NAME_ANIMATED_RAINBOW_VERTICAL: &str = "animated_rainbow_vertical";
const PROFILE_NAME_ANIMATED_RAINBOW_FLOW: &str = "animated_rainbow_flow";
const PROFILE_NAME_ANIMATED_RAINBOW_WATERFALL: &str = "animated_rainbow_waterfall";
const PROFILE_NAME_ANIMATED_BREATHING: &str = "animated_breathing";
const PROFILE_NAME_ANIMATED_SPECTRUM: &str = "animated_spectrum";
const PROFILE_NAME_ANIMATED_WAVE: &str = "animated_wave";
const PROFILE_NAME_REACTIVE_FADE: &str = "reactive_fade";
const PROFILE_NAME_REACTIVE_PULSE: &str = "reactive_pulse";
const PROFILE_NAME_TYPEWRITER: &str = "typewriter";

const PROFILE_ID_RED: u8 = 0;
const PROFILE_ID_GREEN: u8 = 1;
const PROFILE_ID_BLUE: u8 = 2;
const PROFILE_ID_COLOR_BLEED: u8 = 3;
const PROFILE_ID_WHITE: u8 = 4;
const PROFILE_ID_MIAMI_NIGHTS: u8 = 5;
const PROFILE_ID_RAINBOW_HORIZONTAL: u8 = 6;
const PROFILE_ID_RAINBOW_VERTICAL: u8 = 7;
const PROFILE_ID_ANIMATED_RAINBOW_VERTICAL: u8 = 8;
const PROFILE_ID_ANIMATED_RAINBOW_FLOW: u8 = 9;
const PROFILE_ID_ANIMATED_RAINBOW_WATERFALL: u8 = 10;
const PROFILE_ID_ANIMATED_BREATHING: u8 = 11;
const PROFILE_ID_ANIMATED_SPECTRUM: u8 = 12;
const PROFILE_ID_ANIMATED_WAVE: u8 = 13;
const PROFILE_ID_REACTIVE_FADE: u8 = 14;
const PROFILE_ID_REACTIVE_PULSE: u8 = 15;
const PROFILE_ID_TYPEWRITER: u8 = 16;

pub trait Profile {
    /// Set if the profile reacts to key presses
    ///
    /// Key presses are dropped before they reach non-reactive profiles.
    const REACTIVE: bool = false;

    /// Reset profile state and blank the frame
    ///
    /// Called once when the profile becomes active. Calling it again must
    /// produce the same state and frame.
    fn init(&mut self, frame: &mut KeyFrame) {
        frame.blank();
    }

    /// Advance the animation by one frame
    fn tick(&mut self, frame: &mut KeyFrame);

    /// React to a key-down at the given matrix position
    fn keypress(&mut self, _frame: &mut KeyFrame, _row: u8, _col: u8) {}
}

/// Profile slot - enum containing all possible profiles
#[derive(Debug, Clone)]
pub enum ProfileSlot {
    /// Solid red
    Red(SolidColorProfile),
    /// Solid green
    Green(SolidColorProfile),
    /// Solid blue
    Blue(SolidColorProfile),
    /// Color bleed test pattern
    ColorBleed(ColorBleedProfile),
    /// Switch-compensated white
    White(SolidColorProfile),
    /// Teal keys with magenta modifiers
    MiamiNights(SolidColorProfile),
    /// One palette color per row
    RainbowHorizontal(PaletteStripesProfile),
    /// One palette color per column
    RainbowVertical(PaletteStripesProfile),
    /// Palette columns scrolling sideways
    AnimatedRainbowVertical(PaletteStripesProfile),
    /// Hue sweep running along the columns
    AnimatedRainbowFlow(RainbowSweepProfile),
    /// Hue sweep running down the rows
    AnimatedRainbowWaterfall(RainbowSweepProfile),
    /// Green breathing
    AnimatedBreathing(BreathingProfile),
    /// Whole keyboard bouncing through the hue circle
    AnimatedSpectrum(SpectrumProfile),
    /// Brightness wave across the columns
    AnimatedWave(WaveProfile),
    /// Pressed keys light up and fade out
    ReactiveFade(ReactiveFadeProfile),
    /// Pressed rows pulse blue
    ReactivePulse(ReactivePulseProfile),
    /// Typing cursor on the number row
    Typewriter(TypewriterProfile),
}

/// Known profile ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ProfileId {
    Red = PROFILE_ID_RED,
    Green = PROFILE_ID_GREEN,
    Blue = PROFILE_ID_BLUE,
    ColorBleed = PROFILE_ID_COLOR_BLEED,
    White = PROFILE_ID_WHITE,
    MiamiNights = PROFILE_ID_MIAMI_NIGHTS,
    RainbowHorizontal = PROFILE_ID_RAINBOW_HORIZONTAL,
    RainbowVertical = PROFILE_ID_RAINBOW_VERTICAL,
    AnimatedRainbowVertical = PROFILE_ID_ANIMATED_RAINBOW_VERTICAL,
    AnimatedRainbowFlow = PROFILE_ID_ANIMATED_RAINBOW_FLOW,
    AnimatedRainbowWaterfall = PROFILE_ID_ANIMATED_RAINBOW_WATERFALL,
    AnimatedBreathing = PROFILE_ID_ANIMATED_BREATHING,
    AnimatedSpectrum = PROFILE_ID_ANIMATED_SPECTRUM,
    AnimatedWave = PROFILE_ID_ANIMATED_WAVE,
    ReactiveFade = PROFILE_ID_REACTIVE_FADE,
    ReactivePulse = PROFILE_ID_REACTIVE_PULSE,
    Typewriter = PROFILE_ID_TYPEWRITER,
}

impl Default for ProfileSlot {
    fn default() -> Self {
        Self::ReactiveFade(ReactiveFadeProfile::new())
    }
}

impl ProfileId {
    /// Every profile, in id order
    pub const ALL: [Self; 17] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::ColorBleed,
        Self::White,
        Self::MiamiNights,
        Self::RainbowHorizontal,
        Self::RainbowVertical,
        Self::AnimatedRainbowVertical,
        Self::AnimatedRainbowFlow,
        Self::AnimatedRainbowWaterfall,
        Self::AnimatedBreathing,
        Self::AnimatedSpectrum,
        Self::AnimatedWave,
        Self::ReactiveFade,
        Self::ReactivePulse,
        Self::Typewriter,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PROFILE_ID_RED => Self::Red,
            PROFILE_ID_GREEN => Self::Green,
            PROFILE_ID_BLUE => Self::Blue,
            PROFILE_ID_COLOR_BLEED => Self::ColorBleed,
            PROFILE_ID_WHITE => Self::White,
            PROFILE_ID_MIAMI_NIGHTS => Self::MiamiNights,
            PROFILE_ID_RAINBOW_HORIZONTAL => Self::RainbowHorizontal,
            PROFILE_ID_RAINBOW_VERTICAL => Self::RainbowVertical,
            PROFILE_ID_ANIMATED_RAINBOW_VERTICAL => Self::AnimatedRainbowVertical,
            PROFILE_ID_ANIMATED_RAINBOW_FLOW => Self::AnimatedRainbowFlow,
            PROFILE_ID_ANIMATED_RAINBOW_WATERFALL => Self::AnimatedRainbowWaterfall,
            PROFILE_ID_ANIMATED_BREATHING => Self::AnimatedBreathing,
            PROFILE_ID_ANIMATED_SPECTRUM => Self::AnimatedSpectrum,
            PROFILE_ID_ANIMATED_WAVE => Self::AnimatedWave,
            PROFILE_ID_REACTIVE_FADE => Self::ReactiveFade,
            PROFILE_ID_REACTIVE_PULSE => Self::ReactivePulse,
            PROFILE_ID_TYPEWRITER => Self::Typewriter,
            _ => return None,
        })
    }

    pub fn to_slot(self) -> ProfileSlot {
        match self {
            Self::Red => ProfileSlot::Red(SolidColorProfile::red()),
            Self::Green => ProfileSlot::Green(SolidColorProfile::green()),
            Self::Blue => ProfileSlot::Blue(SolidColorProfile::blue()),
            Self::ColorBleed => ProfileSlot::ColorBleed(ColorBleedProfile),
            Self::White => ProfileSlot::White(SolidColorProfile::white()),
            Self::MiamiNights => {
                ProfileSlot::MiamiNights(SolidColorProfile::miami_nights())
            }
            Self::RainbowHorizontal => ProfileSlot::RainbowHorizontal(
                PaletteStripesProfile::new(StripeAxis::Rows),
            ),
            Self::RainbowVertical => ProfileSlot::RainbowVertical(
                PaletteStripesProfile::new(StripeAxis::Columns),
            ),
            Self::AnimatedRainbowVertical => ProfileSlot::AnimatedRainbowVertical(
                PaletteStripesProfile::new(StripeAxis::Columns).with_scrolling(),
            ),
            Self::AnimatedRainbowFlow => {
                ProfileSlot::AnimatedRainbowFlow(RainbowSweepProfile::flow())
            }
            Self::AnimatedRainbowWaterfall => {
                ProfileSlot::AnimatedRainbowWaterfall(RainbowSweepProfile::waterfall())
            }
            Self::AnimatedBreathing => {
                ProfileSlot::AnimatedBreathing(BreathingProfile::new())
            }
            Self::AnimatedSpectrum => {
                ProfileSlot::AnimatedSpectrum(SpectrumProfile::new())
            }
            Self::AnimatedWave => ProfileSlot::AnimatedWave(WaveProfile::new()),
            Self::ReactiveFade => ProfileSlot::ReactiveFade(ReactiveFadeProfile::new()),
            Self::ReactivePulse => {
                ProfileSlot::ReactivePulse(ReactivePulseProfile::new())
            }
            Self::Typewriter => ProfileSlot::Typewriter(TypewriterProfile::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => PROFILE_NAME_RED,
            Self::Green => PROFILE_NAME_GREEN,
            Self::Blue => PROFILE_NAME_BLUE,
            Self::ColorBleed => PROFILE_NAME_COLOR_BLEED,
            Self::White => PROFILE_NAME_WHITE,
            Self::MiamiNights => PROFILE_NAME_MIAMI_NIGHTS,
            Self::RainbowHorizontal => PROFILE_NAME_RAINBOW_HORIZONTAL,
            Self::RainbowVertical => PROFILE_NAME_RAINBOW_VERTICAL,
            Self::AnimatedRainbowVertical => PROFILE_NAME_ANIMATED_RAINBOW_VERTICAL,
            Self::AnimatedRainbowFlow => PROFILE_NAME_ANIMATED_RAINBOW_FLOW,
            Self::AnimatedRainbowWaterfall => PROFILE_NAME_ANIMATED_RAINBOW_WATERFALL,
            Self::AnimatedBreathing => PROFILE_NAME_ANIMATED_BREATHING,
            Self::AnimatedSpectrum => PROFILE_NAME_ANIMATED_SPECTRUM,
            Self::AnimatedWave => PROFILE_NAME_ANIMATED_WAVE,
            Self::ReactiveFade => PROFILE_NAME_REACTIVE_FADE,
            Self::ReactivePulse => PROFILE_NAME_REACTIVE_PULSE,
            Self::Typewriter => PROFILE_NAME_TYPEWRITER,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }
}

impl ProfileSlot {
    /// Returns if the profile consumes key presses
    ///
    /// Derived from each profile's `Profile::REACTIVE` constant.
    pub fn is_reactive(&self) -> bool {
        match self {
            Self::Red(_)
            | Self::Green(_)
            | Self::Blue(_)
            | Self::White(_)
            | Self::MiamiNights(_) => SolidColorProfile::REACTIVE,
            Self::ColorBleed(_) => ColorBleedProfile::REACTIVE,
            Self::RainbowHorizontal(_)
            | Self::RainbowVertical(_)
            | Self::AnimatedRainbowVertical(_) => PaletteStripesProfile::REACTIVE,
            Self::AnimatedRainbowFlow(_) | Self::AnimatedRainbowWaterfall(_) => {
                RainbowSweepProfile::REACTIVE
            }
            Self::AnimatedBreathing(_) => BreathingProfile::REACTIVE,
            Self::AnimatedSpectrum(_) => SpectrumProfile::REACTIVE,
            Self::AnimatedWave(_) => WaveProfile::REACTIVE,
            Self::ReactiveFade(_) => ReactiveFadeProfile::REACTIVE,
            Self::ReactivePulse(_) => ReactivePulseProfile::REACTIVE,
            Self::Typewriter(_) => TypewriterProfile::REACTIVE,
        }
    }

    /// Reset the profile state and blank the frame
    pub fn init(&mut self, frame: &mut KeyFrame) {
        match self {
            Self::Red(profile)
            | Self::Green(profile)
            | Self::Blue(profile)
            | Self::White(profile)
            | Self::MiamiNights(profile) => profile.init(frame),
            Self::ColorBleed(profile) => profile.init(frame),
            Self::RainbowHorizontal(profile)
            | Self::RainbowVertical(profile)
            | Self::AnimatedRainbowVertical(profile) => profile.init(frame),
            Self::AnimatedRainbowFlow(profile)
            | Self::AnimatedRainbowWaterfall(profile) => profile.init(frame),
            Self::AnimatedBreathing(profile) => profile.init(frame),
            Self::AnimatedSpectrum(profile) => profile.init(frame),
            Self::AnimatedWave(profile) => profile.init(frame),
            Self::ReactiveFade(profile) => profile.init(frame),
            Self::ReactivePulse(profile) => profile.init(frame),
            Self::Typewriter(profile) => profile.init(frame),
        }
    }

    /// Advance the current profile by one frame
    pub fn tick(&mut self, frame: &mut KeyFrame) {
        match self {
            Self::Red(profile)
            | Self::Green(profile)
            | Self::Blue(profile)
            | Self::White(profile)
            | Self::MiamiNights(profile) => profile.tick(frame),
            Self::ColorBleed(profile) => profile.tick(frame),
            Self::RainbowHorizontal(profile)
            | Self::RainbowVertical(profile)
            | Self::AnimatedRainbowVertical(profile) => profile.tick(frame),
            Self::AnimatedRainbowFlow(profile)
            | Self::AnimatedRainbowWaterfall(profile) => profile.tick(frame),
            Self::AnimatedBreathing(profile) => profile.tick(frame),
            Self::AnimatedSpectrum(profile) => profile.tick(frame),
            Self::AnimatedWave(profile) => profile.tick(frame),
            Self::ReactiveFade(profile) => profile.tick(frame),
            Self::ReactivePulse(profile) => profile.tick(frame),
            Self::Typewriter(profile) => profile.tick(frame),
        }
    }

    /// Forward a key press to the current profile
    pub fn keypress(&mut self, frame: &mut KeyFrame, row: u8, col: u8) {
        match self {
            Self::ReactiveFade(profile) => profile.keypress(frame, row, col),
            Self::ReactivePulse(profile) => profile.keypress(frame, row, col),
            Self::Typewriter(profile) => profile.keypress(frame, row, col),
            _ => {}
        }
    }

    /// Get the profile ID for external observation
    pub fn id(&self) -> ProfileId {
        match self {
            Self::Red(_) => ProfileId::Red,
            Self::Green(_) => ProfileId::Green,
            Self::Blue(_) => ProfileId::Blue,
            Self::ColorBleed(_) => ProfileId::ColorBleed,
            Self::White(_) => ProfileId::White,
            Self::MiamiNights(_) => ProfileId::MiamiNights,
            Self::RainbowHorizontal(_) => ProfileId::RainbowHorizontal,
            Self::RainbowVertical(_) => ProfileId::RainbowVertical,
            Self::AnimatedRainbowVertical(_) => ProfileId::AnimatedRainbowVertical,
            Self::AnimatedRainbowFlow(_) => ProfileId::AnimatedRainbowFlow,
            Self::AnimatedRainbowWaterfall(_) => ProfileId::AnimatedRainbowWaterfall,
            Self::AnimatedBreathing(_) => ProfileId::AnimatedBreathing,
            Self::AnimatedSpectrum(_) => ProfileId::AnimatedSpectrum,
            Self::AnimatedWave(_) => ProfileId::AnimatedWave,
            Self::ReactiveFade(_) => ProfileId::ReactiveFade,
            Self::ReactivePulse(_) => ProfileId::ReactivePulse,
            Self::Typewriter(_) => ProfileId::Typewriter,
        }
    }
}
