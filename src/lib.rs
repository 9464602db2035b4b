#![no_std]

pub mod channel;
pub mod color;
pub mod dim;
pub mod engine;
pub mod frame;
pub mod frame_scheduler;
pub mod geometry;
pub mod key_event;
pub mod math8;
pub mod profile;

pub use engine::{Lighting, LightingConfig};
pub use frame::KeyFrame;
pub use frame_scheduler::FrameScheduler;
pub use key_event::{KeyChannel, KeyPress, KeyReceiver, KeySender};
pub use profile::{Profile, ProfileId, ProfileSlot};

pub use color::{Hsv, Rgb};
pub use dim::NaiveDim;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the key LEDs, row-major
    fn write(&mut self, colors: &[Rgb]);
}
