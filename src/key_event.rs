//! Key events
//!
//! The matrix scanner turns every key-down transition into a [`KeyPress`] and
//! queues it on a [`KeyChannel`]. The lighting loop drains the queue before
//! each tick.

use crate::channel::{Channel, Receiver, Sender};
use crate::geometry::{NUM_COLUMNS, NUM_ROWS};

/// Key-down at a matrix position
///
/// Coordinates are validated against the matrix geometry on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    row: u8,
    col: u8,
}

impl KeyPress {
    /// Create a key press, `None` if the position is outside the matrix
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if usize::from(row) >= NUM_ROWS || usize::from(col) >= NUM_COLUMNS {
            return None;
        }
        Some(Self { row, col })
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }
}

/// Type alias for key event sender
pub type KeySender<'a, const SIZE: usize> = Sender<'a, KeyPress, SIZE>;

/// Type alias for key event receiver
pub type KeyReceiver<'a, const SIZE: usize> = Receiver<'a, KeyPress, SIZE>;

/// Type alias for the key event channel
pub type KeyChannel<const SIZE: usize> = Channel<KeyPress, SIZE>;
