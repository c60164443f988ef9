//! Status-indication token derived from the modifier state.
//!
//! The core only decides *what* to indicate; colors, pulsing and the LED
//! hardware belong to the sink.

use crate::state::ModifierTracker;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indication {
    #[default]
    Base,
    Shift,
    Green,
    Orange,
    People,
}

impl Indication {
    pub fn for_modifiers(modifiers: &ModifierTracker) -> Self {
        if modifiers.people_active() {
            Indication::People
        } else if modifiers.green_active() {
            Indication::Green
        } else if modifiers.orange_active() {
            Indication::Orange
        } else if modifiers.shift_active() {
            Indication::Shift
        } else {
            Indication::Base
        }
    }
}

/// Cosmetic status sink; `set` is only called when the indication changes.
pub trait StatusSink {
    fn set(&mut self, indication: Indication);
}
