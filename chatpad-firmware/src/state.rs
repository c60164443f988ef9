//! Modifier and rollover state machines.
//!
//! Both keep exactly one frame of history as plain value fields; the
//! previous snapshot is replaced by assignment on every update.

use chatpad_common::keycodes::pad_modifier::{GREEN, ORANGE, PEOPLE, SHIFT};

/// Tracks the modifier bitmask across frames and derives the two toggle
/// behaviors: People mode and sticky Shift.
#[derive(Default)]
pub struct ModifierTracker {
    current: u8,
    previous: u8,
    people_toggled: bool,
    shift_sticky: bool,
}

impl ModifierTracker {
    pub fn update(&mut self, mask: u8) {
        self.previous = self.current;
        self.current = mask;

        // People is a true on/off toggle: flip on the rising edge only.
        if self.rising(PEOPLE) {
            self.people_toggled = !self.people_toggled;
        }

        // Sticky Shift flips when the Shift+Orange chord newly becomes
        // fully pressed. The conjunction is compared whole against the
        // previous frame, so re-entering the chord re-toggles.
        let chord = self.current & SHIFT != 0 && self.current & ORANGE != 0;
        let chord_prev = self.previous & SHIFT != 0 && self.previous & ORANGE != 0;
        if chord && !chord_prev {
            self.shift_sticky = !self.shift_sticky;
        }
    }

    /// Did `mask` transition 0 -> 1 between the previous and current frame?
    pub fn rising(&self, mask: u8) -> bool {
        self.current & mask != 0 && self.previous & mask == 0
    }

    pub fn shift_active(&self) -> bool {
        self.shift_sticky || self.current & SHIFT != 0
    }

    pub fn green_active(&self) -> bool {
        self.current & GREEN != 0
    }

    pub fn orange_active(&self) -> bool {
        self.current & ORANGE != 0
    }

    pub fn people_active(&self) -> bool {
        self.people_toggled
    }
}

/// Tracks the pad's two rollover slots and derives discrete press/release
/// events by set difference against the previous frame. Slots are unordered
/// for comparison, so a held key hopping between slots is not an event.
#[derive(Default)]
pub struct RolloverTracker {
    current: [u8; 2],
    previous: [u8; 2],
}

impl RolloverTracker {
    pub fn update(&mut self, key0: u8, key1: u8) {
        self.previous = self.current;
        self.current = [key0, key1];
    }

    /// Codes present now that were in neither previous slot.
    pub fn pressed(&self) -> SlotDiff {
        SlotDiff::new(self.current, self.previous)
    }

    /// Codes present in the previous frame that are in neither slot now.
    pub fn released(&self) -> SlotDiff {
        SlotDiff::new(self.previous, self.current)
    }
}

/// Iterator over the (at most two) codes in `from` missing from `against`.
/// 0 marks an empty slot and is never yielded.
#[derive(Clone)]
pub struct SlotDiff {
    from: [u8; 2],
    against: [u8; 2],
    idx: usize,
}

impl SlotDiff {
    fn new(from: [u8; 2], against: [u8; 2]) -> Self {
        Self {
            from,
            against,
            idx: 0,
        }
    }
}

impl Iterator for SlotDiff {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        while self.idx < 2 {
            let code = self.from[self.idx];
            self.idx += 1;
            // idx == 2 is the second slot; skip it if it repeats the first.
            if code != 0 && !self.against.contains(&code) && (self.idx == 1 || self.from[0] != code)
            {
                return Some(code);
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod test;
