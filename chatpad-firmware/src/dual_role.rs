//! Tap/hold resolution for the one dual-role key (Space).
//!
//! No event is emitted while the key is tentative: downstream must only ever
//! see one of tap or hold per physical press/release cycle, so the tap press
//! is deferred until release confirms it and the hold press is emitted at
//! the instant of promotion.

use embassy_time::{Duration, Instant};

use DualRoleState::*;

#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum DualRoleState {
    #[default]
    Idle,
    Tentative {
        down_at: Instant,
    },
    Promoted,
}

/// How a completed press/release cycle resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    Tap,
    Hold,
}

#[derive(Default)]
pub struct DualRoleTimer {
    state: DualRoleState,
}

impl DualRoleTimer {
    pub fn on_press(&mut self, now: Instant) {
        self.state = Tentative { down_at: now };
    }

    /// Promotes a tentative key whose hold window has elapsed. Returns true
    /// exactly once per press; the caller must emit the hold-action press.
    pub fn poll_timeout(&mut self, now: Instant, threshold: Duration) -> bool {
        if let Tentative { down_at } = self.state {
            if now - down_at > threshold {
                self.state = Promoted;
                return true;
            }
        }
        false
    }

    /// Promotes immediately when another key goes down mid-press, so a
    /// chorded modifier takes effect without waiting out the hold window.
    /// Returns true if this call performed the promotion.
    pub fn on_other_key(&mut self) -> bool {
        if matches!(self.state, Tentative { .. }) {
            self.state = Promoted;
            return true;
        }
        false
    }

    /// Returns how the cycle resolved, or `None` if the key was not down.
    /// A tap means no press was ever emitted; the caller must synthesize a
    /// full press+release of the tap action. A hold matches the press
    /// already emitted at promotion.
    pub fn on_release(&mut self) -> Option<Resolution> {
        let resolution = match self.state {
            Idle => None,
            Tentative { .. } => Some(Resolution::Tap),
            Promoted => Some(Resolution::Hold),
        };
        self.state = Idle;
        resolution
    }

    pub fn is_down(&self) -> bool {
        !matches!(self.state, Idle)
    }
}

#[cfg(test)]
#[path = "dual_role_test.rs"]
mod test;
