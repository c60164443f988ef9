//! Per-tick orchestration: transport drain, frame processing, dual-role
//! timeout polling and the keep-alive write.
//!
//! Single-threaded and poll-driven. All state lives in the one
//! [`Controller`] instance and is only touched inside [`Controller::tick`];
//! nothing here blocks, the caller's scheduling loop re-invokes `tick` as
//! often as it likes.

use embassy_time::Instant;
use heapless::Vec;

use chatpad_common::keycodes::{hid_modifier, pad, usage};

use crate::config::ChatpadConfig;
use crate::dual_role::{DualRoleTimer, Resolution};
use crate::layout::{Action, Layers};
use crate::led::{Indication, StatusSink};
use crate::protocol::{Frame, FrameDecoder, Transport, AWAKE_MSG, INIT_MSG};
use crate::state::{ModifierTracker, RolloverTracker};

/// Raw code of the dual-role key.
const DUAL_ROLE_CODE: u8 = pad::SPACE;
/// What a tap of the dual-role key produces.
const TAP_ACTION: Action = Action::Key(usage::SPACE);
/// What a held or chorded dual-role key produces.
const HOLD_ACTION: Action = Action::Modifier(hid_modifier::LEFT_CTRL);
/// Host-side Shift, latched from the pad's shift-active state.
const SHIFT_ACTION: Action = Action::Modifier(hid_modifier::LEFT_SHIFT);

/// The hardware reports at most two keys down; two more slots of headroom
/// cover a key released and re-pressed within one drained batch.
const ACTIVE_KEYS_MAX: usize = 4;

/// Output sink for resolved actions. Press and release are matched and
/// ordering-preserving; everything else is up to the embedder.
pub trait HidSink {
    fn press(&mut self, action: &Action);
    fn release(&mut self, action: &Action);
}

pub struct Controller<T: Transport, H: HidSink, S: StatusSink> {
    transport: T,
    hid: H,
    status: S,
    layers: Layers,
    config: ChatpadConfig,

    decoder: FrameDecoder,
    modifiers: ModifierTracker,
    rollover: RolloverTracker,
    space: DualRoleTimer,

    /// Binding recorded at press time so release undoes exactly what press
    /// did, even if the active layer changed while the key was held.
    active: Vec<(u8, Action), ACTIVE_KEYS_MAX>,
    shift_down: bool,
    last_ping: Instant,
    indication: Indication,
    trace_events: bool,
}

impl<T: Transport, H: HidSink, S: StatusSink> Controller<T, H, S> {
    pub fn new(
        mut transport: T,
        hid: H,
        status: S,
        layers: Layers,
        config: ChatpadConfig,
        now: Instant,
    ) -> Self {
        transport.write(&INIT_MSG);
        Self {
            transport,
            hid,
            status,
            layers,
            config,
            decoder: FrameDecoder::default(),
            modifiers: ModifierTracker::default(),
            rollover: RolloverTracker::default(),
            space: DualRoleTimer::default(),
            active: Vec::new(),
            shift_down: false,
            last_ping: now,
            indication: Indication::Base,
            trace_events: false,
        }
    }

    /// One cooperative pass: drain the transport, process every complete
    /// frame in arrival order, poll the dual-role window, keep the pad
    /// awake, refresh the status token. Returns without waiting for
    /// anything.
    pub fn tick(&mut self, now: Instant) {
        self.drain_transport();
        while let Some(frame) = self.decoder.next_frame() {
            self.process_frame(&frame, now);
        }

        if self.space.poll_timeout(now, self.config.hold_timeout) {
            self.hid.press(&HOLD_ACTION);
        }

        if now - self.last_ping > self.config.keep_alive_interval {
            self.transport.write(&AWAKE_MSG);
            self.last_ping = now;
        }

        let indication = Indication::for_modifiers(&self.modifiers);
        if indication != self.indication {
            self.indication = indication;
            self.status.set(indication);
        }
    }

    /// Polls forever at a millisecond cadence. Convenience for embedders
    /// that give the controller its own task.
    #[cfg(not(test))]
    pub async fn run(&mut self) -> ! {
        loop {
            self.tick(Instant::now());
            embassy_time::Timer::after_millis(1).await;
        }
    }

    fn drain_transport(&mut self) {
        let mut chunk = [0u8; 16];
        loop {
            let n = self.transport.read_available(&mut chunk);
            if n == 0 {
                return;
            }
            self.decoder.feed(&chunk[..n]);
        }
    }

    fn process_frame(&mut self, frame: &Frame, now: Instant) {
        use chatpad_common::keycodes::pad_modifier::ORANGE;

        self.modifiers.update(frame.modifiers());

        // Orange tapped while People mode is on toggles event tracing.
        if self.modifiers.people_active() && self.modifiers.rising(ORANGE) {
            self.trace_events = !self.trace_events;
            crate::info!(
                "event tracing {}",
                if self.trace_events { "on" } else { "off" }
            );
        }

        // Latch host Shift to the pad's shift-active state (raw bit or
        // sticky toggle).
        if self.modifiers.shift_active() != self.shift_down {
            if self.shift_down {
                self.hid.release(&SHIFT_ACTION);
            } else {
                self.hid.press(&SHIFT_ACTION);
            }
            self.shift_down = !self.shift_down;
        }

        self.rollover.update(frame.key0(), frame.key1());
        let pressed: Vec<u8, 2> = self.rollover.pressed().collect();
        let released: Vec<u8, 2> = self.rollover.released().collect();
        for raw in pressed {
            self.on_key_down(raw, now);
        }
        for raw in released {
            self.on_key_up(raw);
        }
    }

    fn on_key_down(&mut self, raw: u8, now: Instant) {
        // Modifier keys also show up as raw codes; their state comes from
        // the bitmask.
        if pad::is_modifier(raw) {
            return;
        }

        if raw == DUAL_ROLE_CODE {
            self.space.on_press(now);
            return;
        }

        // Chord promotion must precede resolving the new key so that a
        // binding depending on the hold modifier sees it already pressed.
        if self.space.on_other_key() {
            self.hid.press(&HOLD_ACTION);
        }

        let Some(action) = self.layers.resolve(raw, &self.modifiers) else {
            return;
        };
        if self.active.push((raw, action)).is_err() {
            crate::warn!("active key table full, dropping press {:02x}", raw);
            return;
        }
        self.hid.press(&action);
        if self.trace_events {
            crate::debug!("down {:02x} -> {:?}", raw, action);
        }
    }

    fn on_key_up(&mut self, raw: u8) {
        if pad::is_modifier(raw) {
            return;
        }

        if raw == DUAL_ROLE_CODE {
            match self.space.on_release() {
                Some(Resolution::Hold) => self.hid.release(&HOLD_ACTION),
                Some(Resolution::Tap) => {
                    // No press was emitted while tentative; synthesize the
                    // whole tap now.
                    self.hid.press(&TAP_ACTION);
                    self.hid.release(&TAP_ACTION);
                }
                None => {}
            }
            return;
        }

        // Never re-resolve on release: the layer may have changed while the
        // key was held. No recorded binding means the press was unbound.
        if let Some(pos) = self.active.iter().position(|(code, _)| *code == raw) {
            let (_, action) = self.active.swap_remove(pos);
            self.hid.release(&action);
            if self.trace_events {
                crate::debug!("up   {:02x} -> {:?}", raw, action);
            }
        }
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod test;
