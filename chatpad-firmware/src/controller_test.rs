extern crate std;

use core::cmp::min;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use chatpad_common::keycodes::pad_modifier::{GREEN, ORANGE, PEOPLE, SHIFT};
use chatpad_common::keycodes::{hid_modifier, pad, usage};
use embassy_time::Instant;

use crate::keymap;
use crate::protocol::{checksum, DATA_HEADER, DATA_HEADER2};

use super::*;

#[derive(Clone, Default)]
struct StubTransport(Rc<RefCell<TransportState>>);

#[derive(Default)]
struct TransportState {
    rx: VecDeque<u8>,
    writes: Vec<Vec<u8>>,
}

impl StubTransport {
    fn push_frame(&self, modifiers: u8, key0: u8, key1: u8) {
        let mut f = [DATA_HEADER, DATA_HEADER2, 0, modifiers, key0, key1, 0, 0];
        f[7] = checksum(&f[..7]);
        self.0.borrow_mut().rx.extend(f);
    }

    fn push_bytes(&self, bytes: &[u8]) {
        self.0.borrow_mut().rx.extend(bytes);
    }

    fn take_writes(&self) -> Vec<Vec<u8>> {
        core::mem::take(&mut self.0.borrow_mut().writes)
    }
}

impl Transport for StubTransport {
    fn read_available(&mut self, buf: &mut [u8]) -> usize {
        let mut state = self.0.borrow_mut();
        let n = min(buf.len(), state.rx.len());
        for slot in buf.iter_mut().take(n) {
            *slot = state.rx.pop_front().unwrap();
        }
        n
    }

    fn write(&mut self, bytes: &[u8]) {
        self.0.borrow_mut().writes.push(bytes.to_vec());
    }
}

#[derive(Clone, Default)]
struct StubHid(Rc<RefCell<Vec<(bool, Action)>>>);

impl StubHid {
    fn take_events(&self) -> Vec<(bool, Action)> {
        core::mem::take(&mut self.0.borrow_mut())
    }
}

impl HidSink for StubHid {
    fn press(&mut self, action: &Action) {
        self.0.borrow_mut().push((true, *action));
    }

    fn release(&mut self, action: &Action) {
        self.0.borrow_mut().push((false, *action));
    }
}

#[derive(Clone, Default)]
struct StubStatus(Rc<RefCell<Vec<Indication>>>);

impl StatusSink for StubStatus {
    fn set(&mut self, indication: Indication) {
        self.0.borrow_mut().push(indication);
    }
}

type TestController = Controller<StubTransport, StubHid, StubStatus>;

fn setup() -> (TestController, StubTransport, StubHid, StubStatus) {
    let transport = StubTransport::default();
    let hid = StubHid::default();
    let status = StubStatus::default();
    let controller = Controller::new(
        transport.clone(),
        hid.clone(),
        status.clone(),
        keymap::default_layers(),
        ChatpadConfig::default(),
        at(0),
    );
    (controller, transport, hid, status)
}

fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

const PRESS: bool = true;
const RELEASE: bool = false;

#[test]
fn init_message_is_written_at_construction() {
    let (_controller, transport, _hid, _status) = setup();
    assert_eq!(transport.take_writes(), [INIT_MSG.to_vec()]);
}

#[test]
fn keep_alive_is_elapsed_gated_not_frame_gated() {
    let (mut controller, transport, _hid, _status) = setup();
    transport.take_writes();

    // a quiet pad must not starve the keep-alive
    controller.tick(at(500));
    assert!(transport.take_writes().is_empty());

    controller.tick(at(1001));
    assert_eq!(transport.take_writes(), [AWAKE_MSG.to_vec()]);

    controller.tick(at(1500));
    assert!(transport.take_writes().is_empty());

    controller.tick(at(2002));
    assert_eq!(transport.take_writes(), [AWAKE_MSG.to_vec()]);
}

#[test]
fn press_once_then_release_once() {
    let (mut controller, transport, hid, _status) = setup();

    // raw wire bytes for "Q down", checksum precomputed
    transport.push_bytes(&[0xB4, 0xC5, 0x00, 0x00, 0x27, 0x00, 0x00, 0x60]);
    controller.tick(at(1));
    assert_eq!(hid.take_events(), [(PRESS, Action::Key(usage::Q))]);

    // identical frame: key still down, no second press
    transport.push_bytes(&[0xB4, 0xC5, 0x00, 0x00, 0x27, 0x00, 0x00, 0x60]);
    controller.tick(at(2));
    assert_eq!(hid.take_events(), []);

    transport.push_frame(0, 0, 0);
    controller.tick(at(3));
    assert_eq!(hid.take_events(), [(RELEASE, Action::Key(usage::Q))]);
}

#[test]
fn release_dispatches_the_binding_recorded_at_press() {
    let (mut controller, transport, hid, _status) = setup();

    transport.push_frame(GREEN, pad::H, 0);
    controller.tick(at(1));
    assert_eq!(hid.take_events(), [(PRESS, Action::Key(usage::LEFT))]);

    // layer changes while held: no events, and no re-resolution later
    transport.push_frame(0, pad::H, 0);
    controller.tick(at(2));
    assert_eq!(hid.take_events(), []);

    transport.push_frame(0, 0, 0);
    controller.tick(at(3));
    assert_eq!(hid.take_events(), [(RELEASE, Action::Key(usage::LEFT))]);
}

#[test]
fn unbound_keys_are_silently_ignored() {
    let (mut controller, transport, hid, _status) = setup();

    // Q is unbound under green
    transport.push_frame(GREEN, pad::Q, 0);
    controller.tick(at(1));
    transport.push_frame(GREEN, 0, 0);
    controller.tick(at(2));
    assert_eq!(hid.take_events(), []);
}

#[test]
fn modifier_raw_codes_are_suppressed() {
    let (mut controller, transport, hid, _status) = setup();

    transport.push_frame(GREEN, pad::MOD_GREEN, 0);
    controller.tick(at(1));
    transport.push_frame(0, 0, 0);
    controller.tick(at(2));
    assert_eq!(hid.take_events(), []);
}

#[test]
fn shift_bit_latches_host_shift() {
    let (mut controller, transport, hid, _status) = setup();

    transport.push_frame(SHIFT, 0, 0);
    controller.tick(at(1));
    assert_eq!(
        hid.take_events(),
        [(PRESS, Action::Modifier(hid_modifier::LEFT_SHIFT))]
    );

    // held across frames: no repeats
    transport.push_frame(SHIFT, 0, 0);
    controller.tick(at(2));
    assert_eq!(hid.take_events(), []);

    transport.push_frame(0, 0, 0);
    controller.tick(at(3));
    assert_eq!(
        hid.take_events(),
        [(RELEASE, Action::Modifier(hid_modifier::LEFT_SHIFT))]
    );
}

#[test]
fn sticky_shift_outlives_the_chord() {
    let (mut controller, transport, hid, _status) = setup();

    transport.push_frame(SHIFT | ORANGE, 0, 0);
    controller.tick(at(1));
    assert_eq!(
        hid.take_events(),
        [(PRESS, Action::Modifier(hid_modifier::LEFT_SHIFT))]
    );

    // keys released but sticky keeps host shift down
    transport.push_frame(0, 0, 0);
    controller.tick(at(2));
    assert_eq!(hid.take_events(), []);

    // chord re-entry untoggles; shift raw bit still held
    transport.push_frame(SHIFT | ORANGE, 0, 0);
    controller.tick(at(3));
    assert_eq!(hid.take_events(), []);

    transport.push_frame(0, 0, 0);
    controller.tick(at(4));
    assert_eq!(
        hid.take_events(),
        [(RELEASE, Action::Modifier(hid_modifier::LEFT_SHIFT))]
    );
}

#[test]
fn space_tap_synthesizes_press_and_release() {
    let (mut controller, transport, hid, _status) = setup();

    transport.push_frame(0, pad::SPACE, 0);
    controller.tick(at(1));
    // tentative: nothing observable yet
    assert_eq!(hid.take_events(), []);

    transport.push_frame(0, 0, 0);
    controller.tick(at(50));
    assert_eq!(
        hid.take_events(),
        [
            (PRESS, Action::Key(usage::SPACE)),
            (RELEASE, Action::Key(usage::SPACE)),
        ]
    );
}

#[test]
fn space_held_past_the_window_becomes_ctrl() {
    let (mut controller, transport, hid, _status) = setup();

    transport.push_frame(0, pad::SPACE, 0);
    controller.tick(at(1));
    assert_eq!(hid.take_events(), []);

    // quiet tick past the threshold fires the promotion
    controller.tick(at(200));
    assert_eq!(
        hid.take_events(),
        [(PRESS, Action::Modifier(hid_modifier::LEFT_CTRL))]
    );

    // promotion fires exactly once
    controller.tick(at(250));
    assert_eq!(hid.take_events(), []);

    transport.push_frame(0, 0, 0);
    controller.tick(at(300));
    assert_eq!(
        hid.take_events(),
        [(RELEASE, Action::Modifier(hid_modifier::LEFT_CTRL))]
    );
    // no tap events anywhere in the cycle
}

#[test]
fn chording_space_promotes_before_the_second_key_resolves() {
    let (mut controller, transport, hid, _status) = setup();

    transport.push_frame(0, pad::SPACE, 0);
    controller.tick(at(1));

    transport.push_frame(0, pad::SPACE, pad::Q);
    controller.tick(at(20));
    assert_eq!(
        hid.take_events(),
        [
            (PRESS, Action::Modifier(hid_modifier::LEFT_CTRL)),
            (PRESS, Action::Key(usage::Q)),
        ]
    );

    transport.push_frame(0, 0, 0);
    controller.tick(at(40));
    assert_eq!(
        hid.take_events(),
        [
            (RELEASE, Action::Modifier(hid_modifier::LEFT_CTRL)),
            (RELEASE, Action::Key(usage::Q)),
        ]
    );
}

#[test]
fn macro_actions_pass_through_as_handles() {
    let (mut controller, transport, hid, _status) = setup();

    transport.push_frame(PEOPLE, 0, 0);
    controller.tick(at(1));
    transport.push_frame(PEOPLE, pad::S, 0);
    controller.tick(at(2));
    transport.push_frame(PEOPLE, 0, 0);
    controller.tick(at(3));

    let events = hid.take_events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], (PRESS, Action::Macro(m)) if m.name == "save"));
    assert!(matches!(events[1], (RELEASE, Action::Macro(m)) if m.name == "save"));
}

#[test]
fn status_token_follows_the_active_layer() {
    let (mut controller, transport, _hid, status) = setup();

    transport.push_frame(GREEN, 0, 0);
    controller.tick(at(1));
    // unchanged indication: no repeat
    transport.push_frame(GREEN, 0, 0);
    controller.tick(at(2));
    transport.push_frame(0, 0, 0);
    controller.tick(at(3));

    assert_eq!(*status.0.borrow(), [Indication::Green, Indication::Base]);
}

#[test]
fn frames_split_across_ticks_still_decode() {
    let (mut controller, transport, hid, _status) = setup();

    transport.push_bytes(&[0xB4, 0xC5, 0x00]);
    controller.tick(at(1));
    assert_eq!(hid.take_events(), []);

    transport.push_bytes(&[0x00, 0x27, 0x00, 0x00, 0x60]);
    controller.tick(at(2));
    assert_eq!(hid.take_events(), [(PRESS, Action::Key(usage::Q))]);
}

#[test]
fn corrupted_frame_is_skipped_without_losing_the_next() {
    let (mut controller, transport, hid, _status) = setup();

    let mut bad = [0xB4, 0xC5, 0x00, 0x00, 0x27, 0x00, 0x00, 0x60];
    bad[4] = 0x41; // checksum now wrong
    transport.push_bytes(&bad);
    transport.push_frame(0, pad::W, 0);
    controller.tick(at(1));

    assert_eq!(hid.take_events(), [(PRESS, Action::Key(usage::W))]);
}

#[test]
fn two_keys_down_and_up_are_tracked_independently() {
    let (mut controller, transport, hid, _status) = setup();

    transport.push_frame(0, pad::Q, 0);
    controller.tick(at(1));
    transport.push_frame(0, pad::Q, pad::W);
    controller.tick(at(2));
    transport.push_frame(0, pad::W, 0);
    controller.tick(at(3));
    transport.push_frame(0, 0, 0);
    controller.tick(at(4));

    assert_eq!(
        hid.take_events(),
        [
            (PRESS, Action::Key(usage::Q)),
            (PRESS, Action::Key(usage::W)),
            (RELEASE, Action::Key(usage::Q)),
            (RELEASE, Action::Key(usage::W)),
        ]
    );
}

#[test]
fn all_frames_in_one_tick_are_processed_in_order() {
    let (mut controller, transport, hid, _status) = setup();

    transport.push_frame(0, pad::Q, 0);
    transport.push_frame(0, 0, 0);
    transport.push_frame(0, pad::W, 0);
    controller.tick(at(1));

    assert_eq!(
        hid.take_events(),
        [
            (PRESS, Action::Key(usage::Q)),
            (RELEASE, Action::Key(usage::Q)),
            (PRESS, Action::Key(usage::W)),
        ]
    );
}

#[test]
fn orange_in_people_mode_toggles_event_tracing() {
    let (mut controller, transport, _hid, _status) = setup();

    // plain orange outside people mode leaves tracing alone
    transport.push_frame(ORANGE, 0, 0);
    controller.tick(at(1));
    transport.push_frame(0, 0, 0);
    controller.tick(at(2));
    assert!(!controller.trace_events);

    // entering people mode is not itself an orange edge
    transport.push_frame(PEOPLE, 0, 0);
    controller.tick(at(3));
    transport.push_frame(0, 0, 0);
    controller.tick(at(4));
    assert!(!controller.trace_events);

    transport.push_frame(ORANGE, 0, 0);
    controller.tick(at(5));
    assert!(controller.trace_events);

    // held orange is one edge, not one per frame
    transport.push_frame(ORANGE, 0, 0);
    controller.tick(at(6));
    assert!(controller.trace_events);

    transport.push_frame(0, 0, 0);
    controller.tick(at(7));
    transport.push_frame(ORANGE, 0, 0);
    controller.tick(at(8));
    assert!(!controller.trace_events);
}

#[test]
fn tracing_toggle_frame_is_otherwise_processed_normally() {
    let (mut controller, transport, hid, _status) = setup();

    transport.push_frame(PEOPLE, 0, 0);
    controller.tick(at(1));
    transport.push_frame(0, 0, 0);
    controller.tick(at(2));
    assert_eq!(hid.take_events(), []);

    // the edge that flips tracing also carries the shift bit and a key;
    // both must still go through
    transport.push_frame(SHIFT | ORANGE, pad::E, 0);
    controller.tick(at(3));
    assert!(controller.trace_events);
    assert_eq!(
        hid.take_events(),
        [
            (PRESS, Action::Modifier(hid_modifier::LEFT_SHIFT)),
            (PRESS, Action::Key(usage::ESC)),
        ]
    );
}

#[test]
fn people_mode_persists_until_toggled_off() {
    let (mut controller, transport, hid, status) = setup();

    transport.push_frame(PEOPLE, 0, 0);
    controller.tick(at(1));
    transport.push_frame(0, 0, 0);
    controller.tick(at(2));

    // People released, mode still latched
    transport.push_frame(0, pad::E, 0);
    controller.tick(at(3));
    assert_eq!(hid.take_events(), [(PRESS, Action::Key(usage::ESC))]);
    assert_eq!(*status.0.borrow(), [Indication::People]);
}
