/// Raw key codes reported by the Chatpad in the two rollover slots of a data
/// frame. 0 means the slot is empty.
pub mod pad {
    pub const KEY_1: u8 = 0x17;
    pub const KEY_2: u8 = 0x16;
    pub const KEY_3: u8 = 0x15;
    pub const KEY_4: u8 = 0x14;
    pub const KEY_5: u8 = 0x13;
    pub const KEY_6: u8 = 0x12;
    pub const KEY_7: u8 = 0x11;
    pub const KEY_8: u8 = 0x67;
    pub const KEY_9: u8 = 0x66;
    pub const KEY_0: u8 = 0x65;

    pub const Q: u8 = 0x27;
    pub const W: u8 = 0x26;
    pub const E: u8 = 0x25;
    pub const R: u8 = 0x24;
    pub const T: u8 = 0x23;
    pub const Y: u8 = 0x22;
    pub const U: u8 = 0x21;
    pub const I: u8 = 0x76;
    pub const O: u8 = 0x75;
    pub const P: u8 = 0x64;

    pub const A: u8 = 0x37;
    pub const S: u8 = 0x36;
    pub const D: u8 = 0x35;
    pub const F: u8 = 0x34;
    pub const G: u8 = 0x33;
    pub const H: u8 = 0x32;
    pub const J: u8 = 0x31;
    pub const K: u8 = 0x77;
    pub const L: u8 = 0x72;

    pub const Z: u8 = 0x46;
    pub const X: u8 = 0x45;
    pub const C: u8 = 0x44;
    pub const V: u8 = 0x43;
    pub const B: u8 = 0x42;
    pub const N: u8 = 0x41;
    pub const M: u8 = 0x52;

    pub const COMMA: u8 = 0x62;
    pub const PERIOD: u8 = 0x53;
    pub const ENTER: u8 = 0x63;
    pub const SPACE: u8 = 0x54;
    pub const BACKSPACE: u8 = 0x71;
    pub const LEFT: u8 = 0x55;
    pub const RIGHT: u8 = 0x51;

    // The pad also reports the modifier keys as raw codes in the rollover
    // slots; their state is taken from the modifier bitmask instead.
    pub const MOD_SHIFT: u8 = 0x81;
    pub const MOD_GREEN: u8 = 0x82;
    pub const MOD_PEOPLE: u8 = 0x83;
    pub const MOD_ORANGE: u8 = 0x84;

    pub fn is_modifier(code: u8) -> bool {
        (MOD_SHIFT..=MOD_ORANGE).contains(&code)
    }
}

/// Modifier bitmask bits of frame byte 3.
pub mod pad_modifier {
    pub const SHIFT: u8 = 1 << 0;
    pub const GREEN: u8 = 1 << 1;
    pub const ORANGE: u8 = 1 << 2;
    pub const PEOPLE: u8 = 1 << 3;
}

/// USB HID keyboard usage codes (usage page 0x07).
pub mod usage {
    pub const A: u8 = 0x04;
    pub const B: u8 = 0x05;
    pub const C: u8 = 0x06;
    pub const D: u8 = 0x07;
    pub const E: u8 = 0x08;
    pub const F: u8 = 0x09;
    pub const G: u8 = 0x0a;
    pub const H: u8 = 0x0b;
    pub const I: u8 = 0x0c;
    pub const J: u8 = 0x0d;
    pub const K: u8 = 0x0e;
    pub const L: u8 = 0x0f;
    pub const M: u8 = 0x10;
    pub const N: u8 = 0x11;
    pub const O: u8 = 0x12;
    pub const P: u8 = 0x13;
    pub const Q: u8 = 0x14;
    pub const R: u8 = 0x15;
    pub const S: u8 = 0x16;
    pub const T: u8 = 0x17;
    pub const U: u8 = 0x18;
    pub const V: u8 = 0x19;
    pub const W: u8 = 0x1a;
    pub const X: u8 = 0x1b;
    pub const Y: u8 = 0x1c;
    pub const Z: u8 = 0x1d;

    pub const KEY_1: u8 = 0x1e;
    pub const KEY_2: u8 = 0x1f;
    pub const KEY_3: u8 = 0x20;
    pub const KEY_4: u8 = 0x21;
    pub const KEY_5: u8 = 0x22;
    pub const KEY_6: u8 = 0x23;
    pub const KEY_7: u8 = 0x24;
    pub const KEY_8: u8 = 0x25;
    pub const KEY_9: u8 = 0x26;
    pub const KEY_0: u8 = 0x27;

    pub const ENTER: u8 = 0x28;
    pub const ESC: u8 = 0x29;
    pub const BACKSPACE: u8 = 0x2a;
    pub const TAB: u8 = 0x2b;
    pub const SPACE: u8 = 0x2c;
    pub const MINUS: u8 = 0x2d;
    pub const EQUAL: u8 = 0x2e;
    pub const LEFT_BRACKET: u8 = 0x2f;
    pub const RIGHT_BRACKET: u8 = 0x30;
    pub const BACKSLASH: u8 = 0x31;
    pub const SEMICOLON: u8 = 0x33;
    pub const QUOTE: u8 = 0x34;
    pub const GRAVE: u8 = 0x35;
    pub const COMMA: u8 = 0x36;
    pub const DOT: u8 = 0x37;
    pub const SLASH: u8 = 0x38;

    pub const F1: u8 = 0x3a;
    pub const F2: u8 = 0x3b;
    pub const F3: u8 = 0x3c;
    pub const F4: u8 = 0x3d;
    pub const F5: u8 = 0x3e;
    pub const F6: u8 = 0x3f;
    pub const F7: u8 = 0x40;
    pub const F8: u8 = 0x41;
    pub const F9: u8 = 0x42;
    pub const F10: u8 = 0x43;
    pub const F11: u8 = 0x44;
    pub const F12: u8 = 0x45;

    pub const PRINT_SCREEN: u8 = 0x46;
    pub const SCROLL_LOCK: u8 = 0x47;
    pub const PAUSE: u8 = 0x48;
    pub const INSERT: u8 = 0x49;
    pub const HOME: u8 = 0x4a;
    pub const PAGE_UP: u8 = 0x4b;
    pub const DELETE: u8 = 0x4c;
    pub const END: u8 = 0x4d;
    pub const PAGE_DOWN: u8 = 0x4e;
    pub const RIGHT: u8 = 0x4f;
    pub const LEFT: u8 = 0x50;
    pub const DOWN: u8 = 0x51;
    pub const UP: u8 = 0x52;

    pub const LEFT_CTRL: u8 = 0xe0;
    pub const LEFT_SHIFT: u8 = 0xe1;
    pub const LEFT_ALT: u8 = 0xe2;
    pub const LEFT_GUI: u8 = 0xe3;

    pub const MODIFIER_MIN: u8 = 0xe0;
    pub const MODIFIER_MAX: u8 = 0xe7;
}

/// Modifier bits of the HID keyboard report's modifier byte.
pub mod hid_modifier {
    pub const LEFT_CTRL: u8 = 1 << 0;
    pub const LEFT_SHIFT: u8 = 1 << 1;
    pub const LEFT_ALT: u8 = 1 << 2;
    pub const LEFT_GUI: u8 = 1 << 3;
}
