//! Default layer tables and macro bodies.
//!
//! This is data, not logic: the controller only ever sees it through
//! [`Layers`]. Embedders with different tastes hand `Layers::new` their own
//! tables instead.
//!
//! Base is plain typing. Green carries coding symbols, pair insertion and
//! vim-style HJKL arrows. Orange carries F-keys, navigation and bare
//! modifiers. People mode carries clipboard combos, word navigation and
//! terminal/dev macros.

use chatpad_common::keycodes::{hid_modifier, pad, usage};

use crate::layout::{
    Action::{self, Key, Macro, ModKey, Modifier},
    Layers, MacroDef,
    MacroStep::{Press, Release, Tap, Text},
};

pub static SAVE: MacroDef = MacroDef {
    name: "save",
    steps: &[Press(usage::LEFT_CTRL), Tap(usage::S), Release(usage::LEFT_CTRL)],
};

pub static BUILD: MacroDef = MacroDef {
    name: "build",
    steps: &[
        Press(usage::LEFT_CTRL),
        Press(usage::LEFT_SHIFT),
        Tap(usage::B),
        Release(usage::LEFT_SHIFT),
        Release(usage::LEFT_CTRL),
    ],
};

pub static GIT_STATUS: MacroDef = MacroDef {
    name: "git_status",
    steps: &[Text("git status\n")],
};

pub static GIT_COMMIT: MacroDef = MacroDef {
    name: "git_commit",
    steps: &[Text("git commit -m \"\""), Tap(usage::LEFT)],
};

pub static TMUX_PREFIX: MacroDef = MacroDef {
    name: "tmux_prefix",
    steps: &[Press(usage::LEFT_CTRL), Tap(usage::B), Release(usage::LEFT_CTRL)],
};

pub static CLEAR: MacroDef = MacroDef {
    name: "clear",
    steps: &[Text("clear\n")],
};

// Pair insertion: type both delimiters, then step back inside them.
pub static PAIR_PAREN: MacroDef = MacroDef {
    name: "pair_paren",
    steps: &[Text("()"), Tap(usage::LEFT)],
};

pub static PAIR_BRACE: MacroDef = MacroDef {
    name: "pair_brace",
    steps: &[Text("{}"), Tap(usage::LEFT)],
};

pub static PAIR_BRACKET: MacroDef = MacroDef {
    name: "pair_bracket",
    steps: &[Text("[]"), Tap(usage::LEFT)],
};

pub static PAIR_ANGLE: MacroDef = MacroDef {
    name: "pair_angle",
    steps: &[Text("<>"), Tap(usage::LEFT)],
};

pub static PAIR_SQUOTE: MacroDef = MacroDef {
    name: "pair_squote",
    steps: &[Text("''"), Tap(usage::LEFT)],
};

pub static PAIR_DQUOTE: MacroDef = MacroDef {
    name: "pair_dquote",
    steps: &[Text("\"\""), Tap(usage::LEFT)],
};

pub static BASE: &[(u8, Action)] = &[
    (pad::Q, Key(usage::Q)),
    (pad::W, Key(usage::W)),
    (pad::E, Key(usage::E)),
    (pad::R, Key(usage::R)),
    (pad::T, Key(usage::T)),
    (pad::Y, Key(usage::Y)),
    (pad::U, Key(usage::U)),
    (pad::I, Key(usage::I)),
    (pad::O, Key(usage::O)),
    (pad::P, Key(usage::P)),
    (pad::A, Key(usage::A)),
    (pad::S, Key(usage::S)),
    (pad::D, Key(usage::D)),
    (pad::F, Key(usage::F)),
    (pad::G, Key(usage::G)),
    (pad::H, Key(usage::H)),
    (pad::J, Key(usage::J)),
    (pad::K, Key(usage::K)),
    (pad::L, Key(usage::L)),
    (pad::Z, Key(usage::Z)),
    (pad::X, Key(usage::X)),
    (pad::C, Key(usage::C)),
    (pad::V, Key(usage::V)),
    (pad::B, Key(usage::B)),
    (pad::N, Key(usage::N)),
    (pad::M, Key(usage::M)),
    (pad::KEY_1, Key(usage::KEY_1)),
    (pad::KEY_2, Key(usage::KEY_2)),
    (pad::KEY_3, Key(usage::KEY_3)),
    (pad::KEY_4, Key(usage::KEY_4)),
    (pad::KEY_5, Key(usage::KEY_5)),
    (pad::KEY_6, Key(usage::KEY_6)),
    (pad::KEY_7, Key(usage::KEY_7)),
    (pad::KEY_8, Key(usage::KEY_8)),
    (pad::KEY_9, Key(usage::KEY_9)),
    (pad::KEY_0, Key(usage::KEY_0)),
    (pad::COMMA, Key(usage::COMMA)),
    (pad::PERIOD, Key(usage::DOT)),
    (pad::SPACE, Key(usage::SPACE)),
    (pad::ENTER, Key(usage::ENTER)),
    (pad::BACKSPACE, Key(usage::BACKSPACE)),
    (pad::LEFT, Key(usage::LEFT)),
    (pad::RIGHT, Key(usage::RIGHT)),
];

pub static GREEN: &[(u8, Action)] = &[
    (pad::D, Macro(&PAIR_BRACKET)),
    (pad::F, Macro(&PAIR_BRACE)),
    (pad::R, Macro(&PAIR_PAREN)),
    (pad::C, Macro(&PAIR_ANGLE)),
    (pad::COMMA, Macro(&PAIR_SQUOTE)),
    (pad::PERIOD, Macro(&PAIR_DQUOTE)),
    (pad::X, ModKey(hid_modifier::LEFT_SHIFT, usage::BACKSLASH)),
    (pad::Z, ModKey(hid_modifier::LEFT_SHIFT, usage::GRAVE)),
    (pad::G, Key(usage::GRAVE)),
    (pad::Y, ModKey(hid_modifier::LEFT_SHIFT, usage::MINUS)),
    // vim navigation on HJKL
    (pad::H, Key(usage::LEFT)),
    (pad::J, Key(usage::DOWN)),
    (pad::K, Key(usage::UP)),
    (pad::L, Key(usage::RIGHT)),
    (pad::N, Key(usage::MINUS)),
    (pad::V, Key(usage::BACKSLASH)),
    (pad::B, Key(usage::SLASH)),
    (pad::E, Key(usage::ESC)),
    (pad::T, Key(usage::TAB)),
    (pad::I, Key(usage::PAGE_UP)),
    (pad::U, Key(usage::HOME)),
    (pad::O, Key(usage::END)),
    (pad::P, Key(usage::PAGE_DOWN)),
];

pub static ORANGE: &[(u8, Action)] = &[
    (pad::KEY_1, Key(usage::F1)),
    (pad::KEY_2, Key(usage::F2)),
    (pad::KEY_3, Key(usage::F3)),
    (pad::KEY_4, Key(usage::F4)),
    (pad::KEY_5, Key(usage::F5)),
    (pad::KEY_6, Key(usage::F6)),
    (pad::KEY_7, Key(usage::F7)),
    (pad::KEY_8, Key(usage::F8)),
    (pad::KEY_9, Key(usage::F9)),
    (pad::KEY_0, Key(usage::F10)),
    (pad::P, Key(usage::F11)),
    (pad::O, Key(usage::F12)),
    (pad::Q, Key(usage::PRINT_SCREEN)),
    (pad::W, Key(usage::SCROLL_LOCK)),
    (pad::E, Key(usage::PAUSE)),
    (pad::A, Key(usage::INSERT)),
    (pad::S, Key(usage::DELETE)),
    (pad::I, Key(usage::UP)),
    (pad::K, Key(usage::DOWN)),
    (pad::J, Key(usage::LEFT)),
    (pad::L, Key(usage::RIGHT)),
    (pad::M, ModKey(hid_modifier::LEFT_SHIFT, usage::EQUAL)),
    (pad::N, Key(usage::EQUAL)),
    (pad::Z, Modifier(hid_modifier::LEFT_CTRL)),
    (pad::X, Modifier(hid_modifier::LEFT_ALT)),
    (pad::C, Modifier(hid_modifier::LEFT_GUI)),
];

pub static PEOPLE: &[(u8, Action)] = &[
    (pad::I, Key(usage::UP)),
    (pad::J, Key(usage::LEFT)),
    (pad::L, Key(usage::RIGHT)),
    (pad::COMMA, Key(usage::HOME)),
    (pad::PERIOD, Key(usage::END)),
    // word navigation
    (pad::H, ModKey(hid_modifier::LEFT_ALT, usage::LEFT)),
    (pad::U, ModKey(hid_modifier::LEFT_ALT, usage::RIGHT)),
    (pad::A, Modifier(hid_modifier::LEFT_ALT)),
    (pad::W, Modifier(hid_modifier::LEFT_GUI)),
    (pad::T, Macro(&TMUX_PREFIX)),
    (pad::K, Macro(&CLEAR)),
    (pad::G, Macro(&GIT_STATUS)),
    (pad::M, Macro(&GIT_COMMIT)),
    (pad::S, Macro(&SAVE)),
    (pad::B, Macro(&BUILD)),
    // clipboard
    (pad::C, ModKey(hid_modifier::LEFT_CTRL, usage::C)),
    (pad::X, ModKey(hid_modifier::LEFT_CTRL, usage::X)),
    (pad::V, ModKey(hid_modifier::LEFT_CTRL, usage::V)),
    (pad::Z, ModKey(hid_modifier::LEFT_CTRL, usage::Z)),
    (pad::Y, ModKey(hid_modifier::LEFT_CTRL, usage::Y)),
    (pad::Q, ModKey(hid_modifier::LEFT_ALT, usage::F4)),
    (pad::E, Key(usage::ESC)),
];

/// The stock four-layer arrangement.
pub fn default_layers() -> Layers {
    Layers::new(BASE, GREEN, ORANGE, PEOPLE)
}
