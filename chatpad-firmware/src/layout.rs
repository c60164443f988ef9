//! Output actions and modifier-selected layer resolution.

use crate::state::ModifierTracker;

/// One step of a macro body. Usage codes are HID keyboard usages; `Text` is
/// typed out by the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroStep {
    Press(u8),
    Release(u8),
    Tap(u8),
    Text(&'static str),
}

/// A named macro body. Pure data; the HID sink interprets the steps.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacroDef {
    pub name: &'static str,
    pub steps: &'static [MacroStep],
}

/// The action a raw key code resolves to. Opaque to the core: the HID sink
/// only needs press/release to be matched and ordering-preserving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Plain HID usage.
    Key(u8),
    /// Usage combined with a held HID modifier mask, e.g. Ctrl+C.
    ModKey(u8, u8),
    /// Bare HID modifier mask held for as long as the key is down.
    Modifier(u8),
    /// Macro handle.
    Macro(&'static MacroDef),
}

/// A read-only raw-code-to-action table. Tables are small (at most a few
/// dozen entries) so lookup is a linear scan.
pub type LayerTable = &'static [(u8, Action)];

/// Holds the four layer tables and picks one per resolution from the
/// current modifier state.
pub struct Layers {
    base: LayerTable,
    green: LayerTable,
    orange: LayerTable,
    people: LayerTable,
}

impl Layers {
    pub fn new(base: LayerTable, green: LayerTable, orange: LayerTable, people: LayerTable) -> Self {
        Self {
            base,
            green,
            orange,
            people,
        }
    }

    /// First match wins: People mode, then Orange, then Green, then base.
    /// Evaluated on every call; modifier changes switch layers mid-stream.
    fn select(&self, modifiers: &ModifierTracker) -> LayerTable {
        if modifiers.people_active() {
            self.people
        } else if modifiers.orange_active() {
            self.orange
        } else if modifiers.green_active() {
            self.green
        } else {
            self.base
        }
    }

    /// Resolves a raw code under the active layer. Unbound codes are not an
    /// error; they resolve to `None` and are ignored by the caller.
    pub fn resolve(&self, raw_code: u8, modifiers: &ModifierTracker) -> Option<Action> {
        self.select(modifiers)
            .iter()
            .find(|(code, _)| *code == raw_code)
            .map(|(_, action)| *action)
    }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod test;
