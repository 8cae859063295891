use crate::{HotkeyEvent, KeyCode, ModifierSet};

/// A key combination bound to the registry's receiving handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyBinding {
    /// Sequential id, starting at 1, never reused within a registry.
    pub id: i32,
    /// Modifier keys of the combination.
    pub modifiers: ModifierSet,
    /// Key of the combination.
    pub key: KeyCode,
}

impl HotkeyBinding {
    /// True when `event` was produced by this binding's combination.
    pub fn matches(&self, event: &HotkeyEvent) -> bool {
        self.modifiers == event.modifiers && self.key == event.key
    }

    /// Human-readable combination, e.g. `Ctrl+Shift+O`.
    pub fn combo(&self) -> String {
        HotkeyEvent {
            modifiers: self.modifiers,
            key: self.key,
        }
        .to_string()
    }
}
