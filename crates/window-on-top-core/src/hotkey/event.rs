use crate::{KeyCode, ModifierSet};

use std::fmt;

/// A decoded "hotkey fired" notification.
///
/// Transient: built once per native notification and handed to each
/// subscriber, never stored by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyEvent {
    /// Modifier bitmask that was held.
    pub modifiers: ModifierSet,
    /// Key that was pressed.
    pub key: KeyCode,
}

impl HotkeyEvent {
    /// Decode the 32-bit `WM_HOTKEY` payload.
    ///
    /// High word is the virtual-key code, low word the modifier bitmask.
    pub const fn from_payload(payload: u32) -> Self {
        Self {
            modifiers: ModifierSet::from_bits((payload & 0xFFFF) as u16),
            key: KeyCode::new(((payload >> 16) & 0xFFFF) as u16),
        }
    }

    /// Pack the event back into the `WM_HOTKEY` payload layout.
    pub const fn to_payload(self) -> u32 {
        ((self.key.vk() as u32) << 16) | self.modifiers.bits() as u32
    }
}

impl fmt::Display for HotkeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Unknown modifier bits render as nothing.
        let modifiers = self.modifiers.to_string();
        if modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", modifiers, self.key)
        }
    }
}
