use crate::{AppError, AppResult, config::default_binding};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use window_on_top_core::{KeyCode, ModifierSet};

/// Global hotkey configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Key combination, e.g. `Ctrl+Shift+O`: modifiers and exactly one key.
    #[serde(default = "default_binding")]
    pub binding: String,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            binding: default_binding(),
        }
    }
}

impl HotkeyConfig {
    /// Parse [`binding`](Self::binding) into the modifiers and key to register.
    #[track_caller]
    pub fn combo(&self) -> AppResult<(ModifierSet, KeyCode)> {
        let invalid = |reason: String| AppError::InvalidHotkey {
            binding: self.binding.clone(),
            reason,
            location: ErrorLocation::from(Location::caller()),
        };

        let mut modifiers = ModifierSet::empty();
        let mut key = None;

        for part in self.binding.split('+').map(str::trim) {
            if part.is_empty() {
                return Err(invalid("empty key name".to_string()));
            }

            if let Some(modifier) = ModifierSet::from_name(part) {
                modifiers = modifiers | modifier;
                continue;
            }

            let code = KeyCode::from_name(part)
                .ok_or_else(|| invalid(format!("unknown key '{}'", part)))?;

            if key.replace(code).is_some() {
                return Err(invalid("more than one non-modifier key".to_string()));
            }
        }

        let key = key.ok_or_else(|| invalid("no key after the modifiers".to_string()))?;

        Ok((modifiers, key))
    }
}
