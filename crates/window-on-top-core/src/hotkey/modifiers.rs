use std::{fmt, ops::BitOr};

/// Set of modifier keys, stored with the Win32 `MOD_*` bit values.
///
/// The raw bits are kept as delivered by the OS so a decoded event compares
/// equal to the value that was registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierSet(u16);

impl ModifierSet {
    /// Alt key (`MOD_ALT`).
    pub const ALT: Self = Self(0x0001);
    /// Control key (`MOD_CONTROL`).
    pub const CONTROL: Self = Self(0x0002);
    /// Shift key (`MOD_SHIFT`).
    pub const SHIFT: Self = Self(0x0004);
    /// Windows / Command key (`MOD_WIN`).
    pub const META: Self = Self(0x0008);

    /// No modifiers.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set from raw bits without masking.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Raw bit value.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// True when every modifier in `other` is also in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when no bit is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Parse a single modifier name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ctrl" | "control" => Some(Self::CONTROL),
            "alt" => Some(Self::ALT),
            "shift" => Some(Self::SHIFT),
            "win" | "meta" | "super" | "cmd" => Some(Self::META),
            _ => None,
        }
    }
}

impl BitOr for ModifierSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::CONTROL, "Ctrl"),
            (Self::ALT, "Alt"),
            (Self::SHIFT, "Shift"),
            (Self::META, "Win"),
        ];

        let mut first = true;
        for (modifier, name) in names {
            if self.contains(modifier) {
                if !first {
                    f.write_str("+")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }

        Ok(())
    }
}
