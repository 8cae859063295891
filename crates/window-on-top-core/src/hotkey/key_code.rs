use std::fmt;

/// Named keys outside the contiguous letter, digit and function-key ranges.
const NAMED_KEYS: &[(&str, u16)] = &[
    ("Backspace", 0x08),
    ("Tab", 0x09),
    ("Enter", 0x0D),
    ("Pause", 0x13),
    ("Escape", 0x1B),
    ("Space", 0x20),
    ("PageUp", 0x21),
    ("PageDown", 0x22),
    ("End", 0x23),
    ("Home", 0x24),
    ("Left", 0x25),
    ("Up", 0x26),
    ("Right", 0x27),
    ("Down", 0x28),
    ("PrintScreen", 0x2C),
    ("Insert", 0x2D),
    ("Delete", 0x2E),
];

const VK_F1: u16 = 0x70;
const FUNCTION_KEY_COUNT: u16 = 24;

/// Virtual-key code of the non-modifier part of a hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(u16);

impl KeyCode {
    /// Wrap a raw virtual-key code.
    pub const fn new(vk: u16) -> Self {
        Self(vk)
    }

    /// Raw virtual-key code.
    pub const fn vk(self) -> u16 {
        self.0
    }

    /// Parse a key name such as `O`, `7`, `F5`, `Space` or `PageUp`.
    ///
    /// Matching is case-insensitive. `Return`, `Esc` and `Del` are accepted
    /// as aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();

        let mut chars = name.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return ch
                .is_ascii_alphanumeric()
                .then(|| Self(ch.to_ascii_uppercase() as u16));
        }

        let upper = name.to_ascii_uppercase();
        if let Some(Ok(number)) = upper.strip_prefix('F').map(str::parse::<u16>) {
            return (1..=FUNCTION_KEY_COUNT)
                .contains(&number)
                .then(|| Self(VK_F1 + number - 1));
        }

        let canonical = match upper.as_str() {
            "RETURN" => "Enter",
            "ESC" => "Escape",
            "DEL" => "Delete",
            _ => name,
        };

        NAMED_KEYS
            .iter()
            .find(|(key_name, _)| key_name.eq_ignore_ascii_case(canonical))
            .map(|&(_, vk)| Self(vk))
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vk = self.0;
        match vk {
            0x30..=0x39 | 0x41..=0x5A => write!(f, "{}", vk as u8 as char),
            _ if (VK_F1..VK_F1 + FUNCTION_KEY_COUNT).contains(&vk) => {
                write!(f, "F{}", vk - VK_F1 + 1)
            }
            _ => match NAMED_KEYS.iter().find(|&&(_, code)| code == vk) {
                Some((name, _)) => f.write_str(name),
                None => write!(f, "0x{:02X}", vk),
            },
        }
    }
}
