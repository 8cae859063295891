use std::fmt;

/// Opaque OS identifier of a top-level window.
///
/// Obtained fresh on every trigger; the foreground window can change between
/// two presses of the hotkey.
///
/// The default is [`WindowHandle::NULL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle(isize);

impl WindowHandle {
    /// The null handle: no window.
    pub const NULL: Self = Self(0);

    /// Wrap a raw handle value.
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    /// Raw handle value.
    pub const fn as_raw(self) -> isize {
        self.0
    }

    /// True for the null handle.
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
