use crate::WindowHandle;

/// OS window queries and z-order placement.
pub trait WindowPlacement {
    /// Currently focused top-level window, or [`WindowHandle::NULL`].
    fn foreground_window(&self) -> WindowHandle;

    /// Place `window` in the topmost band without moving or resizing it.
    ///
    /// Returns what the OS reported. Callers treat the request as
    /// best-effort.
    fn set_topmost(&self, window: WindowHandle) -> bool;
}
