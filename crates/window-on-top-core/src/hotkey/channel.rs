use crate::{CoreResult, KeyCode, ModifierSet};

/// Process-wide OS hotkey channel bound to one hidden receiving handle.
///
/// Opening a channel allocates the handle and wires it to a
/// [`HotkeyDispatcher`](crate::HotkeyDispatcher); that step fails with
/// [`HotkeyError::PlatformError`](crate::HotkeyError::PlatformError).
/// The handle must stay valid until [`destroy`](Self::destroy) is called.
pub trait HotkeyChannel {
    /// Bind `id` to the combination against the receiving handle.
    ///
    /// Fails with [`HotkeyError::RegistrationError`](crate::HotkeyError::RegistrationError)
    /// when the OS refuses the combination.
    fn register(&mut self, id: i32, modifiers: ModifierSet, key: KeyCode) -> CoreResult<()>;

    /// Release `id`. Returns `false` when the OS reports a failure.
    fn unregister(&mut self, id: i32) -> bool;

    /// Destroy the receiving handle. Called once, after every unregister.
    fn destroy(&mut self);
}
