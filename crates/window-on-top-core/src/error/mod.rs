use error_location::ErrorLocation;
use thiserror::Error;

/// Hotkey subsystem errors with source location tracking.
#[derive(Error, Debug)]
pub enum HotkeyError {
    /// The hidden message-receiving handle could not be created.
    #[error("Platform error: {reason} {location}")]
    PlatformError {
        /// Description of the platform failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The OS refused to bind a key combination.
    #[error("Failed to register hotkey {combo} (id {id}): {reason} {location}")]
    RegistrationError {
        /// Id that was assigned to the failed registration.
        id: i32,
        /// Human-readable key combination, e.g. `Ctrl+Shift+O`.
        combo: String,
        /// Reason reported by the OS.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The registry was already disposed and accepts no new bindings.
    #[error("Hotkey registry already disposed {location}")]
    RegistryDisposed {
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`HotkeyError`].
pub type Result<T> = std::result::Result<T, HotkeyError>;
