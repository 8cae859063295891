use window_on_top_core::HotkeyError;

use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the window-on-top binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Hotkey subsystem error from window-on-top-core.
    #[error("Hotkey error: {source} {location}")]
    Hotkey {
        /// The underlying hotkey error.
        #[source]
        source: HotkeyError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// The configured key combination could not be parsed.
    #[error("Invalid hotkey '{binding}': {reason} {location}")]
    InvalidHotkey {
        /// The binding text from the configuration.
        binding: String,
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration loading or saving error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Tray icon or menu could not be created.
    #[cfg(target_os = "windows")]
    #[error("Tray error: {reason} {location}")]
    TrayError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Manual From<HotkeyError> with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<HotkeyError> for AppError {
    #[track_caller]
    fn from(source: HotkeyError) -> Self {
        AppError::Hotkey {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        AppError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
