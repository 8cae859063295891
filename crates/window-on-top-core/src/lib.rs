//! Window-On-Top Core Library
//!
//! Global hotkey registration and the "pin the focused window on top" action.
//! The OS is reached through two seams, [`HotkeyChannel`] and
//! [`WindowPlacement`]; Win32 implementations of both are provided on Windows.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(windows)]
//! # fn main() -> window_on_top_core::CoreResult<()> {
//! use window_on_top_core::{
//!     HotkeyRegistry, KeyCode, ModifierSet, TopmostController, Win32WindowPlacement,
//! };
//!
//! let mut registry = HotkeyRegistry::create()?;
//! registry.register_hotkey(ModifierSet::CONTROL | ModifierSet::SHIFT, KeyCode::new(0x4F))?;
//!
//! let controller = TopmostController::new(Win32WindowPlacement);
//! registry.on_key_pressed(move |_event| controller.on_trigger());
//!
//! // Pump the thread's message loop here; WM_HOTKEY is delivered to the registry.
//!
//! registry.dispose();
//! # Ok(())
//! # }
//! # #[cfg(not(windows))]
//! # fn main() {}
//! ```

mod error;
mod hotkey;
#[cfg(target_os = "windows")]
mod platform;
mod topmost;

pub use {
    error::{HotkeyError, Result as CoreResult},
    hotkey::{
        HotkeyBinding, HotkeyChannel, HotkeyDispatcher, HotkeyEvent, HotkeyRegistry, KeyCode,
        ModifierSet,
    },
    topmost::{TopmostController, WindowHandle, WindowPlacement},
};

#[cfg(target_os = "windows")]
pub use platform::windows::{Win32HotkeyChannel, Win32WindowPlacement};

#[cfg(test)]
mod tests;
