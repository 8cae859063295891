//! Win32 implementations:
//! - `hotkey_window`: message-only window receiving `WM_HOTKEY`
//! - `placement`: foreground-window query and `SetWindowPos`

mod hotkey_window;
mod placement;

pub use {hotkey_window::Win32HotkeyChannel, placement::Win32WindowPlacement};
