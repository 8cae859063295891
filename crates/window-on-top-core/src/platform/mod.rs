//! Platform implementations of the hotkey and window-placement seams.

pub mod windows;
