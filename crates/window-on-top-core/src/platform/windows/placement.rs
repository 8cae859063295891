use crate::{WindowHandle, WindowPlacement};

use std::ffi::c_void;

use windows::Win32::{
    Foundation::HWND,
    UI::WindowsAndMessaging::{
        GetForegroundWindow, HWND_TOPMOST, SWP_NOMOVE, SWP_NOSIZE, SWP_SHOWWINDOW, SetWindowPos,
    },
};

/// [`WindowPlacement`] over `GetForegroundWindow` / `SetWindowPos`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32WindowPlacement;

impl WindowPlacement for Win32WindowPlacement {
    fn foreground_window(&self) -> WindowHandle {
        // SAFETY: no arguments; returns a null HWND when nothing has focus.
        let hwnd = unsafe { GetForegroundWindow() };
        WindowHandle::from_raw(hwnd.0 as isize)
    }

    fn set_topmost(&self, window: WindowHandle) -> bool {
        let hwnd = HWND(window.as_raw() as *mut c_void);

        // SAFETY: a stale or foreign HWND only makes the call fail.
        unsafe {
            SetWindowPos(
                hwnd,
                Some(HWND_TOPMOST),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_SHOWWINDOW,
            )
        }
        .is_ok()
    }
}
