use crate::{
    CoreResult, HotkeyChannel, HotkeyDispatcher, HotkeyError, HotkeyEvent, KeyCode, ModifierSet,
};

use std::panic::{self, AssertUnwindSafe, Location};

use error_location::ErrorLocation;
use tracing::{debug, error, instrument};
use windows::{
    Win32::{
        Foundation::{
            ERROR_CLASS_ALREADY_EXISTS, GetLastError, HINSTANCE, HWND, LPARAM, LRESULT, WPARAM,
        },
        System::LibraryLoader::GetModuleHandleW,
        UI::{
            Input::KeyboardAndMouse::{HOT_KEY_MODIFIERS, RegisterHotKey, UnregisterHotKey},
            WindowsAndMessaging::{
                CreateWindowExW, DefWindowProcW, DestroyWindow, GWLP_USERDATA, HWND_MESSAGE,
                RegisterClassW, WINDOW_EX_STYLE, WINDOW_STYLE, WM_HOTKEY, WNDCLASSW,
            },
        },
    },
    core::{PCWSTR, w},
};

#[cfg(target_pointer_width = "64")]
use windows::Win32::UI::WindowsAndMessaging::{GetWindowLongPtrW, SetWindowLongPtrW};
#[cfg(target_pointer_width = "32")]
use windows::Win32::UI::WindowsAndMessaging::{GetWindowLongW, SetWindowLongW};

const CLASS_NAME: PCWSTR = w!("WindowOnTopHotkeySink");

// The *LongPtr* entry points only exist on 64-bit targets; 32-bit user32
// exposes the same slot through the *Long* functions.

#[cfg(target_pointer_width = "64")]
unsafe fn read_user_data(hwnd: HWND) -> isize {
    // SAFETY: caller passes a window of this thread.
    unsafe { GetWindowLongPtrW(hwnd, GWLP_USERDATA) }
}

#[cfg(target_pointer_width = "64")]
unsafe fn write_user_data(hwnd: HWND, value: isize) {
    // SAFETY: caller passes a window of this thread.
    unsafe { SetWindowLongPtrW(hwnd, GWLP_USERDATA, value) };
}

#[cfg(target_pointer_width = "32")]
unsafe fn read_user_data(hwnd: HWND) -> isize {
    // SAFETY: caller passes a window of this thread.
    unsafe { GetWindowLongW(hwnd, GWLP_USERDATA) as isize }
}

#[cfg(target_pointer_width = "32")]
unsafe fn write_user_data(hwnd: HWND, value: isize) {
    // SAFETY: caller passes a window of this thread.
    unsafe { SetWindowLongW(hwnd, GWLP_USERDATA, value as i32) };
}

/// [`HotkeyChannel`] backed by a Win32 message-only window.
///
/// The window lives on the thread that created it; `WM_HOTKEY` reaches it
/// through that thread's message pump and is forwarded to the dispatcher
/// stored in the window's user data.
#[derive(Debug)]
pub struct Win32HotkeyChannel {
    hwnd: Option<HWND>,
    dispatcher: Option<Box<HotkeyDispatcher>>,
}

impl Win32HotkeyChannel {
    /// Register the window class (once per process) and create the
    /// message-only window.
    #[track_caller]
    #[instrument(skip(dispatcher))]
    pub fn open(dispatcher: HotkeyDispatcher) -> CoreResult<Self> {
        // SAFETY: a null module name returns the handle of the running executable.
        let instance: HINSTANCE = unsafe { GetModuleHandleW(None) }
            .map_err(|e| HotkeyError::PlatformError {
                reason: format!("Failed to get module handle: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .into();

        let window_class = WNDCLASSW {
            lpfnWndProc: Some(hotkey_window_proc),
            hInstance: instance,
            lpszClassName: CLASS_NAME,
            ..Default::default()
        };

        // SAFETY: the class struct points at static data only.
        let atom = unsafe { RegisterClassW(&window_class) };
        if atom == 0 {
            // SAFETY: reads the calling thread's last-error value.
            let err = unsafe { GetLastError() };
            if err != ERROR_CLASS_ALREADY_EXISTS {
                return Err(HotkeyError::PlatformError {
                    reason: format!("Failed to register window class: {:?}", err),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        // SAFETY: HWND_MESSAGE parent makes this a message-only window; all
        // pointers are static or null.
        let hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                CLASS_NAME,
                w!("Window On Top hotkeys"),
                WINDOW_STYLE::default(),
                0,
                0,
                0,
                0,
                Some(HWND_MESSAGE),
                None,
                Some(instance),
                None,
            )
        }
        .map_err(|e| HotkeyError::PlatformError {
            reason: format!("Failed to create message-only window: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let dispatcher = Box::new(dispatcher);
        let dispatcher_ptr: *const HotkeyDispatcher = &*dispatcher;

        // SAFETY: hwnd was just created on this thread. The box outlives the
        // window: destroy() clears the pointer before freeing it.
        unsafe { write_user_data(hwnd, dispatcher_ptr as isize) };

        debug!(hwnd = ?hwnd.0, "Message-only hotkey window created");

        Ok(Self {
            hwnd: Some(hwnd),
            dispatcher: Some(dispatcher),
        })
    }
}

#[cfg(test)]
impl Win32HotkeyChannel {
    /// The receiving window, until [`HotkeyChannel::destroy`] runs.
    pub(crate) fn hwnd(&self) -> Option<HWND> {
        self.hwnd
    }
}

impl HotkeyChannel for Win32HotkeyChannel {
    #[track_caller]
    fn register(&mut self, id: i32, modifiers: ModifierSet, key: KeyCode) -> CoreResult<()> {
        let combo = HotkeyEvent { modifiers, key }.to_string();

        let Some(hwnd) = self.hwnd else {
            return Err(HotkeyError::RegistrationError {
                id,
                combo,
                reason: "receiving window already destroyed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        // SAFETY: hwnd is a live window owned by this channel.
        unsafe {
            RegisterHotKey(
                Some(hwnd),
                id,
                HOT_KEY_MODIFIERS(u32::from(modifiers.bits())),
                u32::from(key.vk()),
            )
        }
        .map_err(|e| HotkeyError::RegistrationError {
            id,
            combo,
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn unregister(&mut self, id: i32) -> bool {
        let Some(hwnd) = self.hwnd else {
            return false;
        };

        // SAFETY: hwnd is a live window owned by this channel.
        unsafe { UnregisterHotKey(Some(hwnd), id) }.is_ok()
    }

    fn destroy(&mut self) {
        if let Some(hwnd) = self.hwnd.take() {
            // SAFETY: hwnd is owned by this channel and destroyed exactly once.
            unsafe {
                write_user_data(hwnd, 0);
                if let Err(e) = DestroyWindow(hwnd) {
                    debug!(error = %e, "DestroyWindow failed");
                }
            }
            debug!("Message-only hotkey window destroyed");
        }
        self.dispatcher = None;
    }
}

impl Drop for Win32HotkeyChannel {
    fn drop(&mut self) {
        self.destroy();
    }
}

unsafe extern "system" fn hotkey_window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if msg != WM_HOTKEY {
        // SAFETY: default handling for every other message.
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    }

    // SAFETY: user data is either 0 or the dispatcher box set in open().
    let dispatcher = unsafe { read_user_data(hwnd) } as *const HotkeyDispatcher;
    if dispatcher.is_null() {
        return LRESULT(0);
    }

    // lParam: high word = virtual key, low word = modifiers.
    let payload = lparam.0 as u32;
    let delivered = panic::catch_unwind(AssertUnwindSafe(|| {
        // SAFETY: non-null pointer to a dispatcher that outlives the window.
        unsafe { &*dispatcher }.deliver(payload)
    }));

    if let Err(e) = delivered {
        error!(error = ?e, "Panic in hotkey subscriber");
    }

    LRESULT(0)
}
