use crate::AppResult;

use tracing::{debug, error, info, instrument};
use window_on_top_core::{
    HotkeyChannel, HotkeyRegistry, KeyCode, ModifierSet, TopmostController, WindowPlacement,
};

#[cfg(target_os = "windows")]
use crate::{ShellEvent, TrayManager};
#[cfg(target_os = "windows")]
use window_on_top_core::{Win32HotkeyChannel, Win32WindowPlacement};

/// The parts of the tray icon the application drives.
pub(crate) trait TrayShell {
    /// True when `menu_id` is the Exit item.
    fn is_exit_item(&self, menu_id: &str) -> bool;

    /// Hide the icon before the process exits.
    fn hide(&mut self) -> AppResult<()>;
}

/// Running application: the hotkey registry and the tray icon.
///
/// Lives on the UI thread. `WM_HOTKEY` reaches the registry's hidden window
/// through `tao`'s message pump, so the topmost action runs synchronously
/// inside the event loop.
pub(crate) struct App<C: HotkeyChannel, T: TrayShell> {
    registry: HotkeyRegistry<C>,
    tray: T,
}

#[cfg(target_os = "windows")]
impl App<Win32HotkeyChannel, TrayManager> {
    /// Create the hidden receiving window, register the hotkey and wire it to
    /// the topmost action.
    ///
    /// Must be called on the event-loop thread.
    #[track_caller]
    pub(crate) fn start(
        modifiers: ModifierSet,
        key: KeyCode,
        tray_manager: TrayManager,
    ) -> AppResult<Self> {
        let registry = HotkeyRegistry::create()?;
        Self::with_registry(registry, modifiers, key, Win32WindowPlacement, tray_manager)
    }

    /// Handle an event forwarded into the loop. Returns `true` when the
    /// application should exit.
    #[instrument(skip(self))]
    pub(crate) fn handle_shell_event(&mut self, event: ShellEvent) -> bool {
        match event {
            ShellEvent::Menu(menu_event) => self.handle_menu(menu_event.id.0.as_str()),
        }
    }
}

impl<C: HotkeyChannel, T: TrayShell> App<C, T> {
    /// Register the binding on `registry` and subscribe a topmost controller
    /// over `placement` to it.
    #[track_caller]
    #[instrument(skip(registry, placement, tray))]
    pub(crate) fn with_registry<P>(
        mut registry: HotkeyRegistry<C>,
        modifiers: ModifierSet,
        key: KeyCode,
        placement: P,
        tray: T,
    ) -> AppResult<Self>
    where
        P: WindowPlacement + 'static,
    {
        let binding = registry.register_hotkey(modifiers, key)?;

        let controller = TopmostController::new(placement);
        registry.on_key_pressed(move |event| {
            debug!(%event, "Hotkey pressed");
            controller.on_trigger();
        });

        info!(hotkey = %binding.combo(), "Window On Top running");

        Ok(Self { registry, tray })
    }

    /// Handle a tray menu click. Returns `true` when the application should
    /// exit.
    pub(crate) fn handle_menu(&mut self, menu_id: &str) -> bool {
        if !self.tray.is_exit_item(menu_id) {
            return false;
        }

        info!("Exit requested from tray menu");
        self.shutdown();
        true
    }

    /// Unregister every hotkey, destroy the hidden window and hide the icon.
    #[instrument(skip(self))]
    pub(crate) fn shutdown(&mut self) {
        self.registry.dispose();

        if let Err(e) = self.tray.hide() {
            error!(error = ?e, "Failed to hide tray icon");
        }

        info!("Window On Top shut down");
    }
}
