//! Window On Top: pin the focused window above all others with a global hotkey.

#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

#[cfg(any(target_os = "windows", test))]
mod app;
mod config;
mod error;
mod logging;
#[cfg(target_os = "windows")]
mod shell_event;
#[cfg(target_os = "windows")]
mod tray_manager;

pub(crate) use error::{AppError, Result as AppResult};

#[cfg(target_os = "windows")]
pub(crate) use {app::App, shell_event::ShellEvent, tray_manager::TrayManager};

use crate::config::{Config, LoggingConfig};

use tracing::error;

/// Application entry point.
fn main() {
    let config = Config::load();

    let default_logging = LoggingConfig::default();
    let _log_guard = logging::init(config.as_ref().map_or(&default_logging, |c| &c.logging));

    let config = match config {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let (modifiers, key) = match config.hotkey.combo() {
        Ok(combo) => combo,
        Err(e) => {
            error!("Invalid hotkey configuration: {:?}", e);
            std::process::exit(1);
        }
    };

    #[cfg(target_os = "windows")]
    run(config.hotkey.binding, modifiers, key);

    #[cfg(not(target_os = "windows"))]
    {
        error!(
            hotkey = %format!("{}+{}", modifiers, key),
            "Window On Top needs the Win32 hotkey and window APIs; this platform is not supported"
        );
        std::process::exit(1);
    }
}

/// Run the tray shell and the single-threaded event loop. Never returns.
#[cfg(target_os = "windows")]
fn run(
    shortcut: String,
    modifiers: window_on_top_core::ModifierSet,
    key: window_on_top_core::KeyCode,
) {
    use tao::{
        event::{Event, StartCause},
        event_loop::{ControlFlow, EventLoopBuilder},
    };
    use tray_icon::menu::MenuEvent;

    let event_loop = EventLoopBuilder::<ShellEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    MenuEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(ShellEvent::Menu(event));
    }));

    // TrayIcon is !Send; it stays on this thread and moves into App at Init.
    let mut tray_manager = match TrayManager::new(&shortcut) {
        Ok(tm) => Some(tm),
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    let mut app: Option<App<window_on_top_core::Win32HotkeyChannel, TrayManager>> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                let Some(tray_manager) = tray_manager.take() else {
                    return;
                };

                // The hidden window is created on the loop thread so tao's
                // message pump dispatches WM_HOTKEY to it.
                match App::start(modifiers, key, tray_manager) {
                    Ok(started) => app = Some(started),
                    Err(e) => {
                        error!("Failed to start: {:?}", e);
                        std::process::exit(1);
                    }
                }
            }
            Event::UserEvent(shell_event) => {
                let exit = app
                    .as_mut()
                    .is_some_and(|running| running.handle_shell_event(shell_event));
                if exit {
                    app = None;
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            }
            _ => {}
        }
    });
}
