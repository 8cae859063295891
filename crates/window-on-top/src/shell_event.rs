use tray_icon::menu::MenuEvent;

/// Events injected into the `tao` loop from outside it.
///
/// The tray menu reports clicks through a global handler; forwarding them as
/// user events keeps all handling on the UI thread.
#[derive(Debug)]
pub enum ShellEvent {
    /// A tray menu item was clicked.
    Menu(MenuEvent),
}
