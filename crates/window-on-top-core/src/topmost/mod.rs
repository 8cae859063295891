mod controller;
mod placement;
mod window_handle;

pub use {controller::TopmostController, placement::WindowPlacement, window_handle::WindowHandle};
