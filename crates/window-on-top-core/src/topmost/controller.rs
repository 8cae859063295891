use crate::WindowPlacement;

use tracing::{instrument, trace};

/// Pins the foreground window on top whenever the hotkey fires.
///
/// Stateless: each trigger reads the foreground window again and issues one
/// placement request. Pinning an already-topmost window is harmless.
#[derive(Debug)]
pub struct TopmostController<P: WindowPlacement> {
    placement: P,
}

impl<P: WindowPlacement> TopmostController<P> {
    /// Create a controller over a placement backend.
    pub fn new(placement: P) -> Self {
        Self { placement }
    }

    /// React to one hotkey trigger.
    ///
    /// Skips the placement call when there is no foreground window. The
    /// placement result is ignored; pressing the hotkey again retries.
    #[instrument(skip(self))]
    pub fn on_trigger(&self) {
        let window = self.placement.foreground_window();
        if window.is_null() {
            trace!("No foreground window");
            return;
        }

        trace!(window = %window, "Pinning foreground window");
        let _ = self.placement.set_topmost(window);
    }

    /// Placement backend.
    pub fn placement(&self) -> &P {
        &self.placement
    }
}
