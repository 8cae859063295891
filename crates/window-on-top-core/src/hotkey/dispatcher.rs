use crate::HotkeyEvent;

use std::{cell::RefCell, fmt, rc::Rc};

use tracing::{trace, warn};

type Subscriber = Box<dyn FnMut(HotkeyEvent)>;

/// Subscriber list shared by the registry and its native receiving handle.
///
/// Not `Send`: delivery happens on the thread that owns the message loop,
/// synchronously, in subscription order. Nothing is queued.
#[derive(Clone, Default)]
pub struct HotkeyDispatcher {
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl HotkeyDispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subscriber. Ignored (with a warning) when called from inside a
    /// delivery.
    pub(crate) fn subscribe<F>(&self, callback: F)
    where
        F: FnMut(HotkeyEvent) + 'static,
    {
        match self.subscribers.try_borrow_mut() {
            Ok(mut subscribers) => subscribers.push(Box::new(callback)),
            Err(_) => warn!("Subscriber added during hotkey delivery was dropped"),
        }
    }

    /// Decode a native payload and hand the event to every subscriber.
    pub fn deliver(&self, payload: u32) {
        let event = HotkeyEvent::from_payload(payload);

        let Ok(mut subscribers) = self.subscribers.try_borrow_mut() else {
            warn!(%event, "Re-entrant hotkey delivery dropped");
            return;
        };

        trace!(%event, subscribers = subscribers.len(), "Delivering hotkey event");

        for subscriber in subscribers.iter_mut() {
            subscriber(event);
        }
    }

    /// Number of registered subscribers, or 0 while a delivery is running.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.try_borrow().map_or(0, |s| s.len())
    }
}

impl fmt::Debug for HotkeyDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotkeyDispatcher")
            .field(
                "subscribers",
                &self.subscribers.try_borrow().map(|s| s.len()).ok(),
            )
            .finish()
    }
}
