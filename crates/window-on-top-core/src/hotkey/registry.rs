//! Global hotkey registry.
//!
//! Owns one hidden receiving handle (through a [`HotkeyChannel`]), hands out
//! sequential binding ids and republishes decoded notifications to its
//! subscribers. Teardown unregisters every allocated id, highest first, and
//! only then destroys the handle.

use crate::{
    CoreResult, HotkeyBinding, HotkeyChannel, HotkeyDispatcher, HotkeyError, HotkeyEvent, KeyCode,
    ModifierSet,
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Global hotkey registry over a platform [`HotkeyChannel`].
#[derive(Debug)]
pub struct HotkeyRegistry<C: HotkeyChannel> {
    channel: C,
    dispatcher: HotkeyDispatcher,
    bindings: Vec<HotkeyBinding>,
    last_id: i32,
    disposed: bool,
}

#[cfg(target_os = "windows")]
impl HotkeyRegistry<crate::Win32HotkeyChannel> {
    /// Create a registry backed by a Win32 message-only window.
    ///
    /// Must be called on the thread that pumps the message loop.
    #[track_caller]
    pub fn create() -> CoreResult<Self> {
        Self::with_channel(crate::Win32HotkeyChannel::open)
    }
}

impl<C: HotkeyChannel> HotkeyRegistry<C> {
    /// Create a registry, opening its channel with a fresh dispatcher.
    ///
    /// The channel (and its receiving handle) exists before any binding can
    /// be requested.
    #[track_caller]
    #[instrument(skip(open))]
    pub fn with_channel<F>(open: F) -> CoreResult<Self>
    where
        F: FnOnce(HotkeyDispatcher) -> CoreResult<C>,
    {
        let dispatcher = HotkeyDispatcher::new();
        let channel = open(dispatcher.clone())?;

        debug!("Hotkey receiving handle created");

        Ok(Self {
            channel,
            dispatcher,
            bindings: Vec::new(),
            last_id: 0,
            disposed: false,
        })
    }

    /// Bind a key combination and return its binding.
    ///
    /// The id is consumed even when the OS refuses the combination, so the
    /// next successful registration still gets the next sequential id.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn register_hotkey(
        &mut self,
        modifiers: ModifierSet,
        key: KeyCode,
    ) -> CoreResult<HotkeyBinding> {
        if self.disposed {
            return Err(HotkeyError::RegistryDisposed {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.last_id += 1;
        let id = self.last_id;

        self.channel.register(id, modifiers, key)?;

        let binding = HotkeyBinding { id, modifiers, key };
        self.bindings.push(binding);

        info!(id, hotkey = %binding.combo(), "Global hotkey registered");

        Ok(binding)
    }

    /// Subscribe to decoded hotkey events.
    ///
    /// The callback runs synchronously on the message-loop thread and must
    /// not block.
    pub fn on_key_pressed<F>(&self, callback: F)
    where
        F: FnMut(HotkeyEvent) + 'static,
    {
        self.dispatcher.subscribe(callback);
    }

    /// Bindings that were accepted by the OS, in registration order.
    pub fn bindings(&self) -> &[HotkeyBinding] {
        &self.bindings
    }

    /// True once [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Unregister every allocated id from the highest down to 1, then
    /// destroy the receiving handle. Later calls do nothing.
    #[instrument(skip(self))]
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        for id in (1..=self.last_id).rev() {
            if !self.channel.unregister(id) {
                debug!(id, "Hotkey id was not registered with the OS");
            }
        }
        self.bindings.clear();

        self.channel.destroy();

        info!(released = self.last_id, "Hotkey registry disposed");
    }
}

impl<C: HotkeyChannel> Drop for HotkeyRegistry<C> {
    fn drop(&mut self) {
        self.dispose();
    }
}
