mod binding;
mod channel;
mod dispatcher;
mod event;
mod key_code;
mod modifiers;
mod registry;

pub use {
    binding::HotkeyBinding, channel::HotkeyChannel, dispatcher::HotkeyDispatcher,
    event::HotkeyEvent, key_code::KeyCode, modifiers::ModifierSet, registry::HotkeyRegistry,
};
