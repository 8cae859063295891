use crate::{
    HotkeyError, HotkeyEvent, HotkeyRegistry, KeyCode, ModifierSet,
    tests::fakes::{ChannelCall, FakeOs},
};

use std::{cell::RefCell, rc::Rc};

const KEY_O: KeyCode = KeyCode::new(0x4F);

fn ctrl_shift() -> ModifierSet {
    ModifierSet::CONTROL | ModifierSet::SHIFT
}

/// WHAT: Successful registrations get ids 1..N in call order
/// WHY: Ids are the handle used to unregister with the OS
#[test]
#[allow(clippy::unwrap_used)]
fn given_new_registry_when_registering_three_hotkeys_then_ids_are_sequential() {
    // Given: A registry over a fake OS channel
    let os = FakeOs::default();
    let mut registry = HotkeyRegistry::with_channel(os.opener()).unwrap();

    // When: Registering three combinations
    let first = registry.register_hotkey(ctrl_shift(), KEY_O).unwrap();
    let second = registry
        .register_hotkey(ModifierSet::ALT, KeyCode::new(0x50))
        .unwrap();
    let third = registry
        .register_hotkey(ModifierSet::META, KeyCode::new(0x70))
        .unwrap();

    // Then: Ids are 1, 2, 3 and each reached the OS with its own combination
    assert_eq!([first.id, second.id, third.id], [1, 2, 3]);
    assert_eq!(registry.bindings().len(), 3);
    assert_eq!(
        os.calls(),
        vec![
            ChannelCall::Register(1, ctrl_shift(), KEY_O),
            ChannelCall::Register(2, ModifierSet::ALT, KeyCode::new(0x50)),
            ChannelCall::Register(3, ModifierSet::META, KeyCode::new(0x70)),
        ]
    );
}

/// WHAT: Dispose unregisters ids highest-first, then destroys the handle once
/// WHY: The handle must outlive every binding registered against it
#[test]
#[allow(clippy::unwrap_used)]
fn given_three_bindings_when_disposing_then_unregisters_in_reverse_then_destroys() {
    // Given: Three registered bindings
    let os = FakeOs::default();
    let mut registry = HotkeyRegistry::with_channel(os.opener()).unwrap();
    for vk in [0x41, 0x42, 0x43] {
        registry
            .register_hotkey(ctrl_shift(), KeyCode::new(vk))
            .unwrap();
    }
    os.calls.borrow_mut().clear();

    // When: Disposing twice, then dropping
    registry.dispose();
    registry.dispose();
    drop(registry);

    // Then: 3, 2, 1 are released and the handle is destroyed exactly once
    assert_eq!(
        os.calls(),
        vec![
            ChannelCall::Unregister(3),
            ChannelCall::Unregister(2),
            ChannelCall::Unregister(1),
            ChannelCall::Destroy,
        ]
    );
}

/// WHAT: Dropping an undisposed registry disposes it
/// WHY: Global hotkeys must not outlive the process's registry
#[test]
#[allow(clippy::unwrap_used)]
fn given_registered_binding_when_registry_dropped_then_binding_released() {
    // Given: One registered binding
    let os = FakeOs::default();
    let mut registry = HotkeyRegistry::with_channel(os.opener()).unwrap();
    registry.register_hotkey(ctrl_shift(), KEY_O).unwrap();

    // When: Dropping without calling dispose
    drop(registry);

    // Then: The id is released before the handle goes away
    assert_eq!(
        os.calls()[1..],
        [ChannelCall::Unregister(1), ChannelCall::Destroy]
    );
}

/// WHAT: A refused combination yields RegistrationError and still consumes its id
/// WHY: Ids are never rolled back or reused within a registry
#[test]
#[allow(clippy::unwrap_used)]
fn given_combination_taken_when_registering_then_error_and_id_not_reused() {
    // Given: Ctrl+Shift+O already owned by another process
    let os = FakeOs::default();
    os.take(ctrl_shift(), KEY_O);
    let mut registry = HotkeyRegistry::with_channel(os.opener()).unwrap();

    // When: Registering the taken combination, then a free one
    let refused = registry.register_hotkey(ctrl_shift(), KEY_O);
    let accepted = registry.register_hotkey(ModifierSet::ALT, KEY_O).unwrap();

    // Then: The first fails with id 1, the second gets id 2
    assert!(matches!(
        refused,
        Err(HotkeyError::RegistrationError { id: 1, .. })
    ));
    assert_eq!(accepted.id, 2);
    assert_eq!(registry.bindings(), &[accepted]);
}

/// WHAT: Registering after dispose is rejected without touching the OS
/// WHY: The receiving handle no longer exists
#[test]
#[allow(clippy::unwrap_used)]
fn given_disposed_registry_when_registering_then_registry_disposed_error() {
    // Given: A disposed registry
    let os = FakeOs::default();
    let mut registry = HotkeyRegistry::with_channel(os.opener()).unwrap();
    registry.dispose();

    // When: Registering a hotkey
    let result = registry.register_hotkey(ctrl_shift(), KEY_O);

    // Then: RegistryDisposed is returned and nothing was registered
    assert!(matches!(result, Err(HotkeyError::RegistryDisposed { .. })));
    assert!(registry.is_disposed());
    assert_eq!(os.calls(), vec![ChannelCall::Destroy]);
}

/// WHAT: A failed channel open surfaces as PlatformError
/// WHY: Without a receiving handle the registry cannot work at all
#[test]
fn given_channel_open_fails_when_creating_registry_then_platform_error() {
    // Given: An opener that cannot create the handle
    let open = |_| -> crate::CoreResult<crate::tests::fakes::FakeChannel> {
        Err(HotkeyError::PlatformError {
            reason: "CreateWindowExW failed".to_string(),
            location: error_location::ErrorLocation::from(std::panic::Location::caller()),
        })
    };

    // When: Creating the registry
    let result = HotkeyRegistry::with_channel(open);

    // Then: PlatformError is propagated
    assert!(matches!(result, Err(HotkeyError::PlatformError { .. })));
}

/// WHAT: A native Ctrl+Shift+O payload reaches the subscriber once, decoded
/// WHY: Subscribers act on (modifiers, key) exactly as the OS reported them
#[test]
#[allow(clippy::unwrap_used)]
fn given_ctrl_shift_o_registered_when_os_fires_then_subscriber_gets_one_event() {
    // Given: Ctrl+Shift+O registered and one subscriber
    let os = FakeOs::default();
    let mut registry = HotkeyRegistry::with_channel(os.opener()).unwrap();
    registry.register_hotkey(ctrl_shift(), KEY_O).unwrap();

    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);
    registry.on_key_pressed(move |event| sink.borrow_mut().push(event));

    // When: The OS posts key 0x4F with modifiers Control|Shift (6)
    os.fire((0x4F << 16) | 6);

    // Then: Exactly one event with modifiers 6 and key 0x4F
    let received = received.borrow();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].modifiers.bits(), 6);
    assert_eq!(received[0].key.vk(), 0x4F);
    assert!(registry.bindings()[0].matches(&received[0]));
}

/// WHAT: Every subscriber is called, in subscription order
/// WHY: The registry republishes to all listeners synchronously
#[test]
#[allow(clippy::unwrap_used)]
fn given_two_subscribers_when_os_fires_then_both_called_in_order() {
    // Given: Two subscribers writing into one log
    let os = FakeOs::default();
    let registry = HotkeyRegistry::with_channel(os.opener()).unwrap();
    let log = Rc::new(RefCell::new(Vec::new()));
    for name in ["first", "second"] {
        let log = Rc::clone(&log);
        registry.on_key_pressed(move |_| log.borrow_mut().push(name));
    }

    // When: One notification arrives
    let event = HotkeyEvent {
        modifiers: ctrl_shift(),
        key: KEY_O,
    };
    os.fire(event.to_payload());

    // Then: Both ran, first before second
    assert_eq!(*log.borrow(), vec!["first", "second"]);
}
