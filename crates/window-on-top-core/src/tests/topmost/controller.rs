use crate::{TopmostController, WindowHandle, tests::fakes::FakePlacement};

/// WHAT: A trigger pins the current foreground window
/// WHY: This is the single action the hotkey performs
#[test]
fn given_foreground_window_when_triggered_then_pinned() {
    // Given: Window 0x1234 has focus
    let placement = FakePlacement::default();
    *placement.foreground.borrow_mut() = WindowHandle::from_raw(0x1234);
    let controller = TopmostController::new(placement);

    // When: The hotkey fires
    controller.on_trigger();

    // Then: One placement request for that window
    assert_eq!(
        *controller.placement().placed.borrow(),
        vec![WindowHandle::from_raw(0x1234)]
    );
}

/// WHAT: Two triggers on the same window issue two identical requests
/// WHY: The action is idempotent and re-triggerable
#[test]
fn given_same_foreground_window_when_triggered_twice_then_two_identical_requests() {
    let placement = FakePlacement::default();
    *placement.foreground.borrow_mut() = WindowHandle::from_raw(0x42);
    let controller = TopmostController::new(placement);

    controller.on_trigger();
    controller.on_trigger();

    let placed = controller.placement().placed.borrow();
    assert_eq!(placed.len(), 2);
    assert_eq!(placed[0], placed[1]);
}

/// WHAT: No placement call when nothing has focus
/// WHY: A null handle must never reach SetWindowPos
#[test]
fn given_null_foreground_window_when_triggered_then_placement_skipped() {
    let controller = TopmostController::new(FakePlacement::default());

    controller.on_trigger();

    assert!(controller.placement().placed.borrow().is_empty());
}

/// WHAT: Placement failure is swallowed and the next trigger still tries
/// WHY: The action is best-effort; the user retries by pressing again
#[test]
fn given_placement_fails_when_triggered_then_no_error_and_retry_possible() {
    // Given: A backend whose placement always fails
    let placement = FakePlacement {
        fail: true,
        ..FakePlacement::default()
    };
    *placement.foreground.borrow_mut() = WindowHandle::from_raw(0x99);
    let controller = TopmostController::new(placement);

    // When: Triggering twice
    controller.on_trigger();
    controller.on_trigger();

    // Then: Both attempts were made
    assert_eq!(controller.placement().placed.borrow().len(), 2);
}

/// WHAT: The foreground window is read fresh on each trigger
/// WHY: Focus can move between two presses
#[test]
fn given_focus_changes_between_triggers_when_triggered_then_each_window_pinned() {
    let controller = TopmostController::new(FakePlacement::default());

    *controller.placement().foreground.borrow_mut() = WindowHandle::from_raw(1);
    controller.on_trigger();
    *controller.placement().foreground.borrow_mut() = WindowHandle::from_raw(2);
    controller.on_trigger();

    assert_eq!(
        *controller.placement().placed.borrow(),
        vec![WindowHandle::from_raw(1), WindowHandle::from_raw(2)]
    );
}
