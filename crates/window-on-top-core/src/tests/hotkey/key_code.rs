use crate::KeyCode;

/// WHAT: Letters and digits map to their ASCII virtual-key codes
/// WHY: Win32 VK codes for A-Z and 0-9 equal the uppercase ASCII values
#[test]
fn given_letters_and_digits_when_parsing_then_ascii_vk() {
    assert_eq!(KeyCode::from_name("O"), Some(KeyCode::new(0x4F)));
    assert_eq!(KeyCode::from_name("o"), Some(KeyCode::new(0x4F)));
    assert_eq!(KeyCode::from_name("7"), Some(KeyCode::new(0x37)));
    assert_eq!(KeyCode::from_name("-"), None);
}

/// WHAT: Function keys F1-F24 are accepted, F25 is not
/// WHY: Win32 defines VK_F1 through VK_F24 only
#[test]
fn given_function_keys_when_parsing_then_f1_based_codes() {
    assert_eq!(KeyCode::from_name("F1"), Some(KeyCode::new(0x70)));
    assert_eq!(KeyCode::from_name("f12"), Some(KeyCode::new(0x7B)));
    assert_eq!(KeyCode::from_name("F24"), Some(KeyCode::new(0x87)));
    assert_eq!(KeyCode::from_name("F25"), None);
    assert_eq!(KeyCode::from_name("F0"), None);
}

/// WHAT: Named keys and aliases resolve, unknown names do not
/// WHY: Bindings may use navigation and editing keys
#[test]
fn given_named_keys_when_parsing_then_known_codes() {
    assert_eq!(KeyCode::from_name("Space"), Some(KeyCode::new(0x20)));
    assert_eq!(KeyCode::from_name("return"), Some(KeyCode::new(0x0D)));
    assert_eq!(KeyCode::from_name("Esc"), Some(KeyCode::new(0x1B)));
    assert_eq!(KeyCode::from_name("del"), Some(KeyCode::new(0x2E)));
    assert_eq!(KeyCode::from_name("pageup"), Some(KeyCode::new(0x21)));
    assert_eq!(KeyCode::from_name("Banana"), None);
}

/// WHAT: Display gives canonical names and hex for unnamed codes
/// WHY: Parsed keys must print back in a form the parser accepts
#[test]
fn given_key_codes_when_formatting_then_canonical_names() {
    assert_eq!(KeyCode::new(0x4F).to_string(), "O");
    assert_eq!(KeyCode::new(0x74).to_string(), "F5");
    assert_eq!(KeyCode::new(0x2E).to_string(), "Delete");
    assert_eq!(KeyCode::new(0xBA).to_string(), "0xBA");

    for name in ["O", "F5", "Delete", "PageDown", "9"] {
        let key = KeyCode::from_name(name);
        assert_eq!(key.map(|k| k.to_string()).as_deref(), Some(name));
    }
}
