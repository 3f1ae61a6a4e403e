use type_tour::TourError;
use type_tour::enums::{Color, Color2, Color3, ThemeSwitch};

#[test]
fn test_reverse_lookup_of_blue() {
    assert_eq!(Color::Blue.value(), 2);
    assert_eq!(Color::name_of(2), Some("Blue"));
}

#[test]
fn test_numeric_members_are_contiguous() {
    for (offset, (name, member)) in Color::MEMBERS.iter().enumerate() {
        assert_eq!(member.value(), offset as i32);
        assert_eq!(member.name(), *name);
    }
    for (offset, (_, member)) in Color2::MEMBERS.iter().enumerate() {
        assert_eq!(member.value(), offset as i32 + 1);
    }
}

#[test]
fn test_unknown_value_is_rejected() {
    let err = Color::try_from(7i32).unwrap_err();
    assert!(matches!(err, TourError::UnknownMember { enumeration: "Color", .. }));
}

#[test]
fn test_string_coded_colors() {
    assert_eq!(Color3::Red.to_string(), "#ff0000");
    assert_eq!(Color3::Green.code(), "#00ff00");
    assert_eq!(Color3::Blue.code(), "#0000ff");
}

#[test]
fn test_theme_switch_roundtrip() {
    let json = serde_json::to_string(&ThemeSwitch::Dark).unwrap();
    assert_eq!(json, "\"dark\"");
    assert!(serde_json::from_str::<ThemeSwitch>("\"dim\"").is_err());
}
