use super::*;

#[test]
fn hint_lists_colors_with_separator() {
    assert_eq!(
        hint_text(TextField::Colors, false).as_deref(),
        Some("one or more of Red/Green/Blue/Purple/Black/Yellow")
    );
}

#[test]
fn hint_lists_attributes() {
    let hint = hint_text(TextField::Attributes, false).expect("hint");
    assert!(hint.ends_with("Ranged/Slash/Special/Strike/Wisdom"));
}

#[test]
fn no_hint_for_open_fields_or_datalist_fields() {
    assert!(hint_text(TextField::Subtypes, false).is_none());
    assert!(hint_text(TextField::Name, false).is_none());
    assert!(hint_text(TextField::Kind, true).is_none());
}
