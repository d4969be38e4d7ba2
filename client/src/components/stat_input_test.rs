use super::*;

#[test]
fn numeric_stats_use_number_inputs() {
    assert_eq!(input_type(StatKind::Power), "number");
    assert_eq!(input_type(StatKind::Counter), "number");
}

#[test]
fn text_stats_use_text_inputs() {
    assert_eq!(input_type(StatKind::Effect), "text");
    assert_eq!(input_type(StatKind::Trigger), "text");
}

#[test]
fn disabled_input_gets_modifier_class() {
    assert_eq!(input_class(true), "card-form__input");
    assert_eq!(input_class(false), "card-form__input card-form__input--disabled");
}
