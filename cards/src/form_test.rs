use super::*;

fn luffy() -> Card {
    serde_json::from_value(serde_json::json!({
        "id": "c1",
        "name": "Luffy",
        "cost_life": 3,
        "power": null,
        "counter": 5,
        "effect": null,
        "trigger": "On Play",
        "attributes": ["Straw Hat"],
        "colors": ["Red"],
        "subtypes": []
    }))
    .expect("card")
}

fn id(raw: &str) -> CardId {
    CardId::new(raw).expect("id")
}

// =============================================================
// render
// =============================================================

#[test]
fn render_luffy_scenario() {
    let mut form = CardForm::default();
    form.render(&luffy());

    assert!(!form.power.checked);
    assert!(!form.power.enabled());
    assert_eq!(form.power.value, "0");

    assert!(form.counter.enabled());
    assert_eq!(form.counter.value, "5");

    assert!(!form.effect.enabled());
    assert_eq!(form.effect.value, "");

    assert!(form.trigger.enabled());
    assert_eq!(form.trigger.value, "On Play");

    assert_eq!(form.attributes, "Straw Hat");
    assert_eq!(form.colors, "Red");
    assert_eq!(form.subtypes, "");
    assert_eq!(form.name, "Luffy");
    assert_eq!(form.cost_life, "3");
}

#[test]
fn render_sets_preview_from_card_id() {
    let mut form = CardForm::default();
    form.render(&luffy());
    assert_eq!(form.preview, "/images/c1");
}

#[test]
fn render_present_power_enables_and_fills_input() {
    for power in [0_u32, 1000, 7000] {
        let mut card = luffy();
        card.power = Stat::Present(power);
        let mut form = CardForm::default();
        form.render(&card);
        assert!(form.power.enabled());
        assert_eq!(form.power.value, power.to_string());
    }
}

#[test]
fn render_absent_stat_resets_previously_typed_value() {
    let mut form = CardForm::default();
    form.toggle(StatKind::Effect, true);
    form.set_stat_value(StatKind::Effect, "typed by hand");
    form.toggle(StatKind::Power, true);
    form.set_stat_value(StatKind::Power, "9000");

    form.render(&luffy());

    assert_eq!(form.effect.value, "");
    assert_eq!(form.power.value, "0");
}

#[test]
fn render_leaves_kind_untouched() {
    let mut form = CardForm::default();
    form.set_text(TextField::Kind, "Character");
    form.render(&luffy());
    assert_eq!(form.kind, "Character");
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_off_and_on_preserves_typed_value() {
    let mut form = CardForm::default();
    form.render(&luffy());
    form.set_stat_value(StatKind::Counter, "2000");

    form.toggle(StatKind::Counter, false);
    assert!(!form.counter.enabled());
    assert_eq!(form.counter.value, "2000");

    form.toggle(StatKind::Counter, true);
    assert!(form.counter.enabled());
    assert_eq!(form.counter.value, "2000");
}

#[test]
fn set_stat_value_ignored_while_disabled() {
    let mut form = CardForm::default();
    form.render(&luffy());
    form.set_stat_value(StatKind::Power, "5000");
    assert_eq!(form.power.value, "0");
}

// =============================================================
// read
// =============================================================

#[test]
fn read_without_edits_reproduces_loaded_card() {
    let card = luffy();
    let mut form = CardForm::default();
    form.render(&card);

    let read = form.read(&card.id).expect("read");
    assert_eq!(read, Card { ty: String::new(), ..card });
}

#[test]
fn read_carries_kind_from_selector() {
    let mut form = CardForm::default();
    form.render(&luffy());
    form.set_text(TextField::Kind, "Leader");
    assert_eq!(form.read(&id("c1")).expect("read").ty, "Leader");
}

#[test]
fn read_unchecked_stats_are_absent_even_with_text() {
    let mut form = CardForm::default();
    form.render(&luffy());
    form.set_stat_value(StatKind::Trigger, "Draw 1");
    form.toggle(StatKind::Trigger, false);

    let card = form.read(&id("c1")).expect("read");
    assert_eq!(card.trigger, Stat::Absent);
}

#[test]
fn read_splits_list_fields() {
    let mut form = CardForm::default();
    form.render(&luffy());
    form.set_text(TextField::Subtypes, "Straw Hat Crew/Supernovas");
    let card = form.read(&id("c1")).expect("read");
    assert_eq!(card.subtypes, vec!["Straw Hat Crew", "Supernovas"]);
}

#[test]
fn read_keeps_blank_name_as_typed() {
    let mut form = CardForm::default();
    form.render(&luffy());
    form.set_text(TextField::Name, "  ");
    assert_eq!(form.read(&id("c1")).expect("read").name, "  ");
}

#[test]
fn read_rejects_non_numeric_cost() {
    let mut form = CardForm::default();
    form.render(&luffy());
    form.set_text(TextField::CostLife, "three");
    assert_eq!(
        form.read(&id("c1")),
        Err(ValidationError::InvalidNumber { field: "cost_life", value: "three".to_owned() })
    );
}

#[test]
fn read_rejects_bad_checked_counter_but_not_unchecked() {
    let mut form = CardForm::default();
    form.render(&luffy());
    form.set_stat_value(StatKind::Counter, "-1");
    assert!(matches!(
        form.read(&id("c1")),
        Err(ValidationError::InvalidNumber { field: "counter", .. })
    ));

    form.toggle(StatKind::Counter, false);
    assert_eq!(form.read(&id("c1")).expect("read").counter, Stat::Absent);
}

#[test]
fn read_trims_whitespace_around_numbers() {
    let mut form = CardForm::default();
    form.render(&luffy());
    form.set_text(TextField::CostLife, " 4 ");
    assert_eq!(form.read(&id("c1")).expect("read").cost_life, 4);
}

// =============================================================
// field metadata
// =============================================================

#[test]
fn stat_element_ids_match_page_layout() {
    let ids: Vec<(&str, &str)> = StatKind::ALL
        .into_iter()
        .map(|kind| (kind.checkbox_id(), kind.input_id()))
        .collect();
    assert_eq!(
        ids,
        vec![
            ("haspower", "power"),
            ("hascounter", "counter"),
            ("haseffect", "effect"),
            ("hastrigger", "trigger"),
        ]
    );
}

#[test]
fn text_field_names_round_trip() {
    for field in TextField::ALL {
        assert_eq!(TextField::from_name(field.name()), Some(field));
    }
    assert_eq!(TextField::Name.element_id(), "cardname");
    assert_eq!(TextField::Kind.element_id(), "cardkind");
    assert!(TextField::from_name("nope").is_none());
}

#[test]
fn stat_kind_from_name() {
    assert_eq!(StatKind::from_name("trigger"), Some(StatKind::Trigger));
    assert_eq!(StatKind::from_name("power"), Some(StatKind::Power));
    assert!(StatKind::from_name("life").is_none());
}

#[test]
fn closed_fields_expose_their_vocabulary() {
    assert_eq!(TextField::Colors.vocabulary(), Some(COLORS));
    assert_eq!(TextField::Attributes.vocabulary(), Some(ATTRIBUTES));
    assert_eq!(TextField::Kind.vocabulary(), Some(CARD_KINDS));
    assert!(TextField::Subtypes.vocabulary().is_none());
    assert!(TextField::Name.vocabulary().is_none());
}
