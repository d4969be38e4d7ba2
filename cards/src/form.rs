//! Form projection of a card.
//!
//! DESIGN
//! ======
//! The card model says whether a stat exists (`Stat`). The form says what the
//! operator sees: a presence checkbox plus an input that is only enabled while
//! the box is checked. Everything here is plain text so it can mirror DOM
//! inputs one to one; numbers are only parsed when a card is read back.

use crate::card::{ATTRIBUTES, CARD_KINDS, COLORS, Card, CardId, Stat};
use crate::endpoint::Endpoint;
use crate::error::ValidationError;
use crate::list::{join_list, split_list};

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Element id of the card preview image.
pub const PREVIEW_ELEMENT_ID: &str = "cardPreview";

/// The four optional stats, each shown as a checkbox + input pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatKind {
    Power,
    Counter,
    Effect,
    Trigger,
}

impl StatKind {
    pub const ALL: [Self; 4] = [Self::Power, Self::Counter, Self::Effect, Self::Trigger];

    /// Field name in the card JSON, also the input's element id.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Counter => "counter",
            Self::Effect => "effect",
            Self::Trigger => "trigger",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Power => "Power",
            Self::Counter => "Counter",
            Self::Effect => "Effect",
            Self::Trigger => "Trigger",
        }
    }

    /// Element id of the presence checkbox.
    #[must_use]
    pub fn checkbox_id(self) -> &'static str {
        match self {
            Self::Power => "haspower",
            Self::Counter => "hascounter",
            Self::Effect => "haseffect",
            Self::Trigger => "hastrigger",
        }
    }

    #[must_use]
    pub fn input_id(self) -> &'static str {
        self.name()
    }

    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Power | Self::Counter)
    }

    /// Value an absent stat's input is reset to when a card is rendered.
    #[must_use]
    pub fn default_value(self) -> &'static str {
        if self.is_numeric() { "0" } else { "" }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Plain text fields of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    CostLife,
    Kind,
    Attributes,
    Colors,
    Subtypes,
}

impl TextField {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::CostLife,
        Self::Kind,
        Self::Attributes,
        Self::Colors,
        Self::Subtypes,
    ];

    /// Short name used by the CLI `set` command.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CostLife => "cost_life",
            Self::Kind => "kind",
            Self::Attributes => "attributes",
            Self::Colors => "colors",
            Self::Subtypes => "subtypes",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::CostLife => "Cost / Life",
            Self::Kind => "Kind",
            Self::Attributes => "Attributes",
            Self::Colors => "Colors",
            Self::Subtypes => "Subtypes",
        }
    }

    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Name => "cardname",
            Self::CostLife => "cost_life",
            Self::Kind => "cardkind",
            Self::Attributes => "attributes",
            Self::Colors => "colors",
            Self::Subtypes => "subtypes",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Values the backend recognizes for this field, if it has a closed set.
    #[must_use]
    pub fn vocabulary(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Kind => Some(CARD_KINDS),
            Self::Colors => Some(COLORS),
            Self::Attributes => Some(ATTRIBUTES),
            Self::Name | Self::CostLife | Self::Subtypes => None,
        }
    }
}

/// Presence checkbox and its paired input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatField {
    pub checked: bool,
    pub value: String,
}

impl StatField {
    fn unchecked(kind: StatKind) -> Self {
        Self {
            checked: false,
            value: kind.default_value().to_owned(),
        }
    }

    /// The input accepts edits only while the presence box is checked.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.checked
    }
}

/// Everything the operator can see and edit for one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardForm {
    /// Preview image path, relative to the backend base URL.
    pub preview: String,
    pub name: String,
    pub cost_life: String,
    pub kind: String,
    pub attributes: String,
    pub colors: String,
    pub subtypes: String,
    pub power: StatField,
    pub counter: StatField,
    pub effect: StatField,
    pub trigger: StatField,
}

impl Default for CardForm {
    fn default() -> Self {
        Self {
            preview: String::new(),
            name: String::new(),
            cost_life: String::new(),
            kind: String::new(),
            attributes: String::new(),
            colors: String::new(),
            subtypes: String::new(),
            power: StatField::unchecked(StatKind::Power),
            counter: StatField::unchecked(StatKind::Counter),
            effect: StatField::unchecked(StatKind::Effect),
            trigger: StatField::unchecked(StatKind::Trigger),
        }
    }
}

impl CardForm {
    /// Overwrite the form with `card`. Absent stats are unchecked and their
    /// inputs reset to the default; the kind selector is left untouched.
    pub fn render(&mut self, card: &Card) {
        self.preview = Endpoint::Image(card.id.clone()).path();
        self.name.clone_from(&card.name);
        self.cost_life = card.cost_life.to_string();

        render_stat(&mut self.power, StatKind::Power, card.power.as_option().map(ToString::to_string));
        render_stat(&mut self.counter, StatKind::Counter, card.counter.as_option().map(ToString::to_string));
        render_stat(&mut self.effect, StatKind::Effect, card.effect.as_option().cloned());
        render_stat(&mut self.trigger, StatKind::Trigger, card.trigger.as_option().cloned());

        self.attributes = join_list(&card.attributes);
        self.colors = join_list(&card.colors);
        self.subtypes = join_list(&card.subtypes);
    }

    /// Check or uncheck a presence box. The typed value is kept either way.
    pub fn toggle(&mut self, kind: StatKind, checked: bool) {
        self.stat_mut(kind).checked = checked;
    }

    /// Operator edit of a stat input. Ignored while the input is disabled.
    pub fn set_stat_value(&mut self, kind: StatKind, value: impl Into<String>) {
        let field = self.stat_mut(kind);
        if field.enabled() {
            field.value = value.into();
        }
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        *self.text_mut(field) = value.into();
    }

    #[must_use]
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::CostLife => &self.cost_life,
            TextField::Kind => &self.kind,
            TextField::Attributes => &self.attributes,
            TextField::Colors => &self.colors,
            TextField::Subtypes => &self.subtypes,
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::CostLife => &mut self.cost_life,
            TextField::Kind => &mut self.kind,
            TextField::Attributes => &mut self.attributes,
            TextField::Colors => &mut self.colors,
            TextField::Subtypes => &mut self.subtypes,
        }
    }

    #[must_use]
    pub fn stat(&self, kind: StatKind) -> &StatField {
        match kind {
            StatKind::Power => &self.power,
            StatKind::Counter => &self.counter,
            StatKind::Effect => &self.effect,
            StatKind::Trigger => &self.trigger,
        }
    }

    fn stat_mut(&mut self, kind: StatKind) -> &mut StatField {
        match kind {
            StatKind::Power => &mut self.power,
            StatKind::Counter => &mut self.counter,
            StatKind::Effect => &mut self.effect,
            StatKind::Trigger => &mut self.trigger,
        }
    }

    /// Rebuild a card for `id` from the current field values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidNumber`] when cost/life or a checked
    /// numeric stat does not parse.
    pub fn read(&self, id: &CardId) -> Result<Card, ValidationError> {
        Ok(Card {
            id: id.clone(),
            name: self.name.clone(),
            ty: self.kind.clone(),
            subtypes: split_list(&self.subtypes),
            colors: split_list(&self.colors),
            attributes: split_list(&self.attributes),
            cost_life: parse_count("cost_life", &self.cost_life)?,
            power: self.read_numeric(StatKind::Power)?,
            counter: self.read_numeric(StatKind::Counter)?,
            effect: self.read_text(StatKind::Effect),
            trigger: self.read_text(StatKind::Trigger),
        })
    }

    fn read_numeric(&self, kind: StatKind) -> Result<Stat<u32>, ValidationError> {
        let field = self.stat(kind);
        if !field.checked {
            return Ok(Stat::Absent);
        }
        parse_count(kind.name(), &field.value).map(Stat::Present)
    }

    fn read_text(&self, kind: StatKind) -> Stat<String> {
        let field = self.stat(kind);
        if field.checked { Stat::Present(field.value.clone()) } else { Stat::Absent }
    }
}

fn render_stat(field: &mut StatField, kind: StatKind, value: Option<String>) {
    match value {
        Some(value) => {
            field.checked = true;
            field.value = value;
        }
        None => {
            field.checked = false;
            field.value = kind.default_value().to_owned();
        }
    }
}

fn parse_count(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    raw.trim().parse::<u32>().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: raw.to_owned(),
    })
}
