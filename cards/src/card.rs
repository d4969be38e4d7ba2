//! Card record as exchanged with the backend.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

/// Card kinds offered by the kind selector. Free text is still accepted.
pub const CARD_KINDS: &[&str] = &["Leader", "Character", "Stage", "Event"];

/// Colors the backend recognizes. Matching is exact and case-sensitive.
pub const COLORS: &[&str] = &["Red", "Green", "Blue", "Purple", "Black", "Yellow"];

/// Attributes the backend recognizes. Matching is exact and case-sensitive.
pub const ATTRIBUTES: &[&str] = &["Ranged", "Slash", "Special", "Strike", "Wisdom"];

/// Opaque, non-empty card identifier (e.g. `"EB01-002"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId(String);

impl CardId {
    /// Wrap a raw id. Returns `None` for an empty or all-whitespace string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() { None } else { Some(Self(raw)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CardId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "card id must not be empty".to_owned())
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.0
    }
}

/// An optional card stat. Serialized as the bare value, or `null` when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Stat<T> {
    Present(T),
    #[default]
    Absent,
}

impl<T> Stat<T> {
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    #[must_use]
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Stat<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl<T: Serialize> Serialize for Stat<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Stat<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// A single card as served by `/start`, `/prev/{id}` and `/next/{id}` and
/// accepted by `/submit`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    /// Card kind. Only ever set by the operator; loading a card leaves the
    /// kind selector alone.
    #[serde(default)]
    pub ty: String,
    #[serde(default)]
    pub subtypes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub cost_life: u32,
    #[serde(default)]
    pub power: Stat<u32>,
    #[serde(default)]
    pub counter: Stat<u32>,
    #[serde(default)]
    pub effect: Stat<String>,
    #[serde(default)]
    pub trigger: Stat<String>,
}

impl Card {
    /// Colors and attributes outside the backend vocabulary, rendered as
    /// ``colors `red` `` for display. Empty when everything is recognized.
    #[must_use]
    pub fn unlisted_terms(&self) -> Vec<String> {
        let colors = unlisted("colors", &self.colors, COLORS);
        let attributes = unlisted("attributes", &self.attributes, ATTRIBUTES);
        colors.chain(attributes).collect()
    }
}

fn unlisted<'a>(
    field: &'static str,
    values: &'a [String],
    vocabulary: &'static [&'static str],
) -> impl Iterator<Item = String> + 'a {
    values
        .iter()
        .filter(move |value| !vocabulary.contains(&value.as_str()))
        .map(move |value| format!("{field} `{value}`"))
}

fn number_or_numeric_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text
            .trim()
            .parse::<u32>()
            .map_err(|_| de::Error::custom(format!("invalid cost_life {text:?}"))),
    }
}
