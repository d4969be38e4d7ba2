//! Backend routes consumed by the editor.

use crate::card::CardId;

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Navigation direction relative to the current card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Prev => "prev",
            Self::Next => "next",
        }
    }
}

/// One backend route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /start`: the initial card.
    Start,
    /// `GET /prev/{id}`.
    Prev(CardId),
    /// `GET /next/{id}`.
    Next(CardId),
    /// `POST /submit` with a card body.
    Submit,
    /// `GET /images/{id}`: card preview image.
    Image(CardId),
}

impl Endpoint {
    #[must_use]
    pub fn navigate(direction: Direction, from: CardId) -> Self {
        match direction {
            Direction::Prev => Self::Prev(from),
            Direction::Next => Self::Next(from),
        }
    }

    /// HTTP method name.
    #[must_use]
    pub fn method(&self) -> &'static str {
        match self {
            Self::Submit => "POST",
            Self::Start | Self::Prev(_) | Self::Next(_) | Self::Image(_) => "GET",
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Start => "/start".to_owned(),
            Self::Prev(id) => format!("/prev/{id}"),
            Self::Next(id) => format!("/next/{id}"),
            Self::Submit => "/submit".to_owned(),
            Self::Image(id) => format!("/images/{id}"),
        }
    }

    /// Absolute URL under `base`. Trailing slashes on `base` are ignored.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}
