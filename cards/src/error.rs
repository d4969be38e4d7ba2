//! Error taxonomy shared by the browser client and the CLI.

/// A submit payload could not be built from the form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A numeric field holds text that is not a non-negative integer.
    #[error("`{field}` must be a non-negative integer (got {value:?})")]
    InvalidNumber { field: &'static str, value: String },
}

/// Any failure the operator should be told about.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// Connection failure, timeout, or non-success HTTP status.
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not a card.
    #[error("could not decode response: {0}")]
    Decode(String),
    /// The form could not be turned into a card.
    #[error("invalid card: {0}")]
    Validation(#[from] ValidationError),
    /// Navigate or submit was requested before any card was loaded.
    #[error("no card is loaded yet")]
    NoCurrentCard,
}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
