//! `/`-separated display encoding for list-valued card fields.
//!
//! There is no escaping: an element containing `/` reads back as two
//! elements. The backend vocabularies (colors, attributes, subtypes) never
//! contain a slash.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

/// Separator used between list elements in a single text field.
pub const LIST_SEPARATOR: char = '/';

/// Join list elements for display. An empty list renders as `""`.
#[must_use]
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push(LIST_SEPARATOR);
        }
        out.push_str(item.as_ref());
    }
    out
}

/// Split a display string back into elements. `""` reads back as an empty
/// list; every other input splits on each separator, keeping empty segments.
#[must_use]
pub fn split_list(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(LIST_SEPARATOR).map(ToOwned::to_owned).collect()
}
