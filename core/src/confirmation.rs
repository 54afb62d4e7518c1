//! Confirmation reader
//!
//! Reads the persisted record once per view. Missing or unreadable data is
//! the "not submitted yet" state, never an error.

use serde_json::{Map, Value};
use std::fmt;

use crate::ports::KeyValueStore;
use crate::record::FORM_DATA_KEY;

pub const FORM_ROUTE: &str = "/";
pub const CONFIRMATION_ROUTE: &str = "/thank-you";

pub const EMPTY_HEADING: &str = "You have not submitted form yet";
pub const EMPTY_LINK: &str = "Fill out the form";
pub const FILLED_HEADING: &str = "Thank you for submitting the form!";
pub const FILLED_SUBHEADING: &str = "Your latest submitted data:";
pub const FILLED_LINK: &str = "Fill out the form again";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationView {
    Empty,
    /// Stored entries in stored order
    Filled(Vec<(String, String)>),
}

impl ConfirmationView {
    pub fn heading(&self) -> &'static str {
        match self {
            ConfirmationView::Empty => EMPTY_HEADING,
            ConfirmationView::Filled(_) => FILLED_HEADING,
        }
    }

    pub fn link_label(&self) -> &'static str {
        match self {
            ConfirmationView::Empty => EMPTY_LINK,
            ConfirmationView::Filled(_) => FILLED_LINK,
        }
    }

    pub fn link_href(&self) -> &'static str {
        FORM_ROUTE
    }

    /// One `"{key}: {value}"` line per entry
    pub fn lines(&self) -> Vec<String> {
        match self {
            ConfirmationView::Empty => Vec::new(),
            ConfirmationView::Filled(entries) => entries
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .collect(),
        }
    }
}

impl fmt::Display for ConfirmationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading())?;
        if let ConfirmationView::Filled(_) = self {
            writeln!(f, "{}", FILLED_SUBHEADING)?;
            for line in self.lines() {
                writeln!(f, "  {}", line)?;
            }
        }
        write!(f, "{} ({})", self.link_label(), self.link_href())
    }
}

pub fn read_confirmation<S: KeyValueStore + ?Sized>(store: &S) -> ConfirmationView {
    let raw = match store.get(FORM_DATA_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return ConfirmationView::Empty,
        Err(e) => {
            tracing::warn!("could not read submitted data: {}", e);
            return ConfirmationView::Empty;
        }
    };

    match serde_json::from_str::<Map<String, Value>>(&raw) {
        Ok(map) => ConfirmationView::Filled(
            map.into_iter()
                .map(|(key, value)| {
                    let text = match value {
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    (key, text)
                })
                .collect(),
        ),
        Err(e) => {
            tracing::warn!("ignoring malformed submitted data: {}", e);
            ConfirmationView::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;

    #[test]
    fn test_no_record_is_empty_state() {
        let store = InMemoryStore::new();
        let view = read_confirmation(&store);

        assert_eq!(view, ConfirmationView::Empty);
        assert_eq!(view.heading(), "You have not submitted form yet");
        assert_eq!(view.link_label(), "Fill out the form");
        assert_eq!(view.link_href(), "/");
        assert!(view.lines().is_empty());
    }

    #[test]
    fn test_record_lines_in_stored_order() {
        let store = InMemoryStore::new();
        store
            .set(
                FORM_DATA_KEY,
                r#"{"Name":"John Doe","Email":"john@example.com","GitHub Repo URL":"https://github.com/johndoe","Level":"Junior"}"#,
            )
            .unwrap();

        let view = read_confirmation(&store);
        assert_eq!(view.heading(), "Thank you for submitting the form!");
        assert_eq!(
            view.lines(),
            vec![
                "Name: John Doe",
                "Email: john@example.com",
                "GitHub Repo URL: https://github.com/johndoe",
                "Level: Junior",
            ]
        );
        assert_eq!(view.link_label(), "Fill out the form again");
    }

    #[test]
    fn test_malformed_record_is_empty_state() {
        let store = InMemoryStore::new();
        store.set(FORM_DATA_KEY, "{not json").unwrap();
        assert_eq!(read_confirmation(&store), ConfirmationView::Empty);

        store.set(FORM_DATA_KEY, "null").unwrap();
        assert_eq!(read_confirmation(&store), ConfirmationView::Empty);
    }

    #[test]
    fn test_non_string_values_rendered_as_json() {
        let store = InMemoryStore::new();
        store.set(FORM_DATA_KEY, r#"{"Attempts":2,"Name":"A"}"#).unwrap();

        let view = read_confirmation(&store);
        assert_eq!(view.lines(), vec!["Attempts: 2", "Name: A"]);
    }

    #[test]
    fn test_display_renders_full_view() {
        let view = ConfirmationView::Filled(vec![("Name".to_string(), "Test".to_string())]);
        let text = view.to_string();

        assert!(text.starts_with("Thank you for submitting the form!\n"));
        assert!(text.contains("Your latest submitted data:"));
        assert!(text.contains("  Name: Test\n"));
        assert!(text.ends_with("Fill out the form again (/)"));
    }
}
