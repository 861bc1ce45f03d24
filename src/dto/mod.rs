use chrono::Local;
use serde::Deserialize;

use crate::models::Note;

/// Form payload of `POST /add`. Fields a browser leaves out are stored
/// as NULL.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteForm {
    /// Note title
    pub title: Option<String>,
    /// Note body
    pub body: Option<String>,
}

/// Form payload of `POST /edit`. The id travels as a hidden field.
#[derive(Debug, Clone, Deserialize)]
pub struct EditForm {
    /// Note ID
    pub id: i64,
    /// Note title
    pub title: Option<String>,
    /// Note body
    pub body: Option<String>,
}

/// Query parameters of `GET /edit` and `GET /delete`.
#[derive(Debug, Clone, Deserialize)]
pub struct IdParams {
    /// Note ID
    pub id: i64,
}

/// Render-ready copy of a note handed to the templates: NULL columns
/// become empty strings and the timestamp is formatted for display.
#[derive(Debug, Clone)]
pub struct NoteView {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub date: String,
}

impl NoteView {
    pub fn from_model(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone().unwrap_or_default(),
            body: note.body.clone().unwrap_or_default(),
            date: note
                .date
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn view_keeps_supplied_fields() {
        let note = Note {
            id: 7,
            title: Some("Groceries".to_string()),
            body: Some("Milk, eggs".to_string()),
            date: Utc::now(),
        };

        let view = NoteView::from_model(&note);
        assert_eq!(view.id, 7);
        assert_eq!(view.title, "Groceries");
        assert_eq!(view.body, "Milk, eggs");
        // "YYYY-mm-dd HH:MM:SS"
        assert_eq!(view.date.len(), 19);
    }

    #[test]
    fn view_maps_null_columns_to_empty_strings() {
        let note = Note {
            id: 1,
            title: None,
            body: None,
            date: Utc::now(),
        };

        let view = NoteView::from_model(&note);
        assert!(view.title.is_empty());
        assert!(view.body.is_empty());
    }
}
