use chrono::{DateTime, Utc};

/// A single memo as stored in the `note` table. `id` is assigned by the
/// store and never reused; `date` reflects the most recent write.
#[derive(Debug)]
pub struct Note {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    pub date: DateTime<Utc>,
}
