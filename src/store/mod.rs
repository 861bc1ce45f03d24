mod embedded;

use embedded::migrations;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio_postgres::{Client, NoTls, Row};

use crate::models::Note;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("note {0} not found")]
    NotFound(i64),
}

/// Owns the database connection and the `note` table. Constructed once at
/// startup and injected into the service; every operation is a single
/// statement, so concurrent requests need no locking here.
pub struct NoteStore {
    client: Client,
}

impl NoteStore {
    pub async fn connect(database_dsn: &str) -> Result<Self, StoreError> {
        let (client, con) = tokio_postgres::connect(database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }

    /// All notes, most recently written first.
    pub async fn list_all(&self) -> Result<Vec<Note>, StoreError> {
        let rows = self
            .client
            .query(
                "SELECT id, title, body, date FROM note ORDER BY date DESC",
                &[],
            )
            .await?;

        let mut notes = Vec::with_capacity(rows.len());
        for row in &rows {
            notes.push(decode_note(row)?);
        }

        Ok(notes)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Note, StoreError> {
        let row = self
            .client
            .query_opt(
                "SELECT id, title, body, date FROM note WHERE id = $1",
                &[&id],
            )
            .await?;

        match row {
            Some(row) => Ok(decode_note(&row)?),
            None => Err(StoreError::NotFound(id)),
        }
    }

    /// Inserts a new note; the table assigns the id and `date` is set to
    /// the database's clock.
    pub async fn create(
        &self,
        title: Option<String>,
        body: Option<String>,
    ) -> Result<Note, StoreError> {
        let row = self
            .client
            .query_one(
                "INSERT INTO note (title, body, date) VALUES ($1, $2, now()) \
                 RETURNING id, title, body, date",
                &[&title, &body],
            )
            .await?;

        Ok(decode_note(&row)?)
    }

    /// Overwrites title and body and advances `date`. Missing ids fail
    /// with [`StoreError::NotFound`], matching `get_by_id` and `delete`.
    pub async fn update(
        &self,
        id: i64,
        title: Option<String>,
        body: Option<String>,
    ) -> Result<Note, StoreError> {
        let row = self
            .client
            .query_opt(
                "UPDATE note SET title = $1, body = $2, date = now() WHERE id = $3 \
                 RETURNING id, title, body, date",
                &[&title, &body, &id],
            )
            .await?;

        match row {
            Some(row) => Ok(decode_note(&row)?),
            None => Err(StoreError::NotFound(id)),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let rows = self
            .client
            .execute("DELETE FROM note WHERE id = $1", &[&id])
            .await?;

        if rows == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }
}

// Column-by-column decode so a missing or mistyped column surfaces as an
// explicit error instead of an implicit cast.
fn decode_note(row: &Row) -> Result<Note, tokio_postgres::Error> {
    Ok(Note {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        date: row.try_get::<_, DateTime<Utc>>("date")?,
    })
}
