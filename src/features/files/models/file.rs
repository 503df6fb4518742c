use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the `files` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FileRecord {
    pub id: i32,
    pub filename: String,
    pub key: String,
    /// Declared byte size as sent by the client, never checked against the object
    pub size: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Fields supplied by the client when a record is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFile {
    pub filename: String,
    pub key: String,
    pub size: String,
}
