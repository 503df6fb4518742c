use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::files::models::{FileRecord, NewFile};

/// Metadata store for uploaded files
///
/// Every operation touches at most one row. There is no update or delete.
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// All records, oldest upload first
    async fn list(&self) -> Result<Vec<FileRecord>>;

    /// Insert a record; the store assigns `id` and `uploaded_at`
    async fn create(&self, file: NewFile) -> Result<FileRecord>;

    /// Point lookup by primary key. `Ok(None)` when the id is unknown.
    async fn find_by_id(&self, id: i32) -> Result<Option<FileRecord>>;

    /// Cheap connectivity probe
    async fn ping(&self) -> Result<()>;
}

/// Postgres implementation backed by the shared pool
pub struct PgFileRepository {
    pool: PgPool,
}

impl PgFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileRepository for PgFileRepository {
    async fn list(&self) -> Result<Vec<FileRecord>> {
        sqlx::query_as::<_, FileRecord>(
            r#"
            SELECT id, filename, key, size, uploaded_at
            FROM files
            ORDER BY uploaded_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list files: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn create(&self, file: NewFile) -> Result<FileRecord> {
        sqlx::query_as::<_, FileRecord>(
            r#"
            INSERT INTO files (filename, key, size)
            VALUES ($1, $2, $3)
            RETURNING id, filename, key, size, uploaded_at
            "#,
        )
        .bind(&file.filename)
        .bind(&file.key)
        .bind(&file.size)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert file '{}': {:?}", file.key, e);
            AppError::Database(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<FileRecord>> {
        sqlx::query_as::<_, FileRecord>(
            r#"
            SELECT id, filename, key, size, uploaded_at
            FROM files
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get file {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
