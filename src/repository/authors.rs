//! Authors repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::insert_error;
use crate::{
    error::AppResult,
    models::author::{Author, CreateAuthor},
};

/// Queries against the `autores` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorsRepository: Send + Sync {
    /// List all authors ordered by name
    async fn list(&self) -> AppResult<Vec<Author>>;

    /// Get author by ID, `None` when no row matches
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Author>>;

    /// Insert an author and return it with its generated ID
    async fn create(&self, data: &CreateAuthor) -> AppResult<Author>;

    /// Delete an author; the store cascades to its books.
    /// Returns false when no row matched.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

#[derive(Clone)]
pub struct PgAuthorsRepository {
    pool: Pool<Postgres>,
}

impl PgAuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorsRepository for PgAuthorsRepository {
    async fn list(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>(
            "SELECT id, nombre, nacionalidad, fecha_nacimiento FROM autores ORDER BY nombre, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Author>> {
        let row = sqlx::query_as::<_, Author>(
            "SELECT id, nombre, nacionalidad, fecha_nacimiento FROM autores WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, data: &CreateAuthor) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO autores (nombre, nacionalidad, fecha_nacimiento)
            VALUES ($1, $2, $3)
            RETURNING id, nombre, nacionalidad, fecha_nacimiento
            "#,
        )
        .bind(&data.name)
        .bind(&data.nationality)
        .bind(data.birth_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            insert_error(
                e,
                || format!("Author '{}' already exists", data.name),
                || "Author references a missing row".to_string(),
            )
        })
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM autores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
