//! Books repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::insert_error;
use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
};

/// Queries against the `libros` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksRepository: Send + Sync {
    /// List all books ordered by title
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// List the books of one author. Empty when the author has no books
    /// or does not exist.
    async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<Book>>;

    /// Get book by ID, `None` when no row matches
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Book>>;

    /// Insert a book. A duplicate ISBN or a dangling author ID is a `Conflict`.
    async fn create(&self, data: &CreateBook) -> AppResult<Book>;
}

#[derive(Clone)]
pub struct PgBooksRepository {
    pool: Pool<Postgres>,
}

impl PgBooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BooksRepository for PgBooksRepository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT id, titulo, isbn, anio_publicacion, autor_id FROM libros ORDER BY titulo, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, titulo, isbn, anio_publicacion, autor_id FROM libros
            WHERE autor_id = $1
            ORDER BY titulo, id
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            "SELECT id, titulo, isbn, anio_publicacion, autor_id FROM libros WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO libros (titulo, isbn, anio_publicacion, autor_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, titulo, isbn, anio_publicacion, autor_id
            "#,
        )
        .bind(&data.title)
        .bind(&data.isbn)
        .bind(data.publication_year)
        .bind(data.author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            insert_error(
                e,
                || format!("A book with ISBN {} already exists", data.isbn),
                || format!("Author {} does not exist", data.author_id),
            )
        })
    }
}
