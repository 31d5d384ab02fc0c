//! Repository layer for database operations

pub mod authors;
pub mod books;
pub mod schema;

use std::sync::Arc;

use sqlx::{error::ErrorKind, Pool, Postgres};

use crate::error::AppError;

pub use authors::{AuthorsRepository, PgAuthorsRepository};
pub use books::{BooksRepository, PgBooksRepository};

#[cfg(test)]
pub use authors::MockAuthorsRepository;
#[cfg(test)]
pub use books::MockBooksRepository;

/// Main repository struct holding one store per entity
#[derive(Clone)]
pub struct Repository {
    pub authors: Arc<dyn AuthorsRepository>,
    pub books: Arc<dyn BooksRepository>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: Arc::new(PgAuthorsRepository::new(pool.clone())),
            books: Arc::new(PgBooksRepository::new(pool)),
        }
    }

    /// Assemble a repository from explicit stores
    pub fn from_parts(authors: Arc<dyn AuthorsRepository>, books: Arc<dyn BooksRepository>) -> Self {
        Self { authors, books }
    }
}

/// Classify a failed INSERT.
///
/// Unique and foreign-key violations become `Conflict`; every other failure
/// stays a store error.
pub(crate) fn insert_error(
    err: sqlx::Error,
    on_unique: impl FnOnce() -> String,
    on_foreign_key: impl FnOnce() -> String,
) -> AppError {
    let kind = err.as_database_error().map(|db| db.kind());
    match kind {
        Some(ErrorKind::UniqueViolation) => AppError::Conflict(on_unique()),
        Some(ErrorKind::ForeignKeyViolation) => AppError::Conflict(on_foreign_key()),
        _ => AppError::Database(err),
    }
}
