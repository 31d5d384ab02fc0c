//! Books service

use crate::{
    error::{AppError, AppResult},
    models::{
        author::Author,
        book::{Book, BookWithAuthor, CreateBook},
    },
    repository::Repository,
};

use super::require_text;

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = self.repository.books.list().await?;
        tracing::info!("Listed {} books", books.len());
        Ok(books)
    }

    /// Books written by an author. An unknown author is `NotFound`,
    /// not an empty list.
    pub async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<Book>> {
        let author = self.require_author(author_id).await?;
        let books = self.repository.books.list_by_author(author_id).await?;
        tracing::info!("Listed {} books of author {} (id={})", books.len(), author.name, author.id);
        Ok(books)
    }

    /// Get a book with its author nested
    pub async fn get_with_author(&self, id: i64) -> AppResult<BookWithAuthor> {
        let book = self.repository.books.get_by_id(id).await?.ok_or_else(|| {
            tracing::warn!("Book {} not found", id);
            AppError::NotFound(format!("Book {} not found", id))
        })?;

        let author = self.repository.authors.get_by_id(book.author_id).await?.ok_or_else(|| {
            AppError::Internal(format!("Book {} references missing author {}", book.id, book.author_id))
        })?;

        Ok(BookWithAuthor::new(book, author))
    }

    /// Create a book after checking its author exists.
    ///
    /// Title and ISBN are stored trimmed. A duplicate ISBN surfaces as
    /// `Conflict` from the store.
    pub async fn create(&self, data: &CreateBook) -> AppResult<BookWithAuthor> {
        require_text("titulo", &data.title)?;
        require_text("isbn", &data.isbn)?;

        let author = self.require_author(data.author_id).await?;

        let data = CreateBook {
            title: data.title.trim().to_string(),
            isbn: data.isbn.trim().to_string(),
            publication_year: data.publication_year,
            author_id: data.author_id,
        };

        let book = self.repository.books.create(&data).await.map_err(|e| {
            if let AppError::Conflict(msg) = &e {
                tracing::warn!("Book not created: {}", msg);
            }
            e
        })?;

        tracing::info!(
            "Book created: '{}' (id={}) by {}",
            book.title,
            book.id,
            author.name
        );
        Ok(BookWithAuthor::new(book, author))
    }

    async fn require_author(&self, author_id: i64) -> AppResult<Author> {
        self.repository.authors.get_by_id(author_id).await?.ok_or_else(|| {
            tracing::warn!("Author {} not found", author_id);
            AppError::NotFound(format!("Author {} does not exist", author_id))
        })
    }
}
