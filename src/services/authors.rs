//! Authors service

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, CreateAuthor},
    repository::Repository,
};

use super::require_text;

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let authors = self.repository.authors.list().await?;
        tracing::info!("Listed {} authors", authors.len());
        Ok(authors)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Author> {
        self.repository.authors.get_by_id(id).await?.ok_or_else(|| {
            tracing::warn!("Author {} not found", id);
            AppError::NotFound(format!("Author {} not found", id))
        })
    }

    /// Create an author. Optional fields are stored as submitted.
    pub async fn create(&self, data: &CreateAuthor) -> AppResult<Author> {
        require_text("nombre", &data.name)?;

        let author = self.repository.authors.create(data).await?;
        tracing::info!("Author created: {} (id={})", author.name, author.id);
        Ok(author)
    }
}
