//! Book model and related types

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::author::Author;

/// Book row from the `libros` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    #[serde(rename = "titulo")]
    #[sqlx(rename = "titulo")]
    pub title: String,
    /// Unique across all books
    pub isbn: String,
    #[serde(rename = "anio_publicacion")]
    #[sqlx(rename = "anio_publicacion")]
    pub publication_year: Option<i32>,
    #[serde(rename = "autor_id")]
    #[sqlx(rename = "autor_id")]
    pub author_id: i64,
}

/// Book detail with its author nested under `autor`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookWithAuthor {
    #[serde(flatten)]
    pub book: Book,
    #[serde(rename = "autor")]
    pub author: Author,
}

impl BookWithAuthor {
    pub fn new(book: Book, author: Author) -> Self {
        Self { book, author }
    }
}

/// Create book request
///
/// `titulo` and `isbn` are trimmed while decoding, so length rules apply to
/// the value that gets stored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[serde(rename = "titulo", deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 255, message = "titulo must be between 1 and 255 characters"))]
    pub title: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 20, message = "isbn must be between 1 and 20 characters"))]
    pub isbn: String,
    #[serde(rename = "anio_publicacion")]
    pub publication_year: Option<i32>,
    #[serde(rename = "autor_id")]
    #[validate(range(min = 1, message = "autor_id must be a positive integer"))]
    pub author_id: i64,
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}
