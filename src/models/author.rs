//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Author row from the `autores` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i64,
    #[serde(rename = "nombre")]
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[serde(rename = "nacionalidad")]
    #[sqlx(rename = "nacionalidad")]
    pub nationality: Option<String>,
    /// ISO date, `YYYY-MM-DD`
    #[serde(rename = "fecha_nacimiento")]
    #[sqlx(rename = "fecha_nacimiento")]
    pub birth_date: Option<NaiveDate>,
}

/// Create author request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, max = 255, message = "nombre must be between 1 and 255 characters"))]
    pub name: String,
    #[serde(rename = "nacionalidad")]
    #[validate(length(max = 100, message = "nacionalidad must be at most 100 characters"))]
    pub nationality: Option<String>,
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: Option<NaiveDate>,
}
