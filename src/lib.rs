//! Biblioteca
//!
//! A REST JSON API for managing authors and their books, layered as
//! request handling (`api`), business logic (`services`) and data access
//! (`repository`) over PostgreSQL.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
