//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "0.1.0",
        description = "Authors and books REST API"
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        // Books
        books::list_books,
        books::list_author_books,
        books::get_book,
        books::create_book,
    ),
    components(
        schemas(
            crate::models::author::Author,
            crate::models::author::CreateAuthor,
            crate::models::book::Book,
            crate::models::book::BookWithAuthor,
            crate::models::book::CreateBook,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "autores", description = "Author management"),
        (name = "libros", description = "Book management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
