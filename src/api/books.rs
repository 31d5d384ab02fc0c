//! Books API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::book::{Book, BookWithAuthor, CreateBook},
    AppState,
};

use super::{IdPath, ValidatedJson};

/// List all books
#[utoipa::path(
    get,
    path = "/libros",
    tag = "libros",
    responses(
        (status = 200, description = "Book list", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// List the books of an author
#[utoipa::path(
    get,
    path = "/autores/{id}/libros",
    tag = "libros",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Books of the author", body = Vec<Book>),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_author_books(
    State(state): State<AppState>,
    IdPath(author_id): IdPath<i64>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list_by_author(author_id).await?;
    Ok(Json(books))
}

/// Get a book with its author
#[utoipa::path(
    get,
    path = "/libros/{id}",
    tag = "libros",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookWithAuthor),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> AppResult<Json<BookWithAuthor>> {
    let book = state.services.books.get_with_author(id).await?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/libros",
    tag = "libros",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = BookWithAuthor),
        (status = 400, description = "Invalid request body", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse),
        (status = 409, description = "ISBN already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateBook>,
) -> AppResult<(StatusCode, Json<BookWithAuthor>)> {
    let book = state.services.books.create(&data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    use crate::{
        api::test_support::{app, send},
        error::AppError,
        models::{author::Author, book::Book},
        repository::{MockAuthorsRepository, MockBooksRepository},
    };

    const CREATE_BODY: &str = r#"{"titulo":"La casa de los espíritus","isbn":"9788497592208","anio_publicacion":1982,"autor_id":7}"#;

    fn allende() -> Author {
        Author {
            id: 7,
            name: "Isabel Allende".to_string(),
            nationality: Some("Chilena".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1942, 8, 2),
        }
    }

    fn book(id: i64) -> Book {
        Book {
            id,
            title: "La casa de los espíritus".to_string(),
            isbn: "9788497592208".to_string(),
            publication_year: Some(1982),
            author_id: 7,
        }
    }

    #[tokio::test]
    async fn test_create_book_returns_created_with_author() {
        let mut authors = MockAuthorsRepository::new();
        authors.expect_get_by_id().with(eq(7)).returning(|_| Ok(Some(allende())));
        let mut books = MockBooksRepository::new();
        books.expect_create().returning(|_| Ok(book(11)));

        let (status, body) = send(app(authors, books), Method::POST, "/api/libros", Some(CREATE_BODY)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 11);
        assert_eq!(body["isbn"], "9788497592208");
        assert_eq!(body["autor_id"], 7);
        assert_eq!(body["autor"]["nombre"], "Isabel Allende");
    }

    #[tokio::test]
    async fn test_create_book_unknown_author_is_404() {
        let mut authors = MockAuthorsRepository::new();
        authors.expect_get_by_id().returning(|_| Ok(None));
        let mut books = MockBooksRepository::new();
        books.expect_create().never();

        let (status, body) = send(app(authors, books), Method::POST, "/api/libros", Some(CREATE_BODY)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NoSuchData");
    }

    #[tokio::test]
    async fn test_create_book_duplicate_isbn_is_409() {
        let mut authors = MockAuthorsRepository::new();
        authors.expect_get_by_id().returning(|_| Ok(Some(allende())));
        let mut books = MockBooksRepository::new();
        books
            .expect_create()
            .returning(|_| Err(AppError::Conflict("A book with ISBN 9788497592208 already exists".to_string())));

        let (status, body) = send(app(authors, books), Method::POST, "/api/libros", Some(CREATE_BODY)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "Duplicate");
    }

    #[tokio::test]
    async fn test_create_book_missing_fields_are_400() {
        let bodies = [
            r#"{"isbn":"9788497592208","autor_id":7}"#,
            r#"{"titulo":"Paula","autor_id":7}"#,
            r#"{"titulo":"Paula","isbn":"9788401341915"}"#,
            r#"{"titulo":"Paula","isbn":"9788401341915","autor_id":"siete"}"#,
            r#"{"titulo":"Paula","isbn":"9788401341915","autor_id":-1}"#,
        ];

        for body in bodies {
            let mut authors = MockAuthorsRepository::new();
            authors.expect_get_by_id().never();
            let mut books = MockBooksRepository::new();
            books.expect_create().never();
            let (status, _) = send(app(authors, books), Method::POST, "/api/libros", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        }
    }

    #[tokio::test]
    async fn test_get_book_with_author() {
        let mut authors = MockAuthorsRepository::new();
        authors.expect_get_by_id().with(eq(7)).returning(|_| Ok(Some(allende())));
        let mut books = MockBooksRepository::new();
        books.expect_get_by_id().with(eq(11)).returning(|id| Ok(Some(book(id))));

        let (status, body) = send(app(authors, books), Method::GET, "/api/libros/11", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["titulo"], "La casa de los espíritus");
        assert_eq!(body["anio_publicacion"], 1982);
        assert_eq!(body["autor"]["id"], 7);
        assert_eq!(body["autor"]["nombre"], "Isabel Allende");
    }

    #[tokio::test]
    async fn test_get_unknown_book_is_404() {
        let mut books = MockBooksRepository::new();
        books.expect_get_by_id().returning(|_| Ok(None));

        let (status, _) = send(app(MockAuthorsRepository::new(), books), Method::GET, "/api/libros/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_ids_beyond_32_bits_are_404() {
        let mut books = MockBooksRepository::new();
        books.expect_get_by_id().with(eq(3_000_000_000)).returning(|_| Ok(None));
        let (status, _) =
            send(app(MockAuthorsRepository::new(), books), Method::GET, "/api/libros/3000000000", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let mut authors = MockAuthorsRepository::new();
        authors.expect_get_by_id().with(eq(3_000_000_000)).returning(|_| Ok(None));
        let mut books = MockBooksRepository::new();
        books.expect_create().never();
        let (status, body) = send(
            app(authors, books),
            Method::POST,
            "/api/libros",
            Some(r#"{"titulo":"Paula","isbn":"9788401341915","autor_id":3000000000}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NoSuchData");
    }

    #[tokio::test]
    async fn test_create_book_accepts_padded_isbn() {
        let mut authors = MockAuthorsRepository::new();
        authors.expect_get_by_id().returning(|_| Ok(Some(allende())));
        let mut books = MockBooksRepository::new();
        books
            .expect_create()
            .withf(|data| data.isbn == "9788497592208" && data.title == "La casa de los espíritus")
            .returning(|_| Ok(book(11)));

        let (status, body) = send(
            app(authors, books),
            Method::POST,
            "/api/libros",
            Some(r#"{"titulo":" La casa de los espíritus ","isbn":"    9788497592208         ","autor_id":7}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["isbn"], "9788497592208");
    }

    #[tokio::test]
    async fn test_list_author_books() {
        let mut authors = MockAuthorsRepository::new();
        authors.expect_get_by_id().returning(|_| Ok(Some(allende())));
        let mut books = MockBooksRepository::new();
        books.expect_list_by_author().with(eq(7)).returning(|_| Ok(vec![book(11), book(12)]));

        let (status, body) = send(app(authors, books), Method::GET, "/api/autores/7/libros", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(2));
        assert_eq!(body[1]["id"], 12);
    }

    #[tokio::test]
    async fn test_list_books_of_unknown_author_is_404() {
        let mut authors = MockAuthorsRepository::new();
        authors.expect_get_by_id().returning(|_| Ok(None));

        let (status, _) = send(app(authors, MockBooksRepository::new()), Method::GET, "/api/autores/8/libros", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_books() {
        let mut books = MockBooksRepository::new();
        books.expect_list().returning(|| Ok(vec![book(1)]));

        let (status, body) = send(app(MockAuthorsRepository::new(), books), Method::GET, "/api/libros", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["autor_id"], 7);
        assert!(body[0].get("autor").is_none());
    }
}
