//! Load a sample author and book into the configured database.

use anyhow::Context;
use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;

use biblioteca_server::{
    config::AppConfig,
    models::{CreateAuthor, CreateBook},
    repository::{schema, Repository},
    services::Services,
    AppError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("biblioteca_server={},seed=info", config.logging.level).into()),
        )
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    schema::ensure_schema(&pool).await?;

    let services = Services::new(Repository::new(pool.clone()));

    let author = services
        .authors
        .create(&CreateAuthor {
            name: "Gabriel García Márquez".to_string(),
            nationality: Some("Colombiana".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1927, 3, 6),
        })
        .await?;
    tracing::info!("Seeded author {:?}", author);

    let book = CreateBook {
        title: "Cien años de soledad".to_string(),
        isbn: "9783161484100".to_string(),
        publication_year: Some(1967),
        author_id: author.id,
    };
    match services.books.create(&book).await {
        Ok(created) => tracing::info!("Seeded book {:?}", created.book),
        Err(AppError::Conflict(msg)) => tracing::warn!("Skipping book: {}", msg),
        Err(e) => return Err(e.into()),
    }

    for book in services.books.list_by_author(author.id).await? {
        println!("{} ({}) - ISBN {}", book.title, book.publication_year.unwrap_or_default(), book.isbn);
    }

    pool.close().await;
    Ok(())
}
