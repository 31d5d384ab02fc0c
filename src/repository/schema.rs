//! Table bootstrap
//!
//! Creates the `autores` and `libros` tables when they are missing. There is
//! no versioning: statements are idempotent and run on every startup when
//! `database.init_schema` is set.

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS autores (
        id BIGSERIAL PRIMARY KEY,
        nombre VARCHAR(255) NOT NULL,
        nacionalidad VARCHAR(100),
        fecha_nacimiento DATE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS libros (
        id BIGSERIAL PRIMARY KEY,
        titulo VARCHAR(255) NOT NULL,
        isbn VARCHAR(20) NOT NULL UNIQUE,
        anio_publicacion INTEGER,
        autor_id BIGINT NOT NULL REFERENCES autores(id) ON DELETE CASCADE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_libros_autor_id ON libros (autor_id)",
];

/// Create missing tables and indexes
pub async fn ensure_schema(pool: &Pool<Postgres>) -> AppResult<()> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
