//! Database module for SQLite persistence.
//!
//! Each collection is a table holding one row per document; list and object fields are
//! stored as JSON text.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Create the three collections if they don't exist.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "TeachersList" (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            teacher_id INTEGER NOT NULL,
            subjects TEXT NOT NULL DEFAULT '[]'
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Singleton collections: `revision` starts at 1 on insert and is bumped by every upsert.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "SubjectsList" (
            id TEXT PRIMARY KEY,
            subjects TEXT NOT NULL DEFAULT '[]',
            sections TEXT NOT NULL DEFAULT 'null',
            revision INTEGER NOT NULL DEFAULT 1
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "Timetable" (
            id TEXT PRIMARY KEY,
            timetable TEXT NOT NULL DEFAULT 'null',
            revision INTEGER NOT NULL DEFAULT 1
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
