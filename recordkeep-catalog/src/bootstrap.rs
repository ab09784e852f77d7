//! Schema creation and seed data

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

/// (title, author, year)
const SEED_BOOKS: [(&str, &str, i64); 5] = [
    ("Python Crash Course", "Eric Matthes", 2019),
    ("Flask Web Development", "Miguel Grinberg", 2018),
    ("Clean Code", "Robert C. Martin", 2008),
    ("Effective Python", "Brett Slatkin", 2020),
    ("Design Patterns", "Erich Gamma", 1994),
];

/// Create the books table and seed it if empty. Returns rows inserted.
pub async fn run(pool: &SqlitePool) -> Result<u64> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            year INTEGER,
            created_at TEXT NOT NULL
        );
    "#,
    )
    .execute(pool)
    .await
    .context("failed to create books table")?;

    let mut tx = pool.begin().await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
        .fetch_one(&mut *tx)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    let now = Utc::now();
    for (title, author, year) in SEED_BOOKS {
        sqlx::query("INSERT INTO books (title, author, year, created_at) VALUES (?, ?, ?, ?)")
            .bind(title)
            .bind(author)
            .bind(year)
            .bind(now)
            .execute(&mut *tx)
            .await
            .context("failed to seed books")?;
    }
    tx.commit().await?;

    info!(rows = SEED_BOOKS.len(), "seeded books");
    Ok(SEED_BOOKS.len() as u64)
}
