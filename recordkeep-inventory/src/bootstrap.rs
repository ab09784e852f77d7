//! Schema creation and seed data

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::info;

/// (name, price, stock, description)
const SEED_PRODUCTS: [(&str, f64, i64, &str); 3] = [
    ("Laptop", 999.99, 10, "High-performance laptop"),
    ("Mouse", 29.99, 50, "Wireless mouse"),
    ("Keyboard", 79.99, 30, "Mechanical keyboard"),
];

/// Create the products table and seed it if empty. Returns rows inserted.
pub async fn run(pool: &SqlitePool) -> Result<u64> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL CHECK (price >= 0),
            stock INTEGER NOT NULL DEFAULT 0,
            description TEXT NOT NULL DEFAULT ''
        );
    "#,
    )
    .execute(pool)
    .await
    .context("failed to create products table")?;

    let mut tx = pool.begin().await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(&mut *tx)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    for (name, price, stock, description) in SEED_PRODUCTS {
        sqlx::query("INSERT INTO products (name, price, stock, description) VALUES (?, ?, ?, ?)")
            .bind(name)
            .bind(price)
            .bind(stock)
            .bind(description)
            .execute(&mut *tx)
            .await
            .context("failed to seed products")?;
    }
    tx.commit().await?;

    info!(rows = SEED_PRODUCTS.len(), "sample data inserted");
    Ok(SEED_PRODUCTS.len() as u64)
}
