//! Product repository

use sqlx::SqlitePool;

use recordkeep_core::DbError;

use crate::models::{NewProduct, Product};

pub struct ProductRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Product>, DbError> {
        let rows = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, stock, description FROM products ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(&self, new: &NewProduct) -> Result<Product, DbError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, stock, description) VALUES (?, ?, ?, ?)
            RETURNING id, name, price, stock, description
            "#,
        )
        .bind(&new.name)
        .bind(new.price)
        .bind(new.stock)
        .bind(&new.description)
        .fetch_one(self.pool)
        .await?;
        Ok(product)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("product", id));
        }
        Ok(())
    }
}
