//! Book repository

use chrono::Utc;
use sqlx::SqlitePool;

use recordkeep_core::{DbError, Page};

use crate::models::{Book, ListBooks, NewBook, SortColumn};

pub struct BookRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BookRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// One sorted page of books plus the total row count.
    ///
    /// Out-of-range pages yield no items; `total` is unaffected.
    pub async fn list(&self, req: &ListBooks) -> Result<Page<Book>, DbError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(self.pool)
            .await?;

        // Column and direction come from closed enums, never request text
        let tiebreak = match req.sort {
            SortColumn::Id => "",
            _ => ", id ASC",
        };
        let sql = format!(
            "SELECT id, title, author, year, created_at FROM books ORDER BY {} {}{} LIMIT ? OFFSET ?",
            req.sort.column(),
            req.order.keyword(),
            tiebreak,
        );

        let items = sqlx::query_as::<_, Book>(&sql)
            .bind(req.pagination.limit())
            .bind(req.pagination.offset())
            .fetch_all(self.pool)
            .await?;

        Ok(Page {
            items,
            total,
            page: req.pagination.page,
            per_page: req.pagination.per_page,
        })
    }

    pub async fn get(&self, id: i64) -> Result<Book, DbError> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, author, year, created_at FROM books WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("book", id))
    }

    pub async fn create(&self, new: &NewBook) -> Result<Book, DbError> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, year, created_at) VALUES (?, ?, ?, ?)
            RETURNING id, title, author, year, created_at
            "#,
        )
        .bind(&new.title)
        .bind(&new.author)
        .bind(new.year)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;
        Ok(book)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("book", id));
        }
        Ok(())
    }
}
