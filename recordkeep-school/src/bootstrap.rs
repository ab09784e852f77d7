//! Schema creation and seed data
//!
//! Tables are created if absent; seed rows go in only when a table is empty.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::{info, warn};

const SEED_TEACHERS: [(&str, &str); 2] = [
    ("Dr. Sharma", "sharma@gmail.com"),
    ("Prof. Mehta", "mehta@gmail.com"),
];

/// (name, description); the n-th course goes to the n-th teacher by id
const SEED_COURSES: [(&str, &str); 2] = [
    ("Python Basics", "Intro to Python"),
    ("Web Development", "Flask & HTML"),
];

/// Create tables and insert seed rows. Returns the number of rows inserted.
pub async fn run(pool: &SqlitePool) -> Result<u64> {
    create_schema(pool).await?;
    let teachers = seed_teachers(pool).await?;
    let courses = seed_courses(pool).await?;
    Ok(teachers + courses)
}

pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teachers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE
        );
    "#,
    )
    .execute(pool)
    .await
    .context("failed to create teachers table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS courses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            teacher_id INTEGER NOT NULL REFERENCES teachers(id) ON DELETE RESTRICT
        );
    "#,
    )
    .execute(pool)
    .await
    .context("failed to create courses table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            course_id INTEGER NOT NULL REFERENCES courses(id) ON DELETE RESTRICT
        );
    "#,
    )
    .execute(pool)
    .await
    .context("failed to create students table")?;

    info!("school schema ready");
    Ok(())
}

async fn seed_teachers(pool: &SqlitePool) -> Result<u64> {
    let mut tx = pool.begin().await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM teachers")
        .fetch_one(&mut *tx)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    for (name, email) in SEED_TEACHERS {
        sqlx::query("INSERT INTO teachers (name, email) VALUES (?, ?)")
            .bind(name)
            .bind(email)
            .execute(&mut *tx)
            .await
            .context("failed to seed teachers")?;
    }
    tx.commit().await?;

    info!(rows = SEED_TEACHERS.len(), "seeded teachers");
    Ok(SEED_TEACHERS.len() as u64)
}

async fn seed_courses(pool: &SqlitePool) -> Result<u64> {
    let mut tx = pool.begin().await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM courses")
        .fetch_one(&mut *tx)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    let teacher_ids: Vec<(i64,)> = sqlx::query_as("SELECT id FROM teachers ORDER BY id LIMIT ?")
        .bind(SEED_COURSES.len() as i64)
        .fetch_all(&mut *tx)
        .await?;
    if teacher_ids.len() < SEED_COURSES.len() {
        warn!(
            teachers = teacher_ids.len(),
            "not enough teachers to seed courses, skipping"
        );
        return Ok(0);
    }

    for ((name, description), (teacher_id,)) in SEED_COURSES.into_iter().zip(teacher_ids) {
        sqlx::query("INSERT INTO courses (name, description, teacher_id) VALUES (?, ?, ?)")
            .bind(name)
            .bind(description)
            .bind(teacher_id)
            .execute(&mut *tx)
            .await
            .context("failed to seed courses")?;
    }
    tx.commit().await?;

    info!(rows = SEED_COURSES.len(), "seeded courses");
    Ok(SEED_COURSES.len() as u64)
}
