//! School repository
//!
//! - list queries JOIN for related names (no N+1)
//! - writes rely on the schema's UNIQUE and FOREIGN KEY constraints
//!   rather than check-then-insert

use std::collections::HashMap;

use sqlx::{Row, SqlitePool};

use recordkeep_core::DbError;

use crate::models::{
    Course, CourseOverview, NewCourse, NewStudent, Student, StudentListing, Teacher,
};

pub struct SchoolRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SchoolRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    // ------------------------------------------------------------------
    // Students
    // ------------------------------------------------------------------

    /// All students ordered by name, with their course name.
    pub async fn list_students(&self) -> Result<Vec<StudentListing>, DbError> {
        let rows = sqlx::query_as::<_, StudentListing>(
            r#"
            SELECT s.id, s.name, s.email, s.course_id, c.name AS course_name
            FROM students s
            JOIN courses c ON c.id = s.course_id
            ORDER BY s.name ASC, s.id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// First `limit` students in insertion order.
    pub async fn top_students(&self, limit: i64) -> Result<Vec<StudentListing>, DbError> {
        let rows = sqlx::query_as::<_, StudentListing>(
            r#"
            SELECT s.id, s.name, s.email, s.course_id, c.name AS course_name
            FROM students s
            JOIN courses c ON c.id = s.course_id
            ORDER BY s.id ASC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_student(&self, id: i64) -> Result<Student, DbError> {
        sqlx::query_as::<_, Student>("SELECT id, name, email, course_id FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("student", id))
    }

    pub async fn create_student(&self, new: &NewStudent) -> Result<Student, DbError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, email, course_id) VALUES (?, ?, ?)
            RETURNING id, name, email, course_id
            "#,
        )
        .bind(&new.name)
        .bind(new.email.as_str())
        .bind(new.course_id)
        .fetch_one(self.pool)
        .await?;
        Ok(student)
    }

    /// Overwrite every field of an existing student.
    pub async fn update_student(&self, id: i64, new: &NewStudent) -> Result<Student, DbError> {
        sqlx::query_as::<_, Student>(
            r#"
            UPDATE students SET name = ?, email = ?, course_id = ?
            WHERE id = ?
            RETURNING id, name, email, course_id
            "#,
        )
        .bind(&new.name)
        .bind(new.email.as_str())
        .bind(new.course_id)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("student", id))
    }

    pub async fn delete_student(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("student", id));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Courses and teachers
    // ------------------------------------------------------------------

    pub async fn list_courses(&self) -> Result<Vec<Course>, DbError> {
        let rows = sqlx::query_as::<_, Course>(
            "SELECT id, name, description, teacher_id FROM courses ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Courses with teacher name and students, in two queries total.
    pub async fn list_course_overviews(&self) -> Result<Vec<CourseOverview>, DbError> {
        let course_rows = sqlx::query(
            r#"
            SELECT c.id, c.name, c.description, c.teacher_id, t.name AS teacher_name
            FROM courses c
            JOIN teachers t ON t.id = c.teacher_id
            ORDER BY c.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, course_id FROM students ORDER BY name ASC, id ASC",
        )
        .fetch_all(self.pool)
        .await?;

        let mut by_course: HashMap<i64, Vec<Student>> = HashMap::new();
        for student in students {
            by_course.entry(student.course_id).or_default().push(student);
        }

        Ok(course_rows
            .into_iter()
            .map(|r| {
                let course = Course {
                    id: r.get("id"),
                    name: r.get("name"),
                    description: r.get("description"),
                    teacher_id: r.get("teacher_id"),
                };
                let students = by_course.remove(&course.id).unwrap_or_default();
                CourseOverview {
                    course,
                    teacher_name: r.get("teacher_name"),
                    students,
                }
            })
            .collect())
    }

    pub async fn create_course(&self, new: &NewCourse) -> Result<Course, DbError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (name, description, teacher_id) VALUES (?, ?, ?)
            RETURNING id, name, description, teacher_id
            "#,
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.teacher_id)
        .fetch_one(self.pool)
        .await?;
        Ok(course)
    }

    /// Delete a course. Fails with [`DbError::ForeignKey`] while students
    /// still reference it.
    pub async fn delete_course(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("course", id));
        }
        Ok(())
    }

    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, DbError> {
        let rows = sqlx::query_as::<_, Teacher>("SELECT id, name, email FROM teachers ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }
}
