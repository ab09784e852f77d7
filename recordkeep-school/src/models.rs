//! School records and the typed commands that create them

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use recordkeep_core::validation::{self, EmailAddress, ValidationError};

/// Maximum length for person and course names
const MAX_NAME_LEN: usize = 100;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub teacher_id: i64,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub course_id: i64,
}

/// Student joined with the name of their course
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentListing {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub course_id: i64,
    pub course_name: String,
}

/// Course with its teacher's name and enrolled students
#[derive(Debug, Clone, Serialize)]
pub struct CourseOverview {
    pub course: Course,
    pub teacher_name: String,
    pub students: Vec<Student>,
}

/// Raw student form fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub course_id: Option<String>,
}

/// Validated student fields, used for both insert and full overwrite
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: EmailAddress,
    pub course_id: i64,
}

impl TryFrom<StudentForm> for NewStudent {
    type Error = ValidationError;

    fn try_from(form: StudentForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: validation::required_text("name", form.name, MAX_NAME_LEN)?,
            email: EmailAddress::parse(form.email)?,
            course_id: validation::required_id("course_id", form.course_id)?,
        })
    }
}

/// Raw course form fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub teacher_id: Option<String>,
}

/// Validated course fields
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub description: String,
    pub teacher_id: i64,
}

impl TryFrom<CourseForm> for NewCourse {
    type Error = ValidationError;

    fn try_from(form: CourseForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: validation::required_text("name", form.name, MAX_NAME_LEN)?,
            description: validation::optional_text(form.description),
            teacher_id: validation::required_id("teacher_id", form.teacher_id)?,
        })
    }
}
