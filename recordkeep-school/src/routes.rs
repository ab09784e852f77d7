//! School endpoints

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    routing::get,
    Router,
};

use recordkeep_core::{ApiError, AppState, DbError, Flash, FlashParams, ValidForm, ValidId};

use crate::models::{CourseForm, NewCourse, NewStudent, StudentForm};
use crate::repo::SchoolRepo;
use crate::views;

/// Number of rows on the top-students page
const TOP_STUDENTS: i64 = 3;

/// GET / - students ordered by name
async fn index(
    State(state): State<AppState>,
    Query(flash): Query<FlashParams>,
) -> Result<Html<String>, ApiError> {
    let students = SchoolRepo::new(state.pool()).list_students().await?;
    Ok(views::students("Students", &students, flash.into_flash().as_ref()))
}

/// GET /courses - courses with their students
async fn courses(
    State(state): State<AppState>,
    Query(flash): Query<FlashParams>,
) -> Result<Html<String>, ApiError> {
    let courses = SchoolRepo::new(state.pool()).list_course_overviews().await?;
    Ok(views::courses(&courses, flash.into_flash().as_ref()))
}

/// GET /top-students
async fn top_students(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let students = SchoolRepo::new(state.pool()).top_students(TOP_STUDENTS).await?;
    Ok(views::students("Top students", &students, None))
}

/// GET /add
async fn add_student_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let courses = SchoolRepo::new(state.pool()).list_courses().await?;
    Ok(views::student_form(None, &courses))
}

/// POST /add
async fn add_student(
    State(state): State<AppState>,
    ValidForm(form): ValidForm<StudentForm>,
) -> Result<Redirect, ApiError> {
    let new = NewStudent::try_from(form)?;
    let student = SchoolRepo::new(state.pool()).create_student(&new).await?;
    tracing::info!(id = student.id, "student added");
    Ok(Flash::success("Student added successfully!").redirect("/"))
}

/// GET /edit/{id}
async fn edit_student_form(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Html<String>, ApiError> {
    let repo = SchoolRepo::new(state.pool());
    let student = repo.get_student(id).await?;
    let courses = repo.list_courses().await?;
    Ok(views::student_form(Some(&student), &courses))
}

/// POST /edit/{id} - full-field overwrite
async fn edit_student(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    ValidForm(form): ValidForm<StudentForm>,
) -> Result<Redirect, ApiError> {
    let repo = SchoolRepo::new(state.pool());
    repo.get_student(id).await?;
    let new = NewStudent::try_from(form)?;
    repo.update_student(id, &new).await?;
    tracing::info!(id, "student updated");
    Ok(Flash::success("Student updated!").redirect("/"))
}

/// GET /delete/{id}
async fn delete_student(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Redirect, ApiError> {
    SchoolRepo::new(state.pool()).delete_student(id).await?;
    tracing::info!(id, "student deleted");
    Ok(Flash::danger("Student deleted!").redirect("/"))
}

/// GET /add-course
async fn add_course_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let teachers = SchoolRepo::new(state.pool()).list_teachers().await?;
    Ok(views::course_form(&teachers))
}

/// POST /add-course
async fn add_course(
    State(state): State<AppState>,
    ValidForm(form): ValidForm<CourseForm>,
) -> Result<Redirect, ApiError> {
    let new = NewCourse::try_from(form)?;
    let course = SchoolRepo::new(state.pool()).create_course(&new).await?;
    tracing::info!(id = course.id, "course added");
    Ok(Flash::success("Course added!").redirect("/courses"))
}

/// GET /delete-course/{id} - refused while students are enrolled
async fn delete_course(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Redirect, ApiError> {
    match SchoolRepo::new(state.pool()).delete_course(id).await {
        Ok(()) => {
            tracing::info!(id, "course deleted");
            Ok(Flash::danger("Course deleted!").redirect("/courses"))
        }
        Err(DbError::ForeignKey(_)) => Err(ApiError::conflict(format!(
            "course '{}' still has enrolled students",
            id
        ))),
        Err(e) => Err(e.into()),
    }
}

/// School routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/courses", get(courses))
        .route("/top-students", get(top_students))
        .route("/add", get(add_student_form).post(add_student))
        .route("/edit/{id}", get(edit_student_form).post(edit_student))
        .route("/delete/{id}", get(delete_student))
        .route("/add-course", get(add_course_form).post(add_course))
        .route("/delete-course/{id}", get(delete_course))
}
