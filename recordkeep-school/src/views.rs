//! HTML rendering for the school pages

use std::fmt::Write;

use axum::response::Html;

use recordkeep_core::html::{escape, options, page};
use recordkeep_core::Flash;

use crate::models::{Course, CourseOverview, Student, StudentListing, Teacher};

const NAV: [(&str, &str); 5] = [
    ("/", "Students"),
    ("/courses", "Courses"),
    ("/top-students", "Top students"),
    ("/add", "Add student"),
    ("/add-course", "Add course"),
];

pub fn students(title: &str, students: &[StudentListing], flash: Option<&Flash>) -> Html<String> {
    let mut body = String::new();
    if students.is_empty() {
        body.push_str("<p>No students yet.</p>");
    } else {
        body.push_str(
            "<table>\n<tr><th>Name</th><th>Email</th><th>Course</th><th></th></tr>\n",
        );
        for s in students {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td>\
                 <td><a href=\"/edit/{id}\">Edit</a> <a href=\"/delete/{id}\">Delete</a></td></tr>",
                escape(&s.name),
                escape(&s.email),
                escape(&s.course_name),
                id = s.id,
            );
        }
        body.push_str("</table>");
    }
    page(title, &NAV, flash, &body)
}

pub fn courses(courses: &[CourseOverview], flash: Option<&Flash>) -> Html<String> {
    let mut body = String::new();
    for overview in courses {
        let c = &overview.course;
        let _ = write!(
            body,
            "<section>\n<h2>{}</h2>\n<p>{}</p>\n<p>Teacher: {}</p>\n<ul>",
            escape(&c.name),
            escape(&c.description),
            escape(&overview.teacher_name),
        );
        for s in &overview.students {
            let _ = write!(body, "<li>{} ({})</li>", escape(&s.name), escape(&s.email));
        }
        let _ = writeln!(
            body,
            "</ul>\n<a href=\"/delete-course/{}\">Delete course</a>\n</section>",
            c.id
        );
    }
    if courses.is_empty() {
        body.push_str("<p>No courses yet.</p>");
    }
    page("Courses", &NAV, flash, &body)
}

/// Add (`student = None`) or edit form.
pub fn student_form(student: Option<&Student>, courses: &[Course]) -> Html<String> {
    let (title, action) = match student {
        Some(s) => ("Edit student", format!("/edit/{}", s.id)),
        None => ("Add student", "/add".to_string()),
    };
    let name = student.map(|s| s.name.as_str()).unwrap_or_default();
    let email = student.map(|s| s.email.as_str()).unwrap_or_default();
    let selected = student.map(|s| s.course_id);

    let body = format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label>Name <input name=\"name\" value=\"{name}\" required></label>\n\
         <label>Email <input name=\"email\" type=\"email\" value=\"{email}\" required></label>\n\
         <label>Course <select name=\"course_id\">{opts}</select></label>\n\
         <button type=\"submit\">Save</button>\n</form>",
        action = action,
        name = escape(name),
        email = escape(email),
        opts = options(courses.iter().map(|c| (c.id, c.name.as_str())), selected),
    );
    page(title, &NAV, None, &body)
}

pub fn course_form(teachers: &[Teacher]) -> Html<String> {
    let body = format!(
        "<form method=\"post\" action=\"/add-course\">\n\
         <label>Name <input name=\"name\" required></label>\n\
         <label>Description <textarea name=\"description\"></textarea></label>\n\
         <label>Teacher <select name=\"teacher_id\">{}</select></label>\n\
         <button type=\"submit\">Save</button>\n</form>",
        options(teachers.iter().map(|t| (t.id, t.name.as_str())), None),
    );
    page("Add course", &NAV, None, &body)
}
