//! Minimal HTML page shell shared by the form-driven apps

use std::fmt::Write;

use axum::response::Html;

use crate::flash::Flash;

/// Escape text for element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap `body` in a full document with a nav bar and optional flash banner.
///
/// `body` must already be escaped.
pub fn page(title: &str, nav: &[(&str, &str)], flash: Option<&Flash>, body: &str) -> Html<String> {
    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n<nav>",
        escape(title)
    );
    for (href, label) in nav {
        let _ = write!(out, "<a href=\"{}\">{}</a> ", escape(href), escape(label));
    }
    out.push_str("</nav>\n");
    if let Some(flash) = flash {
        let _ = writeln!(
            out,
            "<div class=\"flash flash-{}\">{}</div>",
            flash.level.as_str(),
            escape(&flash.message)
        );
    }
    let _ = write!(out, "<h1>{}</h1>\n{}\n</body>\n</html>\n", escape(title), body);
    Html(out)
}

/// `<option>` list for a foreign-key select, marking `selected`.
pub fn options<'a>(choices: impl IntoIterator<Item = (i64, &'a str)>, selected: Option<i64>) -> String {
    let mut out = String::new();
    for (id, label) in choices {
        let sel = if Some(id) == selected { " selected" } else { "" };
        let _ = write!(out, "<option value=\"{}\"{}>{}</option>", id, sel, escape(label));
    }
    out
}
